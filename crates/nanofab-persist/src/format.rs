/// Magic bytes identifying a nanofab progress snapshot.
pub const MAGIC: [u8; 4] = *b"NFAB";

/// Current snapshot format version.
pub const FORMAT_VERSION: u16 = 1;

/// Size of the file header in bytes.
pub const HEADER_SIZE: usize = 16;

/// Header flag: the snapshot carries a saved mask image.
pub const FLAG_HAS_MASK: u16 = 0x0001;

/// Header flag: the level was completed when the snapshot was taken.
pub const FLAG_COMPLETED: u16 = 0x0002;

/// Snapshot file header. Fixed 16 bytes, repr(C) for byte-level serialization.
///
/// `payload_len` is the length of the compressed payload that follows.
#[repr(C)]
#[derive(Debug, Clone, Copy, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SnapshotHeader {
    pub magic: [u8; 4],
    pub version: u16,
    pub flags: u16,
    pub payload_len: u32,
    pub _reserved: u32,
}
