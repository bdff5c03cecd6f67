use crate::compress;
use crate::error::PersistError;
use crate::format::*;
use crate::snapshot::{AuxState, GridSnapshot, PayloadRef};

/// Serialize progress into the snapshot binary format.
///
/// Layout: header (16B) + LZ4 size-prepended JSON payload.
pub fn encode(grid: &GridSnapshot, aux: &AuxState) -> Result<Vec<u8>, PersistError> {
    let json = serde_json::to_vec(&PayloadRef { grid, aux })
        .map_err(|e| PersistError::PayloadError(e.to_string()))?;
    let payload = compress::compress_payload(&json);
    let payload_len = u32::try_from(payload.len())
        .map_err(|_| PersistError::PayloadError(format!("{} bytes is too large", payload.len())))?;

    let mut flags = 0;
    if aux.mask_image.is_some() {
        flags |= FLAG_HAS_MASK;
    }
    if aux.completed {
        flags |= FLAG_COMPLETED;
    }

    let header = SnapshotHeader {
        magic: MAGIC,
        version: FORMAT_VERSION,
        flags,
        payload_len,
        _reserved: 0,
    };

    let mut output = Vec::with_capacity(HEADER_SIZE + payload.len());
    output.extend_from_slice(bytemuck::bytes_of(&header));
    output.extend_from_slice(&payload);
    Ok(output)
}
