use crate::compat;
use crate::compress;
use crate::error::PersistError;
use crate::format::*;
use crate::snapshot::{Payload, SavedProgress};

/// Load and parse a snapshot from raw bytes.
pub fn decode(bytes: &[u8]) -> Result<SavedProgress, PersistError> {
    if bytes.len() < HEADER_SIZE {
        return Err(PersistError::FileTooSmall(bytes.len(), HEADER_SIZE));
    }

    let header: SnapshotHeader = bytemuck::pod_read_unaligned(&bytes[..HEADER_SIZE]);
    let warnings = compat::validate_header(&header)?;

    let payload_end = HEADER_SIZE + header.payload_len as usize;
    if bytes.len() < payload_end {
        return Err(PersistError::TruncatedFile {
            expected: payload_end,
            actual: bytes.len(),
        });
    }

    let json = compress::decompress_payload(&bytes[HEADER_SIZE..payload_end])?;
    let payload: Payload =
        serde_json::from_slice(&json).map_err(|e| PersistError::PayloadError(e.to_string()))?;

    Ok(SavedProgress {
        grid: payload.grid,
        aux: payload.aux,
        warnings,
    })
}
