use crate::error::PersistError;

/// Compress a snapshot payload using LZ4.
pub fn compress_payload(data: &[u8]) -> Vec<u8> {
    lz4_flex::compress_prepend_size(data)
}

/// Decompress an LZ4-compressed payload.
pub fn decompress_payload(compressed: &[u8]) -> Result<Vec<u8>, PersistError> {
    lz4_flex::decompress_size_prepended(compressed)
        .map_err(|e| PersistError::DecompressError(e.to_string()))
}
