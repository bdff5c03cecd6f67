/// Errors raised while turning images into exposure patterns and back.
#[derive(Debug, thiserror::Error)]
pub enum MaskError {
    #[error("mask image could not be decoded: {0}")]
    Decode(String),

    #[error("mask image could not be encoded: {0}")]
    Encode(String),

    #[error("mask worker task failed: {0}")]
    TaskFailed(String),
}
