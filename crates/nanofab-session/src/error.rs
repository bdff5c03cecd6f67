use nanofab_core::CoreError;

/// Failures of the session itself. Process outcomes are reported, not raised.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("session actor has shut down")]
    Closed,

    #[error("unknown level '{0}'")]
    UnknownLevel(String),

    #[error("invalid session config: {0}")]
    Config(String),

    #[error(transparent)]
    Core(#[from] CoreError),
}
