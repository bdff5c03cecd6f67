pub mod config;
pub mod error;
pub mod handle;
pub mod session;

#[cfg(test)]
mod test_support;

pub use config::SessionConfig;
pub use error::SessionError;
pub use handle::SessionHandle;
pub use session::{ResetReport, Session, SessionView, StepReport};
