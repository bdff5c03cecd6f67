pub mod compat;
pub mod compress;
pub mod error;
pub mod format;
pub mod load;
pub mod save;
pub mod snapshot;
pub mod store;

pub use error::PersistError;
pub use format::SnapshotHeader;
pub use load::decode;
pub use save::encode;
pub use snapshot::{AuxState, GridSnapshot, SavedProgress};
pub use store::{DirStore, MemoryStore, ProgressStore};
