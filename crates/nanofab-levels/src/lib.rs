pub mod defaults;
pub mod loader;
pub mod validator;

pub use defaults::builtin_levels;
pub use loader::{load_all_levels, load_levels_from_str, LoadError};
pub use validator::{validate_levels, ValidationError};
