//! # CabinetKit Settings
//!
//! Loading, validating and saving the factory catalog and module files.
//! Both `.json` and `.toml` are accepted, chosen by file extension.

pub mod error;
pub mod factory;
pub mod format;
pub mod modules;

pub use error::{SettingsError, SettingsResult};
pub use factory::{default_factory_path, load_factory, save_factory, validate_factory};
pub use format::FileFormat;
pub use modules::{load_modules, save_modules};
