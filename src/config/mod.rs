//! Configuration loading for the staff ledger engine.
//!
//! This module loads engine settings (history capacity, default sort order)
//! from a YAML file in a configuration directory.
//!
//! # Example
//!
//! ```no_run
//! use staff_ledger::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/default").unwrap();
//! println!("Default sort order: {:?}", config.default_sort_order());
//! ```

mod loader;
mod types;

pub(crate) use loader::load_yaml;
pub use loader::{CONFIG_FILE_NAME, ConfigLoader};
pub use types::EngineConfig;
