//! Staff ledger engine
//!
//! This crate keeps employees, their leave and work schedules, and their
//! expense claims in memory. It exposes filtered and sorted views of each
//! collection, applies validated commands with all-or-nothing semantics, and
//! records a linear history so any committed change can be undone and redone.
//!
//! # Example
//!
//! ```
//! use staff_ledger::commands::{Command, FilterCriteria, execute};
//! use staff_ledger::config::EngineConfig;
//! use staff_ledger::query::KeywordSet;
//! use staff_ledger::source::DirectorySource;
//! use staff_ledger::state::Model;
//!
//! let mut model = Model::from_source(
//!     &DirectorySource::new("./data/sample"),
//!     &EngineConfig::default(),
//! )?;
//!
//! let criteria = FilterCriteria::new(Some(KeywordSet::parse("IT")), None, None)?;
//! let result = execute(Command::Filter(criteria), &mut model)?;
//! assert_eq!(result.feedback, "2 persons listed!");
//! # Ok::<(), staff_ledger::error::EngineError>(())
//! ```

#![warn(missing_docs)]

pub mod commands;
pub mod config;
pub mod error;
pub mod models;
pub mod query;
pub mod source;
pub mod state;
pub mod store;
