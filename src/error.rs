//! Error types for the staff ledger engine.
//!
//! Every failure a command can produce is a variant of [`EngineError`]. All of
//! them are recoverable and carry a message meant to be shown to the user.

use std::fmt;

use thiserror::Error;

/// The kind of record a collection-level error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordKind {
    /// An employee.
    Person,
    /// A leave or work entry.
    Schedule,
    /// An expense claim.
    Expense,
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RecordKind::Person => "person",
            RecordKind::Schedule => "schedule",
            RecordKind::Expense => "expense",
        };
        f.write_str(name)
    }
}

/// The main error type for the engine.
///
/// # Example
///
/// ```
/// use staff_ledger::error::EngineError;
///
/// let error = EngineError::NoUndoableState;
/// assert_eq!(error.to_string(), "No more commands to undo!");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// A command argument or record field was malformed.
    #[error("{message}")]
    Validation {
        /// Description of what was wrong.
        message: String,
    },

    /// The command needs at least one visible record and there were none.
    #[error("{message}")]
    EmptySelection {
        /// Description of the missing selection.
        message: String,
    },

    /// Every target of the command was already in the requested state.
    #[error("{message}")]
    NoEffect {
        /// Description of why nothing changed.
        message: String,
    },

    /// An equivalent record already exists in the collection.
    #[error("This {kind} already exists: {key}")]
    DuplicateRecord {
        /// The kind of record.
        kind: RecordKind,
        /// The identity of the conflicting record.
        key: String,
    },

    /// The referenced record is not in the collection.
    #[error("No such {kind}: {key}")]
    RecordNotFound {
        /// The kind of record.
        kind: RecordKind,
        /// The identity that was looked up.
        key: String,
    },

    /// A displayed index did not point into the filtered view.
    #[error("The {kind} index provided is invalid: {index}")]
    InvalidIndex {
        /// The view the index was resolved against.
        kind: RecordKind,
        /// The one-based index that was supplied.
        index: usize,
    },

    /// Undo was requested at the oldest state.
    #[error("No more commands to undo!")]
    NoUndoableState,

    /// Redo was requested at the newest state.
    #[error("No more commands to redo!")]
    NoRedoableState,

    /// Configuration or data file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration or data file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },
}

impl EngineError {
    /// Creates a [`EngineError::Validation`] error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Creates a [`EngineError::EmptySelection`] error.
    pub fn empty_selection(message: impl Into<String>) -> Self {
        Self::EmptySelection {
            message: message.into(),
        }
    }

    /// Creates a [`EngineError::NoEffect`] error.
    pub fn no_effect(message: impl Into<String>) -> Self {
        Self::NoEffect {
            message: message.into(),
        }
    }

    /// Returns true for errors caused by user input or model state, as opposed
    /// to problems reading configuration from disk.
    pub fn is_user_error(&self) -> bool {
        !matches!(
            self,
            EngineError::ConfigNotFound { .. } | EngineError::ConfigParseError { .. }
        )
    }
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
