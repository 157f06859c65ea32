//! Validated field types shared by the record models.
//!
//! Each type checks its invariant on construction and on deserialization, so
//! a record holding one of these is always well-formed.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Message shown when an employee id is malformed.
pub const MESSAGE_EMPLOYEE_ID_CONSTRAINTS: &str =
    "Employee id should only contain numbers, and it should be exactly 6 digits long";

/// Message shown when a name is malformed.
pub const MESSAGE_NAME_CONSTRAINTS: &str =
    "Names should only contain alphanumeric characters and spaces, and it should not be blank";

/// Message shown when a department is malformed.
pub const MESSAGE_DEPARTMENT_CONSTRAINTS: &str =
    "Department should only contain alphabetic characters and spaces, and it should not be blank";

/// Message shown when a position is malformed.
pub const MESSAGE_POSITION_CONSTRAINTS: &str =
    "Position should only contain alphabetic characters and spaces, and it should not be blank";

const EMPLOYEE_ID_LENGTH: usize = 6;

fn is_alphabetic_words(value: &str) -> bool {
    !value.trim().is_empty() && value.chars().all(|c| c.is_alphabetic() || c == ' ')
}

/// A six digit employee identifier.
///
/// # Example
///
/// ```
/// use staff_ledger::models::EmployeeId;
///
/// let id = EmployeeId::new("000123").unwrap();
/// assert_eq!(id.as_str(), "000123");
/// assert!(EmployeeId::new("12ab56").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EmployeeId(String);

impl EmployeeId {
    /// Creates an employee id, trimming surrounding whitespace.
    pub fn new(value: impl AsRef<str>) -> EngineResult<Self> {
        let trimmed = value.as_ref().trim();
        if trimmed.len() == EMPLOYEE_ID_LENGTH && trimmed.chars().all(|c| c.is_ascii_digit()) {
            Ok(Self(trimmed.to_string()))
        } else {
            Err(EngineError::validation(MESSAGE_EMPLOYEE_ID_CONSTRAINTS))
        }
    }

    /// Returns the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// A person's display name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Name(String);

impl Name {
    /// Creates a name, trimming surrounding whitespace.
    pub fn new(value: impl AsRef<str>) -> EngineResult<Self> {
        let trimmed = value.as_ref().trim();
        let valid = !trimmed.is_empty()
            && trimmed.chars().all(|c| c.is_alphanumeric() || c == ' ');
        if valid {
            Ok(Self(trimmed.to_string()))
        } else {
            Err(EngineError::validation(MESSAGE_NAME_CONSTRAINTS))
        }
    }

    /// Returns the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// The department a person works in, e.g. "Human Resource".
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Department(String);

impl Department {
    /// Creates a department, trimming surrounding whitespace.
    pub fn new(value: impl AsRef<str>) -> EngineResult<Self> {
        let trimmed = value.as_ref().trim();
        if is_alphabetic_words(trimmed) {
            Ok(Self(trimmed.to_string()))
        } else {
            Err(EngineError::validation(MESSAGE_DEPARTMENT_CONSTRAINTS))
        }
    }

    /// Returns the department as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// The position a person holds, e.g. "Manager".
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Position(String);

impl Position {
    /// Creates a position, trimming surrounding whitespace.
    pub fn new(value: impl AsRef<str>) -> EngineResult<Self> {
        let trimmed = value.as_ref().trim();
        if is_alphabetic_words(trimmed) {
            Ok(Self(trimmed.to_string()))
        } else {
            Err(EngineError::validation(MESSAGE_POSITION_CONSTRAINTS))
        }
    }

    /// Returns the position as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

macro_rules! string_field_conversions {
    ($($ty:ident),*) => {
        $(
            impl TryFrom<String> for $ty {
                type Error = EngineError;

                fn try_from(value: String) -> Result<Self, Self::Error> {
                    Self::new(value)
                }
            }

            impl From<$ty> for String {
                fn from(value: $ty) -> Self {
                    value.0
                }
            }

            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(&self.0)
                }
            }
        )*
    };
}

string_field_conversions!(EmployeeId, Name, Department, Position);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_employee_id_requires_six_digits() {
        assert!(EmployeeId::new("000001").is_ok());
        assert!(EmployeeId::new(" 123456 ").is_ok());
        assert!(EmployeeId::new("12345").is_err());
        assert!(EmployeeId::new("1234567").is_err());
        assert!(EmployeeId::new("12345a").is_err());
    }

    #[test]
    fn test_name_rejects_blank_and_symbols() {
        assert!(Name::new("Alice Pauline").is_ok());
        assert!(Name::new("   ").is_err());
        assert!(Name::new("Alice*").is_err());
    }

    #[test]
    fn test_department_and_position_are_alphabetic_words() {
        assert!(Department::new("Human Resource").is_ok());
        assert!(Department::new("IT2").is_err());
        assert!(Position::new("Senior Manager").is_ok());
        assert!(Position::new("").is_err());
    }

    #[test]
    fn test_department_error_message() {
        let err = Department::new("R&D").unwrap_err();
        assert_eq!(err.to_string(), MESSAGE_DEPARTMENT_CONSTRAINTS);
    }

    #[test]
    fn test_deserialize_validates() {
        let ok: Result<EmployeeId, _> = serde_json::from_str("\"000321\"");
        assert_eq!(ok.unwrap().as_str(), "000321");

        let bad: Result<EmployeeId, _> = serde_json::from_str("\"abc\"");
        assert!(bad.is_err());
    }

    #[test]
    fn test_serialize_is_transparent() {
        let position = Position::new("Director").unwrap();
        assert_eq!(serde_json::to_string(&position).unwrap(), "\"Director\"");
    }
}
