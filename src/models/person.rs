//! Person model.
//!
//! A [`Person`] is an employee tracked by the ledger. Its identity is the
//! employee id; every other field may be edited.

use serde::{Deserialize, Serialize};

use crate::error::RecordKind;

use super::Record;
use super::fields::{Department, EmployeeId, Name, Position};

/// Represents an employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    /// Unique identifier for the employee.
    pub employee_id: EmployeeId,
    /// The employee's full name.
    pub name: Name,
    /// Contact phone number.
    #[serde(default)]
    pub phone: String,
    /// Contact email address.
    #[serde(default)]
    pub email: String,
    /// The department the employee belongs to.
    pub department: Department,
    /// The employee's position within the department.
    pub position: Position,
    /// Free-form tags (e.g. qualifications).
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Person {
    /// Creates a person with no contact details or tags.
    ///
    /// # Examples
    ///
    /// ```
    /// use staff_ledger::models::{Department, EmployeeId, Name, Person, Position};
    ///
    /// let person = Person::new(
    ///     EmployeeId::new("000001").unwrap(),
    ///     Name::new("Alice Pauline").unwrap(),
    ///     Department::new("Human Resource").unwrap(),
    ///     Position::new("Director").unwrap(),
    /// );
    /// assert_eq!(person.department.as_str(), "Human Resource");
    /// ```
    pub fn new(
        employee_id: EmployeeId,
        name: Name,
        department: Department,
        position: Position,
    ) -> Self {
        Self {
            employee_id,
            name,
            phone: String::new(),
            email: String::new(),
            department,
            position,
            tags: Vec::new(),
        }
    }
}

impl Record for Person {
    const KIND: RecordKind = RecordKind::Person;

    fn is_same_record(&self, other: &Self) -> bool {
        self.employee_id == other.employee_id
    }

    fn identity(&self) -> String {
        self.employee_id.to_string()
    }
}
