//! Record models for the staff ledger.
//!
//! This module contains the three record kinds held by the engine and the
//! [`Record`] trait that defines their duplicate rules.

mod expense;
mod fields;
mod person;
mod schedule;

use std::fmt::Debug;

use crate::error::RecordKind;

pub use expense::{Expense, ExpenseCategory, MESSAGE_AMOUNT_CONSTRAINTS};
pub use fields::{
    Department, EmployeeId, MESSAGE_DEPARTMENT_CONSTRAINTS, MESSAGE_EMPLOYEE_ID_CONSTRAINTS,
    MESSAGE_NAME_CONSTRAINTS, MESSAGE_POSITION_CONSTRAINTS, Name, Position,
};
pub use person::Person;
pub use schedule::{Schedule, ScheduleType};

/// A record that can be stored in a [`RecordList`](crate::store::RecordList).
pub trait Record: Clone + Debug + PartialEq + Send + Sync + 'static {
    /// The kind reported in collection-level errors.
    const KIND: RecordKind;

    /// Returns true if `other` occupies the same slot as `self`, meaning the
    /// two may not coexist in one collection.
    fn is_same_record(&self, other: &Self) -> bool;

    /// A short human readable identity used in messages and logs.
    fn identity(&self) -> String;
}
