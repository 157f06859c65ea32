//! Record collections owned by the model.

mod record_list;

use crate::models::{Expense, Person, Schedule};

pub use record_list::RecordList;

/// The collection of employees.
pub type PersonList = RecordList<Person>;
/// The collection of leave and work entries.
pub type ScheduleList = RecordList<Schedule>;
/// The collection of expense claims.
pub type ExpenseList = RecordList<Expense>;
