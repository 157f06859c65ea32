//! Schedule model and related types.
//!
//! A [`Schedule`] records that an employee is working or on leave on a given
//! date. A person holds at most one entry per date.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::RecordKind;

use super::Record;
use super::fields::EmployeeId;

/// Whether a schedule entry is a working day or a leave day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScheduleType {
    /// A working day.
    Work,
    /// A leave day.
    Leave,
}

impl fmt::Display for ScheduleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScheduleType::Work => f.write_str("WORK"),
            ScheduleType::Leave => f.write_str("LEAVE"),
        }
    }
}

/// A leave or work entry for one employee on one date.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Schedule {
    /// The employee this entry belongs to.
    pub employee_id: EmployeeId,
    /// Work or leave.
    pub schedule_type: ScheduleType,
    /// The scheduled date.
    pub date: NaiveDate,
}

impl Schedule {
    /// Creates a new schedule entry.
    pub fn new(employee_id: EmployeeId, schedule_type: ScheduleType, date: NaiveDate) -> Self {
        Self {
            employee_id,
            schedule_type,
            date,
        }
    }

    /// Creates a leave entry.
    ///
    /// # Examples
    ///
    /// ```
    /// use staff_ledger::models::{EmployeeId, Schedule, ScheduleType};
    /// use chrono::NaiveDate;
    ///
    /// let leave = Schedule::leave(
    ///     EmployeeId::new("000001").unwrap(),
    ///     NaiveDate::from_ymd_opt(2019, 2, 2).unwrap(),
    /// );
    /// assert_eq!(leave.schedule_type, ScheduleType::Leave);
    /// ```
    pub fn leave(employee_id: EmployeeId, date: NaiveDate) -> Self {
        Self::new(employee_id, ScheduleType::Leave, date)
    }

    /// Creates a work entry.
    pub fn work(employee_id: EmployeeId, date: NaiveDate) -> Self {
        Self::new(employee_id, ScheduleType::Work, date)
    }
}

impl Record for Schedule {
    const KIND: RecordKind = RecordKind::Schedule;

    // One entry per employee per date, regardless of type.
    fn is_same_record(&self, other: &Self) -> bool {
        self.employee_id == other.employee_id && self.date == other.date
    }

    fn identity(&self) -> String {
        format!("{} {} on {}", self.employee_id, self.schedule_type, self.date)
    }
}
