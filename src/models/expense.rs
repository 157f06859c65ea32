//! Expense model and related types.

use std::fmt;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult, RecordKind};

use super::Record;
use super::fields::EmployeeId;

/// Message shown when an expense amount is not positive.
pub const MESSAGE_AMOUNT_CONSTRAINTS: &str = "Expense amount should be greater than zero";

/// The category an expense is claimed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExpenseCategory {
    /// Travel costs.
    Travel,
    /// Medical costs.
    Medical,
    /// Anything else.
    Miscellaneous,
}

impl fmt::Display for ExpenseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ExpenseCategory::Travel => "Travel",
            ExpenseCategory::Medical => "Medical",
            ExpenseCategory::Miscellaneous => "Miscellaneous",
        };
        f.write_str(name)
    }
}

/// An expense claimed by an employee.
///
/// Deserialization goes through [`Expense::new`], so a loaded expense always
/// has a positive amount.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "ExpenseRecord")]
pub struct Expense {
    /// The employee who made the claim.
    pub employee_id: EmployeeId,
    /// The claim category.
    pub category: ExpenseCategory,
    /// The claimed amount.
    pub amount: Decimal,
    /// The date the expense was incurred.
    pub date: NaiveDate,
}

impl Expense {
    /// Creates an expense, rejecting amounts that are zero or negative.
    ///
    /// # Examples
    ///
    /// ```
    /// use staff_ledger::models::{EmployeeId, Expense, ExpenseCategory};
    /// use chrono::NaiveDate;
    /// use rust_decimal::Decimal;
    ///
    /// let date = NaiveDate::from_ymd_opt(2019, 3, 1).unwrap();
    /// let id = EmployeeId::new("000001").unwrap();
    ///
    /// assert!(Expense::new(id.clone(), ExpenseCategory::Travel, Decimal::new(4550, 2), date).is_ok());
    /// assert!(Expense::new(id, ExpenseCategory::Travel, Decimal::ZERO, date).is_err());
    /// ```
    pub fn new(
        employee_id: EmployeeId,
        category: ExpenseCategory,
        amount: Decimal,
        date: NaiveDate,
    ) -> EngineResult<Self> {
        if amount <= Decimal::ZERO {
            return Err(EngineError::validation(MESSAGE_AMOUNT_CONSTRAINTS));
        }
        Ok(Self {
            employee_id,
            category,
            amount,
            date,
        })
    }
}

/// Unvalidated wire form of an [`Expense`].
#[derive(Deserialize)]
struct ExpenseRecord {
    employee_id: EmployeeId,
    category: ExpenseCategory,
    amount: Decimal,
    date: NaiveDate,
}

impl TryFrom<ExpenseRecord> for Expense {
    type Error = EngineError;

    fn try_from(record: ExpenseRecord) -> Result<Self, Self::Error> {
        Expense::new(record.employee_id, record.category, record.amount, record.date)
    }
}

impl Record for Expense {
    const KIND: RecordKind = RecordKind::Expense;

    fn is_same_record(&self, other: &Self) -> bool {
        self.employee_id == other.employee_id
            && self.category == other.category
            && self.date == other.date
    }

    fn identity(&self) -> String {
        format!("{} {} on {}", self.employee_id, self.category, self.date)
    }
}
