//! Sort policy for filtered views.
//!
//! Sorting is always stable. Descending order reverses the comparison rather
//! than the output, so records that compare equal keep their insertion order
//! in both directions.

use std::cmp::Ordering;
use std::fmt::Debug;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::models::{Expense, Person, Schedule};

/// Message shown when a sort order cannot be parsed.
pub const MESSAGE_SORT_ORDER_CONSTRAINTS: &str =
    "Sort order should be either 'asc' for ascending or 'dsc' for descending";

/// Direction of a sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    /// Smallest first.
    #[default]
    #[serde(alias = "asc")]
    Ascending,
    /// Largest first.
    #[serde(alias = "dsc", alias = "desc")]
    Descending,
}

impl FromStr for SortOrder {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "asc" | "ascending" => Ok(SortOrder::Ascending),
            "dsc" | "desc" | "descending" => Ok(SortOrder::Descending),
            _ => Err(EngineError::validation(MESSAGE_SORT_ORDER_CONSTRAINTS)),
        }
    }
}

/// A field of `T` that records can be ordered by.
pub trait SortKey<T>: Copy + Debug + PartialEq {
    /// Compares two records by this key, ascending.
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

/// A sort key paired with a direction.
///
/// # Example
///
/// ```
/// use staff_ledger::query::{Comparator, PersonSortKey, SortOrder};
///
/// let by_department = Comparator::new(PersonSortKey::Department, SortOrder::Descending);
/// assert_eq!(by_department.order, SortOrder::Descending);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Comparator<K> {
    /// The field compared.
    pub key: K,
    /// The direction.
    pub order: SortOrder,
}

impl<K> Comparator<K> {
    /// Creates a comparator.
    pub fn new(key: K, order: SortOrder) -> Self {
        Self { key, order }
    }

    /// Compares two records.
    pub fn compare<T>(&self, a: &T, b: &T) -> Ordering
    where
        K: SortKey<T>,
    {
        let ordering = self.key.compare(a, b);
        match self.order {
            SortOrder::Ascending => ordering,
            SortOrder::Descending => ordering.reverse(),
        }
    }

    /// Stable-sorts `records` in place.
    pub fn sort<T>(&self, records: &mut [T])
    where
        K: SortKey<T>,
    {
        records.sort_by(|a, b| self.compare(a, b));
    }
}

/// Case-insensitive comparison without locale rules.
pub fn compare_ignore_case(a: &str, b: &str) -> Ordering {
    a.chars()
        .map(|c| c.to_ascii_lowercase())
        .cmp(b.chars().map(|c| c.to_ascii_lowercase()))
}

/// Fields persons can be sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PersonSortKey {
    /// Full name.
    Name,
    /// Department.
    Department,
    /// Position.
    Position,
    /// Employee id.
    EmployeeId,
}

impl SortKey<Person> for PersonSortKey {
    fn compare(&self, a: &Person, b: &Person) -> Ordering {
        match self {
            PersonSortKey::Name => compare_ignore_case(a.name.as_str(), b.name.as_str()),
            PersonSortKey::Department => {
                compare_ignore_case(a.department.as_str(), b.department.as_str())
            }
            PersonSortKey::Position => {
                compare_ignore_case(a.position.as_str(), b.position.as_str())
            }
            PersonSortKey::EmployeeId => a.employee_id.cmp(&b.employee_id),
        }
    }
}

/// Fields schedules can be sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScheduleSortKey {
    /// Scheduled date.
    Date,
    /// Employee id.
    EmployeeId,
}

impl SortKey<Schedule> for ScheduleSortKey {
    fn compare(&self, a: &Schedule, b: &Schedule) -> Ordering {
        match self {
            ScheduleSortKey::Date => a.date.cmp(&b.date),
            ScheduleSortKey::EmployeeId => a.employee_id.cmp(&b.employee_id),
        }
    }
}

/// Fields expenses can be sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpenseSortKey {
    /// Date incurred.
    Date,
    /// Claimed amount.
    Amount,
    /// Employee id.
    EmployeeId,
}

impl SortKey<Expense> for ExpenseSortKey {
    fn compare(&self, a: &Expense, b: &Expense) -> Ordering {
        match self {
            ExpenseSortKey::Date => a.date.cmp(&b.date),
            ExpenseSortKey::Amount => a.amount.cmp(&b.amount),
            ExpenseSortKey::EmployeeId => a.employee_id.cmp(&b.employee_id),
        }
    }
}

/// Comparator over persons.
pub type PersonComparator = Comparator<PersonSortKey>;
/// Comparator over schedules.
pub type ScheduleComparator = Comparator<ScheduleSortKey>;
/// Comparator over expenses.
pub type ExpenseComparator = Comparator<ExpenseSortKey>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Department, EmployeeId, Name, Position};

    fn person(id: &str, name: &str, department: &str) -> Person {
        Person::new(
            EmployeeId::new(id).unwrap(),
            Name::new(name).unwrap(),
            Department::new(department).unwrap(),
            Position::new("Clerk").unwrap(),
        )
    }

    fn ids(people: &[Person]) -> Vec<&str> {
        people.iter().map(|p| p.employee_id.as_str()).collect()
    }

    #[test]
    fn test_sort_order_from_str() {
        assert_eq!("asc".parse::<SortOrder>().unwrap(), SortOrder::Ascending);
        assert_eq!("DSC".parse::<SortOrder>().unwrap(), SortOrder::Descending);
        assert_eq!("desc".parse::<SortOrder>().unwrap(), SortOrder::Descending);
        assert!("sideways".parse::<SortOrder>().is_err());
    }

    #[test]
    fn test_sort_order_deserializes_aliases() {
        let order: SortOrder = serde_yaml::from_str("dsc").unwrap();
        assert_eq!(order, SortOrder::Descending);
        let order: SortOrder = serde_yaml::from_str("ascending").unwrap();
        assert_eq!(order, SortOrder::Ascending);
    }

    #[test]
    fn test_compare_ignore_case() {
        assert_eq!(compare_ignore_case("finance", "Finance"), Ordering::Equal);
        assert_eq!(compare_ignore_case("hr", "IT"), Ordering::Less);
    }

    #[test]
    fn test_ascending_ties_keep_insertion_order() {
        let mut people = vec![
            person("000001", "Alice", "HR"),
            person("000002", "Benson", "IT"),
            person("000003", "Carl", "hr"),
        ];
        Comparator::new(PersonSortKey::Department, SortOrder::Ascending).sort(&mut people);
        assert_eq!(ids(&people), vec!["000001", "000003", "000002"]);
    }

    #[test]
    fn test_descending_ties_keep_insertion_order() {
        let mut people = vec![
            person("000001", "Alice", "HR"),
            person("000002", "Benson", "IT"),
            person("000003", "Carl", "HR"),
        ];
        Comparator::new(PersonSortKey::Department, SortOrder::Descending).sort(&mut people);
        assert_eq!(ids(&people), vec!["000002", "000001", "000003"]);
    }

    #[test]
    fn test_descending_is_reverse_without_ties() {
        let mut asc = vec![
            person("000002", "Benson", "IT"),
            person("000001", "Alice", "HR"),
            person("000003", "Carl", "Finance"),
        ];
        let mut desc = asc.clone();

        Comparator::new(PersonSortKey::Name, SortOrder::Ascending).sort(&mut asc);
        Comparator::new(PersonSortKey::Name, SortOrder::Descending).sort(&mut desc);
        desc.reverse();
        assert_eq!(asc, desc);
    }
}
