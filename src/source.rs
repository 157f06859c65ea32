//! Loading the initial collections.
//!
//! The model is hydrated once at startup from a [`RecordSource`]. The engine
//! never writes records back; saving is left to the embedding application.

use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::config::load_yaml;
use crate::error::EngineResult;
use crate::models::{EmployeeId, Expense, Person, Schedule};
use crate::state::Snapshot;
use crate::store::{ExpenseList, PersonList, ScheduleList};

/// File holding the persons inside a data directory.
pub const PERSONS_FILE_NAME: &str = "persons.yaml";
/// File holding the schedules inside a data directory.
pub const SCHEDULES_FILE_NAME: &str = "schedules.yaml";
/// File holding the expenses inside a data directory.
pub const EXPENSES_FILE_NAME: &str = "expenses.yaml";

/// Something that can produce the three collections at startup.
pub trait RecordSource {
    /// Loads persons, schedules and expenses.
    fn load(&self) -> EngineResult<(PersonList, ScheduleList, ExpenseList)>;
}

/// Reads the collections from YAML files in a directory.
///
/// ```text
/// data/sample/
/// ├── persons.yaml
/// ├── schedules.yaml
/// └── expenses.yaml
/// ```
///
/// # Example
///
/// ```no_run
/// use staff_ledger::source::{DirectorySource, RecordSource};
///
/// let (persons, schedules, expenses) = DirectorySource::new("./data/sample").load()?;
/// println!("{} persons, {} schedules, {} expenses", persons.len(), schedules.len(), expenses.len());
/// # Ok::<(), staff_ledger::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct DirectorySource {
    root: PathBuf,
}

impl DirectorySource {
    /// Creates a source rooted at `path`.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            root: path.as_ref().to_path_buf(),
        }
    }
}

impl RecordSource for DirectorySource {
    fn load(&self) -> EngineResult<(PersonList, ScheduleList, ExpenseList)> {
        let persons: Vec<Person> = load_yaml(&self.root.join(PERSONS_FILE_NAME))?;
        let schedules: Vec<Schedule> = load_yaml(&self.root.join(SCHEDULES_FILE_NAME))?;
        let expenses: Vec<Expense> = load_yaml(&self.root.join(EXPENSES_FILE_NAME))?;

        let persons = PersonList::from_records(persons)?;
        let schedules = ScheduleList::from_records(schedules)?;
        let expenses = ExpenseList::from_records(expenses)?;

        let known = |id: &EmployeeId| persons.iter().any(|p| &p.employee_id == id);
        let orphan_schedules = schedules.iter().filter(|s| !known(&s.employee_id)).count();
        let orphan_expenses = expenses.iter().filter(|e| !known(&e.employee_id)).count();
        if orphan_schedules > 0 || orphan_expenses > 0 {
            warn!(
                root = %self.root.display(),
                orphan_schedules,
                orphan_expenses,
                "Loaded records referencing unknown employees"
            );
        }

        info!(
            root = %self.root.display(),
            persons = persons.len(),
            schedules = schedules.len(),
            expenses = expenses.len(),
            "Loaded records"
        );
        Ok((persons, schedules, expenses))
    }
}

impl RecordSource for Snapshot {
    fn load(&self) -> EngineResult<(PersonList, ScheduleList, ExpenseList)> {
        Ok(self.clone().into_parts())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EngineError;

    #[test]
    fn test_load_sample_directory() {
        let result = DirectorySource::new("./data/sample").load();
        assert!(result.is_ok(), "Failed to load data: {:?}", result.err());

        let (persons, schedules, expenses) = result.unwrap();
        assert_eq!(persons.len(), 7);
        assert_eq!(schedules.len(), 3);
        assert_eq!(expenses.len(), 2);
        assert_eq!(persons.get(0).unwrap().name.as_str(), "Alice Pauline");
    }

    #[test]
    fn test_load_missing_directory_returns_error() {
        let result = DirectorySource::new("/nonexistent/data").load();
        match result {
            Err(EngineError::ConfigNotFound { path }) => {
                assert!(path.contains(PERSONS_FILE_NAME));
            }
            other => panic!("Expected ConfigNotFound error, got {:?}", other),
        }
    }

    #[test]
    fn test_snapshot_is_a_source() {
        let snapshot = Snapshot::default();
        let (persons, schedules, expenses) = snapshot.load().unwrap();
        assert!(persons.is_empty() && schedules.is_empty() && expenses.is_empty());
    }
}
