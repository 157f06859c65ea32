//! Integration tests for the staff ledger engine.
//!
//! These tests drive the public command API end to end:
//! - Filtering and sorting the person view
//! - Bulk leave/work scheduling over the filtered view
//! - Clearing collections
//! - Undo/redo across all three collections
//! - Atomicity of failed commands
//! - Loading records and configuration from disk

use std::collections::BTreeSet;
use std::sync::{Arc, Mutex};

use chrono::NaiveDate;
use rust_decimal::Decimal;

use staff_ledger::commands::{Command, FilterCriteria, Index, PersonEdit, execute};
use staff_ledger::config::{ConfigLoader, EngineConfig};
use staff_ledger::error::{EngineError, RecordKind};
use staff_ledger::models::{
    Department, EmployeeId, Expense, ExpenseCategory, Name, Person, Position, Schedule,
};
use staff_ledger::query::{KeywordSet, ScheduleMatcher, SortOrder};
use staff_ledger::source::DirectorySource;
use staff_ledger::state::Model;
use staff_ledger::store::{ExpenseList, PersonList, ScheduleList};

// =============================================================================
// Test Helpers
// =============================================================================

fn sample_model() -> Model {
    let config = ConfigLoader::load("./config/default").expect("Failed to load config");
    Model::from_source(&DirectorySource::new("./data/sample"), config.config())
        .expect("Failed to load sample data")
}

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn dates(values: &[&str]) -> BTreeSet<NaiveDate> {
    values.iter().map(|s| date(s)).collect()
}

fn id(value: &str) -> EmployeeId {
    EmployeeId::new(value).unwrap()
}

fn index(value: usize) -> Index {
    Index::from_one_based(value).unwrap()
}

fn person(employee_id: &str, name: &str, department: &str, position: &str) -> Person {
    Person::new(
        id(employee_id),
        Name::new(name).unwrap(),
        Department::new(department).unwrap(),
        Position::new(position).unwrap(),
    )
}

fn filter(department: Option<&str>, position: Option<&str>, order: SortOrder) -> Command {
    let criteria = FilterCriteria::new(
        department.map(KeywordSet::parse),
        position.map(KeywordSet::parse),
        Some(order),
    )
    .unwrap();
    Command::Filter(criteria)
}

fn filtered_names(model: &Model) -> Vec<String> {
    model
        .filtered_persons()
        .iter()
        .map(|p| p.name.to_string())
        .collect()
}

// =============================================================================
// Filtering
// =============================================================================

#[test]
fn test_filter_by_department_sorts_with_stable_ties() {
    let persons = PersonList::from_records(vec![
        person("000001", "Alice", "HR", "Director"),
        person("000002", "Benson", "IT", "Intern"),
        person("000003", "Carl", "HR", "Intern"),
        person("000004", "Daniel", "Finance", "Manager"),
        person("000005", "Elle", "IT", "Intern"),
        person("000006", "Fiona", "HR", "Manager"),
        person("000007", "George", "Finance", "Director"),
    ])
    .unwrap();
    let mut model = Model::new(
        persons,
        ScheduleList::new(),
        ExpenseList::new(),
        &EngineConfig::default(),
    );

    let result = execute(filter(Some("HR IT"), None, SortOrder::Ascending), &mut model).unwrap();

    assert_eq!(result.feedback, "5 persons listed!");
    assert_eq!(
        filtered_names(&model),
        vec!["Alice", "Carl", "Fiona", "Benson", "Elle"]
    );
}

#[test]
fn test_filter_descending_keeps_ties_in_insertion_order() {
    let mut model = sample_model();
    execute(filter(Some("IT Finance"), None, SortOrder::Descending), &mut model).unwrap();

    assert_eq!(
        filtered_names(&model),
        vec!["Benson Meier", "Elle Meyer", "Daniel Meier", "George Best"]
    );
}

#[test]
fn test_filter_with_no_matching_position_lists_positions() {
    let mut model = sample_model();
    let result = execute(filter(None, Some("Janitor"), SortOrder::Ascending), &mut model).unwrap();

    assert_eq!(result.affected, 0);
    assert!(model.filtered_persons().is_empty());
    assert_eq!(
        result.feedback,
        "0 persons listed!\nAvailable positions: Director, Intern, Manager"
    );
}

#[test]
fn test_filter_falls_back_to_configured_order() {
    let config = EngineConfig {
        default_sort_order: SortOrder::Descending,
        ..EngineConfig::default()
    };
    let mut model = Model::from_source(&DirectorySource::new("./data/sample"), &config).unwrap();
    let criteria = FilterCriteria::new(None, Some(KeywordSet::parse("Director")), None).unwrap();
    execute(Command::Filter(criteria), &mut model).unwrap();

    let comparator = model.person_view().comparator().copied().unwrap();
    assert_eq!(comparator.order, SortOrder::Descending);
}

#[test]
fn test_find_schedules_sorts_by_date() {
    let mut model = sample_model();
    let result = execute(
        Command::FindSchedules(
            ScheduleMatcher::DateRange {
                from: date("2019-02-01"),
                to: date("2019-02-28"),
            }
            .into(),
        ),
        &mut model,
    )
    .unwrap();

    assert_eq!(result.feedback, "2 schedules listed!");
    let days: Vec<NaiveDate> = model.filtered_schedules().iter().map(|s| s.date).collect();
    assert_eq!(days, vec![date("2019-02-02"), date("2019-02-04")]);
}

// =============================================================================
// Scheduling
// =============================================================================

#[test]
fn test_add_leave_skips_people_already_on_leave() {
    let mut model = sample_model();
    execute(filter(Some("Resource"), None, SortOrder::Ascending), &mut model).unwrap();
    assert_eq!(model.filtered_persons().len(), 3);

    let result = execute(
        Command::AddLeaves {
            dates: dates(&["2019-02-02"]),
        },
        &mut model,
    )
    .unwrap();

    assert_eq!(result.affected, 2);
    assert_eq!(model.schedules().len(), 5);
    assert_eq!(model.history().len(), 2);
    assert_eq!(model.history().pointer(), 1);
}

#[test]
fn test_repeated_add_leave_is_no_effect_without_second_commit() {
    let mut model = sample_model();
    let command = Command::AddLeaves {
        dates: dates(&["2019-05-01"]),
    };

    execute(command.clone(), &mut model).unwrap();
    let second = execute(command, &mut model);

    assert!(matches!(second, Err(EngineError::NoEffect { .. })));
    assert_eq!(model.history().len(), 2);
}

#[test]
fn test_add_leave_with_empty_view_fails_before_mutating() {
    let mut model = sample_model();
    execute(filter(Some("Legal"), None, SortOrder::Ascending), &mut model).unwrap();
    let before = model.snapshot();

    let result = execute(
        Command::AddLeaves {
            dates: dates(&["2019-05-01"]),
        },
        &mut model,
    );

    assert!(matches!(result, Err(EngineError::EmptySelection { .. })));
    assert_eq!(model.snapshot(), before);
}

#[test]
fn test_clear_empty_schedules_is_no_effect() {
    let mut model = Model::new(
        PersonList::new(),
        ScheduleList::new(),
        ExpenseList::new(),
        &EngineConfig::default(),
    );

    let result = execute(Command::ClearSchedules, &mut model);

    assert_eq!(
        result,
        Err(EngineError::NoEffect {
            message: "Schedule list is empty!".to_string()
        })
    );
    assert_eq!(model.history().pointer(), 0);
    assert_eq!(model.history().len(), 1);
}

// =============================================================================
// History
// =============================================================================

#[test]
fn test_undo_redo_across_collections() {
    let mut model = sample_model();
    let initial = model.snapshot();

    let expense = Expense::new(
        id("000002"),
        ExpenseCategory::Miscellaneous,
        Decimal::new(999, 2),
        date("2019-04-01"),
    )
    .unwrap();
    execute(Command::AddExpense(expense), &mut model).unwrap();
    execute(
        Command::AddSchedule(Schedule::work(id("000003"), date("2019-04-02"))),
        &mut model,
    )
    .unwrap();
    execute(Command::DeletePerson { index: index(1) }, &mut model).unwrap();
    let last = model.snapshot();

    for _ in 0..3 {
        execute(Command::Undo, &mut model).unwrap();
    }
    assert_eq!(model.snapshot(), initial);
    assert_eq!(
        execute(Command::Undo, &mut model),
        Err(EngineError::NoUndoableState)
    );

    for _ in 0..3 {
        execute(Command::Redo, &mut model).unwrap();
    }
    assert_eq!(model.snapshot(), last);
    assert_eq!(
        execute(Command::Redo, &mut model),
        Err(EngineError::NoRedoableState)
    );
}

#[test]
fn test_commit_after_undo_prunes_redo_branch() {
    let mut model = sample_model();
    execute(
        Command::AddSchedule(Schedule::leave(id("000005"), date("2019-06-01"))),
        &mut model,
    )
    .unwrap();
    execute(Command::Undo, &mut model).unwrap();
    assert!(model.can_redo());

    execute(
        Command::AddSchedule(Schedule::leave(id("000006"), date("2019-06-01"))),
        &mut model,
    )
    .unwrap();

    assert!(!model.can_redo());
    assert_eq!(model.history().len(), 2);
    assert_eq!(
        execute(Command::Redo, &mut model),
        Err(EngineError::NoRedoableState)
    );
}

#[test]
fn test_delete_person_cascade_is_undone_as_one_step() {
    let mut model = sample_model();
    let before = model.snapshot();

    let result = execute(Command::DeletePerson { index: index(1) }, &mut model).unwrap();
    assert_eq!(result.affected, 3);
    assert!(model.schedules().iter().all(|s| s.employee_id != id("000001")));
    assert!(model.expenses().iter().all(|e| e.employee_id != id("000001")));

    execute(Command::Undo, &mut model).unwrap();
    assert_eq!(model.snapshot(), before);
}

#[test]
fn test_history_limit_drops_oldest_states() {
    let config = EngineConfig {
        history_limit: Some(2),
        ..EngineConfig::default()
    };
    let mut model = Model::from_source(&DirectorySource::new("./data/sample"), &config).unwrap();

    for day in ["2019-07-01", "2019-07-02", "2019-07-03"] {
        execute(
            Command::AddWorks {
                dates: dates(&[day]),
            },
            &mut model,
        )
        .unwrap();
    }

    assert_eq!(model.history().len(), 2);
    execute(Command::Undo, &mut model).unwrap();
    assert!(matches!(
        execute(Command::Undo, &mut model),
        Err(EngineError::NoUndoableState)
    ));
}

// =============================================================================
// Atomicity and observers
// =============================================================================

#[test]
fn test_failed_edit_leaves_model_and_views_untouched() {
    let mut model = sample_model();
    let before = model.snapshot();
    let published = model.filtered_persons();

    let edit = PersonEdit {
        employee_id: Some(id("000002")),
        ..PersonEdit::default()
    };
    let result = execute(Command::EditPerson { index: index(1), edit }, &mut model);

    assert_eq!(
        result,
        Err(EngineError::DuplicateRecord {
            kind: RecordKind::Person,
            key: "000002".to_string()
        })
    );
    assert_eq!(model.snapshot(), before);
    assert_eq!(*model.filtered_persons(), *published);
    assert_eq!(model.history().len(), 1);
}

#[test]
fn test_observers_see_only_completed_commands() {
    let mut model = sample_model();
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    model.subscribe_schedules(move |items| sink.lock().unwrap().push(items.len()));

    execute(
        Command::AddWorks {
            dates: dates(&["2019-08-01", "2019-08-02"]),
        },
        &mut model,
    )
    .unwrap();
    execute(
        Command::AddWorks {
            dates: dates(&["2019-08-01"]),
        },
        &mut model,
    )
    .unwrap_err();

    assert_eq!(*seen.lock().unwrap(), vec![3 + 14]);
}

#[test]
fn test_index_refers_to_filtered_view() {
    let mut model = sample_model();
    execute(filter(Some("Finance"), None, SortOrder::Ascending), &mut model).unwrap();

    execute(Command::DeletePerson { index: index(2) }, &mut model).unwrap();

    assert!(model.find_person(&id("000007")).is_none());
    assert!(model.find_person(&id("000004")).is_some());
    assert_eq!(
        execute(Command::DeletePerson { index: index(2) }, &mut model),
        Err(EngineError::InvalidIndex {
            kind: RecordKind::Person,
            index: 2
        })
    );
}

// =============================================================================
// Loading
// =============================================================================

#[test]
fn test_config_and_sample_data_load() {
    let config = ConfigLoader::load("./config/default").expect("Failed to load config");
    assert_eq!(config.history_limit(), Some(100));
    assert_eq!(config.default_sort_order(), SortOrder::Ascending);

    let model = sample_model();
    assert_eq!(model.persons().len(), 7);
    assert_eq!(model.filtered_schedules().len(), 3);
    assert_eq!(model.filtered_expenses().len(), 2);
}

#[test]
fn test_invalid_config_is_reported() {
    let result = ConfigLoader::load("./config/invalid");
    assert!(matches!(result, Err(EngineError::ConfigParseError { .. })));
}
