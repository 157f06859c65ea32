//! Command engine.
//!
//! A [`Command`] is a validated request produced by the parser. [`execute`]
//! dispatches it against a [`Model`] with all-or-nothing semantics: the
//! collections are checkpointed first and restored if the command fails, a
//! snapshot is committed only when something actually changed, and views are
//! republished once the outcome is settled.

mod expense;
mod filter;
mod messages;
mod person;
mod schedule;

use std::collections::BTreeSet;

use chrono::NaiveDate;
use tracing::{info, warn};
use uuid::Uuid;

use crate::error::{EngineError, EngineResult, RecordKind};
use crate::models::{Expense, Person, Schedule};
use crate::query::{ExpensePredicate, SchedulePredicate};
use crate::state::Model;

pub use filter::{FilterCriteria, available_departments, available_positions};
pub use person::PersonEdit;

/// A one-based position in a filtered view, as displayed to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Index(usize);

impl Index {
    /// Creates an index from its displayed, one-based value.
    pub fn from_one_based(value: usize) -> EngineResult<Self> {
        if value == 0 {
            return Err(EngineError::validation("Index must be a positive integer"));
        }
        Ok(Self(value))
    }

    /// The displayed value.
    pub fn one_based(&self) -> usize {
        self.0
    }

    /// The position within a slice.
    pub fn zero_based(&self) -> usize {
        self.0 - 1
    }

    fn invalid(&self, kind: RecordKind) -> EngineError {
        EngineError::InvalidIndex {
            kind,
            index: self.0,
        }
    }
}

/// A validated, typed request to read or change the model.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Adds an employee.
    AddPerson(Person),
    /// Deletes the employee at a position in the person view, together with
    /// their schedules and expenses.
    DeletePerson {
        /// Position in the person view.
        index: Index,
    },
    /// Edits the employee at a position in the person view.
    EditPerson {
        /// Position in the person view.
        index: Index,
        /// Fields to change.
        edit: PersonEdit,
    },
    /// Adds one schedule entry.
    AddSchedule(Schedule),
    /// Adds leave on each date for every employee in the person view.
    AddLeaves {
        /// Dates of leave.
        dates: BTreeSet<NaiveDate>,
    },
    /// Adds work on each date for every employee in the person view.
    AddWorks {
        /// Dates of work.
        dates: BTreeSet<NaiveDate>,
    },
    /// Deletes the entry at a position in the schedule view.
    DeleteSchedule {
        /// Position in the schedule view.
        index: Index,
    },
    /// Removes every schedule entry.
    ClearSchedules,
    /// Adds one expense.
    AddExpense(Expense),
    /// Deletes the expense at a position in the expense view.
    DeleteExpense {
        /// Position in the expense view.
        index: Index,
    },
    /// Removes every expense.
    ClearExpenses,
    /// Shows all records in every view.
    List,
    /// Filters and sorts the person view.
    Filter(FilterCriteria),
    /// Filters the schedule view.
    FindSchedules(SchedulePredicate),
    /// Filters the expense view.
    FindExpenses(ExpensePredicate),
    /// Restores the previous state.
    Undo,
    /// Restores the next state.
    Redo,
}

impl Command {
    /// Short name used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            Command::AddPerson(_) => "add_person",
            Command::DeletePerson { .. } => "delete_person",
            Command::EditPerson { .. } => "edit_person",
            Command::AddSchedule(_) => "add_schedule",
            Command::AddLeaves { .. } => "add_leaves",
            Command::AddWorks { .. } => "add_works",
            Command::DeleteSchedule { .. } => "delete_schedule",
            Command::ClearSchedules => "clear_schedules",
            Command::AddExpense(_) => "add_expense",
            Command::DeleteExpense { .. } => "delete_expense",
            Command::ClearExpenses => "clear_expenses",
            Command::List => "list",
            Command::Filter(_) => "filter",
            Command::FindSchedules(_) => "find_schedules",
            Command::FindExpenses(_) => "find_expenses",
            Command::Undo => "undo",
            Command::Redo => "redo",
        }
    }
}

/// The outcome of a successful command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult {
    /// Message for the user.
    pub feedback: String,
    /// Number of records added, removed, changed or listed.
    pub affected: usize,
}

impl CommandResult {
    /// Creates a result.
    pub fn new(feedback: impl Into<String>, affected: usize) -> Self {
        Self {
            feedback: feedback.into(),
            affected,
        }
    }
}

/// Executes a command against the model.
///
/// On failure the collections are exactly as they were before the call and
/// no snapshot is committed. Undo and redo skip validation and restore a
/// committed snapshot directly.
///
/// # Example
///
/// ```
/// use staff_ledger::commands::{Command, execute};
/// use staff_ledger::config::EngineConfig;
/// use staff_ledger::error::EngineError;
/// use staff_ledger::state::Model;
/// use staff_ledger::store::{ExpenseList, PersonList, ScheduleList};
///
/// let mut model = Model::new(
///     PersonList::new(),
///     ScheduleList::new(),
///     ExpenseList::new(),
///     &EngineConfig::default(),
/// );
///
/// let result = execute(Command::ClearSchedules, &mut model);
/// assert!(matches!(result, Err(EngineError::NoEffect { .. })));
/// assert_eq!(model.history().pointer(), 0);
/// ```
pub fn execute(command: Command, model: &mut Model) -> EngineResult<CommandResult> {
    let correlation_id = Uuid::new_v4();
    let name = command.name();
    info!(correlation_id = %correlation_id, command = name, "Executing command");

    let outcome = run_atomically(command, model);

    match &outcome {
        Ok(result) => info!(
            correlation_id = %correlation_id,
            command = name,
            affected = result.affected,
            history_pointer = model.history().pointer(),
            "Command succeeded"
        ),
        Err(err) => warn!(
            correlation_id = %correlation_id,
            command = name,
            error = %err,
            "Command failed"
        ),
    }
    outcome
}

fn run_atomically(command: Command, model: &mut Model) -> EngineResult<CommandResult> {
    let checkpoint = model.snapshot();
    let result = dispatch(command, model);
    if result.is_err() {
        model.rollback(checkpoint);
    }
    model.publish();
    result
}

fn dispatch(command: Command, model: &mut Model) -> EngineResult<CommandResult> {
    match command {
        Command::AddPerson(person) => person::add_person(model, person),
        Command::DeletePerson { index } => person::delete_person(model, index),
        Command::EditPerson { index, edit } => person::edit_person(model, index, edit),
        Command::AddSchedule(entry) => schedule::add_schedule(model, entry),
        Command::AddLeaves { dates } => schedule::add_leaves(model, &dates),
        Command::AddWorks { dates } => schedule::add_works(model, &dates),
        Command::DeleteSchedule { index } => schedule::delete_schedule(model, index),
        Command::ClearSchedules => schedule::clear_schedules(model),
        Command::AddExpense(entry) => expense::add_expense(model, entry),
        Command::DeleteExpense { index } => expense::delete_expense(model, index),
        Command::ClearExpenses => expense::clear_expenses(model),
        Command::List => filter::list(model),
        Command::Filter(criteria) => filter::filter(model, &criteria),
        Command::FindSchedules(predicate) => filter::find_schedules(model, predicate),
        Command::FindExpenses(predicate) => filter::find_expenses(model, predicate),
        Command::Undo => model
            .undo()
            .map(|_| CommandResult::new(messages::MESSAGE_UNDO_SUCCESS, 0)),
        Command::Redo => model
            .redo()
            .map(|_| CommandResult::new(messages::MESSAGE_REDO_SUCCESS, 0)),
    }
}
