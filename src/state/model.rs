//! The model: three collections, their filtered views, and the history.
//!
//! Mutators change the collections only. Views are republished by
//! [`Model::publish`], which runs after a command has fully committed or fully
//! rolled back, and by the commit, undo, redo and view setter entry points.
//! Observers therefore never see a half-applied command.

use std::sync::Arc;

use tracing::{debug, info};

use crate::config::EngineConfig;
use crate::error::{EngineResult, RecordKind};
use crate::models::{EmployeeId, Expense, Person, Schedule};
use crate::query::{
    ExpenseComparator, ExpenseMatcher, ExpensePredicate, ExpenseSortKey, FilteredView,
    PersonComparator, PersonMatcher, PersonPredicate, PersonSortKey, ScheduleComparator,
    ScheduleMatcher, SchedulePredicate, ScheduleSortKey, SortOrder,
};
use crate::source::RecordSource;
use crate::store::{ExpenseList, PersonList, ScheduleList};

use super::history::History;
use super::snapshot::Snapshot;

/// Filtered view over persons.
pub type PersonView = FilteredView<Person, PersonMatcher, PersonSortKey>;
/// Filtered view over schedules.
pub type ScheduleView = FilteredView<Schedule, ScheduleMatcher, ScheduleSortKey>;
/// Filtered view over expenses.
pub type ExpenseView = FilteredView<Expense, ExpenseMatcher, ExpenseSortKey>;

/// The in-memory record model.
///
/// # Example
///
/// ```
/// use staff_ledger::config::EngineConfig;
/// use staff_ledger::models::{EmployeeId, Schedule};
/// use staff_ledger::state::Model;
/// use staff_ledger::store::{ExpenseList, PersonList, ScheduleList};
/// use chrono::NaiveDate;
///
/// let mut model = Model::new(
///     PersonList::new(),
///     ScheduleList::new(),
///     ExpenseList::new(),
///     &EngineConfig::default(),
/// );
///
/// let leave = Schedule::leave(
///     EmployeeId::new("000001").unwrap(),
///     NaiveDate::from_ymd_opt(2019, 2, 2).unwrap(),
/// );
/// model.add_schedule(leave.clone()).unwrap();
/// model.commit_schedule_list();
/// assert!(model.has_schedule(&leave));
///
/// model.undo().unwrap();
/// assert!(!model.has_schedule(&leave));
/// assert!(model.filtered_schedules().is_empty());
/// ```
#[derive(Debug)]
pub struct Model {
    persons: PersonList,
    schedules: ScheduleList,
    expenses: ExpenseList,
    person_view: PersonView,
    schedule_view: ScheduleView,
    expense_view: ExpenseView,
    history: History<Snapshot>,
    default_sort_order: SortOrder,
}

impl Model {
    /// Creates a model whose initial history state is the given collections.
    pub fn new(
        persons: PersonList,
        schedules: ScheduleList,
        expenses: ExpenseList,
        config: &EngineConfig,
    ) -> Self {
        let person_view = PersonView::new(&persons, None);
        let schedule_view = ScheduleView::new(&schedules, None);
        let expense_view = ExpenseView::new(&expenses, None);
        let initial = Snapshot::new(persons.clone(), schedules.clone(), expenses.clone());

        info!(
            persons = persons.len(),
            schedules = schedules.len(),
            expenses = expenses.len(),
            history_limit = ?config.history_limit,
            "Model initialised"
        );

        Self {
            persons,
            schedules,
            expenses,
            person_view,
            schedule_view,
            expense_view,
            history: History::with_limit(initial, config.history_limit),
            default_sort_order: config.default_sort_order,
        }
    }

    /// Creates a model from the collections produced by `source`.
    pub fn from_source<S: RecordSource + ?Sized>(
        source: &S,
        config: &EngineConfig,
    ) -> EngineResult<Self> {
        let (persons, schedules, expenses) = source.load()?;
        Ok(Self::new(persons, schedules, expenses, config))
    }

    /// Sort order filters fall back to.
    pub fn default_sort_order(&self) -> SortOrder {
        self.default_sort_order
    }

    /// A snapshot of the current collections.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::new(
            self.persons.clone(),
            self.schedules.clone(),
            self.expenses.clone(),
        )
    }

    // ---------------------------------------------------------------------
    // Read access
    // ---------------------------------------------------------------------

    /// All persons, unfiltered.
    pub fn persons(&self) -> &PersonList {
        &self.persons
    }

    /// All schedules, unfiltered.
    pub fn schedules(&self) -> &ScheduleList {
        &self.schedules
    }

    /// All expenses, unfiltered.
    pub fn expenses(&self) -> &ExpenseList {
        &self.expenses
    }

    /// The published person view.
    pub fn filtered_persons(&self) -> Arc<[Person]> {
        self.person_view.get()
    }

    /// The published schedule view.
    pub fn filtered_schedules(&self) -> Arc<[Schedule]> {
        self.schedule_view.get()
    }

    /// The published expense view.
    pub fn filtered_expenses(&self) -> Arc<[Expense]> {
        self.expense_view.get()
    }

    /// The person view, including its predicate and comparator.
    pub fn person_view(&self) -> &PersonView {
        &self.person_view
    }

    /// The schedule view.
    pub fn schedule_view(&self) -> &ScheduleView {
        &self.schedule_view
    }

    /// The expense view.
    pub fn expense_view(&self) -> &ExpenseView {
        &self.expense_view
    }

    /// The history of committed snapshots.
    pub fn history(&self) -> &History<Snapshot> {
        &self.history
    }

    // ---------------------------------------------------------------------
    // View configuration
    // ---------------------------------------------------------------------

    /// Filters and optionally sorts the person view.
    pub fn update_filtered_person_list(
        &mut self,
        predicate: PersonPredicate,
        comparator: Option<PersonComparator>,
    ) {
        self.person_view.configure(predicate, comparator, &self.persons);
    }

    /// Filters and optionally sorts the schedule view.
    pub fn update_filtered_schedule_list(
        &mut self,
        predicate: SchedulePredicate,
        comparator: Option<ScheduleComparator>,
    ) {
        self.schedule_view.configure(predicate, comparator, &self.schedules);
    }

    /// Filters and optionally sorts the expense view.
    pub fn update_filtered_expense_list(
        &mut self,
        predicate: ExpensePredicate,
        comparator: Option<ExpenseComparator>,
    ) {
        self.expense_view.configure(predicate, comparator, &self.expenses);
    }

    /// Resets every view to show all records in insertion order.
    pub fn show_all(&mut self) {
        self.update_filtered_person_list(PersonPredicate::all(), None);
        self.update_filtered_schedule_list(SchedulePredicate::all(), None);
        self.update_filtered_expense_list(ExpensePredicate::all(), None);
    }

    /// Registers a listener on the person view.
    pub fn subscribe_persons<F>(&mut self, listener: F)
    where
        F: Fn(&[Person]) + Send + Sync + 'static,
    {
        self.person_view.subscribe(listener);
    }

    /// Registers a listener on the schedule view.
    pub fn subscribe_schedules<F>(&mut self, listener: F)
    where
        F: Fn(&[Schedule]) + Send + Sync + 'static,
    {
        self.schedule_view.subscribe(listener);
    }

    /// Registers a listener on the expense view.
    pub fn subscribe_expenses<F>(&mut self, listener: F)
    where
        F: Fn(&[Expense]) + Send + Sync + 'static,
    {
        self.expense_view.subscribe(listener);
    }

    /// Recomputes any view whose collection changed and notifies listeners.
    pub fn publish(&mut self) {
        self.person_view.refresh(&self.persons);
        self.schedule_view.refresh(&self.schedules);
        self.expense_view.refresh(&self.expenses);
    }

    // ---------------------------------------------------------------------
    // Persons
    // ---------------------------------------------------------------------

    /// Returns true if a person with the same employee id exists.
    pub fn has_person(&self, person: &Person) -> bool {
        self.persons.contains(person)
    }

    /// Looks up a person by employee id.
    pub fn find_person(&self, employee_id: &EmployeeId) -> Option<&Person> {
        self.persons.iter().find(|p| &p.employee_id == employee_id)
    }

    /// Adds a person.
    pub fn add_person(&mut self, person: Person) -> EngineResult<()> {
        self.persons.add(person)
    }

    /// Removes a person.
    pub fn delete_person(&mut self, person: &Person) -> EngineResult<Person> {
        self.persons.remove(person)
    }

    /// Replaces `target` with `edited`.
    pub fn set_person(&mut self, target: &Person, edited: Person) -> EngineResult<()> {
        self.persons.replace(target, edited)
    }

    // ---------------------------------------------------------------------
    // Schedules
    // ---------------------------------------------------------------------

    /// Returns true if the employee already has an entry on that date.
    pub fn has_schedule(&self, schedule: &Schedule) -> bool {
        self.schedules.contains(schedule)
    }

    /// Adds a schedule entry.
    pub fn add_schedule(&mut self, schedule: Schedule) -> EngineResult<()> {
        self.schedules.add(schedule)
    }

    /// Removes a schedule entry.
    pub fn delete_schedule(&mut self, schedule: &Schedule) -> EngineResult<Schedule> {
        self.schedules.remove(schedule)
    }

    /// Removes every schedule entry of an employee.
    pub fn delete_schedules_of(&mut self, employee_id: &EmployeeId) -> usize {
        self.schedules.remove_where(|s| &s.employee_id == employee_id)
    }

    /// Replaces the schedule collection.
    pub fn reset_schedule_list_data(&mut self, schedules: ScheduleList) {
        self.schedules = schedules;
    }

    // ---------------------------------------------------------------------
    // Expenses
    // ---------------------------------------------------------------------

    /// Returns true if an equivalent expense exists.
    pub fn has_expense(&self, expense: &Expense) -> bool {
        self.expenses.contains(expense)
    }

    /// Adds an expense.
    pub fn add_expense(&mut self, expense: Expense) -> EngineResult<()> {
        self.expenses.add(expense)
    }

    /// Removes an expense.
    pub fn delete_expense(&mut self, expense: &Expense) -> EngineResult<Expense> {
        self.expenses.remove(expense)
    }

    /// Removes every expense of an employee.
    pub fn delete_expenses_of(&mut self, employee_id: &EmployeeId) -> usize {
        self.expenses.remove_where(|e| &e.employee_id == employee_id)
    }

    /// Replaces the expense collection.
    pub fn reset_expense_list_data(&mut self, expenses: ExpenseList) {
        self.expenses = expenses;
    }

    // ---------------------------------------------------------------------
    // History
    // ---------------------------------------------------------------------

    /// Commits the current state after a person change.
    pub fn commit_person_list(&mut self) {
        self.commit(RecordKind::Person);
    }

    /// Commits the current state after a schedule change.
    pub fn commit_schedule_list(&mut self) {
        self.commit(RecordKind::Schedule);
    }

    /// Commits the current state after an expense change.
    pub fn commit_expense_list(&mut self) {
        self.commit(RecordKind::Expense);
    }

    /// Commits a snapshot of all three collections and publishes the views.
    pub fn commit(&mut self, changed: RecordKind) {
        let snapshot = self.snapshot();
        self.history.commit(snapshot);
        debug!(changed = %changed, pointer = self.history.pointer(), "Model committed");
        self.publish();
    }

    /// Returns true if there is an earlier state.
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Returns true if there is a later state.
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Restores the previous committed state.
    pub fn undo(&mut self) -> EngineResult<Snapshot> {
        let snapshot = self.history.undo()?.clone();
        self.restore(snapshot.clone());
        Ok(snapshot)
    }

    /// Restores the next committed state.
    pub fn redo(&mut self) -> EngineResult<Snapshot> {
        let snapshot = self.history.redo()?.clone();
        self.restore(snapshot.clone());
        Ok(snapshot)
    }

    /// Puts the collections back to `snapshot` without touching history.
    pub(crate) fn rollback(&mut self, snapshot: Snapshot) {
        let (persons, schedules, expenses) = snapshot.into_parts();
        self.persons = persons;
        self.schedules = schedules;
        self.expenses = expenses;
    }

    fn restore(&mut self, snapshot: Snapshot) {
        self.rollback(snapshot);
        self.publish();
    }
}
