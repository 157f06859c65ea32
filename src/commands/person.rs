//! Commands over employees.

use tracing::debug;

use crate::error::{EngineError, EngineResult, RecordKind};
use crate::models::{Department, EmployeeId, Name, Person, Position};
use crate::state::Model;

use super::messages::{MESSAGE_EDIT_NOT_EDITED, MESSAGE_EDIT_UNCHANGED};
use super::{CommandResult, Index};

/// Fields to change on an employee. Fields left as `None` keep their value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PersonEdit {
    /// New employee id. Schedules and expenses follow the employee.
    pub employee_id: Option<EmployeeId>,
    /// New name.
    pub name: Option<Name>,
    /// New phone number.
    pub phone: Option<String>,
    /// New email address.
    pub email: Option<String>,
    /// New department.
    pub department: Option<Department>,
    /// New position.
    pub position: Option<Position>,
    /// New tags, replacing the existing ones.
    pub tags: Option<Vec<String>>,
}

impl PersonEdit {
    /// Returns true if at least one field is set.
    pub fn is_any_field_edited(&self) -> bool {
        self.employee_id.is_some()
            || self.name.is_some()
            || self.phone.is_some()
            || self.email.is_some()
            || self.department.is_some()
            || self.position.is_some()
            || self.tags.is_some()
    }

    /// Applies the edit to a copy of `person`.
    pub fn apply(&self, person: &Person) -> Person {
        Person {
            employee_id: self
                .employee_id
                .clone()
                .unwrap_or_else(|| person.employee_id.clone()),
            name: self.name.clone().unwrap_or_else(|| person.name.clone()),
            phone: self.phone.clone().unwrap_or_else(|| person.phone.clone()),
            email: self.email.clone().unwrap_or_else(|| person.email.clone()),
            department: self
                .department
                .clone()
                .unwrap_or_else(|| person.department.clone()),
            position: self
                .position
                .clone()
                .unwrap_or_else(|| person.position.clone()),
            tags: self.tags.clone().unwrap_or_else(|| person.tags.clone()),
        }
    }
}

fn person_at(model: &Model, index: Index) -> EngineResult<Person> {
    model
        .person_view()
        .item(index.zero_based())
        .cloned()
        .ok_or_else(|| index.invalid(RecordKind::Person))
}

pub(super) fn add_person(model: &mut Model, person: Person) -> EngineResult<CommandResult> {
    let summary = format!("New employee added: {}", describe(&person));
    model.add_person(person)?;
    model.commit_person_list();
    Ok(CommandResult::new(summary, 1))
}

pub(super) fn delete_person(model: &mut Model, index: Index) -> EngineResult<CommandResult> {
    let target = person_at(model, index)?;
    let removed = model.delete_person(&target)?;
    let schedules = model.delete_schedules_of(&removed.employee_id);
    let expenses = model.delete_expenses_of(&removed.employee_id);
    debug!(
        employee_id = %removed.employee_id,
        schedules,
        expenses,
        "Cascaded employee deletion"
    );
    model.commit_person_list();
    Ok(CommandResult::new(
        format!("Deleted Employee: {}", describe(&removed)),
        1 + schedules + expenses,
    ))
}

pub(super) fn edit_person(
    model: &mut Model,
    index: Index,
    edit: PersonEdit,
) -> EngineResult<CommandResult> {
    if !edit.is_any_field_edited() {
        return Err(EngineError::validation(MESSAGE_EDIT_NOT_EDITED));
    }
    let target = person_at(model, index)?;
    let edited = edit.apply(&target);
    if edited == target {
        return Err(EngineError::no_effect(MESSAGE_EDIT_UNCHANGED));
    }

    model.set_person(&target, edited.clone())?;
    if edited.employee_id != target.employee_id {
        rekey(model, &target.employee_id, &edited.employee_id)?;
    }
    model.commit_person_list();
    Ok(CommandResult::new(
        format!("Edited Employee: {}", describe(&edited)),
        1,
    ))
}

/// Moves every schedule and expense of `from` over to `to`.
fn rekey(model: &mut Model, from: &EmployeeId, to: &EmployeeId) -> EngineResult<()> {
    let schedules = model
        .schedules()
        .iter()
        .cloned()
        .map(|mut s| {
            if &s.employee_id == from {
                s.employee_id = to.clone();
            }
            s
        })
        .collect();
    let mut schedule_list = model.schedules().clone();
    schedule_list.replace_all(schedules)?;
    model.reset_schedule_list_data(schedule_list);

    let expenses = model
        .expenses()
        .iter()
        .cloned()
        .map(|mut e| {
            if &e.employee_id == from {
                e.employee_id = to.clone();
            }
            e
        })
        .collect();
    let mut expense_list = model.expenses().clone();
    expense_list.replace_all(expenses)?;
    model.reset_expense_list_data(expense_list);
    Ok(())
}

fn describe(person: &Person) -> String {
    format!(
        "{} ({}) {}, {}",
        person.name, person.employee_id, person.department, person.position
    )
}
