//! Commands over leave and work entries.

use std::collections::BTreeSet;

use chrono::NaiveDate;

use crate::error::{EngineError, EngineResult, RecordKind};
use crate::models::{Record, Schedule, ScheduleType};
use crate::query::SchedulePredicate;
use crate::state::Model;
use crate::store::ScheduleList;

use super::messages::{
    MESSAGE_NO_DATES, MESSAGE_NO_PERSON, MESSAGE_SCHEDULES_ALREADY_EMPTY,
    MESSAGE_SCHEDULES_CLEARED, format_dates,
};
use super::{CommandResult, Index};

pub(super) fn add_schedule(model: &mut Model, schedule: Schedule) -> EngineResult<CommandResult> {
    if model.find_person(&schedule.employee_id).is_none() {
        return Err(EngineError::RecordNotFound {
            kind: RecordKind::Person,
            key: schedule.employee_id.to_string(),
        });
    }
    let summary = format!("New schedule added: {}", schedule.identity());
    model.add_schedule(schedule)?;
    model.commit_schedule_list();
    Ok(CommandResult::new(summary, 1))
}

pub(super) fn add_leaves(
    model: &mut Model,
    dates: &BTreeSet<NaiveDate>,
) -> EngineResult<CommandResult> {
    add_entries(model, ScheduleType::Leave, dates)
}

pub(super) fn add_works(
    model: &mut Model,
    dates: &BTreeSet<NaiveDate>,
) -> EngineResult<CommandResult> {
    add_entries(model, ScheduleType::Work, dates)
}

/// Adds one entry per visible employee per date, skipping dates an employee
/// is already scheduled on.
fn add_entries(
    model: &mut Model,
    schedule_type: ScheduleType,
    dates: &BTreeSet<NaiveDate>,
) -> EngineResult<CommandResult> {
    if dates.is_empty() {
        return Err(EngineError::validation(MESSAGE_NO_DATES));
    }
    let persons = model.filtered_persons();
    if persons.is_empty() {
        return Err(EngineError::empty_selection(MESSAGE_NO_PERSON));
    }

    let mut added = 0;
    for person in persons.iter() {
        for date in dates {
            let entry = Schedule::new(person.employee_id.clone(), schedule_type, *date);
            if model.has_schedule(&entry) {
                continue;
            }
            model.add_schedule(entry)?;
            added += 1;
        }
    }

    if added == 0 {
        return Err(EngineError::no_effect(format!(
            "Every selected employee is already scheduled on: {}",
            format_dates(dates)
        )));
    }
    model.commit_schedule_list();
    Ok(CommandResult::new(
        format!(
            "Added {} {} schedule(s) on: {}",
            added,
            schedule_type,
            format_dates(dates)
        ),
        added,
    ))
}

pub(super) fn delete_schedule(model: &mut Model, index: Index) -> EngineResult<CommandResult> {
    let target = model
        .schedule_view()
        .item(index.zero_based())
        .cloned()
        .ok_or_else(|| index.invalid(RecordKind::Schedule))?;
    let removed = model.delete_schedule(&target)?;
    model.commit_schedule_list();
    Ok(CommandResult::new(
        format!("Deleted Schedule: {}", removed.identity()),
        1,
    ))
}

pub(super) fn clear_schedules(model: &mut Model) -> EngineResult<CommandResult> {
    model.update_filtered_schedule_list(SchedulePredicate::all(), None);
    let cleared = model.schedules().len();
    if cleared == 0 {
        return Err(EngineError::no_effect(MESSAGE_SCHEDULES_ALREADY_EMPTY));
    }
    model.reset_schedule_list_data(ScheduleList::new());
    model.commit_schedule_list();
    Ok(CommandResult::new(MESSAGE_SCHEDULES_CLEARED, cleared))
}
