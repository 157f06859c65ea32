//! User-visible command feedback.

use std::collections::BTreeSet;

use chrono::NaiveDate;

// Listing
pub(super) const MESSAGE_PERSONS_LISTED_OVERVIEW: &str = "persons listed!";
pub(super) const MESSAGE_SCHEDULES_LISTED_OVERVIEW: &str = "schedules listed!";
pub(super) const MESSAGE_EXPENSES_LISTED_OVERVIEW: &str = "expenses listed!";

pub(super) const MESSAGE_LIST_SUCCESS: &str = "Listed all persons, schedules and expenses.";

// Scheduling
pub(super) const MESSAGE_NO_PERSON: &str =
    "No observable employees found in list! Try to list/find/filter \
     the employees you want to schedule for";
pub(super) const MESSAGE_NO_DATES: &str = "At least one date must be given";

// Clearing
pub(super) const MESSAGE_SCHEDULES_CLEARED: &str = "Schedule list has been cleared!";
pub(super) const MESSAGE_SCHEDULES_ALREADY_EMPTY: &str = "Schedule list is empty!";
pub(super) const MESSAGE_EXPENSES_CLEARED: &str = "Expenses list has been cleared!";
pub(super) const MESSAGE_EXPENSES_ALREADY_EMPTY: &str = "Expenses list is empty!";

// Filtering
pub(super) const MESSAGE_FILTER_USAGE: &str =
    "filter: lists employees whose department and/or position contains any of the keywords. \
     At least one of department or position must be given";
pub(super) const MESSAGE_DEPARTMENT_KEYWORD_CONSTRAINTS: &str =
    "Department keywords should only contain alphabetic characters";
pub(super) const MESSAGE_POSITION_KEYWORD_CONSTRAINTS: &str =
    "Position keywords should only contain alphabetic characters";

// Editing
pub(super) const MESSAGE_EDIT_NOT_EDITED: &str = "At least one field to edit must be provided.";
pub(super) const MESSAGE_EDIT_UNCHANGED: &str = "The edited employee is identical to the original.";

// History
pub(super) const MESSAGE_UNDO_SUCCESS: &str = "Undo success!";
pub(super) const MESSAGE_REDO_SUCCESS: &str = "Redo success!";

/// "3 persons listed!"
pub(super) fn listed_overview(count: usize, overview: &str) -> String {
    format!("{} {}", count, overview)
}

/// Dates joined as `2019-02-02, 2019-02-03`.
pub(super) fn format_dates(dates: &BTreeSet<NaiveDate>) -> String {
    dates
        .iter()
        .map(NaiveDate::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// "\nAvailable departments: Finance, IT"
pub(super) fn available_values(label: &str, values: &[String]) -> String {
    if values.is_empty() {
        format!("\nNo {} available.", label)
    } else {
        format!("\nAvailable {}: {}", label, values.join(", "))
    }
}
