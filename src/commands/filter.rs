//! View commands: list, filter and find.
//!
//! None of these change a collection, so none of them commit.

use crate::error::{EngineError, EngineResult};
use crate::query::{
    Comparator, ExpensePredicate, ExpenseSortKey, KeywordSet, PersonMatcher, PersonPredicate,
    PersonSortKey, SchedulePredicate, ScheduleSortKey, SortOrder, compare_ignore_case,
};
use crate::state::Model;
use crate::store::PersonList;

use super::CommandResult;
use super::messages::{
    MESSAGE_DEPARTMENT_KEYWORD_CONSTRAINTS, MESSAGE_EXPENSES_LISTED_OVERVIEW,
    MESSAGE_FILTER_USAGE, MESSAGE_LIST_SUCCESS, MESSAGE_PERSONS_LISTED_OVERVIEW,
    MESSAGE_POSITION_KEYWORD_CONSTRAINTS, MESSAGE_SCHEDULES_LISTED_OVERVIEW, available_values,
    listed_overview,
};

/// Department and position keywords to filter employees by.
///
/// # Example
///
/// ```
/// use staff_ledger::commands::FilterCriteria;
/// use staff_ledger::query::{KeywordSet, SortOrder};
///
/// let criteria = FilterCriteria::new(
///     Some(KeywordSet::parse("HR IT")),
///     None,
///     Some(SortOrder::Ascending),
/// )
/// .unwrap();
/// assert!(criteria.position().is_none());
///
/// assert!(FilterCriteria::new(None, None, None).is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct FilterCriteria {
    department: Option<KeywordSet>,
    position: Option<KeywordSet>,
    order: Option<SortOrder>,
}

impl FilterCriteria {
    /// Creates filter criteria. At least one of `department` or `position`
    /// must be given, and keywords may only contain letters.
    pub fn new(
        department: Option<KeywordSet>,
        position: Option<KeywordSet>,
        order: Option<SortOrder>,
    ) -> EngineResult<Self> {
        if department.is_none() && position.is_none() {
            return Err(EngineError::validation(MESSAGE_FILTER_USAGE));
        }
        if let Some(keywords) = &department {
            check_keywords(keywords, MESSAGE_DEPARTMENT_KEYWORD_CONSTRAINTS)?;
        }
        if let Some(keywords) = &position {
            check_keywords(keywords, MESSAGE_POSITION_KEYWORD_CONSTRAINTS)?;
        }
        Ok(Self {
            department,
            position,
            order,
        })
    }

    /// Department keywords, if filtering by department.
    pub fn department(&self) -> Option<&KeywordSet> {
        self.department.as_ref()
    }

    /// Position keywords, if filtering by position.
    pub fn position(&self) -> Option<&KeywordSet> {
        self.position.as_ref()
    }

    /// Requested sort order. `None` uses the configured default.
    pub fn order(&self) -> Option<SortOrder> {
        self.order
    }

    /// The predicate selecting matching employees.
    pub fn predicate(&self) -> PersonPredicate {
        let mut predicate = PersonPredicate::all();
        if let Some(keywords) = &self.department {
            predicate = predicate.and(PersonMatcher::DepartmentKeywords(keywords.clone()).into());
        }
        if let Some(keywords) = &self.position {
            predicate = predicate.and(PersonMatcher::PositionKeywords(keywords.clone()).into());
        }
        predicate
    }

    /// The field results are sorted by: the filtered field, or the name
    /// when both fields are filtered.
    pub fn sort_key(&self) -> PersonSortKey {
        match (&self.department, &self.position) {
            (Some(_), None) => PersonSortKey::Department,
            (None, Some(_)) => PersonSortKey::Position,
            _ => PersonSortKey::Name,
        }
    }
}

fn check_keywords(keywords: &KeywordSet, message: &str) -> EngineResult<()> {
    let valid = keywords
        .keywords()
        .iter()
        .all(|k| k.chars().all(char::is_alphabetic));
    if valid {
        Ok(())
    } else {
        Err(EngineError::validation(message))
    }
}

/// Distinct departments of `persons`, sorted ignoring case.
pub fn available_departments(persons: &PersonList) -> Vec<String> {
    distinct_sorted(persons.iter().map(|p| p.department.to_string()))
}

/// Distinct positions of `persons`, sorted ignoring case.
pub fn available_positions(persons: &PersonList) -> Vec<String> {
    distinct_sorted(persons.iter().map(|p| p.position.to_string()))
}

fn distinct_sorted(values: impl Iterator<Item = String>) -> Vec<String> {
    let mut values: Vec<String> = values.collect();
    values.sort_by(|a, b| compare_ignore_case(a, b).then_with(|| a.cmp(b)));
    values.dedup();
    values
}

pub(super) fn list(model: &mut Model) -> EngineResult<CommandResult> {
    model.show_all();
    Ok(CommandResult::new(
        MESSAGE_LIST_SUCCESS,
        model.filtered_persons().len(),
    ))
}

pub(super) fn filter(model: &mut Model, criteria: &FilterCriteria) -> EngineResult<CommandResult> {
    let order = criteria.order().unwrap_or(model.default_sort_order());
    let comparator = Comparator::new(criteria.sort_key(), order);
    model.update_filtered_person_list(criteria.predicate(), Some(comparator));

    let count = model.filtered_persons().len();
    let mut feedback = listed_overview(count, MESSAGE_PERSONS_LISTED_OVERVIEW);
    if count == 0 {
        if criteria.department().is_some() {
            let departments = available_departments(model.persons());
            feedback.push_str(&available_values("departments", &departments));
        }
        if criteria.position().is_some() {
            let positions = available_positions(model.persons());
            feedback.push_str(&available_values("positions", &positions));
        }
    }
    Ok(CommandResult::new(feedback, count))
}

pub(super) fn find_schedules(
    model: &mut Model,
    predicate: SchedulePredicate,
) -> EngineResult<CommandResult> {
    let by_date = Comparator::new(ScheduleSortKey::Date, SortOrder::Ascending);
    model.update_filtered_schedule_list(predicate, Some(by_date));
    let count = model.filtered_schedules().len();
    Ok(CommandResult::new(
        listed_overview(count, MESSAGE_SCHEDULES_LISTED_OVERVIEW),
        count,
    ))
}

pub(super) fn find_expenses(
    model: &mut Model,
    predicate: ExpensePredicate,
) -> EngineResult<CommandResult> {
    let by_date = Comparator::new(ExpenseSortKey::Date, SortOrder::Ascending);
    model.update_filtered_expense_list(predicate, Some(by_date));
    let count = model.filtered_expenses().len();
    Ok(CommandResult::new(
        listed_overview(count, MESSAGE_EXPENSES_LISTED_OVERVIEW),
        count,
    ))
}
