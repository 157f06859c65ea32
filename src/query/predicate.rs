//! Composable record predicates.
//!
//! A [`Predicate`] is a conjunction of matcher clauses. The empty conjunction
//! accepts every record ("show all"). [`Predicate::and`] concatenates clauses,
//! so composition is associative and [`Predicate::all`] is its identity on
//! both sides.

use std::fmt::Debug;

use chrono::NaiveDate;

use crate::error::{EngineError, EngineResult};
use crate::models::{EmployeeId, Expense, ExpenseCategory, Person, Schedule, ScheduleType};

/// A single test over one record kind.
pub trait Matcher<T>: Clone + Debug + PartialEq {
    /// Returns true if `record` satisfies this clause.
    fn matches(&self, record: &T) -> bool;
}

/// A conjunction of matcher clauses.
///
/// # Example
///
/// ```
/// use staff_ledger::query::{KeywordSet, PersonMatcher, PersonPredicate};
///
/// let hr = PersonPredicate::matching(PersonMatcher::DepartmentKeywords(KeywordSet::parse("HR")));
/// let combined = PersonPredicate::all().and(hr.clone());
/// assert_eq!(combined, hr);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Predicate<M> {
    clauses: Vec<M>,
}

impl<M> Predicate<M> {
    /// The predicate that accepts every record.
    pub fn all() -> Self {
        Self {
            clauses: Vec::new(),
        }
    }

    /// A predicate with a single clause.
    pub fn matching(matcher: M) -> Self {
        Self {
            clauses: vec![matcher],
        }
    }

    /// Returns a predicate true iff both `self` and `other` are true.
    pub fn and(mut self, other: Self) -> Self {
        self.clauses.extend(other.clauses);
        self
    }

    /// Returns true if this is the show-all predicate.
    pub fn is_show_all(&self) -> bool {
        self.clauses.is_empty()
    }

    /// Evaluates the predicate against a record.
    pub fn test<T>(&self, record: &T) -> bool
    where
        M: Matcher<T>,
    {
        self.clauses.iter().all(|clause| clause.matches(record))
    }
}

impl<M> Default for Predicate<M> {
    fn default() -> Self {
        Self::all()
    }
}

impl<M> From<M> for Predicate<M> {
    fn from(matcher: M) -> Self {
        Self::matching(matcher)
    }
}

/// Upper-cased keywords matched against the whitespace separated tokens of a
/// field, ignoring case.
///
/// A blank keyword never matches, because field tokens are never blank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordSet {
    keywords: Vec<String>,
}

impl KeywordSet {
    /// Creates a keyword set. An empty list is rejected.
    pub fn new<I, S>(keywords: I) -> EngineResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let keywords: Vec<String> = keywords
            .into_iter()
            .map(|k| k.as_ref().trim().to_uppercase())
            .collect();
        if keywords.is_empty() {
            return Err(EngineError::validation("At least one keyword must be given"));
        }
        Ok(Self { keywords })
    }

    /// Splits raw input on whitespace. Whitespace-only input becomes a single
    /// blank keyword, which matches nothing.
    pub fn parse(input: &str) -> Self {
        let mut keywords: Vec<String> = input
            .split_whitespace()
            .map(|k| k.to_uppercase())
            .collect();
        if keywords.is_empty() {
            keywords.push(String::new());
        }
        Self { keywords }
    }

    /// The normalised keywords.
    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    /// Returns true if any keyword equals any token of `field`, both upper-cased.
    pub fn matches_field(&self, field: &str) -> bool {
        field.split_whitespace().any(|token| {
            let token = token.to_uppercase();
            self.keywords
                .iter()
                .any(|keyword| !keyword.is_empty() && *keyword == token)
        })
    }
}

/// Clauses over a [`Person`].
#[derive(Debug, Clone, PartialEq)]
pub enum PersonMatcher {
    /// Department contains any keyword.
    DepartmentKeywords(KeywordSet),
    /// Position contains any keyword.
    PositionKeywords(KeywordSet),
    /// Name contains any keyword.
    NameKeywords(KeywordSet),
    /// Exact employee id.
    EmployeeId(EmployeeId),
}

impl Matcher<Person> for PersonMatcher {
    fn matches(&self, person: &Person) -> bool {
        match self {
            PersonMatcher::DepartmentKeywords(keywords) => {
                keywords.matches_field(person.department.as_str())
            }
            PersonMatcher::PositionKeywords(keywords) => {
                keywords.matches_field(person.position.as_str())
            }
            PersonMatcher::NameKeywords(keywords) => keywords.matches_field(person.name.as_str()),
            PersonMatcher::EmployeeId(id) => &person.employee_id == id,
        }
    }
}

/// Clauses over a [`Schedule`].
#[derive(Debug, Clone, PartialEq)]
pub enum ScheduleMatcher {
    /// Belongs to the employee.
    EmployeeId(EmployeeId),
    /// Is of the given type.
    Type(ScheduleType),
    /// Falls on the date.
    Date(NaiveDate),
    /// Falls within the inclusive range.
    DateRange {
        /// First date of the range.
        from: NaiveDate,
        /// Last date of the range.
        to: NaiveDate,
    },
}

impl Matcher<Schedule> for ScheduleMatcher {
    fn matches(&self, schedule: &Schedule) -> bool {
        match self {
            ScheduleMatcher::EmployeeId(id) => &schedule.employee_id == id,
            ScheduleMatcher::Type(schedule_type) => schedule.schedule_type == *schedule_type,
            ScheduleMatcher::Date(date) => schedule.date == *date,
            ScheduleMatcher::DateRange { from, to } => schedule.date >= *from && schedule.date <= *to,
        }
    }
}

/// Clauses over an [`Expense`].
#[derive(Debug, Clone, PartialEq)]
pub enum ExpenseMatcher {
    /// Claimed by the employee.
    EmployeeId(EmployeeId),
    /// Claimed under the category.
    Category(ExpenseCategory),
    /// Incurred within the inclusive range.
    DateRange {
        /// First date of the range.
        from: NaiveDate,
        /// Last date of the range.
        to: NaiveDate,
    },
}

impl Matcher<Expense> for ExpenseMatcher {
    fn matches(&self, expense: &Expense) -> bool {
        match self {
            ExpenseMatcher::EmployeeId(id) => &expense.employee_id == id,
            ExpenseMatcher::Category(category) => expense.category == *category,
            ExpenseMatcher::DateRange { from, to } => expense.date >= *from && expense.date <= *to,
        }
    }
}

/// Predicate over persons.
pub type PersonPredicate = Predicate<PersonMatcher>;
/// Predicate over schedules.
pub type SchedulePredicate = Predicate<ScheduleMatcher>;
/// Predicate over expenses.
pub type ExpensePredicate = Predicate<ExpenseMatcher>;
