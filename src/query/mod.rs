//! Predicates, sort policy and filtered views over record collections.

mod predicate;
mod sort;
mod view;

pub use predicate::{
    ExpenseMatcher, ExpensePredicate, KeywordSet, Matcher, PersonMatcher, PersonPredicate,
    Predicate, ScheduleMatcher, SchedulePredicate,
};
pub use sort::{
    Comparator, ExpenseComparator, ExpenseSortKey, MESSAGE_SORT_ORDER_CONSTRAINTS,
    PersonComparator, PersonSortKey, ScheduleComparator, ScheduleSortKey, SortKey, SortOrder,
    compare_ignore_case,
};
pub use view::{FilteredView, Listener};
