//! Immutable copies of the three record collections.

use crate::store::{ExpenseList, PersonList, ScheduleList};

/// The contents of all three collections at one instant.
///
/// Taking a snapshot is cheap: the collections are shared copy-on-write, so a
/// snapshot only costs a copy when the live collection is next mutated, and
/// only for the collection that changes.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Snapshot {
    persons: PersonList,
    schedules: ScheduleList,
    expenses: ExpenseList,
}

impl Snapshot {
    /// Bundles three collections into a snapshot.
    pub fn new(persons: PersonList, schedules: ScheduleList, expenses: ExpenseList) -> Self {
        Self {
            persons,
            schedules,
            expenses,
        }
    }

    /// The persons at the time of the snapshot.
    pub fn persons(&self) -> &PersonList {
        &self.persons
    }

    /// The schedules at the time of the snapshot.
    pub fn schedules(&self) -> &ScheduleList {
        &self.schedules
    }

    /// The expenses at the time of the snapshot.
    pub fn expenses(&self) -> &ExpenseList {
        &self.expenses
    }

    /// Splits the snapshot back into its collections.
    pub fn into_parts(self) -> (PersonList, ScheduleList, ExpenseList) {
        (self.persons, self.schedules, self.expenses)
    }
}
