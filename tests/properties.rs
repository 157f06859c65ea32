//! Property tests for filtering, sorting and history.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use proptest::prelude::*;

use staff_ledger::commands::{Command, Index, execute};
use staff_ledger::config::EngineConfig;
use staff_ledger::models::{Department, EmployeeId, Name, Person, Position};
use staff_ledger::query::{
    Comparator, KeywordSet, PersonMatcher, PersonPredicate, PersonSortKey, SortOrder,
};
use staff_ledger::state::Model;
use staff_ledger::store::{ExpenseList, PersonList, ScheduleList};

const DEPARTMENTS: [&str; 4] = ["HR", "IT", "Finance", "Legal"];
const POSITIONS: [&str; 3] = ["Intern", "Manager", "Director"];

fn person(i: usize, department: usize, position: usize) -> Person {
    Person::new(
        EmployeeId::new(format!("{:06}", i + 1)).unwrap(),
        Name::new(format!("Person {}", i)).unwrap(),
        Department::new(DEPARTMENTS[department]).unwrap(),
        Position::new(POSITIONS[position]).unwrap(),
    )
}

fn persons_strategy() -> impl Strategy<Value = Vec<Person>> {
    prop::collection::vec((0..DEPARTMENTS.len(), 0..POSITIONS.len()), 0..20).prop_map(|fields| {
        fields
            .into_iter()
            .enumerate()
            .map(|(i, (d, p))| person(i, d, p))
            .collect()
    })
}

fn keywords(pool: &[&str], picks: &[usize]) -> KeywordSet {
    KeywordSet::new(picks.iter().map(|&i| pool[i % pool.len()])).unwrap()
}

fn model(persons: Vec<Person>) -> Model {
    Model::new(
        PersonList::from_records(persons).unwrap(),
        ScheduleList::new(),
        ExpenseList::new(),
        &EngineConfig::default(),
    )
}

#[derive(Debug, Clone)]
enum Op {
    AddWork(u32),
    AddLeave(u32),
    ClearSchedules,
    AddPerson(usize),
    DeleteFirstPerson,
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        (1u32..6).prop_map(Op::AddWork),
        (1u32..6).prop_map(Op::AddLeave),
        Just(Op::ClearSchedules),
        (0usize..10).prop_map(Op::AddPerson),
        Just(Op::DeleteFirstPerson),
    ]
}

fn to_command(op: &Op) -> Command {
    let on = |day: u32| -> BTreeSet<NaiveDate> {
        [NaiveDate::from_ymd_opt(2019, 3, day).unwrap()]
            .into_iter()
            .collect()
    };
    match op {
        Op::AddWork(day) => Command::AddWorks { dates: on(*day) },
        Op::AddLeave(day) => Command::AddLeaves { dates: on(*day) },
        Op::ClearSchedules => Command::ClearSchedules,
        Op::AddPerson(i) => Command::AddPerson(person(*i, i % 4, i % 3)),
        Op::DeleteFirstPerson => Command::DeletePerson {
            index: Index::from_one_based(1).unwrap(),
        },
    }
}

proptest! {
    #[test]
    fn and_filter_is_intersection(
        persons in persons_strategy(),
        department_picks in prop::collection::vec(0usize..4, 1..3),
        position_picks in prop::collection::vec(0usize..3, 1..3),
    ) {
        let by_department: PersonPredicate =
            PersonMatcher::DepartmentKeywords(keywords(&DEPARTMENTS, &department_picks)).into();
        let by_position: PersonPredicate =
            PersonMatcher::PositionKeywords(keywords(&POSITIONS, &position_picks)).into();

        let expected: Vec<Person> = persons
            .iter()
            .filter(|p| by_department.test(*p) && by_position.test(*p))
            .cloned()
            .collect();

        let mut model = model(persons);
        model.update_filtered_person_list(by_department.and(by_position), None);
        prop_assert_eq!(model.filtered_persons().to_vec(), expected);
    }

    #[test]
    fn show_all_is_identity_for_and(persons in persons_strategy(), picks in prop::collection::vec(0usize..4, 1..3)) {
        let predicate: PersonPredicate =
            PersonMatcher::DepartmentKeywords(keywords(&DEPARTMENTS, &picks)).into();
        let left = PersonPredicate::all().and(predicate.clone());
        let right = predicate.clone().and(PersonPredicate::all());

        for p in &persons {
            prop_assert_eq!(left.test(p), predicate.test(p));
            prop_assert_eq!(right.test(p), predicate.test(p));
        }
    }

    #[test]
    fn descending_reverses_ascending_without_ties(persons in persons_strategy()) {
        let mut ascending = persons.clone();
        Comparator::new(PersonSortKey::Name, SortOrder::Ascending).sort(&mut ascending);
        let mut descending = persons;
        Comparator::new(PersonSortKey::Name, SortOrder::Descending).sort(&mut descending);

        descending.reverse();
        prop_assert_eq!(ascending, descending);
    }

    #[test]
    fn ties_keep_insertion_order_in_both_directions(
        persons in persons_strategy(),
        descending in any::<bool>(),
    ) {
        let order = if descending { SortOrder::Descending } else { SortOrder::Ascending };
        let mut sorted = persons.clone();
        Comparator::new(PersonSortKey::Department, order).sort(&mut sorted);

        for department in DEPARTMENTS {
            let original: Vec<&Person> = persons
                .iter()
                .filter(|p| p.department.as_str() == department)
                .collect();
            let after: Vec<&Person> = sorted
                .iter()
                .filter(|p| p.department.as_str() == department)
                .collect();
            prop_assert_eq!(original, after);
        }
    }

    #[test]
    fn undo_all_restores_initial_and_redo_all_restores_final(
        persons in persons_strategy(),
        ops in prop::collection::vec(op_strategy(), 0..12),
    ) {
        let mut model = model(persons);
        let initial = model.snapshot();

        let mut committed = 0;
        for op in &ops {
            let before = model.snapshot();
            match execute(to_command(op), &mut model) {
                Ok(_) => committed += 1,
                Err(_) => prop_assert_eq!(model.snapshot(), before),
            }
        }
        let last = model.snapshot();
        prop_assert_eq!(model.history().len(), committed + 1);

        for _ in 0..committed {
            execute(Command::Undo, &mut model).unwrap();
        }
        prop_assert_eq!(model.snapshot(), initial);
        prop_assert!(!model.can_undo());

        for _ in 0..committed {
            execute(Command::Redo, &mut model).unwrap();
        }
        prop_assert_eq!(model.snapshot(), last);
        prop_assert!(!model.can_redo());
    }
}
