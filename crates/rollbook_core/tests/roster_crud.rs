use chrono::NaiveDate;
use rollbook_core::{Roster, RosterError, Student};
use uuid::Uuid;

fn student(name: &str, surname: &str) -> Student {
    let dob = NaiveDate::from_ymd_opt(2010, 9, 15).unwrap();
    Student::new(name, surname, "5", "A", dob).unwrap()
}

#[test]
fn enroll_and_get_roundtrip() {
    let mut roster = Roster::new();

    let id = roster.enroll(student("Pippo", "VanWoof"));
    let loaded = roster.get(id).unwrap();

    assert_eq!(loaded.name(), "Pippo");
    assert_eq!(loaded.surname(), "VanWoof");
    assert_eq!(roster.len(), 1);
}

#[test]
fn enroll_assigns_distinct_ids() {
    let mut roster = Roster::new();

    let id_a = roster.enroll(student("Pippo", "VanWoof"));
    let id_b = roster.enroll(student("Pippo", "VanWoof"));

    assert_ne!(id_a, id_b);
    assert_eq!(roster.len(), 2);
}

#[test]
fn rename_updates_stored_record() {
    let mut roster = Roster::new();
    let id = roster.enroll(student("Pippo", "VanWoof"));

    roster.rename(id, "Pluto").unwrap();
    assert_eq!(roster.get(id).unwrap().name(), "Pluto");
}

#[test]
fn rename_with_empty_value_fails_and_keeps_prior_name() {
    let mut roster = Roster::new();
    let id = roster.enroll(student("Pippo", "VanWoof"));

    let err = roster.rename(id, "").unwrap_err();
    assert!(matches!(err, RosterError::Invalid(_)));
    assert_eq!(roster.get(id).unwrap().name(), "Pippo");
}

#[test]
fn change_surname_with_empty_value_fails_and_keeps_prior_surname() {
    let mut roster = Roster::new();
    let id = roster.enroll(student("Pippo", "VanWoof"));

    let err = roster.change_surname(id, "").unwrap_err();
    assert!(matches!(err, RosterError::Invalid(_)));
    assert_eq!(roster.get(id).unwrap().surname(), "VanWoof");
}

#[test]
fn operations_on_unknown_id_return_not_found() {
    let mut roster = Roster::new();
    let missing = Uuid::new_v4();

    assert!(roster.get(missing).is_none());
    assert!(matches!(
        roster.rename(missing, "Pluto").unwrap_err(),
        RosterError::NotFound(id) if id == missing
    ));
    assert!(matches!(
        roster.withdraw(missing).unwrap_err(),
        RosterError::NotFound(id) if id == missing
    ));
}

#[test]
fn withdraw_removes_and_returns_the_record() {
    let mut roster = Roster::new();
    let id = roster.enroll(student("Pippo", "VanWoof"));

    let withdrawn = roster.withdraw(id).unwrap();
    assert_eq!(withdrawn.surname(), "VanWoof");
    assert!(roster.is_empty());
    assert!(roster.get(id).is_none());
}

#[test]
fn get_mut_routes_mutation_through_validated_setters() {
    let mut roster = Roster::new();
    let id = roster.enroll(student("Pippo", "VanWoof"));

    let record = roster.get_mut(id).unwrap();
    record.set_name("").unwrap_err();
    record.group = "4".to_string();

    assert_eq!(roster.get(id).unwrap().name(), "Pippo");
    assert_eq!(roster.get(id).unwrap().group, "4");
}

#[test]
fn roll_call_sorts_by_surname_then_name() {
    let mut roster = Roster::new();
    roster.enroll(student("Bruno", "Rossi"));
    roster.enroll(student("Anna", "Bianchi"));
    roster.enroll(student("Carla", "Bianchi"));

    let lines = roster.roll_call();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("Anna Bianchi"));
    assert!(lines[1].starts_with("Carla Bianchi"));
    assert!(lines[2].starts_with("Bruno Rossi"));
    assert!(lines[0].ends_with("classe 5A"));
}

#[test]
fn iter_yields_ascending_id_order() {
    let mut roster = Roster::new();
    roster.enroll(student("Pippo", "VanWoof"));
    roster.enroll(student("Pluto", "DeWoof"));

    let ids: Vec<_> = roster.iter().map(|(id, _)| id).collect();
    let mut sorted = ids.clone();
    sorted.sort();
    assert_eq!(ids, sorted);
}
