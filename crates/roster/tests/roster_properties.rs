//! Behavioral tests for the public roster API.

use roster::{demo, Outcome, Roster, RosterError, Student};

fn student(id: i64, age: u32, gpa: f64) -> Student {
    Student::new(id, format!("Student {id}"), age, "General", gpa)
}

fn active_ids(roster: &Roster) -> Vec<i64> {
    roster.list_active().iter().map(|s| s.id).collect()
}

#[test]
fn duplicate_ids_never_coexist() {
    let mut roster = Roster::new();
    for id in [1, 2, 1, 3, 2, 2] {
        roster.add(student(id, 20, 5.0));
    }

    let ids: Vec<i64> = roster.list().iter().map(|s| s.id).collect();
    assert_eq!(ids, vec![1, 2, 3]);
}

#[test]
fn rejected_add_leaves_roster_unchanged() {
    let mut roster = Roster::new();
    roster.add(student(1, 20, 5.0));
    let before = roster.list().to_vec();

    let outcome = roster.add(Student::new(1, "Clone", 30, "Other", 6.0));
    assert_eq!(
        outcome.cloned(),
        Outcome::failure(RosterError::DuplicateId)
    );
    assert_eq!(roster.list(), before.as_slice());
}

#[test]
fn range_bounds_are_inclusive() {
    let mut roster = Roster::new();

    assert_eq!(roster.add(student(1, 14, 5.0)).message, "Invalid age");
    assert_eq!(roster.add(student(1, 81, 5.0)).message, "Invalid age");
    assert_eq!(roster.add(student(1, 20, -0.1)).message, "Invalid average");
    assert_eq!(roster.add(student(1, 20, 10.1)).message, "Invalid average");
    assert!(roster.is_empty());

    assert!(roster.add(student(1, 15, 5.0)).ok);
    assert!(roster.add(student(2, 80, 5.0)).ok);
    assert!(roster.add(student(3, 20, 0.0)).ok);
    assert!(roster.add(student(4, 20, 10.0)).ok);
    assert_eq!(roster.len(), 4);
}

#[test]
fn lookup_returns_exact_stored_record() {
    let mut roster = Roster::new();
    let mateo = Student::new(1, "Mateo", 20, "Gastronomy", 9.0);
    roster.add(mateo.clone());
    roster.add(student(2, 99, 5.0));

    assert_eq!(roster.find_by_id(1).into_data(), Some(&mateo));
    assert!(!roster.find_by_id(2).ok);
    assert!(!roster.find_by_id(3).ok);
}

#[test]
fn invalid_gpa_update_never_mutates() {
    let mut roster = Roster::new();
    roster.add(student(1, 20, 5.0));
    roster.add(student(2, 21, 6.0));
    let before = roster.list().to_vec();

    for id in [1, 2, 42] {
        let outcome = roster.update_gpa(id, 11.0);
        assert!(!outcome.ok);
        assert_eq!(outcome.message, "Invalid average");
    }
    assert_eq!(roster.list(), before.as_slice());
}

#[test]
fn average_of_empty_and_populated_roster() {
    let mut roster = Roster::new();
    assert!(roster.overall_average().abs() < f64::EPSILON);

    roster.add(student(1, 20, 9.0));
    roster.add(student(2, 20, 8.0));
    roster.add(student(3, 20, 7.0));
    assert!((roster.overall_average() - 8.0).abs() < f64::EPSILON);
}

#[test]
fn deactivated_student_is_filtered_out() {
    let mut roster = Roster::new();
    for seeded in demo::seed() {
        roster.add(seeded);
    }

    assert!(roster.set_active(3, false).ok);
    assert_eq!(active_ids(&roster), vec![1, 2]);
}

#[test]
fn end_to_end_scenario() {
    let mut roster = Roster::new();
    for seeded in demo::seed() {
        assert!(roster.add(seeded).ok);
    }

    let danny = roster.find_by_id(2);
    assert_eq!(danny.data().map(|s| s.name.as_str()), Some("Danny"));
    assert_eq!(danny.data().map(|s| s.gpa), Some(8.0));

    assert!(roster.update_gpa(2, 9.5).ok);
    assert_eq!(roster.find_by_id(2).data().map(|s| s.gpa), Some(9.5));

    assert!(roster.set_active(3, false).ok);
    assert_eq!(active_ids(&roster), vec![1, 2]);

    assert!((roster.overall_average() - 8.5).abs() < f64::EPSILON);
}
