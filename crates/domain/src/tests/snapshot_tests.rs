// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{Course, CourseSnapshot, DomainError, NewCourseParams, Period};

use super::helpers::{create_test_course, create_test_params, manual_task, teacher};

fn create_populated_course() -> Course {
    let mut course: Course = Course::new(NewCourseParams {
        collaborators: vec![String::from("t3"), String::from("t2")],
        students: vec![String::from("s1")],
        ..create_test_params()
    })
    .unwrap();
    course
        .add_manual_checking_task(&teacher("t1"), manual_task("Essay"))
        .unwrap();
    course
        .add_manual_checking_task(&teacher("t2"), manual_task("Report"))
        .unwrap();
    course
}

#[test]
fn test_snapshot_is_ordered() {
    let snapshot: CourseSnapshot = create_populated_course().snapshot();

    assert_eq!(snapshot.collaborators, vec!["t2", "t3"]);
    assert_eq!(snapshot.tasks.len(), 2);
    assert_eq!(snapshot.tasks[0].number(), 1);
    assert_eq!(snapshot.tasks[1].number(), 2);
    assert_eq!(snapshot.next_task_number, 3);
}

#[test]
fn test_restore_rebuilds_course() {
    let course: Course = create_populated_course();

    let restored: Course = Course::restore(course.snapshot()).unwrap();

    assert_eq!(restored, course);
}

#[test]
fn test_snapshot_json_restores() {
    let course: Course = create_populated_course();
    let json: String = serde_json::to_string(&course.snapshot()).unwrap();

    let snapshot: CourseSnapshot = serde_json::from_str(&json).unwrap();

    assert_eq!(Course::restore(snapshot).unwrap(), course);
}

#[test]
fn test_restore_rejects_gap_in_task_numbers() {
    let mut snapshot: CourseSnapshot = create_populated_course().snapshot();
    snapshot.tasks.remove(0);

    assert!(matches!(
        Course::restore(snapshot),
        Err(DomainError::InvalidSnapshot(_))
    ));
}

#[test]
fn test_restore_rejects_task_at_next_number() {
    let mut snapshot: CourseSnapshot = create_populated_course().snapshot();
    snapshot.next_task_number = 2;

    assert!(matches!(
        Course::restore(snapshot),
        Err(DomainError::InvalidSnapshot(_))
    ));
}

#[test]
fn test_restore_rejects_zero_next_number() {
    let mut snapshot: CourseSnapshot = create_test_course().snapshot();
    snapshot.next_task_number = 0;

    assert!(matches!(
        Course::restore(snapshot),
        Err(DomainError::InvalidSnapshot(_))
    ));
}

#[test]
fn test_restore_rejects_missing_fields() {
    let base: CourseSnapshot = create_test_course().snapshot();

    let mut no_id: CourseSnapshot = base.clone();
    no_id.id = String::new();
    assert_eq!(Course::restore(no_id).unwrap_err(), DomainError::EmptyCourseId);

    let mut no_creator: CourseSnapshot = base.clone();
    no_creator.creator_id = String::new();
    assert_eq!(
        Course::restore(no_creator).unwrap_err(),
        DomainError::MissingCreator
    );

    let mut no_period: CourseSnapshot = base;
    no_period.period = Period::default();
    assert_eq!(Course::restore(no_period).unwrap_err(), DomainError::ZeroPeriod);
}

#[test]
fn test_restore_drops_creator_from_collaborators() {
    let mut snapshot: CourseSnapshot = create_test_course().snapshot();
    snapshot.collaborators = vec![String::from("t1"), String::from("t2")];

    let course: Course = Course::restore(snapshot).unwrap();

    assert_eq!(course.collaborators().collect::<Vec<_>>(), vec!["t2"]);
}
