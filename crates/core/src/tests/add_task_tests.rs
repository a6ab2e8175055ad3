// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use coursework_domain::{
    Course, Deadline, DomainError, ErrorKind, MAX_TASK_TITLE_CHARS, TaskType, TestData, TestPoint,
};
use time::macros::datetime;

use super::helpers::{create_test_handlers, teacher};
use crate::{AddTask, Context, CoreError};

fn create_test_deadline() -> Deadline {
    Deadline::new(
        datetime!(2024-03-01 12:00 UTC),
        datetime!(2024-03-15 12:00 UTC),
    )
    .unwrap()
}

fn add_task_command(task_type: &str) -> AddTask {
    AddTask {
        academic: teacher("t1"),
        course_id: String::from("c1"),
        task_type: task_type.to_string(),
        title: String::from("Task"),
        description: String::from("Do the thing"),
        deadline: Some(create_test_deadline()),
        test_data: vec![TestData::new("1", "1").unwrap()],
        test_points: vec![
            TestPoint::new("q", vec![String::from("a"), String::from("b")], vec![0]).unwrap(),
        ],
    }
}

#[test]
fn test_add_task_numbers_from_one() {
    let (handlers, repository) = create_test_handlers();
    let ctx: Context = Context::background();

    let first: u32 = handlers
        .add_task
        .handle(&ctx, add_task_command("ManualChecking"))
        .unwrap();
    let second: u32 = handlers
        .add_task
        .handle(&ctx, add_task_command("auto_code_checking"))
        .unwrap();
    let third: u32 = handlers
        .add_task
        .handle(&ctx, add_task_command("testing"))
        .unwrap();

    assert_eq!((first, second, third), (1, 2, 3));
    let stored: Course = repository.stored("c1").unwrap();
    assert_eq!(stored.task(1).unwrap().task_type(), TaskType::ManualChecking);
    assert_eq!(stored.task(2).unwrap().task_type(), TaskType::AutoCodeChecking);
    assert_eq!(stored.task(3).unwrap().task_type(), TaskType::Testing);
}

#[test]
fn test_add_task_ignores_payload_illegal_for_kind() {
    let (handlers, repository) = create_test_handlers();

    handlers
        .add_task
        .handle(&Context::background(), add_task_command("ManualChecking"))
        .unwrap();
    handlers
        .add_task
        .handle(&Context::background(), add_task_command("Testing"))
        .unwrap();

    let stored: Course = repository.stored("c1").unwrap();
    assert_eq!(
        stored.task(1).unwrap().deadline().unwrap(),
        Some(&create_test_deadline())
    );
    assert!(matches!(
        stored.task(1).unwrap().test_data(),
        Err(DomainError::TaskHasNoTestData { .. })
    ));
    assert!(matches!(
        stored.task(2).unwrap().deadline(),
        Err(DomainError::TaskHasNoDeadline { .. })
    ));
    assert_eq!(stored.task(2).unwrap().test_points().unwrap().len(), 1);
}

#[test]
fn test_add_task_unknown_type() {
    let (handlers, repository) = create_test_handlers();

    let err: CoreError = handlers
        .add_task
        .handle(&Context::background(), add_task_command("essay"))
        .unwrap_err();

    assert!(matches!(err, CoreError::UnknownTaskType(ref tag) if tag == "essay"));
    assert!(err.domain_error().is_none());
    assert_eq!(err.kind(), ErrorKind::Validation);
    assert_eq!(repository.writes(), 0);
}

#[test]
fn test_add_task_by_student_is_rejected() {
    let (handlers, repository) = create_test_handlers();

    let err: CoreError = handlers
        .add_task
        .handle(
            &Context::background(),
            AddTask {
                academic: super::helpers::student("s1"),
                ..add_task_command("Testing")
            },
        )
        .unwrap_err();

    assert!(err.is_academic_cant_edit_course());
    assert_eq!(repository.stored("c1").unwrap().tasks_count(), 0);
}

#[test]
fn test_rejected_task_does_not_consume_number() {
    let (handlers, _repository) = create_test_handlers();
    let ctx: Context = Context::background();

    let err: CoreError = handlers
        .add_task
        .handle(
            &ctx,
            AddTask {
                title: "x".repeat(MAX_TASK_TITLE_CHARS + 1),
                ..add_task_command("ManualChecking")
            },
        )
        .unwrap_err();
    assert!(matches!(
        err.domain_error(),
        Some(DomainError::TextTooLong { .. })
    ));

    let number: u32 = handlers
        .add_task
        .handle(&ctx, add_task_command("ManualChecking"))
        .unwrap();

    assert_eq!(number, 1);
}

#[test]
fn test_add_task_rejects_deserialized_test_point() {
    let (handlers, repository) = create_test_handlers();
    let test_point: TestPoint = serde_json::from_str(
        r#"{"description":"q","variants":["a"],"correct_variant_numbers":[7]}"#,
    )
    .unwrap();

    let err: CoreError = handlers
        .add_task
        .handle(
            &Context::background(),
            AddTask {
                test_points: vec![test_point],
                ..add_task_command("Testing")
            },
        )
        .unwrap_err();

    assert!(matches!(
        err.domain_error(),
        Some(DomainError::InvalidTestPoint(_))
    ));
    assert_eq!(err.kind(), ErrorKind::Validation);
    assert_eq!(repository.stored("c1").unwrap().tasks_count(), 0);
}
