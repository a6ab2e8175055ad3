// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use time::macros::datetime;

use crate::{
    AutoCodeCheckingTaskParams, Course, Deadline, DomainError, MAX_TEST_DATA_CHARS, MAX_TASK_DESCRIPTION_CHARS,
    MAX_TASK_TITLE_CHARS, ManualCheckingTaskParams, NewCourseParams, Task, TaskKind, TaskType,
    TestData, TestPoint, TestingTaskParams,
};

use super::helpers::{
    create_test_course, create_test_data, create_test_deadline, create_test_params,
    create_test_points, manual_task, student, teacher,
};

fn testing_task(title: &str) -> TestingTaskParams {
    TestingTaskParams {
        title: title.to_string(),
        description: String::from("Quiz"),
        test_points: create_test_points(),
    }
}

fn auto_task(title: &str) -> AutoCodeCheckingTaskParams {
    AutoCodeCheckingTaskParams {
        title: title.to_string(),
        description: String::from("Sum two numbers"),
        deadline: Some(create_test_deadline()),
        test_data: create_test_data(),
    }
}

#[test]
fn test_task_numbers_are_sequential() {
    let mut course: Course = create_test_course();

    let first: u32 = course
        .add_manual_checking_task(&teacher("t1"), manual_task("Essay"))
        .unwrap();
    let second: u32 = course
        .add_testing_task(&teacher("t1"), testing_task("Quiz"))
        .unwrap();
    let third: u32 = course
        .add_auto_code_checking_task(&teacher("t1"), auto_task("Sum"))
        .unwrap();

    assert_eq!((first, second, third), (1, 2, 3));
    assert_eq!(course.tasks_count(), 3);
    assert_eq!(course.next_task_number(), 4);

    let types: Vec<TaskType> = course.tasks().map(Task::task_type).collect();
    assert_eq!(
        types,
        vec![
            TaskType::ManualChecking,
            TaskType::Testing,
            TaskType::AutoCodeChecking
        ]
    );
}

#[test]
fn test_collaborator_can_add_task() {
    let mut course: Course = Course::new(NewCourseParams {
        collaborators: vec![String::from("t2")],
        ..create_test_params()
    })
    .unwrap();

    let number: u32 = course
        .add_manual_checking_task(&teacher("t2"), manual_task("Essay"))
        .unwrap();

    assert_eq!(number, 1);
}

#[test]
fn test_student_cannot_add_task() {
    let mut course: Course = Course::new(NewCourseParams {
        students: vec![String::from("s1")],
        ..create_test_params()
    })
    .unwrap();

    let result: Result<u32, DomainError> =
        course.add_manual_checking_task(&student("s1"), manual_task("Essay"));

    assert!(result.unwrap_err().is_academic_cant_edit_course());
    assert_eq!(course.tasks_count(), 0);
    assert_eq!(course.next_task_number(), 1);
}

#[test]
fn test_rejected_task_does_not_consume_number() {
    let mut course: Course = create_test_course();

    let result: Result<u32, DomainError> = course.add_manual_checking_task(
        &teacher("t1"),
        ManualCheckingTaskParams {
            title: "x".repeat(MAX_TASK_TITLE_CHARS + 1),
            ..manual_task("")
        },
    );
    assert!(matches!(result, Err(DomainError::TextTooLong { .. })));

    let number: u32 = course
        .add_manual_checking_task(&teacher("t1"), manual_task("Essay"))
        .unwrap();

    assert_eq!(number, 1);
}

#[test]
fn test_task_text_limits() {
    let mut course: Course = create_test_course();

    let at_limit: u32 = course
        .add_manual_checking_task(
            &teacher("t1"),
            ManualCheckingTaskParams {
                title: "t".repeat(MAX_TASK_TITLE_CHARS),
                description: "d".repeat(MAX_TASK_DESCRIPTION_CHARS),
                deadline: None,
            },
        )
        .unwrap();
    assert_eq!(at_limit, 1);

    let err: DomainError = course
        .add_manual_checking_task(
            &teacher("t1"),
            ManualCheckingTaskParams {
                title: String::from("Essay"),
                description: "d".repeat(MAX_TASK_DESCRIPTION_CHARS + 1),
                deadline: None,
            },
        )
        .unwrap_err();
    assert_eq!(
        err,
        DomainError::TextTooLong {
            field: "task description",
            max: MAX_TASK_DESCRIPTION_CHARS,
            actual: MAX_TASK_DESCRIPTION_CHARS + 1,
        }
    );
}

#[test]
fn test_task_fields_follow_kind() {
    let mut course: Course = create_test_course();
    course
        .add_manual_checking_task(&teacher("t1"), manual_task("Essay"))
        .unwrap();
    course
        .add_auto_code_checking_task(&teacher("t1"), auto_task("Sum"))
        .unwrap();
    course
        .add_testing_task(&teacher("t1"), testing_task("Quiz"))
        .unwrap();

    let manual: &Task = course.task(1).unwrap();
    assert_eq!(manual.deadline().unwrap(), Some(&create_test_deadline()));
    assert!(matches!(
        manual.test_points(),
        Err(DomainError::TaskHasNoTestPoints {
            task_number: 1,
            task_type: TaskType::ManualChecking,
        })
    ));
    assert!(matches!(
        manual.test_data(),
        Err(DomainError::TaskHasNoTestData { .. })
    ));

    let auto: &Task = course.task(2).unwrap();
    assert_eq!(auto.test_data().unwrap(), create_test_data().as_slice());
    assert!(auto.deadline().unwrap().is_some());

    let testing: &Task = course.task(3).unwrap();
    assert_eq!(testing.test_points().unwrap(), create_test_points().as_slice());
    assert!(matches!(
        testing.deadline(),
        Err(DomainError::TaskHasNoDeadline {
            task_number: 3,
            task_type: TaskType::Testing,
        })
    ));
}

#[test]
fn test_replace_deadline_on_testing_task_fails() {
    let mut course: Course = create_test_course();
    course
        .add_testing_task(&teacher("t1"), testing_task("Quiz"))
        .unwrap();
    let before: Course = course.clone();

    let result: Result<(), DomainError> =
        course.replace_task_deadline(&teacher("t1"), 1, create_test_deadline());

    assert!(matches!(result, Err(DomainError::TaskHasNoDeadline { .. })));
    assert_eq!(course, before);
}

#[test]
fn test_replace_task_fields() {
    let mut course: Course = create_test_course();
    course
        .add_auto_code_checking_task(&teacher("t1"), auto_task("Sum"))
        .unwrap();
    let later: Deadline = Deadline::new(
        datetime!(2024-04-01 09:00 UTC),
        datetime!(2024-04-08 09:00 UTC),
    )
    .unwrap();

    course.rename_task(&teacher("t1"), 1, "Add").unwrap();
    course
        .replace_task_description(&teacher("t1"), 1, "Add two integers")
        .unwrap();
    course
        .replace_task_deadline(&teacher("t1"), 1, later)
        .unwrap();
    course
        .replace_task_test_data(&teacher("t1"), 1, Vec::new())
        .unwrap();

    let task: &Task = course.task(1).unwrap();
    assert_eq!(task.title(), "Add");
    assert_eq!(task.description(), "Add two integers");
    assert_eq!(task.deadline().unwrap(), Some(&later));
    assert!(task.test_data().unwrap().is_empty());
    assert!(matches!(
        course.replace_task_test_points(&teacher("t1"), 1, create_test_points()),
        Err(DomainError::TaskHasNoTestPoints { .. })
    ));
}

#[test]
fn test_replace_test_points() {
    let mut course: Course = create_test_course();
    course
        .add_testing_task(&teacher("t1"), testing_task("Quiz"))
        .unwrap();

    course
        .replace_task_test_points(&teacher("t1"), 1, Vec::new())
        .unwrap();

    assert!(course.task(1).unwrap().test_points().unwrap().is_empty());
    assert!(matches!(
        course.replace_task_test_data(&teacher("t1"), 1, create_test_data()),
        Err(DomainError::TaskHasNoTestData { .. })
    ));
}

#[test]
fn test_edit_missing_task() {
    let mut course: Course = create_test_course();

    let result: Result<(), DomainError> = course.rename_task(&teacher("t1"), 4, "Nope");

    assert_eq!(
        result.unwrap_err(),
        DomainError::CourseHasNoSuchTask {
            course_id: String::from("c1"),
            task_number: 4,
        }
    );
    assert!(matches!(
        course.task(0),
        Err(DomainError::CourseHasNoSuchTask { task_number: 0, .. })
    ));
}

#[test]
fn test_outsider_cannot_edit_task() {
    let mut course: Course = create_test_course();
    course
        .add_manual_checking_task(&teacher("t1"), manual_task("Essay"))
        .unwrap();

    let result: Result<(), DomainError> = course.rename_task(&teacher("t9"), 1, "Mine");

    assert!(result.unwrap_err().is_academic_cant_edit_course());
    assert_eq!(course.task(1).unwrap().title(), "Essay");
}

#[test]
fn test_task_type_parse() {
    assert_eq!(
        "manual_checking".parse::<TaskType>().unwrap(),
        TaskType::ManualChecking
    );
    assert_eq!(
        "AutoCodeChecking".parse::<TaskType>().unwrap(),
        TaskType::AutoCodeChecking
    );
    assert_eq!("testing".parse::<TaskType>().unwrap(), TaskType::Testing);
    assert!(matches!(
        "essay".parse::<TaskType>(),
        Err(DomainError::InvalidTaskType(_))
    ));
}

#[test]
fn test_task_restore_rejects_zero_number() {
    let result: Result<Task, DomainError> = Task::restore(
        0,
        "Essay",
        "",
        TaskKind::ManualChecking { deadline: None },
    );

    assert!(matches!(result, Err(DomainError::InvalidSnapshot(_))));
}

fn oversize_test_data() -> TestData {
    serde_json::from_value(serde_json::json!({
        "input_data": "i".repeat(MAX_TEST_DATA_CHARS + 1),
        "output_data": "o",
    }))
    .unwrap()
}

fn out_of_range_test_point() -> TestPoint {
    serde_json::from_str(r#"{"description":"?","variants":[],"correct_variant_numbers":[7]}"#)
        .unwrap()
}

fn reversed_deadline() -> Deadline {
    serde_json::from_str(
        r#"{"excellent_grade_time":"2024-03-15T12:00:00Z","good_grade_time":"2024-03-01T12:00:00Z"}"#,
    )
    .unwrap()
}

#[test]
fn test_add_task_rejects_deserialized_payloads() {
    let mut course: Course = create_test_course();

    let auto_result: Result<u32, DomainError> = course.add_auto_code_checking_task(
        &teacher("t1"),
        AutoCodeCheckingTaskParams {
            test_data: vec![oversize_test_data()],
            ..auto_task("Sum")
        },
    );
    assert_eq!(
        auto_result.unwrap_err(),
        DomainError::TextTooLong {
            field: "test input data",
            max: MAX_TEST_DATA_CHARS,
            actual: MAX_TEST_DATA_CHARS + 1,
        }
    );

    let testing_result: Result<u32, DomainError> = course.add_testing_task(
        &teacher("t1"),
        TestingTaskParams {
            test_points: vec![out_of_range_test_point()],
            ..testing_task("Quiz")
        },
    );
    assert!(matches!(
        testing_result,
        Err(DomainError::InvalidTestPoint(_))
    ));

    let manual_result: Result<u32, DomainError> = course.add_manual_checking_task(
        &teacher("t1"),
        ManualCheckingTaskParams {
            deadline: Some(reversed_deadline()),
            ..manual_task("Essay")
        },
    );
    assert!(matches!(manual_result, Err(DomainError::InvalidDeadline(_))));

    assert_eq!(course.tasks_count(), 0);
    assert_eq!(course.next_task_number(), 1);
}

#[test]
fn test_replace_rejects_deserialized_payloads() {
    let mut course: Course = create_test_course();
    course
        .add_auto_code_checking_task(&teacher("t1"), auto_task("Sum"))
        .unwrap();
    course
        .add_testing_task(&teacher("t1"), testing_task("Quiz"))
        .unwrap();
    let before: Course = course.clone();

    assert!(matches!(
        course.replace_task_test_data(&teacher("t1"), 1, vec![oversize_test_data()]),
        Err(DomainError::TextTooLong { .. })
    ));
    assert!(matches!(
        course.replace_task_deadline(&teacher("t1"), 1, reversed_deadline()),
        Err(DomainError::InvalidDeadline(_))
    ));
    assert!(matches!(
        course.replace_task_test_points(&teacher("t1"), 2, vec![out_of_range_test_point()]),
        Err(DomainError::InvalidTestPoint(_))
    ));

    assert_eq!(course, before);
    assert_eq!(Course::restore(course.snapshot()).unwrap(), course);
}
