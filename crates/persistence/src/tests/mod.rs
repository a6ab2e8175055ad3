// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::expect_used, clippy::unwrap_used)]


use coursework_domain::{
    Academic, AcademicType, AutoCodeCheckingTaskParams, Course, Deadline, ManualCheckingTaskParams,
    NewCourseParams, Period, Semester, TestData, TestPoint, TestingTaskParams,
};
use time::OffsetDateTime;

pub fn teacher(id: &str) -> Academic {
    Academic::new(id, AcademicType::Teacher).expect("Valid teacher")
}

pub fn create_test_period() -> Period {
    Period::new(2023, 2024, Semester::First).expect("Valid period")
}

pub fn create_test_deadline() -> Deadline {
    let excellent: OffsetDateTime =
        OffsetDateTime::from_unix_timestamp(1_700_000_000).expect("Valid timestamp");
    let good: OffsetDateTime =
        OffsetDateTime::from_unix_timestamp(1_700_604_800).expect("Valid timestamp");
    Deadline::new(excellent, good).expect("Valid deadline")
}

/// Course `c1` created by `t1` with collaborator `t2` and students `s1`, `s2`.
pub fn create_test_course() -> Course {
    Course::new(NewCourseParams {
        id: String::from("c1"),
        creator: teacher("t1"),
        title: String::from("Algorithms"),
        period: create_test_period(),
        started: true,
        collaborators: vec![String::from("t2")],
        students: vec![String::from("s1"), String::from("s2")],
    })
    .expect("Valid course")
}

/// [`create_test_course`] with one task of each kind, numbered 1 to 3.
pub fn create_test_course_with_tasks() -> Course {
    let author: Academic = teacher("t1");
    let mut course: Course = create_test_course();

    course
        .add_manual_checking_task(
            &author,
            ManualCheckingTaskParams {
                title: String::from("Essay"),
                description: String::from("Write about sorting"),
                deadline: Some(create_test_deadline()),
            },
        )
        .unwrap();
    course
        .add_auto_code_checking_task(
            &author,
            AutoCodeCheckingTaskParams {
                title: String::from("Quicksort"),
                description: String::from("Sort the input"),
                deadline: None,
                test_data: vec![
                    TestData::new("3 1 2", "1 2 3").unwrap(),
                    TestData::new("", "").unwrap(),
                ],
            },
        )
        .unwrap();
    course
        .add_testing_task(
            &author,
            TestingTaskParams {
                title: String::from("Quiz"),
                description: String::new(),
                test_points: vec![
                    TestPoint::new(
                        "Worst case of quicksort?",
                        vec![String::from("n log n"), String::from("n^2")],
                        vec![1],
                    )
                    .unwrap(),
                ],
            },
        )
        .unwrap();
    course
}
