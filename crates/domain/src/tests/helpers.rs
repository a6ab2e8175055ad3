// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use time::macros::datetime;

use crate::{
    Academic, AcademicType, Course, Deadline, ManualCheckingTaskParams, NewCourseParams, Period,
    Semester, TestData, TestPoint,
};

pub fn teacher(id: &str) -> Academic {
    Academic::new(id, AcademicType::Teacher).unwrap()
}

pub fn student(id: &str) -> Academic {
    Academic::new(id, AcademicType::Student).unwrap()
}

pub fn create_test_period() -> Period {
    Period::new(2023, 2024, Semester::First).unwrap()
}

pub fn create_test_params() -> NewCourseParams {
    NewCourseParams {
        id: String::from("c1"),
        creator: teacher("t1"),
        title: String::from("X"),
        period: create_test_period(),
        started: false,
        collaborators: Vec::new(),
        students: Vec::new(),
    }
}

/// Course `c1` created by teacher `t1`, no members, no tasks.
pub fn create_test_course() -> Course {
    Course::new(create_test_params()).unwrap()
}

pub fn create_test_deadline() -> Deadline {
    Deadline::new(
        datetime!(2024-03-01 12:00 UTC),
        datetime!(2024-03-15 12:00 UTC),
    )
    .unwrap()
}

pub fn create_test_data() -> Vec<TestData> {
    vec![
        TestData::new("1 2", "3").unwrap(),
        TestData::new("2 2", "4").unwrap(),
    ]
}

pub fn create_test_points() -> Vec<TestPoint> {
    vec![
        TestPoint::new(
            "2 + 2 = ?",
            vec![String::from("3"), String::from("4"), String::from("5")],
            vec![1],
        )
        .unwrap(),
    ]
}

pub fn manual_task(title: &str) -> ManualCheckingTaskParams {
    ManualCheckingTaskParams {
        title: title.to_string(),
        description: String::from("Write an essay"),
        deadline: Some(create_test_deadline()),
    }
}
