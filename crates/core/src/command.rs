// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Commands carry the acting academic and the operation's parameters as data only.

use coursework_domain::{Academic, Deadline, Period, TestData, TestPoint};

/// Create a course. The handler assigns the id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateCourse {
    pub academic: Academic,
    pub title: String,
    pub period: Period,
    pub started: bool,
    pub collaborators: Vec<String>,
    pub students: Vec<String>,
}

/// Derive a course for a new term from an existing one. The handler assigns
/// the new id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtendCourse {
    pub academic: Academic,
    pub origin_course_id: String,
    /// Falls back to the origin's title.
    pub title: Option<String>,
    /// Falls back to the period after the origin's.
    pub period: Option<Period>,
    pub started: bool,
    pub collaborators: Vec<String>,
    pub students: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddCollaborator {
    pub academic: Academic,
    pub course_id: String,
    pub collaborator_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RemoveCollaborator {
    pub academic: Academic,
    pub course_id: String,
    pub collaborator_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddStudent {
    pub academic: Academic,
    pub course_id: String,
    pub student_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RemoveStudent {
    pub academic: Academic,
    pub course_id: String,
    pub student_id: String,
}

/// Add a task of the kind named by `task_type`.
///
/// Only the payload fields legal for that kind are used: `deadline` for
/// manual and auto-code-checking tasks, `test_data` for auto-code-checking
/// tasks, `test_points` for testing tasks. The rest are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddTask {
    pub academic: Academic,
    pub course_id: String,
    pub task_type: String,
    pub title: String,
    pub description: String,
    pub deadline: Option<Deadline>,
    pub test_data: Vec<TestData>,
    pub test_points: Vec<TestPoint>,
}
