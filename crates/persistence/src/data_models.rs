// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Row types and their conversion to and from the `Course` aggregate.
//!
//! Rows are rebuilt into aggregates through `Course::restore`, so a stored
//! record that violates an aggregate invariant surfaces as
//! `PersistenceError::CorruptRecord` rather than as a half-valid course.

use coursework_domain::{
    Course, CourseSnapshot, Deadline, DomainError, Period, Semester, Task, TaskKind, TaskType,
    TestData, TestPoint,
};
use diesel::prelude::*;
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

use crate::diesel_schema::{course_collaborators, course_students, course_tasks, courses};
use crate::error::PersistenceError;

/// A row of the `courses` table.
#[derive(Debug, Clone, PartialEq, Eq, Queryable, Selectable, Insertable, AsChangeset)]
#[diesel(table_name = courses)]
#[diesel(primary_key(course_id))]
pub struct CourseRow {
    pub course_id: String,
    pub title: String,
    pub period_start_year: i32,
    pub period_end_year: i32,
    pub semester: String,
    pub started: i32,
    pub creator_id: String,
    pub next_task_number: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Insertable)]
#[diesel(table_name = course_collaborators)]
pub struct CollaboratorRow {
    pub course_id: String,
    pub collaborator_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Insertable)]
#[diesel(table_name = course_students)]
pub struct StudentRow {
    pub course_id: String,
    pub student_id: String,
}

/// A row of the `course_tasks` table.
///
/// Only the payload columns legal for `task_type` are non-null. Deadlines are
/// RFC 3339 text; payload lists are JSON arrays.
#[derive(Debug, Clone, PartialEq, Eq, Queryable, Selectable, Insertable)]
#[diesel(table_name = course_tasks)]
#[diesel(treat_none_as_default_value = false)]
pub struct TaskRow {
    pub course_id: String,
    pub task_number: i32,
    pub title: String,
    pub description: String,
    pub task_type: String,
    pub deadline_excellent: Option<String>,
    pub deadline_good: Option<String>,
    pub test_data_json: Option<String>,
    pub test_points_json: Option<String>,
}

/// Every row that makes up one stored course.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseRecord {
    pub course: CourseRow,
    pub collaborators: Vec<CollaboratorRow>,
    pub students: Vec<StudentRow>,
    pub tasks: Vec<TaskRow>,
}

impl CourseRecord {
    /// Flattens a course into rows.
    ///
    /// # Errors
    ///
    /// Returns an error if a task number does not fit the column type or a
    /// payload cannot be serialized.
    pub fn from_course(course: &Course) -> Result<Self, PersistenceError> {
        let course_id: &str = course.id();
        let period: Period = course.period();

        let row: CourseRow = CourseRow {
            course_id: course_id.to_string(),
            title: course.title().to_string(),
            period_start_year: i32::from(period.academic_start_year()),
            period_end_year: i32::from(period.academic_end_year()),
            semester: period.semester().as_str().to_string(),
            started: i32::from(course.started()),
            creator_id: course.creator_id().to_string(),
            next_task_number: to_column(course.next_task_number(), course_id)?,
        };

        let collaborators: Vec<CollaboratorRow> = course
            .collaborators()
            .map(|collaborator_id| CollaboratorRow {
                course_id: course_id.to_string(),
                collaborator_id: collaborator_id.to_string(),
            })
            .collect();

        let students: Vec<StudentRow> = course
            .students()
            .map(|student_id| StudentRow {
                course_id: course_id.to_string(),
                student_id: student_id.to_string(),
            })
            .collect();

        let tasks: Vec<TaskRow> = course
            .tasks()
            .map(|task| TaskRow::from_task(course_id, task))
            .collect::<Result<_, _>>()?;

        Ok(Self {
            course: row,
            collaborators,
            students,
            tasks,
        })
    }

    /// Rebuilds the aggregate from its rows.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::CorruptRecord` if any row is malformed or
    /// the rows together violate an aggregate invariant.
    pub fn into_course(self) -> Result<Course, PersistenceError> {
        let course_id: String = self.course.course_id.clone();
        let corrupt = |reason: String| PersistenceError::CorruptRecord {
            course_id: course_id.clone(),
            reason,
        };

        let semester: Semester = self
            .course
            .semester
            .parse()
            .map_err(|e: DomainError| corrupt(e.to_string()))?;
        let period: Period = Period::new(
            from_column(self.course.period_start_year, &course_id)?,
            from_column(self.course.period_end_year, &course_id)?,
            semester,
        )
        .map_err(|e| corrupt(e.to_string()))?;

        let tasks: Vec<Task> = self
            .tasks
            .into_iter()
            .map(TaskRow::into_task)
            .collect::<Result<_, _>>()?;

        let snapshot: CourseSnapshot = CourseSnapshot {
            id: self.course.course_id,
            title: self.course.title,
            period,
            started: self.course.started != 0,
            creator_id: self.course.creator_id,
            collaborators: self
                .collaborators
                .into_iter()
                .map(|row| row.collaborator_id)
                .collect(),
            students: self.students.into_iter().map(|row| row.student_id).collect(),
            tasks,
            next_task_number: from_column(self.course.next_task_number, &course_id)?,
        };

        Course::restore(snapshot).map_err(|e| corrupt(e.to_string()))
    }
}

impl TaskRow {
    fn from_task(course_id: &str, task: &Task) -> Result<Self, PersistenceError> {
        let (deadline, test_data_json, test_points_json): (
            Option<&Deadline>,
            Option<String>,
            Option<String>,
        ) = match task.kind() {
            TaskKind::ManualChecking { deadline } => (deadline.as_ref(), None, None),
            TaskKind::AutoCodeChecking {
                deadline,
                test_data,
            } => (
                deadline.as_ref(),
                Some(serde_json::to_string(test_data)?),
                None,
            ),
            TaskKind::Testing { test_points } => {
                (None, None, Some(serde_json::to_string(test_points)?))
            }
        };

        Ok(Self {
            course_id: course_id.to_string(),
            task_number: to_column(task.number(), course_id)?,
            title: task.title().to_string(),
            description: task.description().to_string(),
            task_type: task.task_type().as_str().to_string(),
            deadline_excellent: deadline
                .map(|d| format_timestamp(d.excellent_grade_time()))
                .transpose()?,
            deadline_good: deadline
                .map(|d| format_timestamp(d.good_grade_time()))
                .transpose()?,
            test_data_json,
            test_points_json,
        })
    }

    fn into_task(self) -> Result<Task, PersistenceError> {
        let corrupt = |reason: String| PersistenceError::CorruptRecord {
            course_id: self.course_id.clone(),
            reason: format!("task #{}: {reason}", self.task_number),
        };

        let task_type: TaskType = self
            .task_type
            .parse()
            .map_err(|e: DomainError| corrupt(e.to_string()))?;

        let deadline: Option<Deadline> = match (&self.deadline_excellent, &self.deadline_good) {
            (Some(excellent), Some(good)) => Some(
                Deadline::new(
                    parse_timestamp(excellent).map_err(&corrupt)?,
                    parse_timestamp(good).map_err(&corrupt)?,
                )
                .map_err(|e| corrupt(e.to_string()))?,
            ),
            (None, None) => None,
            _ => return Err(corrupt(String::from("deadline is half set"))),
        };

        let kind: TaskKind = match task_type {
            TaskType::ManualChecking => TaskKind::ManualChecking { deadline },
            TaskType::AutoCodeChecking => TaskKind::AutoCodeChecking {
                deadline,
                test_data: parse_list::<TestData>(self.test_data_json.as_deref())
                    .map_err(&corrupt)?,
            },
            TaskType::Testing => TaskKind::Testing {
                test_points: parse_list::<TestPoint>(self.test_points_json.as_deref())
                    .map_err(&corrupt)?,
            },
        };

        let number: u32 = from_column(self.task_number, &self.course_id)?;
        Task::restore(number, &self.title, &self.description, kind)
            .map_err(|e| corrupt(e.to_string()))
    }
}

fn format_timestamp(at: OffsetDateTime) -> Result<String, PersistenceError> {
    at.format(&Rfc3339)
        .map_err(|e| PersistenceError::SerializationError(e.to_string()))
}

fn parse_timestamp(value: &str) -> Result<OffsetDateTime, String> {
    OffsetDateTime::parse(value, &Rfc3339).map_err(|e| format!("bad timestamp '{value}': {e}"))
}

// A missing list column reads as an empty list.
fn parse_list<T: serde::de::DeserializeOwned>(json: Option<&str>) -> Result<Vec<T>, String> {
    json.map_or_else(
        || Ok(Vec::new()),
        |json| serde_json::from_str(json).map_err(|e| e.to_string()),
    )
}

fn to_column(value: u32, course_id: &str) -> Result<i32, PersistenceError> {
    i32::try_from(value).map_err(|_| PersistenceError::CorruptRecord {
        course_id: course_id.to_string(),
        reason: format!("{value} does not fit an INTEGER column"),
    })
}

fn from_column<T: TryFrom<i32>>(value: i32, course_id: &str) -> Result<T, PersistenceError> {
    T::try_from(value).map_err(|_| PersistenceError::CorruptRecord {
        course_id: course_id.to_string(),
        reason: format!("column value {value} is out of range"),
    })
}
