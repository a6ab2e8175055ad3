// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use coursework_domain::Course;
use diesel::SqliteConnection;
use diesel::prelude::*;
use tracing::debug;

use crate::data_models::{CollaboratorRow, CourseRecord, CourseRow, StudentRow, TaskRow};
use crate::diesel_schema::{course_collaborators, course_students, course_tasks, courses};
use crate::error::PersistenceError;

/// Returns whether a course is stored under `course_id`.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn course_exists(conn: &mut SqliteConnection, course_id: &str) -> Result<bool, PersistenceError> {
    let count: i64 = courses::table
        .filter(courses::course_id.eq(course_id))
        .count()
        .get_result(conn)?;
    Ok(count > 0)
}

/// Loads a course and all of its child rows.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `course_id` - The course to load
///
/// # Returns
///
/// * `Ok(Some(course))` if the course exists
/// * `Ok(None)` if it does not
///
/// # Errors
///
/// Returns an error if a query fails or the stored rows do not form a valid
/// course.
pub fn load_course(
    conn: &mut SqliteConnection,
    course_id: &str,
) -> Result<Option<Course>, PersistenceError> {
    debug!(course_id, "Loading course");

    let row: Option<CourseRow> = courses::table
        .filter(courses::course_id.eq(course_id))
        .select(CourseRow::as_select())
        .first(conn)
        .optional()?;

    let Some(row) = row else {
        return Ok(None);
    };

    let collaborator_ids: Vec<String> = course_collaborators::table
        .filter(course_collaborators::course_id.eq(course_id))
        .select(course_collaborators::collaborator_id)
        .order(course_collaborators::collaborator_id.asc())
        .load(conn)?;

    let student_ids: Vec<String> = course_students::table
        .filter(course_students::course_id.eq(course_id))
        .select(course_students::student_id)
        .order(course_students::student_id.asc())
        .load(conn)?;

    let tasks: Vec<TaskRow> = course_tasks::table
        .filter(course_tasks::course_id.eq(course_id))
        .select(TaskRow::as_select())
        .order(course_tasks::task_number.asc())
        .load(conn)?;

    let record: CourseRecord = CourseRecord {
        collaborators: collaborator_ids
            .into_iter()
            .map(|collaborator_id| CollaboratorRow {
                course_id: course_id.to_string(),
                collaborator_id,
            })
            .collect(),
        students: student_ids
            .into_iter()
            .map(|student_id| StudentRow {
                course_id: course_id.to_string(),
                student_id,
            })
            .collect(),
        course: row,
        tasks,
    };

    record.into_course().map(Some)
}
