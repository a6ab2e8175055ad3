// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Course mutations.
//!
//! A course is always written whole: the `courses` row is upserted and every
//! child row is deleted and re-inserted. Callers run these inside a
//! transaction so readers never see a partial write.

use coursework_domain::Course;
use diesel::SqliteConnection;
use diesel::prelude::*;
use tracing::debug;

use crate::data_models::{CourseRecord, TaskRow};
use crate::diesel_schema::{course_collaborators, course_students, course_tasks, courses};
use crate::error::PersistenceError;
use crate::queries::course_exists;

/// Stores a course that must not exist yet.
///
/// # Errors
///
/// Returns `PersistenceError::CourseAlreadyExists` if the id is taken, or a
/// database error if a write fails.
pub fn insert_course(conn: &mut SqliteConnection, course: &Course) -> Result<(), PersistenceError> {
    if course_exists(conn, course.id())? {
        return Err(PersistenceError::CourseAlreadyExists(course.id().to_string()));
    }
    save_course(conn, course)
}

/// Stores a course, replacing any course stored under the same id.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `course` - The course to store
///
/// # Errors
///
/// Returns an error if the course cannot be flattened into rows or a write
/// fails.
pub fn save_course(conn: &mut SqliteConnection, course: &Course) -> Result<(), PersistenceError> {
    let record: CourseRecord = CourseRecord::from_course(course)?;
    let course_id: &str = course.id();

    diesel::insert_into(courses::table)
        .values(&record.course)
        .on_conflict(courses::course_id)
        .do_update()
        .set(&record.course)
        .execute(conn)?;

    diesel::delete(course_collaborators::table.filter(course_collaborators::course_id.eq(course_id)))
        .execute(conn)?;
    diesel::delete(course_students::table.filter(course_students::course_id.eq(course_id)))
        .execute(conn)?;
    diesel::delete(course_tasks::table.filter(course_tasks::course_id.eq(course_id)))
        .execute(conn)?;

    for collaborator in &record.collaborators {
        diesel::insert_into(course_collaborators::table)
            .values(collaborator)
            .execute(conn)?;
    }
    for student in &record.students {
        diesel::insert_into(course_students::table)
            .values(student)
            .execute(conn)?;
    }
    for task in &record.tasks {
        insert_task(conn, task)?;
    }

    debug!(
        course_id,
        collaborators = record.collaborators.len(),
        students = record.students.len(),
        tasks = record.tasks.len(),
        "Stored course rows"
    );
    Ok(())
}

fn insert_task(conn: &mut SqliteConnection, task: &TaskRow) -> Result<(), PersistenceError> {
    diesel::insert_into(course_tasks::table)
        .values(task)
        .execute(conn)?;
    Ok(())
}
