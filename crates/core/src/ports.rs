// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use coursework_domain::{Course, DomainError};

use crate::context::Context;
use crate::error::{AcademicsError, RepositoryError};

/// A mutation applied to a loaded course.
///
/// Receives an owned copy of the stored course and returns the course to
/// store. Returning an error aborts the update without persisting anything.
pub type UpdateFunction<'a> =
    Box<dyn FnOnce(&Context, Course) -> Result<Course, DomainError> + 'a>;

/// Storage for course aggregates.
///
/// Implementations must make `update_course` atomic: the load, the call to
/// the update function and the store form one transaction, and concurrent
/// updates of the same course serialize.
pub trait CoursesRepository: Send + Sync {
    /// Stores a new course.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::CourseAlreadyExists` if the id is taken, or
    /// an infrastructure error if the store fails.
    fn add_course(&self, ctx: &Context, course: &Course) -> Result<(), RepositoryError>;

    /// Loads a course.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::CourseNotFound` if no course has the id, or
    /// an infrastructure error if the store fails.
    fn get_course(&self, ctx: &Context, course_id: &str) -> Result<Course, RepositoryError>;

    /// Loads a course, applies `update` and stores the result.
    ///
    /// The returned course replaces whatever is stored under *its own* id,
    /// which need not be `course_id`; a returned course with a new id is
    /// inserted and the loaded course is left as it was.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No course has the id
    /// - `update` fails (as `RepositoryError::Domain`)
    /// - The store fails or the context deadline passes
    fn update_course(
        &self,
        ctx: &Context,
        course_id: &str,
        update: UpdateFunction<'_>,
    ) -> Result<(), RepositoryError>;
}

/// Existence checks for academics managed outside this system.
pub trait AcademicsService: Send + Sync {
    /// # Errors
    ///
    /// Returns `AcademicsError::TeacherNotFound` if there is no such teacher.
    fn teacher_exists(&self, ctx: &Context, teacher_id: &str) -> Result<(), AcademicsError>;

    /// # Errors
    ///
    /// Returns `AcademicsError::StudentNotFound` if there is no such student.
    fn student_exists(&self, ctx: &Context, student_id: &str) -> Result<(), AcademicsError>;

    /// # Errors
    ///
    /// Returns `AcademicsError::GroupNotFound` if there is no such group.
    fn group_exists(&self, ctx: &Context, group_id: &str) -> Result<(), AcademicsError>;
}
