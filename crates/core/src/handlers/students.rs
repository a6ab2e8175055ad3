// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::sync::Arc;

use coursework_domain::Course;
use tracing::{info, warn};

use crate::command::{AddStudent, RemoveStudent};
use crate::context::Context;
use crate::error::CoreError;
use crate::ports::{AcademicsService, CoursesRepository};

pub struct AddStudentHandler {
    courses: Arc<dyn CoursesRepository>,
    academics: Arc<dyn AcademicsService>,
}

impl AddStudentHandler {
    #[must_use]
    pub fn new(courses: Arc<dyn CoursesRepository>, academics: Arc<dyn AcademicsService>) -> Self {
        Self { courses, academics }
    }

    /// Enrolls a student in a course.
    ///
    /// # Errors
    ///
    /// Returns an error if the student is unknown, the course does not exist,
    /// the requester does not teach the course, or the repository fails.
    pub fn handle(&self, ctx: &Context, cmd: AddStudent) -> Result<(), CoreError> {
        let context: String = format!(
            "add student '{}' to course '{}' by academic '{}'",
            cmd.student_id,
            cmd.course_id,
            cmd.academic.id()
        );

        self.execute(ctx, cmd, &context).inspect_err(|err| {
            warn!(error = %err, kind = %err.kind(), "Rejected add_student command");
        })
    }

    fn execute(&self, ctx: &Context, cmd: AddStudent, context: &str) -> Result<(), CoreError> {
        self.academics
            .student_exists(ctx, &cmd.student_id)
            .map_err(|source| CoreError::academics(context.to_string(), source))?;

        let AddStudent {
            academic,
            course_id,
            student_id,
        } = cmd;
        let added_id: String = student_id.clone();

        self.courses
            .update_course(
                ctx,
                &course_id,
                Box::new(move |_ctx: &Context, mut course: Course| {
                    course.add_students(&academic, [student_id])?;
                    Ok(course)
                }),
            )
            .map_err(|source| CoreError::repository(context.to_string(), source))?;

        info!(course_id = %course_id, student_id = %added_id, "Added student");
        Ok(())
    }
}

pub struct RemoveStudentHandler {
    courses: Arc<dyn CoursesRepository>,
}

impl RemoveStudentHandler {
    #[must_use]
    pub fn new(courses: Arc<dyn CoursesRepository>) -> Self {
        Self { courses }
    }

    /// Unenrolls a student.
    ///
    /// # Errors
    ///
    /// Returns an error if the course does not exist, the requester does not
    /// teach it, the student is not enrolled, or the repository fails.
    pub fn handle(&self, ctx: &Context, cmd: RemoveStudent) -> Result<(), CoreError> {
        let context: String = format!(
            "remove student '{}' from course '{}' by academic '{}'",
            cmd.student_id,
            cmd.course_id,
            cmd.academic.id()
        );

        let RemoveStudent {
            academic,
            course_id,
            student_id,
        } = cmd;
        let removed_id: String = student_id.clone();

        self.courses
            .update_course(
                ctx,
                &course_id,
                Box::new(move |_ctx: &Context, mut course: Course| {
                    course.remove_student(&academic, &student_id)?;
                    Ok(course)
                }),
            )
            .map_err(|source| CoreError::repository(context, source))
            .inspect_err(|err| {
                warn!(error = %err, kind = %err.kind(), "Rejected remove_student command");
            })?;

        info!(course_id = %course_id, student_id = %removed_id, "Removed student");
        Ok(())
    }
}
