// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::sync::Arc;

use coursework_domain::{Course, NewCourseParams};
use tracing::{debug, info, warn};
use uuid::Uuid;

use super::{ensure_students_exist, ensure_teachers_exist};
use crate::command::CreateCourse;
use crate::context::Context;
use crate::error::CoreError;
use crate::ports::{AcademicsService, CoursesRepository};

pub struct CreateCourseHandler {
    courses: Arc<dyn CoursesRepository>,
    academics: Arc<dyn AcademicsService>,
}

impl CreateCourseHandler {
    #[must_use]
    pub fn new(courses: Arc<dyn CoursesRepository>, academics: Arc<dyn AcademicsService>) -> Self {
        Self { courses, academics }
    }

    /// Creates a course under a freshly generated id.
    ///
    /// # Arguments
    ///
    /// * `ctx` - The execution context
    /// * `cmd` - The command to execute
    ///
    /// # Returns
    ///
    /// The id of the new course.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - A listed collaborator is not a known teacher
    /// - A listed student is not a known student
    /// - The course fails validation
    /// - The repository fails
    pub fn handle(&self, ctx: &Context, cmd: CreateCourse) -> Result<String, CoreError> {
        let context: String = format!("create course by academic '{}'", cmd.academic.id());

        self.execute(ctx, cmd, &context).inspect_err(|err| {
            warn!(error = %err, kind = %err.kind(), "Rejected create_course command");
        })
    }

    fn execute(&self, ctx: &Context, cmd: CreateCourse, context: &str) -> Result<String, CoreError> {
        ensure_teachers_exist(self.academics.as_ref(), ctx, &cmd.collaborators, context)?;
        ensure_students_exist(self.academics.as_ref(), ctx, &cmd.students, context)?;

        let course_id: String = Uuid::new_v4().to_string();
        debug!(course_id = %course_id, academic_id = %cmd.academic.id(), "Assigned course id");

        let course: Course = Course::new(NewCourseParams {
            id: course_id.clone(),
            creator: cmd.academic,
            title: cmd.title,
            period: cmd.period,
            started: cmd.started,
            collaborators: cmd.collaborators,
            students: cmd.students,
        })
        .map_err(|source| CoreError::Domain {
            context: context.to_string(),
            source,
        })?;

        self.courses
            .add_course(ctx, &course)
            .map_err(|source| CoreError::repository(context.to_string(), source))?;

        info!(
            course_id = %course_id,
            creator_id = %course.creator_id(),
            "Created course"
        );
        Ok(course_id)
    }
}
