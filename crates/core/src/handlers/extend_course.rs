// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::sync::Arc;

use coursework_domain::{Course, ExtendCourseParams};
use tracing::{info, warn};
use uuid::Uuid;

use super::{ensure_students_exist, ensure_teachers_exist};
use crate::command::ExtendCourse;
use crate::context::Context;
use crate::error::CoreError;
use crate::ports::{AcademicsService, CoursesRepository};

pub struct ExtendCourseHandler {
    courses: Arc<dyn CoursesRepository>,
    academics: Arc<dyn AcademicsService>,
}

impl ExtendCourseHandler {
    #[must_use]
    pub fn new(courses: Arc<dyn CoursesRepository>, academics: Arc<dyn AcademicsService>) -> Self {
        Self { courses, academics }
    }

    /// Derives a new course from an existing one.
    ///
    /// The origin is loaded inside the repository transaction and left
    /// unchanged; the derived course is stored under its own new id.
    ///
    /// # Returns
    ///
    /// The id of the derived course.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - An extra collaborator or student does not exist
    /// - The origin course does not exist
    /// - The requester may not extend the origin
    /// - The derived course fails validation
    /// - The repository fails
    pub fn handle(&self, ctx: &Context, cmd: ExtendCourse) -> Result<String, CoreError> {
        let context: String = format!(
            "extend course '{}' by academic '{}'",
            cmd.origin_course_id,
            cmd.academic.id()
        );

        self.execute(ctx, cmd, &context).inspect_err(|err| {
            warn!(error = %err, kind = %err.kind(), "Rejected extend_course command");
        })
    }

    fn execute(&self, ctx: &Context, cmd: ExtendCourse, context: &str) -> Result<String, CoreError> {
        ensure_teachers_exist(self.academics.as_ref(), ctx, &cmd.collaborators, context)?;
        ensure_students_exist(self.academics.as_ref(), ctx, &cmd.students, context)?;

        let course_id: String = Uuid::new_v4().to_string();
        let params: ExtendCourseParams = ExtendCourseParams {
            id: course_id.clone(),
            creator: cmd.academic,
            title: cmd.title,
            period: cmd.period,
            started: cmd.started,
            collaborators: cmd.collaborators,
            students: cmd.students,
        };

        self.courses
            .update_course(
                ctx,
                &cmd.origin_course_id,
                Box::new(move |_ctx: &Context, origin: Course| origin.extend(params)),
            )
            .map_err(|source| CoreError::repository(context.to_string(), source))?;

        info!(
            course_id = %course_id,
            origin_course_id = %cmd.origin_course_id,
            "Extended course"
        );
        Ok(course_id)
    }
}
