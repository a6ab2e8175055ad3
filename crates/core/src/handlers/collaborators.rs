// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::sync::Arc;

use coursework_domain::Course;
use tracing::{info, warn};

use crate::command::{AddCollaborator, RemoveCollaborator};
use crate::context::Context;
use crate::error::CoreError;
use crate::ports::{AcademicsService, CoursesRepository};

pub struct AddCollaboratorHandler {
    courses: Arc<dyn CoursesRepository>,
    academics: Arc<dyn AcademicsService>,
}

impl AddCollaboratorHandler {
    #[must_use]
    pub fn new(courses: Arc<dyn CoursesRepository>, academics: Arc<dyn AcademicsService>) -> Self {
        Self { courses, academics }
    }

    /// Grants a teacher collaborator rights on a course.
    ///
    /// # Errors
    ///
    /// Returns an error if the collaborator is not a known teacher, the course
    /// does not exist, the requester does not teach the course, or the
    /// repository fails.
    pub fn handle(&self, ctx: &Context, cmd: AddCollaborator) -> Result<(), CoreError> {
        let context: String = format!(
            "add collaborator '{}' to course '{}' by academic '{}'",
            cmd.collaborator_id,
            cmd.course_id,
            cmd.academic.id()
        );

        self.execute(ctx, cmd, &context).inspect_err(|err| {
            warn!(error = %err, kind = %err.kind(), "Rejected add_collaborator command");
        })
    }

    fn execute(&self, ctx: &Context, cmd: AddCollaborator, context: &str) -> Result<(), CoreError> {
        self.academics
            .teacher_exists(ctx, &cmd.collaborator_id)
            .map_err(|source| CoreError::academics(context.to_string(), source))?;

        let AddCollaborator {
            academic,
            course_id,
            collaborator_id,
        } = cmd;
        let added_id: String = collaborator_id.clone();

        self.courses
            .update_course(
                ctx,
                &course_id,
                Box::new(move |_ctx: &Context, mut course: Course| {
                    course.add_collaborators(&academic, [collaborator_id])?;
                    Ok(course)
                }),
            )
            .map_err(|source| CoreError::repository(context.to_string(), source))?;

        info!(course_id = %course_id, collaborator_id = %added_id, "Added collaborator");
        Ok(())
    }
}

pub struct RemoveCollaboratorHandler {
    courses: Arc<dyn CoursesRepository>,
}

impl RemoveCollaboratorHandler {
    #[must_use]
    pub fn new(courses: Arc<dyn CoursesRepository>) -> Self {
        Self { courses }
    }

    /// Revokes a collaborator's rights. Only the course creator may do this.
    ///
    /// # Errors
    ///
    /// Returns an error if the course does not exist, the requester is not its
    /// creator, the id is not a collaborator, or the repository fails.
    pub fn handle(&self, ctx: &Context, cmd: RemoveCollaborator) -> Result<(), CoreError> {
        let context: String = format!(
            "remove collaborator '{}' from course '{}' by academic '{}'",
            cmd.collaborator_id,
            cmd.course_id,
            cmd.academic.id()
        );

        let RemoveCollaborator {
            academic,
            course_id,
            collaborator_id,
        } = cmd;
        let removed_id: String = collaborator_id.clone();

        self.courses
            .update_course(
                ctx,
                &course_id,
                Box::new(move |_ctx: &Context, mut course: Course| {
                    course.remove_collaborator(&academic, &collaborator_id)?;
                    Ok(course)
                }),
            )
            .map_err(|source| CoreError::repository(context, source))
            .inspect_err(|err| {
                warn!(error = %err, kind = %err.kind(), "Rejected remove_collaborator command");
            })?;

        info!(course_id = %course_id, collaborator_id = %removed_id, "Removed collaborator");
        Ok(())
    }
}
