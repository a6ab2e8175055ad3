// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

mod add_task;
mod collaborators;
mod create_course;
mod extend_course;
mod students;

use std::sync::Arc;

use crate::context::Context;
use crate::error::CoreError;
use crate::ports::{AcademicsService, CoursesRepository};

pub use add_task::AddTaskHandler;
pub use collaborators::{AddCollaboratorHandler, RemoveCollaboratorHandler};
pub use create_course::CreateCourseHandler;
pub use extend_course::ExtendCourseHandler;
pub use students::{AddStudentHandler, RemoveStudentHandler};

/// Every command handler, wired to one pair of ports.
pub struct Handlers {
    pub create_course: CreateCourseHandler,
    pub extend_course: ExtendCourseHandler,
    pub add_collaborator: AddCollaboratorHandler,
    pub remove_collaborator: RemoveCollaboratorHandler,
    pub add_student: AddStudentHandler,
    pub remove_student: RemoveStudentHandler,
    pub add_task: AddTaskHandler,
}

impl Handlers {
    #[must_use]
    pub fn new(courses: Arc<dyn CoursesRepository>, academics: Arc<dyn AcademicsService>) -> Self {
        Self {
            create_course: CreateCourseHandler::new(Arc::clone(&courses), Arc::clone(&academics)),
            extend_course: ExtendCourseHandler::new(Arc::clone(&courses), Arc::clone(&academics)),
            add_collaborator: AddCollaboratorHandler::new(
                Arc::clone(&courses),
                Arc::clone(&academics),
            ),
            remove_collaborator: RemoveCollaboratorHandler::new(Arc::clone(&courses)),
            add_student: AddStudentHandler::new(Arc::clone(&courses), academics),
            remove_student: RemoveStudentHandler::new(Arc::clone(&courses)),
            add_task: AddTaskHandler::new(courses),
        }
    }
}

// Rule: every referenced teacher must exist before the aggregate is touched.
fn ensure_teachers_exist(
    academics: &dyn AcademicsService,
    ctx: &Context,
    teacher_ids: &[String],
    context: &str,
) -> Result<(), CoreError> {
    for teacher_id in teacher_ids {
        academics
            .teacher_exists(ctx, teacher_id)
            .map_err(|source| CoreError::academics(context.to_string(), source))?;
    }
    Ok(())
}

// Rule: every referenced student must exist before the aggregate is touched.
fn ensure_students_exist(
    academics: &dyn AcademicsService,
    ctx: &Context,
    student_ids: &[String],
    context: &str,
) -> Result<(), CoreError> {
    for student_id in student_ids {
        academics
            .student_exists(ctx, student_id)
            .map_err(|source| CoreError::academics(context.to_string(), source))?;
    }
    Ok(())
}
