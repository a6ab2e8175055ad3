// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::sync::Arc;

use coursework_domain::{
    AutoCodeCheckingTaskParams, Course, ManualCheckingTaskParams, TaskType, TestingTaskParams,
};
use tracing::{debug, info, warn};

use crate::command::AddTask;
use crate::context::Context;
use crate::error::{CoreError, RepositoryError};
use crate::ports::CoursesRepository;

pub struct AddTaskHandler {
    courses: Arc<dyn CoursesRepository>,
}

impl AddTaskHandler {
    #[must_use]
    pub fn new(courses: Arc<dyn CoursesRepository>) -> Self {
        Self { courses }
    }

    /// Adds a task of the kind named by the command's type tag.
    ///
    /// # Returns
    ///
    /// The number assigned to the new task.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The type tag is not a known task type (`CoreError::UnknownTaskType`)
    /// - The course does not exist
    /// - The requester does not teach the course
    /// - The title or description is too long
    /// - The repository fails
    pub fn handle(&self, ctx: &Context, cmd: AddTask) -> Result<u32, CoreError> {
        let context: String = format!(
            "add {} task to course '{}' by academic '{}'",
            cmd.task_type,
            cmd.course_id,
            cmd.academic.id()
        );

        self.execute(ctx, cmd, context).inspect_err(|err| {
            warn!(error = %err, kind = %err.kind(), "Rejected add_task command");
        })
    }

    fn execute(&self, ctx: &Context, cmd: AddTask, context: String) -> Result<u32, CoreError> {
        let task_type: TaskType = cmd
            .task_type
            .parse()
            .map_err(|_| CoreError::UnknownTaskType(cmd.task_type.clone()))?;
        debug!(course_id = %cmd.course_id, task_type = %task_type, "Dispatching add_task");

        let AddTask {
            academic,
            course_id,
            title,
            description,
            deadline,
            test_data,
            test_points,
            ..
        } = cmd;

        let mut task_number: Option<u32> = None;
        let assigned: &mut Option<u32> = &mut task_number;

        self.courses
            .update_course(
                ctx,
                &course_id,
                Box::new(move |_ctx: &Context, mut course: Course| {
                    let number: u32 = match task_type {
                        TaskType::ManualChecking => course.add_manual_checking_task(
                            &academic,
                            ManualCheckingTaskParams {
                                title,
                                description,
                                deadline,
                            },
                        )?,
                        TaskType::AutoCodeChecking => course.add_auto_code_checking_task(
                            &academic,
                            AutoCodeCheckingTaskParams {
                                title,
                                description,
                                deadline,
                                test_data,
                            },
                        )?,
                        TaskType::Testing => course.add_testing_task(
                            &academic,
                            TestingTaskParams {
                                title,
                                description,
                                test_points,
                            },
                        )?,
                    };
                    *assigned = Some(number);
                    Ok(course)
                }),
            )
            .map_err(|source| CoreError::repository(context.clone(), source))?;

        let number: u32 = task_number.ok_or_else(|| {
            CoreError::repository(
                context,
                RepositoryError::Storage(String::from("update function was not applied")),
            )
        })?;

        info!(course_id = %course_id, task_number = number, task_type = %task_type, "Added task");
        Ok(number)
    }
}
