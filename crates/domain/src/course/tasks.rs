// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::{Access, Course};
use crate::academic::Academic;
use crate::deadline::Deadline;
use crate::error::DomainError;
use crate::task::{Task, TaskKind};
use crate::test_data::{TestData, TestPoint};

/// Input for [`Course::add_manual_checking_task`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ManualCheckingTaskParams {
    pub title: String,
    pub description: String,
    pub deadline: Option<Deadline>,
}

/// Input for [`Course::add_auto_code_checking_task`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AutoCodeCheckingTaskParams {
    pub title: String,
    pub description: String,
    pub deadline: Option<Deadline>,
    pub test_data: Vec<TestData>,
}

/// Input for [`Course::add_testing_task`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TestingTaskParams {
    pub title: String,
    pub description: String,
    pub test_points: Vec<TestPoint>,
}

impl Course {
    /// Returns the tasks in ascending number order.
    pub fn tasks(&self) -> impl Iterator<Item = &Task> {
        self.tasks.values()
    }

    #[must_use]
    pub fn tasks_count(&self) -> usize {
        self.tasks.len()
    }

    /// The number the next added task will receive.
    #[must_use]
    pub const fn next_task_number(&self) -> u32 {
        self.next_task_number
    }

    /// Looks up a task by number.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::CourseHasNoSuchTask` if there is no such task.
    pub fn task(&self, task_number: u32) -> Result<&Task, DomainError> {
        self.tasks
            .get(&task_number)
            .ok_or_else(|| self.no_such_task(task_number))
    }

    /// Adds a manually checked task and returns its number.
    ///
    /// # Errors
    ///
    /// Returns an error if `academic` does not teach the course, the title
    /// or description is too long, or the deadline is invalid.
    pub fn add_manual_checking_task(
        &mut self,
        academic: &Academic,
        params: ManualCheckingTaskParams,
    ) -> Result<u32, DomainError> {
        self.add_task(
            academic,
            &params.title,
            &params.description,
            TaskKind::ManualChecking {
                deadline: params.deadline,
            },
        )
    }

    /// Adds an auto-code-checking task and returns its number.
    ///
    /// # Errors
    ///
    /// Returns an error if `academic` does not teach the course, the title
    /// or description is too long, or the deadline or test data is invalid.
    pub fn add_auto_code_checking_task(
        &mut self,
        academic: &Academic,
        params: AutoCodeCheckingTaskParams,
    ) -> Result<u32, DomainError> {
        self.add_task(
            academic,
            &params.title,
            &params.description,
            TaskKind::AutoCodeChecking {
                deadline: params.deadline,
                test_data: params.test_data,
            },
        )
    }

    /// Adds a testing task and returns its number.
    ///
    /// # Errors
    ///
    /// Returns an error if `academic` does not teach the course, the title
    /// or description is too long, or a test point is invalid.
    pub fn add_testing_task(
        &mut self,
        academic: &Academic,
        params: TestingTaskParams,
    ) -> Result<u32, DomainError> {
        self.add_task(
            academic,
            &params.title,
            &params.description,
            TaskKind::Testing {
                test_points: params.test_points,
            },
        )
    }

    /// Renames a task.
    ///
    /// # Errors
    ///
    /// Returns an error if `academic` does not teach the course, the task
    /// does not exist, or the title is too long.
    pub fn rename_task(
        &mut self,
        academic: &Academic,
        task_number: u32,
        title: &str,
    ) -> Result<(), DomainError> {
        self.task_for_edit(academic, task_number)?.rename(title)
    }

    /// Replaces a task's description.
    ///
    /// # Errors
    ///
    /// Returns an error if `academic` does not teach the course, the task
    /// does not exist, or the description is too long.
    pub fn replace_task_description(
        &mut self,
        academic: &Academic,
        task_number: u32,
        description: &str,
    ) -> Result<(), DomainError> {
        self.task_for_edit(academic, task_number)?
            .replace_description(description)
    }

    /// Replaces a task's deadline.
    ///
    /// # Errors
    ///
    /// Returns an error if `academic` does not teach the course, the task
    /// does not exist, the task is a testing task, or the deadline is invalid.
    pub fn replace_task_deadline(
        &mut self,
        academic: &Academic,
        task_number: u32,
        deadline: Deadline,
    ) -> Result<(), DomainError> {
        self.task_for_edit(academic, task_number)?
            .replace_deadline(deadline)
    }

    /// Replaces a task's test points.
    ///
    /// # Errors
    ///
    /// Returns an error if `academic` does not teach the course, the task
    /// does not exist, the task is not a testing task, or a test point is
    /// invalid.
    pub fn replace_task_test_points(
        &mut self,
        academic: &Academic,
        task_number: u32,
        test_points: Vec<TestPoint>,
    ) -> Result<(), DomainError> {
        self.task_for_edit(academic, task_number)?
            .replace_test_points(test_points)
    }

    /// Replaces a task's test data.
    ///
    /// # Errors
    ///
    /// Returns an error if `academic` does not teach the course, the task
    /// does not exist, the task is not an auto-code-checking task, or a test
    /// data pair is too long.
    pub fn replace_task_test_data(
        &mut self,
        academic: &Academic,
        task_number: u32,
        test_data: Vec<TestData>,
    ) -> Result<(), DomainError> {
        self.task_for_edit(academic, task_number)?
            .replace_test_data(test_data)
    }

    fn add_task(
        &mut self,
        academic: &Academic,
        title: &str,
        description: &str,
        kind: TaskKind,
    ) -> Result<u32, DomainError> {
        self.can_academic_edit_with_access(academic, Access::Teacher)?;

        let number: u32 = self.next_task_number;
        let task: Task = Task::new(number, title, description, kind)?;

        self.tasks.insert(number, task);
        self.next_task_number += 1;
        Ok(number)
    }

    fn task_for_edit(
        &mut self,
        academic: &Academic,
        task_number: u32,
    ) -> Result<&mut Task, DomainError> {
        self.can_academic_edit_with_access(academic, Access::Teacher)?;

        let error: DomainError = self.no_such_task(task_number);
        self.tasks.get_mut(&task_number).ok_or(error)
    }

    fn no_such_task(&self, task_number: u32) -> DomainError {
        DomainError::CourseHasNoSuchTask {
            course_id: self.id.clone(),
            task_number,
        }
    }
}
