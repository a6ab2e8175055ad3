// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::deadline::Deadline;
use crate::error::DomainError;
use crate::test_data::{TestData, TestPoint};
use crate::validation::{validate_task_description, validate_task_title};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// The three kinds of coursework a task can be.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TaskType {
    /// Submissions are graded by a teacher.
    ManualChecking,
    /// Submitted code is run against test data.
    AutoCodeChecking,
    /// A multiple-choice test.
    Testing,
}

impl TaskType {
    /// Converts this task type to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::ManualChecking => "ManualChecking",
            Self::AutoCodeChecking => "AutoCodeChecking",
            Self::Testing => "Testing",
        }
    }
}

impl FromStr for TaskType {
    type Err = DomainError;

    /// Parses a task type tag.
    ///
    /// Matching ignores case, `_` and `-`, so `ManualChecking`,
    /// `manual_checking` and `manual-checking` are all accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .collect::<String>()
            .to_ascii_lowercase();

        match normalized.as_str() {
            "manualchecking" => Ok(Self::ManualChecking),
            "autocodechecking" => Ok(Self::AutoCodeChecking),
            "testing" => Ok(Self::Testing),
            _ => Err(DomainError::InvalidTaskType(s.to_string())),
        }
    }
}

impl std::fmt::Display for TaskType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The kind-specific payload of a task.
///
/// Each variant holds exactly the optional fields legal for its kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum TaskKind {
    ManualChecking {
        deadline: Option<Deadline>,
    },
    AutoCodeChecking {
        deadline: Option<Deadline>,
        test_data: Vec<TestData>,
    },
    Testing {
        test_points: Vec<TestPoint>,
    },
}

impl TaskKind {
    #[must_use]
    pub const fn task_type(&self) -> TaskType {
        match self {
            Self::ManualChecking { .. } => TaskType::ManualChecking,
            Self::AutoCodeChecking { .. } => TaskType::AutoCodeChecking,
            Self::Testing { .. } => TaskType::Testing,
        }
    }

    fn validate(&self) -> Result<(), DomainError> {
        match self {
            Self::ManualChecking { deadline } => {
                if let Some(deadline) = deadline {
                    deadline.validate()?;
                }
            }
            Self::AutoCodeChecking {
                deadline,
                test_data,
            } => {
                if let Some(deadline) = deadline {
                    deadline.validate()?;
                }
                test_data.iter().try_for_each(TestData::validate)?;
            }
            Self::Testing { test_points } => {
                test_points.iter().try_for_each(TestPoint::validate)?;
            }
        }
        Ok(())
    }

    fn clear_deadline(&mut self) {
        match self {
            Self::ManualChecking { deadline } | Self::AutoCodeChecking { deadline, .. } => {
                *deadline = None;
            }
            Self::Testing { .. } => {}
        }
    }
}

/// A unit of coursework owned by a course.
///
/// Tasks are created and changed only through the owning `Course`, which
/// assigns their numbers and checks access before delegating here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    number: u32,
    title: String,
    description: String,
    kind: TaskKind,
}

impl Task {
    pub(crate) fn new(
        number: u32,
        title: &str,
        description: &str,
        kind: TaskKind,
    ) -> Result<Self, DomainError> {
        validate_task_title(title)?;
        validate_task_description(description)?;
        kind.validate()?;

        Ok(Self {
            number,
            title: title.to_string(),
            description: description.to_string(),
            kind,
        })
    }

    /// Rebuilds a task from persisted fields.
    ///
    /// # Errors
    ///
    /// Returns an error if the number is zero or any text or payload limit
    /// is violated.
    pub fn restore(
        number: u32,
        title: &str,
        description: &str,
        kind: TaskKind,
    ) -> Result<Self, DomainError> {
        let task: Self = Self {
            number,
            title: title.to_string(),
            description: description.to_string(),
            kind,
        };
        task.validate()?;
        Ok(task)
    }

    pub(crate) fn validate(&self) -> Result<(), DomainError> {
        if self.number == 0 {
            return Err(DomainError::InvalidSnapshot(String::from(
                "task numbers start at 1",
            )));
        }
        validate_task_title(&self.title)?;
        validate_task_description(&self.description)?;
        self.kind.validate()
    }

    #[must_use]
    pub const fn number(&self) -> u32 {
        self.number
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub const fn task_type(&self) -> TaskType {
        self.kind.task_type()
    }

    #[must_use]
    pub const fn kind(&self) -> &TaskKind {
        &self.kind
    }

    /// Returns the task's deadline, if one is set.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::TaskHasNoDeadline` for testing tasks.
    pub fn deadline(&self) -> Result<Option<&Deadline>, DomainError> {
        match &self.kind {
            TaskKind::ManualChecking { deadline } | TaskKind::AutoCodeChecking { deadline, .. } => {
                Ok(deadline.as_ref())
            }
            TaskKind::Testing { .. } => Err(self.no_deadline()),
        }
    }

    /// Returns the task's test points.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::TaskHasNoTestPoints` unless this is a testing task.
    pub fn test_points(&self) -> Result<&[TestPoint], DomainError> {
        match &self.kind {
            TaskKind::Testing { test_points } => Ok(test_points),
            TaskKind::ManualChecking { .. } | TaskKind::AutoCodeChecking { .. } => {
                Err(self.no_test_points())
            }
        }
    }

    /// Returns the task's test data.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::TaskHasNoTestData` unless this is an
    /// auto-code-checking task.
    pub fn test_data(&self) -> Result<&[TestData], DomainError> {
        match &self.kind {
            TaskKind::AutoCodeChecking { test_data, .. } => Ok(test_data),
            TaskKind::ManualChecking { .. } | TaskKind::Testing { .. } => {
                Err(self.no_test_data())
            }
        }
    }

    pub(crate) fn rename(&mut self, title: &str) -> Result<(), DomainError> {
        validate_task_title(title)?;
        self.title = title.to_string();
        Ok(())
    }

    pub(crate) fn replace_description(&mut self, description: &str) -> Result<(), DomainError> {
        validate_task_description(description)?;
        self.description = description.to_string();
        Ok(())
    }

    pub(crate) fn replace_deadline(&mut self, new_deadline: Deadline) -> Result<(), DomainError> {
        let error: DomainError = self.no_deadline();
        match &mut self.kind {
            TaskKind::ManualChecking { deadline } | TaskKind::AutoCodeChecking { deadline, .. } => {
                new_deadline.validate()?;
                *deadline = Some(new_deadline);
                Ok(())
            }
            TaskKind::Testing { .. } => Err(error),
        }
    }

    pub(crate) fn replace_test_points(
        &mut self,
        new_test_points: Vec<TestPoint>,
    ) -> Result<(), DomainError> {
        let error: DomainError = self.no_test_points();
        match &mut self.kind {
            TaskKind::Testing { test_points } => {
                new_test_points.iter().try_for_each(TestPoint::validate)?;
                *test_points = new_test_points;
                Ok(())
            }
            TaskKind::ManualChecking { .. } | TaskKind::AutoCodeChecking { .. } => Err(error),
        }
    }

    pub(crate) fn replace_test_data(&mut self, new_test_data: Vec<TestData>) -> Result<(), DomainError> {
        let error: DomainError = self.no_test_data();
        match &mut self.kind {
            TaskKind::AutoCodeChecking { test_data, .. } => {
                new_test_data.iter().try_for_each(TestData::validate)?;
                *test_data = new_test_data;
                Ok(())
            }
            TaskKind::ManualChecking { .. } | TaskKind::Testing { .. } => Err(error),
        }
    }

    /// Copies this task for a new term: renumbered, deadline cleared.
    pub(crate) fn carry_over(&self, number: u32) -> Self {
        let mut task: Self = self.clone();
        task.number = number;
        task.kind.clear_deadline();
        task
    }

    const fn no_deadline(&self) -> DomainError {
        DomainError::TaskHasNoDeadline {
            task_number: self.number,
            task_type: self.task_type(),
        }
    }

    const fn no_test_points(&self) -> DomainError {
        DomainError::TaskHasNoTestPoints {
            task_number: self.number,
            task_type: self.task_type(),
        }
    }

    const fn no_test_data(&self) -> DomainError {
        DomainError::TaskHasNoTestData {
            task_number: self.number,
            task_type: self.task_type(),
        }
    }
}
