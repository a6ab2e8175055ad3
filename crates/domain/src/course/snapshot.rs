// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::Course;
use crate::error::DomainError;
use crate::period::Period;
use crate::task::Task;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// A plain image of a course, as stored and as presented to readers.
///
/// Collections are ordered: members by id, tasks by number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseSnapshot {
    pub id: String,
    pub title: String,
    pub period: Period,
    pub started: bool,
    pub creator_id: String,
    pub collaborators: Vec<String>,
    pub students: Vec<String>,
    pub tasks: Vec<Task>,
    pub next_task_number: u32,
}

impl Course {
    #[must_use]
    pub fn snapshot(&self) -> CourseSnapshot {
        CourseSnapshot {
            id: self.id.clone(),
            title: self.title.clone(),
            period: self.period,
            started: self.started,
            creator_id: self.creator_id.clone(),
            collaborators: self.collaborators.iter().cloned().collect(),
            students: self.students.iter().cloned().collect(),
            tasks: self.tasks.values().cloned().collect(),
            next_task_number: self.next_task_number,
        }
    }

    /// Rebuilds a course from a persisted snapshot.
    ///
    /// Structural invariants are checked; access rules are not, since no
    /// academic is acting.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The id, title or creator is empty
    /// - The period is missing or malformed
    /// - Task numbers are not exactly `1..next_task_number`
    /// - Any task violates its text or payload limits
    pub fn restore(snapshot: CourseSnapshot) -> Result<Self, DomainError> {
        if snapshot.id.is_empty() {
            return Err(DomainError::EmptyCourseId);
        }
        if snapshot.title.is_empty() {
            return Err(DomainError::EmptyCourseTitle);
        }
        if snapshot.creator_id.is_empty() {
            return Err(DomainError::MissingCreator);
        }
        if snapshot.period.is_zero() {
            return Err(DomainError::ZeroPeriod);
        }
        let period: Period = Period::new(
            snapshot.period.academic_start_year(),
            snapshot.period.academic_end_year(),
            snapshot.period.semester(),
        )?;
        if snapshot.next_task_number == 0 {
            return Err(DomainError::InvalidSnapshot(String::from(
                "next task number starts at 1",
            )));
        }

        let mut tasks: BTreeMap<u32, Task> = BTreeMap::new();
        for task in snapshot.tasks {
            task.validate()?;
            let number: u32 = task.number();
            if number >= snapshot.next_task_number {
                return Err(DomainError::InvalidSnapshot(format!(
                    "task #{number} is not below next task number {}",
                    snapshot.next_task_number
                )));
            }
            if tasks.insert(number, task).is_some() {
                return Err(DomainError::InvalidSnapshot(format!(
                    "task #{number} appears more than once"
                )));
            }
        }

        // Numbers are unique and in 1..next, so a full count means no gaps.
        let expected_count: usize = usize::try_from(snapshot.next_task_number.saturating_sub(1))
            .map_err(|_| DomainError::InvalidSnapshot(String::from("task count overflow")))?;
        if tasks.len() != expected_count {
            return Err(DomainError::InvalidSnapshot(format!(
                "expected tasks 1..{} but found {}",
                snapshot.next_task_number,
                tasks.len()
            )));
        }

        let collaborators: BTreeSet<String> = snapshot
            .collaborators
            .into_iter()
            .filter(|id| *id != snapshot.creator_id)
            .collect();

        Ok(Self {
            id: snapshot.id,
            title: snapshot.title,
            period,
            started: snapshot.started,
            creator_id: snapshot.creator_id,
            collaborators,
            students: snapshot.students.into_iter().collect(),
            tasks,
            next_task_number: snapshot.next_task_number,
        })
    }
}
