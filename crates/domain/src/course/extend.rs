// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::{Access, Course, validate_course_id, validate_course_title, validate_creator};
use crate::academic::Academic;
use crate::error::DomainError;
use crate::period::Period;
use crate::task::Task;
use std::collections::{BTreeMap, BTreeSet};

/// Input for [`Course::extend`].
///
/// `None` overrides fall back to the origin course: its title, and the
/// period following its own.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtendCourseParams {
    pub id: String,
    pub creator: Academic,
    pub title: Option<String>,
    pub period: Option<Period>,
    pub started: bool,
    pub collaborators: Vec<String>,
    pub students: Vec<String>,
}

impl Course {
    /// Derives a course for a new term from this one.
    ///
    /// The derived course keeps this course's collaborators and students
    /// (plus any supplied in `params`) and a copy of every task, renumbered
    /// from 1 in the original order with deadlines cleared. When the
    /// requester is not this course's creator, this course's creator becomes
    /// a collaborator of the derived course. This course is not modified.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The new id is empty
    /// - The requester is missing or is not a teacher
    /// - The requester does not teach this course
    /// - An explicit title is empty or an explicit period is missing or invalid
    /// - The following period cannot be represented
    pub fn extend(&self, params: ExtendCourseParams) -> Result<Self, DomainError> {
        validate_course_id(&params.id)?;
        validate_creator(&params.creator)?;
        self.can_academic_edit_with_access(&params.creator, Access::Teacher)?;

        let title: String = match params.title {
            Some(title) => {
                validate_course_title(&title)?;
                title
            }
            None => self.title.clone(),
        };

        let period: Period = match params.period {
            Some(period) if period.is_zero() => return Err(DomainError::ZeroPeriod),
            Some(period) => {
                period.validate()?;
                period
            }
            None => self.period.next()?,
        };

        let creator_id: String = params.creator.id().to_string();

        let mut collaborators: BTreeSet<String> = self.collaborators.clone();
        collaborators.insert(self.creator_id.clone());
        collaborators.extend(params.collaborators);
        collaborators.remove(&creator_id);

        let mut students: BTreeSet<String> = self.students.clone();
        students.extend(params.students);

        let mut tasks: BTreeMap<u32, Task> = BTreeMap::new();
        let mut next_task_number: u32 = 1;
        for task in self.tasks.values() {
            tasks.insert(next_task_number, task.carry_over(next_task_number));
            next_task_number += 1;
        }

        Ok(Self {
            id: params.id,
            title,
            period,
            started: params.started,
            creator_id,
            collaborators,
            students,
            tasks,
            next_task_number,
        })
    }
}
