// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The `Course` aggregate root.
//!
//! A course owns its membership sets and its tasks. Every mutating method
//! checks the acting academic's access before touching state and validates
//! all input before mutating, so a failed call leaves the course unchanged.
//!
//! The methods are split by concern:
//!
//! - `membership`: collaborators and students
//! - `tasks`: task authoring
//! - `extend`: deriving a course for the next term
//! - `snapshot`: plain images for persistence

mod extend;
mod membership;
mod snapshot;
mod tasks;

use crate::academic::{Academic, AcademicType};
use crate::error::DomainError;
use crate::period::Period;
use crate::task::Task;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

pub use extend::ExtendCourseParams;
pub use snapshot::CourseSnapshot;
pub use tasks::{AutoCodeCheckingTaskParams, ManualCheckingTaskParams, TestingTaskParams};

/// The access level an edit requires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Access {
    /// The creator or any collaborator.
    Teacher,
    /// The creator only.
    Creator,
}

impl std::fmt::Display for Access {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Teacher => write!(f, "teacher"),
            Self::Creator => write!(f, "creator"),
        }
    }
}

/// Input for [`Course::new`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewCourseParams {
    pub id: String,
    pub creator: Academic,
    pub title: String,
    pub period: Period,
    pub started: bool,
    pub collaborators: Vec<String>,
    pub students: Vec<String>,
}

/// A course and everything it owns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Course {
    id: String,
    title: String,
    period: Period,
    started: bool,
    creator_id: String,
    collaborators: BTreeSet<String>,
    students: BTreeSet<String>,
    tasks: BTreeMap<u32, Task>,
    next_task_number: u32,
}

impl Course {
    /// Creates a new course.
    ///
    /// Checks run in a fixed order and stop at the first failure: id,
    /// creator presence, creator role, title, period. Collaborator and
    /// student ids are taken as given; their existence is checked by the
    /// caller.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The id is empty
    /// - The creator is missing or is not a teacher
    /// - The title is empty
    /// - The period is missing or does not span exactly one year
    pub fn new(params: NewCourseParams) -> Result<Self, DomainError> {
        validate_course_id(&params.id)?;
        validate_creator(&params.creator)?;
        validate_course_title(&params.title)?;

        if params.period.is_zero() {
            return Err(DomainError::ZeroPeriod);
        }
        params.period.validate()?;

        let creator_id: String = params.creator.id().to_string();
        let collaborators: BTreeSet<String> = params
            .collaborators
            .into_iter()
            .filter(|id| *id != creator_id)
            .collect();

        Ok(Self {
            id: params.id,
            title: params.title,
            period: params.period,
            started: params.started,
            creator_id,
            collaborators,
            students: params.students.into_iter().collect(),
            tasks: BTreeMap::new(),
            next_task_number: 1,
        })
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub const fn period(&self) -> Period {
        self.period
    }

    #[must_use]
    pub const fn started(&self) -> bool {
        self.started
    }

    #[must_use]
    pub fn creator_id(&self) -> &str {
        &self.creator_id
    }

    /// Returns whether `academic_id` is the creator or a collaborator.
    #[must_use]
    pub fn has_teacher(&self, academic_id: &str) -> bool {
        self.creator_id == academic_id || self.collaborators.contains(academic_id)
    }

    #[must_use]
    pub fn has_student(&self, academic_id: &str) -> bool {
        self.students.contains(academic_id)
    }

    /// Checks that `academic` holds `access` on this course.
    ///
    /// Students never hold any edit access. Teachers hold `Teacher` access
    /// when they teach the course and `Creator` access when they created it.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::AcademicCantEditCourse` if the access is not held.
    pub fn can_academic_edit_with_access(
        &self,
        academic: &Academic,
        access: Access,
    ) -> Result<(), DomainError> {
        let allowed: bool = match (academic.academic_type(), access) {
            (AcademicType::Student, _) => false,
            (AcademicType::Teacher, Access::Teacher) => self.has_teacher(academic.id()),
            (AcademicType::Teacher, Access::Creator) => self.creator_id == academic.id(),
        };

        if !allowed {
            return Err(DomainError::AcademicCantEditCourse {
                academic_id: academic.id().to_string(),
                academic_type: academic.academic_type(),
                course_id: self.id.clone(),
                access,
            });
        }
        Ok(())
    }

    /// Checks that `academic` may read this course.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::AcademicCantSeeCourse` unless the academic
    /// teaches the course or is enrolled in it.
    pub fn can_academic_see(&self, academic: &Academic) -> Result<(), DomainError> {
        let allowed: bool = match academic.academic_type() {
            AcademicType::Teacher => self.has_teacher(academic.id()),
            AcademicType::Student => self.has_student(academic.id()),
        };

        if !allowed {
            return Err(DomainError::AcademicCantSeeCourse {
                academic_id: academic.id().to_string(),
                course_id: self.id.clone(),
            });
        }
        Ok(())
    }
}

fn validate_course_id(id: &str) -> Result<(), DomainError> {
    if id.is_empty() {
        return Err(DomainError::EmptyCourseId);
    }
    Ok(())
}

fn validate_creator(creator: &Academic) -> Result<(), DomainError> {
    if creator.is_zero() {
        return Err(DomainError::MissingCreator);
    }
    creator.can_create_course()
}

fn validate_course_title(title: &str) -> Result<(), DomainError> {
    if title.is_empty() {
        return Err(DomainError::EmptyCourseTitle);
    }
    Ok(())
}
