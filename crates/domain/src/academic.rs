// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// The role an academic holds in the system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AcademicType {
    /// May create courses and edit the courses they teach.
    Teacher,
    /// May be enrolled in courses.
    Student,
}

impl AcademicType {
    /// Converts this role to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Teacher => "Teacher",
            Self::Student => "Student",
        }
    }
}

impl FromStr for AcademicType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("teacher") {
            Ok(Self::Teacher)
        } else if s.eq_ignore_ascii_case("student") {
            Ok(Self::Student)
        } else {
            Err(DomainError::InvalidAcademicType(s.to_string()))
        }
    }
}

impl std::fmt::Display for AcademicType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A person acting on the system.
///
/// The default value has an empty id and stands for "no academic". It can
/// only be obtained through [`Default`]; [`Academic::new`] never produces it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Academic {
    id: String,
    academic_type: AcademicType,
}

impl Default for Academic {
    fn default() -> Self {
        Self {
            id: String::new(),
            academic_type: AcademicType::Student,
        }
    }
}

impl Academic {
    /// Creates a new `Academic`.
    ///
    /// # Arguments
    ///
    /// * `id` - The academic's identifier
    /// * `academic_type` - The academic's role
    ///
    /// # Errors
    ///
    /// Returns `DomainError::EmptyAcademicId` if `id` is empty.
    pub fn new(id: &str, academic_type: AcademicType) -> Result<Self, DomainError> {
        if id.is_empty() {
            return Err(DomainError::EmptyAcademicId);
        }

        Ok(Self {
            id: id.to_string(),
            academic_type,
        })
    }

    /// Returns the academic's identifier.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the academic's role.
    #[must_use]
    pub const fn academic_type(&self) -> AcademicType {
        self.academic_type
    }

    #[must_use]
    pub const fn is_teacher(&self) -> bool {
        matches!(self.academic_type, AcademicType::Teacher)
    }

    #[must_use]
    pub const fn is_student(&self) -> bool {
        matches!(self.academic_type, AcademicType::Student)
    }

    /// Returns whether this is the "no academic" value.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.id.is_empty()
    }

    /// Checks that this academic may create courses.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::NotTeacherCantCreateCourse` unless the academic
    /// is a teacher.
    pub fn can_create_course(&self) -> Result<(), DomainError> {
        if !self.is_teacher() {
            return Err(DomainError::NotTeacherCantCreateCourse {
                academic_id: self.id.clone(),
            });
        }
        Ok(())
    }
}
