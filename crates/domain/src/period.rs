// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Half of an academic year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Semester {
    #[default]
    First,
    Second,
}

impl Semester {
    /// Converts this semester to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::First => "First",
            Self::Second => "Second",
        }
    }
}

impl FromStr for Semester {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("first") {
            Ok(Self::First)
        } else if s.eq_ignore_ascii_case("second") {
            Ok(Self::Second)
        } else {
            Err(DomainError::InvalidSemester(s.to_string()))
        }
    }
}

impl std::fmt::Display for Semester {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The academic year and semester a course runs in.
///
/// A valid period spans exactly one academic year boundary, e.g. 2023-2024.
/// The default value (both years zero) means "no period".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Period {
    academic_start_year: u16,
    academic_end_year: u16,
    semester: Semester,
}

impl Period {
    /// Creates a new `Period`.
    ///
    /// # Arguments
    ///
    /// * `academic_start_year` - The year the academic year starts in
    /// * `academic_end_year` - The year the academic year ends in
    /// * `semester` - The semester within the academic year
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidPeriod` unless the end year is exactly
    /// one greater than the start year.
    pub fn new(
        academic_start_year: u16,
        academic_end_year: u16,
        semester: Semester,
    ) -> Result<Self, DomainError> {
        let period: Self = Self {
            academic_start_year,
            academic_end_year,
            semester,
        };
        period.validate()?;
        Ok(period)
    }

    /// Re-checks the year span of a period obtained through deserialization.
    ///
    /// # Errors
    ///
    /// See [`Period::new`].
    pub const fn validate(&self) -> Result<(), DomainError> {
        // Rule: start < end and end - start == 1
        if self.academic_start_year >= self.academic_end_year
            || self.academic_end_year - self.academic_start_year != 1
        {
            return Err(DomainError::InvalidPeriod {
                start_year: self.academic_start_year,
                end_year: self.academic_end_year,
            });
        }
        Ok(())
    }

    #[must_use]
    pub const fn academic_start_year(&self) -> u16 {
        self.academic_start_year
    }

    #[must_use]
    pub const fn academic_end_year(&self) -> u16 {
        self.academic_end_year
    }

    #[must_use]
    pub const fn semester(&self) -> Semester {
        self.semester
    }

    /// Returns whether this is the "no period" value.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.academic_start_year == 0 && self.academic_end_year == 0
    }

    /// Returns the same semester of the following academic year.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidPeriod` if the following year cannot be
    /// represented.
    pub fn next(&self) -> Result<Self, DomainError> {
        let end_year: u16 =
            self.academic_end_year
                .checked_add(1)
                .ok_or(DomainError::InvalidPeriod {
                    start_year: self.academic_end_year,
                    end_year: self.academic_end_year,
                })?;
        Self::new(self.academic_end_year, end_year, self.semester)
    }
}

impl std::fmt::Display for Period {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}-{} ({} semester)",
            self.academic_start_year, self.academic_end_year, self.semester
        )
    }
}
