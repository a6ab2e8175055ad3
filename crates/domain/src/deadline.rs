// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Submission cut-offs for a task.
///
/// Work handed in by the excellent-grade time can earn the top grade, work
/// handed in by the good-grade time can earn at most a good grade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Deadline {
    #[serde(with = "time::serde::rfc3339")]
    excellent_grade_time: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    good_grade_time: OffsetDateTime,
}

impl Deadline {
    /// Creates a new `Deadline`.
    ///
    /// # Arguments
    ///
    /// * `excellent_grade_time` - The cut-off for an excellent grade
    /// * `good_grade_time` - The cut-off for a good grade
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidDeadline` if either time is the Unix
    /// epoch (an unset timestamp) or the excellent-grade time is later than
    /// the good-grade time.
    pub fn new(
        excellent_grade_time: OffsetDateTime,
        good_grade_time: OffsetDateTime,
    ) -> Result<Self, DomainError> {
        let deadline: Self = Self {
            excellent_grade_time,
            good_grade_time,
        };
        deadline.validate()?;
        Ok(deadline)
    }

    /// Re-checks the invariants of a deadline obtained through deserialization.
    ///
    /// # Errors
    ///
    /// See [`Deadline::new`].
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.excellent_grade_time == OffsetDateTime::UNIX_EPOCH
            || self.good_grade_time == OffsetDateTime::UNIX_EPOCH
        {
            return Err(DomainError::InvalidDeadline(String::from(
                "both grade times must be set",
            )));
        }

        if self.excellent_grade_time > self.good_grade_time {
            return Err(DomainError::InvalidDeadline(format!(
                "excellent grade time {} is after good grade time {}",
                self.excellent_grade_time, self.good_grade_time
            )));
        }

        Ok(())
    }

    #[must_use]
    pub const fn excellent_grade_time(&self) -> OffsetDateTime {
        self.excellent_grade_time
    }

    #[must_use]
    pub const fn good_grade_time(&self) -> OffsetDateTime {
        self.good_grade_time
    }
}
