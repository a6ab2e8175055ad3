// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Roster-file implementation of the academics service.
//!
//! A roster is a JSON document listing the ids the institution knows about:
//!
//! ```json
//! { "teachers": ["t1"], "students": ["s1", "s2"], "groups": ["g1"] }
//! ```
//!
//! Every list is optional and defaults to empty.

use std::collections::BTreeSet;
use std::path::Path;

use coursework::{AcademicsError, AcademicsService, Context};
use serde::Deserialize;
use tracing::debug;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RosterAcademics {
    teachers: BTreeSet<String>,
    students: BTreeSet<String>,
    groups: BTreeSet<String>,
}

impl RosterAcademics {
    /// Parses a roster from JSON text.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not a valid roster document.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Reads a roster file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn std::error::Error>> {
        let text: String = std::fs::read_to_string(path.as_ref())?;
        let roster: Self = Self::from_json(&text)?;
        debug!(
            path = %path.as_ref().display(),
            teachers = roster.teachers.len(),
            students = roster.students.len(),
            groups = roster.groups.len(),
            "Loaded roster"
        );
        Ok(roster)
    }

    fn check(
        ctx: &Context,
        known: &BTreeSet<String>,
        id: &str,
        missing: fn(String) -> AcademicsError,
    ) -> Result<(), AcademicsError> {
        if ctx.is_expired() {
            return Err(AcademicsError::Unavailable(String::from(
                "deadline exceeded before roster lookup",
            )));
        }
        if known.contains(id) {
            Ok(())
        } else {
            Err(missing(id.to_string()))
        }
    }
}

impl AcademicsService for RosterAcademics {
    fn teacher_exists(&self, ctx: &Context, teacher_id: &str) -> Result<(), AcademicsError> {
        Self::check(ctx, &self.teachers, teacher_id, AcademicsError::TeacherNotFound)
    }

    fn student_exists(&self, ctx: &Context, student_id: &str) -> Result<(), AcademicsError> {
        Self::check(ctx, &self.students, student_id, AcademicsError::StudentNotFound)
    }

    fn group_exists(&self, ctx: &Context, group_id: &str) -> Result<(), AcademicsError> {
        Self::check(ctx, &self.groups, group_id, AcademicsError::GroupNotFound)
    }
}
