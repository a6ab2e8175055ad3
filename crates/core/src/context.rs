// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::time::{Duration, Instant};

use crate::error::RepositoryError;

/// Per-command execution context.
///
/// Carries an optional deadline that adapters consult before doing work and
/// before committing it. A context without a deadline never expires.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Context {
    deadline: Option<Instant>,
}

impl Context {
    /// A context with no deadline.
    #[must_use]
    pub const fn background() -> Self {
        Self { deadline: None }
    }

    /// A context that expires `timeout` from now.
    ///
    /// A timeout too large to represent yields a context with no deadline.
    #[must_use]
    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            deadline: Instant::now().checked_add(timeout),
        }
    }

    #[must_use]
    pub const fn with_deadline(deadline: Instant) -> Self {
        Self {
            deadline: Some(deadline),
        }
    }

    #[must_use]
    pub const fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Time left before the deadline.
    ///
    /// # Returns
    ///
    /// * `None` if there is no deadline
    /// * `Some(Duration::ZERO)` once the deadline has passed
    #[must_use]
    pub fn remaining(&self) -> Option<Duration> {
        self.deadline
            .map(|deadline| deadline.saturating_duration_since(Instant::now()))
    }

    #[must_use]
    pub fn is_expired(&self) -> bool {
        self.remaining().is_some_and(|left| left.is_zero())
    }

    /// Fails if the deadline has passed.
    ///
    /// # Arguments
    ///
    /// * `operation` - What was about to run, for the error message
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::DeadlineExceeded` once the deadline has passed.
    pub fn check(&self, operation: &'static str) -> Result<(), RepositoryError> {
        if self.is_expired() {
            return Err(RepositoryError::DeadlineExceeded { operation });
        }
        Ok(())
    }
}
