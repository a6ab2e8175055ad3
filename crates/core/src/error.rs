// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use coursework_domain::{DomainError, ErrorKind};
use thiserror::Error;

/// Errors reported by a [`CoursesRepository`](crate::CoursesRepository).
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RepositoryError {
    /// No course is stored under the id.
    #[error("Course '{0}' not found")]
    CourseNotFound(String),

    /// A course is already stored under the id.
    #[error("Course '{0}' already exists")]
    CourseAlreadyExists(String),

    /// The backing store failed to read or write.
    #[error("Storage failure: {0}")]
    Storage(String),

    /// The context deadline passed before the operation could finish.
    #[error("Deadline exceeded during {operation}")]
    DeadlineExceeded { operation: &'static str },

    /// The update function rejected the change.
    #[error(transparent)]
    Domain(#[from] DomainError),
}

impl RepositoryError {
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::CourseNotFound(_) => ErrorKind::NotFound,
            Self::CourseAlreadyExists(_) => ErrorKind::Validation,
            Self::Storage(_) | Self::DeadlineExceeded { .. } => ErrorKind::Infrastructure,
            Self::Domain(err) => err.kind(),
        }
    }
}

/// Errors reported by an [`AcademicsService`](crate::AcademicsService).
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AcademicsError {
    #[error("Teacher '{0}' does not exist")]
    TeacherNotFound(String),

    #[error("Student '{0}' does not exist")]
    StudentNotFound(String),

    #[error("Group '{0}' does not exist")]
    GroupNotFound(String),

    /// The service could not answer.
    #[error("Academics service unavailable: {0}")]
    Unavailable(String),
}

impl AcademicsError {
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::TeacherNotFound(_) | Self::StudentNotFound(_) | Self::GroupNotFound(_) => {
                ErrorKind::NotFound
            }
            Self::Unavailable(_) => ErrorKind::Infrastructure,
        }
    }
}

/// Errors returned by command handlers.
///
/// The `context` string names the operation, the actor and the target; the
/// wrapped error keeps its identity and stays reachable via `source()`,
/// [`CoreError::domain_error`] and [`CoreError::kind`].
#[derive(Debug, Error)]
pub enum CoreError {
    /// A domain rule rejected the command.
    #[error("{context}: {source}")]
    Domain {
        context: String,
        #[source]
        source: DomainError,
    },

    /// The repository failed.
    #[error("{context}: {source}")]
    Repository {
        context: String,
        #[source]
        source: RepositoryError,
    },

    /// A referenced academic does not exist or could not be checked.
    #[error("{context}: {source}")]
    Academics {
        context: String,
        #[source]
        source: AcademicsError,
    },

    /// The task type tag of an `AddTask` command is not recognised.
    #[error("Unknown task type '{0}'")]
    UnknownTaskType(String),
}

impl CoreError {
    /// Wraps a repository error, lifting rejections from the update function
    /// to `CoreError::Domain`.
    pub(crate) fn repository(context: String, source: RepositoryError) -> Self {
        match source {
            RepositoryError::Domain(source) => Self::Domain { context, source },
            source => Self::Repository { context, source },
        }
    }

    pub(crate) const fn academics(context: String, source: AcademicsError) -> Self {
        Self::Academics { context, source }
    }

    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Domain { source, .. } => source.kind(),
            Self::Repository { source, .. } => source.kind(),
            Self::Academics { source, .. } => source.kind(),
            Self::UnknownTaskType(_) => ErrorKind::Validation,
        }
    }

    /// Returns the underlying domain error, if there is one.
    #[must_use]
    pub const fn domain_error(&self) -> Option<&DomainError> {
        match self {
            Self::Domain { source, .. }
            | Self::Repository {
                source: RepositoryError::Domain(source),
                ..
            } => Some(source),
            Self::Repository { .. } | Self::Academics { .. } | Self::UnknownTaskType(_) => None,
        }
    }

    /// Returns whether retrying the command unchanged may succeed.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        self.kind().is_retryable()
    }

    #[must_use]
    pub const fn is_academic_cant_edit_course(&self) -> bool {
        match self.domain_error() {
            Some(err) => err.is_academic_cant_edit_course(),
            None => false,
        }
    }
}
