// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use coursework::RepositoryError;
use coursework_domain::DomainError;

/// Errors that can occur during persistence operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PersistenceError {
    /// A database error occurred.
    DatabaseError(String),
    /// Database connection failed.
    DatabaseConnectionFailed(String),
    /// Database migration failed.
    MigrationFailed(String),
    /// Query execution failed.
    QueryFailed(String),
    /// Serialization/deserialization error.
    SerializationError(String),
    /// Initialization error.
    InitializationError(String),
    /// Foreign key enforcement is not enabled.
    ForeignKeyEnforcementNotEnabled,
    /// A stored course could not be rebuilt into a valid aggregate.
    CorruptRecord {
        /// The course the record belongs to.
        course_id: String,
        /// What was wrong with it.
        reason: String,
    },
    /// The requested course was not found.
    CourseNotFound(String),
    /// A course with the id is already stored.
    CourseAlreadyExists(String),
    /// The caller's deadline passed.
    DeadlineExceeded(&'static str),
    /// The update function rejected the change.
    Rejected(DomainError),
}

impl std::fmt::Display for PersistenceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DatabaseError(msg) => write!(f, "Database error: {msg}"),
            Self::DatabaseConnectionFailed(msg) => {
                write!(f, "Database connection failed: {msg}")
            }
            Self::MigrationFailed(msg) => write!(f, "Migration failed: {msg}"),
            Self::QueryFailed(msg) => write!(f, "Query failed: {msg}"),
            Self::SerializationError(msg) => write!(f, "Serialization error: {msg}"),
            Self::InitializationError(msg) => write!(f, "Initialization error: {msg}"),
            Self::ForeignKeyEnforcementNotEnabled => {
                write!(f, "Foreign key enforcement is not enabled")
            }
            Self::CorruptRecord { course_id, reason } => {
                write!(f, "Stored course '{course_id}' is corrupt: {reason}")
            }
            Self::CourseNotFound(course_id) => write!(f, "Course not found: {course_id}"),
            Self::CourseAlreadyExists(course_id) => {
                write!(f, "Course already exists: {course_id}")
            }
            Self::DeadlineExceeded(operation) => {
                write!(f, "Deadline exceeded during {operation}")
            }
            Self::Rejected(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for PersistenceError {}

impl From<diesel::result::Error> for PersistenceError {
    fn from(err: diesel::result::Error) -> Self {
        Self::DatabaseError(err.to_string())
    }
}

impl From<diesel::ConnectionError> for PersistenceError {
    fn from(err: diesel::ConnectionError) -> Self {
        Self::DatabaseConnectionFailed(err.to_string())
    }
}

impl From<serde_json::Error> for PersistenceError {
    fn from(err: serde_json::Error) -> Self {
        Self::SerializationError(err.to_string())
    }
}

impl From<PersistenceError> for RepositoryError {
    fn from(err: PersistenceError) -> Self {
        match err {
            PersistenceError::CourseNotFound(course_id) => Self::CourseNotFound(course_id),
            PersistenceError::CourseAlreadyExists(course_id) => {
                Self::CourseAlreadyExists(course_id)
            }
            PersistenceError::DeadlineExceeded(operation) => Self::DeadlineExceeded { operation },
            PersistenceError::Rejected(err) => Self::Domain(err),
            other => Self::Storage(other.to_string()),
        }
    }
}
