// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::academic::AcademicType;
use crate::course::Access;
use crate::task::TaskType;

/// Coarse classification shared by every error in the system.
///
/// Callers branch on the kind rather than on concrete variants when all they
/// need is to decide how to respond (reject, report missing, retry).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Malformed construction input.
    Validation,
    /// The actor lacks the access level the operation requires.
    Authorization,
    /// A referenced course, task, member or external academic is absent.
    NotFound,
    /// Storage, transaction or collaborator failure. Only produced by adapters.
    Infrastructure,
    /// A field operation was attempted on a task kind without that field.
    TaskTypeMismatch,
}

impl ErrorKind {
    /// Returns whether an operation that failed with this kind may succeed
    /// when retried unchanged.
    #[must_use]
    pub const fn is_retryable(self) -> bool {
        matches!(self, Self::Infrastructure)
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name: &str = match self {
            Self::Validation => "validation",
            Self::Authorization => "authorization",
            Self::NotFound => "not found",
            Self::Infrastructure => "infrastructure",
            Self::TaskTypeMismatch => "task type mismatch",
        };
        f.write_str(name)
    }
}

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Academic identifier is empty.
    EmptyAcademicId,
    /// Academic type is not one of the known roles.
    InvalidAcademicType(String),
    /// Only teachers may create or extend courses.
    NotTeacherCantCreateCourse {
        /// The academic that attempted the operation.
        academic_id: String,
    },
    /// Course identifier is empty.
    EmptyCourseId,
    /// No creator was supplied for a new course.
    MissingCreator,
    /// Course title is empty.
    EmptyCourseTitle,
    /// No period was supplied for a new course.
    ZeroPeriod,
    /// Period years do not describe one academic year.
    InvalidPeriod {
        /// The academic start year.
        start_year: u16,
        /// The academic end year.
        end_year: u16,
    },
    /// Semester is not one of the known values.
    InvalidSemester(String),
    /// Deadline timestamps are missing or out of order.
    InvalidDeadline(String),
    /// A text field exceeds its character limit.
    TextTooLong {
        /// The name of the field.
        field: &'static str,
        /// The maximum number of characters allowed.
        max: usize,
        /// The number of characters supplied.
        actual: usize,
    },
    /// Test point variants or correct answers are malformed.
    InvalidTestPoint(String),
    /// Task type tag is not one of the known kinds.
    InvalidTaskType(String),
    /// A persisted course image violates a structural invariant.
    InvalidSnapshot(String),
    /// The academic lacks the access level required to edit the course.
    AcademicCantEditCourse {
        /// The academic that attempted the edit.
        academic_id: String,
        /// The academic's role.
        academic_type: AcademicType,
        /// The course being edited.
        course_id: String,
        /// The access level the operation required.
        access: Access,
    },
    /// The academic is neither a teacher nor a student of the course.
    AcademicCantSeeCourse {
        /// The academic that attempted to read the course.
        academic_id: String,
        /// The course being read.
        course_id: String,
    },
    /// The course has no task with the given number.
    CourseHasNoSuchTask {
        /// The course identifier.
        course_id: String,
        /// The missing task number.
        task_number: u32,
    },
    /// The course has no collaborator with the given identifier.
    CourseHasNoSuchCollaborator {
        /// The course identifier.
        course_id: String,
        /// The missing collaborator.
        collaborator_id: String,
    },
    /// The course has no student with the given identifier.
    CourseHasNoSuchStudent {
        /// The course identifier.
        course_id: String,
        /// The missing student.
        student_id: String,
    },
    /// The task kind carries no deadline.
    TaskHasNoDeadline {
        /// The task number.
        task_number: u32,
        /// The task kind.
        task_type: TaskType,
    },
    /// The task kind carries no test points.
    TaskHasNoTestPoints {
        /// The task number.
        task_number: u32,
        /// The task kind.
        task_type: TaskType,
    },
    /// The task kind carries no test data.
    TaskHasNoTestData {
        /// The task number.
        task_number: u32,
        /// The task kind.
        task_type: TaskType,
    },
}

impl DomainError {
    /// Returns the classification of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::EmptyAcademicId
            | Self::InvalidAcademicType(_)
            | Self::EmptyCourseId
            | Self::MissingCreator
            | Self::EmptyCourseTitle
            | Self::ZeroPeriod
            | Self::InvalidPeriod { .. }
            | Self::InvalidSemester(_)
            | Self::InvalidDeadline(_)
            | Self::TextTooLong { .. }
            | Self::InvalidTestPoint(_)
            | Self::InvalidTaskType(_)
            | Self::InvalidSnapshot(_) => ErrorKind::Validation,
            Self::NotTeacherCantCreateCourse { .. }
            | Self::AcademicCantEditCourse { .. }
            | Self::AcademicCantSeeCourse { .. } => ErrorKind::Authorization,
            Self::CourseHasNoSuchTask { .. }
            | Self::CourseHasNoSuchCollaborator { .. }
            | Self::CourseHasNoSuchStudent { .. } => ErrorKind::NotFound,
            Self::TaskHasNoDeadline { .. }
            | Self::TaskHasNoTestPoints { .. }
            | Self::TaskHasNoTestData { .. } => ErrorKind::TaskTypeMismatch,
        }
    }

    /// Returns whether this error reports insufficient rights to edit a course.
    #[must_use]
    pub const fn is_academic_cant_edit_course(&self) -> bool {
        matches!(self, Self::AcademicCantEditCourse { .. })
    }
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyAcademicId => write!(f, "Academic id cannot be empty"),
            Self::InvalidAcademicType(value) => write!(f, "Invalid academic type: {value}"),
            Self::NotTeacherCantCreateCourse { academic_id } => {
                write!(
                    f,
                    "Academic '{academic_id}' is not a teacher and cannot create courses"
                )
            }
            Self::EmptyCourseId => write!(f, "Course id cannot be empty"),
            Self::MissingCreator => write!(f, "Course creator is missing"),
            Self::EmptyCourseTitle => write!(f, "Course title cannot be empty"),
            Self::ZeroPeriod => write!(f, "Course period is missing"),
            Self::InvalidPeriod {
                start_year,
                end_year,
            } => {
                write!(
                    f,
                    "Invalid period {start_year}-{end_year}: end year must follow start year by exactly one"
                )
            }
            Self::InvalidSemester(value) => write!(f, "Invalid semester: {value}"),
            Self::InvalidDeadline(msg) => write!(f, "Invalid deadline: {msg}"),
            Self::TextTooLong { field, max, actual } => {
                write!(
                    f,
                    "Field '{field}' is too long: {actual} characters, at most {max} allowed"
                )
            }
            Self::InvalidTestPoint(msg) => write!(f, "Invalid test point: {msg}"),
            Self::InvalidTaskType(value) => write!(f, "Invalid task type: {value}"),
            Self::InvalidSnapshot(msg) => write!(f, "Invalid course snapshot: {msg}"),
            Self::AcademicCantEditCourse {
                academic_id,
                academic_type,
                course_id,
                access,
            } => {
                write!(
                    f,
                    "{academic_type} '{academic_id}' lacks {access} access to course '{course_id}'"
                )
            }
            Self::AcademicCantSeeCourse {
                academic_id,
                course_id,
            } => {
                write!(
                    f,
                    "Academic '{academic_id}' is not a member of course '{course_id}'"
                )
            }
            Self::CourseHasNoSuchTask {
                course_id,
                task_number,
            } => {
                write!(f, "Course '{course_id}' has no task #{task_number}")
            }
            Self::CourseHasNoSuchCollaborator {
                course_id,
                collaborator_id,
            } => {
                write!(
                    f,
                    "Course '{course_id}' has no collaborator '{collaborator_id}'"
                )
            }
            Self::CourseHasNoSuchStudent {
                course_id,
                student_id,
            } => {
                write!(f, "Course '{course_id}' has no student '{student_id}'")
            }
            Self::TaskHasNoDeadline {
                task_number,
                task_type,
            } => {
                write!(f, "Task #{task_number} is a {task_type} task and has no deadline")
            }
            Self::TaskHasNoTestPoints {
                task_number,
                task_type,
            } => {
                write!(
                    f,
                    "Task #{task_number} is a {task_type} task and has no test points"
                )
            }
            Self::TaskHasNoTestData {
                task_number,
                task_type,
            } => {
                write!(
                    f,
                    "Task #{task_number} is a {task_type} task and has no test data"
                )
            }
        }
    }
}

impl std::error::Error for DomainError {}
