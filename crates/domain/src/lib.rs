// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod academic;
mod course;
mod deadline;
mod error;
mod period;
mod task;
mod test_data;
mod validation;

#[cfg(test)]
mod tests;

// Re-export public types
pub use academic::{Academic, AcademicType};
pub use course::{
    Access, AutoCodeCheckingTaskParams, Course, CourseSnapshot, ExtendCourseParams,
    ManualCheckingTaskParams, NewCourseParams, TestingTaskParams,
};
pub use deadline::Deadline;
pub use error::{DomainError, ErrorKind};
pub use period::{Period, Semester};
pub use task::{Task, TaskKind, TaskType};
pub use test_data::{TestData, TestPoint};
pub use validation::{
    MAX_TASK_DESCRIPTION_CHARS, MAX_TASK_TITLE_CHARS, MAX_TEST_DATA_CHARS,
    MAX_TEST_POINT_DESCRIPTION_CHARS, validate_task_description, validate_task_title,
    validate_text_length,
};
