// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Application layer for course administration.
//!
//! Each use case is a command struct paired with a handler. Handlers check
//! referenced academics through [`AcademicsService`], then hand a mutation
//! closure to [`CoursesRepository::update_course`] so that every aggregate
//! change runs inside one load-mutate-store transaction.

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

mod command;
mod context;
mod error;
mod handlers;
mod ports;

#[cfg(test)]
mod tests;

// Re-export public types
pub use command::{
    AddCollaborator, AddStudent, AddTask, CreateCourse, ExtendCourse, RemoveCollaborator,
    RemoveStudent,
};
pub use context::Context;
pub use error::{AcademicsError, CoreError, RepositoryError};
pub use handlers::{
    AddCollaboratorHandler, AddStudentHandler, AddTaskHandler, CreateCourseHandler,
    ExtendCourseHandler, Handlers, RemoveCollaboratorHandler, RemoveStudentHandler,
};
pub use ports::{AcademicsService, CoursesRepository, UpdateFunction};
