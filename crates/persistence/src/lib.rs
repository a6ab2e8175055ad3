// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Persistence layer for the coursework administration system.
//!
//! This crate provides two [`CoursesRepository`] adapters:
//!
//! - [`Persistence`]: `SQLite` via Diesel, with embedded migrations
//! - [`InMemoryCoursesRepository`]: a mutex-guarded map for tests and tooling
//!
//! ## Transactions
//!
//! Every write runs inside an `IMMEDIATE` transaction, so the write lock is
//! taken before the course is loaded and concurrent updates of one course
//! serialize instead of failing at commit time. The caller's [`Context`]
//! deadline bounds the wait for the shared connection and `SQLite`'s
//! `busy_timeout`, and is checked again before committing.
//!
//! ## Testing Philosophy
//!
//! - Tests run against unique shared-cache in-memory databases
//! - Each test creates its own adapter; nothing is shared between tests

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
#![allow(clippy::multiple_crate_versions)]

use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use coursework::{Context, CoursesRepository, RepositoryError, UpdateFunction};
use coursework_domain::Course;
use diesel::{Connection, SqliteConnection};
use parking_lot::{Mutex, MutexGuard};
use tracing::{debug, info};

mod backend;
mod data_models;
mod diesel_schema;
mod error;
mod memory;
mod mutations;
mod queries;

#[cfg(test)]
mod tests;

pub use error::PersistenceError;
pub use memory::InMemoryCoursesRepository;

/// Atomic counter for generating unique in-memory database names.
///
/// Each call to `new_in_memory()` receives a unique sequential ID.
static DB_COUNTER: AtomicU64 = AtomicU64::new(0);

/// `SQLite` adapter for course aggregates.
///
/// Holds one connection behind a mutex; callers share the adapter through an
/// `Arc<dyn CoursesRepository>`.
pub struct Persistence {
    conn: Mutex<SqliteConnection>,
}

impl Persistence {
    /// Creates a new persistence adapter with an in-memory `SQLite` database.
    ///
    /// Each call receives a unique database instance via atomic counter,
    /// ensuring deterministic test isolation without time-based collisions.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be initialized.
    pub fn new_in_memory() -> Result<Self, PersistenceError> {
        let db_id: u64 = DB_COUNTER.fetch_add(1, Ordering::SeqCst);
        let shared_memory_url: String = format!("file:memdb_courses_{db_id}?mode=memory&cache=shared");

        let mut conn: SqliteConnection = backend::sqlite::initialize_database(&shared_memory_url)?;
        backend::sqlite::verify_foreign_key_enforcement(&mut conn)?;

        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Creates a new persistence adapter with a file-based `SQLite` database.
    ///
    /// # Arguments
    ///
    /// * `path` - The path to the `SQLite` database file
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or initialized.
    pub fn new_with_file<P: AsRef<Path>>(path: P) -> Result<Self, PersistenceError> {
        let path_str: &str = path.as_ref().to_str().ok_or_else(|| {
            PersistenceError::InitializationError(String::from("Invalid database path"))
        })?;

        let mut conn: SqliteConnection = backend::sqlite::initialize_database(path_str)?;

        // Enable WAL mode for better read concurrency
        backend::sqlite::enable_wal_mode(&mut conn)?;

        backend::sqlite::verify_foreign_key_enforcement(&mut conn)?;

        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Verifies that foreign key enforcement is enabled.
    ///
    /// # Errors
    ///
    /// Returns an error if foreign key enforcement is not enabled.
    pub fn verify_foreign_key_enforcement(&self) -> Result<(), PersistenceError> {
        backend::sqlite::verify_foreign_key_enforcement(&mut self.conn.lock())
    }

    /// Lists the user tables created by the migrations, sorted by name.
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog query fails.
    pub fn list_tables(&self) -> Result<Vec<String>, PersistenceError> {
        backend::sqlite::list_tables(&mut self.conn.lock())
    }

    /// Takes the connection, waiting no longer than the context allows.
    fn connection(
        &self,
        ctx: &Context,
        operation: &'static str,
    ) -> Result<MutexGuard<'_, SqliteConnection>, PersistenceError> {
        check_deadline(ctx, operation)?;
        match ctx.remaining() {
            None => Ok(self.conn.lock()),
            Some(left) => self
                .conn
                .try_lock_for(left)
                .ok_or(PersistenceError::DeadlineExceeded(operation)),
        }
    }

    /// Runs `work` inside an `IMMEDIATE` transaction.
    ///
    /// The deadline is checked again after `work` returns; an expired
    /// deadline rolls the transaction back.
    fn write<T, F>(&self, ctx: &Context, operation: &'static str, work: F) -> Result<T, PersistenceError>
    where
        F: FnOnce(&mut SqliteConnection) -> Result<T, PersistenceError>,
    {
        let mut conn: MutexGuard<'_, SqliteConnection> = self.connection(ctx, operation)?;
        let busy_timeout: Duration = ctx
            .remaining()
            .unwrap_or(backend::sqlite::DEFAULT_BUSY_TIMEOUT);
        backend::sqlite::set_busy_timeout(&mut conn, busy_timeout)?;

        conn.immediate_transaction(|conn| {
            let value: T = work(conn)?;
            check_deadline(ctx, operation)?;
            Ok(value)
        })
    }
}

fn check_deadline(ctx: &Context, operation: &'static str) -> Result<(), PersistenceError> {
    if ctx.is_expired() {
        return Err(PersistenceError::DeadlineExceeded(operation));
    }
    Ok(())
}

impl CoursesRepository for Persistence {
    fn add_course(&self, ctx: &Context, course: &Course) -> Result<(), RepositoryError> {
        self.write(ctx, "add course", |conn| {
            mutations::insert_course(conn, course)
        })?;

        info!(course_id = %course.id(), "Persisted new course");
        Ok(())
    }

    fn get_course(&self, ctx: &Context, course_id: &str) -> Result<Course, RepositoryError> {
        let mut conn: MutexGuard<'_, SqliteConnection> = self.connection(ctx, "get course")?;

        let course: Option<Course> = conn.transaction(|conn| queries::load_course(conn, course_id))?;

        course.ok_or_else(|| RepositoryError::CourseNotFound(course_id.to_string()))
    }

    fn update_course(
        &self,
        ctx: &Context,
        course_id: &str,
        update: UpdateFunction<'_>,
    ) -> Result<(), RepositoryError> {
        let stored_id: String = self.write(ctx, "update course", |conn| {
            let loaded: Course = queries::load_course(conn, course_id)?
                .ok_or_else(|| PersistenceError::CourseNotFound(course_id.to_string()))?;

            let updated: Course = update(ctx, loaded).map_err(PersistenceError::Rejected)?;

            // A course returned under a new id is a new course, not a replacement.
            if updated.id() == course_id {
                mutations::save_course(conn, &updated)?;
            } else {
                mutations::insert_course(conn, &updated)?;
            }
            Ok(updated.id().to_string())
        })?;

        if stored_id == course_id {
            info!(course_id = %course_id, "Persisted course update");
        } else {
            info!(course_id = %stored_id, origin_course_id = %course_id, "Persisted derived course");
        }
        debug!(course_id = %stored_id, "Update transaction committed");
        Ok(())
    }
}
