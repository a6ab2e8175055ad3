// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! In-process course storage.

use std::collections::BTreeMap;

use coursework::{Context, CoursesRepository, RepositoryError, UpdateFunction};
use coursework_domain::Course;
use parking_lot::{Mutex, MutexGuard};
use tracing::debug;

/// Stores courses in a map guarded by a single mutex.
///
/// The lock is held across load, update and store, so updates of any
/// course are serialized. Courses are cloned in and out; callers never
/// share state with the map.
#[derive(Debug, Default)]
pub struct InMemoryCoursesRepository {
    courses: Mutex<BTreeMap<String, Course>>,
}

impl InMemoryCoursesRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored courses.
    #[must_use]
    pub fn len(&self) -> usize {
        self.courses.lock().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.courses.lock().is_empty()
    }

    fn courses(
        &self,
        ctx: &Context,
        operation: &'static str,
    ) -> Result<MutexGuard<'_, BTreeMap<String, Course>>, RepositoryError> {
        ctx.check(operation)?;
        match ctx.remaining() {
            None => Ok(self.courses.lock()),
            Some(left) => self
                .courses
                .try_lock_for(left)
                .ok_or(RepositoryError::DeadlineExceeded { operation }),
        }
    }
}

impl CoursesRepository for InMemoryCoursesRepository {
    fn add_course(&self, ctx: &Context, course: &Course) -> Result<(), RepositoryError> {
        let mut courses: MutexGuard<'_, BTreeMap<String, Course>> = self.courses(ctx, "add course")?;

        if courses.contains_key(course.id()) {
            return Err(RepositoryError::CourseAlreadyExists(course.id().to_string()));
        }
        courses.insert(course.id().to_string(), course.clone());

        debug!(course_id = %course.id(), "Stored course in memory");
        Ok(())
    }

    fn get_course(&self, ctx: &Context, course_id: &str) -> Result<Course, RepositoryError> {
        let courses: MutexGuard<'_, BTreeMap<String, Course>> = self.courses(ctx, "get course")?;

        courses
            .get(course_id)
            .cloned()
            .ok_or_else(|| RepositoryError::CourseNotFound(course_id.to_string()))
    }

    fn update_course(
        &self,
        ctx: &Context,
        course_id: &str,
        update: UpdateFunction<'_>,
    ) -> Result<(), RepositoryError> {
        let mut courses: MutexGuard<'_, BTreeMap<String, Course>> =
            self.courses(ctx, "update course")?;

        let loaded: Course = courses
            .get(course_id)
            .cloned()
            .ok_or_else(|| RepositoryError::CourseNotFound(course_id.to_string()))?;

        let updated: Course = update(ctx, loaded)?;
        ctx.check("update course")?;

        if updated.id() != course_id && courses.contains_key(updated.id()) {
            return Err(RepositoryError::CourseAlreadyExists(updated.id().to_string()));
        }

        debug!(course_id = %updated.id(), origin_course_id = %course_id, "Stored course update in memory");
        courses.insert(updated.id().to_string(), updated);
        Ok(())
    }
}
