// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use coursework_domain::{Academic, AcademicType, Course, NewCourseParams, Period, Semester};

use crate::{
    AcademicsError, AcademicsService, Context, CoursesRepository, Handlers, RepositoryError,
    UpdateFunction,
};

/// Map-backed repository that counts writes.
#[derive(Default)]
pub struct FakeCoursesRepository {
    courses: Mutex<BTreeMap<String, Course>>,
    writes: AtomicUsize,
}

impl FakeCoursesRepository {
    pub fn with_course(course: Course) -> Self {
        let repository: Self = Self::default();
        repository
            .courses
            .lock()
            .unwrap()
            .insert(course.id().to_string(), course);
        repository
    }

    pub fn stored(&self, course_id: &str) -> Option<Course> {
        self.courses.lock().unwrap().get(course_id).cloned()
    }

    pub fn len(&self) -> usize {
        self.courses.lock().unwrap().len()
    }

    pub fn writes(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }
}

impl CoursesRepository for FakeCoursesRepository {
    fn add_course(&self, ctx: &Context, course: &Course) -> Result<(), RepositoryError> {
        ctx.check("add course")?;
        let mut courses = self.courses.lock().unwrap();
        if courses.contains_key(course.id()) {
            return Err(RepositoryError::CourseAlreadyExists(course.id().to_string()));
        }
        courses.insert(course.id().to_string(), course.clone());
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    fn get_course(&self, ctx: &Context, course_id: &str) -> Result<Course, RepositoryError> {
        ctx.check("get course")?;
        self.stored(course_id)
            .ok_or_else(|| RepositoryError::CourseNotFound(course_id.to_string()))
    }

    fn update_course(
        &self,
        ctx: &Context,
        course_id: &str,
        update: UpdateFunction<'_>,
    ) -> Result<(), RepositoryError> {
        ctx.check("update course")?;
        let mut courses = self.courses.lock().unwrap();
        let loaded: Course = courses
            .get(course_id)
            .cloned()
            .ok_or_else(|| RepositoryError::CourseNotFound(course_id.to_string()))?;
        let updated: Course = update(ctx, loaded)?;
        courses.insert(updated.id().to_string(), updated);
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

/// Roster of known academics. `unavailable` makes every check fail.
#[derive(Default)]
pub struct FakeAcademics {
    pub teachers: BTreeSet<String>,
    pub students: BTreeSet<String>,
    pub groups: BTreeSet<String>,
    pub unavailable: bool,
}

impl FakeAcademics {
    pub fn check(
        &self,
        known: &BTreeSet<String>,
        id: &str,
        not_found: fn(String) -> AcademicsError,
    ) -> Result<(), AcademicsError> {
        if self.unavailable {
            return Err(AcademicsError::Unavailable(String::from("roster offline")));
        }
        if known.contains(id) {
            Ok(())
        } else {
            Err(not_found(id.to_string()))
        }
    }
}

impl AcademicsService for FakeAcademics {
    fn teacher_exists(&self, _ctx: &Context, teacher_id: &str) -> Result<(), AcademicsError> {
        self.check(&self.teachers, teacher_id, AcademicsError::TeacherNotFound)
    }

    fn student_exists(&self, _ctx: &Context, student_id: &str) -> Result<(), AcademicsError> {
        self.check(&self.students, student_id, AcademicsError::StudentNotFound)
    }

    fn group_exists(&self, _ctx: &Context, group_id: &str) -> Result<(), AcademicsError> {
        self.check(&self.groups, group_id, AcademicsError::GroupNotFound)
    }
}

pub fn teacher(id: &str) -> Academic {
    Academic::new(id, AcademicType::Teacher).unwrap()
}

pub fn student(id: &str) -> Academic {
    Academic::new(id, AcademicType::Student).unwrap()
}

pub fn create_test_period() -> Period {
    Period::new(2023, 2024, Semester::First).unwrap()
}

/// Teachers `t1`..`t3`, students `s1`..`s3`, group `g1`.
pub fn create_test_academics() -> FakeAcademics {
    FakeAcademics {
        teachers: ["t1", "t2", "t3"].into_iter().map(String::from).collect(),
        students: ["s1", "s2", "s3"].into_iter().map(String::from).collect(),
        groups: std::iter::once(String::from("g1")).collect(),
        unavailable: false,
    }
}

/// Course `c1` created by `t1` with collaborator `t2` and student `s1`.
pub fn create_test_course() -> Course {
    Course::new(NewCourseParams {
        id: String::from("c1"),
        creator: teacher("t1"),
        title: String::from("Algorithms"),
        period: create_test_period(),
        started: false,
        collaborators: vec![String::from("t2")],
        students: vec![String::from("s1")],
    })
    .unwrap()
}

/// Handlers over a repository holding [`create_test_course`].
pub fn create_test_handlers() -> (Handlers, Arc<FakeCoursesRepository>) {
    let repository: Arc<FakeCoursesRepository> =
        Arc::new(FakeCoursesRepository::with_course(create_test_course()));
    let handlers: Handlers = Handlers::new(
        Arc::clone(&repository) as Arc<dyn CoursesRepository>,
        Arc::new(create_test_academics()),
    );
    (handlers, repository)
}
