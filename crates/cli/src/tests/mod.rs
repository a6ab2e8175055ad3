// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::expect_used, clippy::unwrap_used)]

mod args_tests;

use std::sync::Arc;

use coursework::{AcademicsService, CoursesRepository};
use coursework_domain::{Academic, AcademicType};
use coursework_persistence::Persistence;

use crate::commands::App;
use crate::roster::RosterAcademics;

pub fn teacher(id: &str) -> Academic {
    Academic::new(id, AcademicType::Teacher).unwrap()
}

pub fn student(id: &str) -> Academic {
    Academic::new(id, AcademicType::Student).unwrap()
}

/// Teachers `t1`, `t2`, `t3`; students `s1`, `s2`; group `g1`.
pub fn create_test_roster() -> RosterAcademics {
    RosterAcademics::from_json(
        r#"{ "teachers": ["t1", "t2", "t3"], "students": ["s1", "s2"], "groups": ["g1"] }"#,
    )
    .unwrap()
}

/// An app over a fresh in-memory database and [`create_test_roster`].
pub fn create_test_app() -> App {
    let persistence: Persistence = Persistence::new_in_memory().unwrap();
    App::new(
        Arc::new(persistence) as Arc<dyn CoursesRepository>,
        Arc::new(create_test_roster()) as Arc<dyn AcademicsService>,
    )
}
