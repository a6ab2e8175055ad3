// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Subcommands and their dispatch onto the command handlers.

use std::error::Error;
use std::sync::Arc;

use clap::Subcommand;
use coursework::{
    AcademicsService, AddCollaborator, AddStudent, AddTask, Context, CoursesRepository,
    CreateCourse, ExtendCourse, Handlers, RemoveCollaborator, RemoveStudent,
};
use coursework_domain::{Academic, Course, Deadline, Period, Semester, TestData, TestPoint};
use serde_json::{Value, json};
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Create a course owned by the acting teacher
    CreateCourse {
        #[arg(long)]
        title: String,
        /// Academic period, e.g. `2024-2025:First`
        #[arg(long, value_parser = parse_period)]
        period: Period,
        #[arg(long)]
        started: bool,
        #[arg(long = "collaborator")]
        collaborators: Vec<String>,
        #[arg(long = "student")]
        students: Vec<String>,
    },
    /// Derive a course for a new term from an existing one
    ExtendCourse {
        #[arg(long)]
        origin: String,
        /// Defaults to the origin's title
        #[arg(long)]
        title: Option<String>,
        /// Defaults to the period after the origin's
        #[arg(long, value_parser = parse_period)]
        period: Option<Period>,
        #[arg(long)]
        started: bool,
        #[arg(long = "collaborator")]
        collaborators: Vec<String>,
        #[arg(long = "student")]
        students: Vec<String>,
    },
    AddCollaborator {
        #[arg(long)]
        course: String,
        #[arg(long)]
        collaborator: String,
    },
    RemoveCollaborator {
        #[arg(long)]
        course: String,
        #[arg(long)]
        collaborator: String,
    },
    AddStudent {
        #[arg(long)]
        course: String,
        #[arg(long)]
        student: String,
    },
    RemoveStudent {
        #[arg(long)]
        course: String,
        #[arg(long)]
        student: String,
    },
    /// Add a task; payload options not legal for the task type are ignored
    AddTask {
        #[arg(long)]
        course: String,
        /// `ManualChecking`, `AutoCodeChecking` or `Testing`
        #[arg(long = "type")]
        task_type: String,
        #[arg(long)]
        title: String,
        #[arg(long, default_value = "")]
        description: String,
        /// RFC 3339 time of the excellent-grade deadline
        #[arg(long, value_parser = parse_timestamp, requires = "deadline_good")]
        deadline_excellent: Option<OffsetDateTime>,
        /// RFC 3339 time of the good-grade deadline
        #[arg(long, value_parser = parse_timestamp, requires = "deadline_excellent")]
        deadline_good: Option<OffsetDateTime>,
        /// JSON array of `{"input_data", "output_data"}` objects
        #[arg(long)]
        test_data: Option<String>,
        /// JSON array of `{"description", "variants", "correct_variant_numbers"}` objects
        #[arg(long)]
        test_points: Option<String>,
    },
    /// Print a course the acting academic may see
    Show {
        #[arg(long)]
        course: String,
    },
}

/// Parses `START-END:SEMESTER`, e.g. `2024-2025:Second`.
///
/// # Errors
///
/// Returns a message if the text is malformed or the period is invalid.
pub fn parse_period(value: &str) -> Result<Period, String> {
    let (years, semester) = value
        .split_once(':')
        .ok_or_else(|| format!("expected START-END:SEMESTER, got '{value}'"))?;
    let (start, end) = years
        .split_once('-')
        .ok_or_else(|| format!("expected START-END years, got '{years}'"))?;

    let start_year: u16 = start
        .trim()
        .parse()
        .map_err(|_| format!("invalid start year '{start}'"))?;
    let end_year: u16 = end
        .trim()
        .parse()
        .map_err(|_| format!("invalid end year '{end}'"))?;
    let semester: Semester = semester.trim().parse().map_err(|err| format!("{err}"))?;

    Period::new(start_year, end_year, semester).map_err(|err| err.to_string())
}

/// Parses an RFC 3339 timestamp.
///
/// # Errors
///
/// Returns a message if the text is not RFC 3339.
pub fn parse_timestamp(value: &str) -> Result<OffsetDateTime, String> {
    OffsetDateTime::parse(value, &Rfc3339).map_err(|err| format!("invalid timestamp '{value}': {err}"))
}

/// The wired application: handlers plus read access to the repository.
pub struct App {
    handlers: Handlers,
    courses: Arc<dyn CoursesRepository>,
}

impl App {
    pub fn new(courses: Arc<dyn CoursesRepository>, academics: Arc<dyn AcademicsService>) -> Self {
        Self {
            handlers: Handlers::new(Arc::clone(&courses), academics),
            courses,
        }
    }

    /// Runs one subcommand on behalf of `actor`.
    ///
    /// # Returns
    ///
    /// A JSON document describing the outcome.
    ///
    /// # Errors
    ///
    /// Returns an error if the payload options cannot be parsed or the
    /// command is rejected.
    pub fn execute(
        &self,
        ctx: &Context,
        actor: Academic,
        command: Command,
    ) -> Result<Value, Box<dyn Error>> {
        match command {
            Command::CreateCourse {
                title,
                period,
                started,
                collaborators,
                students,
            } => {
                let course_id: String = self.handlers.create_course.handle(
                    ctx,
                    CreateCourse {
                        academic: actor,
                        title,
                        period,
                        started,
                        collaborators,
                        students,
                    },
                )?;
                Ok(json!({ "course_id": course_id }))
            }
            Command::ExtendCourse {
                origin,
                title,
                period,
                started,
                collaborators,
                students,
            } => {
                let course_id: String = self.handlers.extend_course.handle(
                    ctx,
                    ExtendCourse {
                        academic: actor,
                        origin_course_id: origin.clone(),
                        title,
                        period,
                        started,
                        collaborators,
                        students,
                    },
                )?;
                Ok(json!({ "course_id": course_id, "origin_course_id": origin }))
            }
            Command::AddCollaborator {
                course,
                collaborator,
            } => {
                self.handlers.add_collaborator.handle(
                    ctx,
                    AddCollaborator {
                        academic: actor,
                        course_id: course.clone(),
                        collaborator_id: collaborator,
                    },
                )?;
                Ok(json!({ "course_id": course }))
            }
            Command::RemoveCollaborator {
                course,
                collaborator,
            } => {
                self.handlers.remove_collaborator.handle(
                    ctx,
                    RemoveCollaborator {
                        academic: actor,
                        course_id: course.clone(),
                        collaborator_id: collaborator,
                    },
                )?;
                Ok(json!({ "course_id": course }))
            }
            Command::AddStudent { course, student } => {
                self.handlers.add_student.handle(
                    ctx,
                    AddStudent {
                        academic: actor,
                        course_id: course.clone(),
                        student_id: student,
                    },
                )?;
                Ok(json!({ "course_id": course }))
            }
            Command::RemoveStudent { course, student } => {
                self.handlers.remove_student.handle(
                    ctx,
                    RemoveStudent {
                        academic: actor,
                        course_id: course.clone(),
                        student_id: student,
                    },
                )?;
                Ok(json!({ "course_id": course }))
            }
            Command::AddTask {
                course,
                task_type,
                title,
                description,
                deadline_excellent,
                deadline_good,
                test_data,
                test_points,
            } => {
                let deadline: Option<Deadline> = match (deadline_excellent, deadline_good) {
                    (Some(excellent), Some(good)) => Some(Deadline::new(excellent, good)?),
                    _ => None,
                };
                let test_data: Vec<TestData> = parse_json_list(test_data.as_deref())?;
                let test_points: Vec<TestPoint> = parse_json_list(test_points.as_deref())?;
                // Deserialized values skip their constructors' checks.
                test_data.iter().try_for_each(TestData::validate)?;
                test_points.iter().try_for_each(TestPoint::validate)?;

                let task_number: u32 = self.handlers.add_task.handle(
                    ctx,
                    AddTask {
                        academic: actor,
                        course_id: course.clone(),
                        task_type,
                        title,
                        description,
                        deadline,
                        test_data,
                        test_points,
                    },
                )?;
                Ok(json!({ "course_id": course, "task_number": task_number }))
            }
            Command::Show { course } => {
                let course: Course = self.courses.get_course(ctx, &course)?;
                course.can_academic_see(&actor)?;
                Ok(serde_json::to_value(course.snapshot())?)
            }
        }
    }
}

fn parse_json_list<T: serde::de::DeserializeOwned>(json: Option<&str>) -> Result<Vec<T>, serde_json::Error> {
    json.map_or_else(|| Ok(Vec::new()), serde_json::from_str)
}
