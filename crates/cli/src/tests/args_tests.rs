// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use clap::Parser;
use coursework_domain::{AcademicType, Period, Semester};

use crate::Args;
use crate::commands::{Command, parse_period, parse_timestamp};

#[test]
fn test_parse_period() {
    assert_eq!(
        parse_period("2024-2025:Second").unwrap(),
        Period::new(2024, 2025, Semester::Second).unwrap()
    );
    assert_eq!(
        parse_period("2024-2025:first").unwrap(),
        Period::new(2024, 2025, Semester::First).unwrap()
    );
}

#[test]
fn test_parse_period_rejects_malformed_input() {
    assert!(parse_period("2024-2025").is_err());
    assert!(parse_period("2024:First").is_err());
    assert!(parse_period("abcd-2025:First").is_err());
    assert!(parse_period("2024-2025:Third").is_err());
    assert!(parse_period("2024-2026:First").is_err());
}

#[test]
fn test_parse_timestamp() {
    assert_eq!(
        parse_timestamp("2024-03-01T12:00:00Z").unwrap().unix_timestamp(),
        1_709_294_400
    );
    assert!(parse_timestamp("yesterday").is_err());
}

#[test]
fn test_args_defaults() {
    let args: Args = Args::try_parse_from([
        "coursework",
        "--actor-id",
        "t1",
        "show",
        "--course",
        "c1",
    ])
    .unwrap();

    assert_eq!(args.database, std::path::PathBuf::from("coursework.db"));
    assert_eq!(args.actor_type, AcademicType::Teacher);
    assert!(args.roster.is_none());
    assert_eq!(args.context().deadline(), None);
    assert_eq!(
        args.command,
        Command::Show {
            course: String::from("c1")
        }
    );
}

#[test]
fn test_args_timeout_sets_deadline() {
    let args: Args = Args::try_parse_from([
        "coursework",
        "--actor-id",
        "s1",
        "--actor-type",
        "student",
        "--timeout-ms",
        "5000",
        "show",
        "--course",
        "c1",
    ])
    .unwrap();

    assert_eq!(args.actor_type, AcademicType::Student);
    assert!(args.context().deadline().is_some());
}

#[test]
fn test_args_repeated_members() {
    let args: Args = Args::try_parse_from([
        "coursework",
        "--actor-id",
        "t1",
        "create-course",
        "--title",
        "Algorithms",
        "--period",
        "2023-2024:First",
        "--collaborator",
        "t2",
        "--collaborator",
        "t3",
        "--student",
        "s1",
    ])
    .unwrap();

    match args.command {
        Command::CreateCourse {
            collaborators,
            students,
            started,
            ..
        } => {
            assert_eq!(collaborators, vec![String::from("t2"), String::from("t3")]);
            assert_eq!(students, vec![String::from("s1")]);
            assert!(!started);
        }
        other => panic!("unexpected command {other:?}"),
    }
}

#[test]
fn test_args_deadline_needs_both_times() {
    let result: Result<Args, clap::Error> = Args::try_parse_from([
        "coursework",
        "--actor-id",
        "t1",
        "add-task",
        "--course",
        "c1",
        "--type",
        "ManualChecking",
        "--title",
        "Essay",
        "--deadline-excellent",
        "2024-03-01T12:00:00Z",
    ]);

    assert!(result.is_err());
}
