// Copyright (C) 2024-2025 Fred Clausen and the ratatui project contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! # xtask - Project Automation
//!
//! Wraps the cargo invocations CI runs (`cargo xtask ci`) and the schema
//! check for the course store.
//!
//! ### Schema Verification
//!
//! `cargo xtask verify-migrations` applies the embedded migrations to a fresh
//! in-memory `SQLite` database and checks that:
//!
//! - Exactly the course tables exist, each keyed by `course_id`
//! - Every child table references `courses (course_id)` with `ON DELETE CASCADE`
//! - The period and task type `CHECK` constraints are present
//! - The member lookup indexes exist
//! - Reverting every migration leaves no tables behind
//! - Re-applying the migrations reproduces the same schema
//!
//! No external database is involved, so the check runs anywhere `cargo test` does.

#![deny(
    clippy::pedantic,
    //clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]

use std::{fmt::Debug, io, process::Output};

use cargo_metadata::MetadataCommand;
use clap::{Parser, Subcommand};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use color_eyre::{
    eyre::{bail, eyre, Context},
    Result,
};
use diesel::sql_types::{Integer, Text};
use diesel::{Connection, QueryableByName, RunQueryDsl, SqliteConnection};
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use duct::cmd;
use std::collections::{BTreeMap, BTreeSet};
use tracing::level_filters::LevelFilter;
use tracing_log::AsTrace;

const MIGRATIONS: EmbeddedMigrations = embed_migrations!("../crates/persistence/migrations");

/// The aggregate root table; every other table hangs off it.
const COURSES_TABLE: &str = "courses";

/// Tables holding a course's members and tasks.
const CHILD_TABLES: [&str; 3] = ["course_collaborators", "course_students", "course_tasks"];

/// `(table, fragment)` pairs that must appear in the table's `CREATE` statement.
const REQUIRED_CHECKS: [(&str, &str); 3] = [
    ("courses", "period_end_year = period_start_year + 1"),
    ("courses", "semester IN ('First', 'Second')"),
    ("course_tasks", "'ManualChecking', 'AutoCodeChecking', 'Testing'"),
];

/// `(table, index)` pairs used to look courses up by member.
const REQUIRED_INDEXES: [(&str, &str); 2] = [
    ("course_collaborators", "idx_course_collaborators_collaborator"),
    ("course_students", "idx_course_students_student"),
];

fn main() -> Result<()> {
    color_eyre::install()?;
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_max_level(args.log_level())
        .without_time()
        .init();

    match args.run() {
        Ok(()) => (),
        Err(err) => {
            tracing::error!("{err}");
            std::process::exit(1);
        }
    }
    Ok(())
}

#[derive(Debug, Parser)]
#[command(bin_name = "cargo xtask", styles = clap_cargo::style::CLAP_STYLING)]
struct Args {
    #[command(subcommand)]
    command: Command,

    #[command(flatten)]
    verbosity: Verbosity<InfoLevel>,
}

impl Args {
    fn run(self) -> Result<()> {
        self.command.run()
    }

    fn log_level(&self) -> LevelFilter {
        self.verbosity.log_level_filter().as_trace()
    }
}

#[derive(Clone, Debug, Subcommand)]
enum Command {
    /// Run everything CI runs
    CI,

    /// Build the project
    #[command(visible_alias = "b")]
    Build,

    /// Check dependency licenses and advisories
    #[command(visible_alias = "cd")]
    Deny,

    /// Check unused dependencies
    #[command(visible_alias = "m")]
    Machete,

    /// Lint clippy, docs, formatting and typos
    #[command(visible_alias = "l")]
    Lint,

    /// Run clippy on the project
    #[command(visible_alias = "cl")]
    LintClippy,

    /// Check documentation for errors and warnings
    #[command(visible_alias = "d")]
    LintDocs,

    /// Check for formatting issues in the project
    #[command(visible_alias = "lf")]
    LintFormatting,

    /// Check for typos in the project
    #[command(visible_alias = "lt")]
    LintTypos,

    /// Apply clippy fixes and format the project
    #[command(visible_alias = "f")]
    Fix,

    /// Run all tests
    #[command(visible_alias = "t")]
    Test,

    /// Verify the course schema produced by the migrations
    #[command(visible_alias = "vm")]
    VerifyMigrations,
}

impl Command {
    fn run(self) -> Result<()> {
        match self {
            Self::CI => ci(),
            Self::Build => build(),
            Self::Deny => deny(),
            Self::Machete => machete(),
            Self::Lint => lint(),
            Self::LintClippy => lint_clippy(),
            Self::LintDocs => lint_docs(),
            Self::LintFormatting => lint_format(),
            Self::LintTypos => lint_typos(),
            Self::Fix => fix(),
            Self::Test => test(),
            Self::VerifyMigrations => verify_migrations(),
        }
    }
}

/// Lint, check dependencies, build, test, then verify the schema.
fn ci() -> Result<()> {
    lint()?;
    deny()?;
    machete()?;
    build()?;
    test()?;
    verify_migrations()
}

fn deny() -> Result<()> {
    run_cargo(vec!["deny", "check"])
}

fn machete() -> Result<()> {
    cmd!("cargo-machete").run_with_trace()?;
    Ok(())
}

fn build() -> Result<()> {
    run_cargo(vec!["build", "--all-targets", "--all-features"])
}

fn lint() -> Result<()> {
    lint_clippy()?;
    lint_docs()?;
    lint_format()?;
    lint_typos()
}

fn lint_clippy() -> Result<()> {
    run_cargo(vec![
        "clippy",
        "--all-targets",
        "--all-features",
        "--",
        "-D",
        "warnings",
    ])
}

/// Check that docs build without errors using docs.rs-equivalent flags
fn lint_docs() -> Result<()> {
    let meta = MetadataCommand::new()
        .exec()
        .wrap_err("failed to get cargo metadata")?;

    for package in meta.workspace_default_packages() {
        cmd(
            "cargo",
            [
                "doc",
                "--no-deps",
                "--all-features",
                "--package",
                &package.name,
            ],
        )
        .env_remove("CARGO")
        .env("RUSTUP_TOOLCHAIN", "nightly")
        .env("RUSTDOCFLAGS", "--cfg docsrs -D warnings")
        .run_with_trace()?;
    }

    Ok(())
}

fn lint_format() -> Result<()> {
    run_cargo_nightly(vec!["fmt", "--all", "--check"])
}

/// Check for typos using [typos-cli](https://github.com/crate-ci/typos/)
fn lint_typos() -> Result<()> {
    cmd!("typos").run_with_trace()?;
    Ok(())
}

fn fix() -> Result<()> {
    run_cargo(vec![
        "clippy",
        "--all-targets",
        "--all-features",
        "--fix",
        "--allow-dirty",
        "--allow-staged",
    ])?;
    run_cargo_nightly(vec!["fmt", "--all"])
}

/// Unit and integration tests first, doc tests last because they are slow.
fn test() -> Result<()> {
    run_cargo(vec!["test", "--all-targets", "--all-features"])?;
    run_cargo(vec!["test", "--doc", "--all-features"])
}

/// Run a cargo subcommand with the default toolchain
fn run_cargo(args: Vec<&str>) -> Result<()> {
    cmd("cargo", args).run_with_trace()?;
    Ok(())
}

/// Run a cargo subcommand with the nightly toolchain
fn run_cargo_nightly(args: Vec<&str>) -> Result<()> {
    cmd("cargo", args)
        // CARGO env var is set because we're running in a cargo subcommand
        .env_remove("CARGO")
        .env("RUSTUP_TOOLCHAIN", "nightly")
        .run_with_trace()?;
    Ok(())
}

/// Apply, revert and re-apply the migrations, checking the schema each time.
fn verify_migrations() -> Result<()> {
    tracing::info!("Starting schema verification");

    let mut conn = SqliteConnection::establish(":memory:")
        .wrap_err("Failed to create SQLite in-memory database")?;

    diesel::sql_query("PRAGMA foreign_keys = ON")
        .execute(&mut conn)
        .wrap_err("Failed to enable foreign keys on SQLite")?;

    conn.run_pending_migrations(MIGRATIONS)
        .map_err(|e| eyre!("Failed to apply migrations: {e}"))?;
    let applied: CourseSchema = read_schema(&mut conn)?;
    check_course_schema(&applied)?;
    tracing::info!(tables = applied.tables.len(), "Migrations applied and checked");

    conn.revert_all_migrations(MIGRATIONS)
        .map_err(|e| eyre!("Failed to revert migrations: {e}"))?;
    let reverted: CourseSchema = read_schema(&mut conn)?;
    if !reverted.tables.is_empty() {
        bail!(
            "❌ Schema verification FAILED: tables left after reverting migrations: {:?}",
            reverted.tables.keys().collect::<Vec<_>>()
        );
    }
    tracing::info!("Migrations reverted cleanly");

    conn.run_pending_migrations(MIGRATIONS)
        .map_err(|e| eyre!("Failed to re-apply migrations: {e}"))?;
    let reapplied: CourseSchema = read_schema(&mut conn)?;
    if reapplied != applied {
        bail!(
            "❌ Schema verification FAILED: re-applied schema differs\n  first: {applied:?}\n  second: {reapplied:?}"
        );
    }

    tracing::info!("✓ Schema verification passed");
    Ok(())
}

/// Check the applied schema against the course store's layout.
fn check_course_schema(schema: &CourseSchema) -> Result<()> {
    let found: BTreeSet<&str> = schema.tables.keys().map(String::as_str).collect();
    let expected: BTreeSet<&str> = CHILD_TABLES
        .into_iter()
        .chain(std::iter::once(COURSES_TABLE))
        .collect();

    if found != expected {
        let mut errors: Vec<String> = Vec::new();
        for table in expected.difference(&found) {
            errors.push(format!("  - Table '{table}' is missing"));
        }
        for table in found.difference(&expected) {
            errors.push(format!("  - Table '{table}' is unexpected"));
        }
        bail!(
            "❌ Schema verification FAILED: Table mismatch\n{}",
            errors.join("\n")
        );
    }

    for (name, table) in &schema.tables {
        if !table.primary_key.contains("course_id") {
            bail!(
                "❌ Schema verification FAILED: '{name}' is not keyed by course_id: {:?}",
                table.primary_key
            );
        }
    }

    for name in CHILD_TABLES {
        let table: &CourseTable = &schema.tables[name];

        let parent = ParentReference {
            from_column: String::from("course_id"),
            to_table: String::from(COURSES_TABLE),
            to_column: String::from("course_id"),
            on_delete: String::from("CASCADE"),
        };
        if !table.references.contains(&parent) {
            bail!(
                "❌ Schema verification FAILED: '{name}' does not cascade from courses (course_id): {:?}",
                table.references
            );
        }

        if table.nullable_columns.contains("course_id") {
            bail!("❌ Schema verification FAILED: '{name}.course_id' is nullable");
        }
    }

    for (name, fragment) in REQUIRED_CHECKS {
        if !schema.tables[name].create_sql.contains(fragment) {
            bail!("❌ Schema verification FAILED: '{name}' is missing CHECK ({fragment})");
        }
    }

    for (name, index) in REQUIRED_INDEXES {
        if !schema.tables[name].indexes.contains_key(index) {
            bail!("❌ Schema verification FAILED: '{name}' is missing index '{index}'");
        }
    }

    Ok(())
}

/// What verification needs to know about the store's tables.
#[derive(Debug, Clone, PartialEq, Eq)]
struct CourseSchema {
    tables: BTreeMap<String, CourseTable>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct CourseTable {
    create_sql: String,
    columns: BTreeMap<String, String>,
    nullable_columns: BTreeSet<String>,
    primary_key: BTreeSet<String>,
    references: BTreeSet<ParentReference>,
    indexes: BTreeMap<String, Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
struct ParentReference {
    from_column: String,
    to_table: String,
    to_column: String,
    on_delete: String,
}

#[derive(QueryableByName)]
struct TableRow {
    #[diesel(sql_type = Text)]
    name: String,
    #[diesel(sql_type = Text)]
    sql: String,
}

#[derive(QueryableByName)]
struct ColumnRow {
    #[diesel(sql_type = Text)]
    name: String,
    #[diesel(sql_type = Text)]
    r#type: String,
    #[diesel(sql_type = Integer)]
    notnull: i32,
    #[diesel(sql_type = Integer)]
    pk: i32,
}

#[derive(QueryableByName)]
struct ReferenceRow {
    #[diesel(sql_type = Text)]
    table: String,
    #[diesel(sql_type = Text)]
    from: String,
    #[diesel(sql_type = Text)]
    to: String,
    #[diesel(sql_type = Text)]
    on_delete: String,
}

#[derive(QueryableByName)]
struct IndexRow {
    #[diesel(sql_type = Text)]
    name: String,
    #[diesel(sql_type = Text)]
    origin: String,
}

#[derive(QueryableByName)]
struct IndexColumnRow {
    #[diesel(sql_type = Text)]
    name: String,
}

/// Reads every user table through `sqlite_master` and the table PRAGMAs.
fn read_schema(conn: &mut SqliteConnection) -> Result<CourseSchema> {
    let tables: Vec<TableRow> = diesel::sql_query(
        "SELECT name, sql FROM sqlite_master WHERE type = 'table' AND name NOT LIKE 'sqlite_%' AND name != '__diesel_schema_migrations' ORDER BY name",
    )
    .load(conn)
    .wrap_err("Failed to query SQLite tables")?;

    let mut schema = CourseSchema {
        tables: BTreeMap::new(),
    };

    for table in tables {
        let mut course_table = CourseTable {
            create_sql: table.sql,
            columns: BTreeMap::new(),
            nullable_columns: BTreeSet::new(),
            primary_key: BTreeSet::new(),
            references: BTreeSet::new(),
            indexes: BTreeMap::new(),
        };

        let columns: Vec<ColumnRow> =
            diesel::sql_query(format!("PRAGMA table_info({})", table.name))
                .load(conn)
                .wrap_err(format!("Failed to get columns for table {}", table.name))?;
        for column in columns {
            if column.notnull == 0 {
                course_table.nullable_columns.insert(column.name.clone());
            }
            if column.pk > 0 {
                course_table.primary_key.insert(column.name.clone());
            }
            course_table.columns.insert(column.name, column.r#type);
        }

        let references: Vec<ReferenceRow> =
            diesel::sql_query(format!("PRAGMA foreign_key_list({})", table.name))
                .load(conn)
                .wrap_err(format!(
                    "Failed to get foreign keys for table {}",
                    table.name
                ))?;
        course_table
            .references
            .extend(references.into_iter().map(|r| ParentReference {
                from_column: r.from,
                to_table: r.table,
                to_column: r.to,
                on_delete: r.on_delete,
            }));

        let indexes: Vec<IndexRow> =
            diesel::sql_query(format!("PRAGMA index_list({})", table.name))
                .load(conn)
                .wrap_err(format!("Failed to get indexes for table {}", table.name))?;
        // Primary key autoindexes are already covered by `primary_key`.
        for index in indexes.into_iter().filter(|i| i.origin != "pk") {
            let index_columns: Vec<IndexColumnRow> =
                diesel::sql_query(format!("PRAGMA index_info({})", index.name))
                    .load(conn)
                    .wrap_err(format!("Failed to get index columns for {}", index.name))?;
            course_table.indexes.insert(
                index.name,
                index_columns.into_iter().map(|c| c.name).collect(),
            );
        }

        schema.tables.insert(table.name, course_table);
    }

    Ok(schema)
}

/// An extension trait for `duct::Expression` that logs the command being run
/// before running it.
trait ExpressionExt {
    /// Run the command and log the command being run
    fn run_with_trace(&self) -> io::Result<Output>;
}

impl ExpressionExt for duct::Expression {
    fn run_with_trace(&self) -> io::Result<Output> {
        tracing::info!("running command: {:?}", self);
        self.run().inspect_err(|_| {
            // The command that was run may have scrolled off the screen, so repeat it here
            tracing::error!("failed to run command: {:?}", self);
        })
    }
}
