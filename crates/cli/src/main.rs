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
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

mod commands;
mod roster;

#[cfg(test)]
mod tests;

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use coursework::{AcademicsService, Context, CoursesRepository};
use coursework_domain::{Academic, AcademicType};
use coursework_persistence::Persistence;
use serde_json::Value;
use tracing::{error, info};

use crate::commands::{App, Command};
use crate::roster::RosterAcademics;

/// Coursework - course administration for teachers
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the `SQLite` database file
    #[arg(short, long, default_value = "coursework.db")]
    database: PathBuf,

    /// JSON roster of known teacher, student and group ids. Without one,
    /// no external id is known.
    #[arg(short, long)]
    roster: Option<PathBuf>,

    /// Give up on the command after this many milliseconds
    #[arg(long)]
    timeout_ms: Option<u64>,

    /// Id of the academic issuing the command
    #[arg(long)]
    actor_id: String,

    /// Role of the academic issuing the command
    #[arg(long, default_value = "teacher")]
    actor_type: AcademicType,

    #[command(subcommand)]
    command: Command,
}

impl Args {
    fn context(&self) -> Context {
        self.timeout_ms.map_or_else(Context::background, |millis| {
            Context::with_timeout(Duration::from_millis(millis))
        })
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    info!(database = %args.database.display(), "Opening course database");
    let persistence: Persistence = Persistence::new_with_file(&args.database)?;

    let roster: RosterAcademics = match &args.roster {
        Some(path) => RosterAcademics::from_file(path)?,
        None => RosterAcademics::default(),
    };

    let app: App = App::new(
        Arc::new(persistence) as Arc<dyn CoursesRepository>,
        Arc::new(roster) as Arc<dyn AcademicsService>,
    );

    let ctx: Context = args.context();
    let actor: Academic = Academic::new(&args.actor_id, args.actor_type)?;

    let output: Value = app.execute(&ctx, actor, args.command).inspect_err(|err| {
        error!(error = %err, "Command failed");
    })?;

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
