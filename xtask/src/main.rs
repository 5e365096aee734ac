// Copyright (C) 2024-2026 Fred Clausen and the ratatui project contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! # xtask - Project Automation
//!
//! Wraps the cargo invocations used locally and in CI, plus two database
//! helpers:
//!
//! - `cargo xtask migrate --database <path>` applies pending migrations to a
//!   `SQLite` file ahead of a server start
//! - `cargo xtask verify-migrations` applies, reverts and reapplies every
//!   migration against an in-memory database and checks the resulting tables

#![deny(
    clippy::pedantic,
    //clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]

use std::{
    collections::BTreeSet,
    io,
    path::{Path, PathBuf},
    process::Output,
};

use clap::{Parser, Subcommand};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use color_eyre::{
    Result,
    eyre::{Context, eyre},
};
use diesel::sql_types::Text;
use diesel::{Connection, QueryableByName, RunQueryDsl, SqliteConnection};
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use duct::cmd;
use tracing::level_filters::LevelFilter;
use tracing_log::AsTrace;

const MIGRATIONS: EmbeddedMigrations = embed_migrations!("../crates/persistence/migrations");

/// Tables the persistence layer expects after all migrations have run.
const EXPECTED_TABLES: [&str; 4] = ["choices", "employees", "settings", "week_availability"];

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
    /// Run CI checks (lint, build, test, migrations)
    CI,

    /// Build the project
    #[command(visible_alias = "b")]
    Build,

    /// Run cargo check
    #[command(visible_alias = "c")]
    Check,

    /// Lint formatting and clippy
    #[command(visible_alias = "l")]
    Lint,

    /// Run clippy on the project
    #[command(visible_alias = "cl")]
    LintClippy,

    /// Check for formatting issues in the project
    #[command(visible_alias = "lf")]
    LintFormatting,

    /// Fix clippy warnings in the project
    #[command(visible_alias = "fc")]
    FixClippy,

    /// Fix formatting issues in the project
    #[command(visible_alias = "fmt")]
    FixFormatting,

    /// Run tests
    #[command(visible_alias = "t")]
    Test,

    /// Apply pending migrations to a `SQLite` database file
    #[command(visible_alias = "m")]
    Migrate {
        /// Path to the database file (created if missing)
        #[arg(long)]
        database: PathBuf,
    },

    /// Apply, revert and reapply every migration against a scratch database
    #[command(visible_alias = "vm")]
    VerifyMigrations,
}

impl Command {
    fn run(self) -> Result<()> {
        match self {
            Self::CI => ci(),
            Self::Build => build(),
            Self::Check => check(),
            Self::Lint => lint(),
            Self::LintClippy => lint_clippy(),
            Self::LintFormatting => lint_format(),
            Self::FixClippy => fix_clippy(),
            Self::FixFormatting => fix_format(),
            Self::Test => test(),
            Self::Migrate { database } => migrate(&database),
            Self::VerifyMigrations => verify_migrations(),
        }
    }
}

/// Run CI checks (lint, build, test, migrations)
fn ci() -> Result<()> {
    lint()?;
    build()?;
    test()?;
    verify_migrations()?;
    Ok(())
}

/// Build the project
fn build() -> Result<()> {
    run_cargo(vec!["build", "--all-targets", "--all-features"])
}

/// Run cargo check
fn check() -> Result<()> {
    run_cargo(vec!["check", "--all-targets", "--all-features"])
}

/// Lint formatting and clippy
fn lint() -> Result<()> {
    lint_clippy()?;
    lint_format()?;
    Ok(())
}

/// Run clippy on the project
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

/// Fix clippy warnings in the project
fn fix_clippy() -> Result<()> {
    run_cargo(vec![
        "clippy",
        "--all-targets",
        "--all-features",
        "--fix",
        "--allow-dirty",
        "--allow-staged",
        "--",
        "-D",
        "warnings",
    ])
}

/// Lint formatting issues in the project
fn lint_format() -> Result<()> {
    run_cargo(vec!["fmt", "--all", "--check"])
}

/// Fix formatting issues in the project
fn fix_format() -> Result<()> {
    run_cargo(vec!["fmt", "--all"])
}

/// Run all workspace tests
fn test() -> Result<()> {
    run_cargo(vec!["test", "--workspace", "--all-targets", "--all-features"])
}

/// Apply pending migrations to the database at `path`.
fn migrate(path: &Path) -> Result<()> {
    let url: &str = path
        .to_str()
        .ok_or_else(|| eyre!("database path is not valid UTF-8: {}", path.display()))?;

    let mut conn = SqliteConnection::establish(url)
        .wrap_err_with(|| format!("failed to open database at {url}"))?;

    let applied = conn
        .run_pending_migrations(MIGRATIONS)
        .map_err(|e| eyre!("failed to apply migrations: {e}"))?;

    if applied.is_empty() {
        tracing::info!("{url} is already up to date");
    } else {
        for version in &applied {
            tracing::info!("applied migration {version}");
        }
    }
    Ok(())
}

/// Apply, revert and reapply every migration, then check the table set.
fn verify_migrations() -> Result<()> {
    let mut conn = SqliteConnection::establish(":memory:")
        .wrap_err("failed to open in-memory database")?;

    tracing::info!("Applying migrations");
    conn.run_pending_migrations(MIGRATIONS)
        .map_err(|e| eyre!("failed to apply migrations: {e}"))?;
    check_tables(&mut conn, &EXPECTED_TABLES)?;

    tracing::info!("Reverting migrations");
    conn.revert_all_migrations(MIGRATIONS)
        .map_err(|e| eyre!("failed to revert migrations: {e}"))?;
    check_tables(&mut conn, &[])?;

    tracing::info!("Reapplying migrations");
    conn.run_pending_migrations(MIGRATIONS)
        .map_err(|e| eyre!("failed to reapply migrations: {e}"))?;
    check_tables(&mut conn, &EXPECTED_TABLES)?;

    tracing::info!("Migrations verified");
    Ok(())
}

/// Compare the user tables present in `conn` against `expected`.
fn check_tables(conn: &mut SqliteConnection, expected: &[&str]) -> Result<()> {
    #[derive(QueryableByName)]
    struct TableName {
        #[diesel(sql_type = Text)]
        name: String,
    }

    let found: BTreeSet<String> = diesel::sql_query(
        "SELECT name FROM sqlite_master WHERE type = 'table' \
         AND name NOT LIKE 'sqlite_%' AND name != '__diesel_schema_migrations'",
    )
    .load::<TableName>(conn)
    .wrap_err("failed to list tables")?
    .into_iter()
    .map(|t| t.name)
    .collect();

    let wanted: BTreeSet<String> = expected.iter().map(|s| (*s).to_string()).collect();

    if found != wanted {
        let missing: Vec<&String> = wanted.difference(&found).collect();
        let extra: Vec<&String> = found.difference(&wanted).collect();
        return Err(eyre!("table mismatch: missing {missing:?}, unexpected {extra:?}"));
    }
    Ok(())
}

/// Run a cargo subcommand with the default toolchain
fn run_cargo(args: Vec<&str>) -> Result<()> {
    cmd("cargo", args).run_with_trace()?;
    Ok(())
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
