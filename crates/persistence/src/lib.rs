// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Persistence layer for the Summer Weeks system.
//!
//! This crate stores employees, configuration, week availability and the
//! choice ledger in `SQLite` through Diesel, and commits engine transitions
//! atomically.
//!
//! ## Write Serialization
//!
//! Every command runs as load state, apply, write inside one
//! `BEGIN IMMEDIATE` transaction. `SQLite` admits a single writer, so two
//! submissions can never both pass the capacity check against the same
//! occupancy. Lock contention is retried within a bounded budget and then
//! reported as `PersistenceError::Busy`.
//!
//! ## Backends
//!
//! - In-memory databases (unique per call) for unit tests
//! - File databases in WAL mode for the server and multi-connection tests
//!
//! ## Migrations
//!
//! `migrations/` is embedded and applied whenever a connection is opened.

#![deny(
    clippy::pedantic,
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

use diesel::SqliteConnection;
use diesel::connection::Connection;
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};
use summer_weeks::{Command, CommitResult, State, StateChange, TransitionResult, apply};
use summer_weeks_domain::{
    ChoiceEntry, ChoiceSubmission, Configuration, DomainError, Employee, EmployeeName,
    WeekAvailability,
};
use time::OffsetDateTime;
use tracing::{debug, info};

/// Atomic counter for generating unique in-memory database names.
///
/// Each call to `new_in_memory()` receives a unique sequential ID.
static DB_COUNTER: AtomicU64 = AtomicU64::new(0);

mod backend;
mod data_models;
mod diesel_schema;
mod error;
mod mutations;
mod queries;
mod retry;

#[cfg(test)]
mod tests;

pub use error::PersistenceError;
pub use retry::RetryPolicy;

/// Rows written by `Persistence::seed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedSummary {
    /// Whether the settings row was created.
    pub settings_created: bool,
    /// Number of week availability rows created.
    pub weeks_created: usize,
}

/// Persistence adapter for the Summer Weeks store.
pub struct Persistence {
    conn: SqliteConnection,
    retry_policy: RetryPolicy,
}

impl Persistence {
    /// Creates a new persistence adapter with an in-memory `SQLite` database.
    ///
    /// Each call receives a unique shared in-memory database, so tests are
    /// isolated from each other.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be initialized.
    pub fn new_in_memory() -> Result<Self, PersistenceError> {
        let db_id: u64 = DB_COUNTER.fetch_add(1, Ordering::SeqCst);
        let db_name: String = format!("memdb_test_{db_id}");
        let shared_memory_url: String = format!("file:{db_name}?mode=memory&cache=shared");

        let retry_policy: RetryPolicy = RetryPolicy::default();
        let mut conn: SqliteConnection =
            backend::sqlite::initialize_database(&shared_memory_url, retry_policy.busy_timeout)?;

        backend::sqlite::verify_foreign_key_enforcement(&mut conn)?;

        Ok(Self { conn, retry_policy })
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
            PersistenceError::InitializationError("Invalid database path".to_string())
        })?;

        let retry_policy: RetryPolicy = RetryPolicy::default();
        let mut conn: SqliteConnection =
            backend::sqlite::initialize_database(path_str, retry_policy.busy_timeout)?;

        backend::sqlite::enable_wal_mode(&mut conn)?;
        backend::sqlite::verify_foreign_key_enforcement(&mut conn)?;

        Ok(Self { conn, retry_policy })
    }

    /// Replaces the retry policy and applies its busy timeout.
    ///
    /// # Errors
    ///
    /// Returns an error if the busy timeout cannot be set.
    pub fn set_retry_policy(&mut self, policy: RetryPolicy) -> Result<(), PersistenceError> {
        backend::sqlite::set_busy_timeout(&mut self.conn, policy.busy_timeout)?;
        self.retry_policy = policy;
        Ok(())
    }

    /// Returns the retry policy in effect.
    #[must_use]
    pub const fn retry_policy(&self) -> RetryPolicy {
        self.retry_policy
    }

    /// Verifies that foreign key enforcement is enabled.
    ///
    /// # Errors
    ///
    /// Returns an error if foreign key enforcement is not enabled.
    pub fn verify_foreign_key_enforcement(&mut self) -> Result<(), PersistenceError> {
        backend::sqlite::verify_foreign_key_enforcement(&mut self.conn)
    }

    /// Runs `op` in a `BEGIN IMMEDIATE` transaction, retrying on contention.
    fn write<T, F>(&mut self, mut op: F) -> Result<T, PersistenceError>
    where
        F: FnMut(&mut SqliteConnection) -> Result<T, PersistenceError>,
    {
        let policy: RetryPolicy = self.retry_policy;
        let conn: &mut SqliteConnection = &mut self.conn;
        retry::with_busy_retry(&policy, || conn.immediate_transaction(|tx| op(tx)))
    }

    /// Runs `op` in a read transaction so it sees one committed snapshot.
    fn read<T, F>(&mut self, mut op: F) -> Result<T, PersistenceError>
    where
        F: FnMut(&mut SqliteConnection) -> Result<T, PersistenceError>,
    {
        let policy: RetryPolicy = self.retry_policy;
        let conn: &mut SqliteConnection = &mut self.conn;
        retry::with_busy_retry(&policy, || conn.transaction(|tx| op(tx)))
    }

    // ========================================================================
    // Seeding
    // ========================================================================

    /// Seeds the settings row and the availability rows of a year.
    ///
    /// Idempotent: existing rows are left untouched, so restarting the
    /// server with different defaults never overwrites administrator edits.
    ///
    /// # Errors
    ///
    /// Returns an error if an insert fails.
    pub fn seed(
        &mut self,
        year: u16,
        defaults: &Configuration,
    ) -> Result<SeedSummary, PersistenceError> {
        let now: OffsetDateTime = OffsetDateTime::now_utc();
        let summary: SeedSummary = self.write(|conn| {
            Ok(SeedSummary {
                settings_created: mutations::seed_settings(conn, defaults, now)?,
                weeks_created: mutations::seed_week_availability(conn, year)?,
            })
        })?;

        info!(
            year,
            settings_created = summary.settings_created,
            weeks_created = summary.weeks_created,
            "Seeding complete"
        );
        Ok(summary)
    }

    // ========================================================================
    // Commands
    // ========================================================================

    /// Applies a command atomically.
    ///
    /// The state snapshot is loaded, the engine decides, and the resulting
    /// change is written, all inside one immediate transaction. A rejected
    /// command writes nothing.
    ///
    /// # Arguments
    ///
    /// * `year` - The configured calendar year
    /// * `command` - The command to apply
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The engine rejects the command (`PersistenceError::Rejected`)
    /// - The write lock cannot be obtained (`PersistenceError::Busy`)
    /// - A database operation fails
    pub fn execute(
        &mut self,
        year: u16,
        command: Command,
    ) -> Result<TransitionResult, PersistenceError> {
        let name: &'static str = command.name();
        debug!(command = name, year, "Executing command");

        let result: TransitionResult = self.write(|conn| {
            let now: OffsetDateTime = OffsetDateTime::now_utc();
            let state: State = queries::load_state(conn, year)?;
            let transition: TransitionResult = apply(&state, command.clone(), now)?;
            mutations::persist_change(conn, &transition.change, now)?;
            Ok(transition)
        })?;

        debug!(command = name, "Command committed");
        Ok(result)
    }

    /// Validates and commits an employee's week choices.
    ///
    /// # Errors
    ///
    /// Returns the same errors as [`Persistence::execute`].
    pub fn submit_choice(
        &mut self,
        year: u16,
        employee_id: i64,
        submission: ChoiceSubmission,
    ) -> Result<CommitResult, PersistenceError> {
        let transition: TransitionResult = self.execute(
            year,
            Command::SubmitChoice {
                employee_id,
                submission,
            },
        )?;

        match transition.change {
            StateChange::ChoiceCommitted(result) => Ok(result),
            other => Err(PersistenceError::Other(format!(
                "Submission produced an unexpected change: {other:?}"
            ))),
        }
    }

    // ========================================================================
    // Employees
    // ========================================================================

    /// Finds an employee by name, creating them on first identification.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The matching employee has been deactivated
    ///   (`PersistenceError::Rejected` with `DomainError::EmployeeInactive`)
    /// - A database operation fails
    pub fn identify_employee(&mut self, name: &EmployeeName) -> Result<Employee, PersistenceError> {
        self.write(|conn| match queries::find_employee_by_name(conn, name)? {
            Some(employee) if !employee.active => Err(PersistenceError::Rejected(
                DomainError::EmployeeInactive(employee.name.full_name()).into(),
            )),
            Some(employee) => Ok(employee),
            None => mutations::insert_employee(conn, name, OffsetDateTime::now_utc()),
        })
    }

    /// Retrieves an employee by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn get_employee(&mut self, employee_id: i64) -> Result<Option<Employee>, PersistenceError> {
        self.read(|conn| queries::get_employee(conn, employee_id))
    }

    /// Lists every employee ordered by surname, then given name.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn list_employees(&mut self) -> Result<Vec<Employee>, PersistenceError> {
        self.read(queries::list_employees)
    }

    // ========================================================================
    // Reads
    // ========================================================================

    /// Retrieves the ledger entry owned by an employee.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn get_choice(
        &mut self,
        employee_id: i64,
    ) -> Result<Option<ChoiceEntry>, PersistenceError> {
        self.read(|conn| queries::get_choice(conn, employee_id))
    }

    /// Lists every ledger entry.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn list_choices(&mut self) -> Result<Vec<ChoiceEntry>, PersistenceError> {
        self.read(queries::list_choices)
    }

    /// Retrieves the configuration in effect.
    ///
    /// # Errors
    ///
    /// Returns an error if settings were never seeded or the query fails.
    pub fn get_configuration(&mut self) -> Result<Configuration, PersistenceError> {
        self.read(queries::get_configuration)
    }

    /// Retrieves the availability flags of a year.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn get_availability(&mut self, year: u16) -> Result<WeekAvailability, PersistenceError> {
        self.read(|conn| queries::get_availability(conn, year))
    }

    /// Loads a consistent snapshot of everything for a year.
    ///
    /// # Errors
    ///
    /// Returns an error if any query fails.
    pub fn load_state(&mut self, year: u16) -> Result<State, PersistenceError> {
        self.read(|conn| queries::load_state(conn, year))
    }
}
