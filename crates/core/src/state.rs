// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use summer_weeks_domain::{
    ChoiceEntry, Configuration, Employee, Occupancy, WeekAvailability, WeekChoice, WeekNumber,
    fourth_slot_offerable,
};
use time::OffsetDateTime;

/// Everything the engine reads to decide one command.
///
/// The persistence layer loads a snapshot inside the transaction that will
/// commit the outcome, so the snapshot is never stale when applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct State {
    /// The configured calendar year.
    pub year: u16,
    /// The configuration in effect.
    pub configuration: Configuration,
    /// The availability flags of `year`.
    pub availability: WeekAvailability,
    /// Known employees.
    pub employees: Vec<Employee>,
    /// Every ledger entry.
    pub entries: Vec<ChoiceEntry>,
}

impl State {
    /// Creates an empty state with default configuration.
    #[must_use]
    pub fn new(year: u16) -> Self {
        Self {
            year,
            configuration: Configuration::default(),
            availability: WeekAvailability::new(year),
            employees: Vec::new(),
            entries: Vec::new(),
        }
    }

    /// Looks up an employee by id.
    #[must_use]
    pub fn employee(&self, employee_id: i64) -> Option<&Employee> {
        self.employees
            .iter()
            .find(|e| e.employee_id == Some(employee_id))
    }

    /// Returns the ledger entry owned by an employee.
    #[must_use]
    pub fn entry_for(&self, employee_id: i64) -> Option<&ChoiceEntry> {
        self.entries.iter().find(|e| e.employee_id == employee_id)
    }

    /// Projects occupancy over every ledger entry.
    #[must_use]
    pub fn occupancy(&self) -> Occupancy {
        Occupancy::from_entries(&self.entries)
    }

    /// Whether the fourth slot should be offered right now.
    #[must_use]
    pub fn fourth_slot_offerable(&self) -> bool {
        fourth_slot_offerable(&self.configuration, &self.availability, &self.occupancy())
    }

    /// Number of ledger entries (every entry carries a holiday week).
    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.entries.len()
    }

    /// Number of employees still allowed to submit.
    #[must_use]
    pub fn active_employee_count(&self) -> usize {
        self.employees.iter().filter(|e| e.active).count()
    }
}

/// The outcome of a committed submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitResult {
    /// The submitting employee.
    pub employee_id: i64,
    /// The committed weeks.
    pub choice: WeekChoice,
    /// `true` when no prior entry existed.
    pub created: bool,
    /// When the entry was first committed.
    pub created_at: OffsetDateTime,
    /// When the entry was last written (this commit).
    pub updated_at: OffsetDateTime,
    /// Labels of the committed weeks, in slot order.
    pub week_labels: Vec<String>,
}

/// What a transition changed, in the form the store has to write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StateChange {
    /// A ledger entry was inserted or overwritten.
    ChoiceCommitted(CommitResult),
    /// The configuration was replaced.
    ConfigurationReplaced(Configuration),
    /// One week's availability flag was set.
    WeekAvailabilitySet {
        /// The year of the week.
        year: u16,
        /// The week.
        week: WeekNumber,
        /// The new flag.
        available: bool,
    },
    /// A ledger entry was deleted.
    ChoiceDeleted {
        /// The former owner.
        employee_id: i64,
    },
    /// An employee's active flag was set.
    EmployeeActiveSet {
        /// The employee.
        employee_id: i64,
        /// The new flag.
        active: bool,
    },
}

/// The result of a successful state transition.
///
/// Transitions are atomic: they either succeed completely or fail without side effects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionResult {
    /// The new state after the transition.
    pub new_state: State,
    /// The change to persist.
    pub change: StateChange,
}
