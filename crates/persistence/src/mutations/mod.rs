// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Mutation modules.
//!
//! This module contains all state-changing operations for the persistence layer.
//! Every function here expects to run inside a transaction opened by the
//! `Persistence` adapter.
//!
//! ## Module Organization
//!
//! - `employees` — Employee creation and activation
//! - `choices` — Ledger entry writes
//! - `settings` — Configuration, availability and seeding
//! - `transition` — Writes the change produced by an engine transition

pub mod choices;
pub mod employees;
pub mod settings;
pub mod transition;

pub use choices::{delete_choice, write_choice};
pub use employees::{insert_employee, set_employee_active};
pub use settings::{
    replace_configuration, seed_settings, seed_week_availability, set_week_availability,
};
pub use transition::persist_change;
