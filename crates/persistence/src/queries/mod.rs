// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Query modules for persistence layer.
//!
//! This module contains all read-only queries for the persistence layer.
//!
//! ## Module Organization
//!
//! - `employees` — Employee lookup and listing
//! - `choices` — Choice ledger reads
//! - `settings` — Configuration and week availability
//! - `state` — Full engine snapshot assembly

pub mod choices;
pub mod employees;
pub mod settings;
pub mod state;

pub use choices::{get_choice, list_choices};
pub use employees::{find_employee_by_name, get_employee, list_employees};
pub use settings::{get_availability, get_configuration};
pub use state::load_state;
