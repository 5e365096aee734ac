// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::calendar::{is_summer_week, weeks_in_year};
use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use time::OffsetDateTime;

/// Default capacity per week for a fresh deployment.
pub const DEFAULT_CAPACITY_PER_WEEK: u32 = 5;

/// An ISO week number.
///
/// The value is not range-checked on construction; calendar lookups and
/// availability checks decide whether a week is meaningful.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct WeekNumber(u16);

impl WeekNumber {
    /// Creates a new `WeekNumber`.
    #[must_use]
    pub const fn new(value: u16) -> Self {
        Self(value)
    }

    /// Returns the week number value.
    #[must_use]
    pub const fn value(&self) -> u16 {
        self.0
    }
}

impl std::fmt::Display for WeekNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u16> for WeekNumber {
    fn from(value: u16) -> Self {
        Self(value)
    }
}

/// An employee's name.
///
/// Both parts are trimmed and title-cased on construction. Identity is
/// case-insensitive: two names are the same employee when their keys match.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EmployeeName {
    surname: String,
    given_name: String,
}

impl EmployeeName {
    /// Creates a new `EmployeeName`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidName` if either part is blank.
    pub fn new(surname: &str, given_name: &str) -> Result<Self, DomainError> {
        let surname: &str = surname.trim();
        let given_name: &str = given_name.trim();

        if surname.is_empty() {
            return Err(DomainError::InvalidName(String::from(
                "Surname cannot be empty",
            )));
        }
        if given_name.is_empty() {
            return Err(DomainError::InvalidName(String::from(
                "Given name cannot be empty",
            )));
        }

        Ok(Self {
            surname: title_case(surname),
            given_name: title_case(given_name),
        })
    }

    /// Returns the surname.
    #[must_use]
    pub fn surname(&self) -> &str {
        &self.surname
    }

    /// Returns the given name.
    #[must_use]
    pub fn given_name(&self) -> &str {
        &self.given_name
    }

    /// Returns `"Surname Given"`, the display order used in listings.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.surname, self.given_name)
    }

    /// Lowercased surname used for case-insensitive lookup.
    #[must_use]
    pub fn surname_key(&self) -> String {
        self.surname.to_lowercase()
    }

    /// Lowercased given name used for case-insensitive lookup.
    #[must_use]
    pub fn given_name_key(&self) -> String {
        self.given_name.to_lowercase()
    }
}

impl std::fmt::Display for EmployeeName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.full_name())
    }
}

// Uppercase the first letter of every alphabetic run, lowercase the rest.
fn title_case(value: &str) -> String {
    let mut result: String = String::with_capacity(value.len());
    let mut at_word_start: bool = true;
    for ch in value.chars() {
        if ch.is_alphabetic() {
            if at_word_start {
                result.extend(ch.to_uppercase());
            } else {
                result.extend(ch.to_lowercase());
            }
            at_word_start = false;
        } else {
            result.push(ch);
            at_word_start = true;
        }
    }
    result
}

/// An employee who may hold a choice ledger entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// The database identifier. `None` until persisted.
    pub employee_id: Option<i64>,
    /// The employee's name.
    pub name: EmployeeName,
    /// Inactive employees cannot submit choices.
    pub active: bool,
}

impl Employee {
    /// Creates a new active employee without a persisted ID.
    #[must_use]
    pub const fn new(name: EmployeeName) -> Self {
        Self {
            employee_id: None,
            name,
            active: true,
        }
    }

    /// Creates an employee with an existing persisted ID.
    #[must_use]
    pub const fn with_id(employee_id: i64, name: EmployeeName, active: bool) -> Self {
        Self {
            employee_id: Some(employee_id),
            name,
            active,
        }
    }
}

/// Global allocation settings.
///
/// Replaced wholesale whenever an administrator updates it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Configuration {
    capacity_per_week: u32,
    fourth_slot_enabled: bool,
    note: String,
}

impl Configuration {
    /// Creates a new `Configuration`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidCapacity` if `capacity_per_week` is zero.
    pub fn new(
        capacity_per_week: u32,
        fourth_slot_enabled: bool,
        note: String,
    ) -> Result<Self, DomainError> {
        if capacity_per_week == 0 {
            return Err(DomainError::InvalidCapacity(capacity_per_week));
        }
        Ok(Self {
            capacity_per_week,
            fourth_slot_enabled,
            note,
        })
    }

    /// Maximum number of ledger references per week.
    #[must_use]
    pub const fn capacity_per_week(&self) -> u32 {
        self.capacity_per_week
    }

    /// Whether submissions may carry a fourth week.
    #[must_use]
    pub const fn fourth_slot_enabled(&self) -> bool {
        self.fourth_slot_enabled
    }

    /// Free-text note shown to employees.
    #[must_use]
    pub fn note(&self) -> &str {
        &self.note
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            capacity_per_week: DEFAULT_CAPACITY_PER_WEEK,
            fourth_slot_enabled: true,
            note: String::new(),
        }
    }
}

/// Per-week availability flags for one year.
///
/// Weeks without an explicit flag fall back to the static default: available
/// inside the summer range, unavailable elsewhere.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekAvailability {
    year: u16,
    flags: BTreeMap<WeekNumber, bool>,
}

impl WeekAvailability {
    /// Creates availability with no explicit flags.
    #[must_use]
    pub const fn new(year: u16) -> Self {
        Self {
            year,
            flags: BTreeMap::new(),
        }
    }

    /// Creates availability from stored flags.
    #[must_use]
    pub const fn with_flags(year: u16, flags: BTreeMap<WeekNumber, bool>) -> Self {
        Self { year, flags }
    }

    /// Returns the year these flags apply to.
    #[must_use]
    pub const fn year(&self) -> u16 {
        self.year
    }

    /// Sets the flag for a single week.
    pub fn set(&mut self, week: WeekNumber, available: bool) {
        self.flags.insert(week, available);
    }

    /// Returns the stored flag, or the static default when unset.
    #[must_use]
    pub fn is_available(&self, week: WeekNumber) -> bool {
        self.flags
            .get(&week)
            .copied()
            .unwrap_or_else(|| is_summer_week(week))
    }

    /// Returns whether the week may be referenced by a new submission.
    ///
    /// A week outside the summer range is never selectable, whatever its flag.
    #[must_use]
    pub fn is_selectable(&self, week: WeekNumber) -> bool {
        is_summer_week(week) && self.is_available(week)
    }

    /// Resolves the flag of every ISO week of the year.
    #[must_use]
    pub fn resolved(&self) -> BTreeMap<WeekNumber, bool> {
        (1..=u16::from(weeks_in_year(self.year)))
            .map(WeekNumber::new)
            .map(|week| (week, self.is_available(week)))
            .collect()
    }
}

/// One of the four named week fields of a ledger entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Slot {
    /// Mandatory week adjacent to the fixed holiday week.
    Holiday,
    /// Optional additional week.
    Additional,
    /// Optional fallback candidate for the additional week.
    Reserve,
    /// Optional fourth week, offered only when enabled.
    Fourth,
}

impl Slot {
    /// All slots in submission order.
    pub const ALL: [Self; 4] = [Self::Holiday, Self::Additional, Self::Reserve, Self::Fourth];

    /// Converts this slot to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Holiday => "holiday",
            Self::Additional => "additional",
            Self::Reserve => "reserve",
            Self::Fourth => "fourth",
        }
    }
}

impl std::fmt::Display for Slot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A proposed set of week choices, as submitted and not yet validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ChoiceSubmission {
    /// Mandatory, but may be missing in a malformed submission.
    pub holiday_week: Option<WeekNumber>,
    /// Optional additional week.
    pub additional_week: Option<WeekNumber>,
    /// Optional reserve week.
    pub reserve_week: Option<WeekNumber>,
    /// Optional fourth week.
    pub fourth_week: Option<WeekNumber>,
}

impl ChoiceSubmission {
    /// Returns the present weeks with their slots, in slot order.
    #[must_use]
    pub fn present_weeks(&self) -> Vec<(Slot, WeekNumber)> {
        [
            (Slot::Holiday, self.holiday_week),
            (Slot::Additional, self.additional_week),
            (Slot::Reserve, self.reserve_week),
            (Slot::Fourth, self.fourth_week),
        ]
        .into_iter()
        .filter_map(|(slot, week)| week.map(|w| (slot, w)))
        .collect()
    }
}

/// A validated set of week choices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekChoice {
    /// One of the two holiday-adjacent weeks.
    pub holiday_week: WeekNumber,
    /// Optional additional week.
    pub additional_week: Option<WeekNumber>,
    /// Optional reserve week.
    pub reserve_week: Option<WeekNumber>,
    /// Optional fourth week.
    pub fourth_week: Option<WeekNumber>,
}

impl WeekChoice {
    /// Creates a choice holding only the mandatory holiday week.
    #[must_use]
    pub const fn holiday_only(holiday_week: WeekNumber) -> Self {
        Self {
            holiday_week,
            additional_week: None,
            reserve_week: None,
            fourth_week: None,
        }
    }

    /// Returns the week held in the given slot.
    #[must_use]
    pub const fn week_for(&self, slot: Slot) -> Option<WeekNumber> {
        match slot {
            Slot::Holiday => Some(self.holiday_week),
            Slot::Additional => self.additional_week,
            Slot::Reserve => self.reserve_week,
            Slot::Fourth => self.fourth_week,
        }
    }

    /// Returns every present week with its slot, in slot order.
    #[must_use]
    pub fn weeks(&self) -> Vec<(Slot, WeekNumber)> {
        Slot::ALL
            .into_iter()
            .filter_map(|slot| self.week_for(slot).map(|week| (slot, week)))
            .collect()
    }

    /// Returns whether any slot references the week.
    #[must_use]
    pub fn contains(&self, week: WeekNumber) -> bool {
        Slot::ALL
            .into_iter()
            .any(|slot| self.week_for(slot) == Some(week))
    }
}

impl From<WeekChoice> for ChoiceSubmission {
    fn from(choice: WeekChoice) -> Self {
        Self {
            holiday_week: Some(choice.holiday_week),
            additional_week: choice.additional_week,
            reserve_week: choice.reserve_week,
            fourth_week: choice.fourth_week,
        }
    }
}

/// The committed choice ledger entry of one employee.
///
/// At most one entry exists per employee. Later commits overwrite it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChoiceEntry {
    /// The owning employee.
    pub employee_id: i64,
    /// The committed weeks.
    pub choice: WeekChoice,
    /// When the entry was first committed.
    pub created_at: OffsetDateTime,
    /// When the entry was last overwritten.
    pub updated_at: OffsetDateTime,
}
