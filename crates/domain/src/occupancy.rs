// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Occupancy read model.
//!
//! Occupancy is always recomputed from the current ledger entries; nothing
//! here is cached between reads. Deleting an entry therefore frees its weeks
//! on the very next projection.

use crate::calendar::summer_weeks;
use crate::types::{
    ChoiceEntry, Configuration, Employee, Slot, WeekAvailability, WeekChoice, WeekNumber,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Ledger references to one week, broken down by slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WeekOccupancy {
    /// References from the holiday slot.
    pub holiday: u32,
    /// References from the additional slot.
    pub additional: u32,
    /// References from the reserve slot.
    pub reserve: u32,
    /// References from the fourth slot.
    pub fourth: u32,
    /// Sum across all slots.
    pub total: u32,
}

impl WeekOccupancy {
    /// Returns the count contributed by one slot.
    #[must_use]
    pub const fn count_for(&self, slot: Slot) -> u32 {
        match slot {
            Slot::Holiday => self.holiday,
            Slot::Additional => self.additional,
            Slot::Reserve => self.reserve,
            Slot::Fourth => self.fourth,
        }
    }

    const fn slot_mut(&mut self, slot: Slot) -> &mut u32 {
        match slot {
            Slot::Holiday => &mut self.holiday,
            Slot::Additional => &mut self.additional,
            Slot::Reserve => &mut self.reserve,
            Slot::Fourth => &mut self.fourth,
        }
    }

    fn add(&mut self, slot: Slot) {
        *self.slot_mut(slot) += 1;
        self.total += 1;
    }

    fn remove(&mut self, slot: Slot) {
        let count: &mut u32 = self.slot_mut(slot);
        *count = count.saturating_sub(1);
        self.total = self.total.saturating_sub(1);
    }

    /// Whether the week has reached capacity (`total >= capacity`).
    ///
    /// Totals above capacity are possible after an administrator lowers the
    /// capacity; they still count as full.
    #[must_use]
    pub const fn is_full(&self, capacity: u32) -> bool {
        self.total >= capacity
    }

    /// Fill percentage, capped at 100. Zero capacity reports 0.
    #[must_use]
    pub fn fill_percent(&self, capacity: u32) -> u8 {
        if capacity == 0 {
            return 0;
        }
        let percent: u64 = (u64::from(self.total) * 100 / u64::from(capacity)).min(100);
        u8::try_from(percent).unwrap_or(100)
    }
}

/// Per-week occupancy derived from a set of ledger entries.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Occupancy {
    weeks: BTreeMap<WeekNumber, WeekOccupancy>,
}

impl Occupancy {
    /// Creates an empty occupancy table.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            weeks: BTreeMap::new(),
        }
    }

    /// Projects occupancy from ledger entries.
    pub fn from_entries<'a>(entries: impl IntoIterator<Item = &'a ChoiceEntry>) -> Self {
        let mut occupancy: Self = Self::new();
        for entry in entries {
            occupancy.add_choice(&entry.choice);
        }
        occupancy
    }

    /// Adds every week of a choice.
    pub fn add_choice(&mut self, choice: &WeekChoice) {
        for (slot, week) in choice.weeks() {
            self.weeks.entry(week).or_default().add(slot);
        }
    }

    /// Removes every week of a choice. Counts never go below zero.
    pub fn remove_choice(&mut self, choice: &WeekChoice) {
        for (slot, week) in choice.weeks() {
            if let Some(counts) = self.weeks.get_mut(&week) {
                counts.remove(slot);
            }
        }
    }

    /// Returns a copy with one choice's contribution subtracted.
    #[must_use]
    pub fn excluding(&self, choice: Option<&WeekChoice>) -> Self {
        let mut adjusted: Self = self.clone();
        if let Some(choice) = choice {
            adjusted.remove_choice(choice);
        }
        adjusted
    }

    /// Returns the breakdown for a single week (zero when unreferenced).
    #[must_use]
    pub fn week(&self, week: WeekNumber) -> WeekOccupancy {
        self.weeks.get(&week).copied().unwrap_or_default()
    }

    /// Returns the total reference count for a single week.
    #[must_use]
    pub fn total(&self, week: WeekNumber) -> u32 {
        self.week(week).total
    }

    /// Totals for every referenced week.
    #[must_use]
    pub fn counts_by_week(&self) -> BTreeMap<WeekNumber, u32> {
        self.weeks
            .iter()
            .filter(|(_, counts)| counts.total > 0)
            .map(|(week, counts)| (*week, counts.total))
            .collect()
    }

    /// Breakdown by slot for every summer week, plus any other referenced week.
    #[must_use]
    pub fn counts_by_week_and_type(&self) -> BTreeMap<WeekNumber, WeekOccupancy> {
        let mut result: BTreeMap<WeekNumber, WeekOccupancy> = summer_weeks()
            .map(|week| (week, WeekOccupancy::default()))
            .collect();
        for (week, counts) in &self.weeks {
            if counts.total > 0 {
                result.insert(*week, *counts);
            }
        }
        result
    }
}

/// Decides whether the fourth slot should be offered to employees.
///
/// It is offered only when enabled and at least one selectable week still
/// has room.
#[must_use]
pub fn fourth_slot_offerable(
    configuration: &Configuration,
    availability: &WeekAvailability,
    occupancy: &Occupancy,
) -> bool {
    configuration.fourth_slot_enabled()
        && summer_weeks().any(|week| {
            availability.is_selectable(week)
                && !occupancy
                    .week(week)
                    .is_full(configuration.capacity_per_week())
        })
}

/// Employee names holding a week, grouped by slot.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WeekRoster {
    /// Names holding the week as their holiday week.
    pub holiday: Vec<String>,
    /// Names holding the week as their additional week.
    pub additional: Vec<String>,
    /// Names holding the week as their reserve week.
    pub reserve: Vec<String>,
    /// Names holding the week as their fourth week.
    pub fourth: Vec<String>,
}

impl WeekRoster {
    fn push(&mut self, slot: Slot, name: String) {
        match slot {
            Slot::Holiday => self.holiday.push(name),
            Slot::Additional => self.additional.push(name),
            Slot::Reserve => self.reserve.push(name),
            Slot::Fourth => self.fourth.push(name),
        }
    }
}

/// Builds the per-week roster for every summer week.
///
/// Entries whose employee is unknown are skipped. Names are listed in
/// `"Surname Given"` order, sorted alphabetically within each slot.
#[must_use]
pub fn roster_by_week(
    entries: &[ChoiceEntry],
    employees: &[Employee],
) -> BTreeMap<WeekNumber, WeekRoster> {
    let names: BTreeMap<i64, String> = employees
        .iter()
        .filter_map(|e| e.employee_id.map(|id| (id, e.name.full_name())))
        .collect();

    let mut roster: BTreeMap<WeekNumber, WeekRoster> = summer_weeks()
        .map(|week| (week, WeekRoster::default()))
        .collect();

    for entry in entries {
        let Some(name) = names.get(&entry.employee_id) else {
            continue;
        };
        for (slot, week) in entry.choice.weeks() {
            if let Some(week_roster) = roster.get_mut(&week) {
                week_roster.push(slot, name.clone());
            }
        }
    }

    for week_roster in roster.values_mut() {
        week_roster.holiday.sort();
        week_roster.additional.sort();
        week_roster.reserve.sort();
        week_roster.fourth.sort();
    }

    roster
}
