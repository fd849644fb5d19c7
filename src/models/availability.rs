//! Teacher availability restrictions.
//!
//! A teacher may be restricted to a subset of weekdays, a subset of time
//! slots, and/or an `[earliest, latest]` slot window. Every field is
//! optional; an absent field means "no restriction on that axis".
//!
//! Teachers with no entry at all fall back to the engine defaults: no
//! restriction for regular staff, and the visiting-floor rule
//! (no slot before the configured earliest) for non-regular staff.

use serde::{Deserialize, Serialize};

use super::time::{Weekday, SLOTS_PER_DAY};

/// Day/time restrictions for one teacher.
///
/// When both `slots` and a window are configured, a slot must satisfy
/// both to be allowed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TeacherAvailability {
    /// Allowed weekdays. `None` = all weekdays.
    pub days: Option<Vec<Weekday>>,
    /// Allowed slot indices. `None` = all slots.
    pub slots: Option<Vec<usize>>,
    /// Earliest allowed slot index (inclusive).
    pub earliest: Option<usize>,
    /// Latest allowed slot index (inclusive).
    pub latest: Option<usize>,
}

impl TeacherAvailability {
    /// Creates an unrestricted availability.
    pub fn new() -> Self {
        Self::default()
    }

    /// Restricts to the given weekdays.
    pub fn with_days(mut self, days: Vec<Weekday>) -> Self {
        self.days = Some(days);
        self
    }

    /// Restricts to the given slot indices.
    pub fn with_slots(mut self, slots: Vec<usize>) -> Self {
        self.slots = Some(slots);
        self
    }

    /// Restricts to an inclusive `[earliest, latest]` slot window.
    pub fn with_window(mut self, earliest: usize, latest: usize) -> Self {
        self.earliest = Some(earliest);
        self.latest = Some(latest);
        self
    }

    /// Whether the given day is allowed.
    pub fn allows_day(&self, day: Weekday) -> bool {
        match &self.days {
            None => true,
            Some(days) => days.contains(&day),
        }
    }

    /// Whether this entry restricts the time axis at all.
    ///
    /// Day-only restrictions leave the time axis open, which keeps the
    /// visiting-floor default in force for non-regular teachers.
    pub fn restricts_slots(&self) -> bool {
        self.slots.is_some() || self.earliest.is_some() || self.latest.is_some()
    }

    /// Whether the given slot index is allowed.
    pub fn allows_slot(&self, slot: usize) -> bool {
        if let Some(slots) = &self.slots {
            if !slots.contains(&slot) {
                return false;
            }
        }
        if let Some(earliest) = self.earliest {
            if slot < earliest {
                return false;
            }
        }
        if let Some(latest) = self.latest {
            if slot > latest {
                return false;
            }
        }
        true
    }

    /// Candidate start slots implied by the time restriction, in index
    /// order. `None` when the time axis is unrestricted.
    pub fn slot_candidates(&self) -> Option<Vec<usize>> {
        if !self.restricts_slots() {
            return None;
        }
        Some(
            (0..SLOTS_PER_DAY)
                .filter(|&s| self.allows_slot(s))
                .collect(),
        )
    }
}
