//! Constraint tracker: per-run placement bookkeeping.
//!
//! Tracks, independently for three concerns — teacher, section, and the
//! subject+section pair — how many placements each key has per day and
//! which (day, slot) tokens each key has already consumed. The allocator
//! consults it before committing a block and updates it exactly once per
//! committed block.
//!
//! Invariants: a busy token, once marked for a key, is never cleared
//! within a run; one placement ticks each concern's daily counter once
//! and marks `duration` tokens per concern. All state is scoped to a
//! single run — the tracker is built by the caller of the placement
//! loop and dropped with it, so independent runs cannot interfere.

use std::collections::{HashMap, HashSet};

use crate::models::{ClassUnit, Weekday};

/// Counters and busy tokens for one concern.
#[derive(Debug, Clone, Default)]
struct UsageMap {
    counts: HashMap<(String, Weekday), u32>,
    busy: HashSet<(String, Weekday, usize)>,
}

impl UsageMap {
    fn count(&self, key: &str, day: Weekday) -> u32 {
        self.counts
            .get(&(key.to_owned(), day))
            .copied()
            .unwrap_or(0)
    }

    fn is_busy(&self, key: &str, day: Weekday, slot: usize) -> bool {
        self.busy.contains(&(key.to_owned(), day, slot))
    }

    fn record(&mut self, key: &str, day: Weekday, start: usize, duration: usize) {
        *self.counts.entry((key.to_owned(), day)).or_insert(0) += 1;
        for slot in start..start + duration {
            self.busy.insert((key.to_owned(), day, slot));
        }
    }
}

/// Mutable bookkeeping for one allocation run.
#[derive(Debug, Clone, Default)]
pub struct ConstraintTracker {
    teacher: UsageMap,
    section: UsageMap,
    pair: UsageMap,
}

impl ConstraintTracker {
    /// Creates an empty tracker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Placements a teacher already holds on a day.
    pub fn teacher_count(&self, teacher: &str, day: Weekday) -> u32 {
        self.teacher.count(teacher, day)
    }

    /// Placements a section already holds on a day.
    pub fn section_count(&self, section: &str, day: Weekday) -> u32 {
        self.section.count(section, day)
    }

    /// Placements a subject+section pair already holds on a day.
    pub fn pair_count(&self, unit: &ClassUnit, day: Weekday) -> u32 {
        self.pair.count(&unit.pair_key(), day)
    }

    /// Combined same-day load for a unit's teacher, section, and pair.
    /// Used to order candidate days lightest-first.
    pub fn day_load(&self, unit: &ClassUnit, day: Weekday) -> u32 {
        self.teacher_count(&unit.teacher, day)
            + self.section_count(&unit.section, day)
            + self.pair_count(unit, day)
    }

    /// Whether every slot of a block is free of conflicts for the
    /// unit's teacher, section, and subject+section pair. These are
    /// cross-room checks: a token marked in any room blocks the slot.
    pub fn is_block_free(&self, unit: &ClassUnit, day: Weekday, start: usize) -> bool {
        let pair_key = unit.pair_key();
        (start..start + unit.duration).all(|slot| {
            !self.teacher.is_busy(&unit.teacher, day, slot)
                && !self.section.is_busy(&unit.section, day, slot)
                && !self.pair.is_busy(&pair_key, day, slot)
        })
    }

    /// Records a committed block: one counter tick and `duration` busy
    /// tokens per concern.
    pub fn record(&mut self, unit: &ClassUnit, day: Weekday, start: usize) {
        self.teacher.record(&unit.teacher, day, start, unit.duration);
        self.section.record(&unit.section, day, start, unit.duration);
        self.pair
            .record(&unit.pair_key(), day, start, unit.duration);
    }
}
