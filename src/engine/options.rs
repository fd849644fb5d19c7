//! Engine options and the run seed.
//!
//! The options bundle carries everything the calling collaborator may
//! tune: daily caps, the visiting-teacher earliest slot, per-teacher
//! availability, and an optional seed. All fields have defaults, so an
//! empty options object (or an omitted one on the wire) is valid.

use rand::rngs::SmallRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::models::TeacherAvailability;

/// Default per-teacher daily class cap.
pub const DEFAULT_MAX_PER_TEACHER: u32 = 4;

/// Default per-section daily class cap.
pub const DEFAULT_MAX_PER_SECTION: u32 = 6;

/// Default earliest slot for visiting teachers (index 2 = 11:30).
pub const DEFAULT_VISITING_EARLIEST_SLOT: usize = 2;

/// Seed for the run's random generator.
///
/// Numeric seeds are used as-is; text seeds are hashed. Either way a
/// fixed seed makes a whole run fully reproducible, because every
/// randomized decision (sort tie-breaks, slot shuffles, day/room
/// tie-breaks) draws from the single generator it creates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Seed {
    /// Numeric seed.
    Number(u64),
    /// Text seed, hashed to a number.
    Text(String),
}

impl Seed {
    /// The seed value as a 64-bit integer. Text seeds use FNV-1a.
    pub fn to_u64(&self) -> u64 {
        match self {
            Seed::Number(n) => *n,
            Seed::Text(s) => fnv1a(s.as_bytes()),
        }
    }
}

/// FNV-1a 64-bit hash. Stable across platforms and releases, which is
/// all a text seed needs.
fn fnv1a(bytes: &[u8]) -> u64 {
    let mut hash: u64 = 0xcbf2_9ce4_8422_2325;
    for &b in bytes {
        hash ^= u64::from(b);
        hash = hash.wrapping_mul(0x0000_0100_0000_01b3);
    }
    hash
}

/// Tunable engine behavior.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineOptions {
    /// Maximum classes one teacher may hold per day.
    pub max_classes_per_teacher_per_day: u32,
    /// Maximum classes one section may attend per day.
    pub max_classes_per_section_per_day: u32,
    /// Earliest slot index for visiting teachers with no explicit
    /// time restriction.
    pub visiting_earliest_slot: usize,
    /// Per-teacher day/time restrictions, keyed by teacher name.
    /// Lookups are case-insensitive.
    pub teacher_availability: HashMap<String, TeacherAvailability>,
    /// Optional seed; omitted → each run draws fresh entropy.
    pub seed: Option<Seed>,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            max_classes_per_teacher_per_day: DEFAULT_MAX_PER_TEACHER,
            max_classes_per_section_per_day: DEFAULT_MAX_PER_SECTION,
            visiting_earliest_slot: DEFAULT_VISITING_EARLIEST_SLOT,
            teacher_availability: HashMap::new(),
            seed: None,
        }
    }
}

impl EngineOptions {
    /// Creates options with all defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the per-teacher daily cap.
    pub fn with_max_per_teacher(mut self, cap: u32) -> Self {
        self.max_classes_per_teacher_per_day = cap;
        self
    }

    /// Sets the per-section daily cap.
    pub fn with_max_per_section(mut self, cap: u32) -> Self {
        self.max_classes_per_section_per_day = cap;
        self
    }

    /// Sets the visiting-teacher earliest slot.
    pub fn with_visiting_earliest_slot(mut self, slot: usize) -> Self {
        self.visiting_earliest_slot = slot;
        self
    }

    /// Adds an availability entry for a teacher.
    pub fn with_teacher_availability(
        mut self,
        teacher: impl Into<String>,
        availability: TeacherAvailability,
    ) -> Self {
        self.teacher_availability.insert(teacher.into(), availability);
        self
    }

    /// Sets a numeric seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(Seed::Number(seed));
        self
    }

    /// Sets a text seed.
    pub fn with_text_seed(mut self, seed: impl Into<String>) -> Self {
        self.seed = Some(Seed::Text(seed.into()));
        self
    }

    /// Looks up availability for a teacher, case-insensitively.
    pub fn availability_for(&self, teacher: &str) -> Option<&TeacherAvailability> {
        self.teacher_availability
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(teacher))
            .map(|(_, a)| a)
    }

    /// Builds the run generator: seeded when a seed is set, fresh OS
    /// entropy otherwise (so consecutive unseeded runs diverge).
    pub fn make_rng(&self) -> SmallRng {
        match &self.seed {
            Some(seed) => SmallRng::seed_from_u64(seed.to_u64()),
            None => SmallRng::from_os_rng(),
        }
    }
}
