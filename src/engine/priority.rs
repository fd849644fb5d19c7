//! Placement-order prioritization.
//!
//! Units are placed hardest-first: lab units before theory units (double
//! slots and the lab-room restriction make them the scarcest to seat),
//! then by descending demand of their teacher, section, and subject.
//! Demand for a key is simply how many units share that key across the
//! whole unit list — a cheap proxy for "hardest to place" that avoids
//! any search.
//!
//! Remaining ties are broken by a per-unit random token drawn from the
//! run generator before sorting, which keeps the comparator a total
//! order while preserving seeded reproducibility.

use rand::Rng;
use std::cmp::Ordering;
use std::collections::HashMap;

use crate::models::{ClassUnit, SessionKind};

/// Unit counts per teacher, section, and subject across one unit list.
#[derive(Debug, Clone, Default)]
pub struct DemandIndex {
    teacher: HashMap<String, u32>,
    section: HashMap<String, u32>,
    subject: HashMap<String, u32>,
}

impl DemandIndex {
    /// Counts demand over the full unit list.
    pub fn build(units: &[ClassUnit]) -> Self {
        let mut index = Self::default();
        for unit in units {
            *index.teacher.entry(unit.teacher.clone()).or_insert(0) += 1;
            *index.section.entry(unit.section.clone()).or_insert(0) += 1;
            *index.subject.entry(unit.subject.clone()).or_insert(0) += 1;
        }
        index
    }

    /// Weekly unit count for a teacher.
    pub fn teacher_demand(&self, teacher: &str) -> u32 {
        self.teacher.get(teacher).copied().unwrap_or(0)
    }

    /// Weekly unit count for a section.
    pub fn section_demand(&self, section: &str) -> u32 {
        self.section.get(section).copied().unwrap_or(0)
    }

    /// Weekly unit count for a subject.
    pub fn subject_demand(&self, subject: &str) -> u32 {
        self.subject.get(subject).copied().unwrap_or(0)
    }
}

fn kind_rank(kind: SessionKind) -> u8 {
    match kind {
        SessionKind::Lab => 0,
        SessionKind::Theory => 1,
    }
}

fn compare(a: &ClassUnit, b: &ClassUnit, index: &DemandIndex) -> Ordering {
    kind_rank(a.kind)
        .cmp(&kind_rank(b.kind))
        .then_with(|| {
            index
                .teacher_demand(&b.teacher)
                .cmp(&index.teacher_demand(&a.teacher))
        })
        .then_with(|| {
            index
                .section_demand(&b.section)
                .cmp(&index.section_demand(&a.section))
        })
        .then_with(|| {
            index
                .subject_demand(&b.subject)
                .cmp(&index.subject_demand(&a.subject))
        })
}

/// Sorts units into placement order.
///
/// Labs first, then demand-descending on teacher / section / subject,
/// final ties randomized by `rng`.
pub fn sort_units<R: Rng>(units: &mut Vec<ClassUnit>, index: &DemandIndex, rng: &mut R) {
    let mut keyed: Vec<(u32, ClassUnit)> = units
        .drain(..)
        .map(|unit| (rng.random::<u32>(), unit))
        .collect();

    keyed.sort_by(|(jitter_a, a), (jitter_b, b)| {
        compare(a, b, index).then_with(|| jitter_a.cmp(jitter_b))
    });

    units.extend(keyed.into_iter().map(|(_, unit)| unit));
}
