//! Class unit: the atomic schedulable session.
//!
//! The unit expander turns each course into one `ClassUnit` per required
//! weekly session. A unit is indivisible: the allocator either commits
//! its whole contiguous block or reports the unit unscheduled. Units are
//! engine-owned — created once per run, consumed exactly once, then
//! discarded with the result.

use serde::{Deserialize, Serialize};

/// Kind of class session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SessionKind {
    /// Lecture session, always one slot.
    Theory,
    /// Laboratory session, one or two contiguous slots. Requires a
    /// `Lab`-kind room.
    Lab,
}

/// One atomic weekly session derived from a course.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassUnit {
    /// Sequential unit ID within the run (also written into the placed
    /// grid cells, so multi-slot blocks can be re-grouped).
    pub id: usize,
    /// Teacher name, inherited from the course.
    pub teacher: String,
    /// Subject name, inherited from the course.
    pub subject: String,
    /// Section name, inherited from the course.
    pub section: String,
    /// Index of the originating course in the caller's course list.
    pub course_index: usize,
    /// Theory or lab.
    pub kind: SessionKind,
    /// Number of contiguous hour slots (1 or 2).
    pub duration: usize,
    /// Whether the teacher is regular staff, inherited from the course.
    pub is_regular: bool,
}

impl ClassUnit {
    /// Compound subject+section key, used to spread repeated occurrences
    /// of one subject for one section across the week.
    pub fn pair_key(&self) -> String {
        format!("{}::{}", self.subject, self.section)
    }
}
