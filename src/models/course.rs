//! Course (input) model.
//!
//! A course couples a subject, the teacher who delivers it, and the
//! student section that attends it, together with how many weekly
//! sessions it requires. Courses are caller-owned input — the engine
//! reads them and derives [`ClassUnit`](super::ClassUnit)s, nothing more.

use serde::{Deserialize, Serialize};

/// A course to be timetabled.
///
/// Weekly session counts are derived rather than stored: the theory
/// count falls back from `theory_classes_week` to `credit_hours` to 0,
/// and the lab count is `lab_classes_week` or 0.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Course {
    /// Subject name (e.g., "Data Structures").
    pub subject: String,
    /// Assigned teacher name.
    pub teacher: String,
    /// Student section name (e.g., "CS-3A").
    pub section: String,
    /// Credit hours; used as the weekly theory count when no explicit
    /// count is given.
    pub credit_hours: Option<u32>,
    /// Explicit weekly theory-session count. Overrides `credit_hours`.
    pub theory_classes_week: Option<u32>,
    /// Explicit weekly lab-session count.
    pub lab_classes_week: Option<u32>,
    /// Whether the teacher is regular staff (vs. visiting).
    #[serde(default = "default_is_regular")]
    pub is_regular: bool,
    /// Optional subject-type label (e.g., "Core", "Elective").
    pub subject_type: Option<String>,
}

fn default_is_regular() -> bool {
    true
}

impl Course {
    /// Creates a new course taught by regular staff.
    pub fn new(
        subject: impl Into<String>,
        teacher: impl Into<String>,
        section: impl Into<String>,
    ) -> Self {
        Self {
            subject: subject.into(),
            teacher: teacher.into(),
            section: section.into(),
            credit_hours: None,
            theory_classes_week: None,
            lab_classes_week: None,
            is_regular: true,
            subject_type: None,
        }
    }

    /// Sets the credit hours.
    pub fn with_credit_hours(mut self, hours: u32) -> Self {
        self.credit_hours = Some(hours);
        self
    }

    /// Sets an explicit weekly theory-session count.
    pub fn with_theory_classes(mut self, count: u32) -> Self {
        self.theory_classes_week = Some(count);
        self
    }

    /// Sets an explicit weekly lab-session count.
    pub fn with_lab_classes(mut self, count: u32) -> Self {
        self.lab_classes_week = Some(count);
        self
    }

    /// Marks the teacher as visiting (non-regular) staff.
    pub fn visiting(mut self) -> Self {
        self.is_regular = false;
        self
    }

    /// Sets the subject-type label.
    pub fn with_subject_type(mut self, label: impl Into<String>) -> Self {
        self.subject_type = Some(label.into());
        self
    }

    /// Weekly theory-session count: explicit value, else credit hours, else 0.
    #[inline]
    pub fn weekly_theory_sessions(&self) -> u32 {
        self.theory_classes_week.or(self.credit_hours).unwrap_or(0)
    }

    /// Weekly lab-session count: explicit value or 0.
    #[inline]
    pub fn weekly_lab_sessions(&self) -> u32 {
        self.lab_classes_week.unwrap_or(0)
    }

    /// Whether this course implies any weekly sessions at all.
    pub fn has_sessions(&self) -> bool {
        self.weekly_theory_sessions() > 0 || self.weekly_lab_sessions() > 0
    }
}
