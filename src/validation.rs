//! Input validation for timetabling runs.
//!
//! Checks structural integrity of courses and rooms before scheduling.
//! The engine itself never fails on bad data — an unplaceable unit is
//! data, not an error — so these checks exist for callers that want to
//! surface misconfiguration (say, lab sessions with no lab room) before
//! a run instead of diagnosing it from the unscheduled list afterward.
//!
//! Detects:
//! - Duplicate room names
//! - Blank course fields (subject, teacher, section)
//! - Courses that imply zero weekly sessions
//! - An empty room list
//! - Lab sessions requested with no Lab-kind room available

use std::collections::HashSet;

use crate::models::{Course, Room, RoomKind};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two rooms share the same name.
    DuplicateRoom,
    /// A course has a blank subject, teacher, or section.
    MissingField,
    /// A course implies zero weekly sessions.
    NoSessions,
    /// The room list is empty.
    NoRooms,
    /// Lab sessions are requested but no Lab-kind room exists.
    MissingLabRoom,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates the input data for a timetabling run.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_input(courses: &[Course], rooms: &[Room]) -> ValidationResult {
    let mut errors = Vec::new();

    if rooms.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::NoRooms,
            "No rooms supplied",
        ));
    }

    let mut room_names = HashSet::new();
    for room in rooms {
        if !room_names.insert(room.name.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateRoom,
                format!("Duplicate room name: {}", room.name),
            ));
        }
    }

    let mut lab_sessions_requested = false;
    for (index, course) in courses.iter().enumerate() {
        for (field, value) in [
            ("subject", &course.subject),
            ("teacher", &course.teacher),
            ("section", &course.section),
        ] {
            if value.trim().is_empty() {
                errors.push(ValidationError::new(
                    ValidationErrorKind::MissingField,
                    format!("Course #{index} has a blank {field}"),
                ));
            }
        }

        if !course.has_sessions() {
            errors.push(ValidationError::new(
                ValidationErrorKind::NoSessions,
                format!(
                    "Course '{}' for section '{}' implies zero weekly sessions",
                    course.subject, course.section
                ),
            ));
        }

        if course.weekly_lab_sessions() > 0 {
            lab_sessions_requested = true;
        }
    }

    if lab_sessions_requested && !rooms.iter().any(|r| r.kind == RoomKind::Lab) {
        errors.push(ValidationError::new(
            ValidationErrorKind::MissingLabRoom,
            "Lab sessions requested but no Lab-kind room is available",
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
