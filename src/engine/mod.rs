//! The allocation pipeline.
//!
//! Turns a course list into a weekly grid in four stages: unit
//! expansion, priority sorting, greedy day/time/room placement against a
//! constraint tracker, and result assembly. KPI evaluation sits beside
//! the pipeline for callers that want quality numbers.
//!
//! # Usage
//!
//! ```
//! use u_timetable::engine::{EngineOptions, TimetableEngine};
//! use u_timetable::models::{Course, Room};
//!
//! let courses = vec![
//!     Course::new("Algorithms", "Dr. Rahman", "CS-3A").with_credit_hours(3),
//!     Course::new("Databases", "Dr. Sato", "CS-3A")
//!         .with_credit_hours(2)
//!         .with_lab_classes(2),
//! ];
//! let options = EngineOptions::new().with_seed(42);
//! let result = TimetableEngine::with_options(options)
//!     .schedule(&courses, &Room::default_set());
//! assert_eq!(result.stats.total_units, 6);
//! ```
//!
//! # Reference
//! Schaerf (1999), "A Survey of Automated Timetabling"

mod allocator;
mod expand;
mod kpi;
mod options;
mod priority;
mod tracker;

pub use allocator::{ScheduleRequest, TimetableEngine};
pub use expand::expand_courses;
pub use kpi::TimetableKpi;
pub use options::{
    EngineOptions, Seed, DEFAULT_MAX_PER_SECTION, DEFAULT_MAX_PER_TEACHER,
    DEFAULT_VISITING_EARLIEST_SLOT,
};
pub use priority::{sort_units, DemandIndex};
pub use tracker::ConstraintTracker;
