//! Course timetabling engine for the U-Engine ecosystem.
//!
//! Builds a conflict-free weekly class grid from a course list and a room
//! list: every required weekly session gets a day, a contiguous time block,
//! and a room, subject to teacher/section capacity and availability
//! constraints. The allocator is a greedy, priority-driven heuristic with
//! seeded randomized tie-breaking — fast and reproducible, not optimal.
//! Sessions that cannot be placed are reported, not raised as errors.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Course`, `Room`, `ClassUnit`,
//!   `Timetable`, `Cell`, `Session`, `TeacherAvailability`, `Weekday`
//! - **`engine`**: The allocation pipeline — unit expansion, priority
//!   sorting, constraint tracking, day/time/room placement, KPIs
//! - **`validation`**: Input integrity checks (duplicate rooms, blank
//!   fields, lab sessions without lab rooms)
//!
//! # Algorithm
//!
//! 1. Expand each course into atomic weekly class units (1-slot theory
//!    sessions, 1- or 2-slot lab sessions).
//! 2. Sort units hardest-first: labs before theory, then by teacher /
//!    section / subject demand, random tie-break.
//! 3. For each unit scan days, then shuffled time slots, then rooms, and
//!    commit the first combination that clears every hard constraint.
//!
//! A unit is never revisited once placed or exhausted — there is no
//! backtracking. A fixed `Seed` makes a whole run byte-reproducible.
//!
//! # References
//!
//! - Schaerf (1999), "A Survey of Automated Timetabling"
//! - Burke & Petrovic (2002), "Recent Research Directions in Automated Timetabling"
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems"

pub mod engine;
pub mod models;
pub mod validation;
