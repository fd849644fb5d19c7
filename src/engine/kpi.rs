//! Timetable quality metrics (KPIs).
//!
//! Computes summary indicators from a completed run so callers can judge
//! coverage and grid usage without walking the grid themselves.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Scheduled Rate | placed units / generated units |
//! | Fill Rate | occupied cells / total cells |
//! | Room Utilization | occupied cells per room / weekly slots per room |
//! | Sessions per Day | occupied cells on each weekday |

use std::collections::HashMap;

use crate::models::{Cell, SessionKind, TimetableResult, Weekday, SLOTS_PER_DAY};

/// Quality indicators for one run.
#[derive(Debug, Clone)]
pub struct TimetableKpi {
    /// Fraction of generated units that were placed (0.0..1.0).
    pub scheduled_rate: f64,
    /// Fraction of grid cells occupied (0.0..1.0).
    pub fill_rate: f64,
    /// Per-room weekly utilization (occupied cells / weekly slots).
    pub utilization_by_room: HashMap<String, f64>,
    /// Occupied cell count per weekday.
    pub sessions_per_day: HashMap<Weekday, usize>,
    /// Occupied cells holding theory sessions.
    pub theory_cells: usize,
    /// Occupied cells holding lab sessions.
    pub lab_cells: usize,
}

impl TimetableKpi {
    /// Computes KPIs from a run result.
    pub fn calculate(result: &TimetableResult) -> Self {
        let stats = result.stats;
        let scheduled_rate = if stats.total_units == 0 {
            1.0
        } else {
            stats.scheduled as f64 / stats.total_units as f64
        };

        let mut room_occupied: HashMap<String, usize> = HashMap::new();
        let mut sessions_per_day: HashMap<Weekday, usize> = HashMap::new();
        let mut theory_cells = 0;
        let mut lab_cells = 0;

        for day_grid in &result.timetable.days {
            for row in &day_grid.rooms {
                let occupied = row.occupied_count();
                *room_occupied.entry(row.room.name.clone()).or_insert(0) += occupied;
                *sessions_per_day.entry(day_grid.day).or_insert(0) += occupied;
                for cell in &row.slots {
                    match cell {
                        Cell::Empty => {}
                        Cell::Session(s) => match s.kind {
                            SessionKind::Theory => theory_cells += 1,
                            SessionKind::Lab => lab_cells += 1,
                        },
                    }
                }
            }
        }

        let weekly_slots_per_room = (Weekday::ALL.len() * SLOTS_PER_DAY) as f64;
        let utilization_by_room = room_occupied
            .into_iter()
            .map(|(name, occupied)| (name, occupied as f64 / weekly_slots_per_room))
            .collect();

        let total_cells = result.timetable.total_cells();
        let fill_rate = if total_cells == 0 {
            0.0
        } else {
            result.timetable.occupied_cells() as f64 / total_cells as f64
        };

        Self {
            scheduled_rate,
            fill_rate,
            utilization_by_room,
            sessions_per_day,
            theory_cells,
            lab_cells,
        }
    }

    /// Whether every generated unit was placed.
    pub fn is_fully_scheduled(&self) -> bool {
        self.scheduled_rate >= 1.0
    }
}
