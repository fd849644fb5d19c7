//! Weekly grid (solution) model.
//!
//! A timetable is the complete week: for every (day, room, slot)
//! coordinate exactly one [`Cell`], either empty or occupied by exactly
//! one session. The engine returns it inside a [`TimetableResult`]
//! together with the units it could not place and summary counts.

use serde::{Deserialize, Serialize};

use super::room::Room;
use super::time::{Weekday, SLOTS_PER_DAY};
use super::unit::{ClassUnit, SessionKind};

/// An occupied grid cell: who teaches what, to whom, where, and when.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Slot index within the day.
    pub slot: usize,
    /// Occupied room name.
    pub room: String,
    /// Teacher name.
    pub teacher: String,
    /// Subject name.
    pub subject: String,
    /// Section name.
    pub section: String,
    /// Theory or lab.
    pub kind: SessionKind,
    /// Index of the originating course in the caller's course list.
    pub course_index: usize,
    /// ID of the class unit this cell belongs to. Cells of one
    /// multi-slot block share the same unit ID.
    pub unit_id: usize,
}

/// One grid cell: vacant, or occupied by exactly one session.
///
/// The slot position is the cell's index within its room row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cell {
    /// No session assigned.
    Empty,
    /// Occupied by a session.
    Session(Session),
}

impl Cell {
    /// Whether the cell is vacant.
    #[inline]
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// The occupying session, if any.
    pub fn session(&self) -> Option<&Session> {
        match self {
            Cell::Empty => None,
            Cell::Session(s) => Some(s),
        }
    }
}

/// One room's row of slots for one day.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomGrid {
    /// The room this row belongs to.
    pub room: Room,
    /// One cell per slot, `SLOTS_PER_DAY` long.
    pub slots: Vec<Cell>,
}

impl RoomGrid {
    fn empty(room: Room) -> Self {
        Self {
            room,
            slots: vec![Cell::Empty; SLOTS_PER_DAY],
        }
    }

    /// Number of occupied cells in this row.
    pub fn occupied_count(&self) -> usize {
        self.slots.iter().filter(|c| !c.is_empty()).count()
    }
}

/// All room rows for one day.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayGrid {
    /// The day.
    pub day: Weekday,
    /// One row per room, in input room order.
    pub rooms: Vec<RoomGrid>,
}

/// The complete weekly grid.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Timetable {
    /// Monday through Friday, in week order.
    pub days: Vec<DayGrid>,
}

impl Timetable {
    /// Creates an all-empty grid over the given rooms.
    pub fn empty(rooms: &[Room]) -> Self {
        let days = Weekday::ALL
            .iter()
            .map(|&day| DayGrid {
                day,
                rooms: rooms.iter().cloned().map(RoomGrid::empty).collect(),
            })
            .collect();
        Self { days }
    }

    /// The grid for one day.
    #[inline]
    pub fn day(&self, day: Weekday) -> &DayGrid {
        &self.days[day.index()]
    }

    fn day_mut(&mut self, day: Weekday) -> &mut DayGrid {
        &mut self.days[day.index()]
    }

    /// Number of rooms per day.
    pub fn room_count(&self) -> usize {
        self.days.first().map_or(0, |d| d.rooms.len())
    }

    /// Whether every cell of a block is vacant in the given room.
    pub fn block_free(&self, day: Weekday, room_index: usize, start: usize, duration: usize) -> bool {
        let row = &self.day(day).rooms[room_index];
        row.slots[start..start + duration].iter().all(Cell::is_empty)
    }

    /// Occupied-cell count for one room on one day.
    pub fn occupied_count(&self, day: Weekday, room_index: usize) -> usize {
        self.day(day).rooms[room_index].occupied_count()
    }

    /// Writes a session into a cell.
    ///
    /// # Panics
    /// Panics if the cell is already occupied; callers check
    /// [`block_free`](Self::block_free) first.
    pub fn place(&mut self, day: Weekday, room_index: usize, session: Session) {
        let cell = &mut self.day_mut(day).rooms[room_index].slots[session.slot];
        match cell {
            Cell::Empty => *cell = Cell::Session(session),
            Cell::Session(existing) => {
                panic!(
                    "cell {}/{}/{} already occupied by unit {}",
                    day,
                    room_index,
                    existing.slot,
                    existing.unit_id
                );
            }
        }
    }

    /// All placed sessions with their day, in grid order.
    pub fn sessions(&self) -> Vec<(Weekday, &Session)> {
        let mut out = Vec::new();
        for day_grid in &self.days {
            for row in &day_grid.rooms {
                for cell in &row.slots {
                    match cell {
                        Cell::Empty => {}
                        Cell::Session(s) => out.push((day_grid.day, s)),
                    }
                }
            }
        }
        out
    }

    /// All placed sessions for one teacher.
    pub fn sessions_for_teacher(&self, teacher: &str) -> Vec<(Weekday, &Session)> {
        self.sessions()
            .into_iter()
            .filter(|(_, s)| s.teacher == teacher)
            .collect()
    }

    /// All placed sessions for one section.
    pub fn sessions_for_section(&self, section: &str) -> Vec<(Weekday, &Session)> {
        self.sessions()
            .into_iter()
            .filter(|(_, s)| s.section == section)
            .collect()
    }

    /// Total number of occupied cells across the week.
    pub fn occupied_cells(&self) -> usize {
        self.days
            .iter()
            .flat_map(|d| d.rooms.iter())
            .map(RoomGrid::occupied_count)
            .sum()
    }

    /// Total number of cells across the week.
    pub fn total_cells(&self) -> usize {
        self.days.len() * self.room_count() * SLOTS_PER_DAY
    }
}

/// Summary counts for one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleStats {
    /// Units generated by the expander.
    pub total_units: usize,
    /// Units committed to the grid.
    pub scheduled: usize,
    /// Units that could not be placed.
    pub unscheduled: usize,
}

/// Result of one engine run, owned by the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimetableResult {
    /// The completed weekly grid.
    pub timetable: Timetable,
    /// Units that could not be placed, with full identifying detail.
    pub unscheduled: Vec<ClassUnit>,
    /// Summary counts.
    pub stats: ScheduleStats,
}

impl TimetableResult {
    /// Whether every generated unit was placed.
    pub fn is_complete(&self) -> bool {
        self.unscheduled.is_empty()
    }
}
