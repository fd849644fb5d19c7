//! Room (input) model.
//!
//! Rooms are the spatial resource of the timetable. The kind matters for
//! placement: lab sessions may only occupy `Lab` rooms, while theory
//! sessions accept either kind.

use serde::{Deserialize, Serialize};

/// Room classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoomKind {
    /// General-purpose classroom.
    Regular,
    /// Laboratory with lab equipment.
    Lab,
}

/// A room available for scheduling.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Room {
    /// Room name (unique within a run).
    pub name: String,
    /// Room classification.
    pub kind: RoomKind,
    /// Seating capacity, when known. Carried as data; the engine does
    /// not compare it against section sizes.
    pub capacity: Option<u32>,
}

impl Room {
    /// Creates a room of the given kind.
    pub fn new(name: impl Into<String>, kind: RoomKind) -> Self {
        Self {
            name: name.into(),
            kind,
            capacity: None,
        }
    }

    /// Creates a regular classroom.
    pub fn regular(name: impl Into<String>) -> Self {
        Self::new(name, RoomKind::Regular)
    }

    /// Creates a lab room.
    pub fn lab(name: impl Into<String>) -> Self {
        Self::new(name, RoomKind::Lab)
    }

    /// Sets the seating capacity.
    pub fn with_capacity(mut self, capacity: u32) -> Self {
        self.capacity = Some(capacity);
        self
    }

    /// Built-in room set used when a request supplies no rooms.
    pub fn default_set() -> Vec<Room> {
        vec![
            Room::regular("R-101"),
            Room::regular("R-102"),
            Room::regular("R-103"),
            Room::regular("R-104"),
            Room::lab("Lab-1"),
            Room::lab("Lab-2"),
        ]
    }
}
