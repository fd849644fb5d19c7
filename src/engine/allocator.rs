//! Greedy day/time/room allocation.
//!
//! # Algorithm
//!
//! 1. Expand courses into class units and sort them hardest-first.
//! 2. For each unit scan candidate days (availability-filtered, spread
//!    across the week, lightest load first), then shuffled time slots,
//!    then rooms (lab units only in lab rooms), and commit the first
//!    combination that clears every hard constraint.
//! 3. Units with no feasible combination go to the unscheduled list.
//!
//! Placement is single-pass: a unit is never revisited and an earlier
//! placement is never undone to make room for a later unit. The result
//! is feasible, not optimal.
//!
//! # Complexity
//! O(u * d * t * r) worst case, with u units, d=5 days, t=7 slots,
//! r rooms. Realistic inputs finish well under a second.
//!
//! # Reference
//! Schaerf (1999), "A Survey of Automated Timetabling", §3: direct
//! heuristics

use log::{debug, info, trace};
use rand::seq::SliceRandom;
use rand::Rng;

use crate::models::{
    ClassUnit, Course, Room, RoomKind, ScheduleStats, Session, SessionKind, TeacherAvailability,
    Timetable, TimetableResult, Weekday, SLOTS_PER_DAY,
};

use super::expand::expand_courses;
use super::options::EngineOptions;
use super::priority::{sort_units, DemandIndex};
use super::tracker::ConstraintTracker;

/// Input container for one scheduling run.
///
/// # Example
///
/// ```
/// use u_timetable::engine::{ScheduleRequest, TimetableEngine};
/// use u_timetable::models::Course;
///
/// let request = ScheduleRequest::new(vec![
///     Course::new("Algorithms", "Dr. Rahman", "CS-3A").with_credit_hours(3),
/// ]);
/// let result = TimetableEngine::new().schedule_request(&request);
/// assert_eq!(result.stats.total_units, 3);
/// ```
#[derive(Debug, Clone)]
pub struct ScheduleRequest {
    /// Courses to place.
    pub courses: Vec<Course>,
    /// Available rooms. Defaults to [`Room::default_set`].
    pub rooms: Vec<Room>,
    /// Engine options for this run.
    pub options: EngineOptions,
}

impl ScheduleRequest {
    /// Creates a request over the built-in default room set.
    pub fn new(courses: Vec<Course>) -> Self {
        Self {
            courses,
            rooms: Room::default_set(),
            options: EngineOptions::default(),
        }
    }

    /// Replaces the room list.
    pub fn with_rooms(mut self, rooms: Vec<Room>) -> Self {
        self.rooms = rooms;
        self
    }

    /// Replaces the options.
    pub fn with_options(mut self, options: EngineOptions) -> Self {
        self.options = options;
        self
    }
}

/// Greedy timetable allocator.
///
/// Stateless between runs: every call builds its own grid, tracker, and
/// generator, so independent runs may execute in parallel.
#[derive(Debug, Clone, Default)]
pub struct TimetableEngine {
    options: EngineOptions,
}

impl TimetableEngine {
    /// Creates an engine with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an engine with the given options.
    pub fn with_options(options: EngineOptions) -> Self {
        Self { options }
    }

    /// The engine's options.
    pub fn options(&self) -> &EngineOptions {
        &self.options
    }

    /// Runs a full allocation pass.
    ///
    /// An empty `rooms` slice falls back to [`Room::default_set`]. The
    /// generator comes from the options seed, or fresh entropy when no
    /// seed is set.
    pub fn schedule(&self, courses: &[Course], rooms: &[Room]) -> TimetableResult {
        let mut rng = self.options.make_rng();
        self.schedule_with_rng(courses, rooms, &mut rng)
    }

    /// Runs a request, using the request's own options.
    pub fn schedule_request(&self, request: &ScheduleRequest) -> TimetableResult {
        let engine = Self {
            options: request.options.clone(),
        };
        engine.schedule(&request.courses, &request.rooms)
    }

    /// Runs a full allocation pass with a caller-supplied generator.
    ///
    /// Every randomized decision of the run draws from `rng`, so a
    /// deterministic generator makes the whole run reproducible.
    pub fn schedule_with_rng<R: Rng>(
        &self,
        courses: &[Course],
        rooms: &[Room],
        rng: &mut R,
    ) -> TimetableResult {
        let rooms: Vec<Room> = if rooms.is_empty() {
            Room::default_set()
        } else {
            rooms.to_vec()
        };

        let mut units = expand_courses(courses);
        let total_units = units.len();
        debug!(
            "scheduling {} courses ({} class units) across {} rooms",
            courses.len(),
            total_units,
            rooms.len()
        );

        let demand = DemandIndex::build(&units);
        sort_units(&mut units, &demand, rng);

        let mut grid = Timetable::empty(&rooms);
        let mut tracker = ConstraintTracker::new();
        let mut unscheduled = Vec::new();

        for unit in units {
            if !self.place_unit(&unit, &mut grid, &mut tracker, rng) {
                debug!(
                    "no feasible day/time/room for {} {} ({}, {:?})",
                    unit.subject, unit.section, unit.teacher, unit.kind
                );
                unscheduled.push(unit);
            }
        }

        let stats = ScheduleStats {
            total_units,
            scheduled: total_units - unscheduled.len(),
            unscheduled: unscheduled.len(),
        };
        info!(
            "placed {} of {} class units ({} unscheduled)",
            stats.scheduled, stats.total_units, stats.unscheduled
        );

        TimetableResult {
            timetable: grid,
            unscheduled,
            stats,
        }
    }

    /// Places one unit, or reports it infeasible. Single linear scan of
    /// day → time → room candidates; the first passing combination wins.
    fn place_unit<R: Rng>(
        &self,
        unit: &ClassUnit,
        grid: &mut Timetable,
        tracker: &mut ConstraintTracker,
        rng: &mut R,
    ) -> bool {
        let availability = self.options.availability_for(&unit.teacher);

        let days = self.order_days(unit, availability, tracker, rng);
        if days.is_empty() {
            return false;
        }

        for day in days {
            if tracker.teacher_count(&unit.teacher, day)
                >= self.options.max_classes_per_teacher_per_day
            {
                continue;
            }
            if tracker.section_count(&unit.section, day)
                >= self.options.max_classes_per_section_per_day
            {
                continue;
            }

            let mut starts = self.time_candidates(unit, availability);
            starts.shuffle(rng);

            for start in starts {
                if start + unit.duration > SLOTS_PER_DAY {
                    continue;
                }
                if !(start..start + unit.duration)
                    .all(|slot| self.slot_allowed(unit, availability, slot))
                {
                    continue;
                }
                if !tracker.is_block_free(unit, day, start) {
                    continue;
                }

                for room_index in self.order_rooms(unit, grid, day, rng) {
                    if !grid.block_free(day, room_index, start, unit.duration) {
                        continue;
                    }

                    let room_name = grid.day(day).rooms[room_index].room.name.clone();
                    for slot in start..start + unit.duration {
                        grid.place(
                            day,
                            room_index,
                            Session {
                                slot,
                                room: room_name.clone(),
                                teacher: unit.teacher.clone(),
                                subject: unit.subject.clone(),
                                section: unit.section.clone(),
                                kind: unit.kind,
                                course_index: unit.course_index,
                                unit_id: unit.id,
                            },
                        );
                    }
                    tracker.record(unit, day, start);
                    trace!(
                        "placed {} {} in {} on {} slot {}..{}",
                        unit.subject,
                        unit.section,
                        room_name,
                        day,
                        start,
                        start + unit.duration
                    );
                    return true;
                }
            }
        }

        false
    }

    /// Candidate days for a unit: availability-filtered, then ordered so
    /// that days where the subject+section pair is not yet placed come
    /// first (spreading repeats across the week), then by ascending
    /// combined load, random tie-break.
    fn order_days<R: Rng>(
        &self,
        unit: &ClassUnit,
        availability: Option<&TeacherAvailability>,
        tracker: &ConstraintTracker,
        rng: &mut R,
    ) -> Vec<Weekday> {
        let mut keyed: Vec<(bool, u32, u32, Weekday)> = Weekday::ALL
            .iter()
            .copied()
            .filter(|&day| availability.map_or(true, |a| a.allows_day(day)))
            .map(|day| {
                (
                    tracker.pair_count(unit, day) > 0,
                    tracker.day_load(unit, day),
                    rng.random::<u32>(),
                    day,
                )
            })
            .collect();
        keyed.sort();
        keyed.into_iter().map(|(_, _, _, day)| day).collect()
    }

    /// Candidate start slots before shuffling: the explicit restriction
    /// when one is configured; otherwise the full sequence for regular
    /// teachers, or the floor-first rotation for visiting teachers.
    fn time_candidates(
        &self,
        unit: &ClassUnit,
        availability: Option<&TeacherAvailability>,
    ) -> Vec<usize> {
        if let Some(candidates) = availability.and_then(TeacherAvailability::slot_candidates) {
            return candidates;
        }
        if unit.is_regular {
            (0..SLOTS_PER_DAY).collect()
        } else {
            let floor = self.options.visiting_earliest_slot.min(SLOTS_PER_DAY);
            (floor..SLOTS_PER_DAY).chain(0..floor).collect()
        }
    }

    /// Whether one slot is admissible for the unit's teacher. With an
    /// explicit time restriction the restriction decides; otherwise
    /// visiting teachers are held to the configured floor.
    fn slot_allowed(
        &self,
        unit: &ClassUnit,
        availability: Option<&TeacherAvailability>,
        slot: usize,
    ) -> bool {
        match availability {
            Some(a) if a.restricts_slots() => a.allows_slot(slot),
            _ => unit.is_regular || slot >= self.options.visiting_earliest_slot,
        }
    }

    /// Candidate room indices: lab units are confined to lab rooms
    /// (never regular ones, even when all labs are full); theory units
    /// take any room, composed regular-first. Ordered by ascending
    /// same-day occupancy with random tie-break to spread load.
    fn order_rooms<R: Rng>(
        &self,
        unit: &ClassUnit,
        grid: &Timetable,
        day: Weekday,
        rng: &mut R,
    ) -> Vec<usize> {
        let rooms = &grid.day(day).rooms;
        let indices_of = |kind: RoomKind| {
            rooms
                .iter()
                .enumerate()
                .filter(move |(_, r)| r.room.kind == kind)
                .map(|(i, _)| i)
        };

        let candidates: Vec<usize> = match unit.kind {
            SessionKind::Lab => indices_of(RoomKind::Lab).collect(),
            SessionKind::Theory => indices_of(RoomKind::Regular)
                .chain(indices_of(RoomKind::Lab))
                .collect(),
        };

        let mut keyed: Vec<(usize, u32, usize)> = candidates
            .into_iter()
            .map(|i| (grid.occupied_count(day, i), rng.random::<u32>(), i))
            .collect();
        keyed.sort();
        keyed.into_iter().map(|(_, _, i)| i).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Cell;
    use std::collections::{HashMap, HashSet};

    fn seeded(seed: u64) -> EngineOptions {
        EngineOptions::new().with_seed(seed)
    }

    /// A dense department: shared teachers, shared sections, labs.
    fn dense_courses() -> Vec<Course> {
        vec![
            Course::new("Math", "T1", "S1")
                .with_credit_hours(3)
                .with_lab_classes(2),
            Course::new("Physics", "T2", "S1")
                .with_credit_hours(3)
                .with_lab_classes(3),
            Course::new("Chemistry", "T1", "S2").with_credit_hours(4),
            Course::new("English", "T3", "S2").with_credit_hours(2),
            Course::new("Biology", "T2", "S3")
                .with_credit_hours(3)
                .with_lab_classes(2),
            Course::new("Programming", "T4", "S3")
                .with_credit_hours(3)
                .with_lab_classes(4),
        ]
    }

    fn dense_result(seed: u64) -> TimetableResult {
        TimetableEngine::with_options(seeded(seed)).schedule(&dense_courses(), &Room::default_set())
    }

    #[test]
    fn test_stats_account_for_every_unit() {
        for seed in [1, 2, 3] {
            let result = dense_result(seed);
            assert_eq!(
                result.stats.scheduled + result.stats.unscheduled,
                result.stats.total_units
            );
            // 4 + 5 + 4 + 2 + 4 + 5 units from the dense set
            assert_eq!(result.stats.total_units, 24);
            assert_eq!(result.unscheduled.len(), result.stats.unscheduled);
        }
    }

    #[test]
    fn test_no_teacher_double_booking() {
        let result = dense_result(11);
        let mut seen = HashSet::new();
        for (day, s) in result.timetable.sessions() {
            assert!(
                seen.insert((day, s.slot, s.teacher.clone())),
                "teacher {} double-booked on {} slot {}",
                s.teacher,
                day,
                s.slot
            );
        }
    }

    #[test]
    fn test_no_section_double_booking() {
        let result = dense_result(12);
        let mut seen = HashSet::new();
        for (day, s) in result.timetable.sessions() {
            assert!(
                seen.insert((day, s.slot, s.section.clone())),
                "section {} double-booked on {} slot {}",
                s.section,
                day,
                s.slot
            );
        }
    }

    #[test]
    fn test_lab_sessions_only_in_lab_rooms() {
        let result = dense_result(13);
        for day_grid in &result.timetable.days {
            for row in &day_grid.rooms {
                for cell in &row.slots {
                    match cell {
                        Cell::Empty => {}
                        Cell::Session(s) => {
                            if s.kind == SessionKind::Lab {
                                assert_eq!(row.room.kind, RoomKind::Lab);
                            }
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn test_daily_caps_respected() {
        let result = dense_result(14);
        let mut per_teacher: HashMap<(Weekday, String), u32> = HashMap::new();
        let mut per_section: HashMap<(Weekday, String), u32> = HashMap::new();
        let mut counted_units: HashSet<(Weekday, usize)> = HashSet::new();

        for (day, s) in result.timetable.sessions() {
            // Count blocks once, not per cell
            if !counted_units.insert((day, s.unit_id)) {
                continue;
            }
            *per_teacher.entry((day, s.teacher.clone())).or_insert(0) += 1;
            *per_section.entry((day, s.section.clone())).or_insert(0) += 1;
        }
        assert!(per_teacher.values().all(|&n| n <= 4));
        assert!(per_section.values().all(|&n| n <= 6));
    }

    #[test]
    fn test_multi_slot_blocks_contiguous_same_room() {
        let result = dense_result(15);
        // Group occupied cells by unit
        let mut blocks: HashMap<usize, Vec<(Weekday, String, usize)>> = HashMap::new();
        for (day, s) in result.timetable.sessions() {
            blocks
                .entry(s.unit_id)
                .or_default()
                .push((day, s.room.clone(), s.slot));
        }
        for cells in blocks.values() {
            if cells.len() < 2 {
                continue;
            }
            assert_eq!(cells.len(), 2);
            let (day_a, room_a, slot_a) = &cells[0];
            let (day_b, room_b, slot_b) = &cells[1];
            assert_eq!(day_a, day_b);
            assert_eq!(room_a, room_b);
            assert_eq!(slot_a.abs_diff(*slot_b), 1);
        }
    }

    #[test]
    fn test_identical_seed_identical_output() {
        let a = dense_result(77);
        let b = dense_result(77);
        assert_eq!(
            serde_json::to_string(&a).unwrap(),
            serde_json::to_string(&b).unwrap()
        );

        // Text seeds reproduce the same way
        let opts = EngineOptions::new().with_text_seed("exam-week");
        let c = TimetableEngine::with_options(opts.clone())
            .schedule(&dense_courses(), &Room::default_set());
        let d = TimetableEngine::with_options(opts)
            .schedule(&dense_courses(), &Room::default_set());
        assert_eq!(
            serde_json::to_string(&c).unwrap(),
            serde_json::to_string(&d).unwrap()
        );
    }

    #[test]
    fn test_injected_rng_is_the_only_randomness() {
        use rand::rngs::SmallRng;
        use rand::SeedableRng;

        let engine = TimetableEngine::new();
        let mut rng_a = SmallRng::seed_from_u64(5);
        let mut rng_b = SmallRng::seed_from_u64(5);
        let a = engine.schedule_with_rng(&dense_courses(), &Room::default_set(), &mut rng_a);
        let b = engine.schedule_with_rng(&dense_courses(), &Room::default_set(), &mut rng_b);
        assert_eq!(
            serde_json::to_string(&a).unwrap(),
            serde_json::to_string(&b).unwrap()
        );
    }

    // ======================== End-to-end scenarios ========================

    #[test]
    fn test_three_credit_course_lands_on_three_distinct_days() {
        let courses = vec![Course::new("Algorithms", "Dr. Rahman", "CS-3A").with_credit_hours(3)];
        let result =
            TimetableEngine::with_options(seeded(21)).schedule(&courses, &Room::default_set());

        assert_eq!(result.stats.total_units, 3);
        assert_eq!(result.stats.scheduled, 3);
        let days: HashSet<Weekday> = result
            .timetable
            .sessions()
            .into_iter()
            .map(|(day, _)| day)
            .collect();
        assert_eq!(days.len(), 3, "repeat sessions should spread across days");
    }

    #[test]
    fn test_labs_without_lab_rooms_go_unscheduled() {
        let courses = vec![Course::new("Physics", "T", "S").with_lab_classes(3)];
        let rooms = vec![Room::regular("R-101"), Room::regular("R-102")];
        let result = TimetableEngine::with_options(seeded(22)).schedule(&courses, &rooms);

        // One double-block and one single lab unit, neither placeable
        assert_eq!(result.stats.total_units, 2);
        assert_eq!(result.stats.scheduled, 0);
        assert_eq!(result.unscheduled.len(), 2);
        for unit in &result.unscheduled {
            assert_eq!(unit.kind, SessionKind::Lab);
            assert_eq!(unit.teacher, "T");
            assert_eq!(unit.subject, "Physics");
        }
    }

    #[test]
    fn test_teacher_cap_one_spreads_over_five_days() {
        let courses = vec![Course::new("Math", "T1", "S1").with_credit_hours(5)];
        let options = seeded(23).with_max_per_teacher(1);
        let result =
            TimetableEngine::with_options(options).schedule(&courses, &Room::default_set());

        assert_eq!(result.stats.scheduled, 5);
        for &day in &Weekday::ALL {
            assert_eq!(result.timetable.sessions_for_teacher("T1")
                .iter()
                .filter(|(d, _)| *d == day)
                .count(), 1);
        }
    }

    #[test]
    fn test_visiting_teacher_never_before_floor() {
        let courses = vec![Course::new("Economics", "Mr. Khan", "BBA-1")
            .with_credit_hours(5)
            .visiting()];
        let result =
            TimetableEngine::with_options(seeded(24)).schedule(&courses, &Room::default_set());

        assert_eq!(result.stats.scheduled, 5);
        for (_, s) in result.timetable.sessions() {
            assert!(
                s.slot >= 2,
                "visiting teacher placed at slot {} before the 11:30 floor",
                s.slot
            );
        }
    }

    #[test]
    fn test_day_restriction_with_cap_leaves_overflow_unscheduled() {
        let availability = TeacherAvailability::new().with_days(vec![Weekday::Monday]);
        let options = seeded(25)
            .with_max_per_teacher(1)
            .with_teacher_availability("T1", availability);
        let courses = vec![Course::new("Math", "T1", "S1").with_credit_hours(2)];
        let result =
            TimetableEngine::with_options(options).schedule(&courses, &Room::default_set());

        assert_eq!(result.stats.scheduled, 1);
        assert_eq!(result.stats.unscheduled, 1);
        let sessions = result.timetable.sessions();
        assert_eq!(sessions.len(), 1);
        assert_eq!(sessions[0].0, Weekday::Monday);
        // The unplaced unit keeps its identifying detail
        assert_eq!(result.unscheduled[0].teacher, "T1");
        assert_eq!(result.unscheduled[0].kind, SessionKind::Theory);
    }

    // ======================== Other behavior ========================

    #[test]
    fn test_empty_room_slice_falls_back_to_defaults() {
        let courses = vec![Course::new("Math", "T1", "S1").with_credit_hours(1)];
        let result = TimetableEngine::with_options(seeded(31)).schedule(&courses, &[]);
        assert_eq!(result.stats.scheduled, 1);
        assert_eq!(result.timetable.room_count(), Room::default_set().len());
    }

    #[test]
    fn test_request_defaults_rooms() {
        let request = ScheduleRequest::new(vec![
            Course::new("Math", "T1", "S1").with_credit_hours(2)
        ])
        .with_options(seeded(32));
        let result = TimetableEngine::new().schedule_request(&request);
        assert_eq!(result.stats.scheduled, 2);
    }

    #[test]
    fn test_empty_course_list() {
        let result = TimetableEngine::with_options(seeded(33)).schedule(&[], &Room::default_set());
        assert_eq!(result.stats.total_units, 0);
        assert!(result.is_complete());
        assert!(result.timetable.sessions().is_empty());
    }

    #[test]
    fn test_explicit_window_bounds_placements() {
        let availability = TeacherAvailability::new().with_window(3, 5);
        let options = seeded(34).with_teacher_availability("T1", availability);
        let courses = vec![Course::new("Math", "T1", "S1").with_credit_hours(4)];
        let result =
            TimetableEngine::with_options(options).schedule(&courses, &Room::default_set());

        assert_eq!(result.stats.scheduled, 4);
        for (_, s) in result.timetable.sessions() {
            assert!((3..=5).contains(&s.slot));
        }
    }

    #[test]
    fn test_window_too_narrow_for_double_block() {
        // A 2-slot lab cannot fit a single-slot window
        let availability = TeacherAvailability::new().with_window(6, 6);
        let options = seeded(35).with_teacher_availability("T1", availability);
        let courses = vec![Course::new("Physics", "T1", "S1").with_lab_classes(2)];
        let result =
            TimetableEngine::with_options(options).schedule(&courses, &Room::default_set());

        assert_eq!(result.stats.scheduled, 0);
        assert_eq!(result.unscheduled.len(), 1);
        assert_eq!(result.unscheduled[0].duration, 2);
    }

    #[test]
    fn test_double_block_fits_two_slot_window() {
        let availability = TeacherAvailability::new().with_window(5, 6);
        let options = seeded(36).with_teacher_availability("T1", availability);
        let courses = vec![Course::new("Physics", "T1", "S1").with_lab_classes(2)];
        let result =
            TimetableEngine::with_options(options).schedule(&courses, &Room::default_set());

        assert_eq!(result.stats.scheduled, 1);
        let sessions = result.timetable.sessions();
        let slots: HashSet<usize> = sessions.iter().map(|(_, s)| s.slot).collect();
        assert_eq!(slots, HashSet::from([5, 6]));
    }

    #[test]
    fn test_availability_overrides_visiting_floor() {
        // Explicit early window lifts the visiting default
        let availability = TeacherAvailability::new().with_window(0, 1);
        let options = seeded(37).with_teacher_availability("Mr. Khan", availability);
        let courses = vec![Course::new("Economics", "Mr. Khan", "S1")
            .with_credit_hours(2)
            .visiting()];
        let result =
            TimetableEngine::with_options(options).schedule(&courses, &Room::default_set());

        assert_eq!(result.stats.scheduled, 2);
        for (_, s) in result.timetable.sessions() {
            assert!(s.slot <= 1);
        }
    }

    #[test]
    fn test_day_only_restriction_keeps_visiting_floor() {
        let availability = TeacherAvailability::new().with_days(vec![Weekday::Tuesday]);
        let options = seeded(38).with_teacher_availability("Mr. Khan", availability);
        let courses = vec![Course::new("Economics", "Mr. Khan", "S1")
            .with_credit_hours(2)
            .visiting()];
        let result =
            TimetableEngine::with_options(options).schedule(&courses, &Room::default_set());

        assert_eq!(result.stats.scheduled, 2);
        for (day, s) in result.timetable.sessions() {
            assert_eq!(day, Weekday::Tuesday);
            assert!(s.slot >= 2);
        }
    }

    #[test]
    fn test_theory_may_use_lab_rooms() {
        // Only lab rooms exist; theory still places
        let rooms = vec![Room::lab("Lab-1")];
        let courses = vec![Course::new("Math", "T1", "S1").with_credit_hours(2)];
        let result = TimetableEngine::with_options(seeded(39)).schedule(&courses, &rooms);
        assert_eq!(result.stats.scheduled, 2);
    }

    #[test]
    fn test_same_subject_section_spread_across_days() {
        // 5 repeats of one subject+section: with free capacity everywhere
        // each lands on its own day before any day takes a second one
        let courses = vec![Course::new("Math", "T1", "S1").with_credit_hours(5)];
        let result =
            TimetableEngine::with_options(seeded(40)).schedule(&courses, &Room::default_set());

        assert_eq!(result.stats.scheduled, 5);
        let days: HashSet<Weekday> = result
            .timetable
            .sessions()
            .into_iter()
            .map(|(day, _)| day)
            .collect();
        assert_eq!(days.len(), 5);
    }

    #[test]
    fn test_section_cap_limits_daily_sessions() {
        // 10 one-credit courses for one section, cap 2/day → at most
        // 2 per day can place even though teachers are all distinct
        let courses: Vec<Course> = (0..10)
            .map(|i| Course::new(format!("Sub{i}"), format!("T{i}"), "S1").with_credit_hours(1))
            .collect();
        let options = seeded(41).with_max_per_section(2);
        let result =
            TimetableEngine::with_options(options).schedule(&courses, &Room::default_set());

        assert_eq!(result.stats.total_units, 10);
        assert_eq!(result.stats.scheduled, 10);
        for &day in &Weekday::ALL {
            let count = result
                .timetable
                .sessions_for_section("S1")
                .iter()
                .filter(|(d, _)| *d == day)
                .count();
            assert!(count <= 2);
        }
    }
}
