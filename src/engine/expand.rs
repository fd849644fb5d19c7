//! Unit expansion: courses → atomic class units.
//!
//! Each course implies a number of weekly sessions; the expander emits
//! one [`ClassUnit`] per session. Theory sessions are always one slot.
//! Lab sessions prefer contiguous double-blocks: `lab_count / 2`
//! two-slot units, plus a single one-slot unit when the count is odd.
//!
//! There is no failure mode here — a course implying zero sessions
//! simply yields no units.

use crate::models::{ClassUnit, Course, SessionKind};

/// Expands a course list into the flat unit list the allocator consumes.
///
/// Unit IDs are sequential in emission order; every unit carries the
/// index of its originating course.
pub fn expand_courses(courses: &[Course]) -> Vec<ClassUnit> {
    let mut units = Vec::new();

    for (course_index, course) in courses.iter().enumerate() {
        for _ in 0..course.weekly_theory_sessions() {
            units.push(make_unit(course, course_index, units.len(), SessionKind::Theory, 1));
        }

        let lab_count = course.weekly_lab_sessions();
        for _ in 0..lab_count / 2 {
            units.push(make_unit(course, course_index, units.len(), SessionKind::Lab, 2));
        }
        if lab_count % 2 == 1 {
            units.push(make_unit(course, course_index, units.len(), SessionKind::Lab, 1));
        }
    }

    units
}

fn make_unit(
    course: &Course,
    course_index: usize,
    id: usize,
    kind: SessionKind,
    duration: usize,
) -> ClassUnit {
    ClassUnit {
        id,
        teacher: course.teacher.clone(),
        subject: course.subject.clone(),
        section: course.section.clone(),
        course_index,
        kind,
        duration,
        is_regular: course.is_regular,
    }
}
