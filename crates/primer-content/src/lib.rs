//! Lesson content for the persistent collections primer.
//!
//! Lessons are grouped by topic and concatenated by [`registry`] in a fixed
//! order: intro, lists, maps, sets, misc. Every demonstration runs against
//! the [`im`] crate.

mod intro;
mod lists;
mod maps;
mod misc;
mod sets;

use primer_lesson::{Lesson, Registry};

/// Topic groups in display order.
pub fn groups() -> [Vec<Lesson>; 5] {
    [
        intro::lessons(),
        lists::lessons(),
        maps::lessons(),
        sets::lessons(),
        misc::lessons(),
    ]
}

/// Build the full tutorial registry.
pub fn registry() -> Registry {
    Registry::from_groups(groups())
}
