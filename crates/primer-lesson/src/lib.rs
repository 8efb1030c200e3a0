//! Lesson model for the persistent collections primer.
//!
//! A tutorial page is a [`Registry`] of [`Lesson`]s. Each lesson carries
//! markdown prose and optionally:
//! - an anchor title, which makes it addressable and listed in the table of contents
//! - a [`Snippet`], a runnable demonstration whose result is shown next to the prose
//!
//! Anchors are turned into link targets by [`slugify`], the one slug scheme
//! shared by every consumer of the registry.
//!
//! # Example
//!
//! ```
//! use primer_lesson::{Lesson, Registry, Snippet};
//!
//! let registry = Registry::new([
//!     Lesson::prose("Intro"),
//!     Lesson::anchored_demo(
//!         "Lists",
//!         "## Lists",
//!         Snippet::new(|| vec![1]).verify(|v: &Vec<i32>| v.len() == 1),
//!     ),
//! ]);
//!
//! let entry = registry.find_by_slug("lists").unwrap();
//! let evaluation = entry.lesson().snippet().unwrap().evaluate().unwrap();
//! assert_eq!(evaluation.signal(), Some(true));
//! ```

mod lesson;
mod registry;
mod slug;
mod snippet;

pub use lesson::Lesson;
pub use registry::{DuplicateSlug, Entry, LessonKey, Registry};
pub use slug::slugify;
pub use snippet::{Demo, Evaluation, Snippet, SnippetError};
