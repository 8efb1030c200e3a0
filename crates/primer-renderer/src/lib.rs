//! Lesson, table of contents and page rendering for the primer.
//!
//! The pipeline is read-only over a [`Registry`](primer_lesson::Registry):
//! - [`build_toc`] lists anchored lessons as in-page links
//! - [`LessonRenderer`] turns each entry into an HTML section
//! - [`compose`] sequences the header, table of contents and sections into one document
//!
//! Markdown conversion sits behind the [`ProseRenderer`] trait; [`CmarkProse`]
//! is the `pulldown-cmark` implementation.
//!
//! # Example
//!
//! ```
//! use primer_lesson::{Lesson, Registry, Snippet};
//! use primer_renderer::{CmarkProse, PageSettings, compose};
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
//! let page = compose(&PageSettings::default(), &registry, &CmarkProse::default());
//! assert_eq!(page.toc.len(), 1);
//! assert!(page.html.contains(r##"href="#lists""##));
//! ```

mod lesson;
mod page;
mod prose;
mod toc;
mod util;

pub use lesson::{FAILURE_GLYPH, LessonRenderer, Outcome, RenderedLesson, SUCCESS_GLYPH};
pub use page::{Byline, Page, PageSettings, PageSummary, compose};
pub use prose::{CmarkProse, ProseRenderer};
pub use toc::{TocEntry, build_toc, render_toc};
pub use util::escape_html;
