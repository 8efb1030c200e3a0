//! Table of contents built from anchored lessons.

use std::fmt::Write;

use primer_lesson::Registry;

use crate::util::escape_html;

/// A table of contents entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TocEntry {
    /// Anchor title as written by the author.
    pub title: String,
    /// Fragment identifier, identical to the lesson's permalink id.
    pub slug: String,
}

impl TocEntry {
    /// In-page link target.
    #[must_use]
    pub fn href(&self) -> String {
        format!("#{}", self.slug)
    }
}

/// List anchored lessons in registry order.
pub fn build_toc(registry: &Registry) -> Vec<TocEntry> {
    registry
        .anchored()
        .filter_map(|entry| {
            let lesson = entry.lesson();
            Some(TocEntry {
                title: lesson.anchor()?.to_owned(),
                slug: lesson.slug()?,
            })
        })
        .collect()
}

/// Render the table of contents as a navigation list.
pub fn render_toc(html: &mut String, toc: &[TocEntry]) {
    html.push_str("<nav class=\"toc\">\n<ul>\n");
    for entry in toc {
        let _ = writeln!(
            html,
            "<li><a href=\"{}\">{}</a></li>",
            escape_html(&entry.href()),
            escape_html(&entry.title),
        );
    }
    html.push_str("</ul>\n</nav>\n");
}
