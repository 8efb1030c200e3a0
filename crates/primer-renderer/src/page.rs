//! Full page composition.
//!
//! Sequences the header, the table of contents and every rendered lesson
//! into a single HTML5 document.

use std::fmt::Write;

use primer_lesson::Registry;

use crate::lesson::{LessonRenderer, Outcome, RenderedLesson};
use crate::prose::ProseRenderer;
use crate::toc::{TocEntry, build_toc, render_toc};
use crate::util::escape_html;

/// Attribution link shown under the page title.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Byline {
    pub text: String,
    pub url: String,
}

/// Static header content of the page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageSettings {
    pub title: String,
    pub byline: Option<Byline>,
    /// Document language (`<html lang>`).
    pub lang: String,
    /// Optional stylesheet href.
    pub stylesheet: Option<String>,
}

impl Default for PageSettings {
    fn default() -> Self {
        Self {
            title: "Persistent Collections Tutorial and Sandbox".to_owned(),
            byline: None,
            lang: "en".to_owned(),
            stylesheet: None,
        }
    }
}

/// Counts of lesson outcomes on a composed page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PageSummary {
    pub lessons: usize,
    pub anchored: usize,
    pub shown: usize,
    pub passed: usize,
    pub failed: usize,
    pub errors: usize,
}

impl PageSummary {
    /// Whether every verifier passed and every snippet evaluated.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.failed == 0 && self.errors == 0
    }
}

/// A composed document.
#[derive(Clone, Debug)]
pub struct Page {
    pub html: String,
    pub toc: Vec<TocEntry>,
    pub lessons: Vec<RenderedLesson>,
}

impl Page {
    #[must_use]
    pub fn summary(&self) -> PageSummary {
        let mut summary = PageSummary {
            lessons: self.lessons.len(),
            anchored: self.toc.len(),
            ..PageSummary::default()
        };
        for lesson in &self.lessons {
            match lesson.outcome {
                Outcome::NoSnippet => {}
                Outcome::Shown => summary.shown += 1,
                Outcome::Passed => summary.passed += 1,
                Outcome::Failed => summary.failed += 1,
                Outcome::Error(_) => summary.errors += 1,
            }
        }
        summary
    }
}

/// Render the registry into a complete HTML document.
pub fn compose<P: ProseRenderer>(
    settings: &PageSettings,
    registry: &Registry,
    prose: &P,
) -> Page {
    for duplicate in registry.duplicate_slugs() {
        tracing::warn!(
            slug = %duplicate.slug,
            anchors = ?duplicate.anchors,
            "Anchors share a permalink target"
        );
    }

    let toc = build_toc(registry);
    let renderer = LessonRenderer::new(prose);
    let lessons: Vec<RenderedLesson> = registry.iter().map(|e| renderer.render(e)).collect();

    let body_len: usize = lessons.iter().map(|l| l.html.len()).sum();
    let mut html = String::with_capacity(body_len + 4096);

    render_head(&mut html, settings);
    html.push_str("<body>\n<div class=\"App\">\n");
    render_header(&mut html, settings);
    render_toc(&mut html, &toc);
    html.push_str("<article>\n");
    for lesson in &lessons {
        html.push_str(&lesson.html);
    }
    html.push_str("</article>\n</div>\n</body>\n</html>\n");

    tracing::debug!(
        lessons = lessons.len(),
        toc_entries = toc.len(),
        bytes = html.len(),
        "Page composed"
    );

    Page { html, toc, lessons }
}

fn render_head(html: &mut String, settings: &PageSettings) {
    let _ = writeln!(
        html,
        "<!DOCTYPE html>\n<html lang=\"{}\">\n<head>",
        escape_html(&settings.lang)
    );
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    let _ = writeln!(html, "<title>{}</title>", escape_html(&settings.title));
    if let Some(href) = &settings.stylesheet {
        let _ = writeln!(
            html,
            "<link rel=\"stylesheet\" href=\"{}\">",
            escape_html(href)
        );
    }
    html.push_str("</head>\n");
}

fn render_header(html: &mut String, settings: &PageSettings) {
    html.push_str("<header class=\"App-header\">\n");
    let _ = writeln!(html, "<h1>{}</h1>", escape_html(&settings.title));
    if let Some(byline) = &settings.byline {
        let _ = writeln!(
            html,
            "<h2 class=\"subtitle\">Brought to you by \
             <a href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">{}</a></h2>",
            escape_html(&byline.url),
            escape_html(&byline.text),
        );
    }
    html.push_str("</header>\n");
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use primer_lesson::{Lesson, Snippet};

    use super::*;
    use crate::lesson::{FAILURE_GLYPH, SUCCESS_GLYPH};
    use crate::prose::CmarkProse;

    fn scenario() -> Registry {
        Registry::new([
            Lesson::prose("Intro"),
            Lesson::anchored_demo(
                "Lists",
                "## Lists",
                Snippet::new(|| vec![1]).verify(|v: &Vec<i32>| v.len() == 1),
            ),
        ])
    }

    #[test]
    fn test_end_to_end_scenario() {
        let registry = scenario();
        let page = compose(&PageSettings::default(), &registry, &CmarkProse::new());

        assert_eq!(
            page.toc,
            vec![TocEntry {
                title: "Lists".to_owned(),
                slug: "lists".to_owned(),
            }]
        );
        assert_eq!(page.lessons.len(), 2);
        assert_eq!(page.html.matches("<section ").count(), 2);

        let second = &page.lessons[1];
        assert_eq!(second.slug.as_deref(), Some(page.toc[0].slug.as_str()));
        assert_eq!(second.outcome, Outcome::Passed);
        assert!(second.html.contains(&format!("id=\"{}\"", page.toc[0].slug)));
        assert!(second.html.contains(SUCCESS_GLYPH));
        assert!(page.html.contains(&format!("href=\"{}\"", page.toc[0].href())));

        assert_eq!(page.lessons[0].outcome, Outcome::NoSnippet);
        assert!(!page.lessons[0].html.contains("anchor-links"));
    }

    #[test]
    fn test_compose_is_idempotent() {
        let registry = scenario();
        let settings = PageSettings::default();
        let first = compose(&settings, &registry, &CmarkProse::new());
        let second = compose(&settings, &registry, &CmarkProse::new());
        assert_eq!(first.html, second.html);
    }

    #[test]
    fn test_sections_follow_toc() {
        let page = compose(&PageSettings::default(), &scenario(), &CmarkProse::new());
        let nav = page.html.find("<nav class=\"toc\">").unwrap();
        let article = page.html.find("<article>").unwrap();
        let header = page.html.find("<header").unwrap();
        assert!(header < nav && nav < article);
    }

    #[test]
    fn test_header_with_byline() {
        let settings = PageSettings {
            title: "Immutable <Tutorial>".to_owned(),
            byline: Some(Byline {
                text: "untangled.io".to_owned(),
                url: "http://untangled.io/".to_owned(),
            }),
            lang: "en".to_owned(),
            stylesheet: Some("style.css".to_owned()),
        };
        let page = compose(&settings, &Registry::default(), &CmarkProse::new());
        assert!(page.html.contains("<title>Immutable &lt;Tutorial&gt;</title>"));
        assert!(page.html.contains("<h1>Immutable &lt;Tutorial&gt;</h1>"));
        assert!(page.html.contains(
            "<a href=\"http://untangled.io/\" target=\"_blank\" rel=\"noopener noreferrer\">untangled.io</a>"
        ));
        assert!(page.html.contains("<link rel=\"stylesheet\" href=\"style.css\">"));
    }

    #[test]
    fn test_header_without_byline() {
        let page = compose(&PageSettings::default(), &Registry::default(), &CmarkProse::new());
        assert!(!page.html.contains("subtitle"));
        assert!(!page.html.contains("stylesheet"));
        assert!(page.html.starts_with("<!DOCTYPE html>\n<html lang=\"en\">"));
    }

    #[test]
    fn test_error_is_isolated() {
        let registry = Registry::new([
            Lesson::demo("broken", Snippet::new(|| -> i32 { panic!("bad lesson") })),
            Lesson::demo("fine", Snippet::new(|| 2).expect(2)),
        ]);
        let page = compose(&PageSettings::default(), &registry, &CmarkProse::new());
        let summary = page.summary();
        assert_eq!(summary.errors, 1);
        assert_eq!(summary.passed, 1);
        assert!(!summary.is_clean());
        assert!(page.html.contains("<p>fine</p>"));
    }

    #[test]
    fn test_summary_counts() {
        let registry = Registry::new([
            Lesson::anchored("A", "a"),
            Lesson::demo("shown", Snippet::new(|| 1)),
            Lesson::demo("passed", Snippet::new(|| 1).expect(1)),
            Lesson::demo("failed", Snippet::new(|| 1).expect(2)),
        ]);
        let page = compose(&PageSettings::default(), &registry, &CmarkProse::new());
        assert_eq!(
            page.summary(),
            PageSummary {
                lessons: 4,
                anchored: 1,
                shown: 1,
                passed: 1,
                failed: 1,
                errors: 0,
            }
        );
    }

    #[test]
    fn test_colliding_anchors_still_render() {
        let registry = Registry::new([
            Lesson::anchored("Maps: Merge", "first"),
            Lesson::anchored("Maps Merge", "second"),
        ]);
        let page = compose(&PageSettings::default(), &registry, &CmarkProse::new());
        assert_eq!(page.toc.len(), 2);
        assert_eq!(page.html.matches("id=\"maps-merge\"").count(), 2);
    }

    #[test]
    fn test_tutorial_links_resolve() {
        let registry = primer_content::registry();
        let page = compose(&PageSettings::default(), &registry, &CmarkProse::new());

        assert_eq!(page.toc.len(), registry.anchored().count());
        for entry in &page.toc {
            assert!(
                page.html.contains(&format!("href=\"{}\"", entry.href())),
                "missing TOC link for {}",
                entry.title
            );
            assert_eq!(
                page.html.matches(&format!("id=\"{}\"", entry.slug)).count(),
                1,
                "{} should have exactly one target",
                entry.title
            );
        }
    }

    #[test]
    fn test_tutorial_renders_clean() {
        let page = compose(
            &PageSettings::default(),
            &primer_content::registry(),
            &CmarkProse::new(),
        );
        let summary = page.summary();
        let broken: Vec<_> = page
            .lessons
            .iter()
            .filter(|l| matches!(l.outcome, Outcome::Failed | Outcome::Error(_)))
            .map(|l| l.key.to_string())
            .collect();
        assert_eq!(broken, Vec::<String>::new());
        assert!(summary.is_clean());
        assert!(!page.html.contains(FAILURE_GLYPH));
    }
}
