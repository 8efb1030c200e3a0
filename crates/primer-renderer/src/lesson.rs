//! Rendering of a single lesson section.

use std::fmt::Write;

use primer_lesson::{Entry, LessonKey, Snippet};

use crate::prose::ProseRenderer;
use crate::util::escape_html;

/// Shown next to a result whose verifier returned exactly `true`.
pub const SUCCESS_GLYPH: &str = "✅";
/// Shown next to a result whose verifier returned anything else.
pub const FAILURE_GLYPH: &str = "❌";

/// What a lesson's snippet block ended up showing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The lesson has no snippet.
    NoSnippet,
    /// The snippet ran without a verifier.
    Shown,
    /// The verifier returned exactly `true`.
    Passed,
    /// The verifier returned anything else.
    Failed,
    /// The snippet could not be evaluated; the message is shown in its place.
    Error(String),
}

/// One rendered lesson section.
#[derive(Clone, Debug)]
pub struct RenderedLesson {
    pub key: LessonKey,
    /// Permalink target, present for anchored lessons.
    pub slug: Option<String>,
    pub outcome: Outcome,
    pub html: String,
}

/// Renders registry entries into HTML sections.
pub struct LessonRenderer<'a, P: ProseRenderer> {
    prose: &'a P,
}

impl<'a, P: ProseRenderer> LessonRenderer<'a, P> {
    pub fn new(prose: &'a P) -> Self {
        Self { prose }
    }

    /// Render one entry: permalink block, prose, snippet result, separator.
    pub fn render(&self, entry: &Entry) -> RenderedLesson {
        let lesson = entry.lesson();
        let key = entry.key();
        let slug = lesson.slug();

        let mut html = String::with_capacity(lesson.text().len() * 2 + 256);
        let _ = writeln!(html, "<section data-lesson=\"{key}\">");

        if let Some(slug) = &slug {
            render_permalink(&mut html, slug);
        }

        html.push_str(&self.prose.render(lesson.text()));

        let outcome = match lesson.snippet() {
            Some(snippet) => render_snippet(&mut html, key, snippet),
            None => Outcome::NoSnippet,
        };

        html.push_str("<hr>\n</section>\n");

        RenderedLesson {
            key,
            slug,
            outcome,
            html,
        }
    }
}

/// Render the anchor target plus "back to top" link.
fn render_permalink(html: &mut String, slug: &str) {
    let slug = escape_html(slug);
    html.push_str("<div class=\"anchor-links\">");
    let _ = write!(
        html,
        "<a id=\"{slug}\" name=\"{slug}\" href=\"#{slug}\">Permalink</a>"
    );
    html.push_str("<span> | </span><a href=\"#\">Top</a></div>\n");
}

/// Evaluate the snippet and render its result, or an error marker.
fn render_snippet(html: &mut String, key: LessonKey, snippet: &Snippet) -> Outcome {
    let evaluation = match snippet.evaluate() {
        Ok(evaluation) => evaluation,
        Err(e) => {
            tracing::warn!(lesson = %key, error = %e, "Snippet failed to evaluate");
            let message = e.to_string();
            let _ = writeln!(
                html,
                "<div class=\"lesson-error\" role=\"alert\">{}</div>",
                escape_html(&message)
            );
            return Outcome::Error(message);
        }
    };
    tracing::debug!(lesson = %key, signal = ?evaluation.signal(), "Snippet evaluated");

    let outcome = match evaluation.signal() {
        None => Outcome::Shown,
        Some(true) => Outcome::Passed,
        Some(false) => Outcome::Failed,
    };

    html.push_str("<div class=\"snippet-result\">\n<span>Result:");
    match outcome {
        Outcome::Passed => {
            let _ = write!(html, " {SUCCESS_GLYPH}");
        }
        Outcome::Failed => {
            let _ = write!(html, " {FAILURE_GLYPH}");
        }
        _ => {}
    }
    html.push_str("</span>\n");
    let _ = writeln!(
        html,
        "<pre><code class=\"language-json\">{}</code></pre>",
        escape_html(&evaluation.pretty())
    );
    html.push_str("</div>\n");

    outcome
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use primer_lesson::{Lesson, Registry};

    use super::*;
    use crate::prose::CmarkProse;

    /// Wraps text in a marker so tests can assert on structure.
    struct Echo;

    impl ProseRenderer for Echo {
        fn render(&self, markdown: &str) -> String {
            format!("<prose>{markdown}</prose>\n")
        }
    }

    fn render_one(lesson: Lesson) -> RenderedLesson {
        let registry = Registry::new([lesson]);
        let entry = registry.iter().next().unwrap();
        LessonRenderer::new(&Echo).render(entry)
    }

    #[test]
    fn test_prose_only_lesson() {
        let rendered = render_one(Lesson::prose("Intro"));
        assert_eq!(
            rendered.html,
            "<section data-lesson=\"lesson-0\">\n<prose>Intro</prose>\n<hr>\n</section>\n"
        );
        assert_eq!(rendered.slug, None);
        assert_eq!(rendered.outcome, Outcome::NoSnippet);
    }

    #[test]
    fn test_anchored_lesson_has_permalink() {
        let rendered = render_one(Lesson::anchored("Maps - Merge", "## Maps"));
        assert_eq!(rendered.slug.as_deref(), Some("maps-merge"));
        assert!(rendered.html.contains(
            "<a id=\"maps-merge\" name=\"maps-merge\" href=\"#maps-merge\">Permalink</a>"
        ));
        assert!(rendered.html.contains("<a href=\"#\">Top</a>"));
        assert!(!rendered.html.contains("snippet-result"));
    }

    #[test]
    fn test_unanchored_lesson_has_no_permalink() {
        let rendered = render_one(Lesson::demo("text", Snippet::new(|| 1)));
        assert!(!rendered.html.contains("anchor-links"));
    }

    #[test]
    fn test_unverified_snippet_shows_value_without_glyph() {
        let rendered = render_one(Lesson::demo("text", Snippet::new(|| vec![1, 2, 3])));
        assert_eq!(rendered.outcome, Outcome::Shown);
        assert!(rendered.html.contains("[\n  1,\n  2,\n  3\n]"));
        assert!(rendered.html.contains("<span>Result:</span>"));
        assert!(!rendered.html.contains(SUCCESS_GLYPH));
        assert!(!rendered.html.contains(FAILURE_GLYPH));
    }

    #[test]
    fn test_effect_snippet_shows_empty_block() {
        let rendered = render_one(Lesson::demo("text", Snippet::effect(|| {})));
        assert_eq!(rendered.outcome, Outcome::Shown);
        assert!(rendered.html.contains(
            "<span>Result:</span>\n<pre><code class=\"language-json\"></code></pre>"
        ));
        assert!(!rendered.html.contains("null"));
    }

    #[test]
    fn test_passing_verifier_shows_success_glyph() {
        let rendered = render_one(Lesson::demo(
            "text",
            Snippet::new(|| vec![1, 2, 3]).verify(|v: &Vec<i32>| v.len() == 3),
        ));
        assert_eq!(rendered.outcome, Outcome::Passed);
        assert!(rendered.html.contains("<span>Result: ✅</span>"));
    }

    #[test]
    fn test_failing_verifier_shows_failure_glyph() {
        let rendered = render_one(Lesson::demo(
            "text",
            Snippet::new(|| vec![1, 2]).verify(|v: &Vec<i32>| v.len() == 3),
        ));
        assert_eq!(rendered.outcome, Outcome::Failed);
        assert!(rendered.html.contains("<span>Result: ❌</span>"));
    }

    #[test]
    fn test_truthy_outcome_is_failure() {
        let rendered = render_one(Lesson::demo(
            "text",
            Snippet::new(|| vec![1, 2, 3]).verify(|_: &Vec<i32>| 1),
        ));
        assert_eq!(rendered.outcome, Outcome::Failed);
        assert!(rendered.html.contains(FAILURE_GLYPH));
        assert!(!rendered.html.contains(SUCCESS_GLYPH));
    }

    #[test]
    fn test_snippet_error_renders_marker() {
        let rendered = render_one(Lesson::anchored_demo(
            "Broken",
            "text",
            Snippet::new(|| -> Vec<i32> { panic!("boom") }),
        ));
        assert_eq!(
            rendered.outcome,
            Outcome::Error("Snippet panicked: boom".to_owned())
        );
        assert!(rendered.html.contains(
            "<div class=\"lesson-error\" role=\"alert\">Snippet panicked: boom</div>"
        ));
        assert!(rendered.html.contains("id=\"broken\""));
        assert!(rendered.html.ends_with("<hr>\n</section>\n"));
    }

    #[test]
    fn test_value_is_escaped() {
        let rendered = render_one(Lesson::demo("text", Snippet::new(|| "<b>")));
        assert!(rendered.html.contains("&quot;&lt;b&gt;&quot;"));
    }

    #[test]
    fn test_renders_markdown_with_cmark() {
        let registry = Registry::new([Lesson::anchored("Lists", "## Lists")]);
        let entry = registry.iter().next().unwrap();
        let rendered = LessonRenderer::new(&CmarkProse::new()).render(entry);
        assert!(rendered.html.contains("<h2>Lists</h2>"));
    }
}
