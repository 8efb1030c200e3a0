//! Terminal reporting for lesson outcomes and page summaries.
//!
//! Everything goes to stderr so stdout stays free for page and TOC output.

use console::{Style, Term};
use primer_renderer::{FAILURE_GLYPH, Outcome, PageSummary, SUCCESS_GLYPH};

/// Marks a lesson whose snippet could not be evaluated.
const ERROR_GLYPH: &str = "💥";

pub(crate) struct Output {
    term: Term,
    green: Style,
    yellow: Style,
    red: Style,
    cyan_bold: Style,
}

impl Output {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self {
            term: Term::stderr(),
            green: Style::new().green(),
            yellow: Style::new().yellow(),
            red: Style::new().red(),
            cyan_bold: Style::new().cyan().bold(),
        }
    }

    pub(crate) fn info(&self, msg: &str) {
        let _ = self.term.write_line(msg);
    }

    pub(crate) fn error(&self, msg: &str) {
        self.styled(&self.red, msg);
    }

    pub(crate) fn highlight(&self, msg: &str) {
        self.styled(&self.cyan_bold, msg);
    }

    /// Report one lesson. Lessons without a verdict print nothing.
    pub(crate) fn outcome(&self, label: &str, outcome: &Outcome) {
        let Some(line) = outcome_line(label, outcome) else {
            return;
        };
        let style = if matches!(outcome, Outcome::Passed) {
            &self.green
        } else {
            &self.red
        };
        self.styled(style, &line);
    }

    /// Report page totals: green when clean, yellow otherwise.
    pub(crate) fn summary(&self, summary: &PageSummary) {
        let style = if summary.is_clean() {
            &self.green
        } else {
            &self.yellow
        };
        self.styled(style, &summary_line(summary));
    }

    fn styled(&self, style: &Style, msg: &str) {
        let _ = self.term.write_line(&style.apply_to(msg).to_string());
    }
}

fn outcome_line(label: &str, outcome: &Outcome) -> Option<String> {
    match outcome {
        Outcome::Passed => Some(format!("{SUCCESS_GLYPH} {label}")),
        Outcome::Failed => Some(format!("{FAILURE_GLYPH} {label}")),
        Outcome::Error(message) => Some(format!("{ERROR_GLYPH} {label}: {message}")),
        Outcome::NoSnippet | Outcome::Shown => None,
    }
}

fn summary_line(summary: &PageSummary) -> String {
    format!(
        "{} lessons in {} sections: {} passed, {} failed, {} errors, {} unverified",
        summary.lessons,
        summary.anchored,
        summary.passed,
        summary.failed,
        summary.errors,
        summary.shown
    )
}
