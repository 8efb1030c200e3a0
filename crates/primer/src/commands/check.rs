//! `primer check` command implementation.

use std::path::PathBuf;

use clap::Args;
use primer_config::{CliSettings, Config};
use primer_lesson::Registry;
use primer_renderer::{RenderedLesson, compose};

use super::{page_settings, prose_renderer};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the check command.
#[derive(Args)]
pub(crate) struct CheckArgs {
    /// Path to configuration file (default: auto-discover primer.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable verbose output (show snippet logs).
    #[arg(short, long)]
    pub verbose: bool,
}

impl CheckArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let config = Config::load(self.config.as_deref(), Some(&CliSettings::default()))?;

        let registry = primer_content::registry();
        output.highlight(&format!("Checking {} lessons", registry.len()));
        let page = compose(&page_settings(&config), &registry, &prose_renderer(&config));

        for (label, lesson) in labelled(&registry, &page.lessons) {
            output.outcome(&label, &lesson.outcome);
        }

        let summary = page.summary();
        output.summary(&summary);

        if summary.is_clean() {
            Ok(())
        } else {
            Err(CliError::Validation(format!(
                "{} lessons failed verification, {} failed to evaluate",
                summary.failed, summary.errors
            )))
        }
    }
}

/// Pair each rendered lesson with a label naming its key and enclosing section.
fn labelled<'a>(
    registry: &Registry,
    lessons: &'a [RenderedLesson],
) -> Vec<(String, &'a RenderedLesson)> {
    let mut section: Option<&str> = None;
    registry
        .iter()
        .zip(lessons)
        .map(|(entry, lesson)| {
            if let Some(anchor) = entry.lesson().anchor() {
                section = Some(anchor);
            }
            let label = match section {
                Some(anchor) => format!("{} ({anchor})", entry.key()),
                None => entry.key().to_string(),
            };
            (label, lesson)
        })
        .collect()
}
