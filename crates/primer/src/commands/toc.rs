//! `primer toc` command implementation.

use std::io::Write;

use clap::Args;
use primer_renderer::{TocEntry, build_toc};

use crate::error::CliError;

/// Arguments for the toc command.
#[derive(Args)]
pub(crate) struct TocArgs {
    /// Print full in-page links (`#slug`) instead of bare slugs.
    #[arg(long)]
    links: bool,
}

impl TocArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let registry = primer_content::registry();
        let toc = build_toc(&registry);

        let mut stdout = std::io::stdout().lock();
        for entry in &toc {
            writeln!(stdout, "{}", format_line(entry, self.links))?;
        }
        stdout.flush()?;
        Ok(())
    }
}

fn format_line(entry: &TocEntry, links: bool) -> String {
    let target = if links { entry.href() } else { entry.slug.clone() };
    format!("{target}\t{}", entry.title)
}
