//! `primer build` command implementation.

use std::io::Write;
use std::path::PathBuf;

use clap::Args;
use primer_config::{CliSettings, Config};
use primer_renderer::compose;

use super::{page_settings, prose_renderer};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the build command.
#[derive(Args)]
pub(crate) struct BuildArgs {
    /// Output file for the page (default: config `output.path`, else stdout).
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Page title (overrides config).
    #[arg(long, env = "PRIMER_TITLE")]
    title: Option<String>,

    /// Disable GitHub Flavored Markdown extensions.
    #[arg(long)]
    no_gfm: bool,

    /// Path to configuration file (default: auto-discover primer.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable verbose output (show snippet logs).
    #[arg(short, long)]
    pub verbose: bool,
}

impl BuildArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            title: self.title,
            output_path: self.output,
            gfm: self.no_gfm.then_some(false),
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;
        tracing::debug!(
            config_path = ?config.config_path,
            gfm = config.render.gfm,
            "Loaded configuration"
        );

        let registry = primer_content::registry();
        let page = compose(&page_settings(&config), &registry, &prose_renderer(&config));
        let summary = page.summary();

        match &config.output_resolved.path {
            Some(path) => {
                if let Some(parent) = path.parent()
                    && !parent.as_os_str().is_empty()
                {
                    std::fs::create_dir_all(parent)?;
                }
                std::fs::write(path, &page.html)?;
                output.info(&format!("Output: {}", path.display()));
            }
            None => {
                let mut stdout = std::io::stdout().lock();
                stdout.write_all(page.html.as_bytes())?;
                stdout.flush()?;
            }
        }

        output.summary(&summary);
        Ok(())
    }
}
