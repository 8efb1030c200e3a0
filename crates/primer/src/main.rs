//! Primer CLI - persistent collections tutorial builder.
//!
//! Provides commands for:
//! - `build`: Render the tutorial page to a file or stdout
//! - `check`: Run every lesson snippet and report verification results
//! - `toc`: Print the table of contents

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{BuildArgs, CheckArgs, TocArgs};
use output::Output;

/// Primer - persistent collections tutorial and sandbox.
#[derive(Parser)]
#[command(name = "primer", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the tutorial page.
    Build(BuildArgs),
    /// Evaluate every snippet and fail on verification errors.
    Check(CheckArgs),
    /// Print the table of contents.
    Toc(TocArgs),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    let verbose = match &cli.command {
        Commands::Build(args) => args.verbose,
        Commands::Check(args) => args.verbose,
        Commands::Toc(_) => false,
    };

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Build(args) => args.execute(),
        Commands::Check(args) => args.execute(),
        Commands::Toc(args) => args.execute(),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
