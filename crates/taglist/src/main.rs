//! Taglist CLI - localized OpenStreetMap tag tables.
//!
//! Provides commands for:
//! - `show`: Render one tag table into a file or stdout
//! - `convert`: Render every entry of a JSON manifest into its output file

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{ConvertArgs, ShowArgs};
use output::Output;

/// Taglist - localized OpenStreetMap tag tables from taginfo.
#[derive(Parser)]
#[command(name = "taglist", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the tag table for a key or key=value.
    Show(ShowArgs),
    /// Render all tag tables listed in a manifest.
    Convert(ConvertArgs),
}

/// `--verbose` enables INFO; otherwise `RUST_LOG` applies, defaulting to WARN
/// so failed batch targets are still reported.
fn log_filter(verbose: bool) -> EnvFilter {
    if verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    }
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    let verbose = match &cli.command {
        Commands::Show(args) => args.verbose,
        Commands::Convert(args) => args.verbose,
    };
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(verbose))
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Show(args) => args.execute(),
        Commands::Convert(args) => args.execute(),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
