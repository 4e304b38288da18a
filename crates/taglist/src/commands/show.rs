//! `taglist show` command implementation.

use std::path::PathBuf;

use clap::Args;
use console::Term;
use taglist_config::{CliSettings, Config};
use taglist_taginfo::{FileSink, Specifier};

use super::create_taglist;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the show command.
#[derive(Args)]
pub(crate) struct ShowArgs {
    /// Key (`highway`) or tag (`highway=primary`) to list.
    tags: String,

    /// Locale for column names and wiki links (overrides config).
    #[arg(short, long)]
    lang: Option<String>,

    /// Append the usage count column.
    #[arg(long)]
    with_count: bool,

    /// Write the table to this file instead of stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Taginfo instance URL (overrides config).
    #[arg(long, env = "TAGLIST_TAGINFO_URL")]
    taginfo_url: Option<String>,

    /// OSM wiki base URL for key, tag and image links (overrides config).
    #[arg(long, env = "TAGLIST_WIKI_URL")]
    pub(crate) wiki_url: Option<String>,

    /// Path to configuration file (default: auto-discover taglist.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,
}

impl ShowArgs {
    /// Execute the show command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration, fetching, rendering or writing fails.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            taginfo_url: self.taginfo_url,
            wiki_url: self.wiki_url,
            lang: self.lang,
            with_count: self.with_count.then_some(true),
            ..Default::default()
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;

        let taglist = create_taglist(&config)?;
        let specifier = Specifier::parse(&self.tags);
        let options = config.render_options();

        if let Some(path) = self.output {
            let mut sink = FileSink::new(path);
            taglist.render_into(&mut sink, &specifier, &options)?;
            output.success(&format!(
                "Wrote {specifier} table to {}",
                sink.path().display()
            ));
        } else {
            let mut html = String::new();
            taglist.render_into(&mut html, &specifier, &options)?;
            Term::stdout().write_line(&html)?;
        }

        Ok(())
    }
}
