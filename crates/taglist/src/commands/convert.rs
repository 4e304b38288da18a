//! `taglist convert` command implementation.
//!
//! A manifest is a JSON array of entries:
//!
//! ```json
//! [
//!   {"output": "highway.html", "tags": "highway", "options": {"lang": "de"}},
//!   {"output": "bench.html", "tags": "amenity=bench"}
//! ]
//! ```
//!
//! Relative output paths are resolved against the manifest's directory.
//! Option keys an entry leaves out take their values from the `[render]`
//! section of the configuration.

use std::path::{Path, PathBuf};

use clap::Args;
use serde::Deserialize;
use serde_json::{Map, Value};
use taglist_config::{CliSettings, Config};
use taglist_render::RenderOptions;
use taglist_taginfo::{FileSink, Target};

use super::create_taglist;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the convert command.
#[derive(Args)]
pub(crate) struct ConvertArgs {
    /// Path to the JSON manifest.
    manifest: PathBuf,

    /// Taginfo instance URL (overrides config).
    #[arg(long, env = "TAGLIST_TAGINFO_URL")]
    taginfo_url: Option<String>,

    /// OSM wiki base URL for key, tag and image links (overrides config).
    #[arg(long, env = "TAGLIST_WIKI_URL")]
    wiki_url: Option<String>,

    /// Path to configuration file (default: auto-discover taglist.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,
}

/// One manifest entry.
#[derive(Debug, Deserialize)]
struct ManifestEntry {
    output: PathBuf,
    tags: String,
    #[serde(default)]
    options: Value,
}

impl ConvertArgs {
    /// Execute the convert command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails or the manifest cannot be read.
    /// Entries that fail to render are reported but do not fail the command.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            taginfo_url: self.taginfo_url,
            wiki_url: self.wiki_url,
            ..Default::default()
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;

        let entries = read_manifest(&self.manifest)?;
        let base_dir = self.manifest.parent().unwrap_or(Path::new(""));
        let defaults = config.render_options();
        let mut targets = build_targets(entries, base_dir, &defaults);

        output.info(&format!(
            "Rendering {} tag lists from {}...",
            targets.len(),
            self.manifest.display()
        ));

        let taglist = create_taglist(&config)?;
        let populated = taglist.convert(&mut targets);

        if populated == targets.len() {
            output.success(&format!("Rendered {populated} tag lists"));
        } else {
            output.warning(&format!(
                "Rendered {populated} of {} tag lists (run with --verbose for details)",
                targets.len()
            ));
        }

        Ok(())
    }
}

fn read_manifest(path: &Path) -> Result<Vec<ManifestEntry>, CliError> {
    let content = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

fn build_targets(
    entries: Vec<ManifestEntry>,
    base_dir: &Path,
    defaults: &RenderOptions,
) -> Vec<Target<FileSink>> {
    entries
        .into_iter()
        .map(|entry| {
            let path = base_dir.join(entry.output);
            Target::new(
                FileSink::new(path),
                entry.tags,
                with_defaults(entry.options, defaults),
            )
        })
        .collect()
}

/// Fill option keys missing from `options` with `defaults`.
///
/// Non-object options are replaced by the defaults.
fn with_defaults(options: Value, defaults: &RenderOptions) -> Value {
    let mut object = match options {
        Value::Object(object) => object,
        _ => Map::new(),
    };
    object
        .entry("lang")
        .or_insert_with(|| Value::String(defaults.lang.clone()));
    object
        .entry("with_count")
        .or_insert(Value::Bool(defaults.with_count));
    Value::Object(object)
}
