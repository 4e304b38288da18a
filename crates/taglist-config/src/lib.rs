//! Configuration management for taglist.
//!
//! Parses `taglist.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! String configuration values support environment variable expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//!
//! Expanded fields:
//! - `taginfo.url`
//! - `wiki.url`

mod expand;

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;
use taglist_render::{
    ColumnNames, DEFAULT_TAGINFO_URL, DEFAULT_WIKI_URL, LinkBuilder, LocaleTable, RenderOptions,
};

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "taglist.toml";

/// Default HTTP timeout in seconds.
const DEFAULT_TIMEOUT: u64 = 30;

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override taginfo base URL.
    pub taginfo_url: Option<String>,
    /// Override wiki base URL.
    pub wiki_url: Option<String>,
    /// Override default locale.
    pub lang: Option<String>,
    /// Override count column flag.
    pub with_count: Option<bool>,
}

/// Application configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Taginfo API configuration.
    pub taginfo: TaginfoConfig,
    /// Wiki link configuration.
    pub wiki: WikiConfig,
    /// Default rendering options.
    pub render: RenderConfig,
    /// Additional or replacement column names, keyed by locale code.
    pub locales: BTreeMap<String, ColumnNames>,

    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

/// Taginfo API configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct TaginfoConfig {
    /// Taginfo instance base URL.
    pub url: String,
    /// HTTP timeout in seconds.
    pub timeout: u64,
}

impl Default for TaginfoConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_TAGINFO_URL.to_owned(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl TaginfoConfig {
    /// HTTP timeout as a duration.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }
}

/// Wiki link configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct WikiConfig {
    /// Wiki article base URL.
    pub url: String,
}

impl Default for WikiConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_WIKI_URL.to_owned(),
        }
    }
}

/// Default rendering options.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Default locale.
    pub lang: String,
    /// Append the count column by default.
    pub with_count: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        let options = RenderOptions::default();
        Self {
            lang: options.lang,
            with_count: options.with_count,
        }
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`taginfo.url`").
        field: String,
        /// Error message (e.g., "${`TAGINFO_HOST`} not set").
        message: String,
    },
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

/// Require a URL field to use http:// or https:// scheme.
fn require_http_url(url: &str, field: &str) -> Result<(), ConfigError> {
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(ConfigError::Validation(format!(
            "{field} must start with http:// or https://"
        )));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `taglist.toml` in current directory and parents,
    /// falling back to defaults when none exists.
    ///
    /// CLI settings are applied after loading and take precedence over file
    /// values.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, parsing fails or
    /// the result is invalid.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            Self::default()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
            config.validate()?;
        }

        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(url) = &settings.taginfo_url {
            self.taginfo.url.clone_from(url);
        }
        if let Some(url) = &settings.wiki_url {
            self.wiki.url.clone_from(url);
        }
        if let Some(lang) = &settings.lang {
            self.render.lang.clone_from(lang);
        }
        if let Some(with_count) = settings.with_count {
            self.render.with_count = with_count;
        }
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        config.expand_env_vars()?;
        config.config_path = Some(path.to_path_buf());
        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// Called automatically after loading from file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.taginfo.url, "taginfo.url")?;
        require_http_url(&self.taginfo.url, "taginfo.url")?;
        if self.taginfo.timeout == 0 {
            return Err(ConfigError::Validation(
                "taginfo.timeout must be greater than 0".to_owned(),
            ));
        }

        require_non_empty(&self.wiki.url, "wiki.url")?;
        require_http_url(&self.wiki.url, "wiki.url")?;

        require_non_empty(&self.render.lang, "render.lang")?;

        // Locale sections must form a valid table
        self.locale_table()?;

        Ok(())
    }

    /// Expand environment variable references in configuration strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        self.taginfo.url = expand::expand_env(&self.taginfo.url, "taginfo.url")?;
        self.wiki.url = expand::expand_env(&self.wiki.url, "wiki.url")?;
        Ok(())
    }

    /// Built-in locale table with the `[locales.*]` sections applied.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if a locale section has empty names.
    pub fn locale_table(&self) -> Result<LocaleTable, ConfigError> {
        self.locales
            .iter()
            .try_fold(LocaleTable::builtin(), |table, (locale, names)| {
                table.with_locale(locale.clone(), names.clone())
            })
            .map_err(|e| ConfigError::Validation(format!("locales: {e}")))
    }

    /// Link builder for the configured wiki and taginfo bases.
    #[must_use]
    pub fn link_builder(&self) -> LinkBuilder {
        LinkBuilder::new(&self.wiki.url, &self.taginfo.url)
    }

    /// Default rendering options.
    #[must_use]
    pub fn render_options(&self) -> RenderOptions {
        RenderOptions::new(self.render.lang.clone()).with_count(self.render.with_count)
    }
}
