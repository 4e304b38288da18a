//! CLI error types.

use taglist_config::ConfigError;
use taglist_taginfo::TaglistError;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Taglist(#[from] TaglistError),

    #[error("invalid manifest: {0}")]
    Manifest(#[from] serde_json::Error),
}
