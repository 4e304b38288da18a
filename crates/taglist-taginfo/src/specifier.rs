//! Key or key=value specifiers and the list API query they map to.

use std::fmt;

use taglist_render::encode_uri_component;

/// What to list: all values of a key, or a tag filter.
///
/// [`Specifier::parse`] classifies text by the presence of `=`. A key that
/// itself contains `=` is therefore read as a tag filter; build such
/// specifiers with [`Specifier::key`] instead.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Specifier {
    /// Bare key, sent as `key=<K>`.
    Key(String),
    /// Tag filter such as `highway=primary`, sent verbatim as `tags=<K=V>`.
    Tags(String),
}

impl Specifier {
    /// Classify `text`: anything containing `=` is a tag filter.
    #[must_use]
    pub fn parse(text: &str) -> Self {
        if text.contains('=') {
            Self::Tags(text.to_owned())
        } else {
            Self::Key(text.to_owned())
        }
    }

    /// Bare key, even if it contains `=`.
    #[must_use]
    pub fn key(key: impl Into<String>) -> Self {
        Self::Key(key.into())
    }

    /// Tag filter for `key=value`.
    #[must_use]
    pub fn tag(key: &str, value: &str) -> Self {
        Self::Tags(format!("{key}={value}"))
    }

    /// Query string for the list endpoint, e.g. `key=highway` or
    /// `tags=highway%3Dprimary`.
    #[must_use]
    pub fn query(&self) -> String {
        match self {
            Self::Key(key) => format!("key={}", encode_uri_component(key)),
            Self::Tags(tags) => format!("tags={}", encode_uri_component(tags)),
        }
    }
}

impl From<&str> for Specifier {
    fn from(text: &str) -> Self {
        Self::parse(text)
    }
}

impl fmt::Display for Specifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Key(text) | Self::Tags(text) => f.write_str(text),
        }
    }
}
