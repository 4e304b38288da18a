//! URLs and links to the OSM wiki and taginfo.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

use crate::html::link;
use crate::locale::{WikiNamespace, wiki_prefix};
use crate::record::ElementType;

/// Default OSM wiki article base.
pub const DEFAULT_WIKI_URL: &str = "https://wiki.openstreetmap.org/wiki/";

/// Default taginfo instance.
pub const DEFAULT_TAGINFO_URL: &str = "https://taginfo.openstreetmap.org/";

/// Characters left unencoded by `encodeURIComponent`: A-Z a-z 0-9 - _ . ! ~ * ' ( )
const URI_COMPONENT_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encode a URI component (query value or path segment).
///
/// # Examples
///
/// ```
/// use taglist_render::encode_uri_component;
///
/// assert_eq!(encode_uri_component("highway=primary"), "highway%3Dprimary");
/// ```
pub fn encode_uri_component(input: &str) -> String {
    utf8_percent_encode(input, URI_COMPONENT_SET).to_string()
}

/// Encode a form parameter value: URI component encoding with `+` for spaces.
fn encode_form_value(input: &str) -> String {
    encode_uri_component(input).replace("%20", "+")
}

/// Builds URLs and anchors against configurable wiki and taginfo bases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkBuilder {
    wiki_base: String,
    taginfo_base: String,
}

impl Default for LinkBuilder {
    fn default() -> Self {
        Self::new(DEFAULT_WIKI_URL, DEFAULT_TAGINFO_URL)
    }
}

impl LinkBuilder {
    /// Create a builder. Both bases are normalized to end with `/`.
    #[must_use]
    pub fn new(wiki_base: &str, taginfo_base: &str) -> Self {
        Self {
            wiki_base: with_trailing_slash(wiki_base),
            taginfo_base: with_trailing_slash(taginfo_base),
        }
    }

    /// Wiki article base, ending with `/`.
    #[must_use]
    pub fn wiki_base(&self) -> &str {
        &self.wiki_base
    }

    /// Taginfo base, ending with `/`.
    #[must_use]
    pub fn taginfo_base(&self) -> &str {
        &self.taginfo_base
    }

    /// URL of the wiki page `title`.
    #[must_use]
    pub fn wiki_url(&self, title: &str) -> String {
        format!("{}{}", self.wiki_base, encode_uri_component(title))
    }

    /// URL of `path` on taginfo. Any query string must already be encoded.
    #[must_use]
    pub fn taginfo_url(&self, path: &str) -> String {
        format!("{}{path}", self.taginfo_base)
    }

    /// 16x16 icon for an element type, followed by a space.
    #[must_use]
    pub fn type_image(&self, element: ElementType) -> String {
        format!(
            r#"<img src="{}" width="16" height="16"/> "#,
            self.taginfo_url(&format!("img/types/{}.svg", element.as_str()))
        )
    }

    /// Link to the wiki page of `key` in `locale`, labelled with the key.
    #[must_use]
    pub fn wiki_key_link(&self, locale: &str, key: &str) -> String {
        let title = format!("{}{key}", wiki_prefix(locale, WikiNamespace::Key));
        link(&self.wiki_url(&title), key)
    }

    /// Link to the wiki page of `key=value` in `locale`, labelled with the value.
    #[must_use]
    pub fn wiki_tag_link(&self, locale: &str, key: &str, value: &str) -> String {
        let title = format!("{}{key}={value}", wiki_prefix(locale, WikiNamespace::Tag));
        link(&self.wiki_url(&title), value)
    }

    /// Link to the taginfo page of `key`, labelled with the key.
    #[must_use]
    pub fn taginfo_key_link(&self, key: &str) -> String {
        let url = self.taginfo_url(&format!("keys/?key={}", encode_form_value(key)));
        link(&url, key)
    }

    /// Link to the taginfo page of `key=value`, labelled with the value.
    #[must_use]
    pub fn taginfo_tag_link(&self, key: &str, value: &str) -> String {
        let url = self.taginfo_url(&format!(
            "tags/?key={}&value={}",
            encode_form_value(key),
            encode_form_value(value)
        ));
        link(&url, value)
    }
}

fn with_trailing_slash(base: &str) -> String {
    format!("{}/", base.trim_end_matches('/'))
}
