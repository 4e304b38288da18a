//! Tag statistics records as returned by the taginfo list API.

use std::collections::BTreeMap;

use crate::locale::DEFAULT_LOCALE;

/// OSM element type a tag can be used on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementType {
    Node,
    Way,
    Area,
    Relation,
}

impl ElementType {
    /// Name used in taginfo URLs and icon filenames.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Node => "node",
            Self::Way => "way",
            Self::Area => "area",
            Self::Relation => "relation",
        }
    }
}

/// Thumbnail reference of a wiki illustration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
pub struct ImageRef {
    /// Wiki page title of the image (e.g. `File:Highway.jpg`).
    pub image: String,
    /// Thumbnail URL up to the width.
    #[cfg_attr(feature = "serde", serde(default))]
    pub thumb_url_prefix: String,
    /// Thumbnail URL after the width.
    #[cfg_attr(feature = "serde", serde(default))]
    pub thumb_url_suffix: String,
}

impl ImageRef {
    /// Thumbnail URL for the given pixel width.
    #[must_use]
    pub fn thumb_url(&self, width: u32) -> String {
        format!("{}{width}{}", self.thumb_url_prefix, self.thumb_url_suffix)
    }
}

/// Wiki documentation of a key or tag in one language.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
pub struct WikiEntry {
    #[cfg_attr(feature = "serde", serde(default))]
    pub description: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub image: Option<ImageRef>,
}

/// One row of tag statistics.
///
/// `value` is empty for key-only queries. Missing or `null` flags and counts
/// read as `false` and zero.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
pub struct TagRecord {
    pub key: String,
    #[cfg_attr(feature = "serde", serde(default, deserialize_with = "null_as_default"))]
    pub value: String,
    #[cfg_attr(feature = "serde", serde(default, deserialize_with = "null_as_default"))]
    pub on_node: bool,
    #[cfg_attr(feature = "serde", serde(default, deserialize_with = "null_as_default"))]
    pub on_way: bool,
    #[cfg_attr(feature = "serde", serde(default, deserialize_with = "null_as_default"))]
    pub on_area: bool,
    #[cfg_attr(feature = "serde", serde(default, deserialize_with = "null_as_default"))]
    pub on_relation: bool,
    #[cfg_attr(feature = "serde", serde(default, deserialize_with = "null_as_default"))]
    pub count_nodes: u64,
    #[cfg_attr(feature = "serde", serde(default, deserialize_with = "null_as_default"))]
    pub count_ways: u64,
    #[cfg_attr(feature = "serde", serde(default, deserialize_with = "null_as_default"))]
    pub count_relations: u64,
    /// Wiki entries keyed by locale code.
    #[cfg_attr(
        feature = "serde",
        serde(default, deserialize_with = "wiki_or_absent")
    )]
    pub wiki: Option<BTreeMap<String, WikiEntry>>,
}

impl TagRecord {
    /// Create a record for `key`/`value` with no flags, counts or wiki data.
    #[must_use]
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            ..Default::default()
        }
    }

    /// Wiki entry for exactly `lang`, without fallback.
    #[must_use]
    pub fn wiki_entry(&self, lang: &str) -> Option<&WikiEntry> {
        self.wiki.as_ref()?.get(lang)
    }

    /// Whether the record carries a wiki entry for `lang`.
    #[must_use]
    pub fn has_wiki(&self, lang: &str) -> bool {
        self.wiki_entry(lang).is_some()
    }

    /// Description in `lang`, falling back to the English description.
    ///
    /// Empty descriptions count as missing.
    #[must_use]
    pub fn description(&self, lang: &str) -> Option<&str> {
        self.find_in_wiki(lang, |entry| {
            entry.description.as_deref().filter(|d| !d.is_empty())
        })
    }

    /// Illustration in `lang`, falling back to the English illustration.
    #[must_use]
    pub fn image(&self, lang: &str) -> Option<&ImageRef> {
        self.find_in_wiki(lang, |entry| entry.image.as_ref())
    }

    /// Element types the tag is used on, in node, way, area, relation order.
    pub fn element_types(&self) -> impl Iterator<Item = ElementType> {
        [
            (self.on_node, ElementType::Node),
            (self.on_way, ElementType::Way),
            (self.on_area, ElementType::Area),
            (self.on_relation, ElementType::Relation),
        ]
        .into_iter()
        .filter_map(|(on, ty)| on.then_some(ty))
    }

    /// Usage counts for nodes, ways and relations, in that order.
    #[must_use]
    pub fn counts(&self) -> [(ElementType, u64); 3] {
        [
            (ElementType::Node, self.count_nodes),
            (ElementType::Way, self.count_ways),
            (ElementType::Relation, self.count_relations),
        ]
    }

    fn find_in_wiki<'a, T: ?Sized>(
        &'a self,
        lang: &str,
        get: impl Fn(&'a WikiEntry) -> Option<&'a T>,
    ) -> Option<&'a T> {
        self.wiki_entry(lang)
            .and_then(&get)
            .or_else(|| self.wiki_entry(DEFAULT_LOCALE).and_then(&get))
    }
}

/// Read `null` as the type's default.
#[cfg(feature = "serde")]
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Default + serde::Deserialize<'de>,
{
    let value: Option<T> = serde::Deserialize::deserialize(deserializer)?;
    Ok(value.unwrap_or_default())
}

/// Accept a JSON object of wiki entries; anything else (`[]`, `null`) is absent.
#[cfg(feature = "serde")]
fn wiki_or_absent<'de, D>(deserializer: D) -> Result<Option<BTreeMap<String, WikiEntry>>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(serde::Deserialize)]
    #[serde(untagged)]
    enum Wiki {
        Entries(BTreeMap<String, WikiEntry>),
        Other(serde::de::IgnoredAny),
    }

    Ok(match serde::Deserialize::deserialize(deserializer)? {
        Wiki::Entries(entries) => Some(entries),
        Wiki::Other(_) => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(description: Option<&str>, image: Option<&str>) -> WikiEntry {
        WikiEntry {
            description: description.map(str::to_owned),
            image: image.map(|title| ImageRef {
                image: title.to_owned(),
                thumb_url_prefix: "https://upload.example.org/thumb/".to_owned(),
                thumb_url_suffix: "px-img.jpg".to_owned(),
            }),
        }
    }

    fn record_with_wiki(entries: &[(&str, WikiEntry)]) -> TagRecord {
        TagRecord {
            wiki: Some(
                entries
                    .iter()
                    .map(|(lang, e)| ((*lang).to_owned(), e.clone()))
                    .collect(),
            ),
            ..TagRecord::new("highway", "primary")
        }
    }

    #[test]
    fn test_description_in_requested_locale() {
        let record = record_with_wiki(&[
            ("en", entry(Some("A major road"), None)),
            ("de", entry(Some("Hauptstraße"), None)),
        ]);
        assert_eq!(record.description("de"), Some("Hauptstraße"));
    }

    #[test]
    fn test_description_falls_back_to_english_when_locale_missing() {
        let record = record_with_wiki(&[("en", entry(Some("A major road"), None))]);
        assert_eq!(record.description("fr"), Some("A major road"));
    }

    #[test]
    fn test_description_falls_back_when_entry_lacks_description() {
        let record = record_with_wiki(&[
            ("en", entry(Some("A major road"), None)),
            ("de", entry(None, Some("File:Road.jpg"))),
        ]);
        assert_eq!(record.description("de"), Some("A major road"));
    }

    #[test]
    fn test_empty_description_counts_as_missing() {
        let record = record_with_wiki(&[
            ("en", entry(Some("A major road"), None)),
            ("de", entry(Some(""), None)),
        ]);
        assert_eq!(record.description("de"), Some("A major road"));
    }

    #[test]
    fn test_description_absent_without_wiki() {
        assert_eq!(TagRecord::new("highway", "").description("en"), None);
    }

    #[test]
    fn test_image_falls_back_to_english() {
        let record = record_with_wiki(&[
            ("en", entry(None, Some("File:Road.jpg"))),
            ("ja", entry(Some("道路"), None)),
        ]);
        assert_eq!(record.image("ja").unwrap().image, "File:Road.jpg");
    }

    #[test]
    fn test_thumb_url_inserts_width() {
        let image = entry(None, Some("File:Road.jpg")).image.unwrap();
        assert_eq!(
            image.thumb_url(100),
            "https://upload.example.org/thumb/100px-img.jpg"
        );
    }

    #[test]
    fn test_element_types_fixed_order() {
        let record = TagRecord {
            on_relation: true,
            on_node: true,
            ..TagRecord::new("name", "")
        };
        let types: Vec<_> = record.element_types().collect();
        assert_eq!(types, vec![ElementType::Node, ElementType::Relation]);
    }

    #[test]
    fn test_element_types_none_set() {
        assert_eq!(TagRecord::new("name", "").element_types().count(), 0);
    }

    #[test]
    fn test_counts_order() {
        let record = TagRecord {
            count_nodes: 1,
            count_ways: 2,
            count_relations: 3,
            ..TagRecord::new("name", "")
        };
        assert_eq!(
            record.counts(),
            [
                (ElementType::Node, 1),
                (ElementType::Way, 2),
                (ElementType::Relation, 3)
            ]
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_deserialize_missing_fields_default() {
        let record: TagRecord = serde_json::from_str(r#"{"key": "highway"}"#).unwrap();
        assert_eq!(record, TagRecord::new("highway", ""));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_deserialize_wiki_array_is_absent() {
        let record: TagRecord =
            serde_json::from_str(r#"{"key": "highway", "value": "primary", "wiki": []}"#).unwrap();
        assert!(record.wiki.is_none());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_deserialize_null_fields_default() {
        let json = r#"{
            "key": "highway", "value": null,
            "on_node": null, "on_way": true,
            "count_nodes": null, "count_ways": 7, "count_relations": null
        }"#;
        let record: TagRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.value, "");
        assert!(!record.on_node);
        assert!(record.on_way);
        assert_eq!(
            record.counts(),
            [
                (ElementType::Node, 0),
                (ElementType::Way, 7),
                (ElementType::Relation, 0)
            ]
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_deserialize_full_record() {
        let json = r#"{
            "key": "highway", "value": "primary",
            "on_node": false, "on_way": true, "on_area": false, "on_relation": false,
            "count_nodes": 12, "count_ways": 3456789, "count_relations": 0,
            "wiki": {
                "en": {
                    "description": "A major highway",
                    "image": {
                        "image": "File:Primary.jpg",
                        "thumb_url_prefix": "https://example.org/",
                        "thumb_url_suffix": "px.jpg"
                    }
                },
                "de": { "description": null, "image": null }
            }
        }"#;
        let record: TagRecord = serde_json::from_str(json).unwrap();
        assert!(record.on_way);
        assert_eq!(record.count_ways, 3_456_789);
        assert!(record.has_wiki("de"));
        assert_eq!(record.description("de"), Some("A major highway"));
        assert_eq!(record.image("de").unwrap().thumb_url(100), "https://example.org/100px.jpg");
    }
}
