//! Table columns: the six built-in columns and the extensible registry.
//!
//! Every column has an identifier, a locale-aware display name and a cell
//! formatter `(locale, record) -> markup`. The registry keeps columns in
//! registration order and never replaces an existing one.

use std::fmt;
use std::str::FromStr;

use crate::error::RenderError;
use crate::html::{escape_html, link_raw};
use crate::links::LinkBuilder;
use crate::locale::{LocaleTable, effective_locale};
use crate::number::group_digits;
use crate::record::TagRecord;

/// Width in pixels of illustration thumbnails.
pub const THUMB_WIDTH: u32 = 100;

/// Per-render inputs shared by all cells.
#[derive(Debug, Clone, Copy)]
pub struct CellContext<'a> {
    /// Requested locale.
    pub lang: &'a str,
    /// URL builder for wiki and taginfo links.
    pub links: &'a LinkBuilder,
}

/// A table column.
pub trait Column: Send + Sync {
    /// Identifier used to select the column.
    fn id(&self) -> &str;

    /// Header text in `lang`. Returned as plain text; the renderer escapes it.
    fn name(&self, locales: &LocaleTable, lang: &str) -> String;

    /// Inner markup of the column's cell for `record`.
    fn format(&self, cx: &CellContext<'_>, record: &TagRecord) -> String;
}

/// The six columns known to every [`LocaleTable`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BuiltinColumn {
    Key,
    Value,
    Element,
    Description,
    Image,
    Count,
}

impl BuiltinColumn {
    /// All built-in columns in default table order.
    pub const ALL: [Self; 6] = [
        Self::Key,
        Self::Value,
        Self::Element,
        Self::Description,
        Self::Image,
        Self::Count,
    ];

    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            Self::Key => "key",
            Self::Value => "value",
            Self::Element => "element",
            Self::Description => "description",
            Self::Image => "image",
            Self::Count => "count",
        }
    }

    fn format_key(cx: &CellContext<'_>, record: &TagRecord) -> String {
        cx.links
            .wiki_key_link(effective_locale(record, cx.lang), &record.key)
    }

    fn format_value(cx: &CellContext<'_>, record: &TagRecord) -> String {
        cx.links.wiki_tag_link(
            effective_locale(record, cx.lang),
            &record.key,
            &record.value,
        )
    }

    fn format_element(cx: &CellContext<'_>, record: &TagRecord) -> String {
        record
            .element_types()
            .map(|ty| cx.links.type_image(ty))
            .collect()
    }

    fn format_description(cx: &CellContext<'_>, record: &TagRecord) -> String {
        record
            .description(effective_locale(record, cx.lang))
            .map(escape_html)
            .unwrap_or_default()
    }

    fn format_image(cx: &CellContext<'_>, record: &TagRecord) -> String {
        let Some(image) = record.image(effective_locale(record, cx.lang)) else {
            return String::new();
        };
        let thumb = format!(
            r#"<img src="{}"/>"#,
            escape_html(&image.thumb_url(THUMB_WIDTH))
        );
        link_raw(&cx.links.wiki_url(&image.image), &thumb)
    }

    fn format_count(cx: &CellContext<'_>, record: &TagRecord) -> String {
        record
            .counts()
            .into_iter()
            .map(|(ty, count)| {
                format!(
                    r#"<div style="text-align: right">{} {}</div>"#,
                    group_digits(count),
                    cx.links.type_image(ty)
                )
            })
            .collect()
    }
}

impl fmt::Display for BuiltinColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for BuiltinColumn {
    type Err = RenderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|column| column.id() == s)
            .ok_or_else(|| RenderError::UnknownColumn(s.to_owned()))
    }
}

impl Column for BuiltinColumn {
    fn id(&self) -> &str {
        BuiltinColumn::id(*self)
    }

    fn name(&self, locales: &LocaleTable, lang: &str) -> String {
        locales.column_name(lang, *self).to_owned()
    }

    fn format(&self, cx: &CellContext<'_>, record: &TagRecord) -> String {
        match self {
            Self::Key => Self::format_key(cx, record),
            Self::Value => Self::format_value(cx, record),
            Self::Element => Self::format_element(cx, record),
            Self::Description => Self::format_description(cx, record),
            Self::Image => Self::format_image(cx, record),
            Self::Count => Self::format_count(cx, record),
        }
    }
}

type NameFn = dyn Fn(&str) -> String + Send + Sync;
type FormatFn = dyn Fn(&CellContext<'_>, &TagRecord) -> String + Send + Sync;

/// Column built from a name lookup and a formatter closure.
///
/// ```
/// use taglist_render::{ColumnRegistry, ColumnSpec, escape_html};
///
/// let mut registry = ColumnRegistry::builtin();
/// registry
///     .register(ColumnSpec::new(
///         "label",
///         |lang| if lang == "de" { "Bezeichnung".to_owned() } else { "Label".to_owned() },
///         |_cx, record| escape_html(&format!("{}={}", record.key, record.value)),
///     ))
///     .unwrap();
/// assert!(registry.get("label").is_some());
/// ```
pub struct ColumnSpec {
    id: String,
    name: Box<NameFn>,
    format: Box<FormatFn>,
}

impl ColumnSpec {
    pub fn new(
        id: impl Into<String>,
        name: impl Fn(&str) -> String + Send + Sync + 'static,
        format: impl Fn(&CellContext<'_>, &TagRecord) -> String + Send + Sync + 'static,
    ) -> Self {
        Self {
            id: id.into(),
            name: Box::new(name),
            format: Box::new(format),
        }
    }
}

impl fmt::Debug for ColumnSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColumnSpec").field("id", &self.id).finish_non_exhaustive()
    }
}

impl Column for ColumnSpec {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self, _locales: &LocaleTable, lang: &str) -> String {
        (self.name)(lang)
    }

    fn format(&self, cx: &CellContext<'_>, record: &TagRecord) -> String {
        (self.format)(cx, record)
    }
}

/// Ordered set of columns addressable by identifier.
#[derive(Default)]
pub struct ColumnRegistry {
    columns: Vec<Box<dyn Column>>,
}

impl ColumnRegistry {
    /// Registry without any columns.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with the six built-in columns.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            columns: BuiltinColumn::ALL
                .into_iter()
                .map(|column| Box::new(column) as Box<dyn Column>)
                .collect(),
        }
    }

    /// Add a column.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::DuplicateColumn`] if the identifier is taken.
    pub fn register(&mut self, column: impl Column + 'static) -> Result<(), RenderError> {
        if self.get(column.id()).is_some() {
            return Err(RenderError::DuplicateColumn(column.id().to_owned()));
        }
        self.columns.push(Box::new(column));
        Ok(())
    }

    /// Column with identifier `id`.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&dyn Column> {
        self.columns
            .iter()
            .find(|column| column.id() == id)
            .map(|column| column.as_ref())
    }

    /// Look up all `ids`, in order.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::UnknownColumn`] for the first unknown identifier.
    pub fn resolve<S: AsRef<str>>(&self, ids: &[S]) -> Result<Vec<&dyn Column>, RenderError> {
        ids.iter()
            .map(|id| {
                let id = id.as_ref();
                self.get(id)
                    .ok_or_else(|| RenderError::UnknownColumn(id.to_owned()))
            })
            .collect()
    }

    /// Registered identifiers in registration order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|column| column.id())
    }
}

impl fmt::Debug for ColumnRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.ids()).finish()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::record::{ImageRef, WikiEntry};

    fn cx<'a>(lang: &'a str, links: &'a LinkBuilder) -> CellContext<'a> {
        CellContext { lang, links }
    }

    fn record_with_wiki(langs: &[&str]) -> TagRecord {
        let wiki = langs
            .iter()
            .map(|lang| {
                (
                    (*lang).to_owned(),
                    WikiEntry {
                        description: Some(format!("desc-{lang}")),
                        image: Some(ImageRef {
                            image: format!("File:{lang}.png"),
                            thumb_url_prefix: "https://img.example.org/".to_owned(),
                            thumb_url_suffix: "px-x.png".to_owned(),
                        }),
                    },
                )
            })
            .collect::<BTreeMap<_, _>>();
        TagRecord {
            wiki: Some(wiki),
            ..TagRecord::new("highway", "primary")
        }
    }

    #[test]
    fn test_builtin_from_str() {
        assert_eq!("count".parse::<BuiltinColumn>().unwrap(), BuiltinColumn::Count);
        assert!(matches!(
            "colour".parse::<BuiltinColumn>(),
            Err(RenderError::UnknownColumn(id)) if id == "colour"
        ));
    }

    #[test]
    fn test_key_cell_uses_requested_locale_when_present() {
        let links = LinkBuilder::default();
        let record = record_with_wiki(&["en", "de"]);
        assert_eq!(
            BuiltinColumn::Key.format(&cx("de", &links), &record),
            r#"<a href="https://wiki.openstreetmap.org/wiki/de%3AKey%3Ahighway">highway</a>"#
        );
    }

    #[test]
    fn test_value_cell_falls_back_to_english_page() {
        let links = LinkBuilder::default();
        let record = record_with_wiki(&["en"]);
        assert_eq!(
            BuiltinColumn::Value.format(&cx("de", &links), &record),
            r#"<a href="https://wiki.openstreetmap.org/wiki/Tag%3Ahighway%3Dprimary">primary</a>"#
        );
    }

    #[test]
    fn test_element_cell_node_and_relation() {
        let links = LinkBuilder::default();
        let record = TagRecord {
            on_node: true,
            on_relation: true,
            ..TagRecord::new("name", "")
        };
        let html = BuiltinColumn::Element.format(&cx("en", &links), &record);
        assert_eq!(html.matches("<img ").count(), 2);
        let node = html.find("types/node.svg").unwrap();
        let relation = html.find("types/relation.svg").unwrap();
        assert!(node < relation);
    }

    #[test]
    fn test_element_cell_empty_when_no_flags() {
        let links = LinkBuilder::default();
        let record = TagRecord::new("name", "");
        assert_eq!(BuiltinColumn::Element.format(&cx("en", &links), &record), "");
    }

    #[test]
    fn test_description_cell_escaped() {
        let links = LinkBuilder::default();
        let mut record = TagRecord::new("name", "");
        record.wiki = Some(BTreeMap::from([(
            "en".to_owned(),
            WikiEntry {
                description: Some("Roads & <paths>".to_owned()),
                image: None,
            },
        )]));
        assert_eq!(
            BuiltinColumn::Description.format(&cx("en", &links), &record),
            "Roads &amp; &lt;paths&gt;"
        );
    }

    #[test]
    fn test_description_cell_locale_and_fallback() {
        let links = LinkBuilder::default();
        let record = record_with_wiki(&["en", "ja"]);
        assert_eq!(BuiltinColumn::Description.format(&cx("ja", &links), &record), "desc-ja");
        assert_eq!(BuiltinColumn::Description.format(&cx("ru", &links), &record), "desc-en");
    }

    #[test]
    fn test_description_cell_empty_without_wiki() {
        let links = LinkBuilder::default();
        let record = TagRecord::new("name", "");
        assert_eq!(BuiltinColumn::Description.format(&cx("en", &links), &record), "");
    }

    #[test]
    fn test_image_cell() {
        let links = LinkBuilder::default();
        let record = record_with_wiki(&["en"]);
        assert_eq!(
            BuiltinColumn::Image.format(&cx("en", &links), &record),
            r#"<a href="https://wiki.openstreetmap.org/wiki/File%3Aen.png"><img src="https://img.example.org/100px-x.png"/></a>"#
        );
    }

    #[test]
    fn test_image_cell_empty_without_image() {
        let links = LinkBuilder::default();
        let record = TagRecord::new("name", "");
        assert_eq!(BuiltinColumn::Image.format(&cx("en", &links), &record), "");
    }

    #[test]
    fn test_count_cell() {
        let links = LinkBuilder::new("https://w/", "https://t/");
        let record = TagRecord {
            count_nodes: 1234,
            count_ways: 5,
            count_relations: 1_000_000,
            ..TagRecord::new("name", "")
        };
        assert_eq!(
            BuiltinColumn::Count.format(&cx("en", &links), &record),
            concat!(
                r#"<div style="text-align: right">1&thinsp;234 <img src="https://t/img/types/node.svg" width="16" height="16"/> </div>"#,
                r#"<div style="text-align: right">5 <img src="https://t/img/types/way.svg" width="16" height="16"/> </div>"#,
                r#"<div style="text-align: right">1&thinsp;000&thinsp;000 <img src="https://t/img/types/relation.svg" width="16" height="16"/> </div>"#,
            )
        );
    }

    #[test]
    fn test_count_cell_missing_counts_are_zero() {
        let links = LinkBuilder::default();
        let html = BuiltinColumn::Count.format(&cx("en", &links), &TagRecord::new("name", ""));
        assert_eq!(html.matches(r#"<div style="text-align: right">0 "#).count(), 3);
    }

    #[test]
    fn test_registry_builtin_order() {
        let registry = ColumnRegistry::builtin();
        assert_eq!(
            registry.ids().collect::<Vec<_>>(),
            vec!["key", "value", "element", "description", "image", "count"]
        );
    }

    #[test]
    fn test_registry_register_custom_column() {
        let mut registry = ColumnRegistry::builtin();
        registry
            .register(ColumnSpec::new(
                "taginfo",
                |_| "Taginfo".to_owned(),
                |cx, record| cx.links.taginfo_key_link(&record.key),
            ))
            .unwrap();
        let links = LinkBuilder::default();
        let column = registry.get("taginfo").unwrap();
        assert_eq!(column.name(&LocaleTable::builtin(), "de"), "Taginfo");
        assert_eq!(
            column.format(&cx("en", &links), &TagRecord::new("amenity", "")),
            r#"<a href="https://taginfo.openstreetmap.org/keys/?key=amenity">amenity</a>"#
        );
    }

    #[test]
    fn test_registry_rejects_duplicate() {
        let mut registry = ColumnRegistry::builtin();
        let err = registry
            .register(ColumnSpec::new("key", |_| "Other".to_owned(), |_, _| String::new()))
            .unwrap_err();
        assert!(matches!(err, RenderError::DuplicateColumn(id) if id == "key"));
        assert_eq!(registry.ids().count(), 6);
    }

    #[test]
    fn test_registry_resolve_unknown() {
        let registry = ColumnRegistry::builtin();
        let err = registry.resolve(&["key", "colour"]).err().unwrap();
        assert!(matches!(err, RenderError::UnknownColumn(id) if id == "colour"));
    }

    #[test]
    fn test_registry_resolve_keeps_order() {
        let registry = ColumnRegistry::builtin();
        let columns = registry.resolve(&["image", "key"]).unwrap();
        let ids: Vec<_> = columns.iter().map(|c| c.id()).collect();
        assert_eq!(ids, vec!["image", "key"]);
    }
}
