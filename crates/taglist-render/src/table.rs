//! Table renderer.
//!
//! Produces `<table class="taginfo-taglist">` markup with one header row and
//! one body row per record. Records keep their input order.

use crate::column::{CellContext, Column, ColumnRegistry};
use crate::error::RenderError;
use crate::html::escape_html;
use crate::links::LinkBuilder;
use crate::locale::LocaleTable;
use crate::options::RenderOptions;
use crate::record::TagRecord;

/// Renders record sets with a fixed locale table, link builder and column
/// registry.
///
/// Rendering is a pure function of its inputs: the same records, columns and
/// locale always give the same markup.
#[derive(Debug)]
pub struct TableRenderer {
    locales: LocaleTable,
    links: LinkBuilder,
    columns: ColumnRegistry,
}

impl Default for TableRenderer {
    fn default() -> Self {
        Self::new(LocaleTable::builtin(), LinkBuilder::default())
    }
}

impl TableRenderer {
    /// Create a renderer with the built-in columns.
    #[must_use]
    pub fn new(locales: LocaleTable, links: LinkBuilder) -> Self {
        Self {
            locales,
            links,
            columns: ColumnRegistry::builtin(),
        }
    }

    /// Replace the column registry.
    #[must_use]
    pub fn with_columns(mut self, columns: ColumnRegistry) -> Self {
        self.columns = columns;
        self
    }

    /// Register an additional column.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::DuplicateColumn`] if the identifier is taken.
    pub fn with_column(mut self, column: impl Column + 'static) -> Result<Self, RenderError> {
        self.columns.register(column)?;
        Ok(self)
    }

    #[must_use]
    pub fn locales(&self) -> &LocaleTable {
        &self.locales
    }

    #[must_use]
    pub fn links(&self) -> &LinkBuilder {
        &self.links
    }

    #[must_use]
    pub fn columns(&self) -> &ColumnRegistry {
        &self.columns
    }

    /// Render `records` with the columns named by `column_ids`, in that order.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::UnknownColumn`] before producing any markup if
    /// an identifier is not registered.
    pub fn render<S: AsRef<str>>(
        &self,
        records: &[TagRecord],
        column_ids: &[S],
        lang: &str,
    ) -> Result<String, RenderError> {
        let columns = self.columns.resolve(column_ids)?;
        let cx = CellContext {
            lang,
            links: &self.links,
        };

        let mut out = String::from(r#"<table class="taginfo-taglist"><thead><tr>"#);
        for column in &columns {
            out.push_str("<th>");
            out.push_str(&escape_html(&column.name(&self.locales, lang)));
            out.push_str("</th>");
        }
        out.push_str("</tr></thead><tbody>");
        for record in records {
            out.push_str("<tr>");
            for column in &columns {
                out.push_str("<td>");
                out.push_str(&column.format(&cx, record));
                out.push_str("</td>");
            }
            out.push_str("</tr>");
        }
        out.push_str("</tbody></table>");
        Ok(out)
    }

    /// Render `records` with the default columns selected by `options`.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::UnknownColumn`] if the registry was replaced by
    /// one lacking a default column.
    pub fn render_with_options(
        &self,
        records: &[TagRecord],
        options: &RenderOptions,
    ) -> Result<String, RenderError> {
        let ids: Vec<&str> = options.columns().into_iter().map(|c| c.id()).collect();
        self.render(records, &ids, &options.lang)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::column::{BuiltinColumn, ColumnSpec};
    use crate::locale::ColumnNames;
    use crate::record::WikiEntry;

    fn sample_records() -> Vec<TagRecord> {
        let mut primary = TagRecord {
            on_way: true,
            count_ways: 2_500_000,
            ..TagRecord::new("highway", "primary")
        };
        primary.wiki = Some(BTreeMap::from([
            (
                "en".to_owned(),
                WikiEntry {
                    description: Some("A major highway".to_owned()),
                    image: None,
                },
            ),
            (
                "de".to_owned(),
                WikiEntry {
                    description: Some("Bundesstraße".to_owned()),
                    image: None,
                },
            ),
        ]));
        let residential = TagRecord {
            on_way: true,
            on_area: true,
            ..TagRecord::new("highway", "residential")
        };
        vec![primary, residential]
    }

    fn header_cells(html: &str) -> Vec<&str> {
        html.split("<th>")
            .skip(1)
            .map(|cell| cell.split("</th>").next().unwrap())
            .collect()
    }

    #[test]
    fn test_render_five_columns_without_count() {
        let renderer = TableRenderer::default();
        let html = renderer
            .render_with_options(&sample_records(), &RenderOptions::default())
            .unwrap();
        assert_eq!(
            header_cells(&html),
            vec!["Key", "Value", "Element", "Description", "Image"]
        );
    }

    #[test]
    fn test_render_six_columns_with_count() {
        let renderer = TableRenderer::default();
        let options = RenderOptions::new("ru").with_count(true);
        let html = renderer
            .render_with_options(&sample_records(), &options)
            .unwrap();
        let headers = header_cells(&html);
        assert_eq!(headers.len(), 6);
        assert_eq!(
            headers[5],
            renderer.locales().column_name("ru", BuiltinColumn::Count)
        );
    }

    #[test]
    fn test_render_one_row_per_record_in_order() {
        let renderer = TableRenderer::default();
        let html = renderer
            .render(&sample_records(), &["value"], "en")
            .unwrap();
        assert_eq!(html.matches("<tr>").count(), 3);
        assert!(html.find(">primary<").unwrap() < html.find(">residential<").unwrap());
    }

    #[test]
    fn test_render_full_markup() {
        let renderer = TableRenderer::new(
            LocaleTable::builtin(),
            LinkBuilder::new("https://w/wiki/", "https://t/"),
        );
        let records = vec![TagRecord {
            on_node: true,
            ..TagRecord::new("amenity", "bench")
        }];
        let html = renderer
            .render(&records, &["key", "element", "description"], "en")
            .unwrap();
        assert_eq!(
            html,
            concat!(
                r#"<table class="taginfo-taglist"><thead><tr>"#,
                "<th>Key</th><th>Element</th><th>Description</th>",
                "</tr></thead><tbody><tr>",
                r#"<td><a href="https://w/wiki/Key%3Aamenity">amenity</a></td>"#,
                r#"<td><img src="https://t/img/types/node.svg" width="16" height="16"/> </td>"#,
                "<td></td>",
                "</tr></tbody></table>"
            )
        );
    }

    #[test]
    fn test_render_uses_record_locale_fallback() {
        let renderer = TableRenderer::default();
        let html = renderer
            .render(&sample_records(), &["description"], "de")
            .unwrap();
        assert!(html.contains("<th>Beschreibung</th>"));
        assert!(html.contains("<td>Bundesstraße</td>"));
        assert!(html.contains("<td></td>"));
    }

    #[test]
    fn test_render_empty_records() {
        let renderer = TableRenderer::default();
        let html = renderer
            .render_with_options(&[], &RenderOptions::default())
            .unwrap();
        assert!(html.ends_with("</tr></thead><tbody></tbody></table>"));
    }

    #[test]
    fn test_render_unknown_column_fails() {
        let renderer = TableRenderer::default();
        let err = renderer
            .render(&sample_records(), &["key", "colour"], "en")
            .unwrap_err();
        assert!(matches!(err, RenderError::UnknownColumn(id) if id == "colour"));
    }

    #[test]
    fn test_render_is_idempotent() {
        let renderer = TableRenderer::default();
        let options = RenderOptions::new("de").with_count(true);
        let records = sample_records();
        let first = renderer.render_with_options(&records, &options).unwrap();
        let second = renderer.render_with_options(&records, &options).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_render_custom_column_and_escaped_header() {
        let renderer = TableRenderer::default()
            .with_column(ColumnSpec::new(
                "tag",
                |_| "Key=Value <raw>".to_owned(),
                |_, record| format!("{}={}", record.key, record.value),
            ))
            .unwrap();
        let html = renderer
            .render(&sample_records(), &["tag", "key"], "en")
            .unwrap();
        assert!(html.contains("<th>Key=Value &lt;raw&gt;</th><th>Key</th>"));
        assert!(html.contains("<td>highway=primary</td>"));
    }

    #[test]
    fn test_render_with_test_local_locale_table() {
        let locales = LocaleTable::new(BTreeMap::from([(
            "en".to_owned(),
            ColumnNames::new("k", "v", "e", "d", "i", "c"),
        )]))
        .unwrap();
        let renderer = TableRenderer::new(locales, LinkBuilder::default());
        let html = renderer
            .render_with_options(&[], &RenderOptions::new("pl").with_count(true))
            .unwrap();
        assert_eq!(header_cells(&html), vec!["k", "v", "e", "d", "i", "c"]);
    }
}
