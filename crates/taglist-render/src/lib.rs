//! Localized HTML tables of OpenStreetMap tag usage.
//!
//! This crate turns tag statistics records from taginfo into a
//! `<table class="taginfo-taglist">` with links to the OSM wiki, element type
//! icons, descriptions, illustrations and usage counts.
//!
//! # Architecture
//!
//! - [`escape_html`], [`link`], [`link_raw`]: escaping and anchor markup
//! - [`LinkBuilder`]: wiki and taginfo URLs
//! - [`LocaleTable`]: column names per locale, with English fallback
//! - [`ColumnRegistry`]: built-in and custom [`Column`]s
//! - [`TableRenderer`]: records + column ids + locale to markup
//!
//! Nothing here performs I/O; fetching records is left to `taglist-taginfo`.
//!
//! # Example
//!
//! ```
//! use taglist_render::{RenderOptions, TableRenderer, TagRecord};
//!
//! let records = vec![TagRecord {
//!     on_way: true,
//!     ..TagRecord::new("highway", "primary")
//! }];
//! let html = TableRenderer::default()
//!     .render_with_options(&records, &RenderOptions::new("de"))
//!     .unwrap();
//! assert!(html.starts_with(r#"<table class="taginfo-taglist">"#));
//! ```

mod column;
mod error;
mod html;
mod links;
mod locale;
mod number;
mod options;
mod record;
mod table;

pub use column::{BuiltinColumn, CellContext, Column, ColumnRegistry, ColumnSpec, THUMB_WIDTH};
pub use error::RenderError;
pub use html::{escape_html, link, link_raw};
pub use links::{DEFAULT_TAGINFO_URL, DEFAULT_WIKI_URL, LinkBuilder, encode_uri_component};
pub use locale::{
    ColumnNames, DEFAULT_LOCALE, LocaleTable, WikiNamespace, effective_locale, wiki_prefix,
};
pub use number::{THIN_SPACE, group_digits};
pub use options::RenderOptions;
pub use record::{ElementType, ImageRef, TagRecord, WikiEntry};
pub use table::TableRenderer;
