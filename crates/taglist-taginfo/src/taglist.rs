//! Fetch-and-render adapter.
//!
//! Ties a [`TagSource`] to a [`TableRenderer`] and writes the resulting markup
//! into [`Sink`]s. Two surfaces are offered:
//! - [`Taglist::show`] renders one table into one sink.
//! - [`Taglist::convert`] renders a batch of [`Target`]s in parallel.
//!
//! Failures never touch the sink: it keeps whatever it held before.

use rayon::prelude::*;
use serde::Deserialize;
use taglist_render::{RenderOptions, TableRenderer};
use tracing::{debug, info, warn};

use crate::error::TaglistError;
use crate::sink::Sink;
use crate::source::TagSource;
use crate::specifier::Specifier;

/// Option keys understood by [`options_from_json`].
const KNOWN_OPTIONS: [&str; 2] = ["lang", "with_count"];

/// One batch entry: a sink plus the `tags` and `options` attached to it.
#[derive(Debug, Clone)]
pub struct Target<K> {
    /// Destination of the rendered table.
    pub sink: K,
    /// Key or key=value specifier.
    pub tags: String,
    /// Raw options value; anything but a JSON object means defaults.
    pub options: serde_json::Value,
}

impl<K> Target<K> {
    pub fn new(sink: K, tags: impl Into<String>, options: serde_json::Value) -> Self {
        Self {
            sink,
            tags: tags.into(),
            options,
        }
    }
}

/// Read [`RenderOptions`] from a loosely typed options value.
///
/// Non-object values and objects with mistyped fields give the defaults.
/// Unrecognized keys are ignored.
pub fn options_from_json(value: &serde_json::Value) -> RenderOptions {
    let Some(object) = value.as_object() else {
        if !value.is_null() {
            debug!("Options are not an object, using defaults");
        }
        return RenderOptions::default();
    };

    for key in object.keys() {
        if !KNOWN_OPTIONS.contains(&key.as_str()) {
            debug!(key = %key, "Ignoring unknown option");
        }
    }

    RenderOptions::deserialize(value).unwrap_or_else(|e| {
        warn!(error = %e, "Invalid options, using defaults");
        RenderOptions::default()
    })
}

/// Fetches records and renders them into sinks.
pub struct Taglist<S> {
    source: S,
    renderer: TableRenderer,
}

impl<S: TagSource> Taglist<S> {
    /// Create an adapter rendering records from `source` with `renderer`.
    pub fn new(source: S, renderer: TableRenderer) -> Self {
        Self { source, renderer }
    }

    #[must_use]
    pub fn source(&self) -> &S {
        &self.source
    }

    #[must_use]
    pub fn renderer(&self) -> &TableRenderer {
        &self.renderer
    }

    /// Fetch the records for `specifier`, render them and write the table
    /// into `sink`.
    ///
    /// An empty `lang` is treated as the default locale.
    ///
    /// # Errors
    ///
    /// Returns [`TaglistError`] if fetching, rendering or writing fails. The
    /// sink is not written unless rendering succeeded.
    pub fn render_into<K: Sink + ?Sized>(
        &self,
        sink: &mut K,
        specifier: &Specifier,
        options: &RenderOptions,
    ) -> Result<(), TaglistError> {
        let options = options.clone().normalized();
        let records = self.source.list_tags(specifier)?;
        let html = self.renderer.render_with_options(&records, &options)?;
        sink.write_markup(html)?;
        info!(
            "Rendered {} rows for {} (lang={})",
            records.len(),
            specifier,
            options.lang
        );
        Ok(())
    }

    /// Render `tags` into `sink`, logging instead of returning failures.
    ///
    /// `tags` is classified with [`Specifier::parse`]. Returns whether the
    /// sink was populated.
    pub fn show<K: Sink + ?Sized>(&self, sink: &mut K, tags: &str, options: &RenderOptions) -> bool {
        let specifier = Specifier::parse(tags);
        match self.render_into(sink, &specifier, options) {
            Ok(()) => true,
            Err(e) => {
                warn!(tags = %tags, error = %e, "Failed to render tag list");
                false
            }
        }
    }

    /// Render every target into its own sink.
    ///
    /// Targets are processed in parallel and complete in no particular order.
    /// A failed target leaves its sink untouched and does not affect others.
    /// Returns the number of populated sinks.
    pub fn convert<K: Sink + Send>(&self, targets: &mut [Target<K>]) -> usize
    where
        S: Sync,
    {
        let populated = targets
            .par_iter_mut()
            .map(|target| {
                let options = options_from_json(&target.options);
                self.show(&mut target.sink, &target.tags, &options)
            })
            .filter(|&populated| populated)
            .count();
        info!("Populated {} of {} tag lists", populated, targets.len());
        populated
    }
}
