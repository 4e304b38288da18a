//! Per-table rendering options.

use crate::column::BuiltinColumn;
use crate::locale::DEFAULT_LOCALE;

/// Options recognized when rendering one table.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RenderOptions {
    /// Locale code for column names and wiki links.
    pub lang: String,
    /// Append the usage count column.
    pub with_count: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            lang: DEFAULT_LOCALE.to_owned(),
            with_count: false,
        }
    }
}

impl RenderOptions {
    /// Options for `lang` without counts.
    #[must_use]
    pub fn new(lang: impl Into<String>) -> Self {
        Self {
            lang: lang.into(),
            with_count: false,
        }
    }

    /// Enable or disable the count column.
    #[must_use]
    pub fn with_count(mut self, with_count: bool) -> Self {
        self.with_count = with_count;
        self
    }

    /// Copy with an empty `lang` replaced by the default locale.
    #[must_use]
    pub fn normalized(mut self) -> Self {
        if self.lang.is_empty() {
            DEFAULT_LOCALE.clone_into(&mut self.lang);
        }
        self
    }

    /// Columns to render: key, value, element, description, image, and
    /// count last when enabled.
    #[must_use]
    pub fn columns(&self) -> Vec<BuiltinColumn> {
        let mut columns = vec![
            BuiltinColumn::Key,
            BuiltinColumn::Value,
            BuiltinColumn::Element,
            BuiltinColumn::Description,
            BuiltinColumn::Image,
        ];
        if self.with_count {
            columns.push(BuiltinColumn::Count);
        }
        columns
    }
}
