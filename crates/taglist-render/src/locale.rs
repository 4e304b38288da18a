//! Column display names per locale and wiki locale resolution.
//!
//! Two independent fallbacks live here:
//! - [`LocaleTable::column_name`] falls back to English when the locale is not
//!   in the table (static, table-dependent).
//! - [`effective_locale`] falls back to English when a record has no wiki
//!   entry for the locale (per record, data-dependent).

use std::collections::BTreeMap;

use crate::column::BuiltinColumn;
use crate::error::RenderError;
use crate::record::TagRecord;

/// Locale used whenever the requested one has no data.
pub const DEFAULT_LOCALE: &str = "en";

/// Display names of the six built-in columns in one locale.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
pub struct ColumnNames {
    pub key: String,
    pub value: String,
    pub element: String,
    pub description: String,
    pub image: String,
    pub count: String,
}

impl ColumnNames {
    /// Create names from six strings in column order.
    #[must_use]
    pub fn new(
        key: &str,
        value: &str,
        element: &str,
        description: &str,
        image: &str,
        count: &str,
    ) -> Self {
        Self {
            key: key.to_owned(),
            value: value.to_owned(),
            element: element.to_owned(),
            description: description.to_owned(),
            image: image.to_owned(),
            count: count.to_owned(),
        }
    }

    /// Display name of `column`.
    #[must_use]
    pub fn get(&self, column: BuiltinColumn) -> &str {
        match column {
            BuiltinColumn::Key => &self.key,
            BuiltinColumn::Value => &self.value,
            BuiltinColumn::Element => &self.element,
            BuiltinColumn::Description => &self.description,
            BuiltinColumn::Image => &self.image,
            BuiltinColumn::Count => &self.count,
        }
    }

    fn first_empty(&self) -> Option<BuiltinColumn> {
        BuiltinColumn::ALL
            .into_iter()
            .find(|&column| self.get(column).is_empty())
    }
}

/// Immutable mapping from locale code to column names.
///
/// Always contains [`DEFAULT_LOCALE`], so lookups never fail.
#[derive(Debug, Clone)]
pub struct LocaleTable {
    names: BTreeMap<String, ColumnNames>,
}

impl LocaleTable {
    /// Build a table from explicit entries.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::InvalidLocaleTable`] if there is no English entry
    /// or any name is empty.
    pub fn new(names: BTreeMap<String, ColumnNames>) -> Result<Self, RenderError> {
        if !names.contains_key(DEFAULT_LOCALE) {
            return Err(RenderError::InvalidLocaleTable(format!(
                "missing required locale '{DEFAULT_LOCALE}'"
            )));
        }
        for (locale, entry) in &names {
            validate_names(locale, entry)?;
        }
        Ok(Self { names })
    }

    /// Table with the bundled translations.
    #[must_use]
    pub fn builtin() -> Self {
        let names = builtin_names()
            .into_iter()
            .map(|(locale, names)| (locale.to_owned(), names))
            .collect();
        Self { names }
    }

    /// Return a copy with `locale` added or replaced.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::InvalidLocaleTable`] if any name is empty.
    pub fn with_locale(
        mut self,
        locale: impl Into<String>,
        names: ColumnNames,
    ) -> Result<Self, RenderError> {
        let locale = locale.into();
        validate_names(&locale, &names)?;
        self.names.insert(locale, names);
        Ok(self)
    }

    /// Whether `locale` has its own entry.
    #[must_use]
    pub fn contains(&self, locale: &str) -> bool {
        self.names.contains_key(locale)
    }

    /// Locale codes in the table, sorted.
    pub fn locales(&self) -> impl Iterator<Item = &str> {
        self.names.keys().map(String::as_str)
    }

    /// Column names for `locale`, or the English ones if it is unknown.
    #[must_use]
    pub fn names(&self, locale: &str) -> &ColumnNames {
        self.names
            .get(locale)
            .or_else(|| self.names.get(DEFAULT_LOCALE))
            .expect("locale table always contains the default locale")
    }

    /// Display name of `column` in `locale`, falling back to English.
    #[must_use]
    pub fn column_name(&self, locale: &str, column: BuiltinColumn) -> &str {
        self.names(locale).get(column)
    }
}

impl Default for LocaleTable {
    fn default() -> Self {
        Self::builtin()
    }
}

fn validate_names(locale: &str, names: &ColumnNames) -> Result<(), RenderError> {
    if locale.is_empty() {
        return Err(RenderError::InvalidLocaleTable(
            "locale code cannot be empty".to_owned(),
        ));
    }
    if let Some(column) = names.first_empty() {
        return Err(RenderError::InvalidLocaleTable(format!(
            "locale '{locale}' has an empty name for column '{}'",
            column.id()
        )));
    }
    Ok(())
}

#[rustfmt::skip]
fn builtin_names() -> [(&'static str, ColumnNames); 14] {
    [
        ("cs", ColumnNames::new("Klíč", "Hodnota", "Prvek", "Popis", "Ilustrace", "Počet")),
        ("de", ColumnNames::new("Key", "Value", "Element", "Beschreibung", "Bild", "Anzahl")),
        ("en", ColumnNames::new("Key", "Value", "Element", "Description", "Image", "Count")),
        ("es", ColumnNames::new("Clave", "Valor", "Tipo", "Descripción", "Imagen", "Recuento")),
        ("fr", ColumnNames::new("Clé", "Valeur", "Élément", "Description", "Image", "Nombre")),
        ("hu", ColumnNames::new("Kulcs", "Érték", "Típus", "Leírás", "Kép", "Darab")),
        ("it", ColumnNames::new("Chiave", "Valore", "Tipo Oggetto", "Descrizione", "Immagine", "Conteggio")),
        ("ja", ColumnNames::new("キー", "値", "種別", "説明", "画像", "件数")),
        ("pl", ColumnNames::new("Klucz", "Wartość", "Rodzaj", "Opis", "Obraz", "Ilość")),
        ("pt", ColumnNames::new("Chave", "Valor", "Tipo", "Descrição", "Imagem", "Contagem")),
        ("ru", ColumnNames::new("Ключ", "Значение", "Тип", "Описание", "Изображение", "Количество")),
        ("uk", ColumnNames::new("Ключ", "Значення", "Тип", "Опис", "Зображення", "Кількість")),
        ("vi", ColumnNames::new("Chìa khóa", "Giá trị", "Kiểu", "Miêu tả", "Hình ảnh", "Tổng số")),
        ("zh-TW", ColumnNames::new("鍵", "值", "類型", "描述", "圖片", "計數")),
    ]
}

/// Wiki namespace of a documentation page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WikiNamespace {
    Key,
    Tag,
}

impl WikiNamespace {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Key => "Key",
            Self::Tag => "Tag",
        }
    }
}

/// Wiki page title prefix, e.g. `Key:` for English or `de:Key:` otherwise.
#[must_use]
pub fn wiki_prefix(locale: &str, namespace: WikiNamespace) -> String {
    if locale == DEFAULT_LOCALE {
        format!("{}:", namespace.as_str())
    } else {
        format!("{locale}:{}:", namespace.as_str())
    }
}

/// Locale to use for a record's wiki links: `requested` if the record has a
/// wiki entry in it, English otherwise.
#[must_use]
pub fn effective_locale<'a>(record: &TagRecord, requested: &'a str) -> &'a str {
    if record.has_wiki(requested) {
        requested
    } else {
        DEFAULT_LOCALE
    }
}
