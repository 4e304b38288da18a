//! Record sources and list API response parsing.

use serde::Deserialize;
use taglist_render::TagRecord;

use crate::error::FetchError;
use crate::specifier::Specifier;

/// Supplies the records for one specifier.
///
/// Implementations issue exactly one request per call and do not retry.
pub trait TagSource {
    /// Fetch all records matching `specifier`.
    fn list_tags(&self, specifier: &Specifier) -> Result<Vec<TagRecord>, FetchError>;
}

impl<T: TagSource + ?Sized> TagSource for &T {
    fn list_tags(&self, specifier: &Specifier) -> Result<Vec<TagRecord>, FetchError> {
        (**self).list_tags(specifier)
    }
}

/// Response envelope of `/api/4/tags/list`.
#[derive(Debug, Deserialize)]
struct ListResponse {
    data: Vec<serde_json::Value>,
}

/// Parse a list API response body.
///
/// Entries of `data` that are not valid records are skipped with a warning,
/// so one malformed record does not blank the table.
///
/// # Errors
///
/// Returns [`FetchError::Json`] if the body is not JSON or lacks `data`.
pub fn parse_list_response(body: &str) -> Result<Vec<TagRecord>, FetchError> {
    let response: ListResponse = serde_json::from_str(body)?;
    let total = response.data.len();
    let records: Vec<TagRecord> = response
        .data
        .into_iter()
        .enumerate()
        .filter_map(|(index, value)| match serde_json::from_value(value) {
            Ok(record) => Some(record),
            Err(e) => {
                tracing::warn!(index, error = %e, "Skipping malformed tag record");
                None
            }
        })
        .collect();
    tracing::debug!(total, parsed = records.len(), "Parsed tag list response");
    Ok(records)
}
