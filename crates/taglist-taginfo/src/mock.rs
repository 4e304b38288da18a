//! Mock record source for testing.
//!
//! Provides [`MockSource`] for exercising the adapter without network access.

use std::collections::HashMap;
use std::sync::RwLock;

use taglist_render::TagRecord;

use crate::error::FetchError;
use crate::source::TagSource;
use crate::specifier::Specifier;

/// Canned response for one query.
#[derive(Debug, Clone)]
enum Response {
    Records(Vec<TagRecord>),
    Status(u16),
}

/// Mock source keyed by query string (e.g. `key=highway`).
///
/// Queries without a canned response fail with HTTP 404. Every request is
/// recorded and available through [`MockSource::requests`].
///
/// # Example
///
/// ```ignore
/// use taglist_render::TagRecord;
/// use taglist_taginfo::{MockSource, Specifier, TagSource};
///
/// let source = MockSource::new()
///     .with_records("key=highway", vec![TagRecord::new("highway", "primary")]);
///
/// let records = source.list_tags(&Specifier::parse("highway")).unwrap();
/// ```
#[derive(Debug, Default)]
pub struct MockSource {
    responses: HashMap<String, Response>,
    requests: RwLock<Vec<String>>,
}

impl MockSource {
    /// Create a new mock without responses.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer `query` with `records`.
    #[must_use]
    pub fn with_records(mut self, query: &str, records: Vec<TagRecord>) -> Self {
        self.responses
            .insert(query.to_owned(), Response::Records(records));
        self
    }

    /// Answer `query` with an HTTP error status.
    #[must_use]
    pub fn with_status(mut self, query: &str, status: u16) -> Self {
        self.responses
            .insert(query.to_owned(), Response::Status(status));
        self
    }

    /// Queries received so far, in arrival order.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn requests(&self) -> Vec<String> {
        self.requests.read().unwrap().clone()
    }
}

impl TagSource for MockSource {
    fn list_tags(&self, specifier: &Specifier) -> Result<Vec<TagRecord>, FetchError> {
        let query = specifier.query();
        self.requests.write().unwrap().push(query.clone());
        match self.responses.get(&query) {
            Some(Response::Records(records)) => Ok(records.clone()),
            Some(Response::Status(status)) => Err(FetchError::HttpResponse {
                status: *status,
                body: String::new(),
            }),
            None => Err(FetchError::HttpResponse {
                status: 404,
                body: format!("no mock response for {query}"),
            }),
        }
    }
}
