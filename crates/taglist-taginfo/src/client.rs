//! Taginfo HTTP client.
//!
//! Provides a sync client for the taginfo list API.

use std::time::Duration;

use taglist_render::{DEFAULT_TAGINFO_URL, TagRecord};
use tracing::info;
use ureq::Agent;

use crate::error::FetchError;
use crate::source::{TagSource, parse_list_response};
use crate::specifier::Specifier;

/// Default HTTP timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Path of the tag list endpoint below the taginfo base.
const LIST_ENDPOINT: &str = "api/4/tags/list";

/// Taginfo API client.
pub struct TaginfoClient {
    agent: Agent,
    base_url: String,
}

impl Default for TaginfoClient {
    fn default() -> Self {
        Self::new(DEFAULT_TAGINFO_URL, DEFAULT_TIMEOUT)
    }
}

impl TaginfoClient {
    /// Create a client for the taginfo instance at `base_url`.
    ///
    /// The timeout applies to the whole request; no retries are made.
    #[must_use]
    pub fn new(base_url: &str, timeout: Duration) -> Self {
        let agent = Agent::config_builder()
            .timeout_global(Some(timeout))
            .http_status_as_error(false)
            .build()
            .into();

        Self {
            agent,
            base_url: format!("{}/", base_url.trim_end_matches('/')),
        }
    }

    /// Full request URL for `specifier`.
    #[must_use]
    pub fn list_url(&self, specifier: &Specifier) -> String {
        format!("{}{LIST_ENDPOINT}?{}", self.base_url, specifier.query())
    }
}

impl TagSource for TaginfoClient {
    fn list_tags(&self, specifier: &Specifier) -> Result<Vec<TagRecord>, FetchError> {
        let url = self.list_url(specifier);

        info!("Fetching tag list for {}", specifier);
        tracing::debug!(url = %url, "Taginfo request");

        let response = self
            .agent
            .get(&url)
            .header("Accept", "application/json")
            .call()?;

        let status = response.status().as_u16();
        let mut body_reader = response.into_body();

        if status >= 400 {
            let error_body = body_reader
                .read_to_string()
                .unwrap_or_else(|_| "(unable to read error body)".to_owned());
            return Err(FetchError::HttpResponse {
                status,
                body: error_body,
            });
        }

        let body = body_reader.read_to_string()?;
        let records = parse_list_response(&body)?;
        info!("Found {} records for {}", records.len(), specifier);
        Ok(records)
    }
}
