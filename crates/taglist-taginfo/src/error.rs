//! Error types for fetching and rendering tag lists.

use taglist_render::RenderError;

/// Error from the taginfo list API.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// HTTP request failed (network error, timeout, etc).
    #[error("HTTP request failed: {0}")]
    HttpRequest(#[from] ureq::Error),

    /// HTTP response error (server returned error status).
    #[error("HTTP error: {status} - {body}")]
    HttpResponse {
        /// HTTP status code.
        status: u16,
        /// Response body (may contain error details).
        body: String,
    },

    /// Response body is not a valid `{"data": [...]}` envelope.
    #[error("invalid tag list response: {0}")]
    Json(#[from] serde_json::Error),
}

/// Error from a single fetch-and-render pass.
#[derive(Debug, thiserror::Error)]
pub enum TaglistError {
    /// Records could not be fetched.
    #[error("fetch failed: {0}")]
    Fetch(#[from] FetchError),

    /// Records could not be rendered.
    #[error("render failed: {0}")]
    Render(#[from] RenderError),

    /// Markup could not be written to the sink.
    #[error("sink write failed: {0}")]
    Sink(#[from] std::io::Error),
}
