//! Fetch tag statistics from taginfo and render them as tag tables.
//!
//! This crate connects the pure renderer in `taglist-render` to the taginfo
//! list API and to markup destinations:
//! - [`Specifier`]: key or key=value, mapped to the `key=`/`tags=` query
//! - [`TagSource`]: one request per call; [`TaginfoClient`] uses `ureq`
//! - [`Sink`]: receives the rendered table ([`String`], [`FileSink`])
//! - [`Taglist`]: `render_into`, `show` and batch `convert`
//! - [`MockSource`] for testing (behind `mock` feature flag)
//!
//! # Example
//!
//! ```no_run
//! use taglist_render::{RenderOptions, TableRenderer};
//! use taglist_taginfo::{Taglist, TaginfoClient};
//!
//! let taglist = Taglist::new(TaginfoClient::default(), TableRenderer::default());
//! let mut html = String::new();
//! taglist.show(&mut html, "highway=primary", &RenderOptions::new("de"));
//! ```

mod client;
mod error;
#[cfg(any(test, feature = "mock"))]
mod mock;
mod sink;
mod source;
mod specifier;
mod taglist;

pub use client::{DEFAULT_TIMEOUT, TaginfoClient};
pub use error::{FetchError, TaglistError};
#[cfg(any(test, feature = "mock"))]
pub use mock::MockSource;
pub use sink::{FileSink, Sink};
pub use source::{TagSource, parse_list_response};
pub use specifier::Specifier;
pub use taglist::{Taglist, Target, options_from_json};
