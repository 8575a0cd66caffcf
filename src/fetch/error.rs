// src/fetch/error.rs
// Everything that can go wrong before the analyzer gets a page.

use thiserror::Error;

/// A fetch-stage failure. Shown to the user as one readable message.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Nothing was entered
    #[error("Please enter a URL.")]
    MissingUrl,

    /// The target is not an http(s) URL
    #[error("Invalid URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    /// Connection, TLS, timeout or body read failure
    #[error("Network error while fetching {url}: {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The proxy (or the target, in direct mode) answered with a non-2xx status
    #[error("Failed to fetch {url}: HTTP {status}")]
    Status { url: String, status: u16 },

    /// The proxy answered 2xx but the body was not the JSON we expect
    #[error("Unexpected response from proxy: {0}")]
    Proxy(String),

    /// The page came back empty
    #[error("Could not fetch the content of the URL.")]
    EmptyContent,

    /// A local file could not be read
    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The content is not text we can turn into a document
    #[error("Could not parse the page: {0}")]
    Parse(String),
}
