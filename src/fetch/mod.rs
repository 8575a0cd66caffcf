// src/fetch/mod.rs
// =============================================================================
// This module gets a page into memory and hands it to the analyzer.
//
// Submodules:
// - proxy: downloads a URL (through a proxy, or directly)
// - error: FetchError, the single error type of this stage
//
// load_file() is the offline path: it reads an HTML file from disk.
// Both paths end in document_from_html(), which refuses empty pages.
// =============================================================================

mod error;
mod proxy;

pub use error::FetchError;
pub use proxy::{FetchMode, FetchOptions, Fetcher, DEFAULT_PROXY_ENDPOINT};

use crate::analyzer::ParsedDocument;
use std::path::Path;

/// Reads a local HTML file and parses it.
pub fn load_file(path: &Path) -> Result<ParsedDocument, FetchError> {
    let bytes = std::fs::read(path).map_err(|source| FetchError::Io {
        path: path.display().to_string(),
        source,
    })?;

    let html = String::from_utf8(bytes)
        .map_err(|e| FetchError::Parse(format!("{} is not valid UTF-8: {}", path.display(), e)))?;

    document_from_html(&html)
}

// Parses HTML, failing if there is nothing to parse
fn document_from_html(html: &str) -> Result<ParsedDocument, FetchError> {
    if html.trim().is_empty() {
        log::warn!("Received empty content");
        return Err(FetchError::EmptyContent);
    }
    Ok(ParsedDocument::parse(html))
}
