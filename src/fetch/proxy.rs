// src/fetch/proxy.rs
// =============================================================================
// This module downloads the page to analyze.
//
// Two modes:
// - Proxy (default): ask a CORS-style proxy for the page. The proxy answers
//   with JSON like {"contents": "<html>...</html>", "status": {...}} and we
//   only care about "contents".
// - Direct: GET the page ourselves.
//
// One request per run: no retries, no crawling. If the page comes back
// empty we fail with EmptyContent instead of analyzing nothing.
//
// Rust concepts:
// - async/await: the HTTP request is the only thing that waits on I/O
// - Result<T, E> with our own FetchError enum
// - serde: to read the proxy's JSON response
// =============================================================================

use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use url::Url;

use super::error::FetchError;
use super::document_from_html;
use crate::analyzer::ParsedDocument;

/// Public endpoint used when no --proxy is given.
pub const DEFAULT_PROXY_ENDPOINT: &str = "https://api.allorigins.win/get";

/// How the page is downloaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FetchMode {
    #[default]
    Proxy,
    Direct,
}

#[derive(Debug, Clone)]
pub struct FetchOptions {
    pub mode: FetchMode,
    /// Proxy endpoint; the target is passed as its `url` query parameter
    pub proxy_endpoint: String,
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            mode: FetchMode::Proxy,
            proxy_endpoint: DEFAULT_PROXY_ENDPOINT.to_string(),
            timeout: Duration::from_secs(15),
            user_agent: concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

// Shape of the proxy's JSON answer
//
// Other fields (status, content type, ...) are ignored by serde.
#[derive(Debug, Deserialize)]
struct ProxyResponse {
    contents: Option<String>,
}

/// Downloads pages with one reusable HTTP client.
pub struct Fetcher {
    client: Client,
    options: FetchOptions,
}

impl Fetcher {
    pub fn new(options: FetchOptions) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(options.timeout)
            .user_agent(options.user_agent.clone())
            .redirect(reqwest::redirect::Policy::limited(5))
            .build()
            .map_err(|source| FetchError::Network {
                url: options.proxy_endpoint.clone(),
                source,
            })?;

        Ok(Self { client, options })
    }

    #[cfg(test)]
    fn with_client(client: Client, options: FetchOptions) -> Self {
        Self { client, options }
    }

    /// Fetches `target` and parses it into a document.
    pub async fn fetch(&self, target: &str) -> Result<ParsedDocument, FetchError> {
        let target = validate_target(target)?;

        let html = match self.options.mode {
            FetchMode::Proxy => self.fetch_via_proxy(&target).await?,
            FetchMode::Direct => self.fetch_direct(&target).await?,
        };

        log::info!("Fetched {} characters of HTML", html.chars().count());
        document_from_html(&html)
    }

    async fn fetch_via_proxy(&self, target: &Url) -> Result<String, FetchError> {
        let request_url = proxy_request_url(&self.options.proxy_endpoint, target)?;
        let body = self.get_text(&request_url).await?;
        decode_proxy_body(&body)
    }

    async fn fetch_direct(&self, target: &Url) -> Result<String, FetchError> {
        self.get_text(target).await
    }

    // GETs a URL and returns the body, failing on non-2xx statuses
    async fn get_text(&self, url: &Url) -> Result<String, FetchError> {
        log::info!("GET {}", url);

        let response = self
            .client
            .get(url.as_str())
            .send()
            .await
            .map_err(|source| network_error(url, source))?;

        let status = response.status();
        if !status.is_success() {
            log::warn!("{} answered HTTP {}", url, status);
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        response.text().await.map_err(|source| network_error(url, source))
    }
}

fn network_error(url: &Url, source: reqwest::Error) -> FetchError {
    log::warn!("Request to {} failed: {}", url, source);
    FetchError::Network {
        url: url.to_string(),
        source,
    }
}

// Checks the user's input before any request is made
//
// Accepts only absolute http:// and https:// URLs.
fn validate_target(target: &str) -> Result<Url, FetchError> {
    let target = target.trim();
    if target.is_empty() {
        return Err(FetchError::MissingUrl);
    }

    let url = Url::parse(target).map_err(|e| FetchError::InvalidUrl {
        url: target.to_string(),
        reason: e.to_string(),
    })?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(FetchError::InvalidUrl {
            url: target.to_string(),
            reason: format!("unsupported scheme '{}'", other),
        }),
    }
}

// Builds "<endpoint>?url=<target>" with the target percent-encoded
fn proxy_request_url(endpoint: &str, target: &Url) -> Result<Url, FetchError> {
    Url::parse_with_params(endpoint, &[("url", target.as_str())]).map_err(|e| {
        FetchError::InvalidUrl {
            url: endpoint.to_string(),
            reason: e.to_string(),
        }
    })
}

// Pulls the page HTML out of the proxy's JSON body
fn decode_proxy_body(body: &str) -> Result<String, FetchError> {
    let response: ProxyResponse =
        serde_json::from_str(body).map_err(|e| FetchError::Proxy(e.to_string()))?;

    match response.contents {
        Some(contents) if !contents.trim().is_empty() => Ok(contents),
        _ => Err(FetchError::EmptyContent),
    }
}
