// src/analyzer/links.rs
// =============================================================================
// Splits the page's <a> elements into internal and external links.
//
// How it works:
// 1. Parse the base URL once (the page being analyzed)
// 2. Resolve every href against it, like a browser does
// 3. Compare the resolved hostname with the base hostname
//
// Links that cannot be resolved to a URL with a hostname (mailto:,
// javascript:, missing href, garbage) go through UnresolvedLinkPolicy:
// counted as internal by default, or left out of the counts entirely.
// =============================================================================

use url::Url;

use super::document::ParsedDocument;
use super::report::LinkInfo;

/// What to do with a link whose href cannot be resolved to a hostname.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnresolvedLinkPolicy {
    /// Count it as an internal link
    #[default]
    CountInternal,
    /// Leave it out of total, internal and external
    Exclude,
}

// Where a single link points
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LinkTarget {
    Internal,
    External,
    Unresolved,
}

// Counts <a> elements as internal or external
//
// Parameters:
//   doc: the parsed page
//   base_url: URL of the page (for resolving relative links)
//   policy: what to do with links that have no resolvable hostname
//
// Returns: LinkInfo where internal + external == total
//
// Example (base = "https://example.com/"):
//   <a href="/about"> <a href="https://other.com/x">  -> total = 2, internal = 1, external = 1
pub fn analyze_links(doc: &ParsedDocument, base_url: &str, policy: UnresolvedLinkPolicy) -> LinkInfo {
    let base = match Url::parse(base_url) {
        Ok(url) => Some(url),
        Err(e) => {
            // Every link ends up unresolved, which the policy handles below
            log::warn!("Invalid base URL '{}': {}", base_url, e);
            None
        }
    };

    let mut links = LinkInfo::default();

    for anchor in doc.find_all("a") {
        let href = anchor.value().attr("href");

        let target = match &base {
            Some(base) => classify(base, href),
            None => LinkTarget::Unresolved,
        };

        match (target, policy) {
            (LinkTarget::Internal, _) | (LinkTarget::Unresolved, UnresolvedLinkPolicy::CountInternal) => {
                links.internal += 1;
            }
            (LinkTarget::External, _) => links.external += 1,
            (LinkTarget::Unresolved, UnresolvedLinkPolicy::Exclude) => {
                log::debug!("Skipping unresolved link: {:?}", href);
                continue;
            }
        }
        links.total += 1;
    }

    log::debug!(
        "Found {} link(s): {} internal, {} external",
        links.total,
        links.internal,
        links.external
    );
    links
}

// Decides whether one href points at the base host
//
// Examples (base = "https://example.com/blog/"):
//   "/about"                 -> Internal
//   "post-2"                 -> Internal  (https://example.com/blog/post-2)
//   "//cdn.example.net/x.js" -> External
//   "https://other.com/x"    -> External
//   "mailto:hi@example.com"  -> Unresolved (no hostname)
fn classify(base: &Url, href: Option<&str>) -> LinkTarget {
    let Some(href) = href else {
        return LinkTarget::Unresolved;
    };

    let Some(resolved) = resolve_url(base, href) else {
        return LinkTarget::Unresolved;
    };

    match (resolved.host_str(), base.host_str()) {
        (Some(host), Some(base_host)) if host == base_host => LinkTarget::Internal,
        (Some(_), Some(_)) => LinkTarget::External,
        _ => LinkTarget::Unresolved,
    }
}

// Resolves a possibly-relative href to an absolute URL
//
// Url::join handles every shape an href can take: absolute, root-relative,
// path-relative and protocol-relative ("//host/path").
fn resolve_url(base: &Url, href: &str) -> Option<Url> {
    match base.join(href) {
        Ok(url) => Some(url),
        Err(e) => {
            log::debug!("Could not resolve href '{}': {}", href, e);
            None
        }
    }
}
