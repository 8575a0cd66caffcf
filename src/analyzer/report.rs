// src/analyzer/report.rs
// =============================================================================
// The value types produced by the analyzer.
//
// A SeoReport is built once, never changed afterwards, and handed to the
// renderer. Everything a renderer needs lives here, so it never has to look
// at the original page again.
//
// #[derive(Serialize)] lets the JSON renderer print the report directly.
// Field names are camelCase in JSON (metaDescription, missingAlt).
// =============================================================================

use serde::Serialize;
use std::collections::BTreeMap;

/// Placeholder used when the title or meta description is missing.
pub const NOT_FOUND: &str = "Not found";

/// Heading levels the analyzer looks at, in order.
pub const HEADING_LEVELS: [&str; 6] = ["h1", "h2", "h3", "h4", "h5", "h6"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeoReport {
    pub title: TitleInfo,
    pub meta_description: MetaDescriptionInfo,
    pub headings: HeadingInfo,
    pub images: ImageInfo,
    pub links: LinkInfo,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TitleInfo {
    pub content: String,
    /// Number of characters in `content`
    pub length: usize,
}

impl TitleInfo {
    pub fn new(content: String) -> Self {
        let length = content.chars().count();
        Self { content, length }
    }

    pub fn not_found() -> Self {
        Self::new(NOT_FOUND.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetaDescriptionInfo {
    pub content: String,
    /// Number of characters in `content`
    pub length: usize,
}

impl MetaDescriptionInfo {
    pub fn new(content: String) -> Self {
        let length = content.chars().count();
        Self { content, length }
    }

    pub fn not_found() -> Self {
        Self::new(NOT_FOUND.to_string())
    }
}

/// Heading texts grouped by level ("h1" .. "h6").
///
/// Every level is always present; a level with no headings maps to an
/// empty list. Within a level, texts keep document order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct HeadingInfo {
    levels: BTreeMap<String, Vec<String>>,
}

impl HeadingInfo {
    /// All six levels, each with no headings.
    pub fn empty() -> Self {
        let levels = HEADING_LEVELS
            .iter()
            .map(|label| (label.to_string(), Vec::new()))
            .collect();
        Self { levels }
    }

    pub(crate) fn push(&mut self, label: &str, text: String) {
        self.levels.entry(label.to_string()).or_default().push(text);
    }

    /// Headings for a label such as "h2". Unknown labels give an empty slice.
    pub fn level(&self, label: &str) -> &[String] {
        self.levels.get(label).map(Vec::as_slice).unwrap_or(&[])
    }

    /// (label, headings) pairs from h1 to h6.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.levels
            .iter()
            .map(|(label, texts)| (label.as_str(), texts.as_slice()))
    }

    /// Total number of headings across all levels.
    pub fn total(&self) -> usize {
        self.levels.values().map(Vec::len).sum()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageInfo {
    pub total: usize,
    /// Images without a non-empty alt text (always <= total)
    pub missing_alt: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct LinkInfo {
    /// Always internal + external
    pub total: usize,
    pub internal: usize,
    pub external: usize,
}
