// src/analyzer/document.rs
// =============================================================================
// A read-only view over a parsed HTML page.
//
// The analyzer only ever asks two questions of a page:
// - "give me the first <tag> that matches this test"
// - "give me every <tag>, in the order they appear"
//
// We use the `scraper` crate (html5ever underneath) to build the tree. The
// parser never fails: broken markup is repaired the same way a browser
// would repair it, so `parse` returns the document directly.
// =============================================================================

use scraper::{ElementRef, Html};

/// A parsed HTML document. Created once per analysis and never mutated.
pub struct ParsedDocument {
    html: Html,
}

impl ParsedDocument {
    /// Parses a full HTML document (html5ever adds any missing
    /// `<html>`, `<head>` and `<body>` wrappers).
    pub fn parse(html: &str) -> Self {
        Self {
            html: Html::parse_document(html),
        }
    }

    /// Every element with the given tag name, in document order.
    ///
    /// Tag names are compared case-insensitively; html5ever already
    /// lowercases HTML element names while parsing.
    pub fn find_all<'a>(&'a self, tag: &'a str) -> impl Iterator<Item = ElementRef<'a>> + 'a {
        self.html
            .root_element()
            .descendants()
            .filter_map(ElementRef::wrap)
            .filter(move |element| element.value().name().eq_ignore_ascii_case(tag))
    }

    /// The first element with the given tag name for which `predicate` holds.
    pub fn find_first<'a, P>(&'a self, tag: &'a str, predicate: P) -> Option<ElementRef<'a>>
    where
        P: Fn(&ElementRef<'a>) -> bool,
    {
        self.find_all(tag).find(|element| predicate(element))
    }
}

/// Concatenated text of every text node under `element` (DOM `textContent`).
pub fn text_content(element: &ElementRef<'_>) -> String {
    element.text().collect()
}
