// src/analyzer/headings.rs
// Collects the text of every h1..h6 element, grouped by level.

use super::document::{text_content, ParsedDocument};
use super::report::{HeadingInfo, HEADING_LEVELS};

// Groups heading texts by level
//
// Parameters:
//   doc: the parsed page
//
// Returns: HeadingInfo with all six levels, empty where the page has none
//
// Example:
//   <h1>Main</h1><h2>A</h2><h2>B</h2>  -> h1 = ["Main"], h2 = ["A", "B"], h3..h6 = []
pub fn analyze_headings(doc: &ParsedDocument) -> HeadingInfo {
    let mut headings = HeadingInfo::empty();

    for label in HEADING_LEVELS {
        for heading in doc.find_all(label) {
            headings.push(label, text_content(&heading));
        }
    }

    log::debug!("Found {} heading(s)", headings.total());
    headings
}
