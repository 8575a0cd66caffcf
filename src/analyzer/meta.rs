// src/analyzer/meta.rs
// =============================================================================
// Title and meta description.
//
// Both look up a single element and fall back to the "Not found" placeholder
// when it is missing. Nothing here can fail.
// =============================================================================

use super::document::{text_content, ParsedDocument};
use super::report::{MetaDescriptionInfo, TitleInfo};

// Reads the first <title> element
//
// Examples:
//   <title>Example</title>  -> content = "Example", length = 7
//   (no <title>)            -> content = "Not found", length = 9
pub fn analyze_title(doc: &ParsedDocument) -> TitleInfo {
    match doc.find_first("title", |_| true) {
        Some(title) => TitleInfo::new(text_content(&title)),
        None => TitleInfo::not_found(),
    }
}

// Reads the first <meta name="description" content="...">
//
// The name must be exactly "description" (case-sensitive). A matching <meta>
// without a content attribute is treated like a missing description.
pub fn analyze_meta_description(doc: &ParsedDocument) -> MetaDescriptionInfo {
    doc.find_first("meta", |meta| meta.value().attr("name") == Some("description"))
        .and_then(|meta| meta.value().attr("content"))
        .map(|content| MetaDescriptionInfo::new(content.to_string()))
        .unwrap_or_else(MetaDescriptionInfo::not_found)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_found() {
        let doc = ParsedDocument::parse("<html><head><title>Example</title></head></html>");
        let title = analyze_title(&doc);
        assert_eq!(title.content, "Example");
        assert_eq!(title.length, 7);
    }

    #[test]
    fn test_title_missing_uses_sentinel() {
        let doc = ParsedDocument::parse("<html><body><h1>No title</h1></body></html>");
        let title = analyze_title(&doc);
        assert_eq!(title.content, "Not found");
        assert_eq!(title.length, 9);
    }

    #[test]
    fn test_first_title_wins() {
        let doc = ParsedDocument::parse("<title>First</title><title>Second</title>");
        assert_eq!(analyze_title(&doc).content, "First");
    }

    #[test]
    fn test_empty_title_is_not_the_sentinel() {
        let doc = ParsedDocument::parse("<title></title>");
        let title = analyze_title(&doc);
        assert_eq!(title.content, "");
        assert_eq!(title.length, 0);
    }

    #[test]
    fn test_meta_description_found() {
        let doc = ParsedDocument::parse(
            r#"<head><meta name="description" content="A short summary"></head>"#,
        );
        let meta = analyze_meta_description(&doc);
        assert_eq!(meta.content, "A short summary");
        assert_eq!(meta.length, 15);
    }

    #[test]
    fn test_meta_description_missing() {
        let doc = ParsedDocument::parse(r#"<head><meta charset="utf-8"></head>"#);
        let meta = analyze_meta_description(&doc);
        assert_eq!(meta.content, "Not found");
        assert_eq!(meta.length, 9);
    }

    #[test]
    fn test_meta_description_without_content_attribute() {
        let doc = ParsedDocument::parse(r#"<head><meta name="description"></head>"#);
        assert_eq!(analyze_meta_description(&doc).content, "Not found");
    }

    #[test]
    fn test_meta_description_name_is_case_sensitive() {
        let doc = ParsedDocument::parse(r#"<meta name="Description" content="Upper">"#);
        assert_eq!(analyze_meta_description(&doc).content, "Not found");
    }

    #[test]
    fn test_meta_description_empty_content() {
        let doc = ParsedDocument::parse(r#"<meta name="description" content="">"#);
        let meta = analyze_meta_description(&doc);
        assert_eq!(meta.content, "");
        assert_eq!(meta.length, 0);
    }
}
