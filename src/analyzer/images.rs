// src/analyzer/images.rs
// =============================================================================
// Counts <img> elements and how many of them lack alternative text.
//
// An image is "missing alt" when it has no alt attribute, or the attribute
// is empty or only whitespace.
// =============================================================================

use super::document::ParsedDocument;
use super::report::ImageInfo;

// Counts images and the ones without alt text
//
// Parameters:
//   doc: the parsed page
//
// Returns: ImageInfo with total and missing_alt (missing_alt <= total)
//
// Example:
//   <img src="a.png"><img src="b.png" alt="Logo">  -> total = 2, missing_alt = 1
pub fn analyze_images(doc: &ParsedDocument) -> ImageInfo {
    let mut total = 0;
    let mut missing_alt = 0;

    for image in doc.find_all("img") {
        total += 1;
        if !has_alt_text(image.value().attr("alt")) {
            missing_alt += 1;
        }
    }

    log::debug!("Found {} image(s), {} without alt text", total, missing_alt);
    ImageInfo { total, missing_alt }
}

// True when the alt attribute exists and holds something besides whitespace
fn has_alt_text(alt: Option<&str>) -> bool {
    alt.map(|text| !text.trim().is_empty()).unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_without_alt() {
        let doc = ParsedDocument::parse(r#"<img src="a.png">"#);
        assert_eq!(
            analyze_images(&doc),
            ImageInfo {
                total: 1,
                missing_alt: 1
            }
        );
    }

    #[test]
    fn test_empty_and_blank_alt_count_as_missing() {
        let doc = ParsedDocument::parse(
            r#"<img src="a.png" alt=""><img src="b.png" alt="   "><img src="c.png" alt="Logo">"#,
        );
        let images = analyze_images(&doc);
        assert_eq!(images.total, 3);
        assert_eq!(images.missing_alt, 2);
    }

    #[test]
    fn test_no_images() {
        let doc = ParsedDocument::parse("<p>text only</p>");
        let images = analyze_images(&doc);
        assert_eq!(images.total, 0);
        assert_eq!(images.missing_alt, 0);
    }

    #[test]
    fn test_missing_alt_never_exceeds_total() {
        let doc = ParsedDocument::parse(r#"<img><img alt><img alt="x"><img alt=""><img>"#);
        let images = analyze_images(&doc);
        assert!(images.missing_alt <= images.total);
        assert_eq!(images.total, 5);
        assert_eq!(images.missing_alt, 4);
    }

    // Property-based tests using proptest
    use proptest::prelude::*;

    // An alt attribute: absent, empty, blank or real text
    fn alt_strategy() -> impl Strategy<Value = Option<String>> {
        prop_oneof![
            Just(None),
            Just(Some(String::new())),
            "[ \t]{1,4}".prop_map(Some),
            "[A-Za-z0-9 ]{1,12}".prop_map(Some),
        ]
    }

    proptest! {
        #[test]
        fn test_missing_alt_matches_generated_images(
            alts in prop::collection::vec(alt_strategy(), 0..30)
        ) {
            let html: String = alts
                .iter()
                .map(|alt| match alt {
                    Some(alt) => format!(r#"<img src="p.png" alt="{}">"#, alt),
                    None => r#"<img src="p.png">"#.to_string(),
                })
                .collect();
            let expected_missing = alts
                .iter()
                .filter(|alt| alt.as_deref().map(|a| a.trim().is_empty()).unwrap_or(true))
                .count();

            let images = analyze_images(&ParsedDocument::parse(&html));
            prop_assert!(images.missing_alt <= images.total);
            prop_assert_eq!(images.total, alts.len());
            prop_assert_eq!(images.missing_alt, expected_missing);
        }
    }
}
