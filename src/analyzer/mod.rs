// src/analyzer/mod.rs
// =============================================================================
// This module turns a parsed page into an SEO report.
//
// Submodules:
// - document: ParsedDocument, the read-only page we query
// - report: SeoReport and its parts (the analyzer's output)
// - meta: title and meta description
// - headings: h1..h6 texts
// - images: image count and missing alt text
// - links: internal/external link split
//
// analyze() is a pure function: same document + base URL in, same report
// out. It never fails; missing elements become "Not found" or zero counts.
// =============================================================================

mod document;
mod headings;
mod images;
mod links;
mod meta;
mod report;

pub use document::ParsedDocument;
pub use links::UnresolvedLinkPolicy;
pub use report::{SeoReport, NOT_FOUND};

/// Knobs for the analysis. The defaults reproduce the classic behaviour.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnalyzerOptions {
    pub unresolved_links: UnresolvedLinkPolicy,
}

/// Runs every sub-analysis over `doc`, resolving links against `base_url`.
pub fn analyze(doc: &ParsedDocument, base_url: &str, options: &AnalyzerOptions) -> SeoReport {
    SeoReport {
        title: meta::analyze_title(doc),
        meta_description: meta::analyze_meta_description(doc),
        headings: headings::analyze_headings(doc),
        images: images::analyze_images(doc),
        links: links::analyze_links(doc, base_url, options.unresolved_links),
    }
}

#[cfg(test)]
mod tests {
    use super::report::{HeadingInfo, LinkInfo, MetaDescriptionInfo, TitleInfo};
    use super::*;

    #[test]
    fn test_basic_page_report() {
        let html = r#"
            <html>
              <head><title>Example</title></head>
              <body>
                <h1>Hi</h1>
                <img src="a.png">
                <a href="/about">About</a>
              </body>
            </html>
        "#;
        let doc = ParsedDocument::parse(html);
        let report = analyze(&doc, "https://example.com/", &AnalyzerOptions::default());

        assert_eq!(report.title.content, "Example");
        assert_eq!(report.title.length, 7);
        assert_eq!(report.meta_description.content, NOT_FOUND);
        assert_eq!(report.headings.level("h1"), ["Hi"]);
        assert_eq!(report.images.total, 1);
        assert_eq!(report.images.missing_alt, 1);
        assert_eq!(report.links.total, 1);
        assert_eq!(report.links.internal, 1);
        assert_eq!(report.links.external, 0);
    }

    #[test]
    fn test_external_link_report() {
        let doc = ParsedDocument::parse(r#"<a href="https://other.com/x">Other</a>"#);
        let report = analyze(&doc, "https://example.com/", &AnalyzerOptions::default());

        assert_eq!(report.links.external, 1);
        assert_eq!(report.links.internal, 0);
    }

    #[test]
    fn test_empty_document() {
        let doc = ParsedDocument::parse("");
        let report = analyze(&doc, "https://example.com/", &AnalyzerOptions::default());

        assert_eq!(report.title, TitleInfo::not_found());
        assert_eq!(report.meta_description, MetaDescriptionInfo::not_found());
        assert_eq!(report.headings, HeadingInfo::empty());
        assert_eq!(report.images.total, 0);
        assert_eq!(report.links, LinkInfo::default());
    }

    #[test]
    fn test_analysis_is_repeatable() {
        let doc = ParsedDocument::parse(
            r#"<title>T</title><h2>a</h2><img alt="x"><a href="https://b.org">b</a>"#,
        );
        let options = AnalyzerOptions::default();
        assert_eq!(
            analyze(&doc, "https://a.org", &options),
            analyze(&doc, "https://a.org", &options)
        );
    }
}
