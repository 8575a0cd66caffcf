// src/render/html.rs
// HTML fragment output: one <div class="result-section"> per signal.
// All page-derived text is escaped before it is interpolated.

use std::fmt::Write;

use crate::analyzer::SeoReport;

// Renders the report as an HTML fragment
//
// Parameters:
//   report: the finished analysis
//
// Returns: one <div class="result-section"> per signal, newline separated
//
// Example (title block):
//   <div class="result-section"><h2>Title</h2><p>Example</p><p>Length: 7</p></div>
pub fn render_report(report: &SeoReport) -> String {
    let mut out = String::new();

    // Writing to a String never fails, so the fmt::Result is ignored
    let _ = write_report(&mut out, report);
    out
}

// Renders a fetch error in place of the report
//
// Parameters:
//   message: the user-facing error text (escaped here)
//
// Returns: a single "Error" result-section
pub fn render_error(message: &str) -> String {
    format!(
        "<div class=\"result-section\"><h2>Error</h2><p>{}</p></div>",
        escape(message)
    )
}

fn write_report(out: &mut String, report: &SeoReport) -> std::fmt::Result {
    writeln!(
        out,
        "<div class=\"result-section\"><h2>Title</h2><p>{}</p><p>Length: {}</p></div>",
        escape(&report.title.content),
        report.title.length
    )?;
    writeln!(
        out,
        "<div class=\"result-section\"><h2>Meta Description</h2><p>{}</p><p>Length: {}</p></div>",
        escape(&report.meta_description.content),
        report.meta_description.length
    )?;

    write!(out, "<div class=\"result-section\"><h2>Headings</h2>")?;
    for (label, texts) in report.headings.iter() {
        write!(out, "<h3>{} ({})</h3>", label.to_uppercase(), texts.len())?;
        if !texts.is_empty() {
            write!(out, "<ul>")?;
            for text in texts {
                write!(out, "<li>{}</li>", escape(text.trim()))?;
            }
            write!(out, "</ul>")?;
        }
    }
    writeln!(out, "</div>")?;

    writeln!(
        out,
        "<div class=\"result-section\"><h2>Images</h2><p>Total: {}</p><p>Missing alt text: {}</p></div>",
        report.images.total, report.images.missing_alt
    )?;
    writeln!(
        out,
        "<div class=\"result-section\"><h2>Links</h2><p>Total: {}</p><p>Internal: {}</p><p>External: {}</p></div>",
        report.links.total, report.links.internal, report.links.external
    )?;

    Ok(())
}

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::{analyze, ParsedDocument};

    #[test]
    fn test_html_report_escapes_page_text() {
        let doc = ParsedDocument::parse(
            r#"<title>Fish &amp; Chips &lt;b&gt;</title><h2>"Quoted"</h2>"#,
        );
        let report = analyze(&doc, "https://example.com/", &Default::default());
        let out = render_report(&report);

        assert!(out.contains("<p>Fish &amp; Chips &lt;b&gt;</p>"));
        assert!(out.contains("<h3>H2 (1)</h3><ul><li>&quot;Quoted&quot;</li></ul>"));
        assert!(out.contains("<h3>H6 (0)</h3>"));
    }

    #[test]
    fn test_html_error_section() {
        assert_eq!(
            render_error("Please enter a URL."),
            "<div class=\"result-section\"><h2>Error</h2><p>Please enter a URL.</p></div>"
        );
    }
}
