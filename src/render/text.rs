// src/render/text.rs
// =============================================================================
// Terminal output: one block per signal, then a short summary.
//
// We build a String with writeln! instead of printing directly, so the
// caller decides where it goes (and tests can look at it).
// =============================================================================

use std::fmt::Write;

use crate::analyzer::{SeoReport, NOT_FOUND};

// Longer headings are cut to this many characters in the listing
const MAX_HEADING_WIDTH: usize = 70;

// Renders the whole report as terminal text
//
// Parameters:
//   report: the finished analysis
//
// Returns: a multi-line String ending with a summary of obvious problems
pub fn render_report(report: &SeoReport) -> String {
    let mut out = String::new();

    // Writing to a String never fails, so the fmt::Result is ignored
    let _ = write_report(&mut out, report);
    out
}

fn write_report(out: &mut String, report: &SeoReport) -> std::fmt::Result {
    writeln!(out, "{:<20} {:<60} {:>8}", "SIGNAL", "VALUE", "LENGTH")?;
    writeln!(out, "{}", "=".repeat(90))?;
    writeln!(
        out,
        "{:<20} {:<60} {:>8}",
        "Title",
        truncate(&report.title.content, 57),
        report.title.length
    )?;
    writeln!(
        out,
        "{:<20} {:<60} {:>8}",
        "Meta Description",
        truncate(&report.meta_description.content, 57),
        report.meta_description.length
    )?;
    writeln!(out)?;

    writeln!(out, "📑 Headings ({} total)", report.headings.total())?;
    for (label, texts) in report.headings.iter() {
        writeln!(out, "   {}: {}", label, texts.len())?;
        for text in texts {
            writeln!(out, "      - {}", truncate(text.trim(), MAX_HEADING_WIDTH))?;
        }
    }
    writeln!(out)?;

    writeln!(out, "🖼️  Images")?;
    writeln!(out, "   📋 Total: {}", report.images.total)?;
    writeln!(out, "   ❌ Missing alt: {}", report.images.missing_alt)?;
    writeln!(out)?;

    writeln!(out, "🔗 Links")?;
    writeln!(out, "   📋 Total: {}", report.links.total)?;
    writeln!(out, "   🏠 Internal: {}", report.links.internal)?;
    writeln!(out, "   🌐 External: {}", report.links.external)?;
    writeln!(out)?;

    writeln!(out, "📊 Summary:")?;
    let warnings = warnings(report);
    for warning in &warnings {
        writeln!(out, "   ⚠️  {}", warning)?;
    }
    if warnings.is_empty() {
        writeln!(out, "   ✅ No obvious problems found")?;
    }

    Ok(())
}

// Quick hints shown under the summary
fn warnings(report: &SeoReport) -> Vec<String> {
    let mut warnings = Vec::new();

    // NOT_FOUND is in-band: a real <title>Not found</title> looks the same
    if report.title.content == NOT_FOUND {
        warnings.push(format!("Title is missing or reads \"{}\"", NOT_FOUND));
    }
    if report.meta_description.content == NOT_FOUND {
        warnings.push(format!("Meta description is missing or reads \"{}\"", NOT_FOUND));
    }
    if report.headings.level("h1").is_empty() {
        warnings.push("Page has no <h1>".to_string());
    }
    if report.images.missing_alt > 0 {
        warnings.push(format!(
            "{} of {} image(s) have no alt text",
            report.images.missing_alt, report.images.total
        ));
    }

    warnings
}

// Cuts a string to `max` characters, adding "..." when it was longer
//
// Example:
//   truncate("ééééé", 3) -> "ééé..."
fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() > max {
        let cut: String = text.chars().take(max).collect();
        format!("{}...", cut)
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::{analyze, ParsedDocument};

    #[test]
    fn test_text_report_sections() {
        let doc = ParsedDocument::parse(
            r#"<title>Example</title><h1>Hi</h1><img src="a.png"><a href="https://other.com">x</a>"#,
        );
        let report = analyze(&doc, "https://example.com/", &Default::default());
        let out = render_report(&report);

        assert!(out.contains("Example"));
        assert!(out.contains("   h1: 1"));
        assert!(out.contains("      - Hi"));
        assert!(out.contains("🌐 External: 1"));
        assert!(out.contains("Meta description is missing or reads \"Not found\""));
        assert!(out.contains("1 of 1 image(s) have no alt text"));
    }

    #[test]
    fn test_clean_page_has_no_warnings() {
        let doc = ParsedDocument::parse(
            r#"<title>T</title><meta name="description" content="D"><h1>H</h1><img alt="ok">"#,
        );
        let report = analyze(&doc, "https://example.com/", &Default::default());
        assert!(render_report(&report).contains("No obvious problems found"));
    }

    #[test]
    fn test_title_that_reads_not_found() {
        let doc = ParsedDocument::parse("<title>Not found</title><h1>404</h1>");
        let report = analyze(&doc, "https://example.com/", &Default::default());
        let out = render_report(&report);

        assert!(out.contains("Title is missing or reads \"Not found\""));
        assert!(!out.contains("Page has no <title>"));
    }

    #[test]
    fn test_truncate_is_char_safe() {
        assert_eq!(truncate("ééééé", 3), "ééé...");
        assert_eq!(truncate("short", 10), "short");
    }
}
