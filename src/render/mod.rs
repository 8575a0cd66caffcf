// src/render/mod.rs
// =============================================================================
// This module turns a SeoReport (or a fetch error) into printable output.
//
// Submodules:
// - text: terminal report
// - html: HTML fragment of "result-section" blocks
//
// JSON is produced directly from the report with serde_json.
//
// Renderers only see the finished report, never the page itself.
// =============================================================================

mod html;
mod text;

use anyhow::Result;
use clap::ValueEnum;

use crate::analyzer::SeoReport;

/// Output formats selectable with --format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable terminal report
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
    /// HTML fragment
    Html,
}

/// Renders a finished report in the chosen format.
pub fn render(report: &SeoReport, format: OutputFormat) -> Result<String> {
    let output = match format {
        OutputFormat::Text => text::render_report(report),
        OutputFormat::Json => serde_json::to_string_pretty(report)?,
        OutputFormat::Html => html::render_report(report),
    };
    Ok(output)
}

/// Renders a single error message in place of a report.
pub fn render_error(message: &str, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => format!("Error: {}", message),
        OutputFormat::Json => serde_json::json!({ "error": message }).to_string(),
        OutputFormat::Html => html::render_error(message),
    }
}
