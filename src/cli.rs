// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// We use the "derive" API which lets us define the CLI structure using
// Rust structs and attributes (the #[...] things).
//
// Two subcommands:
// - url:  fetch a live page (through a proxy by default) and analyze it
// - file: analyze an HTML file already on disk
// =============================================================================

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::analyzer::UnresolvedLinkPolicy;
use crate::fetch::DEFAULT_PROXY_ENDPOINT;
use crate::render::OutputFormat;

#[derive(Parser, Debug)]
#[command(
    name = "seo-lens",
    version,
    about = "Fetch a web page and report its on-page SEO signals",
    long_about = "seo-lens fetches a single page and reports its title, meta description, \
                  heading structure, image alt-text coverage and internal/external link split."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase log output on stderr (-v = info, -vv = debug)
    ///
    /// RUST_LOG takes precedence when set.
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch a page and analyze it
    ///
    /// Example: seo-lens url https://example.com --format json
    Url {
        /// Page URL (e.g., https://example.com)
        url: String,

        /// Fetch the page directly instead of through the proxy
        #[arg(long)]
        direct: bool,

        /// Proxy endpoint; the page URL is passed as its `url` query parameter
        #[arg(long, default_value = DEFAULT_PROXY_ENDPOINT, conflicts_with = "direct")]
        proxy: String,

        /// Request timeout in seconds
        #[arg(long, default_value_t = 15)]
        timeout: u64,

        #[command(flatten)]
        report: ReportArgs,
    },

    /// Analyze a local HTML file
    ///
    /// Example: seo-lens file saved.html --base-url https://example.com/
    File {
        /// Path to the HTML file
        path: PathBuf,

        /// URL the page was served from (used to classify links)
        #[arg(long)]
        base_url: String,

        #[command(flatten)]
        report: ReportArgs,
    },
}

// Options shared by both subcommands
#[derive(Args, Debug)]
pub struct ReportArgs {
    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// How to count links whose href has no resolvable hostname
    /// (mailto:, javascript:, empty or malformed)
    #[arg(long, value_enum, default_value_t = UnresolvedLinks::Internal)]
    pub unresolved_links: UnresolvedLinks,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnresolvedLinks {
    /// Count them as internal links
    Internal,
    /// Leave them out of every link count
    Exclude,
}

impl From<UnresolvedLinks> for UnresolvedLinkPolicy {
    fn from(value: UnresolvedLinks) -> Self {
        match value {
            UnresolvedLinks::Internal => UnresolvedLinkPolicy::CountInternal,
            UnresolvedLinks::Exclude => UnresolvedLinkPolicy::Exclude,
        }
    }
}
