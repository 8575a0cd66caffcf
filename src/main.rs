// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Set up logging (stderr, so stdout only carries the report)
// 3. Get the page: fetch it (url) or read it from disk (file)
// 4. Analyze it and print the report, or print one error message
// 5. Exit with proper code (0 = report printed, 2 = error)
//
// Fetch -> Analyze -> Render. Each stage hands a value to the next one;
// nothing is shared between them.
// =============================================================================

// Module declarations - tells Rust about our other source files
mod analyzer;      // src/analyzer/ - the SEO analysis itself
mod cli;           // src/cli.rs - command-line parsing
mod fetch;         // src/fetch/ - getting the page HTML
mod render;        // src/render/ - text / JSON / HTML output

use cli::{Cli, Commands, ReportArgs};
use clap::Parser;  // Parser trait enables the parse() method

use analyzer::{AnalyzerOptions, ParsedDocument};
use fetch::{FetchError, FetchMode, FetchOptions, Fetcher};
use render::OutputFormat;

use anyhow::Result;
use log::LevelFilter;
use std::time::Duration;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    let exit_code = match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            // Something outside the fetch stage broke (e.g. writing output)
            eprintln!("Error: {:#}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

// Returns:
//   Ok(0) = report printed
//   Ok(2) = fetch failed, error message printed instead of a report
//   Err   = unexpected error
async fn run(cli: Cli) -> Result<i32> {
    match cli.command {
        Commands::Url {
            url,
            direct,
            proxy,
            timeout,
            report,
        } => {
            let options = FetchOptions {
                mode: if direct { FetchMode::Direct } else { FetchMode::Proxy },
                proxy_endpoint: proxy,
                timeout: Duration::from_secs(timeout),
                ..FetchOptions::default()
            };

            log::info!("Analyzing {}", url);
            let document = match Fetcher::new(options) {
                Ok(fetcher) => fetcher.fetch(&url).await,
                Err(e) => Err(e),
            };

            finish(document, url.trim(), &report)
        }
        Commands::File {
            path,
            base_url,
            report,
        } => {
            log::info!("Analyzing {} as {}", path.display(), base_url);
            finish(fetch::load_file(&path), &base_url, &report)
        }
    }
}

// Analyzes and prints the page, or prints the single fetch error
fn finish(document: Result<ParsedDocument, FetchError>, base_url: &str, args: &ReportArgs) -> Result<i32> {
    match document {
        Ok(document) => {
            let options = AnalyzerOptions {
                unresolved_links: args.unresolved_links.into(),
            };
            let report = analyzer::analyze(&document, base_url, &options);
            println!("{}", render::render(&report, args.format)?);
            Ok(0)
        }
        Err(e) => {
            log::debug!("Fetch failed: {:?}", e);
            let message = render::render_error(&e.to_string(), args.format);
            match args.format {
                OutputFormat::Text => eprintln!("{}", message),
                OutputFormat::Json | OutputFormat::Html => println!("{}", message),
            }
            Ok(2)
        }
    }
}

// Sets up env_logger on stderr
//
// -v raises the level to info, -vv to debug. RUST_LOG, when set, wins.
fn init_logger(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };

    let mut builder = env_logger::Builder::new();
    builder.filter_level(level);
    builder.filter_module("html5ever", LevelFilter::Error);
    builder.filter_module("selectors", LevelFilter::Warn);
    builder.parse_default_env();
    builder.format_timestamp(None);

    if let Err(e) = builder.try_init() {
        eprintln!("Warning: could not initialize logger: {}", e);
    }
}
