//! # Nepali News Extract
//!
//! Pulls the main article text out of Nepali news pages and collects the
//! results for bulk export.
//!
//! ## Features
//!
//! - Site-specific extraction rules for Onlinekhabar, Setopati, Ratopati,
//!   Nagarik News and eKantipur (Annapurna Post is recognized but has no rule)
//! - Interactive session for extracting, listing, clearing and exporting
//! - CSV and JSON export of every collected article
//!
//! ## Usage
//!
//! ```sh
//! nepali_news_extract extract https://www.setopati.com/politics/123456
//! nepali_news_extract session -o ./exports
//! ```
//!
//! ## Architecture
//!
//! 1. **Fetching**: download the page with a browser user agent
//! 2. **Resolving**: map the URL's domain label to a [`sites::Site`]
//! 3. **Extracting**: run that site's rule over the parsed document
//! 4. **Saving**: append an [`models::ArticleRecord`] to the session's collection
//! 5. **Output**: write CSV and/or JSON exports

use clap::Parser;
use std::error::Error;
use tracing::{debug, error, info, instrument};
use tracing_subscriber::{EnvFilter, fmt as tfmt};

mod cli;
mod config;
mod error;
mod extract;
mod fetch;
mod models;
mod outputs;
mod scrapers;
mod session;
mod sites;
mod utils;

use cli::{Cli, Command};
use config::Settings;
use fetch::HttpFetcher;
use session::{ExportFormat, Session, SessionCommand};
use utils::ensure_writable_dir;

#[tokio::main]
#[instrument]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let start_time = std::time::Instant::now();

    let args = Cli::parse();
    debug!(?args, "Parsed CLI arguments");

    let settings = Settings::from_cli(&args)?;
    info!(
        user_agent = %settings.user_agent,
        timeout_secs = settings.timeout.as_secs(),
        output_dir = %settings.output_dir.display(),
        "Resolved settings"
    );

    match args.command {
        Command::Sites => {
            for site in sites::Site::ALL {
                let status = if scrapers::rule_for(site).is_some() {
                    "supported"
                } else {
                    "no extractor"
                };
                println!("{site}\t{status}");
            }
        }
        Command::Session => {
            let fetcher = HttpFetcher::new(&settings.user_agent, settings.timeout)?;
            let mut session = Session::new(fetcher, tokio::io::stdout(), settings.output_dir);
            let stdin = tokio::io::BufReader::new(tokio::io::stdin());
            session.run(stdin).await?;
        }
        Command::Extract { urls, csv, json } => {
            // Fail before fetching anything if the exports cannot be written
            if let Err(e) = ensure_writable_dir(&settings.output_dir).await {
                error!(
                    path = %settings.output_dir.display(),
                    error = %e,
                    "Output directory is not writable (fix perms or choose a different path)"
                );
                return Err(e);
            }

            let fetcher = HttpFetcher::new(&settings.user_agent, settings.timeout)?;
            let output_dir = settings.output_dir.clone();
            let mut session = Session::new(fetcher, tokio::io::stdout(), settings.output_dir);
            for url in urls {
                session.handle(SessionCommand::Extract(url)).await?;
            }

            let format = match (csv, json) {
                (true, false) => ExportFormat::Csv,
                (false, true) => ExportFormat::Json,
                _ => ExportFormat::All,
            };
            if session.articles().is_empty() {
                info!("Nothing extracted; skipping export");
            } else {
                session.export(format, &output_dir).await?;
            }
        }
    }

    let elapsed = start_time.elapsed();
    info!(
        ?elapsed,
        secs = elapsed.as_secs(),
        millis = elapsed.subsec_millis(),
        "Execution complete"
    );

    Ok(())
}
