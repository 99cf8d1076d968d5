//! Command-line interface definitions.
//!
//! Global options can also come from environment variables or a YAML config
//! file (see [`crate::config`]).

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Extract article text from Nepali news sites.
///
/// # Examples
///
/// ```sh
/// # Extract two articles, write CSV and JSON into ./exports
/// nepali_news_extract -o ./exports extract https://www.setopati.com/politics/1 https://ratopati.com/story/2
///
/// # Interactive session
/// nepali_news_extract session
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Optional path to config.yaml file
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Directory exports are written to
    #[arg(short, long, global = true, env = "NEPALI_NEWS_OUTPUT_DIR")]
    pub output_dir: Option<PathBuf>,

    /// User-Agent header sent when fetching pages
    #[arg(long, global = true, env = "NEPALI_NEWS_USER_AGENT")]
    pub user_agent: Option<String>,

    /// Request timeout in seconds
    #[arg(long, global = true)]
    pub timeout_secs: Option<u64>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum Command {
    /// Fetch and extract the given URLs, then export what was collected
    Extract {
        /// Article URLs, processed in order
        #[arg(required = true)]
        urls: Vec<String>,

        /// Write only the CSV export
        #[arg(long, conflicts_with = "json")]
        csv: bool,

        /// Write only the JSON export
        #[arg(long)]
        json: bool,
    },

    /// Interactive session: extract, list, clear and export articles
    Session,

    /// List supported sites
    Sites,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_parsing() {
        let cli = Cli::parse_from([
            "nepali_news_extract",
            "extract",
            "https://www.setopati.com/a",
            "https://ratopati.com/b",
        ]);
        assert_eq!(
            cli.command,
            Command::Extract {
                urls: vec![
                    "https://www.setopati.com/a".to_string(),
                    "https://ratopati.com/b".to_string()
                ],
                csv: false,
                json: false,
            }
        );
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::parse_from([
            "nepali_news_extract",
            "session",
            "-o",
            "/tmp/exports",
            "--timeout-secs",
            "3",
        ]);
        assert_eq!(cli.command, Command::Session);
        assert_eq!(cli.output_dir, Some(PathBuf::from("/tmp/exports")));
        assert_eq!(cli.timeout_secs, Some(3));
    }

    #[test]
    fn test_extract_requires_a_url() {
        assert!(Cli::try_parse_from(["nepali_news_extract", "extract"]).is_err());
    }

    #[test]
    fn test_csv_and_json_conflict() {
        let res = Cli::try_parse_from([
            "nepali_news_extract",
            "extract",
            "--csv",
            "--json",
            "https://www.setopati.com/a",
        ]);
        assert!(res.is_err());
    }
}
