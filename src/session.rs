//! Extract-and-save workflow and the interactive session around it.
//!
//! The session owns the [`ArticleCollection`] for as long as it runs; the
//! core functions only ever borrow it. One command is handled at a time.

use crate::error::SaveError;
use crate::extract::extract;
use crate::fetch::FetchPage;
use crate::models::{ArticleCollection, ArticleRecord};
use crate::outputs::{csv::write_csv, json::write_json};
use crate::scrapers::supported_sites_caption;
use crate::utils::truncate_for_log;
use chrono::Local;
use std::error::Error;
use std::path::{Path, PathBuf};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, info, instrument, warn};

/// Fetch `url`, extract its article and append the record to `articles`.
///
/// On any failure the collection is left untouched.
#[instrument(level = "info", skip(fetcher, articles), fields(total = articles.len()))]
pub async fn extract_and_save<'a, F: FetchPage>(
    fetcher: &F,
    url: &str,
    articles: &'a mut ArticleCollection,
) -> Result<&'a ArticleRecord, SaveError> {
    let url = url.trim();
    if url.is_empty() {
        return Err(SaveError::EmptyUrl);
    }

    let html = fetcher.fetch(url).await?;
    let extracted = extract(url, &html)?;
    let record = ArticleRecord::from_extracted(url, extracted, Local::now().naive_local());
    debug!(preview = %truncate_for_log(&record.content, 120), "Extracted content");

    articles.push(record);
    let total = articles.len();
    info!(%url, total, "Article saved");
    Ok(&articles.records()[total - 1])
}

/// Which export files to write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Json,
    All,
}

/// One line of session input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    Extract(String),
    List,
    Show,
    Clear,
    Export(ExportFormat, Option<PathBuf>),
    Sites,
    Help,
    Quit,
    Empty,
    Unknown(String),
}

impl SessionCommand {
    pub fn parse(line: &str) -> Self {
        let mut words = line.split_whitespace();
        let Some(head) = words.next() else {
            return SessionCommand::Empty;
        };
        let rest: Vec<&str> = words.collect();

        match (head.to_lowercase().as_str(), rest.as_slice()) {
            ("extract" | "e", []) => SessionCommand::Extract(String::new()),
            ("extract" | "e", [url]) => SessionCommand::Extract(url.to_string()),
            ("list" | "ls", []) => SessionCommand::List,
            ("show", []) => SessionCommand::Show,
            ("clear", []) => SessionCommand::Clear,
            ("export", args) => match parse_export(args) {
                Some(cmd) => cmd,
                None => SessionCommand::Unknown(line.trim().to_string()),
            },
            ("sites", []) => SessionCommand::Sites,
            ("help" | "?", []) => SessionCommand::Help,
            ("quit" | "exit" | "q", []) => SessionCommand::Quit,
            (_, []) if head.contains("://") || head.contains('.') => {
                SessionCommand::Extract(head.to_string())
            }
            _ => SessionCommand::Unknown(line.trim().to_string()),
        }
    }
}

fn parse_export(args: &[&str]) -> Option<SessionCommand> {
    let (format, dir) = match args {
        [] => (ExportFormat::All, None),
        [format] => (parse_format(format)?, None),
        [format, dir] => (parse_format(format)?, Some(PathBuf::from(dir))),
        _ => return None,
    };
    Some(SessionCommand::Export(format, dir))
}

fn parse_format(s: &str) -> Option<ExportFormat> {
    match s.to_lowercase().as_str() {
        "csv" => Some(ExportFormat::Csv),
        "json" => Some(ExportFormat::Json),
        "all" => Some(ExportFormat::All),
        _ => None,
    }
}

const HELP: &str = "\
Commands:
  extract <url>           fetch and save an article (a bare URL works too)
  list                    show collected articles
  show                    print the latest extracted content
  clear                   remove all collected articles
  export [csv|json|all] [dir]
                          write collected articles to disk
  sites                   list supported sites
  quit                    leave the session
";

/// A line-oriented session over any async reader and writer.
pub struct Session<F, W> {
    fetcher: F,
    out: W,
    output_dir: PathBuf,
    articles: ArticleCollection,
}

impl<F, W> Session<F, W>
where
    F: FetchPage,
    W: AsyncWrite + Unpin,
{
    pub fn new(fetcher: F, out: W, output_dir: PathBuf) -> Self {
        Self {
            fetcher,
            out,
            output_dir,
            articles: ArticleCollection::new(),
        }
    }

    pub fn articles(&self) -> &ArticleCollection {
        &self.articles
    }

    /// Give back the writer, e.g. to inspect what was printed.
    pub fn into_output(self) -> W {
        self.out
    }

    /// Read commands from `input` until EOF or `quit`.
    pub async fn run<R>(&mut self, input: R) -> Result<(), Box<dyn Error>>
    where
        R: AsyncBufRead + Unpin,
    {
        self.say("Nepali News Article Extractor\n").await?;
        self.say(&format!("{}\n", supported_sites_caption())).await?;
        self.say("Type `help` for commands.\n").await?;

        let mut lines = input.lines();
        loop {
            self.say("> ").await?;
            let Some(line) = lines.next_line().await? else {
                break;
            };
            let command = SessionCommand::parse(&line);
            if command == SessionCommand::Quit {
                break;
            }
            self.handle(command).await?;
        }

        info!(articles = self.articles.len(), "Session finished");
        Ok(())
    }

    /// Handle one command. Only writer failures are returned as errors;
    /// everything else is reported to the operator.
    pub async fn handle(&mut self, command: SessionCommand) -> Result<(), Box<dyn Error>> {
        match command {
            SessionCommand::Extract(url) => self.extract(&url).await?,
            SessionCommand::List => self.list().await?,
            SessionCommand::Show => {
                let text = self
                    .articles
                    .last()
                    .map(|latest| format!("{}\n", latest.content))
                    .unwrap_or_else(|| "No articles collected yet.\n".to_string());
                self.say(&text).await?;
            }
            SessionCommand::Clear => {
                self.articles.clear();
                info!("Cleared collected articles");
                self.say("Cleared all articles.\n").await?;
            }
            SessionCommand::Export(format, dir) => {
                let dir = dir.unwrap_or_else(|| self.output_dir.clone());
                self.export(format, &dir).await?;
            }
            SessionCommand::Sites => {
                self.say(&format!("{}\n", supported_sites_caption())).await?
            }
            SessionCommand::Help => self.say(HELP).await?,
            SessionCommand::Quit | SessionCommand::Empty => {}
            SessionCommand::Unknown(line) => {
                self.say(&format!("Unknown command: {line} (try `help`)\n"))
                    .await?
            }
        }
        Ok(())
    }

    async fn extract(&mut self, url: &str) -> Result<(), Box<dyn Error>> {
        if !url.trim().is_empty() {
            self.say("Fetching & processing article...\n").await?;
        }
        let saved = extract_and_save(&self.fetcher, url, &mut self.articles)
            .await
            .map(|record| (record.site, record.content_length));
        let message = match saved {
            Ok((site, length)) => {
                format!(
                    "Processed {site} article ({length} characters).\nArticle saved! Total articles: {}\n",
                    self.articles.len()
                )
            }
            Err(e) => {
                warn!(%url, error = %e, "Extract and save failed");
                format!("Error: {e}\n")
            }
        };
        self.say(&message).await
    }

    async fn list(&mut self) -> Result<(), Box<dyn Error>> {
        if self.articles.is_empty() {
            return self.say("No articles collected yet.\n").await;
        }
        let mut text = format!("Collected Articles ({})\n", self.articles.len());
        text.push_str("URL | Site | Date | Length\n");
        for row in self.articles.preview() {
            text.push_str(&format!(
                "{} | {} | {} | {}\n",
                row.url, row.site, row.date, row.length
            ));
        }
        self.say(&text).await
    }

    /// Write the requested export files into `dir`, reporting each path.
    pub async fn export(&mut self, format: ExportFormat, dir: &Path) -> Result<(), Box<dyn Error>> {
        let now = Local::now().naive_local();
        let mut written = Vec::new();
        let mut failures = Vec::new();

        if matches!(format, ExportFormat::Csv | ExportFormat::All) {
            match write_csv(&self.articles, dir, now).await {
                Ok(path) => written.push(path),
                Err(e) => failures.push(format!("CSV export failed: {e}")),
            }
        }
        if matches!(format, ExportFormat::Json | ExportFormat::All) {
            match write_json(&self.articles, dir, now).await {
                Ok(path) => written.push(path),
                Err(e) => failures.push(format!("JSON export failed: {e}")),
            }
        }

        let mut text = String::new();
        for path in &written {
            text.push_str(&format!(
                "Wrote {} article(s) to {}\n",
                self.articles.len(),
                path.display()
            ));
        }
        for failure in &failures {
            warn!(dir = %dir.display(), error = %failure, "Export failed");
            text.push_str(&format!("Error: {failure}\n"));
        }
        self.say(&text).await
    }

    async fn say(&mut self, text: &str) -> Result<(), Box<dyn Error>> {
        self.out.write_all(text.as_bytes()).await?;
        self.out.flush().await?;
        Ok(())
    }
}
