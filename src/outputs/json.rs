//! JSON export.
//!
//! Output is a pretty-printed array of article objects. `serde_json` never
//! escapes non-ASCII, so Devanagari text stays readable in the file.

use super::{export_file_name, write_export};
use crate::models::ArticleCollection;
use chrono::NaiveDateTime;
use std::error::Error;
use std::path::{Path, PathBuf};
use tracing::instrument;

/// Serialize every article as a 2-space indented JSON array.
pub fn to_json(articles: &ArticleCollection) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(articles)
}

/// Write `nepali_news_<stamp>.json` into `dir`.
#[instrument(level = "info", skip(articles), fields(count = articles.len()))]
pub async fn write_json(
    articles: &ArticleCollection,
    dir: &Path,
    now: NaiveDateTime,
) -> Result<PathBuf, Box<dyn Error>> {
    let json = to_json(articles)?;
    write_export(dir, &export_file_name("json", now), json.as_bytes()).await
}
