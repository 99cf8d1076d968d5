//! Bulk export of the collected articles.
//!
//! # Submodules
//!
//! - [`csv`]: one row per article, columns in [`ArticleRecord`] field order
//! - [`json`]: pretty-printed array with Devanagari kept as-is
//!
//! Both write into a single directory with timestamped names:
//!
//! ```text
//! output_dir/
//! ├── nepali_news_20250506_1430.csv
//! └── nepali_news_20250506_1430.json
//! ```
//!
//! [`ArticleRecord`]: crate::models::ArticleRecord

pub mod csv;
pub mod json;

use chrono::NaiveDateTime;
use std::error::Error;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{error, info, instrument};

/// `nepali_news_<YYYYmmdd_HHMM>.<ext>`
pub fn export_file_name(ext: &str, now: NaiveDateTime) -> String {
    format!("nepali_news_{}.{}", now.format("%Y%m%d_%H%M"), ext)
}

/// Create `dir` if needed and write `bytes` to `dir/file_name`.
#[instrument(level = "info", skip(bytes), fields(bytes = bytes.len()))]
pub(crate) async fn write_export(
    dir: &Path,
    file_name: &str,
    bytes: &[u8],
) -> Result<PathBuf, Box<dyn Error>> {
    if let Err(e) = fs::create_dir_all(dir).await {
        error!(dir = %dir.display(), error = %e, "Failed to create export dir");
        return Err(e.into());
    }
    let path = dir.join(file_name);
    fs::write(&path, bytes).await?;
    info!(path = %path.display(), "Wrote export");
    Ok(path)
}
