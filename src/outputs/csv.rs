//! CSV export.

use super::{export_file_name, write_export};
use crate::models::ArticleCollection;
use chrono::NaiveDateTime;
use std::error::Error;
use std::path::{Path, PathBuf};
use tracing::instrument;

/// Column order of the export.
pub const HEADER: [&str; 5] = ["url", "site", "extracted_at", "content_length", "content"];

/// Serialize every article as a UTF-8 CSV document.
///
/// The header row is always written, so an empty collection yields a
/// header-only file.
pub fn to_csv(articles: &ArticleCollection) -> Result<Vec<u8>, ::csv::Error> {
    let mut wtr = ::csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());
    wtr.write_record(HEADER)?;
    for record in articles {
        wtr.serialize(record)?;
    }
    wtr.into_inner().map_err(|e| e.into_error().into())
}

/// Write `nepali_news_<stamp>.csv` into `dir`.
#[instrument(level = "info", skip(articles), fields(count = articles.len()))]
pub async fn write_csv(
    articles: &ArticleCollection,
    dir: &Path,
    now: NaiveDateTime,
) -> Result<PathBuf, Box<dyn Error>> {
    let bytes = to_csv(articles)?;
    write_export(dir, &export_file_name("csv", now), &bytes).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::Extracted;
    use crate::models::ArticleRecord;
    use crate::sites::Site;
    use chrono::NaiveDate;

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 5, 6)
            .unwrap()
            .and_hms_opt(14, 30, 0)
            .unwrap()
    }

    fn collection(contents: &[&str]) -> ArticleCollection {
        let mut articles = ArticleCollection::new();
        for (i, content) in contents.iter().enumerate() {
            articles.push(ArticleRecord::from_extracted(
                &format!("https://ratopati.com/story/{i}"),
                Extracted {
                    site: Site::Ratopati,
                    content: content.to_string(),
                },
                now(),
            ));
        }
        articles
    }

    #[test]
    fn test_empty_collection_is_header_only() {
        let out = String::from_utf8(to_csv(&ArticleCollection::new()).unwrap()).unwrap();
        assert_eq!(out, "url,site,extracted_at,content_length,content\n");
    }

    #[test]
    fn test_one_row_per_article_with_lengths() {
        let articles = collection(&["A B", "नेपाली समाचार", "line one\nline \"two\", done"]);
        let bytes = to_csv(&articles).unwrap();

        let mut rdr = ::csv::Reader::from_reader(bytes.as_slice());
        let headers = rdr.headers().unwrap().clone();
        assert_eq!(headers.iter().collect::<Vec<_>>(), HEADER);

        let rows: Vec<::csv::StringRecord> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 3);
        for (row, record) in rows.iter().zip(articles.iter()) {
            assert_eq!(&row[0], record.url);
            assert_eq!(&row[1], "ratopati");
            assert_eq!(&row[2], "2025-05-06 14:30:00");
            assert_eq!(row[3].parse::<usize>().unwrap(), row[4].chars().count());
            assert_eq!(&row[4], record.content);
        }
    }

    #[tokio::test]
    async fn test_write_csv_file() {
        let tmp = tempfile::tempdir().unwrap();
        let path = write_csv(&collection(&["x"]), tmp.path(), now())
            .await
            .unwrap();
        assert!(path.ends_with("nepali_news_20250506_1430.csv"));
        let text = std::fs::read_to_string(path).unwrap();
        assert_eq!(text.lines().count(), 2);
    }
}
