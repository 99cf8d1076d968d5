//! Data models for extracted articles.
//!
//! - [`ArticleRecord`]: one successfully extracted article, immutable once built
//! - [`ArticleCollection`]: the caller-owned, ordered list of records for a session
//! - [`PreviewRow`]: the content-less summary shown in listings

use crate::extract::Extracted;
use crate::sites::Site;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Timestamp format for [`ArticleRecord::extracted_at`].
pub const EXTRACTED_AT_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A successfully extracted article.
///
/// Field order is the export column order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleRecord {
    /// The URL the article was fetched from, as entered.
    pub url: String,
    /// Which site's rule produced the content.
    pub site: Site,
    /// Local extraction time, `YYYY-MM-DD HH:MM:SS`.
    pub extracted_at: String,
    /// Length of `content` in characters.
    pub content_length: usize,
    /// The extracted article text. Never blank.
    pub content: String,
}

impl ArticleRecord {
    /// Build a record from a dispatcher result.
    pub fn from_extracted(url: &str, extracted: Extracted, now: NaiveDateTime) -> Self {
        Self {
            url: url.to_string(),
            site: extracted.site,
            extracted_at: now.format(EXTRACTED_AT_FORMAT).to_string(),
            content_length: extracted.content.chars().count(),
            content: extracted.content,
        }
    }
}

/// One line of the collected-articles listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewRow<'a> {
    pub url: &'a str,
    pub site: Site,
    pub date: &'a str,
    pub length: usize,
}

/// Articles collected during one session, in extraction order.
///
/// Records are only ever appended; the collection is emptied solely by
/// [`ArticleCollection::clear`].
#[derive(Debug, Default, Clone, Serialize)]
#[serde(transparent)]
pub struct ArticleCollection {
    records: Vec<ArticleRecord>,
}

impl ArticleCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record and return a reference to it.
    pub fn push(&mut self, record: ArticleRecord) -> &ArticleRecord {
        self.records.push(record);
        &self.records[self.records.len() - 1]
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[ArticleRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ArticleRecord> {
        self.records.iter()
    }

    /// The most recently extracted article.
    pub fn last(&self) -> Option<&ArticleRecord> {
        self.records.last()
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }

    pub fn preview(&self) -> Vec<PreviewRow<'_>> {
        self.records
            .iter()
            .map(|r| PreviewRow {
                url: &r.url,
                site: r.site,
                date: &r.extracted_at,
                length: r.content_length,
            })
            .collect()
    }
}

impl<'a> IntoIterator for &'a ArticleCollection {
    type Item = &'a ArticleRecord;
    type IntoIter = std::slice::Iter<'a, ArticleRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(h: u32, m: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 5, 6)
            .unwrap()
            .and_hms_opt(h, m, s)
            .unwrap()
    }

    fn record(url: &str, content: &str) -> ArticleRecord {
        ArticleRecord::from_extracted(
            url,
            Extracted {
                site: Site::Setopati,
                content: content.to_string(),
            },
            at(14, 30, 5),
        )
    }

    #[test]
    fn test_record_fields() {
        let r = record("https://www.setopati.com/x", "Hello World");
        assert_eq!(r.url, "https://www.setopati.com/x");
        assert_eq!(r.site, Site::Setopati);
        assert_eq!(r.extracted_at, "2025-05-06 14:30:05");
        assert_eq!(r.content_length, 11);
    }

    #[test]
    fn test_content_length_counts_characters_not_bytes() {
        let r = record("https://www.setopati.com/x", "नेपाल");
        assert_eq!(r.content_length, 5);
        assert!(r.content.len() > 5);
    }

    #[test]
    fn test_record_serialization_field_names() {
        let r = record("https://www.setopati.com/x", "Hi");
        let json = serde_json::to_value(&r).unwrap();
        assert_eq!(json["site"], "setopati");
        assert_eq!(json["extracted_at"], "2025-05-06 14:30:05");
        assert_eq!(json["content_length"], 2);
        assert_eq!(json["content"], "Hi");
        assert_eq!(json["url"], "https://www.setopati.com/x");
    }

    #[test]
    fn test_collection_keeps_order_and_clears() {
        let mut articles = ArticleCollection::new();
        assert!(articles.is_empty());

        articles.push(record("https://a.setopati.com/1", "one"));
        let last = articles.push(record("https://a.setopati.com/2", "two"));
        assert_eq!(last.content, "two");
        assert_eq!(articles.len(), 2);

        let urls: Vec<&str> = articles.iter().map(|r| r.url.as_str()).collect();
        assert_eq!(urls, ["https://a.setopati.com/1", "https://a.setopati.com/2"]);
        assert_eq!(articles.last().unwrap().content, "two");

        articles.clear();
        assert!(articles.is_empty());
        assert!(articles.last().is_none());
    }

    #[test]
    fn test_preview_rows() {
        let mut articles = ArticleCollection::new();
        articles.push(record("https://www.setopati.com/x", "abc"));
        let rows = articles.preview();
        assert_eq!(
            rows,
            vec![PreviewRow {
                url: "https://www.setopati.com/x",
                site: Site::Setopati,
                date: "2025-05-06 14:30:05",
                length: 3,
            }]
        );
    }

    #[test]
    fn test_collection_serializes_as_array() {
        let mut articles = ArticleCollection::new();
        articles.push(record("https://www.setopati.com/x", "abc"));
        let json = serde_json::to_value(&articles).unwrap();
        assert!(json.is_array());
        assert_eq!(json.as_array().unwrap().len(), 1);
    }
}
