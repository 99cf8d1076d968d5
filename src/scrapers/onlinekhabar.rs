//! Onlinekhabar article rule.
//!
//! Content is `div.ok18-single-post-content-wrap`. Unlike the other sites the
//! text is trimmed, since the wrapper is padded with template whitespace.

use super::dom::{find_container, text_of, Container};
use crate::error::ExtractError;
use crate::sites::Site;
use scraper::Html;

const CONTENT: Container = Container::new("div", "ok18-single-post-content-wrap");

pub fn extract(document: &Html) -> Result<String, ExtractError> {
    let content = find_container(document, Site::Onlinekhabar, CONTENT)?;
    Ok(text_of(content).trim().to_string())
}
