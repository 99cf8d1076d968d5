//! Ratopati article rule: paragraphs of `div.news-contentarea`, space-joined.

use super::dom::{find_container, paragraph_texts, Container};
use crate::error::ExtractError;
use crate::sites::Site;
use scraper::Html;

const CONTENT: Container = Container::new("div", "news-contentarea");

pub fn extract(document: &Html) -> Result<String, ExtractError> {
    let area = find_container(document, Site::Ratopati, CONTENT)?;
    Ok(paragraph_texts(area).join(" "))
}
