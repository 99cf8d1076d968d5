//! Setopati article rule.
//!
//! Article bodies live in `div.editor-box`; the whole text of that box is the
//! article, headings and captions included.

use super::dom::{find_container, text_of, Container};
use crate::error::ExtractError;
use crate::sites::Site;
use scraper::Html;

const CONTENT: Container = Container::new("div", "editor-box");

pub fn extract(document: &Html) -> Result<String, ExtractError> {
    let content_box = find_container(document, Site::Setopati, CONTENT)?;
    Ok(text_of(content_box))
}
