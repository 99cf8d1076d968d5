//! eKantipur article rule.
//!
//! The story sits in a full-width bootstrap column,
//! `div.col-xs-12.col-sm-12.col-md-12`, matched on the exact class string.

use super::dom::{find_container, text_of, Container};
use crate::error::ExtractError;
use crate::sites::Site;
use scraper::Html;

const CONTENT: Container = Container::new("div", "col-xs-12 col-sm-12 col-md-12");

pub fn extract(document: &Html) -> Result<String, ExtractError> {
    let news_block = find_container(document, Site::Ekantipur, CONTENT)?;
    Ok(text_of(news_block))
}
