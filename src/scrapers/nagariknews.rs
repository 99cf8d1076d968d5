//! Nagarik News article rule (`div.col-lg-9.pl-md-4.pr-md-5`, whole text).

use super::dom::{find_container, text_of, Container};
use crate::error::ExtractError;
use crate::sites::Site;
use scraper::Html;

const CONTENT: Container = Container::new("div", "col-lg-9 pl-md-4 pr-md-5");

pub fn extract(document: &Html) -> Result<String, ExtractError> {
    let content = find_container(document, Site::Nagariknews, CONTENT)?;
    Ok(text_of(content))
}
