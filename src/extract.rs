//! Dispatcher: URL + fetched HTML in, article text out.
//!
//! One call walks resolving → parsing → extracting and stops at the first
//! failure. Nothing is retried; every error is terminal for that attempt.

use crate::error::ExtractError;
use crate::scrapers::rule_for;
use crate::sites::{resolve_site, Site};
use scraper::Html;
use tracing::{debug, instrument, warn};

/// A successful extraction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extracted {
    pub site: Site,
    pub content: String,
}

/// Extract the article text of `html`, which was fetched from `url`.
///
/// # Errors
///
/// - [`ExtractError::UnsupportedSite`] if the URL's domain is not a known site
/// - [`ExtractError::MissingExtractor`] if the site has no rule
/// - [`ExtractError::StructuralMismatch`] if the content container is absent
/// - [`ExtractError::EmptyContent`] if the rule found only whitespace
#[instrument(level = "info", skip(html), fields(bytes = html.len()))]
pub fn extract(url: &str, html: &str) -> Result<Extracted, ExtractError> {
    let result = dispatch(url, html);
    if let Err(ref e) = result {
        warn!(%url, kind = e.kind(), error = ?e, "Extraction failed");
    }
    result
}

fn dispatch(url: &str, html: &str) -> Result<Extracted, ExtractError> {
    debug!(stage = "resolving", "Resolving site");
    let site = resolve_site(url)?;

    let document = Html::parse_document(html);
    let rule = rule_for(site).ok_or(ExtractError::MissingExtractor { site })?;

    debug!(stage = "extracting", %site, "Running extraction rule");
    let content = rule(&document)?;
    if content.trim().is_empty() {
        return Err(ExtractError::EmptyContent { site });
    }

    debug!(stage = "done", %site, chars = content.chars().count(), "Extracted article");
    Ok(Extracted { site, content })
}
