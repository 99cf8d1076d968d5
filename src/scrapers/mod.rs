//! Per-site extraction rules and the registry that maps sites to them.
//!
//! Each submodule knows where one news site keeps its article body and
//! exports a single `extract(&Html)` function. Rules are pure: no fetching,
//! no logging beyond debug traces, no state.
//!
//! # Supported Sources
//!
//! | Site | Module | Container | Text |
//! |------|--------|-----------|------|
//! | Setopati | [`setopati`] | `div.editor-box` | whole text |
//! | Ratopati | [`ratopati`] | `div.news-contentarea` | `<p>` texts joined by a space |
//! | eKantipur | [`ekantipur`] | `div.col-xs-12.col-sm-12.col-md-12` | whole text |
//! | Nagarik News | [`nagariknews`] | `div.col-lg-9.pl-md-4.pr-md-5` | whole text |
//! | Onlinekhabar | [`onlinekhabar`] | `div.ok18-single-post-content-wrap` | whole text, trimmed |
//! | Annapurna Post | none | | always [`ExtractError::MissingExtractor`] |

pub mod dom;
pub mod ekantipur;
pub mod nagariknews;
pub mod onlinekhabar;
pub mod ratopati;
pub mod setopati;

use crate::error::ExtractError;
use crate::sites::Site;
use scraper::Html;

/// A site's extraction rule.
pub type ExtractionRule = fn(&Html) -> Result<String, ExtractError>;

/// Look up the rule registered for `site`.
///
/// Annapurna Post is advertised but has no known container yet, so it maps
/// to `None`.
pub fn rule_for(site: Site) -> Option<ExtractionRule> {
    match site {
        Site::Setopati => Some(setopati::extract),
        Site::Ratopati => Some(ratopati::extract),
        Site::Ekantipur => Some(ekantipur::extract),
        Site::Nagariknews => Some(nagariknews::extract),
        Site::Onlinekhabar => Some(onlinekhabar::extract),
        Site::Annapurnapost => None,
    }
}

/// Footer line listing every advertised site.
pub fn supported_sites_caption() -> String {
    let names: Vec<&str> = Site::ALL.iter().map(Site::as_str).collect();
    format!("Supported sites: {}", names.join(" • "))
}
