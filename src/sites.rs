//! Supported news sites and URL-to-site resolution.
//!
//! A site is identified by the registrable domain label of the article URL,
//! i.e. the segment right before the TLD: `https://www.setopati.com/politics/1`
//! resolves to `setopati`.

use crate::error::ExtractError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// The closed set of news sites this tool knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Site {
    Onlinekhabar,
    Setopati,
    Ratopati,
    Annapurnapost,
    Nagariknews,
    Ekantipur,
}

impl Site {
    /// Every supported site, in the order they are advertised.
    pub const ALL: [Site; 6] = [
        Site::Onlinekhabar,
        Site::Setopati,
        Site::Ratopati,
        Site::Annapurnapost,
        Site::Nagariknews,
        Site::Ekantipur,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Site::Onlinekhabar => "onlinekhabar",
            Site::Setopati => "setopati",
            Site::Ratopati => "ratopati",
            Site::Annapurnapost => "annapurnapost",
            Site::Nagariknews => "nagariknews",
            Site::Ekantipur => "ekantipur",
        }
    }
}

impl fmt::Display for Site {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Site {
    type Err = ExtractError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let label = s.to_lowercase();
        Site::ALL
            .into_iter()
            .find(|site| site.as_str() == label)
            .ok_or(ExtractError::UnsupportedSite { label })
    }
}

/// Derive the domain label from a URL string.
///
/// Strips the scheme, path, query, fragment, credentials and port, then takes
/// the second-to-last dot-separated segment of the host (or the only one).
/// The label is lowercased. A URL with no host yields an empty label.
///
/// ```ignore
/// assert_eq!(site_label("https://www.onlinekhabar.com/2025/05/1"), "onlinekhabar");
/// assert_eq!(site_label("localhost/page"), "localhost");
/// ```
pub fn site_label(url: &str) -> String {
    let after_scheme = url.trim().rsplit("//").next().unwrap_or_default();
    let authority = after_scheme
        .split(['/', '?', '#'])
        .next()
        .unwrap_or_default();
    let host = authority.rsplit('@').next().unwrap_or_default();
    let host = host.split(':').next().unwrap_or_default();

    let parts: Vec<&str> = host.split('.').collect();
    let label = if parts.len() >= 2 {
        parts[parts.len() - 2]
    } else {
        parts[parts.len() - 1]
    };
    label.to_lowercase()
}

/// Resolve a URL to one of the supported sites.
///
/// # Errors
///
/// [`ExtractError::UnsupportedSite`] when the domain label is not in
/// [`Site::ALL`].
pub fn resolve_site(url: &str) -> Result<Site, ExtractError> {
    let label = site_label(url);
    debug!(%url, %label, "Resolved domain label");
    label.parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_site_label_common_shapes() {
        assert_eq!(
            site_label("https://www.setopati.com/politics/123456"),
            "setopati"
        );
        assert_eq!(site_label("https://ratopati.com/story/1"), "ratopati");
        assert_eq!(
            site_label("http://english.onlinekhabar.com/a-b-c.html"),
            "onlinekhabar"
        );
        assert_eq!(
            site_label("https://ekantipur.com/news/2025/05/06/x.html?utm=1"),
            "ekantipur"
        );
    }

    #[test]
    fn test_site_label_without_scheme() {
        assert_eq!(site_label("nagariknews.nagariknetwork.com/x"), "nagariknetwork");
        assert_eq!(site_label("setopati.com"), "setopati");
    }

    #[test]
    fn test_site_label_single_segment_host() {
        assert_eq!(site_label("http://localhost/page"), "localhost");
        assert_eq!(site_label("http://localhost:8080/page"), "localhost");
    }

    #[test]
    fn test_site_label_strips_port_and_credentials() {
        assert_eq!(
            site_label("https://user:pw@www.annapurnapost.com:443/news/1"),
            "annapurnapost"
        );
    }

    #[test]
    fn test_site_label_is_lowercased() {
        assert_eq!(site_label("https://WWW.SetoPati.COM/x"), "setopati");
    }

    #[test]
    fn test_site_label_hostless_url_is_empty() {
        assert_eq!(site_label("https://"), "");
        assert_eq!(site_label(""), "");
    }

    #[test]
    fn test_resolve_supported_sites() {
        for site in Site::ALL {
            let url = format!("https://www.{}.com/some/article", site);
            assert_eq!(resolve_site(&url).unwrap(), site);
        }
    }

    #[test]
    fn test_resolve_unsupported_site() {
        let err = resolve_site("https://www.bbc.co.uk/news").unwrap_err();
        assert_eq!(
            err,
            ExtractError::UnsupportedSite {
                label: "co".to_string()
            }
        );
        assert_eq!(err.to_string(), "Unsupported website: co");
    }

    #[test]
    fn test_site_serializes_as_label() {
        let json = serde_json::to_string(&Site::Nagariknews).unwrap();
        assert_eq!(json, "\"nagariknews\"");
        let back: Site = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Site::Nagariknews);
    }
}
