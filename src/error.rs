//! Error types for site resolution, extraction, fetching and saving.
//!
//! [`ExtractError`] is the dispatcher's taxonomy. Its `Display` output is the
//! exact message shown to the operator, so structural and empty-content
//! failures render the same way while staying distinguishable by variant.

use crate::sites::Site;
use thiserror::Error;

/// Failures raised while turning a URL and its HTML into article text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtractError {
    /// The domain label is not one of the supported news sites.
    #[error("Unsupported website: {label}")]
    UnsupportedSite { label: String },

    /// The site is advertised as supported but has no extraction rule.
    #[error("Processor function missing: process_{site}")]
    MissingExtractor { site: Site },

    /// The expected content container is not in the document.
    #[error("No content could be extracted from {site}")]
    StructuralMismatch { site: Site, selector: String },

    /// The rule ran but produced only whitespace.
    #[error("No content could be extracted from {site}")]
    EmptyContent { site: Site },
}

impl ExtractError {
    /// Short machine-friendly name of the failure, for log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            ExtractError::UnsupportedSite { .. } => "unsupported_site",
            ExtractError::MissingExtractor { .. } => "missing_extractor",
            ExtractError::StructuralMismatch { .. } => "structural_mismatch",
            ExtractError::EmptyContent { .. } => "empty_content",
        }
    }

    pub fn is_unsupported(&self) -> bool {
        matches!(self, ExtractError::UnsupportedSite { .. })
    }

    pub fn is_missing_extractor(&self) -> bool {
        matches!(self, ExtractError::MissingExtractor { .. })
    }

    pub fn is_structural(&self) -> bool {
        matches!(self, ExtractError::StructuralMismatch { .. })
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, ExtractError::EmptyContent { .. })
    }
}

/// Transport failures from the fetch collaborator. Never raised by the core.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Page returned status code {0}")]
    Status(u16),

    #[error("Connection problem: {0}")]
    Connection(#[from] reqwest::Error),
}

/// Everything that can go wrong in one extract-and-save attempt.
#[derive(Debug, Error)]
pub enum SaveError {
    #[error("Please enter a URL")]
    EmptyUrl,

    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Extract(#[from] ExtractError),
}

/// Problems loading the optional YAML config file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read config file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_yaml::Error,
    },
}
