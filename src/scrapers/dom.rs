//! Tag-and-class container lookup over a parsed document.
//!
//! Every extraction rule boils down to "find the first `<tag>` with this
//! class, take its text". Class matching follows the usual soup semantics:
//!
//! - a single class token matches any element whose class list contains it
//! - a multi-token string like `"col-lg-9 pl-md-4"` matches only an element
//!   whose class attribute is exactly that token sequence

use crate::error::ExtractError;
use crate::sites::Site;
use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};
use tracing::debug;

static PARAGRAPH: Lazy<Selector> = Lazy::new(|| Selector::parse("p").unwrap());

/// A container query: element name plus the class string to match.
#[derive(Debug, Clone, Copy)]
pub struct Container {
    pub tag: &'static str,
    pub class: &'static str,
}

impl Container {
    pub const fn new(tag: &'static str, class: &'static str) -> Self {
        Self { tag, class }
    }

    /// CSS-ish rendering used in logs and errors, e.g. `div.editor-box`.
    pub fn describe(&self) -> String {
        let classes: Vec<&str> = self.class.split_whitespace().collect();
        format!("{}.{}", self.tag, classes.join("."))
    }

    fn matches(&self, element: &ElementRef) -> bool {
        let wanted: Vec<&str> = self.class.split_whitespace().collect();
        match wanted.as_slice() {
            [] => true,
            [single] => element.value().classes().any(|c| c == *single),
            many => element
                .value()
                .attr("class")
                .map(|attr| attr.split_whitespace().eq(many.iter().copied()))
                .unwrap_or(false),
        }
    }
}

/// Find the first element matching `container`, in document order.
///
/// # Errors
///
/// [`ExtractError::StructuralMismatch`] if no element matches.
pub fn find_container<'a>(
    document: &'a Html,
    site: Site,
    container: Container,
) -> Result<ElementRef<'a>, ExtractError> {
    let structural = || ExtractError::StructuralMismatch {
        site,
        selector: container.describe(),
    };
    let by_tag = Selector::parse(container.tag).map_err(|_| structural())?;

    let found = document
        .select(&by_tag)
        .find(|element| container.matches(element));
    match found {
        Some(element) => Ok(element),
        None => {
            debug!(%site, selector = %container.describe(), "Container not found");
            Err(structural())
        }
    }
}

/// All descendant text of `element`, concatenated without separators.
pub fn text_of(element: ElementRef) -> String {
    element.text().collect()
}

/// Text of each `<p>` under `element`, in document order.
pub fn paragraph_texts(element: ElementRef) -> Vec<String> {
    element.select(&PARAGRAPH).map(text_of).collect()
}
