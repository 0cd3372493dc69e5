//! CSS selectors for the pkg.go.dev search results page.
//!
//! The search page markup is not a stable API. Every selector the extractor
//! relies on lives in this table so a markup change only touches one file.

use crate::error::{Result, SearchError};
use scraper::Selector;

/// One search result
pub const SNIPPET: &str = ".SearchSnippet";
/// Module path shown next to the title, e.g. `(golang.org/x/tools)`
pub const HEADER_PATH: &str = ".SearchSnippet-header-path";
/// Title anchor, used as a fallback for the path
pub const TITLE_LINK: &str = "h2 a";
pub const SYNOPSIS: &str = ".SearchSnippet-synopsis";
/// Metadata row holding imports, license, publish date and version
pub const INFO_LABEL: &str = ".SearchSnippet-infoLabel";
pub const IMPORTED_BY: &str = "a[aria-label='Go to Imported By'] strong";
pub const LICENSE: &str = "span[data-test-id='snippet-license']";
pub const PUBLISHED: &str = "span[data-test-id='snippet-published'] strong";
/// Scanned for the "published on" text that carries the version
pub const SUBTLE_TEXT: &str = "span.go-textSubtle";
pub const STRONG: &str = "strong";

/// Compiled selectors, built once per parse
#[derive(Debug)]
pub struct Selectors {
    pub snippet: Selector,
    pub header_path: Selector,
    pub title_link: Selector,
    pub synopsis: Selector,
    pub info_label: Selector,
    pub imported_by: Selector,
    pub license: Selector,
    pub published: Selector,
    pub subtle_text: Selector,
    pub strong: Selector,
}

impl Selectors {
    pub fn compile() -> Result<Self> {
        Ok(Self {
            snippet: parse(SNIPPET)?,
            header_path: parse(HEADER_PATH)?,
            title_link: parse(TITLE_LINK)?,
            synopsis: parse(SYNOPSIS)?,
            info_label: parse(INFO_LABEL)?,
            imported_by: parse(IMPORTED_BY)?,
            license: parse(LICENSE)?,
            published: parse(PUBLISHED)?,
            subtle_text: parse(SUBTLE_TEXT)?,
            strong: parse(STRONG)?,
        })
    }
}

fn parse(selector: &str) -> Result<Selector> {
    Selector::parse(selector)
        .map_err(|e| SearchError::Selector(format!("'{}': {}", selector, e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selectors_compile() {
        assert!(Selectors::compile().is_ok());
    }

    #[test]
    fn test_invalid_selector_is_error() {
        let err = parse("span[").unwrap_err();
        assert!(matches!(err, SearchError::Selector(ref msg) if msg.contains("span[")));
    }
}
