//! Turn a pkg.go.dev search page into [`PackageRecord`]s.
//!
//! Extraction never fails on missing markup: any field whose node is absent
//! comes back as an empty string, and every `.SearchSnippet` produces exactly
//! one record, in document order.

use crate::error::Result;
use crate::selectors::Selectors;
use scraper::{ElementRef, Html, Selector};

/// Prefix every package page lives under
pub const PKG_GO_DEV_BASE: &str = "https://pkg.go.dev/";

/// One search result
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PackageRecord {
    path: String,
    synopsis: String,
    version: String,
    published: String,
    imported_by: String,
    license: String,
    url: String,
}

impl PackageRecord {
    /// Build a record. The URL is always derived from `path`.
    pub fn new(
        path: String,
        synopsis: String,
        version: String,
        published: String,
        imported_by: String,
        license: String,
    ) -> Self {
        let url = format!("{}{}", PKG_GO_DEV_BASE, path);
        Self {
            path,
            synopsis,
            version,
            published,
            imported_by,
            license,
            url,
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn synopsis(&self) -> &str {
        &self.synopsis
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn published(&self) -> &str {
        &self.published
    }

    pub fn imported_by(&self) -> &str {
        &self.imported_by
    }

    pub fn license(&self) -> &str {
        &self.license
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

/// Parse `html` and extract one record per search snippet.
pub fn extract_packages(html: &str) -> Result<Vec<PackageRecord>> {
    let selectors = Selectors::compile()?;
    let document = Html::parse_document(html);

    if !document.errors.is_empty() {
        tracing::debug!(
            "HTML parser recovered from {} error(s)",
            document.errors.len()
        );
    }

    Ok(extract_with(&document, &selectors))
}

/// Extract records from an already parsed document.
pub fn extract_with(document: &Html, selectors: &Selectors) -> Vec<PackageRecord> {
    let records: Vec<PackageRecord> = document
        .select(&selectors.snippet)
        .map(|snippet| extract_snippet(snippet, selectors))
        .collect();

    tracing::debug!("Extracted {} search snippet(s)", records.len());
    records
}

fn extract_snippet(snippet: ElementRef<'_>, selectors: &Selectors) -> PackageRecord {
    let path = extract_path(snippet, selectors);
    let synopsis = text_of(snippet, &selectors.synopsis);

    let info: Vec<ElementRef<'_>> = snippet.select(&selectors.info_label).collect();
    let imported_by = text_within(&info, &selectors.imported_by);
    let license = text_within(&info, &selectors.license);
    let published = text_within(&info, &selectors.published);
    let version = extract_version(&info, selectors);

    PackageRecord::new(path, synopsis, version, published, imported_by, license)
}

/// Header path text without its parentheses, or the title href when that is empty
fn extract_path(snippet: ElementRef<'_>, selectors: &Selectors) -> String {
    let header = text_of(snippet, &selectors.header_path);
    let header = header.trim_matches(|c: char| c == '(' || c == ')').trim();
    if !header.is_empty() {
        return header.to_string();
    }

    let href = snippet
        .select(&selectors.title_link)
        .next()
        .and_then(|a| a.value().attr("href"))
        .unwrap_or("");
    href.strip_prefix('/').unwrap_or(href).to_string()
}

/// First subtle-text span mentioning "published on" holds the version in a `<strong>`
fn extract_version(info: &[ElementRef<'_>], selectors: &Selectors) -> String {
    info.iter()
        .flat_map(|region| region.select(&selectors.subtle_text))
        .find(|span| span.text().collect::<String>().contains("published on"))
        .and_then(|span| span.select(&selectors.strong).next())
        .map(|strong| strong.text().collect::<String>().trim().to_string())
        .unwrap_or_default()
}

/// Trimmed text of every match across all info-label regions
fn text_within(regions: &[ElementRef<'_>], selector: &Selector) -> String {
    regions
        .iter()
        .flat_map(|region| region.select(selector))
        .flat_map(|el| el.text())
        .collect::<String>()
        .trim()
        .to_string()
}

/// Trimmed text of every match under `root`, concatenated
fn text_of(root: ElementRef<'_>, selector: &Selector) -> String {
    root.select(selector)
        .flat_map(|el| el.text())
        .collect::<String>()
        .trim()
        .to_string()
}
