//! pkg.go.dev search client.
//!
//! [`PkgGoDev`] builds the search URL, performs a single GET and hands back the
//! HTML body. There is no caching and no retry: a transport failure or any
//! status other than `200 OK` is returned as an error.
//!
//! # Examples
//!
//! ```no_run
//! use gosearch::PkgGoDev;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = PkgGoDev::new()?;
//!     for package in client.search("http router", 5).await? {
//!         println!("{} {}", package.path(), package.url());
//!     }
//!     Ok(())
//! }
//! ```

use crate::error::{Result, SearchError};
use crate::extract::{PackageRecord, extract_packages};
use reqwest::StatusCode;
use std::time::Duration;
use url::Url;

pub const PKG_GO_DEV: &str = "https://pkg.go.dev";
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);
pub const USER_AGENT: &str = "Mozilla/5.0 (compatible; gopkgsearch/1.0)";

/// Search client for pkg.go.dev
#[derive(Clone)]
pub struct PkgGoDev {
    client: reqwest::Client,
    base_url: Url,
}

impl PkgGoDev {
    pub fn new() -> Result<Self> {
        Self::with_base_url(PKG_GO_DEV)
    }

    /// Point the client at another origin serving the same search page
    pub fn with_base_url(base_url: &str) -> Result<Self> {
        Self::with_timeout(base_url, REQUEST_TIMEOUT)
    }

    /// Same as [`PkgGoDev::with_base_url`] with a custom total request timeout
    pub fn with_timeout(base_url: &str, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self {
            client,
            base_url: Url::parse(base_url)?,
        })
    }

    /// `{base}/search?q=<query>&limit=<limit>&m=package`
    pub fn search_url(&self, query: &str, limit: u32) -> Result<Url> {
        let mut url = self.base_url.join("search")?;
        url.query_pairs_mut()
            .append_pair("q", query)
            .append_pair("limit", &limit.to_string())
            .append_pair("m", "package");
        Ok(url)
    }

    /// GET `url` and return the body. Anything but 200 is an error.
    pub async fn fetch(&self, url: &Url) -> Result<String> {
        tracing::debug!("GET {}", url);
        let response = self.client.get(url.clone()).send().await?;

        let status = response.status();
        tracing::debug!("Response status: {}", status);
        if status != StatusCode::OK {
            return Err(SearchError::Status(status));
        }

        response.text().await.map_err(SearchError::Body)
    }

    /// Fetch the search page for `query` and extract its results.
    pub async fn search(&self, query: &str, limit: u32) -> Result<Vec<PackageRecord>> {
        let url = self.search_url(query, limit)?;
        let body = self.fetch(&url).await?;
        extract_packages(&body)
    }
}
