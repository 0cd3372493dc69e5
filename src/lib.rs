//! Library interface for gosearch
//!
//! Fetches the pkg.go.dev search page, extracts one [`PackageRecord`] per
//! result and renders the list for a terminal.

pub mod client;
pub mod colors;
pub mod error;
pub mod extract;
pub mod render;
pub mod selectors;

// Re-export commonly used items
pub use client::PkgGoDev;
pub use error::{Result, SearchError};
pub use extract::{PackageRecord, extract_packages};
pub use render::render_results;
