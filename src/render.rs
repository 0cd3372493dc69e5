//! Terminal rendering of search results

use crate::error::Result;
use crate::extract::PackageRecord;
use colored::Colorize;
use std::io::{self, Write};

pub const NO_RESULTS: &str = "No results found.";
pub const NO_DESCRIPTION: &str = "(No description available)";

/// Write every record, or the no-results line when there are none.
pub fn render_results<W: Write>(out: &mut W, records: &[PackageRecord]) -> Result<()> {
    if records.is_empty() {
        writeln!(out, "{}", NO_RESULTS)?;
        return Ok(());
    }

    for record in records {
        render_record(out, record)?;
    }

    Ok(())
}

/// One result block: title line, optional metadata line, synopsis, blank line.
pub fn render_record<W: Write>(out: &mut W, record: &PackageRecord) -> io::Result<()> {
    write!(out, "{}", record.path().bold().cyan())?;
    if !record.version().is_empty() {
        write!(out, " {}", format!("({})", record.version()).green())?;
    }
    writeln!(out)?;

    if let Some(meta) = metadata_line(record) {
        writeln!(out, "  {}", meta)?;
    }

    if record.synopsis().is_empty() {
        writeln!(out, "  {}", NO_DESCRIPTION.bright_black())?;
    } else {
        writeln!(out, "  {}", record.synopsis())?;
    }

    writeln!(out)
}

/// Imports, license and update date joined by ` | `, skipping empty ones
pub fn metadata_line(record: &PackageRecord) -> Option<String> {
    let meta: Vec<String> = [
        ("Imports", record.imported_by()),
        ("License", record.license()),
        ("Updated", record.published()),
    ]
    .into_iter()
    .filter(|(_, value)| !value.is_empty())
    .map(|(label, value)| format!("{}: {}", label, value.yellow()))
    .collect();

    if meta.is_empty() {
        None
    } else {
        Some(meta.join(" | "))
    }
}
