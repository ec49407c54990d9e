// Rust guideline compliant 2026-10-17

//! Implementation of the `bizgroups list` command.

use crate::OutputFormatter;
use anyhow::{Context, Result};
use bizgroups_core::{BusinessGroup, Directory};

/// Fetches every business group and renders the listing.
///
/// # Errors
///
/// Returns an error if the directory cannot be fetched.
pub fn execute<D>(directory: &D, formatter: &dyn OutputFormatter) -> Result<String>
where
    D: Directory<Item = BusinessGroup>,
{
    let groups = directory
        .fetch()
        .context("Failed to fetch business groups")?;
    Ok(formatter.format_groups(&groups))
}
