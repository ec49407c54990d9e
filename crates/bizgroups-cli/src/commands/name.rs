// Rust guideline compliant 2026-10-17

//! Implementation of the `bizgroups name` command.

use crate::OutputFormatter;
use anyhow::Result;
use bizgroups_core::{Directory, Resolver};

/// Resolves `token` and renders the label of the matching business group.
///
/// Any failure is fatal to the command; there is no fallback label.
///
/// # Errors
///
/// Returns an error if resolution or the label lookup fails.
pub fn execute<D: Directory>(
    resolver: &Resolver<D>,
    token: &str,
    formatter: &dyn OutputFormatter,
) -> Result<String> {
    let label = resolver.name_of(token)?;
    Ok(formatter.format_name(token, &label))
}
