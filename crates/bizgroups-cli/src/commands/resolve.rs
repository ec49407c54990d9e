// Rust guideline compliant 2026-10-17

//! Implementation of the `bizgroups resolve` command.
//!
//! Resolves a short ID prefix or a label to the full ID of exactly one
//! business group.

use crate::OutputFormatter;
use anyhow::Result;
use bizgroups_core::{Directory, Resolver};

/// Resolves `token` and renders the full ID.
///
/// # Errors
///
/// Returns the [`bizgroups_core::ResolveError`] unchanged if the token does
/// not identify exactly one business group.
pub fn execute<D: Directory>(
    resolver: &Resolver<D>,
    token: &str,
    formatter: &dyn OutputFormatter,
) -> Result<String> {
    let full_id = resolver.resolve(token)?;
    Ok(formatter.format_resolved(token, &full_id))
}
