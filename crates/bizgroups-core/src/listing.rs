// Rust guideline compliant 2026-10-17

//! Console listing of directory snapshots.

use crate::models::{Identifiable, Labelled};

/// Placeholder printed when a snapshot holds no entities.
pub const EMPTY_LISTING: &str = "No elements found.";

/// Formats entities as a header-prefixed, tab-separated two-column block.
///
/// Each row is `short_id\tlabel`. The result carries no trailing newline and
/// is meant to be column-aligned before printing.
#[must_use]
pub fn format_listing<T: Identifiable + Labelled>(entities: &[T]) -> String {
    if entities.is_empty() {
        return EMPTY_LISTING.to_string();
    }

    let mut output = String::from("ID\tLABEL\n");
    for entity in entities {
        output.push_str(entity.short_id());
        output.push('\t');
        output.push_str(entity.label());
        output.push('\n');
    }
    output.trim().to_string()
}
