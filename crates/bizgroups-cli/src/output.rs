// Rust guideline compliant 2026-10-17

//! Output formatting module for the Bizgroups CLI.
//!
//! This module provides functionality for formatting business groups and
//! resolution results in various output formats (JSON, table, plain text).

use bizgroups_core::listing::EMPTY_LISTING;
use bizgroups_core::{
    format_listing, BusinessGroup, FetchError, Identifiable, OutputFormat, ResolveError,
};
use serde_json::json;
use tabled::{builder::Builder, settings::Style};

/// Output formatter trait.
///
/// Defines the interface for formatting command results in different output formats.
pub trait OutputFormatter {
    /// Formats a list of business groups for display.
    fn format_groups(&self, groups: &[BusinessGroup]) -> String;

    /// Formats a resolved full ID.
    ///
    /// # Arguments
    /// * `token` - The token supplied by the user
    /// * `full_id` - The resolved full ID
    fn format_resolved(&self, token: &str, full_id: &str) -> String;

    /// Formats the label of a resolved business group.
    fn format_name(&self, token: &str, label: &str) -> String;

    /// Formats an error for display.
    fn format_error(&self, error: &anyhow::Error) -> String;
}

/// JSON output formatter.
///
/// Formats results as valid JSON for machine consumption.
pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn format_groups(&self, groups: &[BusinessGroup]) -> String {
        let output = json!({
            "business_groups": groups,
            "total": groups.len(),
        });
        serde_json::to_string_pretty(&output).unwrap_or_else(|_| {
            json!({ "error": "Failed to serialize business group list" }).to_string()
        })
    }

    fn format_resolved(&self, token: &str, full_id: &str) -> String {
        json!({
            "status": "ok",
            "result": { "token": token, "id": full_id },
        })
        .to_string()
    }

    fn format_name(&self, token: &str, label: &str) -> String {
        json!({
            "status": "ok",
            "result": { "token": token, "label": label },
        })
        .to_string()
    }

    fn format_error(&self, error: &anyhow::Error) -> String {
        let message = format!("{:#}", error);
        if let Some(resolve_error) = error.downcast_ref::<ResolveError>() {
            let mut envelope = json!({
                "code": resolve_error.code(),
                "message": message,
            });
            if let Some(token) = resolve_error.token() {
                envelope["details"] = json!({ "token": token });
            }
            return envelope.to_string();
        }
        if let Some(fetch_error) = error.downcast_ref::<FetchError>() {
            return json!({ "code": fetch_error.code(), "message": message }).to_string();
        }
        json!({ "code": "unknown", "message": message }).to_string()
    }
}

/// Table output formatter.
///
/// Formats business groups as a human-readable table.
pub struct TableFormatter;

impl OutputFormatter for TableFormatter {
    fn format_groups(&self, groups: &[BusinessGroup]) -> String {
        if groups.is_empty() {
            return EMPTY_LISTING.to_string();
        }

        let mut builder = Builder::default();
        builder.push_record(vec!["ID", "LABEL", "FULL ID"]);
        for group in groups {
            builder.push_record(vec![group.short_id(), group.label.as_str(), group.full_id()]);
        }

        let mut table = builder.build();
        table.with(Style::modern());
        table.to_string()
    }

    fn format_resolved(&self, _token: &str, full_id: &str) -> String {
        full_id.to_string()
    }

    fn format_name(&self, _token: &str, label: &str) -> String {
        label.to_string()
    }

    fn format_error(&self, error: &anyhow::Error) -> String {
        format!("Error: {:#}", error)
    }
}

/// Plain text output formatter.
///
/// Emits the tab-separated listing without alignment, suitable for piping.
pub struct PlainFormatter;

impl OutputFormatter for PlainFormatter {
    fn format_groups(&self, groups: &[BusinessGroup]) -> String {
        format_listing(groups)
    }

    fn format_resolved(&self, _token: &str, full_id: &str) -> String {
        full_id.to_string()
    }

    fn format_name(&self, _token: &str, label: &str) -> String {
        label.to_string()
    }

    fn format_error(&self, error: &anyhow::Error) -> String {
        format!("Error: {:#}", error)
    }
}

/// Creates the formatter for `format`.
pub fn create_formatter(format: OutputFormat) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Json => Box::new(JsonFormatter),
        OutputFormat::Table => Box::new(TableFormatter),
        OutputFormat::Plain => Box::new(PlainFormatter),
    }
}
