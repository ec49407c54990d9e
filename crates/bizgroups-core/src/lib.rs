// Rust guideline compliant 2026-10-17

//! Bizgroups Core Library
//!
//! This crate provides the foundational components for working with business
//! groups exposed by a remote management API:
//! - Data models (BusinessGroup, Identifiable, ResourceType)
//! - Directory fetching (HTTP GET + JSON decode)
//! - Identifier resolution (short ID prefix and label matching)
//! - Listing output for console display
//! - Configuration and error types

pub mod config;
pub mod error;
pub mod fetch;
pub mod listing;
pub mod models;
pub mod resolve;

pub use config::{Config, OutputFormat};
pub use error::{Error, ErrorCode, FetchError, ResolveError, ResolveErrorKind, Result};
pub use fetch::{decode_groups, Directory, HttpDirectory};
pub use listing::format_listing;
pub use models::{BusinessGroup, Identifiable, Labelled, ResourceType};
pub use resolve::{MatchOutcome, Resolver};
