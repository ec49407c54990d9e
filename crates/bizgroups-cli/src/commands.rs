// Rust guideline compliant 2026-10-17

//! Command implementations for the Bizgroups CLI.

pub mod init;
pub mod list;
pub mod name;
pub mod resolve;
