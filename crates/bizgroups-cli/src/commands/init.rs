// Rust guideline compliant 2026-10-17

//! Implementation of the `bizgroups init` command.
//!
//! Writes a `config.toml` pointing at the management API.

use anyhow::{Context, Result};
use bizgroups_core::Config;
use std::fs;
use std::path::Path;

/// Writes a configuration file into `config_dir`.
///
/// An existing configuration is left untouched unless `force` is set.
///
/// # Errors
///
/// Returns an error if:
/// - A configuration already exists and `force` is not set
/// - The URL fails validation
/// - The directory or file cannot be written
pub fn execute(config_dir: &Path, url: Option<String>, force: bool) -> Result<String> {
    let config_path = config_dir.join("config.toml");
    if config_path.exists() && !force {
        anyhow::bail!(
            "Configuration already exists at {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    let mut config = Config::default();
    if let Some(url) = url {
        config.url = url;
    }
    config.validate()?;

    fs::create_dir_all(config_dir)
        .with_context(|| format!("Failed to create {}", config_dir.display()))?;
    config.save(config_dir)?;

    Ok(format!("Wrote {}", config_path.display()))
}
