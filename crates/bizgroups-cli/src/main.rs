// Rust guideline compliant 2026-10-17

//! Bizgroups CLI Application
//!
//! Command-line interface for looking up business groups on a management API.

use anyhow::{Context, Result};
use bizgroups_cli::{commands, create_formatter, logging, OutputFormatter};
use bizgroups_core::{Config, HttpDirectory, OutputFormat, Resolver};
use clap::Parser;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(
    name = "bizgroups",
    version,
    about = "Look up business groups by short ID or name",
    long_about = "Bizgroups lists the business groups known to a management API and resolves short IDs or labels to full IDs.",
    after_help = "Examples:\n  bizgroups init --url https://mgmt.example.com:8282\n  bizgroups list\n  bizgroups resolve a1b2\n  bizgroups resolve \"Development\"\n  bizgroups name a1b2\n"
)]
struct Cli {
    /// Enable JSON output
    #[arg(long, global = true)]
    json: bool,

    /// Output format
    #[arg(long, value_enum, global = true)]
    format: Option<FormatArg>,

    /// Base URL of the management API (overrides configuration)
    #[arg(long, global = true)]
    url: Option<String>,

    /// Configuration directory
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Clone, clap::ValueEnum)]
enum FormatArg {
    Json,
    Table,
    Plain,
}

#[derive(Debug, clap::Subcommand)]
enum Commands {
    /// Write a configuration file
    Init {
        /// Overwrite an existing configuration
        #[arg(long)]
        force: bool,
    },

    /// List business groups
    List,

    /// Resolve a short ID prefix or label to a full ID
    Resolve {
        /// Short ID prefix or exact label
        token: String,
    },

    /// Print the label of a business group
    Name {
        /// Short ID prefix or exact label
        token: String,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(err) = logging::init(&cli.log_level) {
        eprintln!("Error: {:#}", err);
        return ExitCode::FAILURE;
    }

    let config_dir = config_dir(cli.config.clone());

    // init must work even when an existing configuration is unreadable.
    if let Some(Commands::Init { force }) = cli.command {
        return match commands::init::execute(&config_dir, cli.url, force) {
            Ok(output) => {
                println!("{}", output);
                ExitCode::SUCCESS
            }
            Err(err) => {
                eprintln!("Error: {:#}", err);
                ExitCode::FAILURE
            }
        };
    }

    let config = match load_config(&cli, &config_dir) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            return ExitCode::FAILURE;
        }
    };

    let format = match cli.format {
        Some(FormatArg::Json) => OutputFormat::Json,
        Some(FormatArg::Table) => OutputFormat::Table,
        Some(FormatArg::Plain) => OutputFormat::Plain,
        None if cli.json => OutputFormat::Json,
        None => config.output_format,
    };
    let formatter = create_formatter(format);

    match run(cli, &config, formatter.as_ref()) {
        Ok(Some(output)) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Ok(None) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", formatter.format_error(&err));
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli, config: &Config, formatter: &dyn OutputFormatter) -> Result<Option<String>> {
    let Some(command) = cli.command else {
        println!("Use --help for usage information");
        return Ok(None);
    };

    let output = match command {
        Commands::Init { .. } => return Ok(None),
        Commands::List => commands::list::execute(&http_directory(config)?, formatter)?,
        Commands::Resolve { token } => {
            let resolver = Resolver::new(http_directory(config)?);
            commands::resolve::execute(&resolver, &token, formatter)?
        }
        Commands::Name { token } => {
            let resolver = Resolver::new(http_directory(config)?);
            commands::name::execute(&resolver, &token, formatter)?
        }
    };
    Ok(Some(output))
}

fn http_directory(config: &Config) -> Result<HttpDirectory> {
    HttpDirectory::from_config(config).context("Failed to build HTTP client")
}

/// Loads configuration and applies the `--url` override.
fn load_config(cli: &Cli, config_dir: &Path) -> Result<Config> {
    let mut config = Config::load(config_dir)
        .with_context(|| format!("Failed to load configuration from {}", config_dir.display()))?;
    if let Some(url) = &cli.url {
        config.url = url.clone();
        config.validate()?;
    }
    Ok(config)
}

/// Picks the configuration directory: `--config`, then
/// `BIZGROUPS_CONFIG_DIR`, then `$HOME/.bizgroups`, then `./.bizgroups`.
fn config_dir(explicit: Option<PathBuf>) -> PathBuf {
    explicit
        .or_else(|| std::env::var_os("BIZGROUPS_CONFIG_DIR").map(PathBuf::from))
        .or_else(|| std::env::var_os("HOME").map(|home| PathBuf::from(home).join(".bizgroups")))
        .unwrap_or_else(|| PathBuf::from(".bizgroups"))
}
