pub mod cli;
pub mod toml_config;

use crate::core::report::OutputFormat;
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_one_of, validate_path, Validate};
use std::path::PathBuf;
use toml_config::FactsConfig;

#[cfg(feature = "cli")]
use clap::{Parser, Subcommand};
#[cfg(feature = "cli")]
use std::path::Path;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "dinosaur-facts")]
#[command(about = "Look up facts in a list of dinosaurs")]
pub struct CliConfig {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Dataset file (JSON array of dinosaurs), overrides the config file
    #[arg(long)]
    pub dataset: Option<String>,

    /// Output format: text, json or csv
    #[arg(long)]
    pub format: Option<String>,

    /// Skip dataset validation
    #[arg(long)]
    pub no_validate: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, PartialEq, Subcommand)]
pub enum Command {
    /// Show the longest dinosaur, in feet
    Longest,
    /// Describe the dinosaur with the given id
    Describe { id: String },
    /// List dinosaurs alive the given number of million years ago
    Alive {
        mya: f64,
        /// Field to show instead of the id
        #[arg(long)]
        key: Option<String>,
    },
}

/// Effective settings after layering CLI flags over the config file.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub dataset_path: String,
    /// Directory a relative `dataset_path` is read from.
    pub base_dir: PathBuf,
    pub validate_dataset: bool,
    pub output_format: String,
    pub default_key: Option<String>,
    pub log_level: Option<String>,
    pub json_logs: bool,
}

impl Settings {
    pub fn from_config(config: &FactsConfig) -> Self {
        Self {
            dataset_path: config.dataset.path.clone(),
            base_dir: PathBuf::from("."),
            validate_dataset: config.dataset.validate,
            output_format: config
                .output
                .format
                .clone()
                .unwrap_or_else(|| OutputFormat::default().to_string()),
            default_key: config.output.default_key.clone(),
            log_level: config.logging.level.clone(),
            json_logs: config.logging.json,
        }
    }

    /// A dataset path from the config file is relative to `config_dir`; one
    /// from `--dataset` is relative to the working directory.
    #[cfg(feature = "cli")]
    pub fn resolve(cli: &CliConfig, config: &FactsConfig, config_dir: Option<&Path>) -> Self {
        let mut settings = Self::from_config(config);

        if let Some(dir) = config_dir {
            settings.base_dir = dir.to_path_buf();
        }
        if let Some(dataset) = &cli.dataset {
            settings.dataset_path = dataset.clone();
            settings.base_dir = PathBuf::from(".");
        }
        if let Some(format) = &cli.format {
            settings.output_format = format.clone();
        }
        if cli.no_validate {
            settings.validate_dataset = false;
        }
        if cli.json_logs {
            settings.json_logs = true;
        }

        settings
    }

    pub fn format(&self) -> Result<OutputFormat> {
        self.output_format.parse()
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::from_config(&FactsConfig::default())
    }
}

impl ConfigProvider for Settings {
    fn dataset_path(&self) -> &str {
        &self.dataset_path
    }

    fn output_format(&self) -> &str {
        &self.output_format
    }

    fn default_key(&self) -> Option<&str> {
        self.default_key.as_deref()
    }

    fn validate_dataset(&self) -> bool {
        self.validate_dataset
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validate_path("dataset.path", &self.dataset_path)?;
        validate_one_of(
            "output.format",
            &self.output_format.to_ascii_lowercase(),
            &OutputFormat::VALID,
        )?;

        if let Some(key) = &self.default_key {
            validate_non_empty_string("output.default_key", key)?;
        }

        if let Some(level) = &self.log_level {
            validate_one_of(
                "logging.level",
                &level.to_ascii_lowercase(),
                &["trace", "debug", "info", "warn", "error"],
            )?;
        }

        Ok(())
    }
}
