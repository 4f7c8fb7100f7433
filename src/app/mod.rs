//! Command-line wiring: config file + flags into `Settings`, then one query.

use crate::config::{toml_config::FactsConfig, CliConfig, Command, Settings};
use crate::core::dataset::Dataset;
use crate::core::{facts, report, ConfigProvider};
use crate::utils::error::{ErrorSeverity, FactsError, Result};
use crate::LocalStorage;
use std::path::Path;

/// Column header used for `alive` output when no key is projected.
pub const ID_COLUMN: &str = "dinosaurId";

/// Loads `--config` (if any) and layers the command-line flags over it.
pub fn load_settings(cli: &CliConfig) -> Result<Settings> {
    match &cli.config {
        Some(path) => {
            let config = FactsConfig::from_file(path)?;
            let config_dir = Path::new(path).parent();
            Ok(Settings::resolve(cli, &config, config_dir))
        }
        None => Ok(Settings::resolve(cli, &FactsConfig::default(), None)),
    }
}

/// Loads the dataset named by `settings` and renders the answer to `command`.
pub async fn run(command: &Command, settings: &Settings) -> Result<String> {
    let format = settings.format()?;
    let storage = LocalStorage::new(&settings.base_dir);
    let dataset = Dataset::load(
        &storage,
        settings.dataset_path(),
        settings.validate_dataset(),
    )
    .await?;
    let dinosaurs = dataset.records();

    match command {
        Command::Longest => report::render_longest(&facts::longest_dinosaur(dinosaurs), format),
        Command::Describe { id } => {
            report::render_description(&facts::dinosaur_description(dinosaurs, id), format)
        }
        Command::Alive { mya, key } => {
            let key = key.as_deref().or(settings.default_key());
            let values = facts::dinosaurs_alive_mya(dinosaurs, *mya, key);
            report::render_alive(&values, key.unwrap_or(ID_COLUMN), format)
        }
    }
}

/// 根據錯誤嚴重程度決定退出碼
pub fn exit_code(error: &FactsError) -> i32 {
    match error.severity() {
        ErrorSeverity::High => 1,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::Critical => 3,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes_follow_severity() {
        let io = FactsError::from(std::io::Error::new(std::io::ErrorKind::NotFound, "gone"));
        assert_eq!(exit_code(&io), 3);

        assert_eq!(exit_code(&FactsError::dataset("duplicate id")), 1);

        let csv = FactsError::from(csv::Error::from(std::io::Error::new(
            std::io::ErrorKind::BrokenPipe,
            "closed",
        )));
        assert_eq!(exit_code(&csv), 2);
    }
}
