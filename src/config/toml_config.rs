use crate::utils::error::{FactsError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_DATASET_PATH: &str = "data/dinosaurs.json";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FactsConfig {
    #[serde(default)]
    pub dataset: DatasetConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetConfig {
    #[serde(default = "default_dataset_path")]
    pub path: String,
    #[serde(default = "default_true")]
    pub validate: bool,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            path: default_dataset_path(),
            validate: true,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: Option<String>,
    /// Field projected by `alive` when no `--key` is passed.
    pub default_key: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
    #[serde(default)]
    pub json: bool,
}

fn default_dataset_path() -> String {
    DEFAULT_DATASET_PATH.to_string()
}

fn default_true() -> bool {
    true
}

impl FactsConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(FactsError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;
        Ok(toml::from_str(&processed_content)?)
    }

    /// 替換環境變數 (例如 ${DINO_DATA})
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| FactsError::ConfigValidationError {
            field: "env_substitution".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::core::report::OutputFormat;
    use crate::utils::validation::Validate;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
[dataset]
path = "fixtures/dinos.json"
validate = false

[output]
format = "json"
default_key = "name"

[logging]
level = "debug"
json = true
"#;

        let config = FactsConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.dataset.path, "fixtures/dinos.json");
        assert!(!config.dataset.validate);
        assert_eq!(config.output.format.as_deref(), Some("json"));
        assert_eq!(config.output.default_key.as_deref(), Some("name"));
        assert!(config.logging.json);

        let settings = Settings::from_config(&config);
        assert_eq!(settings.format().unwrap(), OutputFormat::Json);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = FactsConfig::from_toml_str("").unwrap();
        assert_eq!(config.dataset.path, DEFAULT_DATASET_PATH);
        assert!(config.dataset.validate);
        assert!(config.output.format.is_none());
        assert!(config.output.default_key.is_none());
        assert_eq!(
            Settings::from_config(&config).format().unwrap(),
            OutputFormat::Text
        );
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("DINO_FACTS_TEST_DATASET", "/tmp/dinos.json");

        let toml_content = r#"
[dataset]
path = "${DINO_FACTS_TEST_DATASET}"
"#;

        let config = FactsConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.dataset.path, "/tmp/dinos.json");

        std::env::remove_var("DINO_FACTS_TEST_DATASET");
    }

    #[test]
    fn test_config_validation() {
        for content in [
            "[output]\nformat = \"xml\"\n",
            "[output]\ndefault_key = \" \"\n",
            "[dataset]\npath = \"\"\n",
            "[logging]\nlevel = \"loud\"\n",
        ] {
            let config = FactsConfig::from_toml_str(content).unwrap();
            assert!(Settings::from_config(&config).validate().is_err(), "{}", content);
        }
    }

    #[test]
    fn test_invalid_toml() {
        let err = FactsConfig::from_toml_str("[dataset\npath = 1").unwrap_err();
        assert!(matches!(err, FactsError::TomlError(_)));
    }

    #[test]
    fn test_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[output]\nformat = \"csv\"").unwrap();

        let config = FactsConfig::from_file(file.path()).unwrap();
        assert_eq!(config.output.format.as_deref(), Some("csv"));
    }
}
