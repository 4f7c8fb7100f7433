use thiserror::Error;

#[derive(Error, Debug)]
pub enum FactsError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Dataset error: {message}")]
    DatasetError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Parsing,
    Configuration,
    Dataset,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl FactsError {
    pub fn dataset(message: impl Into<String>) -> Self {
        FactsError::DatasetError {
            message: message.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            FactsError::IoError(_) => ErrorCategory::Io,
            FactsError::SerializationError(_)
            | FactsError::TomlError(_)
            | FactsError::CsvError(_) => ErrorCategory::Parsing,
            FactsError::ConfigValidationError { .. }
            | FactsError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            FactsError::DatasetError { .. } => ErrorCategory::Dataset,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            FactsError::CsvError(_) => ErrorSeverity::Medium,
            FactsError::SerializationError(_)
            | FactsError::TomlError(_)
            | FactsError::DatasetError { .. }
            | FactsError::ConfigValidationError { .. }
            | FactsError::InvalidConfigValueError { .. } => ErrorSeverity::High,
            FactsError::IoError(_) => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            FactsError::IoError(_) => "Check that the dataset or config file exists and is readable",
            FactsError::SerializationError(_) => {
                "Make sure the dataset is a JSON array of dinosaur objects and every 'mya' has 1 or 2 values"
            }
            FactsError::TomlError(_) => "Check the TOML syntax of the configuration file",
            FactsError::CsvError(_) => "Try another output format such as 'json' or 'text'",
            FactsError::ConfigValidationError { .. }
            | FactsError::InvalidConfigValueError { .. } => {
                "Fix the reported configuration field and run again"
            }
            FactsError::DatasetError { .. } => {
                "Fix the reported record, or disable dataset validation in the config"
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            FactsError::IoError(e) => format!("Could not read a file: {}", e),
            FactsError::SerializationError(e) => format!("The dataset is not valid: {}", e),
            FactsError::TomlError(e) => format!("The config file is not valid TOML: {}", e),
            FactsError::CsvError(e) => format!("Could not write CSV output: {}", e),
            FactsError::ConfigValidationError { field, message } => {
                format!("Config field '{}' is invalid: {}", field, message)
            }
            FactsError::InvalidConfigValueError {
                field,
                value,
                reason,
            } => format!("'{}' is not a valid value for '{}': {}", value, field, reason),
            FactsError::DatasetError { message } => format!("The dataset is not valid: {}", message),
        }
    }
}

pub type Result<T> = std::result::Result<T, FactsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_classification() {
        let err = FactsError::dataset("duplicate id 'abc'");
        assert_eq!(err.category(), ErrorCategory::Dataset);
        assert_eq!(err.severity(), ErrorSeverity::High);
        assert!(err.user_friendly_message().contains("duplicate id 'abc'"));

        let err = FactsError::from(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "missing",
        ));
        assert_eq!(err.category(), ErrorCategory::Io);
        assert_eq!(err.severity(), ErrorSeverity::Critical);
    }

    #[test]
    fn test_invalid_value_display() {
        let err = FactsError::InvalidConfigValueError {
            field: "output.format".to_string(),
            value: "xml".to_string(),
            reason: "Unsupported format".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid value 'xml' for 'output.format': Unsupported format"
        );
    }
}
