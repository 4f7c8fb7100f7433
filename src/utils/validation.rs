use crate::utils::error::{FactsError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(FactsError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(FactsError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_one_of(field_name: &str, value: &str, allowed: &[&str]) -> Result<()> {
    if !allowed.contains(&value) {
        return Err(FactsError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Unsupported value. Valid values: {}", allowed.join(", ")),
        });
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(FactsError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_non_negative(field_name: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(FactsError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value must be a finite, non-negative number".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_path() {
        assert!(validate_path("dataset.path", "data/dinosaurs.json").is_ok());
        assert!(validate_path("dataset.path", "").is_err());
        assert!(validate_path("dataset.path", "bad\0path").is_err());
    }

    #[test]
    fn test_validate_one_of() {
        assert!(validate_one_of("output.format", "json", &["text", "json", "csv"]).is_ok());
        assert!(validate_one_of("output.format", "xml", &["text", "json", "csv"]).is_err());
    }

    #[test]
    fn test_validate_non_negative() {
        assert!(validate_non_negative("lengthInMeters", 0.0).is_ok());
        assert!(validate_non_negative("lengthInMeters", 26.0).is_ok());
        assert!(validate_non_negative("lengthInMeters", -1.0).is_err());
        assert!(validate_non_negative("lengthInMeters", f64::NAN).is_err());
    }
}
