use crate::utils::error::{FactsError, Result};
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Csv,
}

impl OutputFormat {
    pub const VALID: [&'static str; 3] = ["text", "json", "csv"];
}

impl FromStr for OutputFormat {
    type Err = FactsError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            _ => Err(FactsError::InvalidConfigValueError {
                field: "output.format".to_string(),
                value: s.to_string(),
                reason: format!("Unsupported format. Valid formats: {}", Self::VALID.join(", ")),
            }),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
            OutputFormat::Csv => "csv",
        };
        f.write_str(name)
    }
}

pub fn render_longest(longest: &HashMap<String, f64>, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(longest
            .iter()
            .map(|(name, feet)| format!("{}: {} ft", name, feet))
            .collect::<Vec<_>>()
            .join("\n")),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(longest)?),
        OutputFormat::Csv => {
            let mut writer = csv::Writer::from_writer(Vec::new());
            writer.write_record(["name", "length_in_feet"])?;
            for (name, feet) in longest {
                writer.write_record([name.as_str(), feet.to_string().as_str()])?;
            }
            finish_csv(writer)
        }
    }
}

pub fn render_description(description: &str, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(description.to_string()),
        OutputFormat::Json => Ok(serde_json::to_string(description)?),
        OutputFormat::Csv => {
            let mut writer = csv::Writer::from_writer(Vec::new());
            writer.write_record(["description"])?;
            writer.write_record([description])?;
            finish_csv(writer)
        }
    }
}

pub fn render_alive(values: &[Value], column: &str, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(values.iter().map(plain).collect::<Vec<_>>().join("\n")),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(values)?),
        OutputFormat::Csv => {
            let mut writer = csv::Writer::from_writer(Vec::new());
            writer.write_record([column])?;
            for value in values {
                writer.write_record([plain(value)])?;
            }
            finish_csv(writer)
        }
    }
}

/// Strings without their JSON quotes; everything else as JSON.
fn plain(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn finish_csv(writer: csv::Writer<Vec<u8>>) -> Result<String> {
    let data = writer
        .into_inner()
        .map_err(|e| FactsError::IoError(e.into_error()))?;
    String::from_utf8(data).map_err(|e| FactsError::dataset(format!("CSV output is not UTF-8: {}", e)))
}
