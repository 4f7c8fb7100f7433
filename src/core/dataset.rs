use crate::domain::model::{DinosaurRecord, Mya};
use crate::domain::ports::Storage;
use crate::utils::error::{FactsError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_non_negative, Validate};
use std::collections::HashSet;

/// An owned list of records read from JSON. The query functions only ever see
/// `records()`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    records: Vec<DinosaurRecord>,
}

impl Dataset {
    pub fn new(records: Vec<DinosaurRecord>) -> Self {
        Self { records }
    }

    pub fn from_json_slice(data: &[u8]) -> Result<Self> {
        let records: Vec<DinosaurRecord> = serde_json::from_slice(data)?;
        Ok(Self::new(records))
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        Self::from_json_slice(content.as_bytes())
    }

    /// Reads and parses `path` through `storage`, validating when asked to.
    pub async fn load<S: Storage>(storage: &S, path: &str, validate: bool) -> Result<Self> {
        tracing::debug!("Reading dataset from: {}", path);
        let data = storage.read_file(path).await?;
        let dataset = Self::from_json_slice(&data)?;

        if validate {
            dataset.validate()?;
        }

        tracing::info!("📦 Loaded {} dinosaurs from {}", dataset.len(), path);
        Ok(dataset)
    }

    pub fn records(&self) -> &[DinosaurRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl Validate for Dataset {
    fn validate(&self) -> Result<()> {
        if self.records.is_empty() {
            tracing::warn!("Dataset contains no dinosaurs");
        }

        let mut seen = HashSet::new();
        for (index, dino) in self.records.iter().enumerate() {
            let at = |e: FactsError| {
                FactsError::dataset(format!("record #{} ('{}'): {}", index, dino.id, e))
            };

            validate_non_empty_string("dinosaurId", &dino.id).map_err(at)?;
            validate_non_empty_string("name", &dino.name).map_err(at)?;
            validate_non_negative("lengthInMeters", dino.meters()).map_err(at)?;

            if let Mya::Range { start, end } = &dino.mya {
                let (older, younger) = dino.mya.bounds();
                if older < younger {
                    return Err(FactsError::dataset(format!(
                        "record #{} ('{}'): mya range [{}, {}] must list the older bound first",
                        index, dino.id, start, end
                    )));
                }
            }

            if !seen.insert(dino.id.as_str()) {
                return Err(FactsError::dataset(format!(
                    "record #{}: duplicate dinosaurId '{}'",
                    index, dino.id
                )));
            }
        }

        Ok(())
    }
}
