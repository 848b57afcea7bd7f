use crate::core::engine::DeploymentOutcome;
use crate::utils::error::{DeployError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JournalEntry {
    pub module: String,
    pub export: Option<String>,
    pub contract: String,
    pub address: String,
    pub deployed_at: DateTime<Utc>,
}

/// Writes a JSON record of an executed deployment under a base
/// directory, one file per module.
#[derive(Debug, Clone)]
pub struct DeploymentJournal {
    base_path: String,
}

impl DeploymentJournal {
    pub fn new(base_path: String) -> Self {
        Self { base_path }
    }

    pub fn record(&self, outcome: &DeploymentOutcome) -> Result<String> {
        let deployed_at = Utc::now();
        let entries: Vec<JournalEntry> = outcome
            .deployed
            .iter()
            .map(|contract| JournalEntry {
                module: outcome.module.clone(),
                export: outcome
                    .exports
                    .iter()
                    .find(|(_, deployed)| deployed.request == contract.request)
                    .map(|(name, _)| name.clone()),
                contract: contract.contract.clone(),
                address: contract.address.clone(),
                deployed_at,
            })
            .collect();

        let file_name = format!("{}.journal.json", outcome.module);
        let full_path = Path::new(&self.base_path).join(&file_name);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(&entries)?;
        fs::write(&full_path, json)?;

        full_path
            .to_str()
            .map(|path| path.to_string())
            .ok_or_else(|| DeployError::JournalError {
                message: format!("Journal path for module '{}' is not valid UTF-8", outcome.module),
            })
    }

    pub fn load(&self, module: &str) -> Result<Vec<JournalEntry>> {
        let full_path = Path::new(&self.base_path).join(format!("{}.journal.json", module));
        let content = fs::read_to_string(full_path)?;
        let entries = serde_json::from_str(&content)?;
        Ok(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{DeployedContract, RequestId};
    use std::collections::BTreeMap;
    use tempfile::TempDir;

    fn sample_outcome() -> DeploymentOutcome {
        let factory = DeployedContract {
            contract: "EventFactory".to_string(),
            address: "0x00ff".to_string(),
            request: RequestId(0),
        };
        let mut exports = BTreeMap::new();
        exports.insert("eventFactory".to_string(), factory.clone());
        DeploymentOutcome {
            module: "FactoryModule".to_string(),
            deployed: vec![factory],
            exports,
        }
    }

    #[test]
    fn test_record_and_load_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let journal = DeploymentJournal::new(temp_dir.path().to_str().unwrap().to_string());

        let path = journal.record(&sample_outcome()).unwrap();
        assert!(path.ends_with("FactoryModule.journal.json"));

        let entries = journal.load("FactoryModule").unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].contract, "EventFactory");
        assert_eq!(entries[0].export.as_deref(), Some("eventFactory"));
        assert_eq!(entries[0].address, "0x00ff");
    }

    #[test]
    fn test_load_missing_journal_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let journal = DeploymentJournal::new(temp_dir.path().to_str().unwrap().to_string());

        assert!(journal.load("NoSuchModule").is_err());
    }
}
