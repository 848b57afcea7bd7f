use crate::core::builder::ModuleBuilder;
use crate::core::{ArgValue, ContractHandle, DeploymentModule};
use crate::utils::error::{DeployError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_unique_names, Validate};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManifestConfig {
    pub module: ModuleInfo,
    pub contracts: Vec<ContractEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModuleInfo {
    pub name: String,
    pub description: Option<String>,
    pub version: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContractEntry {
    /// Export key the deployed contract is published under.
    pub export: String,
    /// Target contract identifier.
    pub contract: String,
    pub args: Option<Vec<ManifestArg>>,
}

/// Constructor argument as written in the manifest. Handle references
/// name a previously declared export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ManifestArg {
    Bool(bool),
    Int(i64),
    String(String),
    HandleRef { handle: String },
}

impl ManifestConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(DeployError::IoError)?;
        Self::from_str(&content)
    }

    pub fn from_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| DeployError::ManifestError {
            message: format!("Manifest TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` occurrences with the environment value; unknown
    /// variables are left as written.
    fn substitute_env_vars(content: &str) -> String {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").unwrap();

        re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .to_string()
    }

    /// Builds the deployment module this manifest describes, running
    /// every argument through the same builder context the closure API
    /// uses.
    pub fn to_module(&self) -> Result<DeploymentModule> {
        self.validate()?;

        let mut builder = ModuleBuilder::new(&self.module.name);
        let mut handles: HashMap<&str, ContractHandle> = HashMap::new();
        let mut exports: BTreeMap<String, ContractHandle> = BTreeMap::new();

        for entry in &self.contracts {
            let mut args = Vec::new();
            for arg in entry.args.as_deref().unwrap_or_default() {
                args.push(match arg {
                    ManifestArg::Bool(value) => ArgValue::Bool(*value),
                    ManifestArg::Int(value) if *value >= 0 => ArgValue::Uint(*value as u128),
                    ManifestArg::Int(value) => ArgValue::Int(*value),
                    ManifestArg::String(value) => ArgValue::String(value.clone()),
                    ManifestArg::HandleRef { handle } => {
                        let target = handles.get(handle.as_str()).ok_or_else(|| {
                            DeployError::ConfigValidationError {
                                field: format!("contracts.{}.args", entry.export),
                                message: format!(
                                    "Handle reference '{}' does not name an earlier export",
                                    handle
                                ),
                            }
                        })?;
                        ArgValue::Handle(*target)
                    }
                });
            }

            let handle = builder.contract(&entry.contract, args);
            handles.insert(entry.export.as_str(), handle);
            exports.insert(entry.export.clone(), handle);
        }

        Ok(builder.finish(exports))
    }
}

impl Validate for ManifestConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("module.name", &self.module.name)?;

        if self.contracts.is_empty() {
            return Err(DeployError::ConfigValidationError {
                field: "contracts".to_string(),
                message: "Manifest declares no contracts".to_string(),
            });
        }

        for entry in &self.contracts {
            validate_non_empty_string("contracts.export", &entry.export)?;
            validate_non_empty_string("contracts.contract", &entry.contract)?;
        }

        validate_unique_names(
            "contracts.export",
            self.contracts.iter().map(|entry| entry.export.as_str()),
        )?;

        // Handle references must point at an export declared earlier in
        // the file, which also keeps manifests acyclic.
        let mut declared: std::collections::HashSet<&str> = std::collections::HashSet::new();
        for entry in &self.contracts {
            for arg in entry.args.as_deref().unwrap_or_default() {
                if let ManifestArg::HandleRef { handle } = arg {
                    if !declared.contains(handle.as_str()) {
                        return Err(DeployError::ConfigValidationError {
                            field: format!("contracts.{}.args", entry.export),
                            message: format!(
                                "Handle reference '{}' does not name an earlier export",
                                handle
                            ),
                        });
                    }
                }
            }
            declared.insert(entry.export.as_str());
        }

        Ok(())
    }
}
