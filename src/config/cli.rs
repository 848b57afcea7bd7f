use crate::utils::error::Result;
use crate::utils::validation::{validate_path, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "deploy-modules")]
#[command(about = "Declarative contract deployment modules")]
pub struct CliConfig {
    /// Path to a TOML deployment manifest; the built-in FactoryModule
    /// runs when omitted
    #[arg(long)]
    pub manifest: Option<String>,

    #[arg(long, default_value = "./deployments")]
    pub output_path: String,

    /// Validate and plan without instantiating anything
    #[arg(long)]
    pub dry_run: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("output_path", &self.output_path)?;
        if let Some(manifest) = &self.manifest {
            validate_path("manifest", manifest)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_validate() {
        let config = CliConfig::parse_from(["deploy-modules"]);
        assert!(config.manifest.is_none());
        assert_eq!(config.output_path, "./deployments");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_output_path_is_rejected() {
        let config = CliConfig::parse_from(["deploy-modules", "--output-path", ""]);
        assert!(config.validate().is_err());
    }
}
