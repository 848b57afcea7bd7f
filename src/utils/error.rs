use thiserror::Error;

#[derive(Error, Debug)]
pub enum DeployError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Manifest parsing error: {message}")]
    ManifestError { message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required field: {field}")]
    MissingConfigError { field: String },

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Planning failed for module '{module}': {message}")]
    PlanningError { module: String, message: String },

    #[error("Orchestration failed for contract '{contract}': {message}")]
    OrchestrationError { contract: String, message: String },

    #[error("Journal error: {message}")]
    JournalError { message: String },
}

pub type Result<T> = std::result::Result<T, DeployError>;
