#[cfg(feature = "cli")]
pub mod cli;
pub mod manifest;

#[cfg(feature = "cli")]
pub use cli::CliConfig;
pub use manifest::ManifestConfig;
