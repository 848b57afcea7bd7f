// Adapters layer: concrete implementations at the crate's edges (the
// dry-run orchestrator and the on-disk journal).

pub mod dry_run;
pub mod journal;

pub use dry_run::DryRunOrchestrator;
pub use journal::{DeploymentJournal, JournalEntry};
