//! Shared utilities for hueshift-cli
//!
//! Argument resolution, output naming and directory scanning live here so the
//! binary stays a thin layer over them.

pub mod error;
pub mod interactive;
pub mod processing;
pub mod types;

// Re-export commonly used items at the crate root for convenience
pub use error::CliError;
pub use interactive::prompt_missing;
pub use processing::{
    determine_output_path, expand_target_dir, output_skip_prefixes, plan_batch_outputs,
    write_stats_report, StatsEntry,
};
pub use types::{InputRequest, SettingsOverrides, TargetSpec, TransferSettings};
