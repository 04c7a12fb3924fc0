//! Output naming, directory scanning and report writing.

mod input;
mod report;

pub use input::{
    determine_output_path, expand_target_dir, output_skip_prefixes, plan_batch_outputs,
};
pub use report::{write_stats_report, StatsEntry};
