//! JSON statistics report (`--stats`).

use std::path::{Path, PathBuf};

use hueshift_core::TransferReport;
use serde::Serialize;

use crate::error::CliError;

/// Statistics for one written output
#[derive(Debug, Clone, Serialize)]
pub struct StatsEntry {
    pub target: PathBuf,
    pub output: PathBuf,
    #[serde(flatten)]
    pub report: TransferReport,
}

/// Write all entries as a pretty-printed JSON array
pub fn write_stats_report(path: &Path, entries: &[StatsEntry]) -> Result<(), CliError> {
    let json = serde_json::to_string_pretty(entries)
        .map_err(|e| CliError::usage(format!("Failed to serialize statistics: {}", e)))?;
    std::fs::write(path, json).map_err(|e| {
        CliError::io(format!("Failed to write statistics to {}", path.display()), e)
    })?;
    log::info!("Statistics written to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use hueshift_core::{ChannelStats, LabStats};
    use tempfile::tempdir;

    #[test]
    fn test_report_json_shape() {
        let stats = LabStats {
            l: ChannelStats {
                mean: 100.0,
                std_dev: 10.0,
            },
            ..LabStats::default()
        };
        let entry = StatsEntry {
            target: PathBuf::from("t.png"),
            output: PathBuf::from("filtered_t.png"),
            report: TransferReport {
                source: stats,
                target_before: LabStats::default(),
                target_after: stats,
            },
        };

        let dir = tempdir().unwrap();
        let path = dir.path().join("stats.json");
        write_stats_report(&path, &[entry]).unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(value[0]["target"], "t.png");
        assert_eq!(value[0]["source"]["l"]["mean"], 100.0);
        assert_eq!(value[0]["target_before"]["a"]["std_dev"], 0.0);
    }
}
