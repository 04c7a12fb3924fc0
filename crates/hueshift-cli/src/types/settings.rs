//! Resolved settings for a transfer run.

use std::path::PathBuf;

use hueshift_core::config::TransferDefaults;
use hueshift_core::exporters::ExportOptions;
use hueshift_core::{FlatChannelPolicy, TransferOptions};

use crate::error::CliError;

/// What gets recolored
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TargetSpec {
    Image(PathBuf),
    Directory(PathBuf),
}

/// Paths and name as given on the command line, possibly incomplete
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputRequest {
    pub source: Option<PathBuf>,
    pub target: Option<TargetSpec>,
    pub output_name: Option<String>,
}

impl InputRequest {
    pub fn is_complete(&self) -> bool {
        self.source.is_some() && self.target.is_some()
    }

    /// Human-readable list of what is still missing
    pub fn missing(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.source.is_none() {
            missing.push("--source_image");
        }
        if self.target.is_none() {
            missing.push("--target_image or --target_file");
        }
        missing
    }
}

/// Command line values that take precedence over the config file
#[derive(Debug, Clone, Default)]
pub struct SettingsOverrides {
    pub out_dir: Option<PathBuf>,
    pub threads: Option<usize>,
    pub flat_channel: Option<FlatChannelPolicy>,
    pub stats_path: Option<PathBuf>,
}

/// Everything a command needs, built once in `main` and passed down
#[derive(Debug, Clone)]
pub struct TransferSettings {
    pub source_path: PathBuf,
    pub target: TargetSpec,
    pub output_name: Option<String>,
    pub out_dir: Option<PathBuf>,
    pub threads: Option<usize>,
    pub options: TransferOptions,
    pub export: ExportOptions,
    pub output_prefix: String,
    pub batch_extensions: Vec<String>,
    pub stats_path: Option<PathBuf>,
}

impl TransferSettings {
    /// Combine a complete request with config defaults and flag overrides
    pub fn build(
        request: InputRequest,
        overrides: SettingsOverrides,
        defaults: &TransferDefaults,
    ) -> Result<Self, CliError> {
        let missing = request.missing();
        let (Some(source_path), Some(target)) = (request.source, request.target) else {
            return Err(CliError::usage(format!(
                "Missing required argument(s): {}",
                missing.join(", ")
            )));
        };

        let output_name = match request.output_name {
            Some(name) => {
                let name = name.trim().to_string();
                if name.contains(['/', '\\']) {
                    return Err(CliError::usage(format!(
                        "Output name '{}' must not contain path separators; use --out for the directory",
                        name
                    )));
                }
                (!name.is_empty()).then_some(name)
            }
            None => None,
        };

        let threads = match overrides.threads {
            Some(0) => {
                log::warn!("--threads 0 ignored; using rayon default");
                None
            }
            Some(n) => Some(n),
            None => defaults.threads,
        };

        Ok(Self {
            source_path,
            target,
            output_name,
            out_dir: overrides.out_dir,
            threads,
            options: TransferOptions {
                flat_channel: overrides.flat_channel.unwrap_or(defaults.flat_channel),
            },
            export: ExportOptions {
                jpeg_quality: defaults.jpeg_quality,
            },
            output_prefix: defaults.output_prefix.clone(),
            batch_extensions: defaults.batch_extensions.clone(),
            stats_path: overrides.stats_path,
        })
    }
}
