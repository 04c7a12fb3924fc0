//! Transfer configuration management.
//!
//! Defaults come from an optional YAML file. Loading never fails: problems
//! are collected as warnings and built-in defaults are used instead. The
//! returned handle is meant to be created once at start-up and passed down.

mod defaults;

pub use defaults::{TransferDefaults, DEFAULT_OUTPUT_PREFIX};

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Environment variable naming a config file
pub const CONFIG_ENV_VAR: &str = "HUESHIFT_CONFIG";

/// Canonical list of candidate config file names we search for on disk.
const CONFIG_FILENAMES: &[&str] = &["hueshift.yml", "hueshift.yaml"];

/// Loaded configuration, its source path, and warnings.
#[derive(Debug, Clone)]
pub struct ConfigHandle {
    pub config: HueshiftConfig,
    pub source: Option<PathBuf>,
    pub warnings: Vec<String>,
}

/// Complete configuration file structure.
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct HueshiftConfig {
    pub defaults: TransferDefaults,
}

impl HueshiftConfig {
    /// Parse YAML text and sanitize the result
    pub fn from_yaml(contents: &str) -> Result<(Self, Vec<String>), serde_yaml::Error> {
        let mut config: HueshiftConfig = serde_yaml::from_str(contents)?;
        let warnings = config.defaults.sanitize();
        Ok((config, warnings))
    }
}

/// Load configuration from disk, optionally forcing a specific path.
///
/// Candidates are tried in order; the first one that parses wins.
pub fn load_config(custom_path: Option<&Path>) -> ConfigHandle {
    let env_path = std::env::var_os(CONFIG_ENV_VAR).map(PathBuf::from);
    let candidates = config_candidates(
        custom_path,
        env_path.as_deref(),
        std::env::current_dir().ok().as_deref(),
        dirs::home_dir().as_deref(),
    );
    load_from_candidates(custom_path, &candidates)
}

fn load_from_candidates(custom_path: Option<&Path>, candidates: &[PathBuf]) -> ConfigHandle {
    let mut warnings = Vec::new();

    if let Some(path) = custom_path {
        if !path.is_file() {
            warnings.push(format!("Config file {} does not exist", path.display()));
        }
    }

    for candidate in candidates {
        if !candidate.is_file() {
            continue;
        }

        match fs::read_to_string(candidate) {
            Ok(contents) => match HueshiftConfig::from_yaml(&contents) {
                Ok((config, fixes)) => {
                    warnings.extend(fixes);
                    let source = fs::canonicalize(candidate).unwrap_or_else(|_| candidate.clone());
                    return ConfigHandle {
                        config,
                        source: Some(source),
                        warnings,
                    };
                }
                Err(err) => warnings.push(format!(
                    "Failed to parse config {}: {}",
                    candidate.display(),
                    err
                )),
            },
            Err(err) => warnings.push(format!(
                "Failed to read config {}: {}",
                candidate.display(),
                err
            )),
        }
    }

    ConfigHandle {
        config: HueshiftConfig::default(),
        source: None,
        warnings,
    }
}

/// Ordered list of config file candidates
fn config_candidates(
    custom_path: Option<&Path>,
    env_path: Option<&Path>,
    cwd: Option<&Path>,
    home: Option<&Path>,
) -> Vec<PathBuf> {
    let mut candidates = Vec::new();

    if let Some(path) = custom_path {
        candidates.push(path.to_path_buf());
    }

    if let Some(path) = env_path {
        candidates.push(path.to_path_buf());
    }

    if let Some(cwd) = cwd {
        for name in CONFIG_FILENAMES {
            candidates.push(cwd.join("config").join(name));
            candidates.push(cwd.join(name));
        }
    }

    if let Some(home) = home {
        for name in CONFIG_FILENAMES {
            candidates.push(home.join("hueshift").join(name));
        }
    }

    candidates
}

/// Log where configuration came from along with any warnings
pub fn log_config_usage(handle: &ConfigHandle) {
    match &handle.source {
        Some(source) => log::info!("Loaded config from {}", source.display()),
        None => log::debug!("No config file found; using built-in defaults"),
    }
    for warning in &handle.warnings {
        log::warn!("Config warning: {}", warning);
    }
}
