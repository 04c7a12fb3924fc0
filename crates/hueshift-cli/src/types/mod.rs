//! Type definitions for CLI.

mod settings;

pub use settings::{InputRequest, SettingsOverrides, TargetSpec, TransferSettings};
