//! Error type for the command line front end.

use std::path::PathBuf;

use hueshift_core::TransferError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    /// Arguments missing or contradictory
    #[error("{0}")]
    Usage(String),

    #[error("Invalid choice '{0}': enter 1 for a single image or 2 for a directory")]
    InvalidChoice(String),

    #[error("No supported images found in {}", .dir.display())]
    NoImagesFound { dir: PathBuf },

    #[error("{failed} of {total} images failed to process")]
    BatchFailed { failed: usize, total: usize },

    #[error("Config error: {0}")]
    Config(String),

    #[error(transparent)]
    Core(#[from] TransferError),

    #[error("{context}: {source}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },
}

impl CliError {
    pub fn usage(message: impl Into<String>) -> Self {
        Self::Usage(message.into())
    }

    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = CliError::BatchFailed {
            failed: 2,
            total: 5,
        };
        assert_eq!(err.to_string(), "2 of 5 images failed to process");

        let err = CliError::InvalidChoice("3".into());
        assert!(err.to_string().starts_with("Invalid choice '3'"));

        let err: CliError = TransferError::NotFound {
            path: PathBuf::from("a.png"),
        }
        .into();
        assert!(matches!(err, CliError::Core(_)));
        assert!(err.to_string().contains("a.png"));
    }
}
