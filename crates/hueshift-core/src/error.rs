//! Error types for the hueshift core library

use std::path::PathBuf;

use thiserror::Error;

use crate::color::LabChannel;

/// Result type alias for hueshift operations
pub type Result<T> = std::result::Result<T, TransferError>;

/// Errors raised while loading, transferring or writing images
#[derive(Error, Debug)]
pub enum TransferError {
    /// Input path does not exist
    #[error("Image not found: {}", .path.display())]
    NotFound { path: PathBuf },

    /// File exists but could not be decoded
    #[error("Failed to decode {}: {message}", .path.display())]
    Decode {
        path: PathBuf,
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Extension has no decoder or encoder
    #[error("Unsupported image format: {extension}")]
    UnsupportedFormat { extension: String },

    /// Output could not be encoded or written
    #[error("Failed to write {}: {message}", .path.display())]
    Encode {
        path: PathBuf,
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Pixel buffer does not match the declared dimensions
    #[error("Pixel buffer holds {actual} bytes, expected {expected} for {width}x{height} RGB")]
    InvalidDimensions {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },

    /// Image has no pixels
    #[error("Image has no pixels")]
    EmptyImage,

    /// Target channel has zero spread and the policy forbids re-centering only
    #[error("Target {channel} channel is flat (zero standard deviation)")]
    FlatChannel { channel: LabChannel },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl TransferError {
    /// Create a decode error with context
    pub fn decode<E>(path: impl Into<PathBuf>, message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Decode {
            path: path.into(),
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a decode error without an underlying cause
    pub fn decode_msg(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Decode {
            path: path.into(),
            message: message.into(),
            source: None,
        }
    }

    /// Create an encode error with context
    pub fn encode<E>(path: impl Into<PathBuf>, message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Encode {
            path: path.into(),
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// True for errors raised before any pixel was processed
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            TransferError::NotFound { .. }
                | TransferError::Decode { .. }
                | TransferError::UnsupportedFormat { .. }
        )
    }
}
