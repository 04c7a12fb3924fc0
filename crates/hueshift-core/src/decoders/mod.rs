//! Image decoders for various formats
//!
//! Support for PNG and JPEG files. Every decoder produces an 8-bit RGB
//! image; grayscale is expanded and alpha is dropped.

mod jpeg;
mod png;

#[cfg(test)]
mod tests;

use std::path::Path;

use crate::error::{Result, TransferError};
use crate::models::Rgb8Image;

/// Extensions with both a decoder and an encoder
pub const SUPPORTED_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg"];

/// Lowercase extension of `path`, if any
pub fn extension_of(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
}

/// Check if a file extension is supported
pub fn is_supported_extension(ext: &str) -> bool {
    SUPPORTED_EXTENSIONS.contains(&ext.to_lowercase().as_str())
}

/// Decode an image from a file path
///
/// A missing file is reported as `NotFound` before any decoder runs.
pub fn decode_image<P: AsRef<Path>>(path: P) -> Result<Rgb8Image> {
    let path = path.as_ref();
    if !path.is_file() {
        return Err(TransferError::NotFound {
            path: path.to_path_buf(),
        });
    }

    let extension = extension_of(path).ok_or_else(|| TransferError::UnsupportedFormat {
        extension: String::new(),
    })?;

    let image = match extension.as_str() {
        "png" => png::decode_png(path)?,
        "jpg" | "jpeg" => jpeg::decode_jpeg(path)?,
        _ => return Err(TransferError::UnsupportedFormat { extension }),
    };

    log::debug!(
        "Decoded {} ({}x{})",
        path.display(),
        image.width(),
        image.height()
    );
    Ok(image)
}
