//! JPEG image decoder (via the `image` crate)

use std::path::Path;

use image::ImageReader;

use crate::error::{Result, TransferError};
use crate::models::Rgb8Image;

/// Decode a JPEG file to 8-bit RGB
pub(crate) fn decode_jpeg(path: &Path) -> Result<Rgb8Image> {
    let mut reader = ImageReader::open(path)?;
    reader.set_format(image::ImageFormat::Jpeg);

    let decoded = reader
        .decode()
        .map_err(|e| TransferError::decode(path, "Failed to decode JPEG", e))?;

    let rgb = decoded.to_rgb8();
    let (width, height) = rgb.dimensions();
    Rgb8Image::new(width, height, rgb.into_raw())
        .map_err(|e| TransferError::decode(path, "Corrupt JPEG", e))
}
