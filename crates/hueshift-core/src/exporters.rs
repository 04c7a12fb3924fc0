//! Image exporters for various output formats
//!
//! Export recolored images to PNG or JPEG. Output is written to a temporary
//! file next to the destination and persisted only once encoding succeeded,
//! so a failed export never leaves a partial file behind.

use std::io::{BufWriter, Write};
use std::path::Path;

use image::codecs::jpeg::JpegEncoder;
use tempfile::NamedTempFile;

use crate::decoders::extension_of;
use crate::error::{Result, TransferError};
use crate::models::Rgb8Image;

/// Default JPEG quality (1-100)
pub const DEFAULT_JPEG_QUALITY: u8 = 95;

/// Encoder settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExportOptions {
    pub jpeg_quality: u8,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            jpeg_quality: DEFAULT_JPEG_QUALITY,
        }
    }
}

/// Export an image, picking the encoder from the output extension
pub fn export_image<P: AsRef<Path>>(
    image: &Rgb8Image,
    path: P,
    options: &ExportOptions,
) -> Result<()> {
    let path = path.as_ref();
    let extension = extension_of(path).unwrap_or_default();

    match extension.as_str() {
        "png" => write_atomic(path, |w| encode_png(image, w, path)),
        "jpg" | "jpeg" => write_atomic(path, |w| encode_jpeg(image, w, options.jpeg_quality, path)),
        _ => Err(TransferError::UnsupportedFormat { extension }),
    }
}

/// Export as 8-bit RGB PNG
pub fn export_png<P: AsRef<Path>>(image: &Rgb8Image, path: P) -> Result<()> {
    let path = path.as_ref();
    write_atomic(path, |w| encode_png(image, w, path))
}

/// Export as baseline JPEG
pub fn export_jpeg<P: AsRef<Path>>(image: &Rgb8Image, path: P, quality: u8) -> Result<()> {
    let path = path.as_ref();
    write_atomic(path, |w| encode_jpeg(image, w, quality, path))
}

fn encode_png<W: Write>(image: &Rgb8Image, writer: W, path: &Path) -> Result<()> {
    let mut encoder = png::Encoder::new(writer, image.width(), image.height());
    encoder.set_color(png::ColorType::Rgb);
    encoder.set_depth(png::BitDepth::Eight);

    let mut writer = encoder
        .write_header()
        .map_err(|e| TransferError::encode(path, "Failed to write PNG header", e))?;
    writer
        .write_image_data(image.as_raw())
        .map_err(|e| TransferError::encode(path, "Failed to write PNG data", e))?;
    writer
        .finish()
        .map_err(|e| TransferError::encode(path, "Failed to finish PNG", e))
}

fn encode_jpeg<W: Write>(image: &Rgb8Image, writer: W, quality: u8, path: &Path) -> Result<()> {
    JpegEncoder::new_with_quality(writer, quality.clamp(1, 100))
        .encode(
            image.as_raw(),
            image.width(),
            image.height(),
            image::ExtendedColorType::Rgb8,
        )
        .map_err(|e| TransferError::encode(path, "Failed to encode JPEG", e))
}

/// Run `encode` against a temp file in the destination directory, then rename
fn write_atomic<F>(path: &Path, encode: F) -> Result<()>
where
    F: FnOnce(&mut BufWriter<&mut NamedTempFile>) -> Result<()>,
{
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir)
        .map_err(|e| TransferError::encode(path, "Failed to create temporary file", e))?;
    {
        let mut writer = BufWriter::new(&mut tmp);
        encode(&mut writer)?;
        writer
            .flush()
            .map_err(|e| TransferError::encode(path, "Failed to flush output", e))?;
    }

    tmp.persist(path)
        .map_err(|e| TransferError::encode(path, "Failed to move output into place", e.error))?;
    log::debug!("Wrote {}", path.display());
    Ok(())
}
