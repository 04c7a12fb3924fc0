//! PNG image decoder

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::error::{Result, TransferError};
use crate::models::Rgb8Image;

/// Decode a PNG file
pub(crate) fn decode_png(path: &Path) -> Result<Rgb8Image> {
    let file = File::open(path)?;
    let mut decoder = png::Decoder::new(BufReader::new(file));
    // Palette and sub-byte images arrive as 8-bit gray/RGB(A)
    decoder.set_transformations(png::Transformations::EXPAND);

    let mut reader = decoder
        .read_info()
        .map_err(|e| TransferError::decode(path, "Failed to read PNG info", e))?;

    let buffer_size = reader
        .output_buffer_size()
        .ok_or_else(|| TransferError::decode_msg(path, "Failed to determine PNG buffer size"))?;
    let mut buf = vec![0u8; buffer_size];
    let frame_info = reader
        .next_frame(&mut buf)
        .map_err(|e| TransferError::decode(path, "Failed to read PNG frame", e))?;

    let bytes = &buf[..frame_info.buffer_size()];
    let width = frame_info.width;
    let height = frame_info.height;

    let data = match (frame_info.color_type, frame_info.bit_depth) {
        (png::ColorType::Grayscale, png::BitDepth::Eight) => expand_gray(bytes, 1),
        (png::ColorType::Grayscale, png::BitDepth::Sixteen) => expand_gray(&to_8bit(bytes), 1),
        (png::ColorType::GrayscaleAlpha, png::BitDepth::Eight) => expand_gray(bytes, 2),
        (png::ColorType::GrayscaleAlpha, png::BitDepth::Sixteen) => {
            expand_gray(&to_8bit(bytes), 2)
        }
        (png::ColorType::Rgb, png::BitDepth::Eight) => bytes.to_vec(),
        (png::ColorType::Rgb, png::BitDepth::Sixteen) => to_8bit(bytes),
        (png::ColorType::Rgba, png::BitDepth::Eight) => drop_alpha(bytes),
        (png::ColorType::Rgba, png::BitDepth::Sixteen) => drop_alpha(&to_8bit(bytes)),
        (color_type, bit_depth) => {
            return Err(TransferError::decode_msg(
                path,
                format!(
                    "Unsupported PNG format: {:?} with bit depth {:?}",
                    color_type, bit_depth
                ),
            ));
        }
    };

    Rgb8Image::new(width, height, data).map_err(|e| TransferError::decode(path, "Corrupt PNG", e))
}

/// Big-endian 16-bit samples to 8-bit, rounding to nearest
fn to_8bit(bytes: &[u8]) -> Vec<u8> {
    bytes
        .chunks_exact(2)
        .map(|c| {
            let v = u16::from_be_bytes([c[0], c[1]]) as u32;
            ((v * 255 + 32767) / 65535) as u8
        })
        .collect()
}

/// Gray (optionally with alpha, `stride` = 2) to RGB
fn expand_gray(bytes: &[u8], stride: usize) -> Vec<u8> {
    let mut rgb = Vec::with_capacity(bytes.len() / stride * 3);
    for px in bytes.chunks_exact(stride) {
        rgb.extend_from_slice(&[px[0], px[0], px[0]]);
    }
    rgb
}

fn drop_alpha(bytes: &[u8]) -> Vec<u8> {
    let mut rgb = Vec::with_capacity(bytes.len() / 4 * 3);
    for px in bytes.chunks_exact(4) {
        rgb.extend_from_slice(&px[..3]);
    }
    rgb
}
