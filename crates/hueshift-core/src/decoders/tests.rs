//! Tests for image decoders

use super::{decode_image, extension_of, is_supported_extension};
use crate::error::TransferError;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;
use tempfile::tempdir;

/// Write a raw PNG with the given layout using the png crate directly
fn write_png(
    path: &Path,
    width: u32,
    height: u32,
    color: ::png::ColorType,
    depth: ::png::BitDepth,
    data: &[u8],
) {
    let file = File::create(path).unwrap();
    let mut encoder = ::png::Encoder::new(BufWriter::new(file), width, height);
    encoder.set_color(color);
    encoder.set_depth(depth);
    let mut writer = encoder.write_header().unwrap();
    writer.write_image_data(data).unwrap();
    writer.finish().unwrap();
}

#[test]
fn test_decode_missing_file_is_not_found() {
    let result = decode_image("definitely/not/here.png");
    match result {
        Err(TransferError::NotFound { path }) => {
            assert!(path.ends_with("here.png"));
        }
        other => panic!("Expected NotFound, got {:?}", other),
    }
}

#[test]
fn test_decode_unknown_extension() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("notes.txt");
    std::fs::write(&path, b"hello").unwrap();

    let err = decode_image(&path).unwrap_err();
    assert!(matches!(err, TransferError::UnsupportedFormat { ref extension } if extension == "txt"));
    assert!(err.is_input_error());
}

#[test]
fn test_decode_corrupt_png() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("broken.png");
    std::fs::write(&path, b"not a png at all").unwrap();

    let err = decode_image(&path).unwrap_err();
    assert!(matches!(err, TransferError::Decode { .. }), "got {:?}", err);
}

#[test]
fn test_decode_corrupt_jpeg() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("broken.jpg");
    std::fs::write(&path, b"\xFF\xD8garbage").unwrap();

    let err = decode_image(&path).unwrap_err();
    assert!(matches!(err, TransferError::Decode { .. }), "got {:?}", err);
}

#[test]
fn test_decode_rgba_png_drops_alpha() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("rgba.png");
    let data = [255, 0, 0, 10, 0, 255, 0, 255];
    write_png(&path, 2, 1, ::png::ColorType::Rgba, ::png::BitDepth::Eight, &data);

    let image = decode_image(&path).unwrap();
    assert_eq!(image.as_raw(), &[255, 0, 0, 0, 255, 0]);
}

#[test]
fn test_decode_gray16_png() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("gray16.png");
    let data = [0x00, 0x00, 0xFF, 0xFF];
    write_png(&path, 2, 1, ::png::ColorType::Grayscale, ::png::BitDepth::Sixteen, &data);

    let image = decode_image(&path).unwrap();
    assert_eq!(image.as_raw(), &[0, 0, 0, 255, 255, 255]);
}

#[test]
fn test_decode_gray8_png() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("gray.PNG");
    write_png(&path, 3, 1, ::png::ColorType::Grayscale, ::png::BitDepth::Eight, &[0, 128, 255]);

    let image = decode_image(&path).unwrap();
    assert_eq!(image.width(), 3);
    assert_eq!(image.pixel(1, 0), Some([128, 128, 128]));
}

#[test]
fn test_supported_extensions() {
    assert!(is_supported_extension("png"));
    assert!(is_supported_extension("JPEG"));
    assert!(is_supported_extension("jpg"));
    assert!(!is_supported_extension("tif"));
    assert_eq!(extension_of(Path::new("a/b/photo.JpG")), Some("jpg".to_string()));
    assert_eq!(extension_of(Path::new("noext")), None);
}
