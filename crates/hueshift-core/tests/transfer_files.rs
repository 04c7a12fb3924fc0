//! End-to-end transfer through files on disk

use std::path::Path;

use hueshift_core::decoders::decode_image;
use hueshift_core::exporters::{export_image, ExportOptions};
use hueshift_core::io::{FsImageStore, ImageSink, ImageSource};
use hueshift_core::stats::compute_lab_stats;
use hueshift_core::color::to_lab;
use hueshift_core::{transfer, ColorTransfer, Rgb8Image, TransferError, TransferOptions};
use tempfile::tempdir;

fn sunset(width: u32, height: u32) -> Rgb8Image {
    Rgb8Image::from_fn(width, height, |x, y| {
        [
            200 + (x % 40) as u8,
            90 + (y % 50) as u8,
            30 + ((x + y) % 30) as u8,
        ]
    })
    .unwrap()
}

fn ocean(width: u32, height: u32) -> Rgb8Image {
    Rgb8Image::from_fn(width, height, |x, y| {
        [
            20 + (y % 30) as u8,
            80 + (x % 60) as u8,
            150 + ((x * y) % 90) as u8,
        ]
    })
    .unwrap()
}

fn write(path: &Path, image: &Rgb8Image) {
    export_image(image, path, &ExportOptions::default()).unwrap();
}

#[test]
fn test_png_to_png_transfer() {
    let dir = tempdir().unwrap();
    let source_path = dir.path().join("sunset.png");
    let target_path = dir.path().join("ocean.png");
    let output_path = dir.path().join("filtered_ocean.png");
    write(&source_path, &sunset(48, 32));
    write(&target_path, &ocean(40, 24));

    let source = decode_image(&source_path).unwrap();
    let target = decode_image(&target_path).unwrap();
    let result = transfer(&source, &target, &TransferOptions::default()).unwrap();
    write(&output_path, &result);

    let written = decode_image(&output_path).unwrap();
    assert_eq!(written.width(), 40);
    assert_eq!(written.height(), 24);
    assert_eq!(written, result);

    let source_stats = compute_lab_stats(&to_lab(&source));
    let output_stats = compute_lab_stats(&to_lab(&written));
    for (got, want) in [
        (output_stats.l.mean, source_stats.l.mean),
        (output_stats.a.mean, source_stats.a.mean),
        (output_stats.b.mean, source_stats.b.mean),
    ] {
        assert!((got - want).abs() < 4.0, "mean {} vs {}", got, want);
    }
}

#[test]
fn test_jpeg_inputs_are_accepted() {
    let dir = tempdir().unwrap();
    let source_path = dir.path().join("sunset.jpg");
    let target_path = dir.path().join("ocean.jpeg");
    write(&source_path, &sunset(32, 32));
    write(&target_path, &ocean(32, 32));

    let store = FsImageStore::default();
    let engine = ColorTransfer::from_source(
        &store.load(&source_path).unwrap(),
        TransferOptions::default(),
    );
    let result = engine.apply(&store.load(&target_path).unwrap()).unwrap();

    let output_path = dir.path().join("out.png");
    store.store(&result, &output_path).unwrap();
    assert!(output_path.is_file());
}

#[test]
fn test_missing_source_fails_before_processing() {
    let dir = tempdir().unwrap();
    let target_path = dir.path().join("ocean.png");
    write(&target_path, &ocean(8, 8));

    let err = decode_image(dir.path().join("absent.png")).unwrap_err();
    assert!(matches!(err, TransferError::NotFound { .. }));
    assert!(err.is_input_error());
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);
}

#[test]
fn test_report_tracks_statistics() {
    let source = sunset(30, 30);
    let target = ocean(30, 30);
    let engine = ColorTransfer::from_source(&source, TransferOptions::default());

    let (image, report) = engine.apply_with_report(&target).unwrap();
    assert_eq!(image.width(), 30);
    assert_eq!(&report.source, engine.source_stats());
    assert!((report.target_after.l.mean - report.source.l.mean).abs() < 1.0);
    assert!(
        (report.target_before.b.mean - report.source.b.mean).abs()
            > (report.target_after.b.mean - report.source.b.mean).abs()
    );
}
