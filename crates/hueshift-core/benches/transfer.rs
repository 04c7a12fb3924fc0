//! Benchmarks for hueshift-core transfer operations
//!
//! Run with: cargo bench -p hueshift-core

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use hueshift_core::color::{to_lab, to_rgb};
use hueshift_core::stats::compute_lab_stats;
use hueshift_core::{ColorTransfer, Rgb8Image, TransferOptions};

/// Generate a synthetic gradient image
fn generate_test_image(width: u32, height: u32, tint: [u8; 3]) -> Rgb8Image {
    Rgb8Image::from_fn(width, height, |x, y| {
        let fx = (x * 255 / width.max(1)) as u8;
        let fy = (y * 255 / height.max(1)) as u8;
        [
            fx / 2 + tint[0] / 2,
            fy / 2 + tint[1] / 2,
            fx / 4 + fy / 4 + tint[2] / 2,
        ]
    })
    .unwrap()
}

/// Benchmark sRGB <-> LAB conversion
fn bench_color_conversion(c: &mut Criterion) {
    let mut group = c.benchmark_group("color_conversion");

    for size in [256, 512, 1024].iter() {
        let (width, height) = (*size, *size);
        group.throughput(Throughput::Elements((width * height) as u64));

        let image = generate_test_image(width, height, [200, 120, 60]);
        group.bench_with_input(
            BenchmarkId::new("to_lab", format!("{}x{}", width, height)),
            &image,
            |b, img| b.iter(|| to_lab(black_box(img))),
        );

        let lab = to_lab(&image);
        group.bench_with_input(
            BenchmarkId::new("to_rgb", format!("{}x{}", width, height)),
            &lab,
            |b, lab| b.iter(|| to_rgb(black_box(lab))),
        );
    }

    group.finish();
}

/// Benchmark statistics gathering
fn bench_stats(c: &mut Criterion) {
    let mut group = c.benchmark_group("stats");

    for size in [512, 1024].iter() {
        let lab = to_lab(&generate_test_image(*size, *size, [40, 90, 200]));
        group.throughput(Throughput::Elements((size * size) as u64));
        group.bench_with_input(
            BenchmarkId::new("compute_lab_stats", format!("{}x{}", size, size)),
            &lab,
            |b, lab| b.iter(|| compute_lab_stats(black_box(lab))),
        );
    }

    group.finish();
}

/// Benchmark the full transfer of a target
fn bench_full_transfer(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_transfer");
    group.sample_size(20);

    let source = generate_test_image(512, 512, [220, 140, 60]);
    let engine = ColorTransfer::from_source(&source, TransferOptions::default());

    for size in [256, 1024].iter() {
        let target = generate_test_image(*size, *size, [30, 80, 210]);
        group.throughput(Throughput::Elements((size * size) as u64));
        group.bench_with_input(
            BenchmarkId::new("apply", format!("{}x{}", size, size)),
            &target,
            |b, target| b.iter(|| engine.apply(black_box(target))),
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_color_conversion,
    bench_stats,
    bench_full_transfer
);
criterion_main!(benches);
