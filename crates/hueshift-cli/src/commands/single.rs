use std::path::Path;
use std::time::Instant;

use hueshift_cli::{determine_output_path, write_stats_report, CliError, StatsEntry, TransferSettings};
use hueshift_core::io::{FsImageStore, ImageSink, ImageSource};
use hueshift_core::ColorTransfer;

use super::ensure_out_dir;

/// Recolor one target image
pub fn cmd_single(settings: &TransferSettings, target_path: &Path) -> Result<(), CliError> {
    let start = Instant::now();
    let store = FsImageStore::new(settings.export);

    // Both inputs are decoded before any processing
    let source = store.load(&settings.source_path)?;
    let target = store.load(target_path)?;
    log::info!(
        "Source {} ({}x{}), target {} ({}x{})",
        settings.source_path.display(),
        source.width(),
        source.height(),
        target_path.display(),
        target.width(),
        target.height()
    );

    let output_path = determine_output_path(
        target_path,
        settings.out_dir.as_deref(),
        settings.output_name.as_deref(),
        &settings.output_prefix,
        false,
    )?;
    ensure_out_dir(settings)?;

    let engine = ColorTransfer::from_source(&source, settings.options);
    let (result, report) = engine.apply_with_report(&target)?;
    store.store(&result, &output_path)?;

    println!(
        "{} -> {} ({:.2}s)",
        target_path.display(),
        output_path.display(),
        start.elapsed().as_secs_f64()
    );

    if let Some(stats_path) = &settings.stats_path {
        let entry = StatsEntry {
            target: target_path.to_path_buf(),
            output: output_path,
            report,
        };
        write_stats_report(stats_path, &[entry])?;
    }

    Ok(())
}
