use rayon::prelude::*;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Instant;

use hueshift_cli::{
    expand_target_dir, output_skip_prefixes, plan_batch_outputs, write_stats_report, CliError,
    StatsEntry, TransferSettings,
};
use hueshift_core::io::{FsImageStore, ImageSink, ImageSource};
use hueshift_core::ColorTransfer;

use super::ensure_out_dir;

/// Recolor every supported image in `target_dir`
pub fn cmd_batch(settings: &TransferSettings, target_dir: &Path) -> Result<(), CliError> {
    let batch_start = Instant::now();

    let inputs = expand_target_dir(
        target_dir,
        &settings.source_path,
        &output_skip_prefixes(&settings.output_prefix, settings.output_name.as_deref()),
        &settings.batch_extensions,
    )?;
    if inputs.is_empty() {
        return Err(CliError::NoImagesFound {
            dir: target_dir.to_path_buf(),
        });
    }
    let plan = plan_batch_outputs(
        &inputs,
        settings.out_dir.as_deref(),
        settings.output_name.as_deref(),
        &settings.output_prefix,
    )?;
    println!("Found {} image files to process", inputs.len());

    let store = FsImageStore::new(settings.export);
    let source = store.load(&settings.source_path)?;
    let engine = ColorTransfer::from_source(&source, settings.options);
    log::debug!("Source statistics: {:?}", engine.source_stats());

    ensure_out_dir(settings)?;

    // Dedicated pool so --threads does not touch the global one
    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(num_threads) = settings.threads {
        builder = builder.num_threads(num_threads);
        println!("Using {} threads for parallel processing", num_threads);
    }
    let pool = builder
        .build()
        .map_err(|e| CliError::usage(format!("Failed to configure thread pool: {}", e)))?;

    println!("\nProcessing {} files in parallel...\n", inputs.len());

    // Progress tracking
    let processed_count = AtomicUsize::new(0);
    let total_files = inputs.len();

    let results: Vec<Result<StatsEntry, CliError>> = pool.install(|| {
        plan.par_iter()
            .map(|(input, output_path)| {
                let file_start = Instant::now();
                let target = store.load(input)?;

                let (result, report) = engine.apply_with_report(&target)?;
                store.store(&result, output_path)?;

                let count = processed_count.fetch_add(1, Ordering::SeqCst) + 1;
                println!(
                    "[{}/{}] {} -> {} ({:.2}s)",
                    count,
                    total_files,
                    input.display(),
                    output_path.display(),
                    file_start.elapsed().as_secs_f64()
                );

                Ok(StatsEntry {
                    target: input.clone(),
                    output: output_path.clone(),
                    report,
                })
            })
            .collect()
    });

    // Summarize results
    let mut entries = Vec::new();
    let mut errors: Vec<(PathBuf, CliError)> = Vec::new();
    for (input, result) in inputs.iter().zip(results) {
        match result {
            Ok(entry) => entries.push(entry),
            Err(e) => errors.push((input.clone(), e)),
        }
    }

    let batch_elapsed = batch_start.elapsed();
    let output_dir = settings
        .out_dir
        .clone()
        .unwrap_or_else(|| target_dir.to_path_buf());

    println!("\n========================================");
    println!("BATCH TRANSFER COMPLETE");
    println!("========================================");
    println!("  Successful: {}", entries.len());
    println!("  Failed:     {}", errors.len());
    println!("  Output dir: {}", output_dir.display());
    println!("  Total time: {:.2}s", batch_elapsed.as_secs_f64());
    if !entries.is_empty() {
        println!(
            "  Avg time:   {:.2}s per file",
            batch_elapsed.as_secs_f64() / entries.len() as f64
        );
    }

    if !errors.is_empty() {
        println!("\nErrors:");
        for (path, error) in &errors {
            println!("  {}: {}", path.display(), error);
        }
    }

    if let Some(stats_path) = &settings.stats_path {
        write_stats_report(stats_path, &entries)?;
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(CliError::BatchFailed {
            failed: errors.len(),
            total: total_files,
        })
    }
}
