//! Input file handling and path utilities.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::error::CliError;

/// Determine the output path for one target
///
/// * custom name, single mode: `<dir>/<name>.png`
/// * custom name, batch mode: `<dir>/<name>_<target_stem>.png`
/// * otherwise: `<dir>/<prefix><target_filename>`
///
/// `<dir>` is `out_dir` when given, else the target's own directory.
pub fn determine_output_path(
    target: &Path,
    out_dir: Option<&Path>,
    output_name: Option<&str>,
    prefix: &str,
    batch: bool,
) -> Result<PathBuf, CliError> {
    let dir = match out_dir {
        Some(dir) => dir,
        None => match target.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        },
    };

    let filename = match output_name {
        Some(name) => {
            let name = strip_png_extension(name);
            if batch {
                let stem = target
                    .file_stem()
                    .ok_or_else(|| invalid_target(target))?
                    .to_string_lossy();
                format!("{}_{}.png", name, stem)
            } else {
                format!("{}.png", name)
            }
        }
        None => {
            let original = target
                .file_name()
                .ok_or_else(|| invalid_target(target))?
                .to_string_lossy();
            format!("{}{}", prefix, original)
        }
    };

    Ok(dir.join(filename))
}

fn strip_png_extension(name: &str) -> &str {
    match name.len().checked_sub(4) {
        Some(cut) if name.is_char_boundary(cut) && name[cut..].eq_ignore_ascii_case(".png") => {
            &name[..cut]
        }
        _ => name,
    }
}

/// Filename prefixes that mark earlier outputs in a target directory
///
/// Always the default prefix; with a custom name also `<name>_`, the batch
/// form of custom-named outputs.
pub fn output_skip_prefixes(prefix: &str, output_name: Option<&str>) -> Vec<String> {
    let mut prefixes = vec![prefix.to_string()];
    if let Some(name) = output_name {
        prefixes.push(format!("{}_", strip_png_extension(name)));
    }
    prefixes.retain(|p| !p.is_empty());
    prefixes
}

/// Pair every batch input with its output path
///
/// Fails before anything is written when two inputs map to the same output
/// (`a.jpg` and `a.png` under a custom name) or an output would replace an
/// input.
pub fn plan_batch_outputs(
    inputs: &[PathBuf],
    out_dir: Option<&Path>,
    output_name: Option<&str>,
    prefix: &str,
) -> Result<Vec<(PathBuf, PathBuf)>, CliError> {
    let mut claimed: HashMap<PathBuf, &Path> = HashMap::new();
    let mut plan = Vec::with_capacity(inputs.len());

    for input in inputs {
        let output = determine_output_path(input, out_dir, output_name, prefix, true)?;
        if let Some(other) = claimed.get(&output) {
            return Err(CliError::usage(format!(
                "{} and {} would both be written to {}; rename one of them or change --output_name",
                other.display(),
                input.display(),
                output.display()
            )));
        }
        if inputs.contains(&output) {
            return Err(CliError::usage(format!(
                "Output {} for {} would overwrite an input image",
                output.display(),
                input.display()
            )));
        }
        claimed.insert(output.clone(), input);
        plan.push((input.clone(), output));
    }

    Ok(plan)
}

fn invalid_target(target: &Path) -> CliError {
    CliError::usage(format!("Invalid target filename: {}", target.display()))
}

/// Collect the images of a target directory, sorted by path.
///
/// Only the top level is scanned. Files whose name starts with one of
/// `skip_prefixes` (earlier outputs) and the source image itself are skipped.
pub fn expand_target_dir(
    dir: &Path,
    source: &Path,
    skip_prefixes: &[String],
    extensions: &[String],
) -> Result<Vec<PathBuf>, CliError> {
    if !dir.is_dir() {
        return Err(CliError::usage(format!(
            "Target directory not found: {}",
            dir.display()
        )));
    }

    let source_canonical = std::fs::canonicalize(source).ok();
    let entries = std::fs::read_dir(dir)
        .map_err(|e| CliError::io(format!("Failed to read directory {}", dir.display()), e))?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| CliError::io("Error reading directory entry", e))?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }

        let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
            continue;
        };
        if !extensions.iter().any(|x| x.eq_ignore_ascii_case(ext)) {
            continue;
        }

        let name = entry.file_name();
        let name = name.to_string_lossy();
        if skip_prefixes.iter().any(|p| name.starts_with(p.as_str())) {
            log::debug!("Skipping earlier output {}", path.display());
            continue;
        }

        let is_source = match (&source_canonical, std::fs::canonicalize(&path)) {
            (Some(src), Ok(candidate)) => *src == candidate,
            _ => path == source,
        };
        if is_source {
            log::debug!("Skipping source image {}", path.display());
            continue;
        }

        files.push(path);
    }

    // Sort for consistent ordering
    files.sort();
    Ok(files)
}
