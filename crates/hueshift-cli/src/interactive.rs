//! Interactive fallback for arguments missing from the command line.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use crate::error::CliError;
use crate::types::{InputRequest, TargetSpec};

/// Ask for whatever `request` lacks: source path, target mode, target path,
/// and (when anything was asked) an optional output name.
pub fn prompt_missing<R: BufRead, W: Write>(
    mut request: InputRequest,
    input: &mut R,
    output: &mut W,
) -> Result<InputRequest, CliError> {
    if request.is_complete() {
        return Ok(request);
    }

    if request.source.is_none() {
        let path = ask(input, output, "Path to the source image: ")?;
        request.source = Some(require_path(path, "source image")?);
    }

    if request.target.is_none() {
        writeln!(output, "Recolor:").map_err(write_failed)?;
        writeln!(output, "  1) a single image").map_err(write_failed)?;
        writeln!(output, "  2) every image in a directory").map_err(write_failed)?;
        let choice = ask(input, output, "Choice [1/2]: ")?;

        request.target = Some(match choice.as_str() {
            "1" => {
                let path = ask(input, output, "Path to the target image: ")?;
                TargetSpec::Image(require_path(path, "target image")?)
            }
            "2" => {
                let path = ask(input, output, "Path to the target directory: ")?;
                TargetSpec::Directory(require_path(path, "target directory")?)
            }
            _ => return Err(CliError::InvalidChoice(choice)),
        });
    }

    if request.output_name.is_none() {
        let name = ask(
            input,
            output,
            "Output name (leave empty for the default name): ",
        )?;
        request.output_name = (!name.is_empty()).then_some(name);
    }

    Ok(request)
}

/// Print `prompt` and read one trimmed line
fn ask<R: BufRead, W: Write>(input: &mut R, output: &mut W, prompt: &str) -> Result<String, CliError> {
    write!(output, "{}", prompt).map_err(write_failed)?;
    output.flush().map_err(write_failed)?;

    let mut line = String::new();
    let read = input
        .read_line(&mut line)
        .map_err(|e| CliError::io("Failed to read from stdin", e))?;
    if read == 0 {
        return Err(CliError::usage("Input closed before all arguments were given"));
    }
    Ok(line.trim().to_string())
}

fn require_path(value: String, what: &str) -> Result<PathBuf, CliError> {
    if value.is_empty() {
        Err(CliError::usage(format!("No {} path given", what)))
    } else {
        Ok(PathBuf::from(value))
    }
}

fn write_failed(e: std::io::Error) -> CliError {
    CliError::io("Failed to write prompt", e)
}
