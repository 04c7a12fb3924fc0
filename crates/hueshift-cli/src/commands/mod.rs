//! Command implementations for the hueshift CLI.

mod batch;
mod single;

pub use batch::cmd_batch;
pub use single::cmd_single;

use hueshift_cli::{CliError, TransferSettings};

/// Create `--out` when it does not exist yet
fn ensure_out_dir(settings: &TransferSettings) -> Result<(), CliError> {
    if let Some(dir) = &settings.out_dir {
        if !dir.exists() {
            std::fs::create_dir_all(dir).map_err(|e| {
                CliError::io(format!("Failed to create output directory {}", dir.display()), e)
            })?;
        }
    }
    Ok(())
}
