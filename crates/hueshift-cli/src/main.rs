use std::io::IsTerminal;
use std::path::PathBuf;

use clap::Parser;
use hueshift_cli::{
    prompt_missing, CliError, InputRequest, SettingsOverrides, TargetSpec, TransferSettings,
};
use hueshift_core::config::{load_config, log_config_usage};
use hueshift_core::FlatChannelPolicy;
use tracing_subscriber::EnvFilter;

mod commands;

use commands::{cmd_batch, cmd_single};

#[derive(Parser, Debug)]
#[command(name = "hueshift")]
#[command(version, about = "Transfer the color palette of one image onto others", long_about = None)]
struct Cli {
    /// Image whose colors are transferred
    #[arg(long = "source_image", value_name = "PATH")]
    source_image: Option<PathBuf>,

    /// Single image to recolor
    #[arg(long = "target_image", value_name = "PATH", conflicts_with = "target_file")]
    target_image: Option<PathBuf>,

    /// Directory whose images are all recolored
    #[arg(long = "target_file", value_name = "DIR")]
    target_file: Option<PathBuf>,

    /// Custom output name (written as <name>.png)
    #[arg(short = 'n', long = "output_name", value_name = "NAME")]
    output_name: Option<String>,

    /// Output directory (default: next to each target)
    #[arg(short, long, value_name = "DIR")]
    out: Option<PathBuf>,

    /// Number of parallel threads for directory targets
    #[arg(short = 'j', long, value_name = "N")]
    threads: Option<usize>,

    /// Zero-variance target channel handling: "unit-scale" or "error"
    #[arg(long = "flat-channel", value_name = "POLICY")]
    flat_channel: Option<FlatChannelPolicy>,

    /// YAML file with default settings
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Write per-image LAB statistics as JSON
    #[arg(long, value_name = "FILE")]
    stats: Option<PathBuf>,

    /// Never prompt for missing arguments
    #[arg(long)]
    no_interactive: bool,

    /// Debug-level logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        // --help and --version
        Err(e) if !e.use_stderr() => e.exit(),
        Err(e) => {
            let _ = e.print();
            std::process::exit(1);
        }
    };

    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// RUST_LOG wins; otherwise info, or debug with --verbose
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    // note this only succeeds if there is no global subscriber set yet
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

fn run(cli: Cli) -> Result<(), CliError> {
    let Cli {
        source_image,
        target_image,
        target_file,
        output_name,
        out,
        threads,
        flat_channel,
        config,
        stats,
        no_interactive,
        verbose: _,
    } = cli;

    if let Some(path) = &config {
        if !path.is_file() {
            return Err(CliError::Config(format!(
                "Config file not found: {}",
                path.display()
            )));
        }
    }
    let handle = load_config(config.as_deref());
    log_config_usage(&handle);

    let request = InputRequest {
        source: source_image,
        target: target_image
            .map(TargetSpec::Image)
            .or(target_file.map(TargetSpec::Directory)),
        output_name,
    };

    let request = if !request.is_complete() && !no_interactive && std::io::stdin().is_terminal() {
        let stdin = std::io::stdin();
        prompt_missing(request, &mut stdin.lock(), &mut std::io::stdout())?
    } else {
        request
    };

    let overrides = SettingsOverrides {
        out_dir: out,
        threads,
        flat_channel,
        stats_path: stats,
    };
    let settings = TransferSettings::build(request, overrides, &handle.config.defaults)?;
    log::debug!("Resolved settings: {:?}", settings);

    match &settings.target {
        TargetSpec::Image(path) => cmd_single(&settings, path),
        TargetSpec::Directory(dir) => cmd_batch(&settings, dir),
    }
}
