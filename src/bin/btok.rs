//! btok: convert a Bitwarden export into a Keeper import file

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use bitwarden_to_keeper::{convert_file, load_config, require_source_json, ConvertError};
use clap::Parser;
use tracing::error;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "btok", version)]
#[command(about = "Convert a Bitwarden / Vaultwarden JSON export into a Keeper JSON import file", long_about = None)]
struct Cli {
    /// Export to convert (skips the directory scan)
    #[arg(long, short)]
    input: Option<PathBuf>,
    /// Directory scanned for the newest export [default: from config]
    #[arg(long, short)]
    source_dir: Option<PathBuf>,
    /// Keeper import file to write [default: from config]
    #[arg(long, short)]
    output: Option<PathBuf>,
}

fn main() -> Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let config = load_config();

    let source_dir = cli
        .source_dir
        .unwrap_or_else(|| config.paths.source_dir.clone());
    let output = cli.output.unwrap_or_else(|| config.paths.output.clone());

    let src = match cli.input {
        Some(input) => input,
        None => match require_source_json(&source_dir) {
            Ok(src) => src,
            Err(err @ ConvertError::NoSource { .. }) => {
                error!("{err}");
                eprintln!(
                    "No Bitwarden export found. Put the unencrypted JSON export in {} and run again.",
                    source_dir.display()
                );
                return Ok(ExitCode::FAILURE);
            }
            Err(err) => return Err(err.into()),
        },
    };

    let count = convert_file(&src, &output)
        .with_context(|| format!("converting {} failed", src.display()))?;

    println!("Converted {} → {}", src.display(), output.display());
    println!("{count} record(s) written. Import this file into Keeper.");
    println!("Attachments are not included and must be imported manually.");

    Ok(ExitCode::SUCCESS)
}
