//! Sonador CLI
//!
//! Manifest tooling for beatmap diffusion training runs.
//!
//! # Usage
//!
//! ```bash
//! # Write a starter manifest
//! sonador init train.yaml
//!
//! # Write a down-scaled manifest for pipeline dry-runs
//! sonador init smoke.yaml --template smoke
//!
//! # Validate a manifest
//! sonador validate train.yaml
//!
//! # Show the resolved document
//! sonador info train.yaml --format yaml
//! ```

use clap::Parser;
use sonador::cli::{run_command, Cli};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run_command(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
