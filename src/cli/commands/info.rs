//! Info command implementation

use crate::cli::args::{InfoArgs, OutputFormat};
use crate::cli::logging::{log, LogLevel};
use crate::manifest::load_manifest;

pub fn run_info(args: InfoArgs, level: LogLevel) -> Result<(), String> {
    let manifest = load_manifest(&args.config).map_err(|e| format!("Manifest error: {e}"))?;

    match args.format {
        OutputFormat::Text => {
            log(level, LogLevel::Normal, "Manifest Info:");
            println!();
            println!(
                "Accelerator: {} x{}",
                manifest.trainer.accelerator, manifest.trainer.devices
            );
            println!("Batch size: {}", manifest.data.batch_size);
            println!(
                "Subsequence length: {}",
                1u64 << manifest.data.seq_depth
            );
            println!(
                "Diffusion: {} timesteps / {} sample steps",
                manifest.model.timesteps, manifest.model.sample_steps
            );
            println!("Loss: {:?}", manifest.model.loss_type);
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&manifest)
                .map_err(|e| format!("JSON serialization error: {e}"))?;
            println!("{json}");
        }
        OutputFormat::Yaml => {
            let yaml = manifest
                .to_yaml()
                .map_err(|e| format!("YAML serialization error: {e}"))?;
            println!("{yaml}");
        }
    }

    Ok(())
}
