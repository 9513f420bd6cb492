//! Validate command implementation

use crate::cli::args::ValidateArgs;
use crate::cli::logging::{log, LogLevel};
use crate::manifest::{load_manifest, TrainManifest};

/// Format trainer wiring as a string
pub fn format_trainer_info(manifest: &TrainManifest) -> String {
    let trainer = &manifest.trainer;
    let epochs = if trainer.max_epochs == -1 {
        "unbounded".to_string()
    } else {
        trainer.max_epochs.to_string()
    };
    let mut lines = vec![
        format!(
            "  Accelerator: {} x{} ({}-bit)",
            trainer.accelerator, trainer.devices, trainer.precision
        ),
        format!("  Epochs: {epochs}"),
        format!("  Gradient accumulation: {}", trainer.accumulate_grad_batches),
    ];
    if !trainer.callbacks.is_empty() {
        lines.push(format!("  Callbacks: {}", trainer.callbacks.len()));
    }
    lines.join("\n")
}

/// Format data wiring as a string
pub fn format_data_info(manifest: &TrainManifest) -> String {
    let data = &manifest.data;
    let mut lines = vec![
        format!(
            "  Subsequence length: {} (2^{})",
            1u64 << data.seq_depth,
            data.seq_depth
        ),
        format!("  Batch size: {}", data.batch_size),
        format!("  Workers: {}", data.num_workers),
    ];
    if let Some(size) = data.val_size {
        lines.push(format!("  Validation holdout: {size} charts"));
    }
    if let Some(split) = data.val_split {
        lines.push(format!("  Validation holdout: {split} of dataset"));
    }
    lines.join("\n")
}

/// Format model wiring as a string
pub fn format_model_info(manifest: &TrainManifest) -> String {
    let model = &manifest.model;
    [
        format!(
            "  Learning rate: {} (plateau factor {})",
            model.learning_rate, model.learning_rate_schedule_factor
        ),
        format!(
            "  Width: h_dim={} ({} groups), dim_mults={:?}",
            model.h_dim, model.h_dim_groups, model.dim_mults
        ),
        format!(
            "  Diffusion: {} timesteps, {} sample steps",
            model.timesteps, model.sample_steps
        ),
        format!("  Loss: {:?}", model.loss_type),
    ]
    .join("\n")
}

/// Print detailed configuration summary
fn print_detailed_summary(manifest: &TrainManifest) {
    println!();
    println!("Configuration Summary:");
    println!("{}", format_trainer_info(manifest));
    println!();
    println!("{}", format_data_info(manifest));
    println!();
    println!("{}", format_model_info(manifest));
}

pub fn run_validate(args: ValidateArgs, level: LogLevel) -> Result<(), String> {
    log(
        level,
        LogLevel::Normal,
        &format!("Validating manifest: {}", args.config.display()),
    );

    // load_manifest validates after parsing
    let manifest = load_manifest(&args.config).map_err(|e| format!("Manifest error: {e}"))?;

    log(level, LogLevel::Normal, "Manifest is valid");

    if args.detailed {
        print_detailed_summary(&manifest);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::templates::{generate_manifest, Template};

    #[test]
    fn test_format_trainer_info() {
        let manifest = generate_manifest(Template::Default);
        let info = format_trainer_info(&manifest);
        assert!(info.contains("gpu"));
        assert!(info.contains("unbounded"));
        assert!(info.contains("Callbacks: 1"));
    }

    #[test]
    fn test_format_trainer_info_bounded_epochs() {
        let manifest = generate_manifest(Template::Smoke);
        let info = format_trainer_info(&manifest);
        assert!(info.contains("Epochs: 1"));
        assert!(!info.contains("Callbacks"));
    }

    #[test]
    fn test_format_data_info() {
        let manifest = generate_manifest(Template::Default);
        let info = format_data_info(&manifest);
        assert!(info.contains("4096"));
        assert!(info.contains("128 charts"));
    }

    #[test]
    fn test_format_data_info_split_mode() {
        let mut manifest = generate_manifest(Template::Default);
        manifest.data.val_size = None;
        manifest.data.val_split = Some(0.1);
        let info = format_data_info(&manifest);
        assert!(info.contains("0.1 of dataset"));
        assert!(!info.contains("charts"));
    }

    #[test]
    fn test_format_model_info() {
        let manifest = generate_manifest(Template::Default);
        let info = format_model_info(&manifest);
        assert!(info.contains("1000 timesteps"));
        assert!(info.contains("Huber"));
    }

    #[test]
    fn test_run_validate_missing_file() {
        let args = ValidateArgs {
            config: std::path::PathBuf::from("/nonexistent/train.yaml"),
            detailed: false,
        };
        assert!(run_validate(args, LogLevel::Quiet).is_err());
    }
}
