//! Template Generation
//!
//! Starter manifests for new training runs. `Default` is the canonical
//! document a full run boots from; `Smoke` is scaled down far enough to
//! exercise the whole pipeline on a laptop CPU in minutes.

use crate::manifest::{
    CallbackConfig, DataConfig, LoggingInterval, LossType, ModelConfig, TrainManifest,
    TrainerConfig,
};

/// Template type for initialization
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Template {
    /// Canonical full-run manifest
    Default,
    /// Down-scaled manifest for pipeline dry-runs
    Smoke,
}

/// Generate a training manifest from a template
pub fn generate_manifest(template: Template) -> TrainManifest {
    match template {
        Template::Default => generate_default(),
        Template::Smoke => generate_smoke(),
    }
}

/// Generate YAML text from a template
pub fn generate_yaml(template: Template) -> String {
    let manifest = generate_manifest(template);
    manifest
        .to_yaml()
        .unwrap_or_else(|_err| "# Error generating YAML".to_string())
}

fn generate_default() -> TrainManifest {
    TrainManifest {
        trainer: TrainerConfig {
            accelerator: "gpu".to_string(),
            devices: 1,
            max_epochs: -1,
            accumulate_grad_batches: 2,
            precision: 16,
            logger: true,
            enable_checkpointing: true,
            enable_progress_bar: true,
            enable_model_summary: true,
            log_every_n_steps: 50,
            callbacks: vec![CallbackConfig::lr_monitor(LoggingInterval::Step)],
        },
        data: DataConfig {
            seq_depth: 12,
            sample_density: 1.0,
            subseq_density: 2.0,
            batch_size: 16,
            num_workers: 4,
            val_size: Some(128),
            val_split: None,
        },
        model: ModelConfig {
            learning_rate: 1e-4,
            learning_rate_schedule_factor: 0.5,
            h_dim: 128,
            h_dim_groups: 8,
            dim_mults: vec![1, 2, 4, 8],
            convnext_mult: 2,
            wave_stack_depth: 4,
            wave_num_stacks: 2,
            timesteps: 1000,
            sample_steps: 128,
            loss_type: LossType::Huber,
            timing_dropout: 0.25,
        },
    }
}

fn generate_smoke() -> TrainManifest {
    TrainManifest {
        trainer: TrainerConfig {
            accelerator: "cpu".to_string(),
            devices: 1,
            max_epochs: 1,
            accumulate_grad_batches: 1,
            precision: 32,
            logger: false,
            enable_checkpointing: false,
            enable_progress_bar: true,
            enable_model_summary: false,
            log_every_n_steps: 1,
            callbacks: Vec::new(),
        },
        data: DataConfig {
            seq_depth: 8,
            sample_density: 0.1,
            subseq_density: 1.0,
            batch_size: 2,
            num_workers: 0,
            val_size: Some(1),
            val_split: None,
        },
        model: ModelConfig {
            learning_rate: 1e-3,
            learning_rate_schedule_factor: 0.5,
            h_dim: 16,
            h_dim_groups: 4,
            dim_mults: vec![1, 2],
            convnext_mult: 1,
            wave_stack_depth: 1,
            wave_num_stacks: 1,
            timesteps: 16,
            sample_steps: 4,
            loss_type: LossType::Huber,
            timing_dropout: 0.0,
        },
    }
}
