//! Manifest Validation
//!
//! Range, allow-list, and cross-field checks applied after parsing and before
//! a manifest is handed to the trainer. Catching a bad hyperparameter here
//! costs nothing; catching it three epochs in costs a GPU-day.

use thiserror::Error;

use crate::manifest::{
    CallbackConfig, CallbackType, DataConfig, ModelConfig, TrainManifest, TrainerConfig,
};

/// Validation result type
pub type ValidationResult<T> = Result<T, ManifestError>;

/// Manifest validation errors
#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("Unknown accelerator '{0}'. Valid options: cpu, gpu, tpu, mps, auto")]
    InvalidAccelerator(String),

    #[error("Invalid precision: {bits} bits. Valid values: 16, 32, 64")]
    InvalidPrecisionBits { bits: u32 },

    #[error("Invalid range for {field}: {value} (expected {constraint})")]
    InvalidRange {
        field: String,
        value: String,
        constraint: String,
    },

    #[error("Mutually exclusive fields specified: {field1} and {field2}")]
    MutuallyExclusive {
        field1: &'static str,
        field2: &'static str,
    },

    #[error("Validation holdout unspecified: set one of data.val_size or data.val_split")]
    MissingValidationSizing,

    #[error("model.h_dim ({h_dim}) is not divisible by model.h_dim_groups ({h_dim_groups})")]
    IndivisibleWidth { h_dim: u32, h_dim_groups: u32 },

    #[error("model.dim_mults must not be empty")]
    EmptyDimMults,

    #[error(
        "data.seq_depth ({seq_depth}) is shallower than the network's {stages} resolution stages"
    )]
    SequenceTooShallow { seq_depth: u32, stages: usize },

    #[error("Invalid callback at index {index}: {reason}")]
    InvalidCallback { index: usize, reason: String },
}

/// Valid accelerator selectors
const VALID_ACCELERATORS: &[&str] = &["cpu", "gpu", "tpu", "mps", "auto"];

/// Valid numeric precision bit widths
const VALID_PRECISION_BITS: &[u32] = &[16, 32, 64];

/// Largest supported log2 subsequence length (2^32 frames is already far
/// beyond any chart)
const MAX_SEQ_DEPTH: u32 = 32;

/// Validate a training manifest
///
/// Performs:
/// 1. Trainer checks: accelerator allow-list, precision bits, loop budget
/// 2. Data checks: density ranges, holdout sizing exclusivity
/// 3. Model checks: optimizer and shape ranges, schedule consistency
/// 4. Cross-section checks: subsequence length vs. network depth
pub fn validate_manifest(manifest: &TrainManifest) -> ValidationResult<()> {
    validate_trainer(&manifest.trainer)?;
    validate_data(&manifest.data)?;
    validate_model(&manifest.model)?;
    validate_cross_section(&manifest.data, &manifest.model)?;
    Ok(())
}

// ---------------------------------------------------------------------------
// Shared range-check helpers (reduce nesting in callers)
// ---------------------------------------------------------------------------

/// Validate that an integer is non-zero (>= 1)
fn validate_nonzero_u32(value: u32, field: &str) -> ValidationResult<()> {
    if value == 0 {
        return Err(ManifestError::InvalidRange {
            field: field.to_string(),
            value: value.to_string(),
            constraint: ">= 1".to_string(),
        });
    }
    Ok(())
}

/// Validate that a float is strictly positive
fn validate_positive_f64(value: f64, field: &str) -> ValidationResult<()> {
    if !(value > 0.0) {
        return Err(ManifestError::InvalidRange {
            field: field.to_string(),
            value: value.to_string(),
            constraint: "> 0".to_string(),
        });
    }
    Ok(())
}

/// Validate that a float lies in the closed unit interval [0, 1]
fn validate_unit_range(value: f64, field: &str) -> ValidationResult<()> {
    if !(0.0..=1.0).contains(&value) {
        return Err(ManifestError::InvalidRange {
            field: field.to_string(),
            value: value.to_string(),
            constraint: "in [0, 1]".to_string(),
        });
    }
    Ok(())
}

/// Validate that a float lies in the open unit interval (0, 1)
fn validate_open_unit_range(value: f64, field: &str) -> ValidationResult<()> {
    if !(value > 0.0 && value < 1.0) {
        return Err(ManifestError::InvalidRange {
            field: field.to_string(),
            value: value.to_string(),
            constraint: "in (0, 1)".to_string(),
        });
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Trainer validation
// ---------------------------------------------------------------------------

/// Validate trainer configuration
fn validate_trainer(trainer: &TrainerConfig) -> ValidationResult<()> {
    validate_accelerator(&trainer.accelerator)?;
    validate_precision(trainer.precision)?;
    validate_nonzero_u32(trainer.devices, "trainer.devices")?;
    validate_max_epochs(trainer.max_epochs)?;
    validate_nonzero_u32(
        trainer.accumulate_grad_batches,
        "trainer.accumulate_grad_batches",
    )?;
    validate_nonzero_u32(trainer.log_every_n_steps, "trainer.log_every_n_steps")?;
    validate_callbacks(&trainer.callbacks)?;
    Ok(())
}

/// Validate accelerator selector against the allow-list
fn validate_accelerator(accelerator: &str) -> ValidationResult<()> {
    let lower = accelerator.to_lowercase();
    if !VALID_ACCELERATORS.contains(&lower.as_str()) {
        return Err(ManifestError::InvalidAccelerator(accelerator.to_string()));
    }
    Ok(())
}

/// Validate numeric precision bit width
fn validate_precision(bits: u32) -> ValidationResult<()> {
    if !VALID_PRECISION_BITS.contains(&bits) {
        return Err(ManifestError::InvalidPrecisionBits { bits });
    }
    Ok(())
}

/// Validate the epoch budget: -1 (unbounded) or a positive count
fn validate_max_epochs(max_epochs: i64) -> ValidationResult<()> {
    if max_epochs == -1 || max_epochs >= 1 {
        return Ok(());
    }
    Err(ManifestError::InvalidRange {
        field: "trainer.max_epochs".to_string(),
        value: max_epochs.to_string(),
        constraint: "-1 or >= 1".to_string(),
    })
}

/// Validate callback entries
fn validate_callbacks(callbacks: &[CallbackConfig]) -> ValidationResult<()> {
    for (index, cb) in callbacks.iter().enumerate() {
        if cb.logging_interval.is_some() && cb.callback_type != CallbackType::LrMonitor {
            return Err(ManifestError::InvalidCallback {
                index,
                reason: "logging_interval only applies to lr_monitor".to_string(),
            });
        }
        if cb.callback_type == CallbackType::Custom && cb.config.is_none() {
            return Err(ManifestError::InvalidCallback {
                index,
                reason: "custom callbacks require a config map".to_string(),
            });
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Data validation
// ---------------------------------------------------------------------------

/// Validate data configuration
fn validate_data(data: &DataConfig) -> ValidationResult<()> {
    if data.seq_depth > MAX_SEQ_DEPTH {
        return Err(ManifestError::InvalidRange {
            field: "data.seq_depth".to_string(),
            value: data.seq_depth.to_string(),
            constraint: format!("<= {MAX_SEQ_DEPTH}"),
        });
    }
    validate_unit_range(data.sample_density, "data.sample_density")?;
    validate_positive_f64(data.subseq_density, "data.subseq_density")?;
    validate_nonzero_u32(data.batch_size, "data.batch_size")?;
    validate_holdout_sizing(data)?;
    Ok(())
}

/// Validate the holdout sizing mode: exactly one of val_size / val_split
fn validate_holdout_sizing(data: &DataConfig) -> ValidationResult<()> {
    match (data.val_size, data.val_split) {
        (Some(_), Some(_)) => Err(ManifestError::MutuallyExclusive {
            field1: "data.val_size",
            field2: "data.val_split",
        }),
        (None, None) => Err(ManifestError::MissingValidationSizing),
        (Some(size), None) => {
            if size == 0 {
                return Err(ManifestError::InvalidRange {
                    field: "data.val_size".to_string(),
                    value: "0".to_string(),
                    constraint: ">= 1".to_string(),
                });
            }
            Ok(())
        }
        (None, Some(split)) => validate_open_unit_range(split, "data.val_split"),
    }
}

// ---------------------------------------------------------------------------
// Model validation
// ---------------------------------------------------------------------------

/// Validate model configuration
fn validate_model(model: &ModelConfig) -> ValidationResult<()> {
    validate_positive_f64(model.learning_rate, "model.learning_rate")?;
    validate_open_unit_range(
        model.learning_rate_schedule_factor,
        "model.learning_rate_schedule_factor",
    )?;
    validate_widths(model)?;
    validate_dim_mults(&model.dim_mults)?;
    validate_nonzero_u32(model.convnext_mult, "model.convnext_mult")?;
    validate_nonzero_u32(model.wave_stack_depth, "model.wave_stack_depth")?;
    validate_nonzero_u32(model.wave_num_stacks, "model.wave_num_stacks")?;
    validate_schedule(model)?;
    validate_unit_range(model.timing_dropout, "model.timing_dropout")?;
    Ok(())
}

/// Validate hidden width and its group structure
fn validate_widths(model: &ModelConfig) -> ValidationResult<()> {
    validate_nonzero_u32(model.h_dim, "model.h_dim")?;
    validate_nonzero_u32(model.h_dim_groups, "model.h_dim_groups")?;
    if model.h_dim % model.h_dim_groups != 0 {
        return Err(ManifestError::IndivisibleWidth {
            h_dim: model.h_dim,
            h_dim_groups: model.h_dim_groups,
        });
    }
    Ok(())
}

/// Validate the per-stage width multipliers
fn validate_dim_mults(dim_mults: &[u32]) -> ValidationResult<()> {
    if dim_mults.is_empty() {
        return Err(ManifestError::EmptyDimMults);
    }
    for (i, mult) in dim_mults.iter().enumerate() {
        validate_nonzero_u32(*mult, &format!("model.dim_mults[{i}]"))?;
    }
    Ok(())
}

/// Validate the diffusion schedule: the strided sampling schedule subdivides
/// the full schedule, so sample_steps cannot exceed timesteps
fn validate_schedule(model: &ModelConfig) -> ValidationResult<()> {
    validate_nonzero_u32(model.timesteps, "model.timesteps")?;
    validate_nonzero_u32(model.sample_steps, "model.sample_steps")?;
    if model.sample_steps > model.timesteps {
        return Err(ManifestError::InvalidRange {
            field: "model.sample_steps".to_string(),
            value: model.sample_steps.to_string(),
            constraint: format!("<= model.timesteps ({})", model.timesteps),
        });
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Cross-section validation
// ---------------------------------------------------------------------------

/// The network halves sequence length once per resolution stage, so a
/// 2^seq_depth window must survive dim_mults.len() halvings.
fn validate_cross_section(data: &DataConfig, model: &ModelConfig) -> ValidationResult<()> {
    let stages = model.dim_mults.len();
    if (data.seq_depth as usize) < stages {
        return Err(ManifestError::SequenceTooShallow {
            seq_depth: data.seq_depth,
            stages,
        });
    }
    Ok(())
}
