//! Model Configuration
//!
//! Optimizer step size, network width/depth hyperparameters, and the
//! diffusion schedule — the `model:` namespace of the manifest.

use serde::{Deserialize, Serialize};

/// Model wiring
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ModelConfig {
    /// AdamW step size
    pub learning_rate: f64,

    /// Plateau scheduler decay factor, in (0, 1)
    pub learning_rate_schedule_factor: f64,

    /// Base hidden width
    pub h_dim: u32,

    /// Group count for group-normalized convolutions; must divide h_dim
    pub h_dim_groups: u32,

    /// Per-stage width multipliers, outermost first
    pub dim_mults: Vec<u32>,

    /// ConvNeXt block expansion factor
    pub convnext_mult: u32,

    /// Dilated convolution layers per wave stack
    pub wave_stack_depth: u32,

    /// Wave stack count
    pub wave_num_stacks: u32,

    /// Diffusion timestep count for the full noise schedule
    pub timesteps: u32,

    /// Strided sampling steps used for validation-time generation
    pub sample_steps: u32,

    /// Loss function selector
    pub loss_type: LossType,

    /// Probability of replacing the timing signal with the prior, in [0, 1]
    pub timing_dropout: f64,
}

/// Loss function selector
///
/// Maps onto the scalar kernels in [`crate::loss`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LossType {
    /// Smooth L1: quadratic near zero, linear in the tails
    Huber,
    /// Mean absolute error
    L1,
    /// Mean squared error
    L2,
}
