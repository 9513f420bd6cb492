//! Trainer Configuration
//!
//! Hardware accelerator selection, loop budget, numeric precision, and
//! logging/checkpointing toggles — the `trainer:` namespace of the manifest.

use serde::{Deserialize, Serialize};

use super::callback::CallbackConfig;

/// Trainer wiring
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TrainerConfig {
    /// Hardware backend selector (cpu, gpu, tpu, mps, auto)
    pub accelerator: String,

    /// Device count
    pub devices: u32,

    /// Epoch budget; -1 trains until interrupted
    pub max_epochs: i64,

    /// Optimizer updates are deferred across this many batches
    #[serde(default = "default_accumulate_grad_batches")]
    pub accumulate_grad_batches: u32,

    /// Numeric precision bits (16, 32, 64)
    #[serde(default = "default_precision")]
    pub precision: u32,

    /// Metric logger toggle
    #[serde(default = "default_true")]
    pub logger: bool,

    /// Checkpoint writing toggle
    #[serde(default = "default_true")]
    pub enable_checkpointing: bool,

    /// Progress bar toggle
    #[serde(default = "default_true")]
    pub enable_progress_bar: bool,

    /// Layer summary printout toggle
    #[serde(default = "default_true")]
    pub enable_model_summary: bool,

    /// Logging cadence in steps
    #[serde(default = "default_log_every_n_steps")]
    pub log_every_n_steps: u32,

    /// Training-loop hooks, applied in order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub callbacks: Vec<CallbackConfig>,
}

fn default_accumulate_grad_batches() -> u32 {
    1
}

fn default_precision() -> u32 {
    32
}

fn default_true() -> bool {
    true
}

fn default_log_every_n_steps() -> u32 {
    50
}
