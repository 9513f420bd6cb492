//! Data Configuration
//!
//! Subsequence sampling density, loader parallelism, and validation holdout
//! sizing — the `data:` namespace of the manifest.

use serde::{Deserialize, Serialize};

/// Data wiring
///
/// Validation holdout is sized by exactly one of `val_size` (a chart count)
/// or `val_split` (a fraction of the dataset); specifying both or neither is
/// a validation error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DataConfig {
    /// log2 of the training subsequence length in frames
    pub seq_depth: u32,

    /// Fraction of the dataset sampled per epoch, in [0, 1]
    #[serde(default = "default_density")]
    pub sample_density: f64,

    /// Subsequences drawn per beatmap
    #[serde(default = "default_density")]
    pub subseq_density: f64,

    /// Training batch size
    pub batch_size: u32,

    /// Data-loader worker count
    #[serde(default)]
    pub num_workers: u32,

    /// Validation holdout as a chart count (>= 1)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub val_size: Option<u64>,

    /// Validation holdout as a dataset fraction, in (0, 1)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub val_split: Option<f64>,
}

fn default_density() -> f64 {
    1.0
}
