//! Training Manifest Schema
//!
//! Defines the declarative YAML document the beatmap diffusion trainer boots
//! from. The document has exactly three namespaces — `trainer`, `data`, and
//! `model` — authored once by a human and read once at process start.
//!
//! Unknown keys are rejected at parse time so that a typo in a hyperparameter
//! name fails the run before any compute is spent.

mod callback;
mod data;
mod model;
mod trainer;

#[cfg(test)]
mod tests;

pub use callback::{CallbackConfig, CallbackType, LoggingInterval};
pub use data::DataConfig;
pub use model::{LossType, ModelConfig};
pub use trainer::TrainerConfig;

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

use crate::validation::{validate_manifest, ManifestError};

/// Complete training manifest (root structure)
///
/// All three sections are required; a manifest missing one cannot configure
/// a run and is rejected at parse time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TrainManifest {
    /// Trainer wiring: hardware, loop budget, precision, logging toggles
    pub trainer: TrainerConfig,

    /// Data wiring: subsequence sampling and loader settings
    pub data: DataConfig,

    /// Model wiring: optimizer, network shape, diffusion schedule
    pub model: ModelConfig,
}

impl TrainManifest {
    /// Parse a manifest from YAML text without validating it.
    pub fn from_yaml(yaml: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(yaml)
    }

    /// Serialize the manifest to YAML text.
    pub fn to_yaml(&self) -> Result<String, serde_yaml::Error> {
        serde_yaml::to_string(self)
    }
}

/// Errors from loading or saving a manifest file
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("io: {0}")]
    Io(#[from] std::io::Error),

    #[error("yaml: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("invalid manifest: {0}")]
    Invalid(#[from] ManifestError),
}

/// Load a manifest from disk, parse it, and validate it.
pub fn load_manifest(path: &Path) -> Result<TrainManifest, LoadError> {
    let text = std::fs::read_to_string(path)?;
    let manifest = TrainManifest::from_yaml(&text)?;
    validate_manifest(&manifest)?;
    Ok(manifest)
}

/// Serialize a manifest and write it to disk.
///
/// Parent directories are not created; writing into a missing directory is
/// an error.
pub fn save_manifest(manifest: &TrainManifest, path: &Path) -> Result<(), LoadError> {
    let yaml = manifest.to_yaml()?;
    std::fs::write(path, yaml)?;
    Ok(())
}
