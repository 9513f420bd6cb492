//! Sonador: beatmap diffusion training manifests
//!
//! The trainer for the beatmap diffusion model boots from a single declarative
//! YAML document with three namespaces: `trainer` (hardware and loop wiring),
//! `data` (subsequence sampling and loader settings), and `model` (network
//! width/depth hyperparameters and the diffusion schedule). This crate owns
//! that contract:
//!
//! - [`manifest`] — the typed schema and its load/save operations
//! - [`validation`] — range, allow-list, and cross-field checks
//! - [`templates`] — starter manifest generation
//! - [`loss`] — the scalar loss kernels selected by `model.loss_type`
//! - [`signal`] — Bézier fitting used when decoding sampled signals to charts
//! - [`cli`] — the `sonador` command-line tool (init / validate / info)

pub mod cli;
pub mod loss;
pub mod manifest;
pub mod signal;
pub mod templates;
pub mod validation;

pub use manifest::{load_manifest, save_manifest, LoadError, TrainManifest};
pub use validation::{validate_manifest, ManifestError};
