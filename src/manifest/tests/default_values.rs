//! Default values tests - keys the schema fills in when omitted

use crate::manifest::*;

/// Minimal document: only the keys with no serde default
const MINIMAL: &str = r#"
trainer:
  accelerator: cpu
  devices: 1
  max_epochs: 5
data:
  seq_depth: 10
  batch_size: 8
  val_size: 4
model:
  learning_rate: 0.001
  learning_rate_schedule_factor: 0.5
  h_dim: 32
  h_dim_groups: 4
  dim_mults: [1, 2]
  convnext_mult: 2
  wave_stack_depth: 2
  wave_num_stacks: 1
  timesteps: 100
  sample_steps: 10
  loss_type: l1
  timing_dropout: 0.0
"#;

#[test]
fn test_trainer_defaults() {
    let manifest = TrainManifest::from_yaml(MINIMAL).expect("should parse");
    let trainer = manifest.trainer;

    assert_eq!(trainer.accumulate_grad_batches, 1);
    assert_eq!(trainer.precision, 32);
    assert!(trainer.logger);
    assert!(trainer.enable_checkpointing);
    assert!(trainer.enable_progress_bar);
    assert!(trainer.enable_model_summary);
    assert_eq!(trainer.log_every_n_steps, 50);
    assert!(trainer.callbacks.is_empty());
}

#[test]
fn test_data_defaults() {
    let manifest = TrainManifest::from_yaml(MINIMAL).expect("should parse");
    let data = manifest.data;

    assert_eq!(data.sample_density, 1.0);
    assert_eq!(data.subseq_density, 1.0);
    assert_eq!(data.num_workers, 0);
}

#[test]
fn test_minimal_manifest_validates() {
    let manifest = TrainManifest::from_yaml(MINIMAL).expect("should parse");
    assert!(crate::validation::validate_manifest(&manifest).is_ok());
}

#[test]
fn test_explicit_values_override_defaults() {
    let yaml = MINIMAL.replace(
        "  accelerator: cpu",
        "  accelerator: cpu\n  precision: 64\n  log_every_n_steps: 10",
    );
    let manifest = TrainManifest::from_yaml(&yaml).expect("should parse");
    assert_eq!(manifest.trainer.precision, 64);
    assert_eq!(manifest.trainer.log_every_n_steps, 10);
}
