//! Loss functions selected by `model.loss_type`
//!
//! Forward scalar evaluation only: the trainer owns gradients, so these
//! kernels are plain mean-reduced folds over prediction/target slices.
//!
//! - [`HuberLoss`] - quadratic near zero, linear in the tails
//! - [`L1Loss`] - mean absolute error
//! - [`L2Loss`] - mean squared error

use crate::manifest::LossType;

/// Trait for loss functions
pub trait LossFn {
    /// Compute the mean loss over predictions and targets
    fn forward(&self, predictions: &[f32], targets: &[f32]) -> f32;

    /// Name of the loss function
    fn name(&self) -> &'static str;
}

impl LossType {
    /// Build the loss kernel this selector names.
    ///
    /// Huber uses the conventional delta of 1.0; the manifest does not
    /// expose it.
    pub fn build(&self) -> Box<dyn LossFn> {
        match self {
            LossType::Huber => Box::new(HuberLoss::default()),
            LossType::L1 => Box::new(L1Loss),
            LossType::L2 => Box::new(L2Loss),
        }
    }
}

fn check_lengths(predictions: &[f32], targets: &[f32]) {
    assert!(!predictions.is_empty(), "loss over empty slices");
    assert_eq!(
        predictions.len(),
        targets.len(),
        "predictions and targets must have same length"
    );
}

/// Huber Loss (Smooth L1 Loss)
///
/// For |error| <= delta:  L = 0.5 * error^2
/// For |error| > delta:   L = delta * (|error| - 0.5 * delta)
pub struct HuberLoss {
    /// Threshold for switching between quadratic and linear
    delta: f32,
}

impl HuberLoss {
    /// Create Huber loss with given delta threshold
    pub fn new(delta: f32) -> Self {
        assert!(delta > 0.0, "delta must be positive");
        Self { delta }
    }
}

impl Default for HuberLoss {
    fn default() -> Self {
        Self::new(1.0)
    }
}

impl LossFn for HuberLoss {
    fn forward(&self, predictions: &[f32], targets: &[f32]) -> f32 {
        check_lengths(predictions, targets);
        let delta = self.delta;
        let sum: f32 = predictions
            .iter()
            .zip(targets)
            .map(|(p, t)| {
                let err = (p - t).abs();
                if err <= delta {
                    0.5 * err * err
                } else {
                    delta * (err - 0.5 * delta)
                }
            })
            .sum();
        sum / predictions.len() as f32
    }

    fn name(&self) -> &'static str {
        "Huber"
    }
}

/// L1 Loss (Mean Absolute Error)
pub struct L1Loss;

impl LossFn for L1Loss {
    fn forward(&self, predictions: &[f32], targets: &[f32]) -> f32 {
        check_lengths(predictions, targets);
        let sum: f32 = predictions.iter().zip(targets).map(|(p, t)| (p - t).abs()).sum();
        sum / predictions.len() as f32
    }

    fn name(&self) -> &'static str {
        "L1"
    }
}

/// L2 Loss (Mean Squared Error)
pub struct L2Loss;

impl LossFn for L2Loss {
    fn forward(&self, predictions: &[f32], targets: &[f32]) -> f32 {
        check_lengths(predictions, targets);
        let sum: f32 = predictions
            .iter()
            .zip(targets)
            .map(|(p, t)| (p - t) * (p - t))
            .sum();
        sum / predictions.len() as f32
    }

    fn name(&self) -> &'static str {
        "L2"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_loss_names() {
        assert_eq!(HuberLoss::default().name(), "Huber");
        assert_eq!(L1Loss.name(), "L1");
        assert_eq!(L2Loss.name(), "L2");
    }

    #[test]
    fn test_zero_loss_on_identical_inputs() {
        let xs = [0.5f32, -1.0, 2.0];
        for ty in [LossType::Huber, LossType::L1, LossType::L2] {
            assert_relative_eq!(ty.build().forward(&xs, &xs), 0.0);
        }
    }

    #[test]
    fn test_l1_forward() {
        let pred = [1.0f32, 2.0, 3.0];
        let target = [1.5f32, 2.5, 3.5];
        assert_relative_eq!(L1Loss.forward(&pred, &target), 0.5);
    }

    #[test]
    fn test_l2_forward() {
        let pred = [0.0f32, 0.0];
        let target = [1.0f32, 3.0];
        // (1 + 9) / 2
        assert_relative_eq!(L2Loss.forward(&pred, &target), 5.0);
    }

    #[test]
    fn test_huber_quadratic_region_matches_l2_half() {
        let pred = [0.2f32, -0.3];
        let target = [0.0f32, 0.0];
        let huber = HuberLoss::default().forward(&pred, &target);
        let half_l2 = 0.5 * L2Loss.forward(&pred, &target);
        assert_relative_eq!(huber, half_l2, epsilon = 1e-6);
    }

    #[test]
    fn test_huber_linear_region_tracks_l1() {
        // err = 10 >> delta = 1: L = 1 * (10 - 0.5)
        let huber = HuberLoss::default().forward(&[10.0f32], &[0.0f32]);
        assert_relative_eq!(huber, 9.5);
    }

    #[test]
    fn test_huber_robust_to_outliers() {
        let pred = [0.0f32, 0.0, 10.0];
        let target = [0.1f32, -0.1, 0.0];
        let huber = HuberLoss::default().forward(&pred, &target);
        let l2 = L2Loss.forward(&pred, &target);
        assert!(huber < l2, "outlier should hurt Huber less than L2");
    }

    #[test]
    #[should_panic(expected = "same length")]
    fn test_length_mismatch_panics() {
        L1Loss.forward(&[1.0], &[1.0, 2.0]);
    }
}
