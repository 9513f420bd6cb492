//! Signal decoding utilities
//!
//! Helpers for turning sampled model output back into chart geometry.
//! Slider paths are stored as cubic Bézier chains, so the decoder fits
//! curves to the dense point sequences the model produces.

mod fit_bezier;

pub use fit_bezier::{eval_bezier, fit_bezier, Bezier, Point};
