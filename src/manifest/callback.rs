//! Callback Configuration
//!
//! Training-loop hooks referenced from `trainer.callbacks`.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Callback configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CallbackConfig {
    /// Callback type
    #[serde(rename = "type")]
    pub callback_type: CallbackType,

    /// Logging cadence for the learning-rate monitor
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logging_interval: Option<LoggingInterval>,

    /// Free-form settings for custom callbacks
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config: Option<HashMap<String, serde_json::Value>>,
}

impl CallbackConfig {
    /// Learning-rate monitor hook with the given cadence.
    pub fn lr_monitor(interval: LoggingInterval) -> Self {
        Self {
            callback_type: CallbackType::LrMonitor,
            logging_interval: Some(interval),
            config: None,
        }
    }
}

/// Callback type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CallbackType {
    /// Log the optimizer's current learning rate
    LrMonitor,
    /// Write model checkpoints
    Checkpoint,
    /// Externally supplied hook
    Custom,
}

/// Cadence for the learning-rate monitor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoggingInterval {
    Step,
    Epoch,
}
