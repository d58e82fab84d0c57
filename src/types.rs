use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::info;

use crate::error::PredictionError;

/// Record of a single `query`. `error` is empty on success; on failure
/// `response` is empty and `error` holds the failure text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CallResult {
    pub prompt: String,
    pub response: String,
    /// Wall-clock seconds, rounded to milliseconds.
    pub duration_secs: f64,
    pub error: String,
}

impl CallResult {
    pub fn is_ok(&self) -> bool {
        self.error.is_empty()
    }
}

/// Per-client knobs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Options {
    pub verbose: bool,
}

impl Options {
    /// Log `msg` at info level when verbose.
    pub fn vlog(&self, msg: impl fmt::Display) {
        if self.verbose {
            info!("{msg}");
        }
    }
}

/// Body of a `:predict` call.
#[derive(Debug, Clone, Serialize)]
pub struct PredictRequest {
    pub instances: Vec<Value>,
}

/// What a prediction endpoint sent back.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictResponse {
    #[serde(default)]
    pub predictions: Vec<Value>,
    #[serde(default)]
    pub deployed_model_id: Option<String>,
    #[serde(default)]
    pub model_version_id: Option<String>,
}

impl PredictResponse {
    pub fn from_predictions(predictions: Vec<Value>) -> Self {
        Self {
            predictions,
            ..Self::default()
        }
    }

    /// Text of the first prediction. Strings come through untouched, any
    /// other JSON value is rendered compactly. A missing, `null` or empty
    /// first prediction is an error so a successful call always has text.
    pub fn first_text(&self) -> Result<String, PredictionError> {
        let text = match self.predictions.first() {
            None => return Err(PredictionError::EmptyPredictions),
            Some(Value::Null) => return Err(PredictionError::BlankPrediction),
            Some(Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
        };
        if text.is_empty() {
            return Err(PredictionError::BlankPrediction);
        }
        Ok(text)
    }
}
