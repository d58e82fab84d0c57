/// Raised while building a client. Never caught internally.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigurationError {
    #[error("missing required field `{0}`")]
    Missing(&'static str),
    #[error("invalid `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Anything that goes wrong during a predict call. `PromptClient::query`
/// folds these into `CallResult::error` via `Display`.
#[derive(Debug, thiserror::Error)]
pub enum PredictionError {
    #[error("request failed: {0}")]
    Request(String),
    #[error("{status} {message}")]
    Api { status: u16, message: String },
    #[error("failed to parse response: {0}")]
    Parse(String),
    #[error("prediction response contained no predictions")]
    EmptyPredictions,
    #[error("first prediction was empty")]
    BlankPrediction,
    /// Failure reported by a custom transport, rendered verbatim.
    #[error("{0}")]
    Remote(String),
}
