use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use super::PredictionTransport;
use crate::config::EndpointConfig;
use crate::error::PredictionError;
use crate::types::{PredictRequest, PredictResponse};

/// Vertex AI online prediction over REST.
///
/// Credentials are not discovered here. Pass a bearer token with
/// [`VertexEndpoint::with_access_token`], or point `with_base_url` at a proxy
/// that authenticates for you.
pub struct VertexEndpoint {
    client: reqwest::Client,
    base_url: String,
    endpoint_name: String,
    access_token: Option<String>,
}

impl VertexEndpoint {
    /// Bind to the endpoint named by `config`, served from its regional host.
    pub fn new(config: &EndpointConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: format!("https://{}-aiplatform.googleapis.com", config.endpoint_location()),
            endpoint_name: config.endpoint_name(),
            access_token: None,
        }
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    pub fn with_access_token(mut self, token: impl Into<String>) -> Self {
        self.access_token = Some(token.into());
        self
    }

    pub fn with_client(mut self, client: reqwest::Client) -> Self {
        self.client = client;
        self
    }

    pub fn predict_url(&self) -> String {
        format!(
            "{}/v1/{}:predict",
            self.base_url.trim_end_matches('/'),
            self.endpoint_name
        )
    }
}

/// Google's standard error body: `{"error": {"code", "message", "status"}}`.
#[derive(Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: String,
}

fn api_error(status: u16, body: String) -> PredictionError {
    let message = serde_json::from_str::<ErrorEnvelope>(&body)
        .ok()
        .map(|env| env.error.message)
        .filter(|m| !m.is_empty())
        .unwrap_or(body);
    PredictionError::Api { status, message }
}

#[async_trait]
impl PredictionTransport for VertexEndpoint {
    async fn predict(&self, instances: Vec<Value>) -> Result<PredictResponse, PredictionError> {
        let url = self.predict_url();
        debug!(url = %url, instances = instances.len(), "vertex predict request");

        let mut req = self
            .client
            .post(&url)
            .header("content-type", "application/json");

        if let Some(ref token) = self.access_token {
            req = req.bearer_auth(token);
        }

        let resp = req
            .json(&PredictRequest { instances })
            .send()
            .await
            .map_err(|e| PredictionError::Request(e.to_string()))?;

        let status = resp.status();
        let text = resp
            .text()
            .await
            .map_err(|e| PredictionError::Request(e.to_string()))?;

        if !status.is_success() {
            return Err(api_error(status.as_u16(), text));
        }

        let parsed: PredictResponse =
            serde_json::from_str(&text).map_err(|e| PredictionError::Parse(e.to_string()))?;

        debug!(
            predictions = parsed.predictions.len(),
            deployed_model_id = parsed.deployed_model_id.as_deref().unwrap_or(""),
            "vertex predict response"
        );

        Ok(parsed)
    }
}
