use std::time::Duration;

use async_trait::async_trait;
use tokio::time::Instant;
use tracing::error;

use crate::config::EndpointConfig;
use crate::error::ConfigurationError;
use crate::llm::Llm;
use crate::prompt;
use crate::transport::{PredictionTransport, VertexEndpoint};
use crate::types::{CallResult, Options};

/// Sends prompts to a single prediction endpoint.
///
/// The transport is built once and reused for every query. Queries take
/// `&self`, so one client can be shared across tasks.
pub struct PromptClient {
    transport: Box<dyn PredictionTransport>,
    options: Options,
}

impl PromptClient {
    /// Validate the endpoint coordinates and bind a Vertex AI transport.
    pub fn new(
        project_id: impl Into<String>,
        location: impl Into<String>,
        prediction_endpoint_id: impl Into<String>,
        verbose: bool,
    ) -> Result<Self, ConfigurationError> {
        let config = EndpointConfig::new(project_id, location, prediction_endpoint_id)?;
        Ok(Self::from_config(&config, verbose))
    }

    pub fn from_config(config: &EndpointConfig, verbose: bool) -> Self {
        Self::with_transport(VertexEndpoint::new(config), verbose)
    }

    /// Use any transport, e.g. a pre-configured `VertexEndpoint` or a fake.
    pub fn with_transport(transport: impl PredictionTransport + 'static, verbose: bool) -> Self {
        Self {
            transport: Box::new(transport),
            options: Options { verbose },
        }
    }

    pub fn options(&self) -> Options {
        self.options
    }

    pub async fn query(&self, prompt: &str) -> CallResult {
        self.options.vlog(format_args!(
            "... calling Vertex AI API \"{}...\"",
            prompt::preview(prompt)
        ));

        let start = Instant::now();
        let outcome = self
            .transport
            .predict(prompt::instances(prompt))
            .await
            .and_then(|resp| resp.first_text());
        let duration_secs = round_millis(start.elapsed());

        let (response, err) = match outcome {
            Ok(text) => (text, String::new()),
            Err(e) => {
                let mut err = e.to_string();
                if err.is_empty() {
                    err = "prediction failed".into();
                }
                error!("{err}");
                (String::new(), err)
            }
        };

        CallResult {
            prompt: prompt.to_string(),
            response,
            duration_secs,
            error: err,
        }
    }
}

#[async_trait]
impl Llm for PromptClient {
    async fn query(&self, prompt: &str) -> CallResult {
        PromptClient::query(self, prompt).await
    }
}

fn round_millis(elapsed: Duration) -> f64 {
    (elapsed.as_secs_f64() * 1000.0).round() / 1000.0
}
