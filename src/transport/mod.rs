pub mod vertex;

use async_trait::async_trait;
use serde_json::Value;

use crate::error::PredictionError;
use crate::types::PredictResponse;

/// One predict round trip. No prompt shaping, no timing, no retries.
/// Instances in, predictions out.
#[async_trait]
pub trait PredictionTransport: Send + Sync {
    async fn predict(&self, instances: Vec<Value>) -> Result<PredictResponse, PredictionError>;
}

/// Blanket impl so `Box<dyn PredictionTransport>` can be handed to `PromptClient::with_transport()`.
#[async_trait]
impl PredictionTransport for Box<dyn PredictionTransport> {
    async fn predict(&self, instances: Vec<Value>) -> Result<PredictResponse, PredictionError> {
        (**self).predict(instances).await
    }
}

pub use vertex::VertexEndpoint;
