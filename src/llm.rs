use async_trait::async_trait;

use crate::types::CallResult;

/// The contract every model adapter honours. A query always yields a
/// record; failures live in `CallResult::error`, never in a panic or `Err`.
#[async_trait]
pub trait Llm: Send + Sync {
    async fn query(&self, prompt: &str) -> CallResult;
}

#[async_trait]
impl Llm for Box<dyn Llm> {
    async fn query(&self, prompt: &str) -> CallResult {
        (**self).query(prompt).await
    }
}
