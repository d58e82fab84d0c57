//! Prompt adapter for models served from Vertex AI prediction endpoints.
//!
//! ```no_run
//! # async fn run() -> Result<(), vertex_prompt::ConfigurationError> {
//! use vertex_prompt::PromptClient;
//!
//! let client = PromptClient::new("my-project", "us-central1", "1234567890", true)?;
//! let call = client.query("Why is the sky blue?").await;
//! if call.is_ok() {
//!     println!("{} ({}s)", call.response, call.duration_secs);
//! } else {
//!     eprintln!("failed: {}", call.error);
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod llm;
pub mod prompt;
pub mod transport;
pub mod types;

pub use client::PromptClient;
pub use config::EndpointConfig;
pub use error::{ConfigurationError, PredictionError};
pub use llm::Llm;
pub use transport::{PredictionTransport, VertexEndpoint};
pub use types::{CallResult, Options, PredictRequest, PredictResponse};
