//! Send one prompt to a Vertex AI endpoint and print the call record.
//!
//! Usage:
//!   cargo run --example query -- --project my-proj --location us-central1 --endpoint 123 "Hello"
//!   VERTEX_ACCESS_TOKEN=$(gcloud auth print-access-token) cargo run --example query -- ...

use clap::Parser;
use tracing_subscriber::EnvFilter;
use vertex_prompt::{EndpointConfig, PromptClient, VertexEndpoint};

#[derive(Parser)]
#[command(name = "query", about = "Query a Vertex AI prediction endpoint")]
struct Cli {
    /// GCP project hosting the endpoint
    #[arg(long)]
    project: String,

    /// Region of the endpoint
    #[arg(long, default_value = "us-central1")]
    location: String,

    /// Endpoint id or full resource name
    #[arg(long)]
    endpoint: String,

    /// Bearer token (falls back to VERTEX_ACCESS_TOKEN)
    #[arg(long)]
    access_token: Option<String>,

    /// Override the API host
    #[arg(long)]
    base_url: Option<String>,

    /// Suppress the prompt preview log
    #[arg(long)]
    quiet: bool,

    /// Prompt text
    prompt: String,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let config = match EndpointConfig::new(&cli.project, &cli.location, &cli.endpoint) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(2);
        }
    };

    let mut transport = VertexEndpoint::new(&config);
    if let Some(token) = cli
        .access_token
        .clone()
        .or_else(|| std::env::var("VERTEX_ACCESS_TOKEN").ok())
    {
        transport = transport.with_access_token(token);
    }
    if let Some(ref url) = cli.base_url {
        transport = transport.with_base_url(url);
    }

    let client = PromptClient::with_transport(transport, !cli.quiet);
    let call = client.query(&cli.prompt).await;

    match serde_json::to_string_pretty(&call) {
        Ok(json) => println!("{json}"),
        Err(e) => eprintln!("error: {e}"),
    }

    if !call.is_ok() {
        std::process::exit(1);
    }
}
