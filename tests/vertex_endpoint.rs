use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use vertex_prompt::{EndpointConfig, PromptClient, VertexEndpoint};

const PREDICT_PATH: &str = "/v1/projects/proj/locations/us-central1/endpoints/42:predict";

fn endpoint(server: &MockServer) -> VertexEndpoint {
    let config = EndpointConfig::new("proj", "us-central1", "42").unwrap();
    VertexEndpoint::new(&config).with_base_url(server.uri())
}

#[tokio::test]
async fn query_posts_templated_instance_and_reads_prediction() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(PREDICT_PATH))
        .and(header("authorization", "Bearer test-token"))
        .and(body_json(json!({
            "instances": [
                {"inputs": "<bos><start_of_turn>user\nHi<end_of_turn>\n<start_of_turn>model\n"}
            ]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "predictions": ["hello", "unused"],
            "deployedModelId": "777"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client =
        PromptClient::with_transport(endpoint(&server).with_access_token("test-token"), false);
    let result = client.query("Hi").await;

    assert_eq!(result.prompt, "Hi");
    assert_eq!(result.response, "hello");
    assert_eq!(result.error, "");
}

#[tokio::test]
async fn api_error_becomes_call_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(PREDICT_PATH))
        .respond_with(ResponseTemplate::new(429).set_body_json(json!({
            "error": {"code": 429, "message": "quota exceeded", "status": "RESOURCE_EXHAUSTED"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = PromptClient::with_transport(endpoint(&server), false);
    let result = client.query("Hi").await;

    assert_eq!(result.response, "");
    assert_eq!(result.error, "429 quota exceeded");
}

#[tokio::test]
async fn unparseable_body_becomes_call_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(PREDICT_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let client = PromptClient::with_transport(endpoint(&server), false);
    let result = client.query("Hi").await;

    assert_eq!(result.response, "");
    assert!(result.error.starts_with("failed to parse response"));
}

#[tokio::test]
async fn unreachable_host_becomes_call_error() {
    let config = EndpointConfig::new("proj", "us-central1", "42").unwrap();
    let transport = VertexEndpoint::new(&config).with_base_url("http://127.0.0.1:1");
    let client = PromptClient::with_transport(transport, false);

    let result = client.query("Hi").await;

    assert_eq!(result.response, "");
    assert!(result.error.starts_with("request failed"));
    assert!(result.duration_secs >= 0.0);
}

#[tokio::test]
async fn no_authorization_header_without_token() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(PREDICT_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"predictions": ["ok"]})))
        .mount(&server)
        .await;

    let client = PromptClient::with_transport(endpoint(&server), false);
    assert!(client.query("Hi").await.is_ok());

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert!(!requests[0].headers.contains_key("authorization"));
}
