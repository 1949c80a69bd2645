use pixeldojo_mcp::{
    tools::Arguments, DojoError, GenerationRequest, PixelDojoApi, PixelDojoClient,
    PixelDojoConfig, ToolDispatcher,
};
use serde_json::json;
use std::sync::Arc;
use wiremock::matchers::{any, body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const API_KEY: &str = "pd_test_key_1234";

async fn setup_server() -> MockServer {
    MockServer::start().await
}

fn client_for(server: &MockServer) -> PixelDojoClient {
    let config = PixelDojoConfig::new()
        .with_api_key(API_KEY)
        .with_base_url(server.uri());
    PixelDojoClient::new(config).expect("client builds")
}

fn dispatcher_for(server: &MockServer) -> ToolDispatcher {
    ToolDispatcher::new(Arc::new(client_for(server)))
}

fn args(value: serde_json::Value) -> Arguments {
    value.as_object().cloned().unwrap_or_default()
}

#[tokio::test]
async fn test_generation_posts_body_without_seed() {
    let server = setup_server().await;
    Mock::given(method("POST"))
        .and(path("/flux"))
        .and(header("authorization", "Bearer pd_test_key_1234"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({
            "prompt": "a red fox",
            "model": "flux-pro",
            "aspect_ratio": "1:1",
            "num_outputs": 1,
            "output_format": "png",
            "output_quality": 80
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "images": [{"url": "http://x/1.png"}],
            "credits_used": 1,
            "credits_remaining": 99
        })))
        .expect(1)
        .mount(&server)
        .await;

    let output = dispatcher_for(&server)
        .call_tool("pixeldojo_generate_image", &args(json!({"prompt": "a red fox"})))
        .await;

    assert!(!output.is_error, "{}", output.text);
    assert!(output.text.starts_with("Generated 1 image(s) using flux-pro:"));
    assert!(output.text.contains("Image 1: http://x/1.png"));
    assert!(output.text.contains("Credits remaining: 99"));
}

#[tokio::test]
async fn test_generation_sends_zero_seed() {
    let server = setup_server().await;
    Mock::given(method("POST"))
        .and(path("/flux"))
        .and(body_json(json!({
            "prompt": "tide pools",
            "model": "flux-1.1-pro-ultra",
            "aspect_ratio": "3:2",
            "num_outputs": 2,
            "output_format": "jpg",
            "output_quality": 90,
            "seed": 0
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "images": ["http://x/a.jpg", {"url": "http://x/b.jpg"}],
            "credits_used": 3.0,
            "credits_remaining": 40
        })))
        .expect(1)
        .mount(&server)
        .await;

    let request = GenerationRequest::new("tide pools")
        .with_model("flux-1.1-pro-ultra")
        .with_aspect_ratio("3:2")
        .with_num_outputs(2)
        .with_seed(0)
        .with_output_format("jpg")
        .with_output_quality(90);

    let result = client_for(&server).submit_generation(&request).await.unwrap();
    let urls: Vec<String> = result.images.iter().map(|image| image.to_string()).collect();
    assert_eq!(urls, vec!["http://x/a.jpg", "http://x/b.jpg"]);
    assert_eq!(result.credits_remaining.to_string(), "40");
}

#[tokio::test]
async fn test_rate_limit_is_reported_as_text() {
    let server = setup_server().await;
    Mock::given(method("POST"))
        .and(path("/flux"))
        .respond_with(ResponseTemplate::new(429).set_body_string("rate limited"))
        .expect(1)
        .mount(&server)
        .await;

    let dispatcher = dispatcher_for(&server);
    let err = dispatcher
        .dispatch("pixeldojo_generate_image", &args(json!({"prompt": "x"})))
        .await
        .unwrap_err();
    match err {
        DojoError::Remote { status, body } => {
            assert_eq!(status, 429);
            assert_eq!(body, "rate limited");
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[tokio::test]
async fn test_rate_limit_text_through_call_tool() {
    let server = setup_server().await;
    Mock::given(method("POST"))
        .and(path("/flux"))
        .respond_with(ResponseTemplate::new(429).set_body_string("rate limited"))
        .mount(&server)
        .await;

    let output = dispatcher_for(&server)
        .call_tool("pixeldojo_generate_image", &args(json!({"prompt": "x"})))
        .await;
    assert!(output.is_error);
    assert_eq!(output.text, "Error generating image: 429 - rate limited");
}

#[tokio::test]
async fn test_credits_lookup() {
    let server = setup_server().await;
    Mock::given(method("GET"))
        .and(path("/credits"))
        .and(header("authorization", "Bearer pd_test_key_1234"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "credits_remaining": 250,
            "credits_used": 50,
            "monthly_allocation": 300,
            "renewal_date": "2026-11-01"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let output = dispatcher_for(&server)
        .call_tool("pixeldojo_get_credits", &Arguments::new())
        .await;
    assert!(!output.is_error);
    assert!(output.text.starts_with("# PixelDojo Credit Information\n\n"));
    assert!(output.text.contains("**Credits Remaining**: 250\n"));
    assert!(output.text.contains("**Credits Used This Month**: 50\n"));
    assert!(output.text.contains("**Monthly Allocation**: 300\n"));
    assert!(output.text.contains("**Renewal Date**: 2026-11-01\n"));
}

#[tokio::test]
async fn test_credits_server_error() {
    let server = setup_server().await;
    Mock::given(method("GET"))
        .and(path("/credits"))
        .respond_with(ResponseTemplate::new(401).set_body_string("{\"error\":\"invalid key\"}"))
        .mount(&server)
        .await;

    let output = dispatcher_for(&server)
        .call_tool("pixeldojo_get_credits", &Arguments::new())
        .await;
    assert_eq!(
        output.text,
        "Error retrieving credit information: 401 - {\"error\":\"invalid key\"}"
    );
}

#[tokio::test]
async fn test_malformed_success_body() {
    let server = setup_server().await;
    Mock::given(method("GET"))
        .and(path("/credits"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&server)
        .await;

    let output = dispatcher_for(&server)
        .call_tool("pixeldojo_get_credits", &Arguments::new())
        .await;
    assert!(output.is_error);
    assert!(output.text.starts_with("Error calling PixelDojo API: "));
}

#[tokio::test]
async fn test_missing_key_never_reaches_network() {
    let server = setup_server().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let config = PixelDojoConfig::new().with_base_url(server.uri());
    let dispatcher = ToolDispatcher::new(Arc::new(PixelDojoClient::new(config).unwrap()));
    let missing_key =
        "Error: PIXELDOJO_API_KEY environment variable not set. Please configure your API key.";

    let output = dispatcher
        .call_tool("pixeldojo_get_credits", &Arguments::new())
        .await;
    assert!(output.is_error);
    assert_eq!(output.text, missing_key);

    let output = dispatcher
        .call_tool("pixeldojo_generate_image", &args(json!({"prompt": "x"})))
        .await;
    assert!(output.is_error);
    assert_eq!(output.text, missing_key);

    let output = dispatcher
        .call_tool("pixeldojo_describe_models", &args(json!({"model_id": "flux-pro"})))
        .await;
    assert!(output.text.starts_with("# Flux Pro (flux-pro)"));
}

#[tokio::test]
async fn test_connection_failure_is_reported_as_text() {
    // Reserve a port, then free it so nothing is listening there.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let base_url = format!("http://{}", listener.local_addr().unwrap());
    drop(listener);

    let config = PixelDojoConfig::new()
        .with_api_key(API_KEY)
        .with_base_url(base_url);
    let dispatcher = ToolDispatcher::new(Arc::new(PixelDojoClient::new(config).unwrap()));

    let output = dispatcher
        .call_tool("pixeldojo_generate_image", &args(json!({"prompt": "x"})))
        .await;
    assert!(output.is_error);
    assert!(output.text.starts_with("Error calling PixelDojo API: "));
}
