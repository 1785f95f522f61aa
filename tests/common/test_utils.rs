use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, Response},
};
use inbox_agent::{
    Result,
    assistant::EmailAssistant,
    config::{ApiShape, Config, LlmConfig, LogsConfig, ServerConfig},
    llm::InferenceClient,
    server::{AppState, router},
};
use serde_json::Value;
use std::sync::Arc;
use tempfile::TempDir;
use tokio::fs;

/// Create a test configuration with sensible defaults
pub fn create_test_config() -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 5000,
            cors: true,
            body_limit_bytes: 2 * 1024 * 1024,
            logs: LogsConfig {
                level: "debug".to_string(),
                file: None,
            },
        },
        llm: create_llm_config("http://localhost:11434", ApiShape::Chat),
    }
}

pub fn create_llm_config(base_url: &str, api: ApiShape) -> LlmConfig {
    LlmConfig {
        api,
        base_url: base_url.to_string(),
        model: "llama2".to_string(),
        timeout_secs: 5,
        api_key: None,
        temperature: None,
    }
}

pub fn create_state(client: Arc<dyn InferenceClient>) -> AppState {
    AppState {
        assistant: Arc::new(EmailAssistant::new(client)),
    }
}

/// Router wired to `client` with the default server settings.
pub fn create_test_app(client: Arc<dyn InferenceClient>) -> Router {
    create_test_app_with(client, &create_test_config().server)
}

pub fn create_test_app_with(client: Arc<dyn InferenceClient>, server: &ServerConfig) -> Router {
    router(create_state(client), server)
}

pub fn json_request(uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub async fn read_json(response: Response<Body>) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

/// Create a temporary directory for test files
pub fn create_temp_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp directory")
}

/// Create a test config YAML file
pub async fn create_test_config_file(dir: &TempDir, content: &str) -> Result<String> {
    let config_path = dir.path().join("config.yaml");
    fs::write(&config_path, content).await?;
    Ok(config_path.to_string_lossy().to_string())
}

/// Sample configuration YAML for testing
pub const SAMPLE_CONFIG_YAML: &str = r#"
server:
  host: "127.0.0.1"
  port: 5050
  cors: false
  body_limit_bytes: 65536
  logs:
    level: "debug"
    file: "email_agents.log"

llm:
  api: "generate"
  base_url: "http://localhost:11434"
  model: "mistral"
  timeout_secs: 45
  temperature: 0.5
"#;

/// Sample configuration for an OpenAI-compatible server
pub const SAMPLE_OPENAI_CONFIG_YAML: &str = r#"
llm:
  api: "openai"
  base_url: "http://localhost:8000"
  model: "qwen2.5-7b-instruct"
  api_key: "local-key"
"#;

/// Invalid configuration YAML for testing error cases
pub const INVALID_CONFIG_YAML: &str = r#"
server:
  port: "not-a-number"
"#;
