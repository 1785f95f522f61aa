use inbox_agent::{
    Error,
    config::{self, ApiShape},
};
use pretty_assertions::assert_eq;

mod common;
use common::{
    INVALID_CONFIG_YAML, SAMPLE_CONFIG_YAML, SAMPLE_OPENAI_CONFIG_YAML, create_temp_dir,
    create_test_config_file,
};

#[tokio::test]
async fn test_load_full_config_file() {
    let dir = create_temp_dir();
    let path = create_test_config_file(&dir, SAMPLE_CONFIG_YAML).await.unwrap();

    let config = config::load_from(&path).await.unwrap();

    assert_eq!(config.server.host, "127.0.0.1");
    assert_eq!(config.server.port, 5050);
    assert!(!config.server.cors);
    assert_eq!(config.server.body_limit_bytes, 65536);
    assert_eq!(config.server.logs.level, "debug");
    assert_eq!(config.server.logs.file.as_deref(), Some("email_agents.log"));
    assert_eq!(config.llm.api, ApiShape::Generate);
    assert_eq!(config.llm.model, "mistral");
    assert_eq!(config.llm.timeout_secs, 45);
    assert_eq!(config.llm.temperature, Some(0.5));
    assert_eq!(config.llm.api_key, None);
}

#[tokio::test]
async fn test_load_openai_config_fills_server_defaults() {
    let dir = create_temp_dir();
    let path = create_test_config_file(&dir, SAMPLE_OPENAI_CONFIG_YAML)
        .await
        .unwrap();

    let config = config::load_from(&path).await.unwrap();

    assert_eq!(config.llm.api, ApiShape::Openai);
    assert_eq!(config.llm.api_key.as_deref(), Some("local-key"));
    assert_eq!(config.server.port, 5000);
    assert_eq!(config.server.logs.level, "info");
}

#[tokio::test]
async fn test_missing_file_is_config_error() {
    let dir = create_temp_dir();
    let path = dir.path().join("absent.yaml");

    let err = config::load_from(&path.to_string_lossy()).await.unwrap_err();

    assert!(matches!(err, Error::Config(_)));
    assert!(err.to_string().contains("absent.yaml"));
}

#[tokio::test]
async fn test_invalid_yaml_is_rejected() {
    let dir = create_temp_dir();
    let path = create_test_config_file(&dir, INVALID_CONFIG_YAML).await.unwrap();

    let err = config::load_from(&path).await.unwrap_err();

    assert!(matches!(err, Error::Yaml(_)));
}
