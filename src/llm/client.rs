use crate::{
    Error, Result,
    config::{ApiShape, LlmConfig},
};
use async_trait::async_trait;
use serde_json::Value;
use std::{sync::Arc, time::Duration};
use tracing::debug;

const ERROR_BODY_PREVIEW_CHARS: usize = 200;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait InferenceClient: Send + Sync {
    /// Runs one completion for `prompt` and returns the generated text.
    async fn generate(&self, prompt: &str) -> Result<String>;
}

/// Talks to a local model server over HTTP in the configured [`ApiShape`].
pub struct HttpInferenceClient {
    http: reqwest::Client,
    endpoint: String,
    shape: ApiShape,
    model: String,
    api_key: Option<String>,
    temperature: Option<f32>,
    timeout: Duration,
}

impl HttpInferenceClient {
    pub fn new(config: LlmConfig) -> Result<Self> {
        let timeout = Duration::from_secs(config.timeout_secs);
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::inference(format!("Failed to build HTTP client: {}", e)))?;

        let endpoint = format!(
            "{}{}",
            config.base_url.trim_end_matches('/'),
            config.api.path()
        );

        Ok(Self {
            http,
            endpoint,
            shape: config.api,
            model: config.model,
            api_key: config.api_key,
            temperature: config.temperature,
            timeout,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn transport_error(&self, e: reqwest::Error) -> Error {
        if e.is_timeout() {
            Error::inference(format!(
                "Model server did not answer within {}s",
                self.timeout.as_secs()
            ))
        } else if e.is_connect() {
            Error::inference(format!(
                "Model server unreachable at {}: {}",
                self.endpoint, e
            ))
        } else {
            Error::inference(format!("Request to model server failed: {}", e))
        }
    }
}

#[async_trait]
impl InferenceClient for HttpInferenceClient {
    async fn generate(&self, prompt: &str) -> Result<String> {
        debug!(
            "Sending {} char prompt to {} (model {})",
            prompt.len(),
            self.endpoint,
            self.model
        );

        let body = self
            .shape
            .request_body(&self.model, prompt, self.temperature)?;

        let mut request = self.http.post(&self.endpoint).json(&body);
        if let Some(api_key) = &self.api_key {
            request = request.bearer_auth(api_key);
        }

        let response = request.send().await.map_err(|e| self.transport_error(e))?;
        let status = response.status();
        let raw = response.text().await.map_err(|e| self.transport_error(e))?;

        if !status.is_success() {
            let preview: String = raw.chars().take(ERROR_BODY_PREVIEW_CHARS).collect();
            return Err(Error::inference(format!(
                "Model server returned {}: {}",
                status, preview
            )));
        }

        let payload: Value = serde_json::from_str(&raw).map_err(|e| {
            Error::inference(format!("Model server returned invalid JSON: {}", e))
        })?;

        let text = self.shape.extract_text(payload)?;
        if text.trim().is_empty() {
            return Err(Error::inference("Model server returned an empty response"));
        }

        debug!("Received {} chars from model server", text.len());

        Ok(text)
    }
}

pub fn create_inference_client(config: &LlmConfig) -> Result<Arc<dyn InferenceClient>> {
    Ok(Arc::new(HttpInferenceClient::new(config.clone())?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn create_test_config() -> LlmConfig {
        LlmConfig {
            api: ApiShape::Generate,
            base_url: "http://localhost:11434/".to_string(),
            model: "llama2".to_string(),
            timeout_secs: 30,
            api_key: None,
            temperature: None,
        }
    }

    #[test]
    fn test_endpoint_joins_base_url_and_path() {
        let client = HttpInferenceClient::new(create_test_config()).unwrap();
        assert_eq!(client.endpoint(), "http://localhost:11434/api/generate");
        assert_eq!(client.model(), "llama2");
    }

    #[test]
    fn test_openai_endpoint() {
        let mut config = create_test_config();
        config.api = ApiShape::Openai;
        config.base_url = "http://127.0.0.1:8000".to_string();

        let client = HttpInferenceClient::new(config).unwrap();
        assert_eq!(client.endpoint(), "http://127.0.0.1:8000/v1/chat/completions");
    }
}
