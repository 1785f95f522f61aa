use super::types::*;
use crate::{Error, Result, config::ApiShape};
use serde_json::Value;

impl ApiShape {
    /// Path appended to the configured base URL.
    pub fn path(&self) -> &'static str {
        match self {
            Self::Generate => "/api/generate",
            Self::Chat => "/api/chat",
            Self::Openai => "/v1/chat/completions",
        }
    }

    pub fn request_body(&self, model: &str, prompt: &str, temperature: Option<f32>) -> Result<Value> {
        let options = temperature.map(|temperature| ModelOptions { temperature });

        let body = match self {
            Self::Generate => serde_json::to_value(GenerateRequest {
                model: model.to_string(),
                prompt: prompt.to_string(),
                stream: false,
                options,
            })?,
            Self::Chat => serde_json::to_value(ChatRequest {
                model: model.to_string(),
                messages: vec![ChatMessage::user(prompt)],
                stream: false,
                options,
            })?,
            Self::Openai => serde_json::to_value(ChatCompletionRequest {
                model: model.to_string(),
                messages: vec![ChatMessage::user(prompt)],
                stream: false,
                temperature,
            })?,
        };

        Ok(body)
    }

    /// Pulls the generated text out of a decoded response payload.
    pub fn extract_text(&self, payload: Value) -> Result<String> {
        match self {
            Self::Generate => {
                let response: GenerateResponse = decode(payload)?;
                Ok(response.response)
            }
            Self::Chat => {
                let response: ChatResponse = decode(payload)?;
                Ok(response.message.content)
            }
            Self::Openai => {
                let response: ChatCompletionResponse = decode(payload)?;
                response
                    .choices
                    .into_iter()
                    .next()
                    .and_then(|choice| choice.message.content)
                    .ok_or_else(|| Error::inference("Model response has no message content"))
            }
        }
    }
}

fn decode<T: serde::de::DeserializeOwned>(payload: Value) -> Result<T> {
    serde_json::from_value(payload)
        .map_err(|e| Error::inference(format!("Unexpected model response shape: {}", e)))
}
