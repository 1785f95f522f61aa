use async_trait::async_trait;
use inbox_agent::{Error, Result, llm::InferenceClient};
use std::sync::{Arc, Mutex};

/// Stub inference client that records every prompt it receives.
#[derive(Debug)]
pub struct MockInferenceClient {
    reply: std::result::Result<String, String>,
    prompts: Arc<Mutex<Vec<String>>>,
}

impl MockInferenceClient {
    pub fn replying(text: impl Into<String>) -> Arc<Self> {
        Arc::new(Self {
            reply: Ok(text.into()),
            prompts: Arc::new(Mutex::new(Vec::new())),
        })
    }

    pub fn failing(message: impl Into<String>) -> Arc<Self> {
        Arc::new(Self {
            reply: Err(message.into()),
            prompts: Arc::new(Mutex::new(Vec::new())),
        })
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }
}

#[async_trait]
impl InferenceClient for MockInferenceClient {
    async fn generate(&self, prompt: &str) -> Result<String> {
        self.prompts.lock().unwrap().push(prompt.to_string());

        match &self.reply {
            Ok(text) => Ok(text.clone()),
            Err(message) => Err(Error::inference(message.clone())),
        }
    }
}
