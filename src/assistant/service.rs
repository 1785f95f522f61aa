use super::task::EmailTask;
use crate::{Error, Result, llm::InferenceClient};
use std::sync::Arc;
use tracing::{debug, error, info};

const PROMPT_LOG_CHARS: usize = 100;

/// Turns email text into prompts and hands them to the inference client.
pub struct EmailAssistant {
    client: Arc<dyn InferenceClient>,
}

impl EmailAssistant {
    pub fn new(client: Arc<dyn InferenceClient>) -> Self {
        Self { client }
    }

    pub async fn summarize(&self, email_content: &str) -> Result<String> {
        self.run(EmailTask::Summarize, email_content).await
    }

    pub async fn draft_reply(&self, summary: &str) -> Result<String> {
        self.run(EmailTask::Draft, summary).await
    }

    /// Runs `task` on `input`. Empty input is rejected before the model is
    /// contacted.
    pub async fn run(&self, task: EmailTask, input: &str) -> Result<String> {
        if input.is_empty() {
            return Err(Error::validation(task.missing_input_message()));
        }

        info!(task = %task, input_len = input.len(), "Running email task");

        let prompt = task.build_prompt(input);
        let preview: String = prompt.chars().take(PROMPT_LOG_CHARS).collect();
        debug!(task = %task, "Prompt preview: {}...", preview);

        let output = match self.client.generate(&prompt).await {
            Ok(output) => output,
            Err(e) => {
                error!(
                    task = %task,
                    input_len = input.len(),
                    "Inference failed: {}",
                    e
                );
                return Err(e);
            }
        };

        // Summaries are shown inline, so surrounding whitespace is dropped.
        // Drafts are returned verbatim.
        let output = match task {
            EmailTask::Summarize => output.trim().to_string(),
            EmailTask::Draft => output,
        };

        if output.trim().is_empty() {
            error!(task = %task, input_len = input.len(), "Model returned blank output");
            return Err(Error::inference("Model returned an empty response"));
        }

        info!(task = %task, output_len = output.len(), "Email task completed");

        Ok(output)
    }
}
