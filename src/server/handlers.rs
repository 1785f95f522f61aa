use super::types::*;
use crate::assistant::{EmailAssistant, EmailTask};
use axum::{
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::Json,
};
use std::sync::Arc;
use tracing::{error, info, warn};

#[derive(Clone)]
pub struct AppState {
    pub assistant: Arc<EmailAssistant>,
}

type ApiError = (StatusCode, Json<ErrorResponse>);

pub async fn summarize(
    State(state): State<AppState>,
    payload: Result<Json<SummarizeRequest>, JsonRejection>,
) -> Result<Json<SummarizeResponse>, ApiError> {
    info!("Received request to /summarize endpoint");

    let Json(request) = payload.map_err(reject_body)?;
    let summary = run_task(&state, EmailTask::Summarize, request.email_content).await?;

    Ok(Json(SummarizeResponse { summary }))
}

pub async fn draft(
    State(state): State<AppState>,
    payload: Result<Json<DraftRequest>, JsonRejection>,
) -> Result<Json<DraftResponse>, ApiError> {
    info!("Received request to /draft endpoint");

    let Json(request) = payload.map_err(reject_body)?;
    let draft = run_task(&state, EmailTask::Draft, request.summary).await?;

    Ok(Json(DraftResponse { draft }))
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

async fn run_task(
    state: &AppState,
    task: EmailTask,
    input: Option<String>,
) -> Result<String, ApiError> {
    let input = input.unwrap_or_default();

    match state.assistant.run(task, &input).await {
        Ok(output) => {
            info!(task = %task, "Request handled successfully");
            Ok(output)
        }
        Err(e) => {
            let message = if e.is_validation() {
                warn!(task = %task, "Request is missing '{}'", task.input_field());
                task.missing_input_message()
            } else {
                error!(
                    task = %task,
                    input_len = input.len(),
                    "Failed to handle request: {}",
                    e
                );
                task.failure_message()
            };
            Err(error_response(e.status_code(), message))
        }
    }
}

fn reject_body(rejection: JsonRejection) -> ApiError {
    let status = match rejection.status() {
        StatusCode::PAYLOAD_TOO_LARGE => StatusCode::PAYLOAD_TOO_LARGE,
        _ => StatusCode::BAD_REQUEST,
    };

    warn!("Rejected request body: {}", rejection.body_text());

    error_response(
        status,
        format!("Invalid request body: {}", rejection.body_text()),
    )
}

fn error_response(status: StatusCode, message: impl Into<String>) -> ApiError {
    (
        status,
        Json(ErrorResponse {
            error: message.into(),
        }),
    )
}
