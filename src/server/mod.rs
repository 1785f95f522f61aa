pub mod handlers;
pub mod types;

use crate::{
    Result,
    assistant::EmailAssistant,
    config::{Config, ServerConfig},
    llm::create_inference_client,
};
use axum::{
    Router,
    body::Body,
    extract::DefaultBodyLimit,
    http::Request,
    routing::{get, post},
};
use std::{future::Future, sync::Arc};
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, info_span};
use uuid::Uuid;

pub use handlers::AppState;

pub fn router(state: AppState, config: &ServerConfig) -> Router {
    let app = Router::new()
        .route("/summarize", post(handlers::summarize))
        .route("/draft", post(handlers::draft))
        .route("/health", get(handlers::health))
        .layer(DefaultBodyLimit::max(config.body_limit_bytes))
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &Request<Body>| {
                info_span!(
                    "http_request",
                    method = %request.method(),
                    uri = %request.uri(),
                    request_id = %Uuid::new_v4()
                )
            }),
        )
        .with_state(state);

    if config.cors {
        app.layer(CorsLayer::permissive())
    } else {
        app
    }
}

pub async fn run(config: Config) -> Result<()> {
    let client = create_inference_client(&config.llm)?;
    info!(
        "Using {:?} inference API at {} with model {}",
        config.llm.api, config.llm.base_url, config.llm.model
    );

    let state = AppState {
        assistant: Arc::new(EmailAssistant::new(client)),
    };

    let listener =
        TcpListener::bind((config.server.host.as_str(), config.server.port)).await?;

    serve(listener, state, &config.server, shutdown_signal()).await
}

/// Serves on an already bound listener until `shutdown` resolves, then lets
/// in-flight requests finish.
pub async fn serve<F>(
    listener: TcpListener,
    state: AppState,
    config: &ServerConfig,
    shutdown: F,
) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let app = router(state, config);

    info!("Starting server on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;

    info!("Server stopped");

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}
