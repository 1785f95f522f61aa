use anyhow::Result;
use inbox_agent::{config, logging, server};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (before logging setup)
    let config = match config::load().await {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    let log_guard = match logging::init(&config.server.logs) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    info!(
        "Starting inbox agent with log level: {}",
        logging::resolve_level(&config.server.logs)
    );
    info!("Configuration loaded successfully");

    let result = server::run(config).await;

    if let Err(e) = &result {
        tracing::error!("Server exited with error: {}", e);
    }

    log_guard.shutdown();

    result?;

    Ok(())
}
