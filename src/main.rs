use anyhow::Result;
use bedrock_gateway::{config, server};
use tracing::info;
use tracing_subscriber::{EnvFilter, filter::LevelFilter};

/// Builds the log filter, accepting a bare level or full `target=level` directives
fn log_filter(level: &str) -> Result<EnvFilter> {
    let invalid = || {
        anyhow::anyhow!(
            "Invalid log level: '{}'. Valid levels: error, warn, info, debug, trace",
            level
        )
    };

    // A bare word would otherwise be read as a target name
    if !level.contains('=') {
        level.parse::<LevelFilter>().map_err(|_| invalid())?;
    }

    EnvFilter::try_new(level).map_err(|_| invalid())
}

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

    // RUST_LOG wins over the configured level
    let log_level = std::env::var("RUST_LOG").unwrap_or_else(|_| config.server.logs.level.clone());

    let filter = match log_filter(&log_level) {
        Ok(filter) => filter,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .json()
        .init();

    info!("Starting bedrock-gateway with log level: {}", log_level);

    server::run(config).await?;

    Ok(())
}
