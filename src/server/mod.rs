pub mod handlers;
pub mod types;

use crate::{
    Error, Result,
    adapter::InferenceAdapter,
    config::{Config, CorsConfig},
    llm::BedrockClient,
};
use axum::{
    Router,
    http::HeaderValue,
    routing::{get, post},
};
use handlers::AppState;
use std::{net::SocketAddr, sync::Arc};
use tower_http::{
    cors::{AllowHeaders, AllowMethods, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;

pub fn router(state: AppState, cors: &CorsConfig) -> Result<Router> {
    Ok(Router::new()
        .route("/endpoint_1", get(handlers::endpoint_1))
        .route("/endpoint_2", get(handlers::endpoint_2))
        .route("/endpoint_3", post(handlers::converse))
        .route("/endpoint_3/", post(handlers::converse))
        .layer(cors_layer(cors)?)
        .layer(TraceLayer::new_for_http())
        .with_state(state))
}

/// Any method and header from the one allowed origin, with credentials.
/// Wildcards are not allowed alongside credentials, so the preflight's
/// requested method and headers are mirrored back instead.
fn cors_layer(cors: &CorsConfig) -> Result<CorsLayer> {
    let origin = HeaderValue::from_str(cors.allowed_origin.trim()).map_err(|e| {
        Error::config(format!(
            "Invalid CORS origin '{}': {}",
            cors.allowed_origin, e
        ))
    })?;

    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true))
}

pub async fn run(config: Config) -> Result<()> {
    // One client for the life of the process, shared by every request
    let llm_client = Arc::new(BedrockClient::new(&config.bedrock).await);
    let adapter = InferenceAdapter::new(llm_client);

    info!(
        "Inference adapter ready for '{}' in {}",
        adapter.model_id(),
        config.bedrock.region
    );

    let app = router(AppState { adapter }, &config.cors)?;

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
