mod api;
mod config;
mod error;
mod model;

use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "summarization_gateway=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = config::Config::from_env()?;
    tracing::info!(
        "Starting summarization gateway on port {} with model server at {}",
        config.port,
        config.model_server_url
    );

    // Connect to the model server. This is the one expensive step in the
    // process lifecycle; every request afterwards runs against this handle.
    let model = model::HttpModelClient::connect(&config).await?;
    tracing::info!("Model server reachable, serving {}", config.model_id);

    // Create shared state
    let state = Arc::new(api::AppState {
        config: config.clone(),
        model: Arc::new(model),
    });

    // Build router
    let app = api::router(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port)).await?;
    tracing::info!("Gateway listening on 0.0.0.0:{}", config.port);

    axum::serve(listener, app).await?;

    Ok(())
}
