use anyhow::Result;
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use resume_api::config::Config;
use resume_api::routes::build_router;
use resume_api::state::AppState;
use resume_api::templates::TemplateKind;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on malformed env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={},tower_http={}",
                env!("CARGO_CRATE_NAME"),
                &config.rust_log,
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Resume API v{}", env!("CARGO_PKG_VERSION"));
    info!("Templates available: {}", TemplateKind::available_names());
    info!("Request body limit: {} bytes", config.max_body_bytes);

    let port = config.port;
    let state = AppState::new(config);

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{port}").parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
