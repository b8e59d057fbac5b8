use subway_server::config::ServerConfig;
use subway_server::web::{AppState, create_router};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("{e}");
            std::process::exit(1);
        }
    };

    // Build app state over empty in-memory stores
    let state = AppState::default();
    let app = create_router(state);

    let listener = match tokio::net::TcpListener::bind(config.bind_addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!(addr = %config.bind_addr, "failed to bind: {e}");
            std::process::exit(1);
        }
    };

    info!("Subway server listening on http://{}", config.bind_addr);
    info!("API Endpoints:");
    info!("  GET    /health");
    info!("  POST   /stations             GET /stations");
    info!("  DELETE /stations/:id");
    info!("  POST   /lines                GET /lines");
    info!("  GET    /lines/:id            PUT /lines/:id   DELETE /lines/:id");
    info!("  POST   /lines/:id/sections   DELETE /lines/:id/sections?stationId=");
    info!("  GET    /paths?source=&target=");

    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!("server error: {e}");
        std::process::exit(1);
    }
}

/// Resolve on Ctrl-C.
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
    info!("shutting down");
}
