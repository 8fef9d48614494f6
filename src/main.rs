use std::sync::Arc;

use biryani_api::api::{self, AppState};
use biryani_api::config::AppConfig;
use biryani_api::storage::{DocumentStore, MongoStore};
use dotenv::dotenv;
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .compact()
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set tracing subscriber");

    dotenv().ok();

    info!("🍛 Starting Al Rehman Biryani API");

    // Load configuration
    let config = AppConfig::load();
    info!("📋 Configuration loaded");
    info!("   - Database: {}", config.database_name);
    info!("   - Port: {}", config.port);

    // Connect the document store (never fatal, fallback content covers reads)
    info!("💾 Connecting document store...");
    let store = DocumentStore::Mongo(MongoStore::connect(&config).await);
    let port = config.port;

    let state = AppState {
        store: Arc::new(store),
        config: Arc::new(config),
    };

    let app = api::router(state);

    // Start server
    let addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!("🌐 Server listening on http://{}", addr);
    info!("");
    info!("📡 Available endpoints:");
    info!("   GET  /                 - Liveness message");
    info!("   GET  /test             - Store diagnostics");
    info!("   GET  /api/menu         - Menu items");
    info!("   POST /api/orders/daig  - Submit daig order");
    info!("   GET  /api/reviews      - Customer reviews");
    info!("   GET  /api/branches     - Branch locations");
    info!("   POST /api/inquiry      - Submit contact inquiry");
    info!("");
    info!("✨ Server is ready to accept requests!");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("👋 Server shutting down gracefully");

    Ok(())
}

/// Graceful shutdown handler
async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("🛑 Shutdown signal received");
}
