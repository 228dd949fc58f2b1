//! Core library for the feedback submission service.

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod store;
pub mod validation;

pub use config::AppConfig;
pub use error::{AppError, Result};
pub use extractors::SubmissionBody;
pub use handlers::create_routes;
pub use middleware::cors::{cors_layer, cors_layer_from_config};
pub use middleware::logging::logging_layer;
pub use models::{ApiResponse, FeedbackRecord, FeedbackSubmission, SubmissionReceipt};
pub use store::FeedbackStore;

use axum::Router;
use std::net::SocketAddr;
use tokio::signal;
use tower_http::services::ServeDir;
use tracing::info;

#[derive(Clone)]
pub struct AppState {
    pub app_name: String,
    pub version: String,
    pub store: FeedbackStore,
}

impl AppState {
    pub fn new(store: FeedbackStore) -> Self {
        Self {
            app_name: "Feedback Service".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            store,
        }
    }
}

pub fn create_app(state: AppState) -> Router {
    create_app_with_config(state, &AppConfig::default())
}

pub fn create_app_with_config(state: AppState, config: &AppConfig) -> Router {
    let mut router = Router::new().merge(create_routes());

    if let Some(static_dir) = &config.server.static_dir {
        router = router.fallback_service(ServeDir::new(static_dir));
    }

    router
        .layer(middleware::cors::cors_layer_from_config(&config.cors))
        .layer(middleware::logging::logging_layer())
        .with_state(state)
}

pub async fn run_server(app: Router, addr: SocketAddr) -> Result<()> {
    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, starting graceful shutdown");
        },
        _ = terminate => {
            info!("Received SIGTERM, starting graceful shutdown");
        },
    }
}
