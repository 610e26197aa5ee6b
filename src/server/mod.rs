//! The catalog proxy.
//!
//! One endpoint, `GET /api/odooProducts?limit=&offset=`, logs into the ERP and
//! runs a single `search_read` on every request, then answers with
//! `{ "nextOffset": …, "items": […] }`. CORS is open to every origin.
//!
//! Nothing is cached between requests and remote failures are not retried:
//! the raw ERP error is returned as a 500.

pub mod error;
pub mod routes;
pub mod state;

use crate::config::ProxyConfig;
use crate::utils::error::Result;
use axum::{
    http::{header::CONTENT_TYPE, Method},
    routing::get,
    Router,
};
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

use routes::{health_handler, products_handler};
pub use state::AppState;

pub const PRODUCTS_PATH: &str = "/api/odooProducts";

pub fn router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(60 * 60));

    Router::new()
        .route(PRODUCTS_PATH, get(products_handler))
        .route("/health", get(health_handler))
        .layer(cors)
        .with_state(state)
}

/// Serve on an already bound listener until Ctrl+C / SIGTERM.
pub async fn serve(listener: TcpListener, config: &ProxyConfig) -> Result<()> {
    let app = router(AppState::new(config));

    info!("Server running on {}", listener.local_addr()?);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutting down...");
    Ok(())
}

pub async fn start_server(config: &ProxyConfig) -> Result<()> {
    let address = config.bind_address();
    info!("Binding to {address}");
    let listener = TcpListener::bind(&address).await?;
    serve(listener, config).await
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }

        info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                tracing::error!("Failed to install signal handler: {}", e);
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
}
