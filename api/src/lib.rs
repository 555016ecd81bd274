//! HTTP surface of the complexity analyzer.

use std::sync::Arc;

mod core;
pub mod error_handler;
mod middleware_layer;
mod routes;

pub use crate::core::{app_state::AppState, config::ApiConfig};
pub use error_handler::AppError;
pub use middleware_layer::json_extractor::REQUEST_ID_HEADER;

use axum::{
    Router, middleware,
    routing::{get, post},
};
use tokio::{net::TcpListener, signal};
use tracing::{info, warn};

use crate::{
    middleware_layer::json_extractor::json_error_mapper,
    routes::{
        analyze::analyze_route::analyze_code, docs_route::docs, not_found_route::not_found,
        root_route::root,
    },
};

/// Build the router with all routes and middleware. Used by [`start`] and tests.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/docs", get(docs))
        .route("/analyze", post(analyze_code))
        .fallback(not_found)
        .layer(middleware::from_fn(json_error_mapper))
        .with_state(state)
}

pub async fn start(config: ApiConfig) -> Result<(), AppError> {
    let state = Arc::new(AppState::from_config(&config));
    let app = router(state);

    // Bind to address
    let listener = TcpListener::bind(&config.address)
        .await
        .map_err(AppError::Bind)?;

    info!(
        address = %config.address,
        provider = %config.llm.provider,
        model = %config.llm.model,
        "{} listening",
        config.service_name
    );

    // Start server with graceful shutdown on Ctrl+C
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(AppError::Server)?;

    info!("server stopped");
    Ok(())
}

/// Returns a future that resolves when Ctrl+C is pressed
async fn shutdown_signal() {
    if let Err(e) = signal::ctrl_c().await {
        // Without a signal handler the server runs until killed.
        warn!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}
