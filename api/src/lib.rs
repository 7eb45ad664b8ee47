//! HTTP surface: `GET /health` and `POST /ask`.

use std::{future::Future, sync::Arc};

pub mod app;
pub mod error_handler;
mod routes;

use axum::{
    Router,
    routing::{get, post},
};
use tokio::{net::TcpListener, signal};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};

pub use crate::{
    app::{app_config::AppConfig, app_state::AppState, cors::cors_layer},
    error_handler::{AppError, AppResult},
};
use crate::routes::{ask::ask_question_route::ask_question, health_route::health};

/// Builds the router with tracing and CORS layers.
pub fn router(state: Arc<AppState>, cors: CorsLayer) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/ask", post(ask_question))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Loads config from the environment and serves until Ctrl+C.
///
/// # Errors
/// Any configuration, startup or server error. Nothing is bound when
/// configuration or content preparation fails.
pub async fn start() -> Result<(), AppError> {
    let cfg = AppConfig::from_env()?;
    serve(cfg, shutdown_signal()).await
}

/// Builds state, binds `cfg.api_address` and serves until `shutdown` resolves.
///
/// # Errors
/// See [`start`].
pub async fn serve<S>(cfg: AppConfig, shutdown: S) -> Result<(), AppError>
where
    S: Future<Output = ()> + Send + 'static,
{
    let cors = cors_layer(&cfg.cors_origins)?;
    let state = Arc::new(AppState::build(&cfg).await?);

    let listener = TcpListener::bind(&cfg.api_address)
        .await
        .map_err(|source| AppError::Bind {
            addr: cfg.api_address.clone(),
            source,
        })?;
    info!(
        addr = %cfg.api_address,
        origins = ?cfg.cors_origins,
        "listening"
    );

    axum::serve(listener, router(state, cors))
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(AppError::Server)
}

/// Returns a future that resolves when Ctrl+C is pressed.
async fn shutdown_signal() {
    match signal::ctrl_c().await {
        Ok(()) => info!("shutdown signal received"),
        Err(e) => {
            warn!(error = %e, "failed to listen for shutdown signal");
            std::future::pending::<()>().await;
        }
    }
}
