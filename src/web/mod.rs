pub mod error;
pub mod handlers;
pub mod state;

use crate::config::AppConfig;
use crate::error::CricError;
use axum::Router;
use axum::http::StatusCode;
use axum::routing::{get, post};
use state::AppState;
use std::time::Duration;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

const REQUEST_TIMEOUT_SECS: u64 = 300;

pub fn make_app(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/health", get(handlers::health))
        .route("/api/queries", get(handlers::list_queries))
        .route("/api/queries/run", post(handlers::run_query))
        .route("/api/tables", get(handlers::list_tables))
        .route("/api/tables/{name}", get(handlers::preview_table))
        .route("/api/tables/{name}/columns", get(handlers::table_columns))
        .route("/api/players/search", get(handlers::search_players))
        .route("/api/players/{id}", get(handlers::player_report))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(REQUEST_TIMEOUT_SECS),
        ))
        .layer(CatchPanicLayer::new())
}

/// Bind the configured address and serve the dashboard until Ctrl+C or SIGTERM.
pub async fn serve(config: AppConfig) -> Result<(), CricError> {
    let addr = config.server.bind_addr();
    if config.database.is_none() {
        tracing::warn!("no database credentials configured; SQL pages will report an error");
    }
    if config.api.is_none() {
        tracing::warn!("RAPIDAPI_KEY not set; player lookup will report an error");
    }

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| CricError::Connection {
            message: format!("cannot bind {}: {}", addr, e),
        })?;
    let local = listener.local_addr()?;
    tracing::info!("Listening on http://{}", local);

    axum::serve(listener, make_app(AppState::new(config)))
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

/// Resolves on Ctrl+C or SIGTERM. A handler that fails to install never fires.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => tracing::warn!("Ctrl+C received, starting graceful shutdown"),
        () = terminate => tracing::warn!("SIGTERM received, starting graceful shutdown"),
    }
}
