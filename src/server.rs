// ABOUTME: HTTP server assembly and lifecycle for the Goal Paces API
// ABOUTME: Builds the axum router with middleware layers and serves it with graceful shutdown
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Goal Paces Contributors

//! Server assembly
//!
//! Layer order, outermost first: request id, HTTP trace, CORS, timeout,
//! panic recovery. The request id layer wraps everything so that timeouts,
//! unmatched routes, and recovered panics still carry an `x-request-id` header.

use crate::config::ServerConfig;
use crate::middleware::{request_id_middleware, setup_cors};
use crate::routes::{HealthRoutes, PaceRoutes};
use anyhow::{Context, Result};
use axum::{
    http::Uri,
    middleware,
    response::{IntoResponse, Response},
    Router,
};
use goal_paces_core::errors::AppError;
use goal_paces_engine::PaceCalculator;
use std::any::Any;
use std::time::Duration;
use tower_http::{catch_panic::CatchPanicLayer, timeout::TimeoutLayer, trace::TraceLayer};
use tracing::{error, info};

/// Build the complete application router
#[must_use]
pub fn build_router(config: &ServerConfig) -> Router {
    let calculator = PaceCalculator::new();

    let routes = Router::new()
        .merge(HealthRoutes::routes())
        .merge(PaceRoutes::routes(calculator))
        .fallback(handle_not_found);

    apply_middleware(routes, config)
}

/// Wrap a router in the standard middleware stack
#[must_use]
pub fn apply_middleware(routes: Router, config: &ServerConfig) -> Router {
    routes
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.request_timeout_secs,
        )))
        .layer(setup_cors(&config.cors))
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(request_id_middleware))
}

async fn handle_not_found(uri: Uri) -> AppError {
    AppError::not_found(format!("Route {}", uri.path()))
}

#[allow(clippy::needless_pass_by_value)]
fn handle_panic(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = panic
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| panic.downcast_ref::<&str>().copied())
        .unwrap_or("non-string panic payload");

    error!(detail, "Request handler panicked");
    AppError::internal("Request handler failed").into_response()
}

/// Bind the configured address and serve until a shutdown signal arrives
///
/// # Errors
///
/// Returns an error if the listener cannot bind or the server fails
pub async fn run(config: ServerConfig) -> Result<()> {
    let app = build_router(&config);
    let address = config.bind_address();

    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind HTTP listener on {address}"))?;

    info!("Server listening on http://{address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server terminated unexpectedly")?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    info!("Shutdown signal received, starting graceful shutdown");
}
