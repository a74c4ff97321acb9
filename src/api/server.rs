//! HTTP API server

use axum::extract::DefaultBodyLimit;
use axum::middleware;
use axum::routing::{get, post};
use axum::Router;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::error::Result;
use crate::guard::{route_guard, RouteClassifier};
use crate::session::SessionVerifier;

use super::routes;

/// Application state shared across handlers
///
/// Immutable after startup; requests share nothing mutable.
pub struct AppState {
    pub config: Config,
    pub classifier: RouteClassifier,
    pub verifier: SessionVerifier,
}

pub type SharedState = Arc<AppState>;

impl AppState {
    pub fn from_config(config: Config) -> Result<SharedState> {
        let classifier = RouteClassifier::from_config(&config.routes);
        let verifier = SessionVerifier::from_config(&config.provider)?;

        Ok(Arc::new(AppState {
            config,
            classifier,
            verifier,
        }))
    }
}

/// Run the HTTP API server
pub async fn run_server(config: Config, host: &str, port: u16) -> Result<()> {
    let state = AppState::from_config(config)?;
    let app = create_router(state);

    let addr = format!("{}:{}", host, port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the router with all routes
pub fn create_router(state: SharedState) -> Router {
    let upload_limit = state.config.upload.max_size_bytes + 16 * 1024;

    Router::new()
        // Session endpoints
        .route("/auth/set-session", post(routes::set_session))
        .route("/auth/verify-session", post(routes::verify_session))
        .route("/auth/logout", post(routes::logout))
        // API routes
        .route("/api/health", get(routes::health))
        .route(
            "/api/resumes",
            post(routes::upload_resume).layer(DefaultBodyLimit::max(upload_limit)),
        )
        .fallback(routes::not_found)
        // Middleware
        .layer(middleware::from_fn_with_state(state.clone(), route_guard))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .with_state(state)
}
