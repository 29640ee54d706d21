use axum::http::{header, HeaderValue, Method};
use axum::{routing::get, Router};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use super::auth;
use super::health;
use super::profiles;
use super::state::AppState;
use crate::config::CorsConfig;

/// Create a minimal router without state (for testing/backward compatibility)
/// Note: /ready endpoint is not available without state
pub fn create_router() -> Router {
    Router::new()
        .route("/", get(health::root_check))
        .route("/health", get(health::health_check))
        .route("/live", get(health::live_check))
        .layer(TraceLayer::new_for_http())
}

/// Create the full router with application state
pub fn create_router_with_state(state: AppState, cors: &CorsConfig) -> anyhow::Result<Router> {
    let cors_layer = build_cors_layer(cors)?;

    Ok(Router::new()
        // Probe endpoints
        .route("/", get(health::root_check))
        .route("/health", get(health::health_check))
        .route("/ready", get(health::ready_check))
        .route("/live", get(health::live_check))
        // Authentication endpoints
        .nest("/auth", auth::create_auth_router())
        // Profile endpoints
        .nest("/profiles", profiles::create_profiles_router())
        // Add state and middleware
        .with_state(state)
        .layer(cors_layer)
        .layer(TraceLayer::new_for_http()))
}

/// The form pages run on a different port, so requests cross origins.
/// Cookies only travel when the exact origin is allowed and credentials
/// are enabled; a wildcard origin would make browsers drop them.
fn build_cors_layer(config: &CorsConfig) -> anyhow::Result<CorsLayer> {
    let origin: HeaderValue = config.allowed_origin.parse()?;

    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST, Method::PUT])
        .allow_headers([header::CONTENT_TYPE])
        .allow_credentials(true))
}
