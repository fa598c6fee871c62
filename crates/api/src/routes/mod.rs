//! API routes

pub mod health;
pub mod storefront;
pub mod subdomains;

use axum::{
    extract::DefaultBodyLimit,
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::{routing::tenant_routing_middleware, state::AppState};

/// Create all routes, wrapped in tenant routing
pub fn create_router(state: AppState) -> Router {
    // Health check routes (at root level for infrastructure monitoring)
    let health_routes = Router::new()
        .route("/health", get(health::health))
        .route("/health/live", get(health::liveness))
        .route("/health/ready", get(health::readiness));

    // Public API routes - under /api/v1
    let api_v1_routes = Router::new()
        .route("/subdomains/check", post(subdomains::check_subdomain_availability));

    // Storefront routes (reached directly or through a subdomain rewrite)
    let storefront_routes = Router::new()
        .route("/:tenant", get(storefront::storefront_home))
        .route("/:tenant/*path", get(storefront::storefront_page));

    let app = Router::new()
        .merge(health_routes)
        .nest("/api/v1", api_v1_routes)
        .merge(storefront_routes)
        .fallback(storefront::not_found)
        .layer(DefaultBodyLimit::max(1024 * 1024)) // 1MB, only small JSON bodies expected
        .with_state(state.clone());

    // Rewrites must happen before route matching, so tenant routing wraps the
    // finished router instead of being one of its layers.
    Router::new()
        .fallback_service(app)
        .layer(middleware::from_fn_with_state(
            state,
            tenant_routing_middleware,
        ))
        .layer(TraceLayer::new_for_http())
}
