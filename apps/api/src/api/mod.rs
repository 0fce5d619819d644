// API layer module (adapters for controllers)
// Follows Hexagonal Architecture - API is an adapter

pub mod errors;
pub mod extract;
pub mod handlers;
pub mod middleware;
pub mod state;
pub mod validation;

use axum::{
    routing::{get, put},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use handlers::{fallback, health, restaurants};
pub use state::AppState;

/// Builds the application router with its middleware stack
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Restaurant routes
        .route(
            "/restaurants",
            get(restaurants::list)
                .post(restaurants::create)
                .fallback(fallback::method_not_allowed),
        )
        .route(
            "/restaurants/:restaurant_id",
            put(restaurants::update)
                .delete(restaurants::destroy)
                .fallback(fallback::method_not_allowed),
        )
        .fallback(fallback::path_not_found)
        // Middleware
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        // Shared state
        .with_state(state)
}
