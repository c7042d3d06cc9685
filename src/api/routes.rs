use axum::{
    middleware,
    routing::{delete, get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::middleware::{make_request_span, request_context_middleware};

use super::handlers;
use super::AppState;

/// Creates the application router with all routes
///
/// Every request gets a [`RequestContext`](crate::middleware::RequestContext)
/// before tracing starts, so spans carry the request ID and owner.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .nest("/api", api_routes())
        .layer(
            ServiceBuilder::new()
                .layer(middleware::from_fn(request_context_middleware))
                .layer(TraceLayer::new_for_http().make_span_with(make_request_span)),
        )
        .with_state(state)
}

/// Wardrobe routes under /api
fn api_routes() -> Router<AppState> {
    Router::new()
        // Wardrobe items
        .route("/items", get(handlers::list_items).post(handlers::create_item))
        .route("/items/analyze", post(handlers::analyze_image))
        .route("/items/:id", delete(handlers::delete_item))
        // Outfits
        .route("/recommend", get(handlers::recommend))
}
