use axum::{
    http::StatusCode,
    middleware,
    routing::{delete, get, post},
    Json, Router,
};
use serde_json::{json, Value};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::middleware::request_id::{make_span, request_id_middleware};
use crate::state::AppState;

pub mod movies;
pub mod recommend;
pub mod watchlist;

/// Creates the application router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .nest("/api", api_routes())
        .with_state(state)
        .layer(TraceLayer::new_for_http().make_span_with(make_span))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(CorsLayer::permissive())
}

/// API routes under /api
fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/recommend/query", post(recommend::from_query))
        .route("/recommend/similar", get(recommend::similar))
        .route("/movies/latest", get(movies::latest))
        .route("/movies/trending", get(movies::trending))
        .route("/movies/upcoming", get(movies::upcoming))
        .route("/movies/search", get(movies::search))
        .route("/movies/:id", get(movies::details))
        .route("/watchlist", get(watchlist::list))
        .route("/watchlist/add", post(watchlist::add))
        .route("/watchlist/:id", delete(watchlist::remove))
}

/// Health check endpoint
async fn health_check() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}
