use axum::Router;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::handlers::{
    apply_handler, board_handler, facets_handler, featured_handler, health_handler, job_handler,
    latest_handler, related_handler, root_handler, search_handler,
};
use crate::state::AppState;

pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    Router::new()
        .route("/", get(root_handler))
        .route("/health", get(health_handler))
        .route("/facets", get(facets_handler))
        .route("/board", get(board_handler))
        .route("/jobs", get(search_handler))
        .route("/jobs/featured", get(featured_handler))
        .route("/jobs/latest", get(latest_handler))
        .route("/jobs/{id}", get(job_handler))
        .route("/jobs/{id}/related", get(related_handler))
        .route("/jobs/{id}/apply", post(apply_handler))
        .layer(trace_layer)
        .layer(cors)
        .with_state(state)
}
