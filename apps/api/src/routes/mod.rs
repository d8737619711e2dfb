pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::composer::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Style catalogue
        .route("/api/v1/styles", get(handlers::handle_list_styles))
        .route("/api/v1/styles/:id", get(handlers::handle_get_style))
        .route(
            "/api/v1/styles/:id/sample",
            get(handlers::handle_style_sample),
        )
        // Rendering
        .route("/api/v1/render/preview", post(handlers::handle_preview))
        .route("/api/v1/render/html", post(handlers::handle_render_html))
        .with_state(state)
}
