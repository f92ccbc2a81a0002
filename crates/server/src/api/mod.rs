pub mod error;
pub mod health;
pub mod index;
pub mod openapi;
pub mod posts;
pub mod schemas;

use std::sync::Arc;

use axum::routing::get;
use axum::{Json, Router};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;

use quill_store::PostStore;

use self::openapi::ApiDoc;

pub use self::error::ApiError;

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn PostStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn PostStore>) -> Self {
        Self { store }
    }
}

/// Build the Axum router with the blog post routes, health check and
/// OpenAPI document.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index::index))
        .route("/health", get(health::health))
        .route(
            "/api-doc/openapi.json",
            get(|| async { Json(ApiDoc::openapi()) }),
        )
        // Blog posts
        .route("/api/blogposts", get(posts::list_posts))
        .route("/api/blogposts/{id}", get(posts::get_post))
        .route(
            "/api/blogposts/category/{category}",
            get(posts::list_posts_by_category),
        )
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
