//! Seed-then-serve flow: startup seeding followed by requests to the router.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::json;
use tower::ServiceExt;

use quill_core::BlogPost;
use quill_server::api::{self, AppState};
use quill_server::config::SeedConfig;
use quill_server::seed::{self, BUNDLED_FIXTURE};
use quill_store::PostStore;
use quill_store::testing::test_post;
use quill_store_memory::MemoryPostStore;

// -- Helpers --------------------------------------------------------------

fn enabled_seed() -> SeedConfig {
    SeedConfig {
        enabled: true,
        fixture_path: None,
    }
}

async fn seeded_app(store: Arc<dyn PostStore>, config: &SeedConfig) -> axum::Router {
    seed::run_startup_seed(store.as_ref(), config).await;
    api::router(AppState::new(store))
}

async fn get(app: &axum::Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&body).unwrap())
}

fn posts(json: serde_json::Value) -> Vec<BlogPost> {
    serde_json::from_value(json).unwrap()
}

// -- Tests ----------------------------------------------------------------

#[tokio::test]
async fn serves_bundled_fixture_after_reseed() {
    let store: Arc<dyn PostStore> = Arc::new(MemoryPostStore::new());
    let app = seeded_app(store, &enabled_seed()).await;

    let expected: Vec<BlogPost> = serde_json::from_str(BUNDLED_FIXTURE).unwrap();

    let (status, json) = get(&app, "/api/blogposts").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(posts(json).len(), expected.len());

    let (_, json) = get(&app, "/api/blogposts/category/tech").await;
    let tech_ids: Vec<i64> = posts(json).iter().map(|p| p.id).collect();
    assert_eq!(tech_ids, vec![1, 4, 7]);

    let (_, json) = get(&app, "/api/blogposts/1").await;
    let post: BlogPost = serde_json::from_value(json).unwrap();
    assert_eq!(post.title, "Getting Started with Rust");
}

#[tokio::test]
async fn reseed_discards_previous_posts() {
    let store: Arc<dyn PostStore> = Arc::new(MemoryPostStore::with_posts(vec![
        test_post(500, "archive"),
        test_post(501, "archive"),
    ]));
    let app = seeded_app(store, &enabled_seed()).await;

    let (status, _) = get(&app, "/api/blogposts/500").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, json) = get(&app, "/api/blogposts/category/archive").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json, json!({"error": "No blog posts found in this category"}));
}

#[tokio::test]
async fn disabled_seed_serves_existing_posts() {
    let store: Arc<dyn PostStore> =
        Arc::new(MemoryPostStore::with_posts(vec![test_post(500, "archive")]));
    let app = seeded_app(store, &SeedConfig::default()).await;

    let (_, json) = get(&app, "/api/blogposts").await;
    assert_eq!(posts(json), vec![test_post(500, "archive")]);
}

#[tokio::test]
async fn failed_seed_still_serves() {
    let store: Arc<dyn PostStore> =
        Arc::new(MemoryPostStore::with_posts(vec![test_post(500, "archive")]));
    let config = SeedConfig {
        enabled: true,
        fixture_path: Some("/nonexistent/quill/blogposts.json".into()),
    };
    let app = seeded_app(store, &config).await;

    let (status, _) = get(&app, "/health").await;
    assert_eq!(status, StatusCode::OK);

    let (_, json) = get(&app, "/api/blogposts").await;
    assert_eq!(posts(json).len(), 1);
}

#[tokio::test]
async fn empty_store_lists_nothing() {
    let app = seeded_app(Arc::new(MemoryPostStore::new()), &SeedConfig::default()).await;

    let (status, json) = get(&app, "/api/blogposts").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, json!([]));
}
