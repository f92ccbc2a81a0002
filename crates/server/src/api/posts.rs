use axum::Json;
use axum::extract::rejection::PathRejection;
use axum::extract::{Path, State};

use quill_core::{BlogPost, parse_post_id};

use super::schemas::ErrorResponse;
use super::{ApiError, AppState};

/// `GET /api/blogposts` -- every stored post.
#[utoipa::path(
    get,
    path = "/api/blogposts",
    tag = "Posts",
    summary = "List posts",
    responses(
        (status = 200, description = "All blog posts, possibly empty", body = Vec<BlogPost>),
        (status = 500, description = "Post store failure", body = ErrorResponse)
    )
)]
pub async fn list_posts(State(state): State<AppState>) -> Result<Json<Vec<BlogPost>>, ApiError> {
    let posts = state.store.list().await?;
    Ok(Json(posts))
}

/// `GET /api/blogposts/{id}` -- a single post by its numeric identifier.
///
/// An identifier that is not an integer (including one that does not
/// percent-decode to UTF-8) cannot match any post and is answered the same
/// way as an unknown one.
#[utoipa::path(
    get,
    path = "/api/blogposts/{id}",
    tag = "Posts",
    summary = "Get post",
    params(("id" = String, Path, description = "Post identifier")),
    responses(
        (status = 200, description = "The blog post", body = BlogPost),
        (status = 404, description = "No post with this identifier", body = ErrorResponse),
        (status = 500, description = "Post store failure", body = ErrorResponse)
    )
)]
pub async fn get_post(
    State(state): State<AppState>,
    id: Result<Path<String>, PathRejection>,
) -> Result<Json<BlogPost>, ApiError> {
    let Ok(Path(raw)) = id else {
        tracing::debug!("undecodable post id");
        return Err(ApiError::PostNotFound);
    };
    let Some(id) = parse_post_id(&raw) else {
        tracing::debug!(id = %raw, "malformed post id");
        return Err(ApiError::PostNotFound);
    };

    state
        .store
        .get(id)
        .await?
        .map(Json)
        .ok_or(ApiError::PostNotFound)
}

/// `GET /api/blogposts/category/{category}` -- posts whose category matches
/// exactly. Matching is case-sensitive; a category that does not
/// percent-decode to UTF-8 matches nothing.
#[utoipa::path(
    get,
    path = "/api/blogposts/category/{category}",
    tag = "Posts",
    summary = "List posts by category",
    params(("category" = String, Path, description = "Category, matched case-sensitively")),
    responses(
        (status = 200, description = "Posts in the category", body = Vec<BlogPost>),
        (status = 404, description = "No post in this category", body = ErrorResponse),
        (status = 500, description = "Post store failure", body = ErrorResponse)
    )
)]
pub async fn list_posts_by_category(
    State(state): State<AppState>,
    category: Result<Path<String>, PathRejection>,
) -> Result<Json<Vec<BlogPost>>, ApiError> {
    let Ok(Path(category)) = category else {
        tracing::debug!("undecodable category");
        return Err(ApiError::CategoryEmpty);
    };
    let posts = state.store.list_by_category(&category).await?;
    if posts.is_empty() {
        return Err(ApiError::CategoryEmpty);
    }
    Ok(Json(posts))
}
