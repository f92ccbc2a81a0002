use axum::Json;

use super::schemas::{ApiIndex, EndpointDoc};

const ENDPOINTS: [(&str, &str); 3] = [
    ("/api/blogposts", "Lists all blog posts"),
    ("/api/blogposts/:id", "Gets a single blog post by ID"),
    ("/api/blogposts/category/:category", "Gets blog posts by category"),
];

/// `GET /` -- greeting plus a list of the blog post endpoints.
#[utoipa::path(
    get,
    path = "/",
    tag = "Index",
    summary = "API index",
    responses(
        (status = 200, description = "Available endpoints", body = ApiIndex)
    )
)]
pub async fn index() -> Json<ApiIndex> {
    Json(ApiIndex {
        message: "Welcome to the Blog API".into(),
        available_endpoints: ENDPOINTS
            .iter()
            .map(|(path, description)| EndpointDoc {
                method: "GET".into(),
                path: (*path).to_owned(),
                description: (*description).to_owned(),
            })
            .collect(),
    })
}
