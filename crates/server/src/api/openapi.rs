#![allow(clippy::needless_for_each)]

use quill_core::BlogPost;

use super::schemas::{ApiIndex, EndpointDoc, ErrorResponse, HealthResponse};

#[derive(utoipa::OpenApi)]
#[openapi(
    info(
        title = "Quill Blog API",
        version = "0.1.0",
        description = "Read-only HTTP API over a collection of blog posts.",
        license(name = "Apache-2.0")
    ),
    tags(
        (name = "Index", description = "API index"),
        (name = "Health", description = "Service health"),
        (name = "Posts", description = "Blog post queries")
    ),
    paths(
        super::index::index,
        super::health::health,
        super::posts::list_posts,
        super::posts::get_post,
        super::posts::list_posts_by_category,
    ),
    components(schemas(
        BlogPost,
        ErrorResponse,
        HealthResponse,
        ApiIndex,
        EndpointDoc,
    ))
)]
pub struct ApiDoc;
