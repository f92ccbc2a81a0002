use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Error response body.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Human-readable error message.
    #[schema(example = "Blog post not found")]
    pub error: String,
}

/// Health check response.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Service status indicator: `"ok"` or `"unavailable"`.
    #[schema(example = "ok")]
    pub status: String,
}

/// One entry in the API index.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct EndpointDoc {
    /// HTTP method.
    #[schema(example = "GET")]
    pub method: String,
    /// Route template, with parameters written `:name`.
    #[schema(example = "/api/blogposts/:id")]
    pub path: String,
    /// What the endpoint returns.
    pub description: String,
}

/// Response of `GET /`: a short description of the available endpoints.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ApiIndex {
    /// Greeting line.
    #[schema(example = "Welcome to the Blog API")]
    pub message: String,
    /// The blog post endpoints.
    pub available_endpoints: Vec<EndpointDoc>,
}
