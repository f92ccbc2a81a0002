use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use quill_store::StoreError;

use super::schemas::ErrorResponse;

/// Message returned for every store failure. Internal detail stays in the logs.
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// Errors a request handler can return.
///
/// Each variant maps to exactly one status code in [`ApiError::status`].
#[derive(Debug, Error)]
pub enum ApiError {
    /// No post has the requested identifier, or the identifier is malformed.
    #[error("Blog post not found")]
    PostNotFound,

    /// No post is filed under the requested category.
    #[error("No blog posts found in this category")]
    CategoryEmpty,

    /// The post store failed.
    #[error("store error: {0}")]
    Store(#[from] StoreError),
}

impl ApiError {
    /// The HTTP status this error is reported with.
    pub fn status(&self) -> StatusCode {
        match self {
            Self::PostNotFound | Self::CategoryEmpty => StatusCode::NOT_FOUND,
            Self::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match &self {
            Self::PostNotFound | Self::CategoryEmpty => self.to_string(),
            Self::Store(e) => {
                tracing::error!(error = %e, "post store request failed");
                INTERNAL_ERROR_MESSAGE.to_owned()
            }
        };

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_variants_map_to_404() {
        assert_eq!(ApiError::PostNotFound.status(), StatusCode::NOT_FOUND);
        assert_eq!(ApiError::CategoryEmpty.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn store_failures_map_to_500() {
        let err = ApiError::from(StoreError::Connection("refused".into()));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn messages_match_wire_contract() {
        assert_eq!(ApiError::PostNotFound.to_string(), "Blog post not found");
        assert_eq!(
            ApiError::CategoryEmpty.to_string(),
            "No blog posts found in this category"
        );
    }
}
