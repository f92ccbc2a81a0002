use thiserror::Error;

use quill_store::StoreError;

use crate::seed::SeedError;

/// Errors that can occur when starting or running the Quill server.
///
/// Request-level failures are reported through [`crate::api::ApiError`]
/// instead; these only abort startup or a one-shot subcommand.
#[derive(Debug, Error)]
pub enum ServerError {
    /// A configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// An I/O error (e.g. binding the listener).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// The post store could not be constructed.
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    /// The `seed` subcommand failed.
    #[error("seed failed: {0}")]
    Seed(#[from] SeedError),
}
