use quill_core::PostId;

/// Errors that can occur during post store operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The backend could not be reached or the client could not be built.
    #[error("connection error: {0}")]
    Connection(String),

    /// The backend rejected or failed a read or write.
    #[error("query error: {0}")]
    Query(String),

    /// A stored document could not be decoded into a post.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// An insert would have created a second post with an existing identifier.
    #[error("duplicate post id: {0}")]
    Duplicate(PostId),
}
