use async_trait::async_trait;

use quill_core::{BlogPost, PostId};

use crate::error::StoreError;

/// Trait for blog post storage backends.
///
/// A store wraps exactly one collection of [`BlogPost`] documents.
/// Implementations must be `Send + Sync` to be shared across request
/// handlers; any internal concurrency control is the backend's concern.
#[async_trait]
pub trait PostStore: Send + Sync {
    /// Return every post in backend-native order.
    async fn list(&self) -> Result<Vec<BlogPost>, StoreError>;

    /// Return the post whose `id` equals `id`, if any.
    async fn get(&self, id: PostId) -> Result<Option<BlogPost>, StoreError>;

    /// Return every post whose category equals `category` exactly.
    async fn list_by_category(&self, category: &str) -> Result<Vec<BlogPost>, StoreError>;

    /// Remove every post. Returns the number of posts deleted.
    async fn delete_all(&self) -> Result<u64, StoreError>;

    /// Insert `posts` in order. Returns the number of posts inserted.
    ///
    /// Fails with [`StoreError::Duplicate`] if any identifier already exists
    /// in the collection.
    async fn insert_many(&self, posts: &[BlogPost]) -> Result<u64, StoreError>;

    /// Return the number of posts in the collection.
    async fn count(&self) -> Result<u64, StoreError>;

    /// Check that the backend is reachable.
    ///
    /// In-process backends are always reachable, so the default returns `Ok`.
    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}
