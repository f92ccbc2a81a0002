use async_trait::async_trait;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;

use quill_core::{BlogPost, PostId};
use quill_store::error::StoreError;
use quill_store::store::PostStore;

/// In-memory [`PostStore`] backed by a [`DashMap`]. Suitable for development
/// and testing.
///
/// Posts are keyed by their identifier. Listing returns posts ordered by id,
/// which stands in for the insertion order a document store would use.
#[derive(Debug, Default)]
pub struct MemoryPostStore {
    posts: DashMap<PostId, BlogPost>,
}

impl MemoryPostStore {
    /// Create a new, empty in-memory post store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with `posts`.
    ///
    /// Later duplicates of an identifier replace earlier ones.
    pub fn with_posts(posts: impl IntoIterator<Item = BlogPost>) -> Self {
        let store = Self::new();
        for post in posts {
            store.posts.insert(post.id, post);
        }
        store
    }

    fn collect_sorted(&self, filter: impl Fn(&BlogPost) -> bool) -> Vec<BlogPost> {
        let mut posts: Vec<BlogPost> = self
            .posts
            .iter()
            .filter(|entry| filter(entry.value()))
            .map(|entry| entry.value().clone())
            .collect();
        posts.sort_by_key(|p| p.id);
        posts
    }
}

#[async_trait]
impl PostStore for MemoryPostStore {
    async fn list(&self) -> Result<Vec<BlogPost>, StoreError> {
        Ok(self.collect_sorted(|_| true))
    }

    async fn get(&self, id: PostId) -> Result<Option<BlogPost>, StoreError> {
        Ok(self.posts.get(&id).map(|p| p.value().clone()))
    }

    async fn list_by_category(&self, category: &str) -> Result<Vec<BlogPost>, StoreError> {
        Ok(self.collect_sorted(|p| p.in_category(category)))
    }

    async fn delete_all(&self) -> Result<u64, StoreError> {
        let mut removed = 0u64;
        self.posts.retain(|_, _| {
            removed += 1;
            false
        });
        Ok(removed)
    }

    async fn insert_many(&self, posts: &[BlogPost]) -> Result<u64, StoreError> {
        // Ordered insert: posts before the first duplicate stay inserted.
        let mut inserted = 0u64;
        for post in posts {
            match self.posts.entry(post.id) {
                Entry::Occupied(_) => return Err(StoreError::Duplicate(post.id)),
                Entry::Vacant(slot) => {
                    slot.insert(post.clone());
                    inserted += 1;
                }
            }
        }
        Ok(inserted)
    }

    async fn count(&self) -> Result<u64, StoreError> {
        Ok(self.posts.len() as u64)
    }
}
