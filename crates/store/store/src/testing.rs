use std::collections::BTreeSet;

use quill_core::{BlogPost, PostId};

use crate::error::StoreError;
use crate::store::PostStore;

/// Build a post with predictable field values for tests.
pub fn test_post(id: PostId, category: &str) -> BlogPost {
    BlogPost {
        id,
        date: format!("2024-01-{:02}", id.rem_euclid(28) + 1),
        title: format!("Post {id}"),
        content: format!("Body of post {id}"),
        author: "Test Author".to_owned(),
        comments_count: id,
        likes: id * 10,
        category: category.to_owned(),
    }
}

/// A small set of posts spread over three categories.
pub fn sample_posts() -> Vec<BlogPost> {
    vec![
        test_post(1, "tech"),
        test_post(2, "travel"),
        test_post(3, "tech"),
        test_post(4, "food"),
        test_post(5, "Tech"),
    ]
}

/// Run the full post store conformance test suite.
///
/// Call this from your backend's test module with a fresh store instance.
/// Every check starts by clearing the collection, so the store must be
/// dedicated to the test run.
///
/// # Errors
///
/// Returns an error if any conformance test fails.
pub async fn run_conformance_tests(store: &dyn PostStore) -> Result<(), StoreError> {
    test_empty_collection(store).await?;
    test_insert_and_list(store).await?;
    test_repeated_list_is_stable(store).await?;
    test_get_by_id(store).await?;
    test_get_missing(store).await?;
    test_category_partition(store).await?;
    test_category_is_exact(store).await?;
    test_delete_all(store).await?;
    test_duplicate_rejected(store).await?;
    test_insert_empty(store).await?;
    test_ping(store).await?;
    Ok(())
}

async fn reset(store: &dyn PostStore) -> Result<(), StoreError> {
    store.delete_all().await?;
    Ok(())
}

fn ids(posts: &[BlogPost]) -> BTreeSet<PostId> {
    posts.iter().map(|p| p.id).collect()
}

async fn test_empty_collection(store: &dyn PostStore) -> Result<(), StoreError> {
    reset(store).await?;
    assert!(store.list().await?.is_empty(), "list on empty store");
    assert_eq!(store.count().await?, 0);
    assert!(store.list_by_category("tech").await?.is_empty());
    Ok(())
}

async fn test_insert_and_list(store: &dyn PostStore) -> Result<(), StoreError> {
    reset(store).await?;
    let posts = sample_posts();
    let inserted = store.insert_many(&posts).await?;
    assert_eq!(inserted, posts.len() as u64);
    assert_eq!(store.count().await?, posts.len() as u64);

    let listed = store.list().await?;
    assert_eq!(ids(&listed), ids(&posts), "list should return every post");
    for post in &posts {
        assert!(listed.contains(post), "post {} should round-trip", post.id);
    }
    Ok(())
}

async fn test_repeated_list_is_stable(store: &dyn PostStore) -> Result<(), StoreError> {
    reset(store).await?;
    store.insert_many(&sample_posts()).await?;
    let first = store.list().await?;
    let second = store.list().await?;
    assert_eq!(ids(&first), ids(&second), "reads without writes must agree");
    Ok(())
}

async fn test_get_by_id(store: &dyn PostStore) -> Result<(), StoreError> {
    reset(store).await?;
    let posts = sample_posts();
    store.insert_many(&posts).await?;
    for post in &posts {
        let found = store.get(post.id).await?;
        assert_eq!(found.as_ref(), Some(post), "get({}) should match", post.id);
    }
    Ok(())
}

async fn test_get_missing(store: &dyn PostStore) -> Result<(), StoreError> {
    reset(store).await?;
    store.insert_many(&sample_posts()).await?;
    assert!(store.get(999).await?.is_none(), "unknown id should be None");
    assert!(store.get(-1).await?.is_none());
    Ok(())
}

async fn test_category_partition(store: &dyn PostStore) -> Result<(), StoreError> {
    reset(store).await?;
    let posts = sample_posts();
    store.insert_many(&posts).await?;

    let categories: BTreeSet<&str> = posts.iter().map(|p| p.category.as_str()).collect();
    let mut union = BTreeSet::new();
    for category in categories {
        let found = store.list_by_category(category).await?;
        let expected: BTreeSet<PostId> = posts
            .iter()
            .filter(|p| p.in_category(category))
            .map(|p| p.id)
            .collect();
        assert_eq!(ids(&found), expected, "category {category} subset");
        assert!(found.iter().all(|p| p.category == category));
        union.extend(ids(&found));
    }
    assert_eq!(union, ids(&posts), "categories should cover every post");
    Ok(())
}

async fn test_category_is_exact(store: &dyn PostStore) -> Result<(), StoreError> {
    reset(store).await?;
    store.insert_many(&sample_posts()).await?;
    let lower = store.list_by_category("tech").await?;
    assert_eq!(ids(&lower), BTreeSet::from([1, 3]));
    let upper = store.list_by_category("Tech").await?;
    assert_eq!(ids(&upper), BTreeSet::from([5]));
    assert!(store.list_by_category("te").await?.is_empty());
    assert!(store.list_by_category("missing").await?.is_empty());
    Ok(())
}

async fn test_delete_all(store: &dyn PostStore) -> Result<(), StoreError> {
    reset(store).await?;
    let posts = sample_posts();
    store.insert_many(&posts).await?;
    let deleted = store.delete_all().await?;
    assert_eq!(deleted, posts.len() as u64);
    assert_eq!(store.count().await?, 0);
    assert_eq!(store.delete_all().await?, 0, "second delete removes nothing");
    Ok(())
}

async fn test_duplicate_rejected(store: &dyn PostStore) -> Result<(), StoreError> {
    reset(store).await?;
    store.insert_many(&[test_post(1, "tech")]).await?;
    let result = store.insert_many(&[test_post(1, "travel")]).await;
    assert!(
        matches!(result, Err(StoreError::Duplicate(1))),
        "inserting an existing id should fail, got {result:?}"
    );
    let kept = store.get(1).await?.expect("first insert should remain");
    assert_eq!(kept.category, "tech");
    Ok(())
}

async fn test_insert_empty(store: &dyn PostStore) -> Result<(), StoreError> {
    reset(store).await?;
    assert_eq!(store.insert_many(&[]).await?, 0);
    assert_eq!(store.count().await?, 0);
    Ok(())
}

async fn test_ping(store: &dyn PostStore) -> Result<(), StoreError> {
    store.ping().await
}
