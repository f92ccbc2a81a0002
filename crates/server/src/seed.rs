//! Destructive reseeding of the post collection from a JSON fixture.
//!
//! Seeding deletes every stored post and bulk-inserts the fixture. It runs
//! only when explicitly requested: at startup when `[seed] enabled` (or
//! `RESET_DB`) is set, or through the `seed` subcommand. The server binds its
//! listener only after a startup seed has finished, successfully or not.

use std::collections::HashSet;
use std::path::Path;

use thiserror::Error;
use tracing::{debug, error, info, warn};

use quill_core::{BlogPost, PostId};
use quill_store::{PostStore, StoreError};

use crate::config::SeedConfig;

/// The fixture compiled into the binary, used when no `fixture_path` is configured.
pub const BUNDLED_FIXTURE: &str = include_str!("../data/blogposts.json");

/// Errors that can occur while seeding.
#[derive(Debug, Error)]
pub enum SeedError {
    /// The fixture file could not be read.
    #[error("failed to read fixture {path}: {source}")]
    FixtureRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The fixture is not a JSON array of posts.
    #[error("invalid fixture: {0}")]
    FixtureParse(#[from] serde_json::Error),

    /// Two fixture records share an identifier.
    #[error("fixture contains duplicate post id {0}")]
    DuplicateId(PostId),

    /// The store rejected the delete or the insert.
    #[error("store error: {0}")]
    Store(#[from] StoreError),
}

/// Outcome of a completed seed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedReport {
    /// Posts removed before loading the fixture.
    pub deleted: u64,
    /// Posts inserted from the fixture.
    pub inserted: u64,
}

/// Parse fixture JSON into posts, rejecting duplicate identifiers.
pub fn parse_fixture(json: &str) -> Result<Vec<BlogPost>, SeedError> {
    let posts: Vec<BlogPost> = serde_json::from_str(json)?;
    let mut seen = HashSet::with_capacity(posts.len());
    for post in &posts {
        if !seen.insert(post.id) {
            return Err(SeedError::DuplicateId(post.id));
        }
    }
    Ok(posts)
}

/// Load the fixture from `path`, or the bundled fixture when `path` is `None`.
pub async fn load_fixture(path: Option<&Path>) -> Result<Vec<BlogPost>, SeedError> {
    match path {
        Some(path) => {
            let contents = tokio::fs::read_to_string(path).await.map_err(|source| {
                SeedError::FixtureRead {
                    path: path.display().to_string(),
                    source,
                }
            })?;
            parse_fixture(&contents)
        }
        None => parse_fixture(BUNDLED_FIXTURE),
    }
}

/// Replace the entire collection with `posts`.
///
/// Concurrent readers may observe the collection empty or partially filled
/// while this runs.
pub async fn seed(store: &dyn PostStore, posts: &[BlogPost]) -> Result<SeedReport, SeedError> {
    let deleted = store.delete_all().await?;
    debug!(deleted, "cleared post collection");
    let inserted = store.insert_many(posts).await?;
    Ok(SeedReport { deleted, inserted })
}

/// Load the configured fixture and seed `store` with it.
pub async fn seed_from_config(
    store: &dyn PostStore,
    config: &SeedConfig,
) -> Result<SeedReport, SeedError> {
    let posts = load_fixture(config.fixture_path.as_deref().map(Path::new)).await?;
    info!(
        fixture = config.fixture_path.as_deref().unwrap_or("<bundled>"),
        posts = posts.len(),
        "reseeding post collection"
    );
    seed(store, &posts).await
}

/// Startup seeding step.
///
/// Does nothing unless seeding is enabled. Failures are logged and swallowed
/// so the server still starts on whatever data the store holds.
pub async fn run_startup_seed(store: &dyn PostStore, config: &SeedConfig) -> Option<SeedReport> {
    if !config.enabled {
        debug!("reseed disabled, leaving post collection untouched");
        return None;
    }

    warn!("reseed enabled: every stored post will be deleted");
    match seed_from_config(store, config).await {
        Ok(report) => {
            info!(
                deleted = report.deleted,
                inserted = report.inserted,
                "database seeded"
            );
            Some(report)
        }
        Err(e) => {
            error!(error = %e, "database seed failed, serving existing data");
            None
        }
    }
}
