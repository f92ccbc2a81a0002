use std::time::Duration;

/// Database used when neither the configuration nor the connection string names one.
pub const DEFAULT_DATABASE: &str = "blog";

/// Configuration for the MongoDB post store.
#[derive(Debug, Clone)]
pub struct MongoConfig {
    /// MongoDB connection string (e.g. `mongodb://localhost/projectMongo`).
    pub url: String,

    /// Database name. When `None`, the database in the connection string's
    /// path is used, falling back to [`DEFAULT_DATABASE`].
    pub database: Option<String>,

    /// Collection holding the posts.
    pub collection: String,

    /// How long the driver waits for a usable server before failing an operation.
    pub server_selection_timeout: Duration,
}

impl MongoConfig {
    /// Create a new configuration with the given URL and sensible defaults.
    ///
    /// Defaults:
    /// - `database`: taken from the URL
    /// - `collection`: `"blogposts"`
    /// - `server_selection_timeout`: 10 seconds
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            database: None,
            collection: "blogposts".to_owned(),
            server_selection_timeout: Duration::from_secs(10),
        }
    }

    /// Set the database name explicitly.
    #[must_use]
    pub fn with_database(mut self, database: impl Into<String>) -> Self {
        self.database = Some(database.into());
        self
    }

    /// Set the collection name.
    #[must_use]
    pub fn with_collection(mut self, collection: impl Into<String>) -> Self {
        self.collection = collection.into();
        self
    }

    /// Set the server selection timeout.
    #[must_use]
    pub fn with_server_selection_timeout(mut self, timeout: Duration) -> Self {
        self.server_selection_timeout = timeout;
        self
    }
}
