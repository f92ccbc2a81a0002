use serde::Deserialize;

/// Configuration for the post store backend.
#[derive(Debug, Deserialize)]
pub struct StoreConfig {
    /// Which backend to use: `"mongodb"` or `"memory"`.
    #[serde(default = "default_backend")]
    pub backend: String,

    /// Connection URL for the backend (e.g. `mongodb://localhost/projectMongo`).
    #[serde(default = "default_url")]
    pub url: String,

    /// Database name. Defaults to the database named in `url`.
    pub database: Option<String>,

    /// Collection holding the posts.
    #[serde(default = "default_collection")]
    pub collection: String,

    /// Seconds the driver waits for a reachable server before failing an operation.
    #[serde(default = "default_server_selection_timeout")]
    pub server_selection_timeout_seconds: u64,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            backend: default_backend(),
            url: default_url(),
            database: None,
            collection: default_collection(),
            server_selection_timeout_seconds: default_server_selection_timeout(),
        }
    }
}

fn default_backend() -> String {
    "mongodb".to_owned()
}

fn default_url() -> String {
    "mongodb://localhost/projectMongo".to_owned()
}

fn default_collection() -> String {
    "blogposts".to_owned()
}

fn default_server_selection_timeout() -> u64 {
    10
}
