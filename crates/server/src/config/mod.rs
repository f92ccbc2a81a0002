mod seed;
mod server;
mod store;
mod telemetry;

#[cfg(test)]
mod tests;

pub use seed::*;
pub use server::*;
pub use store::*;
pub use telemetry::*;

use serde::Deserialize;

/// Top-level configuration for the Quill server, loaded from a TOML file.
///
/// Built once at startup and handed to the components that need it; every
/// section has defaults, so an empty file is a valid configuration.
#[derive(Debug, Default, Deserialize)]
pub struct QuillConfig {
    /// HTTP server bind configuration.
    #[serde(default)]
    pub server: ServerConfig,
    /// Post store backend configuration.
    #[serde(default)]
    pub store: StoreConfig,
    /// Startup reseed configuration.
    #[serde(default)]
    pub seed: SeedConfig,
    /// Log output configuration.
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

/// Values supplied on the command line or through the environment.
///
/// Each `Some` field replaces the corresponding file setting.
#[derive(Debug, Default)]
pub struct ConfigOverrides {
    /// Bind host.
    pub host: Option<String>,
    /// Bind port.
    pub port: Option<u16>,
    /// Store connection URL.
    pub store_url: Option<String>,
    /// Store backend name.
    pub store_backend: Option<String>,
    /// Whether to reseed at startup.
    pub reset_db: Option<bool>,
}

impl QuillConfig {
    /// Apply command-line and environment overrides on top of the file values.
    #[must_use]
    pub fn with_overrides(mut self, overrides: ConfigOverrides) -> Self {
        if let Some(host) = overrides.host {
            self.server.host = host;
        }
        if let Some(port) = overrides.port {
            self.server.port = port;
        }
        if let Some(url) = overrides.store_url {
            self.store.url = url;
        }
        if let Some(backend) = overrides.store_backend {
            self.store.backend = backend;
        }
        if let Some(reset) = overrides.reset_db {
            self.seed.enabled = reset;
        }
        self
    }
}
