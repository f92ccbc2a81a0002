use serde::Deserialize;

/// Log output configuration.
///
/// # Example
///
/// ```toml
/// [telemetry]
/// filter = "quill_server=debug,tower_http=info"
/// ansi = false
/// ```
#[derive(Debug, Deserialize)]
pub struct TelemetryConfig {
    /// `EnvFilter` directives used when `RUST_LOG` is not set.
    #[serde(default = "default_filter")]
    pub filter: String,
    /// Whether to colorize log output.
    #[serde(default = "default_ansi")]
    pub ansi: bool,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            filter: default_filter(),
            ansi: default_ansi(),
        }
    }
}

fn default_filter() -> String {
    "info".to_owned()
}

fn default_ansi() -> bool {
    true
}
