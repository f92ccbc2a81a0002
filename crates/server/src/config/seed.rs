use serde::Deserialize;

/// Startup reseed configuration.
///
/// Seeding deletes every post in the collection before loading the fixture,
/// so it stays off unless explicitly enabled.
#[derive(Debug, Default, Deserialize)]
pub struct SeedConfig {
    /// Whether to wipe and reseed the collection at startup.
    #[serde(default)]
    pub enabled: bool,
    /// Path to a JSON array of posts. When unset, the fixture bundled with
    /// the binary is used.
    pub fixture_path: Option<String>,
}
