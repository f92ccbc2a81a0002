use super::*;

#[test]
fn empty_config_uses_defaults() {
    let config: QuillConfig = toml::from_str("").unwrap();
    assert_eq!(config.server.host, "127.0.0.1");
    assert_eq!(config.server.port, 8080);
    assert_eq!(config.server.shutdown_timeout_seconds, 30);
    assert_eq!(config.store.backend, "mongodb");
    assert_eq!(config.store.url, "mongodb://localhost/projectMongo");
    assert!(config.store.database.is_none());
    assert_eq!(config.store.collection, "blogposts");
    assert_eq!(config.store.server_selection_timeout_seconds, 10);
    assert!(!config.seed.enabled);
    assert!(config.seed.fixture_path.is_none());
    assert_eq!(config.telemetry.filter, "info");
    assert!(config.telemetry.ansi);
}

#[test]
fn full_config_parsed_from_toml() {
    let toml = r#"
        [server]
        host = "0.0.0.0"
        port = 9090
        shutdown_timeout_seconds = 5

        [store]
        backend = "memory"
        url = "mongodb://db:27017"
        database = "press"
        collection = "articles"
        server_selection_timeout_seconds = 3

        [seed]
        enabled = true
        fixture_path = "data/posts.json"

        [telemetry]
        filter = "quill_server=debug"
        ansi = false
    "#;

    let config: QuillConfig = toml::from_str(toml).unwrap();
    assert_eq!(config.server.bind_address(), "0.0.0.0:9090");
    assert_eq!(config.server.shutdown_timeout_seconds, 5);
    assert_eq!(config.store.backend, "memory");
    assert_eq!(config.store.url, "mongodb://db:27017");
    assert_eq!(config.store.database.as_deref(), Some("press"));
    assert_eq!(config.store.collection, "articles");
    assert_eq!(config.store.server_selection_timeout_seconds, 3);
    assert!(config.seed.enabled);
    assert_eq!(config.seed.fixture_path.as_deref(), Some("data/posts.json"));
    assert_eq!(config.telemetry.filter, "quill_server=debug");
    assert!(!config.telemetry.ansi);
}

#[test]
fn partial_section_keeps_other_defaults() {
    let config: QuillConfig = toml::from_str("[server]\nport = 3000").unwrap();
    assert_eq!(config.server.port, 3000);
    assert_eq!(config.server.host, "127.0.0.1");
    assert_eq!(config.store.backend, "mongodb");
}

#[test]
fn overrides_replace_file_values() {
    let config: QuillConfig = toml::from_str("[server]\nport = 3000").unwrap();
    let config = config.with_overrides(ConfigOverrides {
        host: Some("0.0.0.0".into()),
        port: Some(8081),
        store_url: Some("mongodb://other/blog".into()),
        store_backend: Some("memory".into()),
        reset_db: Some(true),
    });
    assert_eq!(config.server.bind_address(), "0.0.0.0:8081");
    assert_eq!(config.store.url, "mongodb://other/blog");
    assert_eq!(config.store.backend, "memory");
    assert!(config.seed.enabled);
}

#[test]
fn absent_overrides_keep_file_values() {
    let toml = r#"
        [seed]
        enabled = true
    "#;
    let config: QuillConfig = toml::from_str(toml).unwrap();
    let config = config.with_overrides(ConfigOverrides::default());
    assert!(config.seed.enabled);
    assert_eq!(config.server.port, 8080);
}

#[test]
fn reset_db_override_can_disable_seeding() {
    let config: QuillConfig = toml::from_str("[seed]\nenabled = true").unwrap();
    let config = config.with_overrides(ConfigOverrides {
        reset_db: Some(false),
        ..ConfigOverrides::default()
    });
    assert!(!config.seed.enabled);
}
