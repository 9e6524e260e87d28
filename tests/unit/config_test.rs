//! Tests for configuration parsing and resolution order

use std::path::PathBuf;

use choreboard::config::{DB_ENV, DEFAULT_PORT, GlobalConfig, PORT_ENV};
use serial_test::serial;

#[test]
fn test_default_config() {
    let config = GlobalConfig::default();
    assert_eq!(config.server.port, DEFAULT_PORT);
    assert!(config.server.database.is_none());
    assert_eq!(config.logging.level, "info");
}

#[test]
fn test_parse_partial_config() {
    let toml = r#"
[server]
port = 9000
"#;
    let config: GlobalConfig = toml::from_str(toml).unwrap();
    assert_eq!(config.server.port, 9000);
    // Unspecified sections fall back to defaults
    assert_eq!(config.logging.level, "info");
}

#[test]
fn test_parse_full_config() {
    let toml = r#"
[server]
port = 8088
database = "/tmp/test-chores.db"

[logging]
level = "debug"
"#;
    let config: GlobalConfig = toml::from_str(toml).unwrap();
    assert_eq!(config.server.port, 8088);
    assert_eq!(
        config.server.database.as_deref(),
        Some(std::path::Path::new("/tmp/test-chores.db"))
    );
    assert_eq!(config.logging.level, "debug");
}

#[test]
#[serial]
fn test_resolve_port_precedence() {
    let mut config = GlobalConfig::default();
    config.server.port = 6000;

    unsafe { std::env::remove_var(PORT_ENV) };
    // Flag wins over everything
    assert_eq!(config.resolve_port(Some(7000)), 7000);
    // Then config file
    assert_eq!(config.resolve_port(None), 6000);

    // Env var beats config file
    unsafe { std::env::set_var(PORT_ENV, "6500") };
    assert_eq!(config.resolve_port(None), 6500);
    assert_eq!(config.resolve_port(Some(7000)), 7000);
    unsafe { std::env::remove_var(PORT_ENV) };
}

#[test]
#[serial]
fn test_resolve_database_precedence() {
    let mut config = GlobalConfig::default();
    config.server.database = Some(PathBuf::from("/from-config.db"));

    unsafe { std::env::remove_var(DB_ENV) };
    assert_eq!(
        config.resolve_database(Some(PathBuf::from("/from-flag.db"))),
        PathBuf::from("/from-flag.db")
    );
    assert_eq!(config.resolve_database(None), PathBuf::from("/from-config.db"));

    unsafe { std::env::set_var(DB_ENV, "/from-env.db") };
    assert_eq!(config.resolve_database(None), PathBuf::from("/from-env.db"));
    unsafe { std::env::remove_var(DB_ENV) };
}

#[test]
#[serial]
fn test_resolve_database_default() {
    unsafe { std::env::remove_var(DB_ENV) };
    let config = GlobalConfig::default();
    let path = config.resolve_database(None);
    assert!(path.ends_with("chores.db"));
}
