use order_store::config::Config;
use order_store::config::DatabaseConfig;
use order_store::constants::{DEFAULT_MAX_CONNECTIONS, IN_MEMORY_DATABASE_URL};

#[test]
fn test_default_config() {
    let config = Config::default();
    assert_eq!(config.database.url, DatabaseConfig::default_url());
    assert_eq!(config.database.max_connections, DEFAULT_MAX_CONNECTIONS);
    assert!(!config.database.sqlx_logging);
    assert!(!config.database.is_in_memory());
    assert!(!config.logging.enabled);
    assert_eq!(config.logging.level, "info");
    assert!(config.logging.file.is_none());
}

#[test]
fn test_config_validation() {
    let mut config = Config::default();

    // Valid config should pass
    assert!(config.validate().is_ok());

    // Empty database url should fail
    config.database.url = "  ".to_string();
    assert!(config.validate().is_err());

    // Reset and test pool bounds
    config.database.url = IN_MEMORY_DATABASE_URL.to_string();
    config.database.max_connections = 0;
    assert!(config.validate().is_err());
    config.database.max_connections = 500;
    assert!(config.validate().is_err());

    // Reset and test unknown log level
    config.database.max_connections = 5;
    config.logging.level = "loud".to_string();
    assert!(config.validate().is_err());

    config.logging.level = "debug".to_string();
    assert_eq!(config.logging.level_filter().unwrap(), log::LevelFilter::Debug);
}

#[test]
fn test_default_database_is_a_file() {
    let config = DatabaseConfig::default();
    assert!(config.url.starts_with("sqlite://"));
    assert!(config.url.ends_with("orders.db?mode=rwc"));

    let path = config.file_path().expect("default database should be a file");
    assert!(path.ends_with("orders.db"));
}

#[test]
fn test_in_memory_database_config() {
    let config = DatabaseConfig::in_memory();
    assert_eq!(config.url, IN_MEMORY_DATABASE_URL);
    assert!(config.is_in_memory());
    assert!(config.file_path().is_none());
}

#[test]
fn test_database_file_path_strips_query() {
    let config = DatabaseConfig {
        url: "sqlite:///var/lib/orders.db?mode=rwc".to_string(),
        ..DatabaseConfig::default()
    };
    assert_eq!(config.file_path(), Some(std::path::PathBuf::from("/var/lib/orders.db")));
}

#[test]
fn test_config_serialization() {
    let config = Config::default();
    let toml_str = toml::to_string_pretty(&config).unwrap();
    assert!(toml_str.contains("mode=rwc"));
    assert!(toml_str.contains("level = \"info\""));
}

#[test]
fn test_partial_config_deserialization() {
    // Test that partial TOML configs merge with defaults
    let partial_toml = r#"
[database]
url = "sqlite://orders.db?mode=rwc"

[logging]
enabled = true
"#;

    let config: Config = toml::from_str(partial_toml).unwrap();

    // Check that specified values are used
    assert_eq!(config.database.url, "sqlite://orders.db?mode=rwc");
    assert!(config.logging.enabled);

    // Check that unspecified values use defaults
    assert_eq!(config.database.max_connections, DEFAULT_MAX_CONNECTIONS);
    assert_eq!(config.logging.level, "info");
}

#[test]
fn test_empty_config_deserialization() {
    let config: Config = toml::from_str("").unwrap();
    let default_config = Config::default();

    assert_eq!(config.database.url, default_config.database.url);
    assert_eq!(config.logging.enabled, default_config.logging.enabled);
}

#[test]
fn test_generate_config_creates_directory() {
    use std::fs;

    let temp_dir = std::env::temp_dir().join("order_store_test_config");
    let config_path = temp_dir.join("nested").join("config.toml");

    if temp_dir.exists() {
        let _ = fs::remove_dir_all(&temp_dir);
    }
    assert!(!temp_dir.exists());

    let result = Config::generate_default_config(&config_path);
    assert!(result.is_ok());
    assert!(config_path.exists());

    let content = fs::read_to_string(&config_path).unwrap();
    assert!(content.contains("# order-store Configuration File"));

    // The generated file loads back and validates
    let loaded = Config::load_from_file(&config_path).unwrap();
    assert_eq!(loaded.database.url, DatabaseConfig::default_url());

    let _ = fs::remove_dir_all(&temp_dir);
}
