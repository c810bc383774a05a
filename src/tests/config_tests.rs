//! Tests for the configuration module.
//!
//! This module contains tests for configuration loading, validation, and usage.

use crate::config::{
    table::TableConfig, ConfigLoader, LogConfig, OutputFormat, PukaConfig, Validate,
};
use crate::data_structures::puka_cuckoo_hash::{PukaCuckooHash, PukaCuckooHashConfig};
use crate::error::config::ConfigError;
use crate::tests::TestFixture;

/// Test that default configuration can be created and is valid.
#[test]
fn test_default_config_is_valid() {
    let config = PukaConfig::default();
    assert!(config.validate().is_ok());
    assert_eq!(config.table.capacity, 101);
    assert_eq!(config.output.format, OutputFormat::Text);
}

/// Test that configuration validation catches invalid values.
#[test]
fn test_config_validation() {
    let mut config = PukaConfig::default();

    config.table.capacity = 0;
    assert!(config.validate().is_err());

    config.table.capacity = 11;
    config.table.hash_functions = 9;
    assert!(matches!(
        config.validate(),
        Err(ConfigError::ValueOutOfRange { .. })
    ));

    config.table.hash_functions = 3;
    config.log = LogConfig {
        level: "loud".to_string(),
        ..LogConfig::default()
    };
    assert!(config.validate().is_err());
}

/// Test loading configuration from a TOML file.
#[test]
fn test_load_config_from_file() {
    let fixture = TestFixture::new().unwrap();
    let path = fixture
        .create_file(
            "puka.toml",
            r#"
    [table]
    capacity = 11
    hash_functions = 3
    seed = 7

    [output]
    format = "json"
    "#,
        )
        .unwrap();

    let config = ConfigLoader::new(Some(&path), "TEST_PUKA_FILE").load().unwrap();

    assert_eq!(
        config.table,
        TableConfig {
            capacity: 11,
            hash_functions: 3,
            seed: 7,
        }
    );
    assert_eq!(config.output.format, OutputFormat::Json);
    // Untouched sections keep their defaults
    assert_eq!(config.log, LogConfig::default());
}

/// Test loading configuration from a JSON file.
#[test]
fn test_load_config_from_json() {
    let fixture = TestFixture::new().unwrap();
    let path = fixture
        .create_file("puka.json", r#"{"table": {"capacity": 23}}"#)
        .unwrap();

    let config = ConfigLoader::new(Some(&path), "TEST_PUKA_JSON").load().unwrap();
    assert_eq!(config.table.capacity, 23);
    assert_eq!(config.table.hash_functions, 2);
}

/// Test that environment variables override file values.
#[test]
fn test_env_overrides() {
    let mut fixture = TestFixture::new().unwrap();
    let path = fixture
        .create_file("puka.toml", "[table]\ncapacity = 11\n")
        .unwrap();
    fixture.set_env("TEST_PUKA_ENV__TABLE__CAPACITY", "31");

    let config = ConfigLoader::new(Some(&path), "TEST_PUKA_ENV").load().unwrap();
    assert_eq!(config.table.capacity, 31);
}

/// Test the error paths of the loader.
#[test]
fn test_loader_errors() {
    let fixture = TestFixture::new().unwrap();

    let missing = fixture.temp_dir.path().join("missing.toml");
    assert!(matches!(
        ConfigLoader::new(Some(&missing), "TEST_PUKA_ERR").load(),
        Err(ConfigError::FileNotFound(_))
    ));

    let unsupported = fixture.create_file("puka.ini", "capacity=1").unwrap();
    assert!(matches!(
        ConfigLoader::new(Some(&unsupported), "TEST_PUKA_ERR").load(),
        Err(ConfigError::UnsupportedFormat(_))
    ));

    let malformed = fixture.create_file("broken.toml", "[table\ncapacity = ").unwrap();
    assert!(matches!(
        ConfigLoader::new(Some(&malformed), "TEST_PUKA_ERR").load(),
        Err(ConfigError::ParseError(_))
    ));

    let invalid = fixture
        .create_file("bad.toml", "[table]\nhash_functions = 0\n")
        .unwrap();
    assert!(matches!(
        ConfigLoader::new(Some(&invalid), "TEST_PUKA_ERR").load(),
        Err(ConfigError::ValueOutOfRange { .. })
    ));
}

/// Test that a table configuration produces the expected table.
#[test]
fn test_table_config_builds_table() {
    let table_config = TableConfig {
        capacity: 100,
        hash_functions: 3,
        seed: 1,
    };
    let table = PukaCuckooHash::with_config(PukaCuckooHashConfig::from(&table_config));

    assert_eq!(table.capacity(), 101);
    assert_eq!(table.hash_family(), &PukaCuckooHashConfig::from(&table_config).hash_family());
}

/// Test that the default configuration survives a TOML round trip.
#[test]
fn test_default_config_serializes_to_toml() {
    let text = toml::to_string_pretty(&PukaConfig::default()).unwrap();
    let parsed: PukaConfig = toml::from_str(&text).unwrap();
    assert_eq!(parsed, PukaConfig::default());
}
