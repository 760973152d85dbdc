use std::fs;
use tempfile::tempdir;

use folder_csv::config::{Config, load_config, load_or_default, parse_config};
use folder_csv::constants::DEFAULT_BATCH_SIZE;

// Helper function to write a configuration file and load it
fn load_test_config(config_content: &str) -> anyhow::Result<Config> {
    let temp_dir = tempdir()?;
    let config_path = temp_dir.path().join("config.yaml");

    fs::write(&config_path, config_content)?;
    load_config(&config_path)
}

#[test]
fn test_full_configuration() {
    let config = load_test_config(
        r#"
prefix: "IMG_"
remove_pattern: "[0-9]+"
output: "exports/names.csv"
batch_size: 25
"#,
    )
    .expect("Valid configuration failed to load");

    assert_eq!(config.transform.prefix, "IMG_");
    assert_eq!(config.transform.remove_pattern, "[0-9]+");
    assert_eq!(config.output.as_deref(), Some("exports/names.csv"));
    assert_eq!(config.batch_size, 25);
}

#[test]
fn test_missing_keys_use_defaults() {
    let config = parse_config("prefix: \"x_\"\n").unwrap();

    assert_eq!(config.transform.prefix, "x_");
    assert_eq!(config.transform.remove_pattern, "");
    assert_eq!(config.output, None);
    assert_eq!(config.batch_size, DEFAULT_BATCH_SIZE);
}

#[test]
fn test_empty_document_is_default() {
    assert_eq!(parse_config("").unwrap(), Config::default());
    assert_eq!(parse_config("  \n").unwrap(), Config::default());
}

#[test]
fn test_zero_batch_size_is_rejected() {
    let result = parse_config("batch_size: 0\n");
    let error = result.expect_err("A batch size of zero should fail validation");
    assert!(
        error.to_string().contains("batch_size"),
        "Error message should mention the key: {error}"
    );
}

#[test]
fn test_invalid_pattern_is_accepted_until_export() {
    let config = parse_config("remove_pattern: \"(\"\n").unwrap();
    assert_eq!(config.transform.remove_pattern, "(");
}

#[test]
fn test_invalid_yaml_mentions_the_file() {
    let error = load_test_config("prefix: [unclosed\n").expect_err("Broken YAML should fail");
    assert!(error.to_string().contains("config.yaml"), "{error}");
}

#[test]
fn test_existing_local_file_is_loaded() {
    let temp_dir = tempdir().unwrap();
    let config_path = temp_dir.path().join("custom.yaml");
    fs::write(&config_path, "prefix: \"local_\"\n").unwrap();

    let config = load_or_default(config_path.to_str().unwrap()).unwrap();
    assert_eq!(config.transform.prefix, "local_");
}
