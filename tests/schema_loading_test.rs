//! Loading schemas and configuration from files.

use std::fs;

use schemalens::error::{Result, SchemaLensError};
use schemalens::prelude::*;
use tempfile::TempDir;

const SAMPLE_SCHEMA: &str = include_str!("../demos/sample_schema.json");

const SAMPLE_YAML: &str = r#"
orders:
  columns:
    - name: order_id
      type: integer
      description: Unique order identifier
    - name: order_date
      type: date
users:
  columns:
    - name: email
      type: string
  owner: crm
"#;

#[test]
fn test_load_json_schema() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("schema.json");
    fs::write(&path, SAMPLE_SCHEMA)?;

    let schema = Schema::load(&path)?;
    let names: Vec<&String> = schema.tables().map(|(name, _)| name).collect();
    assert_eq!(names, vec!["orders", "users", "products"]);

    Ok(())
}

#[test]
fn test_load_yaml_schema() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("schema.yml");
    fs::write(&path, SAMPLE_YAML)?;

    let schema = Schema::load(&path)?;
    assert_eq!(schema.len(), 2);

    let users = schema.table("users").expect("users table");
    assert_eq!(users.extra.get("owner").and_then(|v| v.as_str()), Some("crm"));

    let system = SchemaSystem::new()?;
    let result = system.process("order date", &schema)?;
    assert_eq!(result.corrected_query, "order date");
    assert!(result.relevant_tables.contains_key("orders"));

    Ok(())
}

#[test]
fn test_yaml_extension_is_case_insensitive() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let schema_path = temp_dir.path().join("SCHEMA.YML");
    fs::write(&schema_path, SAMPLE_YAML)?;
    let config_path = temp_dir.path().join("schemalens.YAML");
    fs::write(&config_path, "relevance_threshold: 0.05\n")?;

    let schema = Schema::load(&schema_path)?;
    assert_eq!(schema.len(), 2);

    let config = SystemConfig::load(&config_path)?;
    assert_eq!(config.relevance_threshold, 0.05);

    Ok(())
}

#[test]
fn test_loading_twice_gives_distinct_identities() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("schema.json");
    fs::write(&path, SAMPLE_SCHEMA)?;

    let first = Schema::load(&path)?;
    let second = Schema::load(&path)?;
    assert_eq!(first, second);
    assert_ne!(first.id(), second.id());

    Ok(())
}

#[test]
fn test_missing_file_is_io_error() {
    let temp_dir = TempDir::new().unwrap();
    let err = Schema::load(temp_dir.path().join("missing.json")).unwrap_err();
    assert!(matches!(err, SchemaLensError::Io(_)));
}

#[test]
fn test_malformed_schema_is_rejected() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("schema.json");
    fs::write(&path, r#"{"orders": {"columns": [42]}}"#)?;

    let err = Schema::load(&path).unwrap_err();
    assert!(matches!(err, SchemaLensError::Schema(_)));

    Ok(())
}

#[test]
fn test_config_file_changes_threshold() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("schemalens.json");
    fs::write(&path, r#"{"relevance_threshold": 0.05}"#)?;

    let schema = Schema::from_json_str(SAMPLE_SCHEMA)?;
    let config = SystemConfig::load(&path)?;
    let system = SchemaSystem::with_config(config)?;

    let result = system.process("customer orders", &schema)?;
    assert!(result.relevant_tables.contains_key("orders"));

    Ok(())
}
