//! Tests for reading package manifests from disk.

use prism_config::{ConfigError, DependencyManifest};
use std::fs;
use tempfile::TempDir;

#[test]
fn loads_manifest_from_disk() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("package.json");
    fs::write(
        &path,
        r#"{
  "name": "react-svg",
  "main": "dist/index.js",
  "module": "dist/react-svg.esm.js",
  "peerDependencies": { "react": "^16.8.0", "react-dom": "^16.8.0" },
  "dependencies": { "@babel/runtime": "^7.8.4", "@tanem/svg-injector": "^8.0.0", "prop-types": "^15.7.2" },
  "devDependencies": { "rollup": "^1.31.0" }
}"#,
    )
    .unwrap();

    let manifest = DependencyManifest::load(&path).unwrap();
    assert_eq!(manifest.module, "dist/react-svg.esm.js");
    assert_eq!(manifest.peer_dependencies.len(), 2);
    assert_eq!(manifest.dependencies.len(), 3);
    // devDependencies never participate
    assert!(!manifest.dependencies.contains("rollup"));
}

#[test]
fn missing_file_is_manifest_not_found() {
    let dir = TempDir::new().unwrap();
    let err = DependencyManifest::load(dir.path().join("package.json")).unwrap_err();
    assert!(matches!(err, ConfigError::ManifestNotFound(_)));
    assert!(err.is_manifest_error());
}

#[test]
fn invalid_json_reports_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("package.json");
    fs::write(&path, "{ \"module\": ").unwrap();

    match DependencyManifest::load(&path).unwrap_err() {
        ConfigError::ManifestParse { path: reported, .. } => assert_eq!(reported, path),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn wrong_dependency_table_type_reports_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("package.json");
    fs::write(&path, r#"{ "module": "dist/a.js", "dependencies": ["react"] }"#).unwrap();

    match DependencyManifest::load(&path).unwrap_err() {
        ConfigError::ManifestParse { path: reported, .. } => assert_eq!(reported, path),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn missing_module_field_is_fatal() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("package.json");
    fs::write(&path, r#"{ "peerDependencies": { "react": "*" } }"#).unwrap();

    let err = DependencyManifest::load(&path).unwrap_err();
    assert!(matches!(err, ConfigError::MissingField { .. }));
    assert!(err.to_string().contains("module"));
}
