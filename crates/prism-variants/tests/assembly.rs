//! End-to-end tests for variant assembly.
//!
//! These tests drive the public API the way the CLI does: a manifest and a
//! config go in, one configuration per variant comes out.

use std::path::PathBuf;

use prism_config::{DependencyManifest, PluginSpec, PrismConfig, VariantOverrides};
use prism_variants::{
    Assembler, ModuleFormat, PropTypesMode, Stage, StageKind, VariantError, VariantId,
};
use serde_json::json;

fn library_manifest() -> DependencyManifest {
    DependencyManifest::new("dist/react-svg.esm.js")
        .with_peer_dependencies(["react"])
        .with_dependencies(["classnames"])
}

fn external_names(assembly: &prism_variants::Assembly, variant: VariantId) -> Vec<String> {
    assembly
        .get(variant)
        .unwrap()
        .external
        .names()
        .map(String::from)
        .collect()
}

#[test]
fn test_full_matrix_for_typical_library() {
    let manifest = library_manifest();
    let config = PrismConfig::default();
    let assembly = Assembler::new(&manifest, &config).assemble();

    assert!(assembly.is_complete());
    assert_eq!(assembly.configs().count(), 5);

    assert_eq!(external_names(&assembly, VariantId::CjsDevelopment), ["classnames", "react"]);
    assert_eq!(external_names(&assembly, VariantId::CjsProduction), ["classnames", "react"]);
    assert_eq!(external_names(&assembly, VariantId::Esm), ["classnames", "react"]);
    assert_eq!(external_names(&assembly, VariantId::UmdDevelopment), ["prop-types", "react"]);
    assert_eq!(external_names(&assembly, VariantId::UmdProduction), ["react"]);
}

#[test]
fn test_output_paths_and_formats() {
    let manifest = library_manifest();
    let config = PrismConfig::default();
    let assembly = Assembler::new(&manifest, &config).assemble();

    let expected = [
        (VariantId::CjsDevelopment, "dist/react-svg.cjs.development.js", ModuleFormat::CommonJs),
        (VariantId::CjsProduction, "dist/react-svg.cjs.production.js", ModuleFormat::CommonJs),
        (VariantId::Esm, "dist/react-svg.esm.js", ModuleFormat::EsModule),
        (VariantId::UmdDevelopment, "dist/react-svg.umd.development.js", ModuleFormat::Universal),
        (VariantId::UmdProduction, "dist/react-svg.umd.production.js", ModuleFormat::Universal),
    ];

    for (variant, file, format) in expected {
        let output = &assembly.get(variant).unwrap().output;
        assert_eq!(output.file, PathBuf::from(file), "{variant}");
        assert_eq!(output.format, format, "{variant}");
        assert_eq!(output.name, "ReactSVG");
        assert!(output.sourcemap);
    }
}

#[test]
fn test_esm_path_follows_manifest_module() {
    let manifest = DependencyManifest::new("dist/lib.esm.js");
    let config = PrismConfig::default();
    let assembly = Assembler::new(&manifest, &config).assemble();

    assert_eq!(
        assembly.get(VariantId::Esm).unwrap().output.file,
        PathBuf::from("dist/lib.esm.js")
    );
}

#[test]
fn test_prop_types_handling_is_exclusive_per_variant() {
    let manifest = library_manifest();
    let config = PrismConfig::default();
    let assembly = Assembler::new(&manifest, &config).assemble();

    for config in assembly.configs() {
        let expected = match config.variant {
            VariantId::Esm => PropTypesMode::Wrap,
            VariantId::CjsProduction | VariantId::UmdProduction => PropTypesMode::Strip,
            _ => PropTypesMode::Preserve,
        };
        assert_eq!(config.transform.prop_types, expected, "{}", config.variant);

        let Stage::Transform(transform) = &config.stages[2] else {
            panic!("third stage should be the transform");
        };
        assert_eq!(transform, &config.transform);
    }
}

#[test]
fn test_minify_only_in_production() {
    let manifest = library_manifest();
    let config = PrismConfig::default();
    let assembly = Assembler::new(&manifest, &config).assemble();

    for config in assembly.configs() {
        let minified = config.stages.iter().any(|s| s.kind() == StageKind::Minify);
        assert_eq!(minified, config.variant.is_production(), "{}", config.variant);
    }
}

#[test]
fn test_assembly_is_idempotent() {
    let manifest = library_manifest();
    let config = PrismConfig::default();
    let assembler = Assembler::new(&manifest, &config);

    let first = assembler.assemble();
    let second = assembler.assemble();
    assert_eq!(first, second);

    let first_json = serde_json::to_string(&first.into_configs()).unwrap();
    let second_json = serde_json::to_string(&second.into_configs()).unwrap();
    assert_eq!(first_json, second_json);
}

#[test]
fn test_bad_override_only_fails_its_variant() {
    let manifest = library_manifest();
    let mut config = PrismConfig::default();
    config.variants.insert(
        "cjs-production".to_string(),
        VariantOverrides {
            plugins: vec![PluginSpec::with_options("babel-plugin-x", json!("fast"))],
        },
    );

    let assembly = Assembler::new(&manifest, &config).assemble();
    assert!(!assembly.is_complete());

    let failures: Vec<&VariantError> = assembly.failures().collect();
    assert_eq!(failures.len(), 1);
    assert_eq!(failures[0].variant(), VariantId::CjsProduction);
    assert!(matches!(failures[0], VariantError::InvalidPlugin { .. }));

    let built: Vec<_> = assembly.configs().map(|c| c.variant).collect();
    assert_eq!(
        built,
        [
            VariantId::CjsDevelopment,
            VariantId::Esm,
            VariantId::UmdDevelopment,
            VariantId::UmdProduction
        ]
    );
}

#[test]
fn test_serialized_config_shape() {
    let manifest = library_manifest();
    let config = PrismConfig::default();
    let umd = Assembler::new(&manifest, &config)
        .build_variant(VariantId::UmdDevelopment)
        .unwrap();

    let value = serde_json::to_value(&umd).unwrap();
    assert_eq!(value["variant"], "umd-development");
    assert_eq!(value["input"], "./compiled/index.js");
    assert_eq!(value["external"], json!(["prop-types", "react"]));
    assert_eq!(value["output"]["format"], "umd");
    assert_eq!(value["output"]["globals"]["prop-types"], "PropTypes");
    assert_eq!(value["output"]["globals"]["react-dom/server"], "ReactDOMServer");
    assert!(value.get("transform").is_none());
    assert_eq!(value["stages"].as_array().map(Vec::len), Some(5));

    let transform = &value["stages"][2];
    assert_eq!(transform["stage"], "transform");
    assert_eq!(transform["options"]["runtimeHelpers"], true);
    assert!(transform["options"].get("propTypes").is_none());
    assert!(transform["options"].get("production").is_none());
}
