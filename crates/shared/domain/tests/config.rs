use serde_json::json;
use std::path::PathBuf;
use vcb_domain::config::{BrandConfig, LogConfig, ShellConfig, WindowConfig};

#[test]
fn config_defaults_are_sane() {
    let brand = BrandConfig::default();
    assert_eq!(brand.label, "🚗 Voice Call Bot");

    let window = WindowConfig::default();
    assert_eq!(window.title, "Voice Call Bot");
    assert!((window.width - 1200.0).abs() < f64::EPSILON);
    assert!((window.height - 800.0).abs() < f64::EPSILON);

    let log = LogConfig::default();
    assert_eq!(log.level, "info");
    assert_eq!(log.max_files, 10);
    assert!(log.path.is_none());
    assert!(!log.json);
}

#[test]
fn shell_config_deserializes() {
    let raw = json!({
        "brand": { "label": "Call Center" },
        "window": { "width": 640.0 },
        "log": { "level": "debug", "path": "/tmp/vcb-logs", "json": true }
    });

    let cfg: ShellConfig = serde_json::from_value(raw).expect("config deserialize");
    assert_eq!(cfg.brand.label, "Call Center");
    assert_eq!(cfg.window.title, "Voice Call Bot");
    assert!((cfg.window.width - 640.0).abs() < f64::EPSILON);
    assert_eq!(cfg.log.level, "debug");
    assert_eq!(cfg.log.path, Some(PathBuf::from("/tmp/vcb-logs")));
    assert!(cfg.log.json);
}

#[test]
fn empty_document_yields_defaults() {
    let cfg: ShellConfig = serde_json::from_value(json!({})).expect("config deserialize");
    assert_eq!(cfg, ShellConfig::default());
}

#[test]
fn clones_share_until_mutated() {
    let base = ShellConfig::default();
    let mut custom = base.clone();
    custom.brand.label = "Night Shift".to_owned();

    assert_eq!(base.brand.label, "🚗 Voice Call Bot");
    assert_eq!(custom.brand.label, "Night Shift");
}
