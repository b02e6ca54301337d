use std::path::PathBuf;

use super::*;
use crate::foundation::core::DEFAULT_DEVICE_WIDTHS;

#[test]
fn empty_object_yields_defaults() {
    let cfg = PixelsetConfig::from_reader("{}".as_bytes()).unwrap();
    assert_eq!(cfg, PixelsetConfig::default());
    assert_eq!(cfg.resolver.device_widths, DEFAULT_DEVICE_WIDTHS.to_vec());
    assert_eq!(cfg.resolver.object_fit, "cover");
    assert_eq!(cfg.local.max_concurrent, 4);
    assert!(cfg.remote.enabled);
}

#[test]
fn partial_sections_keep_other_defaults() {
    let json = r#"{
        "device_widths": [320, 640],
        "object_position": "top",
        "local": { "public_base": "/media", "write_variants": false },
        "remote": { "enabled": false }
    }"#;
    let cfg = PixelsetConfig::from_reader(json.as_bytes()).unwrap();
    assert_eq!(cfg.resolver.device_widths, vec![320, 640]);
    assert_eq!(cfg.resolver.object_fit, "cover");
    assert_eq!(cfg.resolver.object_position, "top");
    assert_eq!(cfg.local.public_base, "/media");
    assert!(!cfg.local.write_variants);
    assert_eq!(cfg.local.output_dir, PathBuf::from("dist/_img"));
    assert!(!cfg.remote.enabled);
}

#[test]
fn invalid_values_fail_validation() {
    assert!(PixelsetConfig::from_reader(r#"{"device_widths": []}"#.as_bytes()).is_err());
    assert!(
        PixelsetConfig::from_reader(r#"{"local": {"max_concurrent": 0}}"#.as_bytes()).is_err()
    );
    let err = PixelsetConfig::from_reader("not json".as_bytes()).unwrap_err();
    assert!(err.to_string().contains("serialization error:"));
}

#[test]
fn missing_file_is_a_validation_error() {
    let err = PixelsetConfig::from_path("definitely/not/here.json").unwrap_err();
    assert!(err.to_string().contains("open config"));
}

#[test]
fn rebase_only_touches_relative_paths() {
    let mut cfg = PixelsetConfig::default();
    cfg.local.output_dir = PathBuf::from("/abs/out");
    let cfg = cfg.rebase(std::path::Path::new("site"));
    assert_eq!(cfg.local.source_root, PathBuf::from("site/."));
    assert_eq!(cfg.local.output_dir, PathBuf::from("/abs/out"));
}
