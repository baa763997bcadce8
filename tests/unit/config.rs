use super::*;

#[test]
fn empty_object_yields_defaults() {
    let cfg = GeneratorConfig::from_json_str("{}").unwrap();
    assert_eq!(cfg, GeneratorConfig::default());
    assert_eq!(cfg.showcase.len(), 4);
    assert_eq!(cfg.palettes.len(), 4);
    assert!(!cfg.parallel);
    assert_eq!(
        cfg.fonts.path(&cfg.fonts.bold),
        PathBuf::from("/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf")
    );
}

#[test]
fn partial_override_keeps_other_defaults() {
    let cfg = GeneratorConfig::from_json_str(
        r##"{
            "fonts": { "dir": "/opt/fonts" },
            "palettes": [{ "top": "#000000", "bottom": "#ffffff" }],
            "parallel": true
        }"##,
    )
    .unwrap();
    assert_eq!(cfg.fonts.dir, PathBuf::from("/opt/fonts"));
    assert_eq!(cfg.fonts.regular, "DejaVuSans.ttf");
    assert_eq!(cfg.palettes.len(), 1);
    assert_eq!(cfg.showcase.len(), 4);
    assert!(cfg.parallel);
}

#[test]
fn rejects_unknown_fields() {
    let err = GeneratorConfig::from_json_str(r#"{ "colour": 1 }"#).unwrap_err();
    assert!(err.to_string().contains("config error:"));
}

#[test]
fn rejects_bad_palette_hex() {
    let err = GeneratorConfig::from_json_str(
        r##"{ "palettes": [{ "top": "#667eea", "bottom": "purple" }] }"##,
    )
    .unwrap_err();
    assert!(err.to_string().contains("palette 0"));
}

#[test]
fn rejects_empty_tables() {
    assert!(GeneratorConfig::from_json_str(r#"{ "palettes": [] }"#).is_err());
    assert!(GeneratorConfig::from_json_str(r#"{ "showcase": [] }"#).is_err());
    assert!(
        GeneratorConfig::from_json_str(r#"{ "showcase": [{ "text": " ", "author": "x" }] }"#)
            .is_err()
    );
}

#[test]
fn output_root_moves_every_directory() {
    let cfg = GeneratorConfig::default().with_output_root(Path::new("/tmp/out"));
    assert_eq!(cfg.icons_dir, PathBuf::from("/tmp/out/assets"));
    assert_eq!(
        cfg.screenshots_dir,
        PathBuf::from("/tmp/out/store-listing/screenshots")
    );
    assert_eq!(cfg.listing_dir, PathBuf::from("/tmp/out/store-listing"));
}

#[test]
fn missing_file_is_an_error() {
    assert!(GeneratorConfig::from_path(Path::new("/nonexistent/dailylift.json")).is_err());
}
