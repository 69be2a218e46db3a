use pitch::style::{PROP_BORDER, PROP_HEIGHT, PROP_WIDTH};
use pitch::{compute, ConfigError, SizingConfig, StyleSheet, ViewportSize};
use serde_json::json;

#[test]
fn full_hd_landscape() {
    let cfg = SizingConfig::from_json_value(json!({
        "baseWidth": 420, "multiplier": 3, "aspectRatio": 0.46, "viewportMargin": 0.98
    }))
    .expect("config");
    let r = compute(&cfg, ViewportSize::new(1920.0, 1080.0));
    assert_eq!(r.logical_width, 1260.0);
    assert!((r.logical_height - 2739.13).abs() < 0.01);
    // height binds: 1058 / 2739.13
    assert!((r.scale - 0.386).abs() < 1e-3, "scale {}", r.scale);

    let sheet = StyleSheet::from_result(&r);
    assert_eq!(sheet.get(PROP_WIDTH), Some("1260px"));
    assert!(sheet.get(PROP_HEIGHT).unwrap().starts_with("2739.13"));
    assert_eq!(sheet.get(PROP_BORDER), Some("6px"));
}

#[test]
fn square_viewport_fits_unscaled() {
    let r = compute(&SizingConfig::default(), ViewportSize::new(3000.0, 3000.0));
    assert_eq!(r.scale, 1.0);
    assert_eq!(StyleSheet::from_result(&r).transform, "scale(1)");
}

#[test]
fn zero_height_collapses() {
    let r = compute(&SizingConfig::default(), ViewportSize::new(1920.0, 0.0));
    assert_eq!(r.scale, 0.0);
    assert_eq!(r.logical_width, 1260.0);
}

#[test]
fn small_logical_width_keeps_floors() {
    let cfg = SizingConfig { base_width: 10.0, multiplier: 1.0, ..Default::default() };
    let r = compute(&cfg, ViewportSize::new(100.0, 100.0));
    assert_eq!(r.marking_width, 1.0);
    assert_eq!(r.center_feature_size, 90.0);
    assert_eq!(r.border_width, 4.0);
}

#[test]
fn custom_markings_from_json() {
    let cfg = SizingConfig::from_json_str(
        r#"{"markings": {"border": {"ratio": 0.01, "min": 2}}}"#,
    )
    .expect("config");
    let r = compute(&cfg, ViewportSize::new(1920.0, 1080.0));
    assert_eq!(r.border_width, 13.0); // round(12.6)
    assert_eq!(r.center_feature_size, 139.0);
}

#[test]
fn json_rejects_unknown_and_bad_values() {
    let unknown = SizingConfig::from_json_value(json!({"baseWidht": 400}));
    assert_eq!(unknown.unwrap_err().code(), "invalid_config");

    let zero = SizingConfig::from_json_value(json!({"multiplier": 0}));
    assert!(matches!(zero, Err(ConfigError::OutOfRange { param: "multiplier", .. })));

    let negative_margin = SizingConfig::from_json_value(json!({"viewportMargin": -0.5}));
    assert_eq!(negative_margin.unwrap_err().code(), "out_of_range");

    assert!(SizingConfig::from_json_str("{").is_err());
}

#[test]
fn vanishing_aspect_ratio_is_rejected() {
    let cfg = SizingConfig { aspect_ratio: 1e-320, ..Default::default() };
    assert!(matches!(cfg.validate(), Err(ConfigError::OutOfRange { param: "aspectRatio", .. })));

    let from_json = SizingConfig::from_json_value(json!({"aspectRatio": 1e-9}));
    assert_eq!(from_json.unwrap_err().code(), "out_of_range");

    // smallest accepted ratio still renders a finite height
    let edge = SizingConfig::from_json_value(json!({"aspectRatio": 0.001})).expect("config");
    let r = compute(&edge, ViewportSize::new(1920.0, 1080.0));
    assert!(r.logical_height.is_finite());
    assert!(!StyleSheet::from_result(&r).get(PROP_HEIGHT).unwrap().contains("inf"));
}
