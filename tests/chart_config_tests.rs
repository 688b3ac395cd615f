use std::time::Duration;

use scatter_rs::api::ChartConfig;
use scatter_rs::core::{Margins, Viewport, XField, YField};
use scatter_rs::render::{Color, Transition};

#[test]
fn config_json_round_trip_preserves_all_fields() {
    let config = ChartConfig::new(Viewport::new(960, 540))
        .with_initial_selection(XField::Healthcare, YField::Smokes)
        .with_marker_radius(8.0)
        .with_marker_fill(Color::rgba(0.2, 0.4, 0.8, 0.5))
        .with_transition(Transition::new(Duration::from_millis(400)));

    let json = config.to_json_pretty().expect("serialize");
    let restored = ChartConfig::from_json_str(&json).expect("deserialize");

    assert_eq!(restored, config);
}

#[test]
fn minimal_json_applies_defaults() {
    let json = r#"{ "viewport": { "width": 800, "height": 450 } }"#;
    let config = ChartConfig::from_json_str(json).expect("deserialize");

    assert_eq!(config.viewport, Viewport::new(800, 450));
    assert_eq!(config.margins, Margins::default());
    assert_eq!(config.initial_selection.x, XField::Age);
    assert_eq!(config.initial_selection.y, YField::Obesity);
    assert_eq!(config.marker_radius, 10.0);
    assert_eq!(config.transition, Transition::default());
}

#[test]
fn malformed_json_is_an_error() {
    assert!(ChartConfig::from_json_str("{").is_err());
    assert!(ChartConfig::from_json_str(r#"{"viewport": {"width": -1}}"#).is_err());
}

#[test]
fn validate_rejects_bad_marker_radius() {
    let config = ChartConfig::new(Viewport::new(800, 450)).with_marker_radius(0.0);
    assert!(config.validate().is_err());
}

#[test]
fn validate_rejects_negative_margins() {
    let config = ChartConfig::new(Viewport::new(800, 450)).with_margins(Margins {
        top: -1.0,
        ..Margins::default()
    });
    assert!(config.validate().is_err());
}
