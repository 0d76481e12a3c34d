use super::*;
use crate::render::mask::RadiusBasis;

#[test]
fn empty_object_yields_defaults() {
    let cfg = MaskViewConfig::from_json_str("{}").unwrap();
    assert_eq!(cfg, MaskViewConfig::default());
    assert_eq!(cfg.shape, ShapeKind::Circle);
    assert_eq!(cfg.corner_radius, 10);
    assert_eq!(cfg.border_ring_width, 7);
    assert_eq!(cfg.border_ring_gap, 5);
    assert_eq!(cfg.ring_color, Argb(0xFFFF_FFFF));
    assert_eq!(cfg.gradient.inner_color, Argb(0xFF5D_5D5D));
    assert_eq!(cfg.gradient.outer_color, Argb(0x00FF_FFFF));
    assert_eq!(cfg.gradient.stop_inner, 0.9);
    assert_eq!(cfg.gradient.stop_outer, 1.0);
    assert_eq!(cfg.gradient.radius_basis, RadiusBasis::ShortSide);
}

#[test]
fn parses_gradient_circle_with_overrides() {
    let cfg = MaskViewConfig::from_json_str(
        r#"{
            "shape": "gradient_circle",
            "border_ring_width": 3,
            "ring_color": 4278190335,
            "gradient": { "stop_inner": 0.5, "radius_basis": "half_width" }
        }"#,
    )
    .unwrap();

    assert_eq!(cfg.shape, ShapeKind::GradientCircle);
    assert_eq!(cfg.gradient.stop_inner, 0.5);
    assert_eq!(cfg.gradient.stop_outer, 1.0);
    assert_eq!(cfg.gradient.radius_basis, RadiusBasis::HalfWidth);

    let ring = cfg.ring().unwrap();
    assert_eq!(ring.stroke_width, 3);
    assert_eq!(ring.inset_gap, 5);
    assert_eq!(ring.color, Argb(0xFF00_00FF));
    assert!(matches!(cfg.mask_shape(), MaskShape::GradientCircle(g) if g == cfg.gradient));
}

#[test]
fn unknown_fields_are_rejected() {
    let err = MaskViewConfig::from_json_str(r#"{ "shape": "circle", "radius": 4 }"#).unwrap_err();
    assert!(matches!(err, MaskError::Serde(_)), "{err}");
    assert!(err.to_string().starts_with("serialization error:"));
}

#[test]
fn unknown_shape_is_rejected() {
    let err = MaskViewConfig::from_json_str(r#"{ "shape": "star" }"#).unwrap_err();
    assert!(matches!(err, MaskError::Serde(_)));
}

#[test]
fn stops_out_of_range_or_reversed_fail_validation() {
    for json in [
        r#"{ "gradient": { "stop_inner": -0.1 } }"#,
        r#"{ "gradient": { "stop_outer": 1.5 } }"#,
        r#"{ "gradient": { "stop_inner": 0.8, "stop_outer": 0.4 } }"#,
    ] {
        let err = MaskViewConfig::from_json_str(json).unwrap_err();
        assert!(matches!(err, MaskError::Validation(_)), "{json}: {err}");
    }

    let mut cfg = MaskViewConfig::default();
    cfg.gradient.stop_inner = f32::NAN;
    assert!(cfg.validate().is_err());
}

#[test]
fn ring_only_for_gradient_circle_with_width() {
    let mut cfg = MaskViewConfig::default();
    assert!(cfg.ring().is_none());

    cfg.shape = ShapeKind::RoundedRect;
    assert!(cfg.ring().is_none());
    assert_eq!(cfg.mask_shape(), MaskShape::RoundedRect { corner_radius: 10 });

    cfg.shape = ShapeKind::GradientCircle;
    assert!(cfg.ring().is_some());
    cfg.border_ring_width = 0;
    assert!(cfg.ring().is_none());
}

#[test]
fn json_output_parses_back() {
    let mut cfg = MaskViewConfig::default();
    cfg.shape = ShapeKind::RoundedRect;
    cfg.corner_radius = 24;
    let json = cfg.to_json_string().unwrap();
    assert!(json.contains("\"rounded_rect\""));
    assert_eq!(MaskViewConfig::from_json_str(&json).unwrap(), cfg);
}
