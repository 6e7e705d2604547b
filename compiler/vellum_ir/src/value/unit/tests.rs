use super::*;

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn test_unit_factor_same_family() {
    assert_eq!(unit_factor("in", "px"), Some(96.0));
    assert!(close(unit_factor("px", "in").unwrap_or_default(), 1.0 / 96.0));
    assert!(close(unit_factor("turn", "deg").unwrap_or_default(), 360.0));
    assert!(close(unit_factor("ms", "s").unwrap_or_default(), 0.001));
}

#[test]
fn test_unit_factor_incompatible() {
    assert_eq!(unit_factor("px", "s"), None);
    assert_eq!(unit_factor("em", "px"), None);
    assert_eq!(unit_factor("em", "em"), Some(1.0));
}

#[test]
fn test_unit_factor_is_case_insensitive_for_known_units() {
    assert_eq!(unit_factor("PX", "in"), unit_factor("px", "in"));
}

#[test]
fn test_conversion_factor_compound() {
    let speed_px = Unit::new(vec!["px".into()], vec!["s".into()]);
    let speed_in = Unit::new(vec!["in".into()], vec!["ms".into()]);
    // 1px/s is (1/96)in per 1000ms
    let factor = speed_px.conversion_factor(&speed_in).unwrap_or_default();
    assert!(close(factor, (1.0 / 96.0) / 1000.0));
}

#[test]
fn test_conversion_factor_shape_mismatch() {
    let px = Unit::single("px");
    assert_eq!(px.conversion_factor(&Unit::none()), None);
    assert_eq!(Unit::none().conversion_factor(&Unit::none()), Some(1.0));
}

#[test]
fn test_multiply_appends_units() {
    let (unit, factor) = Unit::single("px").multiply(&Unit::single("em"));
    assert_eq!(unit.to_string(), "px*em");
    assert_eq!(factor, 1.0);
}

#[test]
fn test_multiply_cancels_convertible_units() {
    let per_px = Unit::new(vec![], vec!["px".into()]);
    let (unit, factor) = Unit::single("in").multiply(&per_px);
    assert!(unit.is_empty());
    assert_eq!(factor, 96.0);
}

#[test]
fn test_divide_inverts_right_operand() {
    let (unit, _) = Unit::single("px").divide(&Unit::single("s"));
    assert_eq!(unit.numerators(), ["px".to_string()]);
    assert_eq!(unit.denominators(), ["s".to_string()]);
    assert_eq!(unit.to_string(), "px/s");

    let (same, factor) = Unit::single("px").divide(&Unit::single("px"));
    assert!(same.is_empty());
    assert_eq!(factor, 1.0);
}

#[test]
fn test_single_empty_is_none() {
    assert!(Unit::single("").is_empty());
    assert_eq!(Unit::single("%").to_string(), "%");
}

#[test]
fn test_parse_display_form() {
    assert_eq!(Unit::parse("px"), Unit::single("px"));
    assert_eq!(Unit::parse(""), Unit::none());
    let speed = Unit::parse("px*em/s");
    assert_eq!(speed.numerators(), ["px".to_string(), "em".to_string()]);
    assert_eq!(speed.denominators(), ["s".to_string()]);
    assert_eq!(Unit::parse(&speed.to_string()), speed);
}
