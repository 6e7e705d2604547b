//! Numbers with units.

use super::unit::Unit;

/// A double with a (possibly compound, possibly empty) unit.
#[derive(Clone, Debug, PartialEq)]
pub struct Number {
    pub value: f64,
    pub unit: Unit,
}

impl Number {
    #[inline]
    pub fn new(value: f64, unit: Unit) -> Self {
        Number { value, unit }
    }

    /// A number without a unit.
    #[inline]
    pub fn unitless(value: f64) -> Self {
        Number::new(value, Unit::none())
    }

    /// A number with a single unit (`px`, `%`, `em`).
    pub fn with_unit(value: f64, unit: &str) -> Self {
        Number::new(value, Unit::single(unit))
    }

    #[inline]
    pub fn is_unitless(&self) -> bool {
        self.unit.is_empty()
    }

    /// Express this number in `target`, if the units are compatible.
    ///
    /// A unitless number converts to nothing but itself.
    pub fn convert_to(&self, target: &Unit) -> Option<Number> {
        let factor = self.unit.conversion_factor(target)?;
        Some(Number::new(self.value * factor, target.clone()))
    }

    /// Whether arithmetic between the two numbers can reconcile their units.
    pub fn is_comparable(&self, other: &Number) -> bool {
        self.is_unitless()
            || other.is_unitless()
            || other.unit.conversion_factor(&self.unit).is_some()
    }

    /// Same unit, new value.
    #[must_use]
    pub fn map_value(&self, f: impl FnOnce(f64) -> f64) -> Number {
        Number::new(f(self.value), self.unit.clone())
    }
}

/// Format a double for output: rounded to `precision` decimal places,
/// trailing zeros trimmed, negative zero printed as `0`.
pub fn format_number(value: f64, precision: usize) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    let mut text = format!("{value:.precision$}");
    if text.contains('.') {
        let trimmed = text.trim_end_matches('0').trim_end_matches('.').len();
        text.truncate(trimmed);
    }
    if text == "-0" {
        text.remove(0);
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_format_trims_zeros() {
        assert_eq!(format_number(1.5, 5), "1.5");
        assert_eq!(format_number(2.0, 5), "2");
        assert_eq!(format_number(100.0, 5), "100");
        assert_eq!(format_number(0.1 + 0.2, 5), "0.3");
    }

    #[test]
    fn test_format_rounds_to_precision() {
        assert_eq!(format_number(1.0 / 3.0, 5), "0.33333");
        assert_eq!(format_number(2.0 / 3.0, 3), "0.667");
        assert_eq!(format_number(12.345, 0), "12");
    }

    #[test]
    fn test_format_negative_zero() {
        assert_eq!(format_number(-0.0, 5), "0");
        assert_eq!(format_number(-0.000_001, 5), "0");
    }

    #[test]
    fn test_format_non_finite() {
        assert_eq!(format_number(f64::INFINITY, 5), "Infinity");
        assert_eq!(format_number(f64::NEG_INFINITY, 5), "-Infinity");
        assert_eq!(format_number(f64::NAN, 5), "NaN");
    }

    #[test]
    fn test_convert_to() {
        let inch = Number::with_unit(1.0, "in");
        let px = inch.convert_to(&Unit::single("px"));
        assert_eq!(px, Some(Number::with_unit(96.0, "px")));
        assert!(inch.convert_to(&Unit::single("s")).is_none());
        assert!(Number::unitless(1.0).convert_to(&Unit::single("px")).is_none());
    }

    #[test]
    fn test_comparable() {
        let px = Number::with_unit(1.0, "px");
        assert!(px.is_comparable(&Number::unitless(2.0)));
        assert!(px.is_comparable(&Number::with_unit(1.0, "cm")));
        assert!(!px.is_comparable(&Number::with_unit(1.0, "s")));
    }
}
