//! Compound units and unit conversion.
//!
//! A unit is an ordered list of numerator units over an ordered list of
//! denominator units (`px*em/s`). Units from the same family (lengths,
//! angles, times, frequencies, resolutions) convert into each other; any
//! other unit only matches itself.

use std::fmt;

/// Unit families with the size of each unit expressed in the family's base.
const LENGTH: &[(&str, f64)] = &[
    ("px", 1.0),
    ("in", 96.0),
    ("cm", 96.0 / 2.54),
    ("mm", 96.0 / 25.4),
    ("q", 96.0 / 101.6),
    ("pt", 4.0 / 3.0),
    ("pc", 16.0),
];

const ANGLE: &[(&str, f64)] = &[
    ("deg", 1.0),
    ("grad", 0.9),
    ("rad", 180.0 / std::f64::consts::PI),
    ("turn", 360.0),
];

const TIME: &[(&str, f64)] = &[("s", 1.0), ("ms", 0.001)];

const FREQUENCY: &[(&str, f64)] = &[("hz", 1.0), ("khz", 1000.0)];

const RESOLUTION: &[(&str, f64)] = &[("dppx", 1.0), ("dpi", 1.0 / 96.0), ("dpcm", 2.54 / 96.0)];

const FAMILIES: &[&[(&str, f64)]] = &[LENGTH, ANGLE, TIME, FREQUENCY, RESOLUTION];

/// Find the family and base size of a unit.
fn family_of(unit: &str) -> Option<(usize, f64)> {
    let lower = unit.to_ascii_lowercase();
    FAMILIES.iter().enumerate().find_map(|(family, table)| {
        table
            .iter()
            .find(|(name, _)| *name == lower)
            .map(|(_, size)| (family, *size))
    })
}

/// Factor that converts a quantity in `from` into `to`, if they are compatible.
///
/// `1in` in `px` is `1 * unit_factor("in", "px") = 96`.
pub fn unit_factor(from: &str, to: &str) -> Option<f64> {
    if from == to {
        return Some(1.0);
    }
    let (from_family, from_size) = family_of(from)?;
    let (to_family, to_size) = family_of(to)?;
    (from_family == to_family).then(|| from_size / to_size)
}

/// A possibly compound unit.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Unit {
    numerators: Vec<String>,
    denominators: Vec<String>,
}

impl Unit {
    /// The empty unit (unitless numbers).
    pub fn none() -> Self {
        Unit::default()
    }

    /// A single numerator unit. The empty string yields the empty unit.
    pub fn single(unit: &str) -> Self {
        if unit.is_empty() {
            return Unit::none();
        }
        Unit {
            numerators: vec![unit.to_string()],
            denominators: Vec::new(),
        }
    }

    pub fn new(numerators: Vec<String>, denominators: Vec<String>) -> Self {
        Unit {
            numerators,
            denominators,
        }
    }

    /// Parse the `Display` form back (`px`, `px*em/s`, `/s`).
    pub fn parse(text: &str) -> Self {
        let split = |part: &str| {
            part.split('*')
                .filter(|u| !u.is_empty())
                .map(str::to_string)
                .collect::<Vec<_>>()
        };
        match text.split_once('/') {
            Some((num, den)) => Unit::new(split(num), split(den)),
            None => Unit::new(split(text), Vec::new()),
        }
    }

    #[inline]
    pub fn numerators(&self) -> &[String] {
        &self.numerators
    }

    #[inline]
    pub fn denominators(&self) -> &[String] {
        &self.denominators
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.numerators.is_empty() && self.denominators.is_empty()
    }

    /// Swap numerators and denominators.
    #[must_use]
    pub fn invert(&self) -> Unit {
        Unit {
            numerators: self.denominators.clone(),
            denominators: self.numerators.clone(),
        }
    }

    /// Factor that converts a quantity in `self` into `target`.
    ///
    /// Returns `None` when the units cannot be reconciled: different
    /// numerator/denominator counts, or a unit with no convertible partner.
    pub fn conversion_factor(&self, target: &Unit) -> Option<f64> {
        if self == target {
            return Some(1.0);
        }
        if self.numerators.len() != target.numerators.len()
            || self.denominators.len() != target.denominators.len()
        {
            return None;
        }
        let numerator = match_units(&self.numerators, &target.numerators)?;
        let denominator = match_units(&self.denominators, &target.denominators)?;
        Some(numerator / denominator)
    }

    /// Unit of a product, plus the factor the product's value must be scaled by.
    ///
    /// Numerators of one side cancel against convertible denominators of the
    /// other (`px * s/px` is `s`).
    pub fn multiply(&self, other: &Unit) -> (Unit, f64) {
        let numerators = self
            .numerators
            .iter()
            .chain(&other.numerators)
            .cloned()
            .collect::<Vec<_>>();
        let mut denominators = self
            .denominators
            .iter()
            .chain(&other.denominators)
            .cloned()
            .collect::<Vec<_>>();

        let mut factor = 1.0;
        let mut kept = Vec::with_capacity(numerators.len());
        for numerator in numerators {
            let partner = denominators
                .iter()
                .enumerate()
                .find_map(|(i, d)| unit_factor(&numerator, d).map(|f| (i, f)));
            match partner {
                Some((i, f)) => {
                    factor *= f;
                    denominators.remove(i);
                }
                None => kept.push(numerator),
            }
        }
        (Unit::new(kept, denominators), factor)
    }

    /// Unit of a quotient, plus the factor the quotient's value must be scaled by.
    pub fn divide(&self, other: &Unit) -> (Unit, f64) {
        self.multiply(&other.invert())
    }
}

/// Pair every unit in `from` with a convertible unit in `to`.
fn match_units(from: &[String], to: &[String]) -> Option<f64> {
    let mut remaining: Vec<&String> = to.iter().collect();
    let mut factor = 1.0;
    for unit in from {
        let (i, f) = remaining
            .iter()
            .enumerate()
            .find_map(|(i, target)| unit_factor(unit, target).map(|f| (i, f)))?;
        factor *= f;
        remaining.remove(i);
    }
    Some(factor)
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.numerators.join("*"))?;
        if !self.denominators.is_empty() {
            write!(f, "/{}", self.denominators.join("*"))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests;
