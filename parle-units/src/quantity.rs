//! Quantity type - a value with an associated unit

use crate::unit::UnitError;
use crate::{Dimension, Unit};
use parle_core::Number;
use serde::Serialize;
use std::fmt;

/// A physical quantity: a numeric value with an associated unit.
///
/// On offset scales the value is an absolute reading (20 °C is the
/// temperature, not a 20 degree difference).
#[derive(Debug, Clone, Serialize)]
pub struct Quantity {
    pub value: Number,
    pub unit: Unit,
}

impl Quantity {
    pub fn new(value: Number, unit: Unit) -> Self {
        Quantity { value, unit }
    }

    pub fn dimension(&self) -> Dimension {
        self.unit.dimension
    }

    pub fn is_compatible(&self, other: &Quantity) -> bool {
        self.unit.is_compatible(&other.unit)
    }

    /// Get the value in the coherent SI unit
    pub fn si_value(&self) -> Number {
        self.unit.to_si(&self.value)
    }

    /// Convert to another unit, producing a new quantity
    pub fn convert_to(&self, target: &Unit) -> Result<Quantity, UnitError> {
        let value = self.unit.convert_to(&self.value, target)?;
        Ok(Quantity::new(value, target.clone()))
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value, self.unit.symbol)
    }
}

impl PartialEq for Quantity {
    fn eq(&self, other: &Self) -> bool {
        self.is_compatible(other) && self.si_value() == other.si_value()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn meter() -> Unit {
        Unit::new("m", "meter", Dimension::LENGTH, Number::one())
    }

    fn kilometer() -> Unit {
        Unit::new("km", "kilometer", Dimension::LENGTH, Number::from_i64(1000))
    }

    #[test]
    fn test_convert_to() {
        let q = Quantity::new(Number::from_i64(5000), meter());
        let converted = q.convert_to(&kilometer()).unwrap();
        assert_eq!(converted.value, Number::from_i64(5));
        assert_eq!(converted.unit.symbol, "km");
        // the original is untouched
        assert_eq!(q.value, Number::from_i64(5000));
    }

    #[test]
    fn test_equality() {
        let q1 = Quantity::new(Number::from_i64(1), kilometer());
        let q2 = Quantity::new(Number::from_i64(1000), meter());
        assert_eq!(q1, q2);
    }

    #[test]
    fn test_display() {
        let q = Quantity::new(Number::from_i64(5), meter());
        assert_eq!(q.to_string(), "5 m");
    }
}
