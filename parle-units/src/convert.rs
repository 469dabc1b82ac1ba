//! Conversion operations on the unit system

use crate::unit::UnitError;
use crate::units::UnitSystem;
use crate::{Dimension, Prefix, Quantity, ResolvedUnit, Unit};
use parle_core::Number;
use tracing::debug;

/// Engineering prefixes stop at yocto/yotta
const MAX_ENGINEERING_EXPONENT: i32 = 24;

impl UnitSystem {
    /// Turn a resolved (prefix, symbol) pair into a concrete unit
    pub fn realize(&self, resolved: &ResolvedUnit) -> Result<Unit, UnitError> {
        let unit = self
            .get(&resolved.symbol)
            .ok_or_else(|| UnitError::UnknownSymbol(resolved.symbol.clone()))?;
        match resolved.prefix {
            Some(prefix) => unit.with_prefix(prefix),
            None => Ok(unit.clone()),
        }
    }

    /// True when both symbols exist and share a dimension
    pub fn are_compatible(&self, a: &str, b: &str) -> bool {
        match (self.dimension_of(a), self.dimension_of(b)) {
            (Some(da), Some(db)) => da == db,
            _ => false,
        }
    }

    /// Build a quantity; on offset scales the value is an absolute reading
    pub fn quantity(&self, value: Number, resolved: &ResolvedUnit) -> Result<Quantity, UnitError> {
        Ok(Quantity::new(value, self.realize(resolved)?))
    }

    /// Convert a quantity to the unit described by `target`
    pub fn convert(&self, quantity: &Quantity, target: &ResolvedUnit) -> Result<Quantity, UnitError> {
        let target = self.realize(target)?;
        let result = quantity.convert_to(&target)?;
        debug!(from = %quantity, to = %result, "converted quantity");
        Ok(result)
    }

    /// Express a quantity in the coherent SI unit of its dimension
    pub fn to_base(&self, quantity: &Quantity) -> Result<Quantity, UnitError> {
        let coherent = self.coherent_unit(quantity.dimension())?;
        quantity.convert_to(coherent)
    }

    /// Coherent SI unit, then an engineering prefix keeping the magnitude
    /// in [1, 1000): 3 686 400 s becomes 3.6864 Ms.
    pub fn reduce_to_natural(&self, quantity: &Quantity) -> Result<Quantity, UnitError> {
        let coherent = self.coherent_unit(quantity.dimension())?;
        let base = quantity.convert_to(coherent)?;

        let exponent = match base.value.magnitude_exponent() {
            Some(exponent) if coherent.is_prefixable() => exponent,
            _ => return Ok(base),
        };

        let power = coherent.prefix_power;
        let engineering = (exponent.div_euclid(power)).div_euclid(3) * 3;
        let engineering = engineering.clamp(-MAX_ENGINEERING_EXPONENT, MAX_ENGINEERING_EXPONENT);

        match Prefix::engineering(engineering) {
            Some(prefix) => {
                let compact = coherent.with_prefix(prefix)?;
                base.convert_to(&compact)
            }
            None => Ok(base),
        }
    }

    fn coherent_unit(&self, dimension: Dimension) -> Result<&Unit, UnitError> {
        self.coherent_for(dimension).ok_or(UnitError::NoCoherentUnit(dimension))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::UNITS;

    fn resolved(symbol: &str) -> ResolvedUnit {
        UNITS.parse_symbol(symbol).unwrap()
    }

    fn qty(value: &str, symbol: &str) -> Quantity {
        UNITS.quantity(Number::from_str(value).unwrap(), &resolved(symbol)).unwrap()
    }

    fn approx(actual: &Number, expected: f64, tolerance: f64) -> bool {
        (actual.to_f64().unwrap() - expected).abs() <= tolerance
    }

    #[test]
    fn test_realize_prefixed() {
        let km = UNITS.realize(&resolved("km")).unwrap();
        assert_eq!(km.symbol, "km");
        assert_eq!(km.factor, Number::from_i64(1000));

        let kib = UNITS.realize(&resolved("KiB")).unwrap();
        assert_eq!(kib.factor, Number::from_i64(8192));
    }

    #[test]
    fn test_realize_unknown() {
        let err = UNITS.realize(&ResolvedUnit::new("furlong")).unwrap_err();
        assert_eq!(err, UnitError::UnknownSymbol("furlong".to_string()));
    }

    #[test]
    fn test_realize_rejects_prefixed_affine() {
        let kilo = Prefix::from_symbol("k").unwrap();
        let err = UNITS.realize(&ResolvedUnit::prefixed(kilo, "degC")).unwrap_err();
        assert!(matches!(err, UnitError::NotPrefixable { .. }));
    }

    #[test]
    fn test_are_compatible() {
        assert!(UNITS.are_compatible("mi", "m"));
        assert!(UNITS.are_compatible("degF", "K"));
        assert!(!UNITS.are_compatible("mi", "s"));
        assert!(!UNITS.are_compatible("B", "rad"));
        assert!(!UNITS.are_compatible("mi", "furlong"));
    }

    #[test]
    fn test_convert_miles_to_kilometers() {
        let result = UNITS.convert(&qty("17", "mi"), &resolved("km")).unwrap();
        assert!(approx(&result.value, 27.358848, 1e-9));
        assert_eq!(result.unit.symbol, "km");
    }

    #[test]
    fn test_convert_temperatures() {
        let f = UNITS.convert(&qty("20", "degC"), &resolved("degF")).unwrap();
        assert_eq!(f.value.round_to(10), Number::from_i64(68));

        let c = UNITS.convert(&qty("300", "K"), &resolved("degC")).unwrap();
        assert_eq!(c.value.round_to(10), Number::from_str("26.85").unwrap());

        let c = UNITS.convert(&qty("80", "degF"), &resolved("degC")).unwrap();
        assert!(approx(&c.value, 26.666_666, 1e-5));
    }

    #[test]
    fn test_convert_temperature_interval() {
        let k = UNITS.convert(&qty("10", "delta_degF"), &resolved("K")).unwrap();
        assert!(approx(&k.value, 5.555_555, 1e-5));

        let err = UNITS.convert(&qty("10", "degC"), &resolved("delta_degF")).unwrap_err();
        assert!(matches!(err, UnitError::OffsetUnitMix { .. }));
    }

    #[test]
    fn test_convert_incompatible() {
        let err = UNITS.convert(&qty("1", "mi"), &resolved("s")).unwrap_err();
        assert!(matches!(err, UnitError::IncompatibleDimensions { .. }));
    }

    #[test]
    fn test_to_base() {
        let base = UNITS.to_base(&qty("2", "h")).unwrap();
        assert_eq!(base.unit.symbol, "s");
        assert_eq!(base.value, Number::from_i64(7200));
    }

    #[test]
    fn test_reduce_to_natural_hours() {
        let natural = UNITS.reduce_to_natural(&qty("1024", "h")).unwrap();
        assert_eq!(natural.unit.symbol, "Ms");
        assert!(approx(&natural.value, 3.6864, 1e-9));
    }

    #[test]
    fn test_reduce_to_natural_small_values() {
        let natural = UNITS.reduce_to_natural(&qty("0.002", "in")).unwrap();
        assert_eq!(natural.unit.symbol, "µm");
        assert!(approx(&natural.value, 50.8, 1e-9));

        let natural = UNITS.reduce_to_natural(&qty("3", "lb")).unwrap();
        assert_eq!(natural.unit.symbol, "kg");
    }

    #[test]
    fn test_reduce_to_natural_keeps_unprefixed_range() {
        let natural = UNITS.reduce_to_natural(&qty("500", "cm")).unwrap();
        assert_eq!(natural.unit.symbol, "m");
        assert_eq!(natural.value, Number::from_i64(5));
    }

    #[test]
    fn test_reduce_to_natural_area_uses_prefix_power() {
        let natural = UNITS.reduce_to_natural(&qty("500", "ha")).unwrap();
        assert_eq!(natural.unit.symbol, "km²");
        assert_eq!(natural.value, Number::from_i64(5));
    }

    #[test]
    fn test_reduce_to_natural_temperature() {
        let natural = UNITS.reduce_to_natural(&qty("20", "degC")).unwrap();
        assert_eq!(natural.unit.symbol, "K");
        assert_eq!(natural.value, Number::from_str("293.15").unwrap());
    }

    #[test]
    fn test_reduce_to_natural_zero() {
        let natural = UNITS.reduce_to_natural(&qty("0", "km")).unwrap();
        assert_eq!(natural.unit.symbol, "m");
        assert!(natural.value.is_zero());
    }

    #[test]
    fn test_round_trip_every_compatible_pair() {
        let value = Number::from_str("12.5").unwrap();
        let units: Vec<&Unit> = UNITS.iter().collect();
        for a in &units {
            for b in &units {
                if !a.is_compatible(b) {
                    continue;
                }
                let there = match a.convert_to(&value, b) {
                    Ok(v) => v,
                    Err(UnitError::OffsetUnitMix { .. }) => continue,
                    Err(e) => panic!("{} -> {}: {}", a.symbol, b.symbol, e),
                };
                let back = b.convert_to(&there, a).unwrap();
                let diff = back.sub(&value).abs().to_f64().unwrap();
                assert!(diff < 1e-9, "{} -> {} -> {}: {}", a.symbol, b.symbol, a.symbol, back);
            }
        }
    }
}
