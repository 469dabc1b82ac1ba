//! Unit representation with conversion factors

use crate::{Dimension, Prefix};
use parle_core::{Number, NumberError};
use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// How values of a unit relate to the coherent SI unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Scale {
    /// value_si = value * factor
    Linear,
    /// Absolute point on an offset scale: value_si = value * factor + offset
    Absolute,
    /// Interval on an offset scale (a temperature difference)
    Delta,
}

/// Represents a physical unit with its dimension and conversion factors
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Unit {
    /// Full symbol including any prefix (e.g. "km", "MiB", "m²")
    pub symbol: String,
    /// Canonical symbol without prefix (e.g. "m")
    pub base: String,
    /// English name (e.g. "kilometer")
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prefix: Option<Prefix>,
    pub dimension: Dimension,
    /// Factor to the coherent SI unit of the dimension
    pub factor: Number,
    /// Offset for affine scales (Celsius, Fahrenheit)
    pub offset: Number,
    pub scale: Scale,
    /// Power a prefix multiplier is raised to: 1 for m, 2 for m², 0 if unprefixable
    pub prefix_power: i32,
}

impl Unit {
    /// Create a new unit with proportional conversion (no offset)
    pub fn new(symbol: &str, name: &str, dimension: Dimension, factor: Number) -> Self {
        Unit {
            symbol: symbol.to_string(),
            base: symbol.to_string(),
            name: name.to_string(),
            prefix: None,
            dimension,
            factor,
            offset: Number::zero(),
            scale: Scale::Linear,
            prefix_power: 1,
        }
    }

    /// Absolute unit on an offset scale (value_si = value * factor + offset)
    pub fn absolute(symbol: &str, name: &str, dimension: Dimension, factor: Number, offset: Number) -> Self {
        Unit {
            offset,
            scale: Scale::Absolute,
            prefix_power: 0,
            ..Unit::new(symbol, name, dimension, factor)
        }
    }

    /// Interval on an offset scale; converts linearly
    pub fn delta(symbol: &str, name: &str, dimension: Dimension, factor: Number) -> Self {
        Unit {
            scale: Scale::Delta,
            prefix_power: 0,
            ..Unit::new(symbol, name, dimension, factor)
        }
    }

    /// Builder: set the power applied to prefix multipliers
    pub fn with_prefix_power(mut self, power: i32) -> Self {
        self.prefix_power = power;
        self
    }

    pub fn is_prefixable(&self) -> bool {
        self.prefix_power != 0
    }

    pub fn has_offset(&self) -> bool {
        !self.offset.is_zero()
    }

    /// Check if two units are dimensionally compatible (can be converted)
    pub fn is_compatible(&self, other: &Unit) -> bool {
        self.dimension == other.dimension
    }

    /// The canonical (prefix, symbol) pair this unit was built from
    pub fn resolved(&self) -> ResolvedUnit {
        ResolvedUnit { prefix: self.prefix, symbol: self.base.clone() }
    }

    /// Apply a prefix: "m" + kilo → "km" with factor * 1000^prefix_power
    pub fn with_prefix(&self, prefix: Prefix) -> Result<Unit, UnitError> {
        if !self.is_prefixable() || self.prefix.is_some() {
            return Err(UnitError::NotPrefixable {
                symbol: self.symbol.clone(),
                prefix: prefix.symbol.to_string(),
            });
        }
        let multiplier = prefix.multiplier().pow(self.prefix_power)?;
        Ok(Unit {
            symbol: format!("{}{}", prefix.symbol, self.symbol),
            name: format!("{}{}", prefix.name, self.name),
            prefix: Some(prefix),
            factor: self.factor.mul(&multiplier),
            ..self.clone()
        })
    }

    /// Convert a value from this unit to the coherent SI unit
    pub fn to_si(&self, value: &Number) -> Number {
        value.mul(&self.factor).add(&self.offset)
    }

    /// Convert a value from the coherent SI unit to this unit
    pub fn from_si(&self, value_si: &Number) -> Result<Number, NumberError> {
        value_si.sub(&self.offset).checked_div(&self.factor)
    }

    /// Convert a value from this unit to another unit
    pub fn convert_to(&self, value: &Number, target: &Unit) -> Result<Number, UnitError> {
        if !self.is_compatible(target) {
            return Err(UnitError::IncompatibleDimensions {
                from: self.symbol.clone(),
                to: target.symbol.clone(),
                from_dim: self.dimension,
                to_dim: target.dimension,
            });
        }

        let mixes_scales = matches!(
            (self.scale, target.scale),
            (Scale::Absolute, Scale::Delta) | (Scale::Delta, Scale::Absolute)
        );
        if mixes_scales {
            return Err(UnitError::OffsetUnitMix {
                from: self.symbol.clone(),
                to: target.symbol.clone(),
            });
        }

        Ok(target.from_si(&self.to_si(value))?)
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol)
    }
}

/// A canonical unit symbol with an optional prefix, as produced by resolution
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedUnit {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prefix: Option<Prefix>,
    pub symbol: String,
}

impl ResolvedUnit {
    pub fn new(symbol: impl Into<String>) -> Self {
        ResolvedUnit { prefix: None, symbol: symbol.into() }
    }

    pub fn prefixed(prefix: Prefix, symbol: impl Into<String>) -> Self {
        ResolvedUnit { prefix: Some(prefix), symbol: symbol.into() }
    }

    /// 1 when there is no prefix
    pub fn prefix_multiplier(&self) -> Number {
        self.prefix.map(|p| p.multiplier()).unwrap_or_else(Number::one)
    }
}

impl fmt::Display for ResolvedUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.prefix {
            Some(prefix) => write!(f, "{}{}", prefix.symbol, self.symbol),
            None => write!(f, "{}", self.symbol),
        }
    }
}

/// Errors raised by the unit system
#[derive(Debug, Clone, PartialEq, Error)]
pub enum UnitError {
    #[error("unknown unit symbol: {0}")]
    UnknownSymbol(String),

    #[error("cannot convert {from} ({from_dim}) to {to} ({to_dim}): incompatible dimensions")]
    IncompatibleDimensions {
        from: String,
        to: String,
        from_dim: Dimension,
        to_dim: Dimension,
    },

    #[error("cannot convert between absolute temperature and temperature interval: {from} to {to}")]
    OffsetUnitMix { from: String, to: String },

    #[error("unit {symbol} does not accept the prefix {prefix}")]
    NotPrefixable { symbol: String, prefix: String },

    #[error("no coherent unit for dimension {0}")]
    NoCoherentUnit(Dimension),

    #[error("numeric error: {0}")]
    Number(#[from] NumberError),
}
