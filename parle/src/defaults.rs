//! Destination unit when the user names none

use crate::error::ConversionError;
use parle_units::{Prefix, Quantity, ResolvedUnit, UnitSystem};
use std::sync::LazyLock;
use tracing::debug;

/// Overrides shared by every French converter
pub static DEFAULTS: LazyLock<DefaultPolicy> = LazyLock::new(DefaultPolicy::everyday);

/// Everyday destination units, consulted before SI reduction.
///
/// Reducing a temperature to kelvin is correct but nobody says it; the
/// overrides pick what a listener expects instead.
#[derive(Debug, Clone)]
pub struct DefaultPolicy {
    overrides: Vec<(&'static str, ResolvedUnit)>,
}

impl DefaultPolicy {
    pub fn new(overrides: Vec<(&'static str, ResolvedUnit)>) -> Self {
        DefaultPolicy { overrides }
    }

    /// Policy without overrides: everything goes through SI reduction
    pub fn reduce_only() -> Self {
        DefaultPolicy::new(Vec::new())
    }

    pub fn everyday() -> Self {
        let kilo = |symbol: &str| match Prefix::from_symbol("k") {
            Some(k) => ResolvedUnit::prefixed(k, symbol),
            None => ResolvedUnit::new(symbol),
        };
        DefaultPolicy::new(vec![
            ("K", ResolvedUnit::new("degC")),
            ("degF", ResolvedUnit::new("degC")),
            ("degC", ResolvedUnit::new("degF")),
            ("mi", kilo("m")),
            ("mi/h", kilo("m/h")),
            ("kn", kilo("m/h")),
            ("nmi", kilo("m")),
        ])
    }

    /// Override for an unprefixed canonical symbol
    pub fn default_for(&self, symbol: &str) -> Option<&ResolvedUnit> {
        self.overrides.iter().find(|(from, _)| *from == symbol).map(|(_, to)| to)
    }

    /// Express `quantity` in its default destination: the override when
    /// one exists, else its natural SI form. `source_raw` is the text the
    /// user gave, used in errors.
    pub fn apply(
        &self,
        units: &UnitSystem,
        quantity: &Quantity,
        source_raw: &str,
    ) -> Result<Quantity, ConversionError> {
        let unit = &quantity.unit;
        if unit.prefix.is_none() {
            if let Some(target) = self.default_for(&unit.symbol) {
                debug!(from = %unit.symbol, to = %target, "default unit override");
                return units
                    .convert(quantity, target)
                    .map_err(|e| ConversionError::from_unit_error(e, source_raw, &target.to_string()));
            }
        }

        units.reduce_to_natural(quantity).map_err(|e| {
            debug!(from = %unit.symbol, error = %e, "no natural unit");
            ConversionError::NoDefaultUnit(source_raw.to_string())
        })
    }
}

impl Default for DefaultPolicy {
    fn default() -> Self {
        Self::everyday()
    }
}
