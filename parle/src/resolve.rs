//! Free-form unit names to canonical units

use crate::error::ConversionError;
use crate::lexicon::{Lexicon, FRENCH};
use parle_units::{ResolvedUnit, UnitSystem, UNITS};
use tracing::debug;

/// Reads spoken or written unit names against a lexicon and a unit system
#[derive(Debug, Clone, Copy)]
pub struct Resolver<'a> {
    lexicon: &'a Lexicon,
    units: &'a UnitSystem,
}

impl Resolver<'static> {
    pub fn french() -> Self {
        Resolver::new(&FRENCH, &UNITS)
    }
}

impl<'a> Resolver<'a> {
    pub fn new(lexicon: &'a Lexicon, units: &'a UnitSystem) -> Self {
        Resolver { lexicon, units }
    }

    /// Resolve "kilomètres", "pieds", "km" or "°C" to a canonical unit.
    ///
    /// Symbols are tried first, in exact case. Otherwise the lower-cased
    /// name loses its spoken prefix, if any, and what remains is looked up
    /// in the synonym registry. A prefix is only kept when the unit accepts
    /// one; otherwise the unstripped name is tried instead.
    pub fn resolve(&self, raw: &str) -> Result<ResolvedUnit, ConversionError> {
        let raw = raw.trim();
        if let Some(resolved) = self.units.parse_symbol(raw) {
            debug!(raw, unit = %resolved, "resolved as symbol");
            return Ok(resolved);
        }

        let lowered = raw.to_lowercase();
        let found = self.lexicon.prefixes.lookup_prefix(&lowered);
        let mut prefix_refused = false;

        if let Some(prefix) = found.prefix {
            match self.lexicon.units.lookup(found.remainder) {
                Some(entry) if entry.prefixable => {
                    let resolved = ResolvedUnit::prefixed(prefix, entry.symbol);
                    debug!(
                        raw,
                        prefix = prefix.symbol,
                        multiplier = %found.multiplier(),
                        unit = entry.symbol,
                        "resolved as prefixed name"
                    );
                    return Ok(resolved);
                }
                Some(entry) => {
                    prefix_refused = true;
                    debug!(raw, unit = entry.symbol, "unit takes no prefix, retrying whole name");
                }
                None => debug!(raw, remainder = found.remainder, "no unit after prefix"),
            }
        }

        if let Some(entry) = self.lexicon.units.lookup(&lowered) {
            debug!(raw, unit = entry.symbol, "resolved as name");
            return Ok(ResolvedUnit::new(entry.symbol));
        }

        // A known unit behind a refused prefix is not the unknown part
        let unresolved = if found.remainder.is_empty() || prefix_refused {
            lowered.as_str()
        } else {
            found.remainder
        };
        debug!(raw, unresolved, "unknown unit");
        Err(ConversionError::UnknownUnit(unresolved.to_string()))
    }
}
