//! Spoken prefix names ("kilo", "déci", "kibi") mapped to unit prefixes

use parle_core::Number;
use parle_units::{Prefix, BINARY_PREFIXES, DECIMAL_PREFIXES};

/// A spoken prefix name bound to its unit prefix
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrefixEntry {
    /// Lower-case spoken form, e.g. "méga"
    pub name: &'static str,
    pub prefix: Prefix,
}

/// Result of stripping a spoken prefix from a unit name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrefixMatch<'a> {
    pub prefix: Option<Prefix>,
    pub remainder: &'a str,
}

impl PrefixMatch<'_> {
    /// 1 when no prefix matched
    pub fn multiplier(&self) -> Number {
        self.prefix.map(|p| p.multiplier()).unwrap_or_else(Number::one)
    }
}

/// Ordered prefix table.
///
/// Lookup is first match in declaration order, not longest match. The
/// French table lists decimal prefixes smallest first, then binary
/// prefixes smallest first.
#[derive(Debug, Clone)]
pub struct PrefixTable {
    entries: Vec<PrefixEntry>,
}

impl PrefixTable {
    pub fn new(entries: Vec<PrefixEntry>) -> Self {
        PrefixTable { entries }
    }

    pub fn french() -> Self {
        const DECIMAL_NAMES: [&str; 20] = [
            "yocto", "zepto", "atto", "femto", "pico", "nano", "micro", "milli", "centi", "déci",
            "déca", "hecto", "kilo", "méga", "giga", "téra", "péta", "exa", "zetta", "yotta",
        ];
        const BINARY_NAMES: [&str; 8] = ["kibi", "mebi", "gibi", "tebi", "pebi", "exbi", "zebi", "yobi"];

        let entries = DECIMAL_NAMES
            .iter()
            .zip(DECIMAL_PREFIXES)
            .chain(BINARY_NAMES.iter().zip(BINARY_PREFIXES))
            .map(|(&name, prefix)| PrefixEntry { name, prefix })
            .collect();
        PrefixTable::new(entries)
    }

    /// Strip the first declared prefix name that starts `raw` (expected lower-case).
    ///
    /// Never fails: without a match the remainder is the whole input.
    pub fn lookup_prefix<'a>(&self, raw: &'a str) -> PrefixMatch<'a> {
        self.entries
            .iter()
            .find_map(|entry| {
                raw.strip_prefix(entry.name).map(|remainder| PrefixMatch {
                    prefix: Some(entry.prefix),
                    remainder,
                })
            })
            .unwrap_or(PrefixMatch { prefix: None, remainder: raw })
    }

    /// Spoken name of a prefix, for rendering ("kilo" for k)
    pub fn name_for(&self, prefix: &Prefix) -> Option<&'static str> {
        self.entries.iter().find(|e| e.prefix == *prefix).map(|e| e.name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &PrefixEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_prefix() {
        let table = PrefixTable::french();
        let found = table.lookup_prefix("kilomètres");
        assert_eq!(found.prefix.map(|p| p.symbol), Some("k"));
        assert_eq!(found.remainder, "mètres");
        assert_eq!(found.multiplier(), Number::from_i64(1000));
    }

    #[test]
    fn test_lookup_accented_names() {
        let table = PrefixTable::french();
        assert_eq!(table.lookup_prefix("décimètre").prefix.map(|p| p.symbol), Some("d"));
        assert_eq!(table.lookup_prefix("décamètre").prefix.map(|p| p.symbol), Some("da"));
        assert_eq!(table.lookup_prefix("mégaoctets").prefix.map(|p| p.symbol), Some("M"));
        assert_eq!(table.lookup_prefix("kibioctet").prefix.map(|p| p.symbol), Some("Ki"));
    }

    #[test]
    fn test_no_prefix() {
        let table = PrefixTable::french();
        let found = table.lookup_prefix("mètres");
        assert!(found.prefix.is_none());
        assert_eq!(found.remainder, "mètres");
        assert_eq!(found.multiplier(), Number::one());

        // "mile" and "millénaire" are not milli-anything
        assert!(table.lookup_prefix("miles").prefix.is_none());
        assert!(table.lookup_prefix("millénaire").prefix.is_none());
    }

    #[test]
    fn test_declaration_order_wins() {
        let kilo = Prefix::from_symbol("k").unwrap();
        let kibi = Prefix::from_symbol("Ki").unwrap();
        let table = PrefixTable::new(vec![
            PrefixEntry { name: "ki", prefix: kibi },
            PrefixEntry { name: "kilo", prefix: kilo },
        ]);
        let found = table.lookup_prefix("kilomètre");
        assert_eq!(found.prefix, Some(kibi));
        assert_eq!(found.remainder, "lomètre");
    }

    #[test]
    fn test_names_are_unambiguous() {
        let table = PrefixTable::french();
        for a in table.iter() {
            for b in table.iter() {
                if a != b {
                    assert!(!b.name.starts_with(a.name), "{} shadows {}", a.name, b.name);
                }
            }
        }
    }

    #[test]
    fn test_name_for() {
        let table = PrefixTable::french();
        assert_eq!(table.len(), 28);
        assert_eq!(table.name_for(&Prefix::from_symbol("M").unwrap()), Some("méga"));
        assert_eq!(table.name_for(&Prefix::from_symbol("µ").unwrap()), Some("micro"));
    }
}
