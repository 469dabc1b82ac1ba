//! SI decimal and IEC binary prefixes

use parle_core::Number;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Radix {
    Decimal,
    Binary,
}

/// A multiplicative scale modifier such as kilo (10^3) or kibi (2^10)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Prefix {
    pub symbol: &'static str,
    /// English name, used in unit names ("kilometer")
    pub name: &'static str,
    pub radix: Radix,
    pub exponent: i32,
}

const fn decimal(symbol: &'static str, name: &'static str, exponent: i32) -> Prefix {
    Prefix { symbol, name, radix: Radix::Decimal, exponent }
}

const fn binary(symbol: &'static str, name: &'static str, exponent: i32) -> Prefix {
    Prefix { symbol, name, radix: Radix::Binary, exponent }
}

/// Decimal prefixes, smallest first
pub const DECIMAL_PREFIXES: [Prefix; 20] = [
    decimal("y", "yocto", -24),
    decimal("z", "zepto", -21),
    decimal("a", "atto", -18),
    decimal("f", "femto", -15),
    decimal("p", "pico", -12),
    decimal("n", "nano", -9),
    decimal("µ", "micro", -6),
    decimal("m", "milli", -3),
    decimal("c", "centi", -2),
    decimal("d", "deci", -1),
    decimal("da", "deca", 1),
    decimal("h", "hecto", 2),
    decimal("k", "kilo", 3),
    decimal("M", "mega", 6),
    decimal("G", "giga", 9),
    decimal("T", "tera", 12),
    decimal("P", "peta", 15),
    decimal("E", "exa", 18),
    decimal("Z", "zetta", 21),
    decimal("Y", "yotta", 24),
];

/// Binary prefixes, smallest first
pub const BINARY_PREFIXES: [Prefix; 8] = [
    binary("Ki", "kibi", 10),
    binary("Mi", "mebi", 20),
    binary("Gi", "gibi", 30),
    binary("Ti", "tebi", 40),
    binary("Pi", "pebi", 50),
    binary("Ei", "exbi", 60),
    binary("Zi", "zebi", 70),
    binary("Yi", "yobi", 80),
];

impl Prefix {
    /// 10^exponent or 2^exponent
    pub fn multiplier(&self) -> Number {
        let base = match self.radix {
            Radix::Decimal => Number::from_i64(10),
            Radix::Binary => Number::from_i64(2),
        };
        // Exponents are bounded by the tables above, base is never zero
        base.pow(self.exponent).unwrap_or_else(|_| Number::one())
    }

    /// Find a prefix by symbol. `u` and the Greek `μ` are accepted for micro.
    pub fn from_symbol(symbol: &str) -> Option<Prefix> {
        let symbol = match symbol {
            "u" | "μ" => "µ",
            other => other,
        };
        DECIMAL_PREFIXES
            .iter()
            .chain(BINARY_PREFIXES.iter())
            .find(|p| p.symbol == symbol)
            .copied()
    }

    /// Engineering prefix (exponent multiple of 3) for a decimal exponent
    pub fn engineering(exponent: i32) -> Option<Prefix> {
        if exponent == 0 || exponent % 3 != 0 {
            return None;
        }
        DECIMAL_PREFIXES.iter().find(|p| p.exponent == exponent).copied()
    }

    /// Every symbol spelling that may start a prefixed unit symbol,
    /// longest first so that "da" wins over "d" and "Ki" over nothing.
    pub(crate) fn symbol_spellings() -> Vec<(&'static str, Prefix)> {
        let mut spellings: Vec<(&'static str, Prefix)> = DECIMAL_PREFIXES
            .iter()
            .chain(BINARY_PREFIXES.iter())
            .map(|p| (p.symbol, *p))
            .collect();
        if let Some(micro) = Prefix::from_symbol("µ") {
            spellings.push(("u", micro));
            spellings.push(("μ", micro));
        }
        spellings.sort_by_key(|(s, _)| std::cmp::Reverse(s.chars().count()));
        spellings
    }
}

impl fmt::Display for Prefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_multiplier() {
        let kilo = Prefix::from_symbol("k").unwrap();
        assert_eq!(kilo.multiplier(), Number::from_i64(1000));

        let milli = Prefix::from_symbol("m").unwrap();
        assert_eq!(milli.multiplier(), Number::from_str("0.001").unwrap());

        let kibi = Prefix::from_symbol("Ki").unwrap();
        assert_eq!(kibi.multiplier(), Number::from_i64(1024));
    }

    #[test]
    fn test_micro_spellings() {
        assert_eq!(Prefix::from_symbol("u"), Prefix::from_symbol("µ"));
        assert_eq!(Prefix::from_symbol("μ"), Prefix::from_symbol("µ"));
        assert!(Prefix::from_symbol("x").is_none());
    }

    #[test]
    fn test_engineering() {
        assert_eq!(Prefix::engineering(3).map(|p| p.symbol), Some("k"));
        assert_eq!(Prefix::engineering(-3).map(|p| p.symbol), Some("m"));
        assert_eq!(Prefix::engineering(6).map(|p| p.symbol), Some("M"));
        assert!(Prefix::engineering(0).is_none());
        assert!(Prefix::engineering(2).is_none());
        assert!(Prefix::engineering(27).is_none());
    }

    #[test]
    fn test_spellings_longest_first() {
        let spellings = Prefix::symbol_spellings();
        let da = spellings.iter().position(|(s, _)| *s == "da").unwrap();
        let d = spellings.iter().position(|(s, _)| *s == "d").unwrap();
        assert!(da < d);
    }
}
