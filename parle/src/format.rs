//! Rendering quantities as words

use crate::lexicon::Lexicon;
use crate::locale::{Channel, Locale};
use parle_core::Number;
use parle_units::{Quantity, Unit};

/// Fractional digits kept in rendered magnitudes
const FRACTION_DIGITS: u32 = 2;

/// Stray placeholder some composite unit names carry
const PLACEHOLDER: &str = "{0}";

/// Renders magnitudes and unit names for one channel
#[derive(Debug, Clone, Copy)]
pub struct Formatter<'a> {
    lexicon: &'a Lexicon,
    locale: Locale,
    channel: Channel,
}

impl<'a> Formatter<'a> {
    pub fn new(lexicon: &'a Lexicon, locale: Locale, channel: Channel) -> Self {
        Formatter { lexicon, locale, channel }
    }

    /// "3 175,15" written, "3175 virgule 15" spoken, "68" for whole values
    pub fn format_number(&self, value: &Number) -> String {
        let rounded = value.round_to(FRACTION_DIGITS);
        if rounded.is_zero() {
            return "0".to_string();
        }

        let text = rounded.abs().as_decimal(FRACTION_DIGITS);
        let (integer, fraction) = match text.split_once('.') {
            Some((integer, fraction)) => (integer, fraction.trim_end_matches('0')),
            None => (text.as_str(), ""),
        };

        let mut out = String::new();
        if rounded.is_negative() {
            match self.channel {
                Channel::Written => out.push('-'),
                Channel::Spoken => {
                    out.push_str(self.locale.spoken_minus);
                    out.push(' ');
                }
            }
        }

        match self.channel {
            Channel::Written => out.push_str(&group_thousands(integer, self.locale.group_separator)),
            Channel::Spoken => out.push_str(integer),
        }

        if !fraction.is_empty() {
            match self.channel {
                Channel::Written => out.push_str(self.locale.decimal_separator),
                Channel::Spoken => {
                    out.push(' ');
                    out.push_str(self.locale.spoken_decimal_separator);
                    out.push(' ');
                }
            }
            out.push_str(fraction);
        }
        out
    }

    /// Name of `unit` for a magnitude, e.g. "kilomètres" or "degré Celsius"
    pub fn unit_name(&self, unit: &Unit, value: &Number) -> String {
        let plural = value.round_to(FRACTION_DIGITS).abs() >= Number::from_i64(self.locale.plural_from);

        let named = self.lexicon.units.get(&unit.base).and_then(|entry| {
            let name = entry.name_for_count(plural);
            match unit.prefix {
                Some(prefix) => self
                    .lexicon
                    .prefixes
                    .name_for(&prefix)
                    .map(|prefix_name| format!("{}{}", prefix_name, name)),
                None => Some(name.to_string()),
            }
        });

        let name = named.unwrap_or_else(|| self.symbol_fallback(&unit.symbol));
        clean(&name)
    }

    /// "27,36 kilomètres"
    pub fn format(&self, quantity: &Quantity) -> String {
        format!(
            "{} {}",
            self.format_number(&quantity.value),
            self.unit_name(&quantity.unit, &quantity.value)
        )
    }

    /// "17 miles est égal à 27,36 kilomètres"
    pub fn phrase(&self, magnitude: &Number, source_raw: &str, result: &Quantity) -> String {
        let sentence = format!(
            "{} {} {} {}",
            self.format_number(magnitude),
            source_raw.trim(),
            self.locale.equals,
            self.format(result)
        );
        clean(&sentence)
    }

    fn symbol_fallback(&self, symbol: &str) -> String {
        match self.channel {
            Channel::Written => symbol.to_string(),
            Channel::Spoken => symbol
                .replace('²', self.locale.squared)
                .replace('³', self.locale.cubed),
        }
    }
}

/// "3175" -> "3 175"
fn group_thousands(digits: &str, separator: &str) -> String {
    let len = digits.chars().count();
    let mut out = String::with_capacity(digits.len() + len / 3 * separator.len());
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push_str(separator);
        }
        out.push(c);
    }
    out
}

/// Drop placeholder artifacts and collapse whitespace
fn clean(text: &str) -> String {
    text.replace(PLACEHOLDER, "").split_whitespace().collect::<Vec<_>>().join(" ")
}
