//! Number and phrase conventions of the output language

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Where the rendered phrase goes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Channel {
    /// Printed text: "3 175,15"
    #[default]
    Written,
    /// Text handed to a speech synthesizer: "3175 virgule 15"
    Spoken,
}

impl FromStr for Channel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "written" | "ecrit" | "écrit" => Ok(Channel::Written),
            "spoken" | "oral" => Ok(Channel::Spoken),
            other => Err(format!("unknown channel: {}", other)),
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Channel::Written => write!(f, "written"),
            Channel::Spoken => write!(f, "spoken"),
        }
    }
}

/// Language conventions used by the formatter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Locale {
    pub decimal_separator: &'static str,
    /// Decimal separator as a word, for speech
    pub spoken_decimal_separator: &'static str,
    /// Thousands separator in written output
    pub group_separator: &'static str,
    pub spoken_minus: &'static str,
    /// Smallest absolute magnitude taking a plural unit name
    pub plural_from: i64,
    /// Word rendering of a squared unit symbol
    pub squared: &'static str,
    pub cubed: &'static str,
    /// Links the source quantity to the result: "{source} {link} {result}"
    pub equals: &'static str,
}

pub const FRENCH_LOCALE: Locale = Locale {
    decimal_separator: ",",
    spoken_decimal_separator: "virgule",
    group_separator: " ",
    spoken_minus: "moins",
    plural_from: 2,
    squared: " carré",
    cubed: " cube",
    equals: "est égal à",
};

impl Default for Locale {
    fn default() -> Self {
        FRENCH_LOCALE
    }
}
