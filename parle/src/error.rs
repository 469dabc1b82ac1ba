//! Conversion errors
//!
//! Every error carries the text needed to tell the user what went wrong.
//! Turning an error into a sentence is left to the caller.

use parle_units::UnitError;
use serde::Serialize;
use thiserror::Error;

/// Machine-readable error codes
pub mod codes {
    pub const UNKNOWN_UNIT: &str = "UNKNOWN_UNIT";
    pub const INCOMPATIBLE_UNITS: &str = "INCOMPATIBLE_UNITS";
    pub const NO_DEFAULT_UNIT: &str = "NO_DEFAULT_UNIT";
    pub const OFFSET_UNIT_MIX: &str = "OFFSET_UNIT_MIX";
    pub const INTERNAL: &str = "INTERNAL";
}

#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "kind", content = "detail", rename_all = "snake_case")]
pub enum ConversionError {
    /// The text could not be read as a unit
    #[error("unknown unit: {0}")]
    UnknownUnit(String),

    /// Both units exist but measure different things
    #[error("cannot convert {from} to {to}: incompatible units")]
    IncompatibleUnits { from: String, to: String },

    /// No destination was given and none could be chosen
    #[error("no default destination for {0}")]
    NoDefaultUnit(String),

    /// An absolute temperature met a temperature interval
    #[error("cannot mix absolute temperature and temperature interval: {from} to {to}")]
    OffsetUnitMix { from: String, to: String },

    /// Malformed tables or arithmetic failure, not the user's fault
    #[error("internal error: {0}")]
    Internal(String),
}

impl ConversionError {
    pub fn code(&self) -> &'static str {
        match self {
            ConversionError::UnknownUnit(_) => codes::UNKNOWN_UNIT,
            ConversionError::IncompatibleUnits { .. } => codes::INCOMPATIBLE_UNITS,
            ConversionError::NoDefaultUnit(_) => codes::NO_DEFAULT_UNIT,
            ConversionError::OffsetUnitMix { .. } => codes::OFFSET_UNIT_MIX,
            ConversionError::Internal(_) => codes::INTERNAL,
        }
    }

    /// True when rephrasing the request can fix it
    pub fn is_user_error(&self) -> bool {
        !matches!(self, ConversionError::Internal(_))
    }

    /// Map a unit system failure met while converting `from` into `to`.
    /// `from` and `to` are the texts the user gave.
    pub(crate) fn from_unit_error(err: UnitError, from: &str, to: &str) -> Self {
        match err {
            UnitError::IncompatibleDimensions { .. } => ConversionError::IncompatibleUnits {
                from: from.to_string(),
                to: to.to_string(),
            },
            UnitError::OffsetUnitMix { .. } => ConversionError::OffsetUnitMix {
                from: from.to_string(),
                to: to.to_string(),
            },
            UnitError::NotPrefixable { .. } => ConversionError::UnknownUnit(from.to_string()),
            UnitError::UnknownSymbol(_) | UnitError::NoCoherentUnit(_) | UnitError::Number(_) => {
                ConversionError::Internal(err.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parle_units::Dimension;

    #[test]
    fn test_codes() {
        assert_eq!(ConversionError::UnknownUnit("x".into()).code(), codes::UNKNOWN_UNIT);
        assert_eq!(ConversionError::Internal("x".into()).code(), codes::INTERNAL);
    }

    #[test]
    fn test_user_errors() {
        assert!(ConversionError::NoDefaultUnit("x".into()).is_user_error());
        assert!(!ConversionError::Internal("x".into()).is_user_error());
    }

    #[test]
    fn test_from_incompatible_dimensions() {
        let err = UnitError::IncompatibleDimensions {
            from: "mi".into(),
            to: "s".into(),
            from_dim: Dimension::LENGTH,
            to_dim: Dimension::TIME,
        };
        let mapped = ConversionError::from_unit_error(err, "miles", "secondes");
        assert_eq!(
            mapped,
            ConversionError::IncompatibleUnits { from: "miles".into(), to: "secondes".into() }
        );
    }

    #[test]
    fn test_from_table_fault() {
        let err = UnitError::UnknownSymbol("furlong".into());
        let mapped = ConversionError::from_unit_error(err, "furlongs", "m");
        assert!(matches!(mapped, ConversionError::Internal(_)));
    }

    #[test]
    fn test_serialize() {
        let err = ConversionError::IncompatibleUnits { from: "miles".into(), to: "secondes".into() };
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["kind"], "incompatible_units");
        assert_eq!(json["detail"]["from"], "miles");

        let json = serde_json::to_value(ConversionError::UnknownUnit("foo".into())).unwrap();
        assert_eq!(json["detail"], "foo");
    }
}
