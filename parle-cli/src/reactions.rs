//! What to tell the user when a conversion fails

use parle::ConversionError;

/// French reply for a failed conversion
pub fn reaction(err: &ConversionError) -> String {
    match err {
        ConversionError::UnknownUnit(text) => format!("Désolée, je ne sais pas convertir les {}", text),
        ConversionError::IncompatibleUnits { from, to } => {
            format!("Désolée, je ne sais pas convertir les {} en {}", from, to)
        }
        ConversionError::NoDefaultUnit(source) => {
            format!("Désolée, je ne sais pas en quoi convertir les {}", source)
        }
        ConversionError::OffsetUnitMix { .. } => {
            "Désolée, je ne peux pas mélanger une température et un écart de température".to_string()
        }
        ConversionError::Internal(_) => "Désolée, une erreur est survenue".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_unit() {
        let err = ConversionError::UnknownUnit("foobarbaz".into());
        assert_eq!(reaction(&err), "Désolée, je ne sais pas convertir les foobarbaz");
    }

    #[test]
    fn test_incompatible_units() {
        let err = ConversionError::IncompatibleUnits { from: "miles".into(), to: "secondes".into() };
        assert_eq!(reaction(&err), "Désolée, je ne sais pas convertir les miles en secondes");
    }

    #[test]
    fn test_internal_hides_details() {
        let err = ConversionError::Internal("division by zero".into());
        assert!(!reaction(&err).contains("division"));
    }
}
