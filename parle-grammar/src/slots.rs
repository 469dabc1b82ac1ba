//! Slot values: every spoken unit name, with prefixed forms

use crate::GrammarError;
use parle::Lexicon;
use std::collections::BTreeSet;
use std::io::Write;
use tracing::debug;

/// Sorted, deduplicated unit names. Prefixable units also appear under
/// every spoken prefix ("kilomètre", "millimètre", ...).
pub fn slot_values(lexicon: &Lexicon) -> Vec<String> {
    let mut values = BTreeSet::new();
    for entry in lexicon.units.iter() {
        for synonym in entry.synonyms {
            values.insert(synonym.to_string());
            if entry.prefixable {
                for prefix in lexicon.prefixes.iter() {
                    values.insert(format!("{}{}", prefix.name, synonym));
                }
            }
        }
    }
    debug!(count = values.len(), "slot values");
    values.into_iter().collect()
}

/// One slot value per line
pub fn write_slots(lexicon: &Lexicon, out: &mut dyn Write) -> Result<usize, GrammarError> {
    let values = slot_values(lexicon);
    for value in &values {
        writeln!(out, "{}", value)?;
    }
    Ok(values.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use parle::{Resolver, FRENCH, UNITS};

    #[test]
    fn test_prefixed_forms_for_prefixable_units_only() {
        let values = slot_values(&FRENCH);
        assert!(values.contains(&"mètre".to_string()));
        assert!(values.contains(&"kilomètre".to_string()));
        assert!(values.contains(&"mégaoctets".to_string()));
        assert!(values.contains(&"heures".to_string()));
        assert!(!values.contains(&"kiloheures".to_string()));
        assert!(!values.contains(&"millimiles".to_string()));
    }

    #[test]
    fn test_sorted_and_unique() {
        let values = slot_values(&FRENCH);
        assert!(values.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_every_slot_value_resolves() {
        let resolver = Resolver::new(&FRENCH, &UNITS);
        for value in slot_values(&FRENCH) {
            assert!(resolver.resolve(&value).is_ok(), "{}", value);
        }
    }

    #[test]
    fn test_write_slots() {
        let mut out = Vec::new();
        let count = write_slots(&FRENCH, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.lines().count(), count);
        assert!(text.lines().any(|l| l == "pieds"));
    }
}
