//! Training sentences for the unit conversion intent
//!
//! Sentences annotate their slots as `[text](slot)`. Each sentence is
//! emitted as is, then with the source unit reworded, then the destination
//! unit, then both.

use crate::GrammarError;
use regex::Regex;
use std::io::Write;
use tracing::debug;

pub const SENTENCES: &[&str] = &[
    "[17](quantity) [miles](source_unit), ça fait beaucoup ?",
    "Je mesure [170](quantity) [centimètres](source_unit), je mesure combien en [pieds](dest_unit) ?",
    "Si la vitesse est limitée à [60](quantity) [miles par heure](source_unit), à combien je peux rouler en [kilomètre heure](dest_unit) ?",
    "Si je roule à [80](quantity) [kilomètres à l'heure](source_unit), je roule à combien en [miles par heure](dest_unit) ?",
    "Si je fais [deux](quantity) [mètres](source_unit), ça fait combien en [pieds](dest_unit) ?",
    "[537](quantity) [minutes](source_unit), ça fait combien [d'heures](dest_unit) ?",
    "[Quarante](quantity) [yards](source_unit) en [miles](dest_unit), ça fait combien ?",
    "La conversion de [trois](quantity) [gallons](source_unit) en [litres](dest_unit) ?",
    "[7](quantity) [livres](source_unit) en [grammes](dest_unit) ?",
    "Donne-moi [20](quantity) [degrés](source_unit) en [fahrenheit](dest_unit)",
    "Ça fait combien [quatre](quantity) [miles](source_unit) en [kilomètres](dest_unit) ?",
    "Combien font [deux](quantity) [pouces](source_unit) ?",
    "Convertis [un](quantity) [mètre](source_unit) en [pouces](dest_unit)",
];

/// Other ways a recognizer hears or a user says each annotated unit
pub const ALTERNATIVES: &[(&str, &str)] = &[
    ("miles", "miles"),
    ("centimètres", "cm"),
    ("pieds", "pieds"),
    ("miles par heure", "miles à l'heure"),
    ("kilomètre heure", "kilomètres par heure"),
    ("kilomètres à l'heure", "kilomètres par heure"),
    ("mètres", "m"),
    ("minutes", "mn"),
    ("d'heures", "en heures"),
    ("yards", "yards"),
    ("gallons", "gallons"),
    ("litres", "l"),
    ("livres", "livres"),
    ("grammes", "g"),
    ("degrés", "degrés"),
    ("fahrenheit", "fahrenheit"),
    ("kilomètres", "km"),
    ("pouces", "pouces"),
    ("mètre", "m"),
];

const SOURCE_SLOT: &str = "source_unit";
const DEST_SLOT: &str = "dest_unit";

/// Expands annotated sentences with alternative unit wordings
#[derive(Debug, Clone)]
pub struct IntentGenerator {
    source: Regex,
    dest: Regex,
    alternatives: Vec<(&'static str, &'static str)>,
}

impl IntentGenerator {
    pub fn new() -> Result<Self, GrammarError> {
        Self::with_alternatives(ALTERNATIVES.to_vec())
    }

    pub fn with_alternatives(alternatives: Vec<(&'static str, &'static str)>) -> Result<Self, GrammarError> {
        Ok(IntentGenerator {
            source: slot_pattern(SOURCE_SLOT)?,
            dest: slot_pattern(DEST_SLOT)?,
            alternatives,
        })
    }

    fn alternative(&self, unit: &str) -> Result<&'static str, GrammarError> {
        self.alternatives
            .iter()
            .find(|(said, _)| *said == unit)
            .map(|(_, alt)| *alt)
            .ok_or_else(|| GrammarError::MissingAlternative(unit.to_string()))
    }

    /// The sentence followed by its reworded variants, without duplicates
    pub fn expand(&self, sentence: &str) -> Result<Vec<String>, GrammarError> {
        let mut sentences = vec![sentence.to_string()];
        let mut push = |candidate: String| {
            if !sentences.contains(&candidate) {
                sentences.push(candidate);
            }
        };

        let source = first_capture(&self.source, sentence);
        let dest = first_capture(&self.dest, sentence);

        if let Some(unit) = source {
            push(replace_slot(sentence, SOURCE_SLOT, unit, self.alternative(unit)?));
        }
        if let Some(unit) = dest {
            push(replace_slot(sentence, DEST_SLOT, unit, self.alternative(unit)?));
        }
        if let (Some(source_unit), Some(dest_unit)) = (source, dest) {
            let both = replace_slot(sentence, DEST_SLOT, dest_unit, self.alternative(dest_unit)?);
            push(replace_slot(&both, SOURCE_SLOT, source_unit, self.alternative(source_unit)?));
        }
        Ok(sentences)
    }

    /// Every sentence of `templates`, expanded
    pub fn generate(&self, templates: &[&str]) -> Result<Vec<String>, GrammarError> {
        let mut out = Vec::new();
        for template in templates {
            out.extend(self.expand(template)?);
        }
        debug!(templates = templates.len(), sentences = out.len(), "intent sentences");
        Ok(out)
    }

    /// One sentence per line
    pub fn write(&self, templates: &[&str], out: &mut dyn Write) -> Result<usize, GrammarError> {
        let sentences = self.generate(templates)?;
        for sentence in &sentences {
            writeln!(out, "{}", sentence)?;
        }
        Ok(sentences.len())
    }
}

fn slot_pattern(slot: &str) -> Result<Regex, GrammarError> {
    Ok(Regex::new(&format!(r"\[([\w\s']+)\]\({}\)", regex::escape(slot)))?)
}

fn first_capture<'t>(pattern: &Regex, text: &'t str) -> Option<&'t str> {
    pattern.captures(text).and_then(|c| c.get(1)).map(|m| m.as_str())
}

fn replace_slot(sentence: &str, slot: &str, old: &str, new: &str) -> String {
    sentence.replace(&format!("[{}]({})", old, slot), &format!("[{}]({})", new, slot))
}

#[cfg(test)]
mod tests {
    use super::*;
    use parle::{Resolver, FRENCH, UNITS};

    #[test]
    fn test_expand_both_slots() {
        let generator = IntentGenerator::new().unwrap();
        let sentences = generator.expand("[7](quantity) [livres](source_unit) en [grammes](dest_unit) ?").unwrap();
        assert_eq!(
            sentences,
            vec![
                "[7](quantity) [livres](source_unit) en [grammes](dest_unit) ?",
                "[7](quantity) [livres](source_unit) en [g](dest_unit) ?",
            ]
        );
    }

    #[test]
    fn test_expand_all_variants() {
        let generator = IntentGenerator::new().unwrap();
        let sentences = generator
            .expand("Convertis [un](quantity) [mètres](source_unit) en [kilomètres](dest_unit)")
            .unwrap();
        assert_eq!(sentences.len(), 4);
        assert_eq!(sentences[3], "Convertis [un](quantity) [m](source_unit) en [km](dest_unit)");
    }

    #[test]
    fn test_expand_source_only() {
        let generator = IntentGenerator::new().unwrap();
        let sentences = generator.expand("[17](quantity) [miles](source_unit), ça fait beaucoup ?").unwrap();
        assert_eq!(sentences.len(), 1);
    }

    #[test]
    fn test_missing_alternative() {
        let generator = IntentGenerator::with_alternatives(Vec::new()).unwrap();
        let err = generator.expand("[1](quantity) [pieds](source_unit)").unwrap_err();
        assert!(matches!(err, GrammarError::MissingAlternative(unit) if unit == "pieds"));
    }

    #[test]
    fn test_generate_all_templates() {
        let generator = IntentGenerator::new().unwrap();
        let sentences = generator.generate(SENTENCES).unwrap();
        assert!(sentences.len() > SENTENCES.len());
        for template in SENTENCES {
            assert!(sentences.iter().any(|s| s == template));
        }
    }

    #[test]
    fn test_alternatives_resolve_to_same_unit() {
        let resolver = Resolver::new(&FRENCH, &UNITS);
        for (said, alternative) in ALTERNATIVES {
            // "d'heures" is phrasing, not a unit name
            if said.starts_with("d'") {
                continue;
            }
            let said_unit = resolver.resolve(said).unwrap();
            let reworded = resolver.resolve(alternative).unwrap();
            assert_eq!(said_unit, reworded, "{} / {}", said, alternative);
        }
    }

    #[test]
    fn test_write() {
        let generator = IntentGenerator::new().unwrap();
        let mut out = Vec::new();
        let count = generator.write(SENTENCES, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap().lines().count(), count);
    }
}
