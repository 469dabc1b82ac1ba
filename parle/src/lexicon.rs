//! Language bundle: spoken prefixes plus spoken unit names

use crate::prefix::PrefixTable;
use crate::synonyms::SynonymRegistry;
use std::sync::LazyLock;

/// French lexicon, built once on first use
pub static FRENCH: LazyLock<Lexicon> = LazyLock::new(Lexicon::french);

/// Everything needed to read and say unit names in one language
#[derive(Debug, Clone)]
pub struct Lexicon {
    pub prefixes: PrefixTable,
    pub units: SynonymRegistry,
}

impl Lexicon {
    pub fn new(prefixes: PrefixTable, units: SynonymRegistry) -> Self {
        Lexicon { prefixes, units }
    }

    pub fn french() -> Self {
        Lexicon::new(PrefixTable::french(), SynonymRegistry::french())
    }
}
