//! Spoken names of canonical units
//!
//! Each entry binds a canonical unit symbol to the names used to render it
//! and to the lower-case surface forms accepted when resolving it. Entries
//! are scanned in declaration order, so when a surface form is listed twice
//! the earlier entry wins.

/// Spoken forms of one canonical unit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SynonymEntry {
    /// Canonical symbol in the unit system
    pub symbol: &'static str,
    pub singular: &'static str,
    pub plural: &'static str,
    /// Accepted lower-case spellings
    pub synonyms: &'static [&'static str],
    /// Whether spoken prefixes combine with this unit ("kilomètre")
    pub prefixable: bool,
}

impl SynonymEntry {
    pub fn accepts(&self, candidate: &str) -> bool {
        self.synonyms.contains(&candidate)
    }

    /// Display name for a count, French style: plural from two upward
    pub fn name_for_count(&self, plural: bool) -> &'static str {
        if plural {
            self.plural
        } else {
            self.singular
        }
    }
}

const fn unit(
    symbol: &'static str,
    singular: &'static str,
    plural: &'static str,
    synonyms: &'static [&'static str],
) -> SynonymEntry {
    SynonymEntry { symbol, singular, plural, synonyms, prefixable: false }
}

const fn prefixable(
    symbol: &'static str,
    singular: &'static str,
    plural: &'static str,
    synonyms: &'static [&'static str],
) -> SynonymEntry {
    SynonymEntry { symbol, singular, plural, synonyms, prefixable: true }
}

/// French unit names
pub const FRENCH_UNITS: &[SynonymEntry] = &[
    // Base units
    prefixable("m", "mètre", "mètres", &["mètre", "mètres", "metre", "metres"]),
    prefixable("s", "seconde", "secondes", &["seconde", "secondes"]),
    prefixable("A", "ampère", "ampères", &["ampère", "ampères"]),
    prefixable("cd", "candela", "candelas", &["candela", "candelas"]),
    prefixable("g", "gramme", "grammes", &["gramme", "grammes"]),
    prefixable("mol", "mole", "moles", &["mole", "moles"]),
    prefixable("K", "kelvin", "kelvins", &["kelvin", "kelvins"]),
    prefixable("rad", "radian", "radians", &["radian", "radians"]),
    prefixable("bit", "bit", "bits", &["bit", "bits"]),

    // Angle
    unit("turn", "tour", "tours", &["tour", "tours", "révolution", "cycle", "cercle"]),
    unit("deg", "degré d'arc", "degrés d'arc", &["degré angulaire", "degrés angulaires", "degré d'arc", "degrés d'arc"]),
    unit("arcmin", "minute d'arc", "minutes d'arc", &["minute angulaire", "minutes angulaires", "minute d'arc", "minutes d'arc"]),
    unit("arcsec", "seconde d'arc", "secondes d'arc", &["seconde angulaire", "secondes angulaires", "seconde d'arc", "secondes d'arc"]),
    prefixable("sr", "stéradian", "stéradians", &["stéradian", "stéradians"]),

    // Area
    unit("are", "are", "ares", &["are", "ares"]),
    unit("ha", "hectare", "hectares", &["hectare", "hectares"]),
    prefixable("m²", "mètre carré", "mètres carrés", &["mètre carré", "mètres carré", "mètres carrés"]),

    // Electromagnetism
    prefixable("C", "coulomb", "coulombs", &["coulomb", "coulombs"]),
    prefixable("V", "volt", "volts", &["volt", "volts"]),
    prefixable("Ω", "ohm", "ohms", &["ohm", "ohms"]),
    prefixable("T", "tesla", "teslas", &["tesla", "teslas"]),
    prefixable("gauss", "gauss", "gauss", &["gauss"]),

    // Energy
    prefixable("J", "joule", "joules", &["joule", "joules"]),
    prefixable("Wh", "watt heure", "watts heure", &["watt heure", "watts heure", "wattheure", "wattheures"]),
    prefixable("eV", "électron-volt", "électrons-volts", &["électron volt", "électrons volt", "électron-volt", "électrons-volts"]),
    prefixable("cal", "calorie", "calories", &["calorie", "calories"]),

    // Force
    prefixable("N", "newton", "newtons", &["newton", "newtons"]),

    // Frequency
    prefixable("Hz", "hertz", "hertz", &["hertz"]),
    unit("rpm", "tour par minute", "tours par minute", &["tour par minute", "tours par minute", "révolution par minute", "révolutions par minute"]),

    // Information
    prefixable("B", "octet", "octets", &["octet", "octets", "byte", "bytes"]),
    prefixable("Bd", "baud", "bauds", &["baud", "bauds"]),

    // Length
    unit("Å", "ångström", "ångströms", &["ångström", "ångströms", "angström", "angströms", "angstrœm", "angstrœms"]),
    prefixable("pc", "parsec", "parsecs", &["parsec", "parsecs"]),
    unit("ly", "année-lumière", "années-lumière", &["année-lumière", "années-lumière", "année lumière", "années lumière"]),
    unit("au", "unité astronomique", "unités astronomiques", &["unité astronomique", "unités astronomique", "unités astronomiques"]),

    // Mass
    unit("ct", "carat", "carats", &["carat", "carats"]),
    unit("t", "tonne", "tonnes", &["tonne", "tonnes"]),

    // Photometry
    prefixable("lm", "lumen", "lumens", &["lumen", "lumens"]),
    prefixable("lx", "lux", "lux", &["lux"]),

    // Power
    prefixable("W", "watt", "watts", &["watt", "watts"]),
    unit("PS", "cheval-vapeur", "chevaux-vapeur", &["cheval vapeur", "chevaux vapeur", "cheval-vapeur", "chevaux-vapeur"]),

    // Pressure
    prefixable("Pa", "pascal", "pascals", &["pascal", "pascals"]),
    prefixable("bar", "bar", "bars", &["bar", "bars"]),
    unit("atm", "atmosphère", "atmosphères", &["atmosphère", "atmosphères"]),

    // Temperature
    unit("degC", "degré Celsius", "degrés Celsius", &["celsius", "degré", "degrés", "degré celsius", "degrés celsius"]),
    unit("degF", "degré Fahrenheit", "degrés Fahrenheit", &["fahrenheit", "degré fahrenheit", "degrés fahrenheit"]),
    unit("delta_degC", "degré Celsius d'écart", "degrés Celsius d'écart", &["degré celsius d'écart", "degrés celsius d'écart", "écart en celsius"]),
    unit("delta_degF", "degré Fahrenheit d'écart", "degrés Fahrenheit d'écart", &["degré fahrenheit d'écart", "degrés fahrenheit d'écart", "écart en fahrenheit"]),

    // Time
    unit("min", "minute", "minutes", &["minute", "minutes", "mn"]),
    unit("h", "heure", "heures", &["heure", "heures"]),
    unit("d", "jour", "jours", &["jour", "jours"]),
    unit("wk", "semaine", "semaines", &["semaine", "semaines"]),
    unit("yr", "année", "années", &["année", "années", "an", "ans"]),
    unit("mo", "mois", "mois", &["mois"]),
    unit("sidereal_day", "jour sidéral", "jours sidéraux", &["jour sidéral", "jours sidéraux", "jour sidéraux"]),
    unit("sidereal_hour", "heure sidérale", "heures sidérales", &["heure sidérale", "heures sidérales", "heure sidérales"]),
    unit("sidereal_minute", "minute sidérale", "minutes sidérales", &["minute sidérale", "minutes sidérales", "minute sidérales"]),
    unit("sidereal_second", "seconde sidérale", "secondes sidérales", &["seconde sidérale", "secondes sidérales", "seconde sidérales"]),
    unit("sidereal_year", "année sidérale", "années sidérales", &["année sidérale", "années sidérales", "année sidérales"]),
    unit("sidereal_month", "mois sidéral", "mois sidéraux", &["mois sidéral", "mois sidéraux"]),
    unit("leap_year", "année bissextile", "années bissextiles", &["année bissextile", "années bissextiles", "année bissextiles"]),
    unit("julian_year", "année julienne", "années juliennes", &["année julienne", "années juliennes", "année juliennes"]),
    unit("gregorian_year", "année grégorienne", "années grégoriennes", &["année grégorienne", "années grégoriennes", "année grégoriennes"]),
    unit("millennium", "millénaire", "millénaires", &["millénaire", "millénaires"]),

    // Velocity
    unit("nmi", "mille marin", "milles marins", &["mille marin", "milles marins", "mille nautique", "milles nautiques"]),
    unit("kn", "nœud", "nœuds", &["nœud", "nœuds", "noeud", "noeuds"]),
    unit("mi/h", "mile par heure", "miles par heure", &["mile par heure", "miles par heure", "mile à l'heure", "miles à l'heure"]),
    prefixable("m/h", "mètre par heure", "mètres par heure", &[
        "mètre par heure", "mètres par heure",
        "mètre à l'heure", "mètres à l'heure",
        "mètre heure", "mètres heure",
    ]),
    prefixable("m/min", "mètre par minute", "mètres par minute", &["mètre par minute", "mètres par minute"]),
    prefixable("m/s", "mètre par seconde", "mètres par seconde", &["mètre par seconde", "mètres par seconde"]),

    // Volume
    prefixable("L", "litre", "litres", &["litre", "litres"]),
    prefixable("m³", "mètre cube", "mètres cubes", &["mètre cube", "mètres cube", "mètres cubes"]),
    unit("stere", "stère", "stères", &["stère", "stères"]),

    // US customary lengths
    unit("in", "pouce", "pouces", &["pouce", "pouces"]),
    unit("ft", "pied", "pieds", &["pied", "pieds"]),
    unit("yd", "yard", "yards", &["yard", "yards"]),
    unit("mi", "mile", "miles", &["mile", "miles"]),

    // US liquid volume
    unit("pt", "pinte", "pintes", &["pinte", "pintes"]),
    unit("gal", "gallon", "gallons", &["gallon", "gallons"]),

    // Avoirdupois
    unit("oz", "once", "onces", &["once", "onces"]),
    unit("lb", "livre", "livres", &["livre", "livres"]),

    // Constants
    unit("c", "vitesse de la lumière", "fois la vitesse de la lumière", &["vitesse de la lumière", "la vitesse de la lumière"]),
];

/// Ordered registry of spoken unit names
#[derive(Debug, Clone)]
pub struct SynonymRegistry {
    entries: Vec<SynonymEntry>,
}

impl SynonymRegistry {
    pub fn new(entries: Vec<SynonymEntry>) -> Self {
        SynonymRegistry { entries }
    }

    pub fn french() -> Self {
        SynonymRegistry::new(FRENCH_UNITS.to_vec())
    }

    /// First entry accepting `candidate`, or `candidate` without its last
    /// character (the only plural rule).
    pub fn lookup(&self, candidate: &str) -> Option<&SynonymEntry> {
        let singular = strip_last_char(candidate);
        self.entries
            .iter()
            .find(|entry| entry.accepts(candidate) || singular.is_some_and(|s| entry.accepts(s)))
    }

    /// Entry for a canonical symbol
    pub fn get(&self, symbol: &str) -> Option<&SynonymEntry> {
        self.entries.iter().find(|entry| entry.symbol == symbol)
    }

    pub fn iter(&self) -> impl Iterator<Item = &SynonymEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn strip_last_char(s: &str) -> Option<&str> {
    let (index, _) = s.char_indices().last()?;
    (index > 0).then(|| &s[..index])
}
