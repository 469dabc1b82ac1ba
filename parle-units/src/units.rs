//! Unit definitions organised by category, plus symbol lookup

use crate::{Dimension, Prefix, ResolvedUnit, Unit};
use parle_core::Number;
use std::collections::HashMap;
use std::sync::LazyLock;

/// Process-wide unit system, built once on first use
pub static UNITS: LazyLock<UnitSystem> = LazyLock::new(UnitSystem::new);

/// Registry of all known units
#[derive(Debug)]
pub struct UnitSystem {
    units: HashMap<String, Unit>,
    aliases: HashMap<String, String>,
    /// Coherent unit used to express each dimension when no target is given
    coherent: HashMap<Dimension, String>,
    prefix_spellings: Vec<(&'static str, Prefix)>,
}

/// mantissa * 10^exp, exact
fn sci(mantissa: i64, exp: i32) -> Number {
    let scale = Number::from_i64(10).pow(exp).unwrap_or_else(|_| Number::one());
    Number::from_i64(mantissa).mul(&scale)
}

fn int(n: i64) -> Number {
    Number::from_i64(n)
}

fn days(d: Number) -> Number {
    d.mul(&int(86_400))
}

fn pi() -> Number {
    sci(3_141_592_653_589_793_238, -18)
}

impl UnitSystem {
    pub fn new() -> Self {
        let mut system = UnitSystem {
            units: HashMap::new(),
            aliases: HashMap::new(),
            coherent: HashMap::new(),
            prefix_spellings: Prefix::symbol_spellings(),
        };
        system.register_all_units();
        system
    }

    /// Get a unit by canonical symbol or alias
    pub fn get(&self, symbol: &str) -> Option<&Unit> {
        if let Some(unit) = self.units.get(symbol) {
            return Some(unit);
        }
        self.aliases.get(symbol).and_then(|canonical| self.units.get(canonical))
    }

    /// Parse a unit symbol, exact case: "m", "l", "°C", "km", "MiB".
    ///
    /// Exact symbols win over prefix splits, so "min" is a minute and
    /// not a milli-inch.
    pub fn parse_symbol(&self, symbol: &str) -> Option<ResolvedUnit> {
        if symbol.is_empty() {
            return None;
        }
        if let Some(unit) = self.get(symbol) {
            return Some(ResolvedUnit::new(unit.base.clone()));
        }

        self.prefix_spellings.iter().find_map(|(spelling, prefix)| {
            let rest = symbol.strip_prefix(spelling)?;
            let unit = self.get(rest)?;
            unit.is_prefixable()
                .then(|| ResolvedUnit::prefixed(*prefix, unit.base.clone()))
        })
    }

    pub fn dimension_of(&self, symbol: &str) -> Option<Dimension> {
        self.get(symbol).map(|u| u.dimension)
    }

    /// Coherent SI unit for a dimension (m, g, s, J, m/s, ...)
    pub fn coherent_for(&self, dimension: Dimension) -> Option<&Unit> {
        self.coherent.get(&dimension).and_then(|s| self.units.get(s))
    }

    /// All canonical units
    pub fn iter(&self) -> impl Iterator<Item = &Unit> {
        self.units.values()
    }

    fn register(&mut self, unit: Unit) {
        self.units.insert(unit.symbol.clone(), unit);
    }

    fn alias(&mut self, alias: &str, symbol: &str) {
        self.aliases.insert(alias.to_string(), symbol.to_string());
    }

    fn coherent(&mut self, dimension: Dimension, symbol: &str) {
        self.coherent.insert(dimension, symbol.to_string());
    }

    fn register_all_units(&mut self) {
        self.register_length_units();
        self.register_mass_units();
        self.register_time_units();
        self.register_temperature_units();
        self.register_base_si_units();
        self.register_angle_units();
        self.register_information_units();
        self.register_area_units();
        self.register_volume_units();
        self.register_velocity_units();
        self.register_mechanical_units();
        self.register_electromagnetic_units();
    }

    fn register_length_units(&mut self) {
        self.register(Unit::new("m", "meter", Dimension::LENGTH, int(1)));
        self.register(Unit::new("Å", "angstrom", Dimension::LENGTH, sci(1, -10)));
        self.register(Unit::new("in", "inch", Dimension::LENGTH, sci(254, -4)));
        self.register(Unit::new("ft", "foot", Dimension::LENGTH, sci(3048, -4)));
        self.register(Unit::new("yd", "yard", Dimension::LENGTH, sci(9144, -4)));
        self.register(Unit::new("mi", "mile", Dimension::LENGTH, sci(1_609_344, -3)));
        self.register(Unit::new("nmi", "nautical mile", Dimension::LENGTH, int(1852)));
        self.register(Unit::new("au", "astronomical unit", Dimension::LENGTH, int(149_597_870_700)));
        self.register(Unit::new("ly", "light year", Dimension::LENGTH, int(9_460_730_472_580_800)));
        self.register(Unit::new("pc", "parsec", Dimension::LENGTH, int(30_856_775_814_913_673)));
        self.coherent(Dimension::LENGTH, "m");

        self.alias("meter", "m");
        self.alias("metre", "m");
        self.alias("angstrom", "Å");
        self.alias("inch", "in");
        self.alias("foot", "ft");
        self.alias("yard", "yd");
        self.alias("mile", "mi");
    }

    fn register_mass_units(&mut self) {
        // The kilogram is the SI unit; grams carry the prefixes
        self.register(Unit::new("g", "gram", Dimension::MASS, sci(1, -3)));
        self.register(Unit::new("t", "tonne", Dimension::MASS, int(1000)));
        self.register(Unit::new("ct", "carat", Dimension::MASS, sci(2, -4)));
        self.register(Unit::new("oz", "ounce", Dimension::MASS, sci(28_349_523_125, -12)));
        self.register(Unit::new("lb", "pound", Dimension::MASS, sci(45_359_237, -8)));
        self.coherent(Dimension::MASS, "g");

        self.alias("gram", "g");
        self.alias("carat", "ct");
        self.alias("ounce", "oz");
        self.alias("pound", "lb");
    }

    fn register_time_units(&mut self) {
        let year = days(sci(36_525, -2));
        let sidereal_day = sci(861_640_905, -4);

        self.register(Unit::new("s", "second", Dimension::TIME, int(1)));
        self.register(Unit::new("min", "minute", Dimension::TIME, int(60)));
        self.register(Unit::new("h", "hour", Dimension::TIME, int(3600)));
        self.register(Unit::new("d", "day", Dimension::TIME, int(86_400)));
        self.register(Unit::new("wk", "week", Dimension::TIME, int(604_800)));
        self.register(Unit::new("mo", "month", Dimension::TIME, year.mul(&Number::from_ratio(1, 12))));
        self.register(Unit::new("yr", "year", Dimension::TIME, year.clone()));
        self.register(Unit::new("julian_year", "julian year", Dimension::TIME, year.clone()));
        self.register(Unit::new("gregorian_year", "gregorian year", Dimension::TIME, days(sci(3_652_425, -4))));
        self.register(Unit::new("leap_year", "leap year", Dimension::TIME, days(int(366))));
        self.register(Unit::new("millennium", "millennium", Dimension::TIME, year.mul(&int(1000))));
        self.register(Unit::new("sidereal_second", "sidereal second", Dimension::TIME, sidereal_day.mul(&Number::from_ratio(1, 86_400))));
        self.register(Unit::new("sidereal_minute", "sidereal minute", Dimension::TIME, sidereal_day.mul(&Number::from_ratio(1, 1440))));
        self.register(Unit::new("sidereal_hour", "sidereal hour", Dimension::TIME, sidereal_day.mul(&Number::from_ratio(1, 24))));
        self.register(Unit::new("sidereal_day", "sidereal day", Dimension::TIME, sidereal_day));
        self.register(Unit::new("sidereal_month", "sidereal month", Dimension::TIME, days(sci(2_732_166_155, -8))));
        self.register(Unit::new("sidereal_year", "sidereal year", Dimension::TIME, days(sci(36_525_636_042, -8))));
        self.coherent(Dimension::TIME, "s");

        self.alias("sec", "s");
        self.alias("second", "s");
        self.alias("minute", "min");
        self.alias("hr", "h");
        self.alias("hour", "h");
        self.alias("day", "d");
        self.alias("week", "wk");
        self.alias("month", "mo");
        self.alias("year", "yr");
    }

    fn register_temperature_units(&mut self) {
        let five_ninths = Number::from_ratio(5, 9);

        // Kelvin is the SI unit and converts linearly
        self.register(Unit::new("K", "kelvin", Dimension::TEMPERATURE, int(1)));

        // K = C + 273.15
        self.register(Unit::absolute("degC", "degree Celsius", Dimension::TEMPERATURE, int(1), sci(27_315, -2)));

        // K = (F + 459.67) * 5/9
        self.register(Unit::absolute(
            "degF",
            "degree Fahrenheit",
            Dimension::TEMPERATURE,
            five_ninths.clone(),
            sci(45_967, -2).mul(&five_ninths),
        ));

        self.register(Unit::delta("delta_degC", "delta degree Celsius", Dimension::TEMPERATURE, int(1)));
        self.register(Unit::delta("delta_degF", "delta degree Fahrenheit", Dimension::TEMPERATURE, five_ninths));
        self.coherent(Dimension::TEMPERATURE, "K");

        self.alias("kelvin", "K");
        self.alias("°C", "degC");
        self.alias("℃", "degC");
        self.alias("celsius", "degC");
        self.alias("°F", "degF");
        self.alias("℉", "degF");
        self.alias("fahrenheit", "degF");
    }

    fn register_base_si_units(&mut self) {
        self.register(Unit::new("A", "ampere", Dimension::CURRENT, int(1)));
        self.register(Unit::new("mol", "mole", Dimension::AMOUNT, int(1)));
        self.register(Unit::new("cd", "candela", Dimension::LUMINOSITY, int(1)));
        // lm = cd·sr, the steradian being dimensionless
        self.register(Unit::new("lm", "lumen", Dimension::LUMINOSITY, int(1)));
        self.register(Unit::new("lx", "lux", Dimension::ILLUMINANCE, int(1)));
        self.coherent(Dimension::CURRENT, "A");
        self.coherent(Dimension::AMOUNT, "mol");
        self.coherent(Dimension::LUMINOSITY, "cd");
        self.coherent(Dimension::ILLUMINANCE, "lx");

        self.alias("ampere", "A");
        self.alias("mole", "mol");
    }

    fn register_angle_units(&mut self) {
        // Angles are dimensionless
        self.register(Unit::new("rad", "radian", Dimension::DIMENSIONLESS, int(1)));
        self.register(Unit::new("sr", "steradian", Dimension::DIMENSIONLESS, int(1)));
        self.register(Unit::new("turn", "turn", Dimension::DIMENSIONLESS, pi().mul(&int(2))));
        self.register(Unit::new("deg", "degree", Dimension::DIMENSIONLESS, pi().mul(&Number::from_ratio(1, 180))));
        self.register(Unit::new("arcmin", "arcminute", Dimension::DIMENSIONLESS, pi().mul(&Number::from_ratio(1, 10_800))));
        self.register(Unit::new("arcsec", "arcsecond", Dimension::DIMENSIONLESS, pi().mul(&Number::from_ratio(1, 648_000))));
        self.coherent(Dimension::DIMENSIONLESS, "rad");

        self.alias("radian", "rad");
        self.alias("arcdeg", "deg");
        self.alias("°", "deg");
        self.alias("revolution", "turn");
    }

    fn register_information_units(&mut self) {
        self.register(Unit::new("bit", "bit", Dimension::INFORMATION, int(1)));
        self.register(Unit::new("B", "byte", Dimension::INFORMATION, int(8)));
        self.register(Unit::new("Bd", "baud", Dimension::DATA_RATE, int(1)));
        self.coherent(Dimension::INFORMATION, "bit");
        self.coherent(Dimension::DATA_RATE, "Bd");

        self.alias("byte", "B");
        self.alias("o", "B");
        self.alias("baud", "Bd");
    }

    fn register_area_units(&mut self) {
        self.register(Unit::new("m²", "square meter", Dimension::AREA, int(1)).with_prefix_power(2));
        self.register(Unit::new("are", "are", Dimension::AREA, int(100)));
        self.register(Unit::new("ha", "hectare", Dimension::AREA, int(10_000)));
        self.coherent(Dimension::AREA, "m²");

        self.alias("m2", "m²");
        self.alias("m^2", "m²");
        self.alias("m**2", "m²");
        self.alias("hectare", "ha");
    }

    fn register_volume_units(&mut self) {
        self.register(Unit::new("m³", "cubic meter", Dimension::VOLUME, int(1)).with_prefix_power(3));
        self.register(Unit::new("L", "liter", Dimension::VOLUME, sci(1, -3)));
        self.register(Unit::new("stere", "stere", Dimension::VOLUME, int(1)));
        self.register(Unit::new("gal", "US liquid gallon", Dimension::VOLUME, sci(3_785_411_784, -12)));
        self.register(Unit::new("pt", "US pint", Dimension::VOLUME, sci(473_176_473, -12)));
        self.coherent(Dimension::VOLUME, "m³");

        self.alias("m3", "m³");
        self.alias("m^3", "m³");
        self.alias("m**3", "m³");
        self.alias("l", "L");
        self.alias("liter", "L");
        self.alias("litre", "L");
        self.alias("gallon", "gal");
        self.alias("US_liquid_gallon", "gal");
        self.alias("pint", "pt");
        self.alias("US_pint", "pt");
    }

    fn register_velocity_units(&mut self) {
        self.register(Unit::new("m/s", "meter per second", Dimension::VELOCITY, int(1)));
        self.register(Unit::new("m/min", "meter per minute", Dimension::VELOCITY, Number::from_ratio(1, 60)));
        self.register(Unit::new("m/h", "meter per hour", Dimension::VELOCITY, Number::from_ratio(1, 3600)));
        self.register(Unit::new("mi/h", "mile per hour", Dimension::VELOCITY, sci(44_704, -5)));
        self.register(Unit::new("kn", "knot", Dimension::VELOCITY, Number::from_ratio(1852, 3600)));
        self.register(Unit::new("c", "speed of light", Dimension::VELOCITY, int(299_792_458)));
        self.coherent(Dimension::VELOCITY, "m/s");

        self.alias("mph", "mi/h");
        self.alias("knot", "kn");
        self.alias("kt", "kn");
    }

    fn register_mechanical_units(&mut self) {
        self.register(Unit::new("Hz", "hertz", Dimension::FREQUENCY, int(1)));
        self.register(Unit::new("rpm", "revolution per minute", Dimension::FREQUENCY, Number::from_ratio(1, 60)));
        self.register(Unit::new("N", "newton", Dimension::FORCE, int(1)));
        self.register(Unit::new("J", "joule", Dimension::ENERGY, int(1)));
        self.register(Unit::new("Wh", "watt hour", Dimension::ENERGY, int(3600)));
        self.register(Unit::new("eV", "electron volt", Dimension::ENERGY, sci(1_602_176_634, -28)));
        self.register(Unit::new("cal", "calorie", Dimension::ENERGY, sci(4184, -3)));
        self.register(Unit::new("W", "watt", Dimension::POWER, int(1)));
        self.register(Unit::new("PS", "metric horsepower", Dimension::POWER, sci(73_549_875, -5)));
        self.register(Unit::new("Pa", "pascal", Dimension::PRESSURE, int(1)));
        self.register(Unit::new("bar", "bar", Dimension::PRESSURE, int(100_000)));
        self.register(Unit::new("atm", "atmosphere", Dimension::PRESSURE, int(101_325)));
        self.coherent(Dimension::FREQUENCY, "Hz");
        self.coherent(Dimension::FORCE, "N");
        self.coherent(Dimension::ENERGY, "J");
        self.coherent(Dimension::POWER, "W");
        self.coherent(Dimension::PRESSURE, "Pa");

        self.alias("hertz", "Hz");
        self.alias("newton", "N");
        self.alias("joule", "J");
        self.alias("calorie", "cal");
        self.alias("watt", "W");
        self.alias("metric_horsepower", "PS");
        self.alias("pascal", "Pa");
    }

    fn register_electromagnetic_units(&mut self) {
        self.register(Unit::new("C", "coulomb", Dimension::CHARGE, int(1)));
        self.register(Unit::new("V", "volt", Dimension::VOLTAGE, int(1)));
        self.register(Unit::new("Ω", "ohm", Dimension::RESISTANCE, int(1)));
        self.register(Unit::new("T", "tesla", Dimension::MAGNETIC_FLUX_DENSITY, int(1)));
        self.register(Unit::new("gauss", "gauss", Dimension::MAGNETIC_FLUX_DENSITY, sci(1, -4)));
        self.coherent(Dimension::CHARGE, "C");
        self.coherent(Dimension::VOLTAGE, "V");
        self.coherent(Dimension::RESISTANCE, "Ω");
        self.coherent(Dimension::MAGNETIC_FLUX_DENSITY, "T");

        self.alias("coulomb", "C");
        self.alias("volt", "V");
        self.alias("ohm", "Ω");
        self.alias("tesla", "T");
    }
}

impl Default for UnitSystem {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup() {
        let units = UnitSystem::new();
        assert!(units.get("m").is_some());
        assert!(units.get("meter").is_some());
        assert_eq!(units.get("l").map(|u| u.symbol.as_str()), Some("L"));
        assert_eq!(units.get("°C").map(|u| u.symbol.as_str()), Some("degC"));
        assert!(units.get("mètre").is_none());
    }

    #[test]
    fn test_parse_prefixed_symbols() {
        let units = UnitSystem::new();
        let km = units.parse_symbol("km").unwrap();
        assert_eq!(km.symbol, "m");
        assert_eq!(km.prefix.map(|p| p.symbol), Some("k"));

        let mib = units.parse_symbol("MiB").unwrap();
        assert_eq!(mib.symbol, "B");
        assert_eq!(mib.prefix.map(|p| p.symbol), Some("Mi"));

        let ml = units.parse_symbol("ml").unwrap();
        assert_eq!(ml.symbol, "L");
        assert_eq!(ml.prefix.map(|p| p.symbol), Some("m"));

        let dam = units.parse_symbol("dam").unwrap();
        assert_eq!(dam.prefix.map(|p| p.symbol), Some("da"));
    }

    #[test]
    fn test_exact_symbol_beats_prefix_split() {
        let units = UnitSystem::new();
        assert_eq!(units.parse_symbol("min"), Some(ResolvedUnit::new("min")));
        assert_eq!(units.parse_symbol("cd"), Some(ResolvedUnit::new("cd")));
        assert_eq!(units.parse_symbol("pc"), Some(ResolvedUnit::new("pc")));
        assert_eq!(units.parse_symbol("ha"), Some(ResolvedUnit::new("ha")));
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        let units = UnitSystem::new();
        assert!(units.parse_symbol("Mm").is_some());
        assert!(units.parse_symbol("KM").is_none());
        assert!(units.parse_symbol("mètres").is_none());
        assert!(units.parse_symbol("").is_none());
    }

    #[test]
    fn test_offset_units_take_no_prefix() {
        let units = UnitSystem::new();
        assert!(units.parse_symbol("kdegC").is_none());
    }

    #[test]
    fn test_every_dimension_has_coherent_unit() {
        let units = UnitSystem::new();
        for unit in units.iter() {
            let coherent = units.coherent_for(unit.dimension);
            assert!(coherent.is_some(), "no coherent unit for {}", unit.symbol);
        }
    }

    #[test]
    fn test_temperature_factors() {
        let units = UnitSystem::new();
        let c = units.get("degC").unwrap();
        let in_kelvin = c.to_si(&Number::zero());
        assert_eq!(in_kelvin, Number::from_str("273.15").unwrap());
    }
}
