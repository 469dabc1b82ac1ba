//! Conversion requests: resolve, convert, render

use crate::defaults::{DefaultPolicy, DEFAULTS};
use crate::error::ConversionError;
use crate::format::Formatter;
use crate::lexicon::{Lexicon, FRENCH};
use crate::locale::{Channel, Locale, FRENCH_LOCALE};
use crate::resolve::Resolver;
use parle_core::Number;
use parle_units::{Quantity, ResolvedUnit, UnitSystem, UNITS};
use serde::Serialize;
use tracing::{error, info};

/// Outcome of one conversion request
#[derive(Debug, Clone, Serialize)]
pub struct Conversion {
    pub source_raw: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dest_raw: Option<String>,
    pub source_unit: ResolvedUnit,
    pub source: Quantity,
    pub result: Quantity,
    /// Whether the destination came from the default policy
    pub defaulted: bool,
    pub phrase: String,
}

/// Converts spoken quantities between units.
///
/// Holds shared references only; build one per request or share it across
/// threads.
#[derive(Debug, Clone, Copy)]
pub struct Converter<'a> {
    units: &'a UnitSystem,
    lexicon: &'a Lexicon,
    policy: &'a DefaultPolicy,
    locale: Locale,
    channel: Channel,
}

impl Converter<'static> {
    pub fn french() -> Self {
        Converter::new(&UNITS, &FRENCH, &DEFAULTS, FRENCH_LOCALE)
    }
}

impl<'a> Converter<'a> {
    pub fn new(units: &'a UnitSystem, lexicon: &'a Lexicon, policy: &'a DefaultPolicy, locale: Locale) -> Self {
        Converter { units, lexicon, policy, locale, channel: Channel::Written }
    }

    /// Builder: set the output channel
    pub fn with_channel(mut self, channel: Channel) -> Self {
        self.channel = channel;
        self
    }

    pub fn resolver(&self) -> Resolver<'a> {
        Resolver::new(self.lexicon, self.units)
    }

    pub fn formatter(&self) -> Formatter<'a> {
        Formatter::new(self.lexicon, self.locale, self.channel)
    }

    /// Convert `magnitude` of `source_raw` into `dest_raw`, or into the
    /// default destination when `dest_raw` is absent.
    pub fn convert(
        &self,
        magnitude: impl Into<Number>,
        source_raw: &str,
        dest_raw: Option<&str>,
    ) -> Result<Conversion, ConversionError> {
        let magnitude = magnitude.into();
        let resolver = self.resolver();
        let dest_raw = dest_raw.map(str::trim).filter(|d| !d.is_empty());

        let source_unit = resolver.resolve(source_raw)?;
        let dest_unit = dest_raw.map(|d| resolver.resolve(d)).transpose()?;

        // Absolute reading: 20 degrés is a temperature, not an interval
        let source = self
            .units
            .quantity(magnitude.clone(), &source_unit)
            .map_err(|e| self.fault(ConversionError::from_unit_error(e, source_raw, source_raw)))?;

        let result = match (&dest_unit, dest_raw) {
            (Some(target), Some(raw)) => self
                .units
                .convert(&source, target)
                .map_err(|e| ConversionError::from_unit_error(e, source_raw, raw)),
            _ => self.policy.apply(self.units, &source, source_raw),
        }
        .map_err(|e| self.fault(e))?;

        let phrase = self.formatter().phrase(&magnitude, source_raw, &result);
        info!(source = %source, result = %result, "conversion");

        Ok(Conversion {
            source_raw: source_raw.trim().to_string(),
            dest_raw: dest_raw.map(str::to_string),
            source_unit,
            source,
            result,
            defaulted: dest_unit.is_none(),
            phrase,
        })
    }

    /// Log internal faults; user errors pass through untouched
    fn fault(&self, err: ConversionError) -> ConversionError {
        if !err.is_user_error() {
            error!(error = %err, "internal conversion fault");
        }
        err
    }
}

/// Convert with the French lexicon, written channel
pub fn convert(
    magnitude: impl Into<Number>,
    source_raw: &str,
    dest_raw: Option<&str>,
) -> Result<Conversion, ConversionError> {
    Converter::french().convert(magnitude, source_raw, dest_raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn phrase(magnitude: i64, source: &str, dest: Option<&str>) -> String {
        convert(magnitude, source, dest).unwrap().phrase
    }

    #[test]
    fn test_default_miles() {
        assert_eq!(phrase(17, "miles", None), "17 miles est égal à 27,36 kilomètres");
    }

    #[test]
    fn test_default_reduction() {
        assert_eq!(phrase(1024, "heures", None), "1 024 heures est égal à 3,69 mégasecondes");
        assert_eq!(phrase(40, "yards", None), "40 yards est égal à 36,58 mètres");
        assert_eq!(phrase(2, "pouces", None), "2 pouces est égal à 50,8 millimètres");
    }

    #[test]
    fn test_default_temperatures() {
        assert_eq!(phrase(80, "fahrenheit", None), "80 fahrenheit est égal à 26,67 degrés Celsius");
        assert_eq!(phrase(300, "kelvins", None), "300 kelvins est égal à 26,85 degrés Celsius");
    }

    #[test]
    fn test_explicit_destination() {
        assert_eq!(phrase(170, "cm", Some("pieds")), "170 cm est égal à 5,58 pieds");
        assert_eq!(phrase(2, "mètres", Some("pieds")), "2 mètres est égal à 6,56 pieds");
        assert_eq!(phrase(537, "min", Some("h")), "537 min est égal à 8,95 heures");
        assert_eq!(phrase(3, "gallons", Some("litres")), "3 gallons est égal à 11,36 litres");
        assert_eq!(phrase(4, "miles", Some("km")), "4 miles est égal à 6,44 kilomètres");
        assert_eq!(phrase(1, "mètre", Some("pouces")), "1 mètre est égal à 39,37 pouces");
    }

    #[test]
    fn test_speeds() {
        assert_eq!(phrase(60, "mph", Some("km/h")), "60 mph est égal à 96,56 kilomètres par heure");
        assert_eq!(
            phrase(80, "kilomètres à l'heure", Some("miles par heure")),
            "80 kilomètres à l'heure est égal à 49,71 miles par heure"
        );
    }

    #[test]
    fn test_affine_temperature() {
        let conversion = convert(20, "degrés", Some("fahrenheit")).unwrap();
        assert_eq!(conversion.result.value.round_to(6), Number::from_i64(68));
        assert_eq!(conversion.phrase, "20 degrés est égal à 68 degrés Fahrenheit");
    }

    #[test]
    fn test_thousands_in_result() {
        assert_eq!(phrase(7, "livres", Some("grammes")), "7 livres est égal à 3 175,15 grammes");
    }

    #[test]
    fn test_grouped_source_magnitude() {
        assert_eq!(phrase(12000, "mètres", Some("km")), "12 000 mètres est égal à 12 kilomètres");
        let spoken = Converter::french()
            .with_channel(Channel::Spoken)
            .convert(12000, "mètres", Some("km"))
            .unwrap();
        assert_eq!(spoken.phrase, "12000 mètres est égal à 12 kilomètres");
    }

    #[test]
    fn test_large_result_keeps_every_digit() {
        assert_eq!(
            phrase(1, "parsec", Some("mètres")),
            "1 parsec est égal à 30 856 775 814 913 673 mètres"
        );
    }

    #[test]
    fn test_tiny_result_survives_json() {
        let conversion = convert(1, "électron-volt", Some("joules")).unwrap();
        let json = serde_json::to_value(&conversion).unwrap();
        let value: Number = serde_json::from_value(json["result"]["value"].clone()).unwrap();
        assert!(!value.is_zero());
        assert_eq!(value, conversion.result.value);
    }

    #[test]
    fn test_spoken_channel() {
        let conversion = Converter::french()
            .with_channel(Channel::Spoken)
            .convert(7, "livres", Some("grammes"))
            .unwrap();
        assert_eq!(conversion.phrase, "7 livres est égal à 3175 virgule 15 grammes");
    }

    #[test]
    fn test_fractional_magnitude() {
        let conversion = convert(Number::from_str("1.5").unwrap(), "kilomètres", Some("m")).unwrap();
        assert_eq!(conversion.phrase, "1,5 kilomètres est égal à 1 500 mètres");
    }

    #[test]
    fn test_incompatible_units() {
        let err = convert(3, "miles", Some("secondes")).unwrap_err();
        assert_eq!(
            err,
            ConversionError::IncompatibleUnits { from: "miles".into(), to: "secondes".into() }
        );
    }

    #[test]
    fn test_unknown_units() {
        let err = convert(3, "foobarbaz", None).unwrap_err();
        assert_eq!(err, ConversionError::UnknownUnit("foobarbaz".into()));

        let err = convert(3, "mètres", Some("brasses")).unwrap_err();
        assert_eq!(err, ConversionError::UnknownUnit("brasses".into()));
    }

    #[test]
    fn test_offset_unit_mix() {
        let err = convert(10, "degrés", Some("degrés celsius d'écart")).unwrap_err();
        assert!(matches!(err, ConversionError::OffsetUnitMix { .. }));
    }

    #[test]
    fn test_blank_destination_uses_default() {
        let conversion = convert(17, "miles", Some("  ")).unwrap();
        assert!(conversion.defaulted);
        assert_eq!(conversion.result.unit.symbol, "km");
    }

    #[test]
    fn test_conversion_serializes() {
        let conversion = convert(17, "miles", None).unwrap();
        let json = serde_json::to_value(&conversion).unwrap();
        assert_eq!(json["source_raw"], "miles");
        assert_eq!(json["source_unit"]["symbol"], "mi");
        assert_eq!(json["result"]["unit"]["symbol"], "km");
        assert_eq!(json["defaulted"], true);
        assert!(json.get("dest_raw").is_none());
    }

    #[test]
    fn test_converter_is_shareable() {
        let converter = Converter::french();
        std::thread::scope(|scope| {
            let handles: Vec<_> = ["miles", "yards", "pouces", "kelvins"]
                .into_iter()
                .map(|unit| scope.spawn(move || converter.convert(10, unit, None)))
                .collect();
            for handle in handles {
                assert!(handle.join().unwrap().is_ok());
            }
        });
    }
}
