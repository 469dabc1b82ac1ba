//! Parle - Spoken unit conversion
//!
//! Reads unit names the way people say them ("kilomètres à l'heure",
//! "degrés", "mégaoctets"), converts quantities between them and renders
//! the answer as a French sentence:
//!
//! ```
//! let conversion = parle::convert(17, "miles", None).unwrap();
//! assert_eq!(conversion.phrase, "17 miles est égal à 27,36 kilomètres");
//! ```
//!
//! Pipeline: [`Resolver`] turns both unit names into canonical units,
//! [`DefaultPolicy`] picks a destination when none is given, the unit
//! system converts, and [`Formatter`] renders the result.

mod convert;
mod defaults;
mod error;
mod format;
mod lexicon;
mod locale;
mod prefix;
mod resolve;
mod synonyms;

pub use convert::{convert, Conversion, Converter};
pub use defaults::{DefaultPolicy, DEFAULTS};
pub use error::{codes, ConversionError};
pub use format::Formatter;
pub use lexicon::{Lexicon, FRENCH};
pub use locale::{Channel, Locale, FRENCH_LOCALE};
pub use prefix::{PrefixEntry, PrefixMatch, PrefixTable};
pub use resolve::Resolver;
pub use synonyms::{SynonymEntry, SynonymRegistry, FRENCH_UNITS};

pub use parle_core::Number;
pub use parle_units::{Quantity, ResolvedUnit, UNITS};
