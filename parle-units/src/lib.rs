//! Parle Units - Physical Quantity and Unit Conversion
//!
//! Provides unit-aware quantities with dimensional analysis.
//! Units are addressed by canonical symbol; prefixed forms ("km", "MiB")
//! are parsed on the fly rather than registered.
//!
//! Categories:
//! - Length (m, in, ft, yd, mi, nmi, au, ly, pc)
//! - Mass (g, t, ct, oz, lb)
//! - Time (s, min, h, d, wk, mo, yr, sidereal units)
//! - Temperature (K, degC, degF and their delta units)
//! - Current, Amount, Luminosity (A, mol, cd, lm, lx)
//! - Angle (rad, deg, arcmin, arcsec, turn, sr)
//! - Information (bit, B, Bd)
//! - Area, Volume (m², are, ha, m³, L, gal, pt)
//! - Velocity (m/s, mi/h, kn, c)
//! - Mechanics (Hz, rpm, N, J, Wh, eV, cal, W, PS, Pa, bar, atm)
//! - Electromagnetism (C, V, Ω, T, gauss)

mod convert;
mod dimension;
mod prefix;
mod quantity;
mod unit;
mod units;

pub use dimension::Dimension;
pub use prefix::{Prefix, Radix, BINARY_PREFIXES, DECIMAL_PREFIXES};
pub use quantity::Quantity;
pub use unit::{ResolvedUnit, Scale, Unit, UnitError};
pub use units::{UnitSystem, UNITS};
