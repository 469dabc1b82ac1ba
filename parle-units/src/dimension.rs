//! Dimensional analysis types
//!
//! Each physical quantity has dimensions represented as an 8-element vector:
//! [length, mass, time, current, temperature, amount, luminosity, information]
//!
//! Information is kept as its own base dimension so that octets never
//! convert into radians (angles are dimensionless).

use serde::{Deserialize, Serialize};
use std::fmt;

/// Represents the dimensions of a physical quantity
/// as exponents of the base dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Dimension {
    /// [length, mass, time, current, temperature, amount, luminosity, information]
    pub exponents: [i32; 8],
}

impl Dimension {
    pub const DIMENSIONLESS: Dimension = Dimension::new([0, 0, 0, 0, 0, 0, 0, 0]);

    // Base dimensions
    pub const LENGTH: Dimension = Dimension::new([1, 0, 0, 0, 0, 0, 0, 0]);
    pub const MASS: Dimension = Dimension::new([0, 1, 0, 0, 0, 0, 0, 0]);
    pub const TIME: Dimension = Dimension::new([0, 0, 1, 0, 0, 0, 0, 0]);
    pub const CURRENT: Dimension = Dimension::new([0, 0, 0, 1, 0, 0, 0, 0]);
    pub const TEMPERATURE: Dimension = Dimension::new([0, 0, 0, 0, 1, 0, 0, 0]);
    pub const AMOUNT: Dimension = Dimension::new([0, 0, 0, 0, 0, 1, 0, 0]);
    pub const LUMINOSITY: Dimension = Dimension::new([0, 0, 0, 0, 0, 0, 1, 0]);
    pub const INFORMATION: Dimension = Dimension::new([0, 0, 0, 0, 0, 0, 0, 1]);

    /// Area [L^2]
    pub const AREA: Dimension = Dimension::new([2, 0, 0, 0, 0, 0, 0, 0]);
    /// Volume [L^3]
    pub const VOLUME: Dimension = Dimension::new([3, 0, 0, 0, 0, 0, 0, 0]);
    /// Velocity [L T^-1]
    pub const VELOCITY: Dimension = Dimension::new([1, 0, -1, 0, 0, 0, 0, 0]);
    /// Frequency [T^-1]
    pub const FREQUENCY: Dimension = Dimension::new([0, 0, -1, 0, 0, 0, 0, 0]);
    /// Force [M L T^-2]
    pub const FORCE: Dimension = Dimension::new([1, 1, -2, 0, 0, 0, 0, 0]);
    /// Energy [M L^2 T^-2]
    pub const ENERGY: Dimension = Dimension::new([2, 1, -2, 0, 0, 0, 0, 0]);
    /// Power [M L^2 T^-3]
    pub const POWER: Dimension = Dimension::new([2, 1, -3, 0, 0, 0, 0, 0]);
    /// Pressure [M L^-1 T^-2]
    pub const PRESSURE: Dimension = Dimension::new([-1, 1, -2, 0, 0, 0, 0, 0]);
    /// Electric charge [I T]
    pub const CHARGE: Dimension = Dimension::new([0, 0, 1, 1, 0, 0, 0, 0]);
    /// Voltage [M L^2 T^-3 I^-1]
    pub const VOLTAGE: Dimension = Dimension::new([2, 1, -3, -1, 0, 0, 0, 0]);
    /// Resistance [M L^2 T^-3 I^-2]
    pub const RESISTANCE: Dimension = Dimension::new([2, 1, -3, -2, 0, 0, 0, 0]);
    /// Magnetic flux density [M T^-2 I^-1]
    pub const MAGNETIC_FLUX_DENSITY: Dimension = Dimension::new([0, 1, -2, -1, 0, 0, 0, 0]);
    /// Illuminance [J L^-2]
    pub const ILLUMINANCE: Dimension = Dimension::new([-2, 0, 0, 0, 0, 0, 1, 0]);
    /// Data rate [B T^-1]
    pub const DATA_RATE: Dimension = Dimension::new([0, 0, -1, 0, 0, 0, 0, 1]);

    pub const fn new(exponents: [i32; 8]) -> Self {
        Dimension { exponents }
    }

    pub fn is_dimensionless(&self) -> bool {
        self.exponents.iter().all(|&e| e == 0)
    }

    /// Multiply dimensions (add exponents)
    pub fn multiply(&self, other: &Dimension) -> Dimension {
        let mut result = [0i32; 8];
        for (i, slot) in result.iter_mut().enumerate() {
            *slot = self.exponents[i] + other.exponents[i];
        }
        Dimension { exponents: result }
    }

    /// Divide dimensions (subtract exponents)
    pub fn divide(&self, other: &Dimension) -> Dimension {
        self.multiply(&other.power(-1))
    }

    /// Raise to integer power (multiply exponents)
    pub fn power(&self, exp: i32) -> Dimension {
        let mut result = self.exponents;
        for e in result.iter_mut() {
            *e *= exp;
        }
        Dimension { exponents: result }
    }

    /// Get the dimension name if it matches a common dimension
    pub fn name(&self) -> Option<&'static str> {
        match self.exponents {
            [0, 0, 0, 0, 0, 0, 0, 0] => Some("dimensionless"),
            [1, 0, 0, 0, 0, 0, 0, 0] => Some("length"),
            [0, 1, 0, 0, 0, 0, 0, 0] => Some("mass"),
            [0, 0, 1, 0, 0, 0, 0, 0] => Some("time"),
            [0, 0, 0, 1, 0, 0, 0, 0] => Some("current"),
            [0, 0, 0, 0, 1, 0, 0, 0] => Some("temperature"),
            [0, 0, 0, 0, 0, 1, 0, 0] => Some("amount"),
            [0, 0, 0, 0, 0, 0, 1, 0] => Some("luminosity"),
            [0, 0, 0, 0, 0, 0, 0, 1] => Some("information"),
            [2, 0, 0, 0, 0, 0, 0, 0] => Some("area"),
            [3, 0, 0, 0, 0, 0, 0, 0] => Some("volume"),
            [1, 0, -1, 0, 0, 0, 0, 0] => Some("velocity"),
            [0, 0, -1, 0, 0, 0, 0, 0] => Some("frequency"),
            [1, 1, -2, 0, 0, 0, 0, 0] => Some("force"),
            [2, 1, -2, 0, 0, 0, 0, 0] => Some("energy"),
            [2, 1, -3, 0, 0, 0, 0, 0] => Some("power"),
            [-1, 1, -2, 0, 0, 0, 0, 0] => Some("pressure"),
            [0, 0, 1, 1, 0, 0, 0, 0] => Some("charge"),
            [2, 1, -3, -1, 0, 0, 0, 0] => Some("voltage"),
            [2, 1, -3, -2, 0, 0, 0, 0] => Some("resistance"),
            [0, 1, -2, -1, 0, 0, 0, 0] => Some("magnetic flux density"),
            [-2, 0, 0, 0, 0, 0, 1, 0] => Some("illuminance"),
            [0, 0, -1, 0, 0, 0, 0, 1] => Some("data rate"),
            _ => None,
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names = ["L", "M", "T", "I", "Θ", "N", "J", "B"];
        let parts: Vec<String> = self
            .exponents
            .iter()
            .zip(names)
            .filter(|&(&exp, _)| exp != 0)
            .map(|(&exp, name)| {
                if exp == 1 {
                    name.to_string()
                } else {
                    format!("{}^{}", name, exp)
                }
            })
            .collect();

        if parts.is_empty() {
            write!(f, "1")
        } else {
            write!(f, "{}", parts.join(" "))
        }
    }
}

impl Default for Dimension {
    fn default() -> Self {
        Self::DIMENSIONLESS
    }
}
