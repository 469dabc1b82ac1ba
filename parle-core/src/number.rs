//! Arbitrary precision numbers using dashu
//!
//! Conversion factors such as 5/9 or 0.45359237 stay exact enough across a
//! round trip that converting A → B → A gives back the spoken quantity.

use dashu_float::DBig;
use dashu_int::ops::BitTest;
use dashu_int::IBig;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Error type for number operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NumberError {
    #[error("Invalid number format: {0}")]
    ParseError(String),

    #[error("Division by zero")]
    DivisionByZero,

    #[error("Overflow: result too large")]
    Overflow,
}

/// Working precision in decimal digits
const WORK_PRECISION: usize = 50;

/// Arbitrary precision decimal number
#[derive(Debug, Clone)]
pub struct Number {
    inner: DBig,
}

impl Number {
    fn with_work_precision(val: DBig) -> DBig {
        val.with_precision(WORK_PRECISION).value()
    }

    /// Parse "123", "3.14", "1/3", "1.5e10", "602214076e15".
    ///
    /// A single comma is accepted as decimal separator ("2,5"), which is
    /// how a French slot filler hands quantities over.
    pub fn from_str(s: &str) -> Result<Self, NumberError> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(NumberError::ParseError(s.to_string()));
        }
        let s = if trimmed.matches(',').count() == 1 && !trimmed.contains('.') {
            trimmed.replace(',', ".")
        } else {
            trimmed.to_string()
        };

        if let Some((num, den)) = s.split_once('/') {
            let num = Self::from_str(num)?;
            let den = Self::from_str(den)?;
            return num.checked_div(&den);
        }

        // Integer mantissa keeps full precision ("602214076e15")
        let lower = s.to_lowercase();
        if let Some((mantissa, exp)) = lower.split_once('e') {
            if !mantissa.contains('.') {
                let mantissa: IBig = mantissa
                    .parse()
                    .map_err(|_| NumberError::ParseError(s.clone()))?;
                let exp: isize = exp.parse().map_err(|_| NumberError::ParseError(s.clone()))?;
                let inner = DBig::from_parts(mantissa, exp);
                return Ok(Self { inner: Self::with_work_precision(inner) });
            }
        }

        let inner: DBig = s.parse().map_err(|_| NumberError::ParseError(s.clone()))?;
        Ok(Self { inner: Self::with_work_precision(inner) })
    }

    pub fn from_i64(n: i64) -> Self {
        Self { inner: Self::with_work_precision(DBig::from(n)) }
    }

    /// Exact ratio; a zero denominator yields zero
    pub fn from_ratio(num: i64, den: i64) -> Self {
        Self::from_i64(num)
            .checked_div(&Self::from_i64(den))
            .unwrap_or_else(|_| Self::zero())
    }

    /// From f64 through its shortest decimal form, NaN and infinities become zero
    pub fn from_f64(f: f64) -> Self {
        if !f.is_finite() {
            return Self::zero();
        }
        Self::from_str(&format!("{}", f)).unwrap_or_else(|_| Self::zero())
    }

    pub fn zero() -> Self {
        Self::from_i64(0)
    }

    pub fn one() -> Self {
        Self::from_i64(1)
    }

    // ========== Predicates ==========

    pub fn is_zero(&self) -> bool {
        self.inner == DBig::ZERO
    }

    pub fn is_negative(&self) -> bool {
        self.inner < DBig::ZERO
    }

    pub fn is_integer(&self) -> bool {
        self.inner == self.inner.clone().floor()
    }

    // ========== Arithmetic ==========

    pub fn add(&self, other: &Self) -> Self {
        Self { inner: &self.inner + &other.inner }
    }

    pub fn sub(&self, other: &Self) -> Self {
        Self { inner: &self.inner - &other.inner }
    }

    pub fn mul(&self, other: &Self) -> Self {
        Self { inner: &self.inner * &other.inner }
    }

    /// Safe division (returns Result, never panics)
    pub fn checked_div(&self, other: &Self) -> Result<Self, NumberError> {
        if other.is_zero() {
            Err(NumberError::DivisionByZero)
        } else {
            Ok(Self { inner: &self.inner / &other.inner })
        }
    }

    /// Integer power by repeated multiplication (exact within working precision)
    pub fn pow(&self, exp: i32) -> Result<Self, NumberError> {
        let mut result = Self::one();
        for _ in 0..exp.unsigned_abs() {
            result = result.mul(self);
        }
        if exp < 0 {
            Self::one().checked_div(&result)
        } else {
            Ok(result)
        }
    }

    pub fn neg(&self) -> Self {
        Self { inner: -&self.inner }
    }

    pub fn abs(&self) -> Self {
        if self.is_negative() {
            self.neg()
        } else {
            self.clone()
        }
    }

    pub fn floor(&self) -> Self {
        Self { inner: self.inner.clone().floor() }
    }

    /// Round half away from zero to `places` fractional digits
    pub fn round_to(&self, places: u32) -> Self {
        let scale = Self::from_i64(10).pow(places as i32).unwrap_or_else(|_| Self::one());
        let half = Self::from_ratio(1, 2);
        let scaled = self.abs().mul(&scale).add(&half).floor();
        let rounded = scaled.checked_div(&scale).unwrap_or_else(|_| self.abs());
        if self.is_negative() {
            rounded.neg()
        } else {
            rounded
        }
    }

    /// Decimal exponent of the leading digit (floor(log10(|x|))), None for zero
    pub fn magnitude_exponent(&self) -> Option<i32> {
        if self.is_zero() {
            return None;
        }
        let (significand, exponent) = self.inner.clone().into_repr().into_parts();
        let digits = significand.to_string().trim_start_matches('-').len() as i32;
        Some(digits + exponent as i32 - 1)
    }

    // ========== Conversion ==========

    /// Convert to f64 (may lose precision)
    pub fn to_f64(&self) -> Option<f64> {
        // significand * 10^exponent
        let (significand, exponent) = self.inner.clone().into_repr().into_parts();

        let sig_f64: f64 = if significand.bit_len() <= 63 {
            let i: i64 = significand.try_into().ok()?;
            i as f64
        } else {
            let extra_bits = significand.bit_len() - 63;
            let shifted = &significand >> extra_bits;
            let shifted_i64: i64 = shifted.try_into().ok()?;
            shifted_i64 as f64 * 2_f64.powi(extra_bits as i32)
        };

        let result = if exponent == 0 {
            sig_f64
        } else if (1..=308).contains(&exponent) {
            sig_f64 * 10_f64.powi(exponent as i32)
        } else if (-308..0).contains(&exponent) {
            sig_f64 / 10_f64.powi((-exponent) as i32)
        } else {
            return None;
        };

        result.is_finite().then_some(result)
    }

    /// Exact decimal digits as (negative, integer part, fraction part),
    /// trailing fractional zeros removed
    fn digits(&self) -> (bool, String, String) {
        let (significand, exponent) = self.inner.clone().into_repr().into_parts();
        let text = significand.to_string();
        let (negative, mut digits) = match text.strip_prefix('-') {
            Some(rest) => (true, rest.to_string()),
            None => (false, text),
        };

        if exponent >= 0 {
            digits.push_str(&"0".repeat(exponent as usize));
            return (negative, digits, String::new());
        }

        let fraction_len = exponent.unsigned_abs();
        if digits.len() <= fraction_len {
            digits = format!("{}{}", "0".repeat(fraction_len - digits.len() + 1), digits);
        }
        let (integer, fraction) = digits.split_at(digits.len() - fraction_len);
        (negative, integer.to_string(), fraction.trim_end_matches('0').to_string())
    }

    /// Render as plain decimal digits with exactly `places` fractional digits
    pub fn as_decimal(&self, places: u32) -> String {
        let (negative, integer, mut fraction) = self.round_to(places).digits();
        fraction.truncate(places as usize);
        while fraction.len() < places as usize {
            fraction.push('0');
        }

        let mut out = String::with_capacity(integer.len() + fraction.len() + 2);
        if negative {
            out.push('-');
        }
        out.push_str(&integer);
        if !fraction.is_empty() {
            out.push('.');
            out.push_str(&fraction);
        }
        out
    }
}

// ========== Trait Implementations ==========

impl From<i64> for Number {
    fn from(n: i64) -> Self {
        Self::from_i64(n)
    }
}

impl From<i32> for Number {
    fn from(n: i32) -> Self {
        Self::from_i64(n as i64)
    }
}

impl From<f64> for Number {
    fn from(f: f64) -> Self {
        Self::from_f64(f)
    }
}

impl std::str::FromStr for Number {
    type Err = NumberError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Number::from_str(s)
    }
}

impl std::fmt::Display for Number {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (negative, integer, fraction) = self.digits();
        if negative {
            write!(f, "-")?;
        }
        write!(f, "{}", integer)?;
        if !fraction.is_empty() {
            write!(f, ".{}", fraction)?;
        }
        Ok(())
    }
}

impl Serialize for Number {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Number {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::from_str(&s).map_err(serde::de::Error::custom)
    }
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl Eq for Number {}

impl PartialOrd for Number {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Number {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.inner.partial_cmp(&other.inner).unwrap_or(std::cmp::Ordering::Equal)
    }
}
