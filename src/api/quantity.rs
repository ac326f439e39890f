use crate::api::record::encode;
use crate::core::decode::{decode_suffix, split_suffix};
use crate::error::MagnitudeError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A displayed game value: `mantissa` times 10^`exponent`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Quantity {
    pub mantissa: f64,
    pub exponent: u64,
}

impl Quantity {
    pub fn new(mantissa: f64, exponent: u64) -> Self {
        Self { mantissa, exponent }
    }

    /// Suffix for this quantity's exponent, if it has one.
    pub fn suffix(&self) -> Option<String> {
        encode(self.exponent).ok().map(|record| record.suffix)
    }

    /// Suffix only when it parses back to this exponent.
    ///
    /// The letter codes d, k, q and s past 10^303 read as their finite
    /// meanings, so they have no unambiguous suffix.
    fn display_suffix(&self) -> Option<String> {
        self.suffix()
            .filter(|suffix| decode_suffix(suffix) == Ok(self.exponent))
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.display_suffix() {
            Some(suffix) => write!(f, "{}{}", self.mantissa, suffix),
            None => write!(f, "{}e{}", self.mantissa, self.exponent),
        }
    }
}

impl FromStr for Quantity {
    type Err = MagnitudeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_quantity(s)
    }
}

/// Parses a suffixed number such as "1.5dQDR" or "250M".
///
/// A missing number means 1, so a bare suffix parses too.
///
/// # Example
/// ```
/// use magnitude_namer::parse_quantity;
///
/// # fn main() -> Result<(), magnitude_namer::MagnitudeError> {
/// let q = parse_quantity("1.5dQDR")?;
/// assert_eq!(q.mantissa, 1.5);
/// assert_eq!(q.exponent, 132);
/// assert_eq!(q.to_string(), "1.5dQDR");
/// # Ok(())
/// # }
/// ```
///
/// # Errors
///
/// - [`MagnitudeError::InvalidFormat`] - No suffix letters, or the number part does not parse
/// - [`MagnitudeError::NoMatch`] - Suffix letters belong to no tier
pub fn parse_quantity(text: &str) -> Result<Quantity, MagnitudeError> {
    let (number, suffix) = split_suffix(text)?;

    let mantissa = if number.is_empty() {
        1.0
    } else {
        number
            .parse::<f64>()
            .map_err(|_| MagnitudeError::InvalidFormat(format!("invalid number '{}'", number)))?
    };

    let exponent = decode_suffix(suffix)?;
    Ok(Quantity::new(mantissa, exponent))
}
