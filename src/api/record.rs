use crate::core::decode::decode;
use crate::core::finite::encode_finite;
use crate::core::infinite::encode_infinite;
use crate::core::tier::NamingTier;
use crate::error::MagnitudeError;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// One named magnitude: 10^`exponent` with its suffix and full name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MagnitudeRecord {
    pub exponent: u64,
    pub scientific: String,
    pub suffix: String,
    pub full_name: String,
}

impl MagnitudeRecord {
    pub(crate) fn new(exponent: u64, suffix: String, full_name: String) -> Self {
        Self {
            exponent,
            scientific: format!("1e{}", exponent),
            suffix,
            full_name,
        }
    }

    /// Create a MagnitudeRecord for an exponent
    ///
    /// # Example
    /// ```
    /// use magnitude_namer::MagnitudeRecord;
    ///
    /// # fn main() -> Result<(), magnitude_namer::MagnitudeError> {
    /// let record = MagnitudeRecord::from_exponent(6)?;
    /// assert_eq!(record.scientific, "1e6");
    /// assert_eq!(record.suffix, "M");
    /// assert_eq!(record.full_name, "Million");
    /// # Ok(())
    /// # }
    /// ```
    pub fn from_exponent(exponent: u64) -> Result<Self, MagnitudeError> {
        encode(exponent)
    }

    /// Create a MagnitudeRecord from a suffix, optionally after a number
    ///
    /// # Example
    /// ```
    /// use magnitude_namer::MagnitudeRecord;
    ///
    /// # fn main() -> Result<(), magnitude_namer::MagnitudeError> {
    /// let record = MagnitudeRecord::from_suffix("2.5QDR")?;
    /// assert_eq!(record.exponent, 126);
    /// assert_eq!(record.full_name, "Quadragintillion");
    /// # Ok(())
    /// # }
    /// ```
    pub fn from_suffix(text: &str) -> Result<Self, MagnitudeError> {
        encode(decode(text)?)
    }

    pub fn tier(&self) -> Option<NamingTier> {
        NamingTier::of(self.exponent)
    }

    pub fn is_finite(&self) -> bool {
        self.tier().is_some_and(|tier| tier.is_finite())
    }
}

impl fmt::Display for MagnitudeRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} ({})", self.scientific, self.suffix, self.full_name)
    }
}

/// Names the magnitude 10^`exponent`.
///
/// Exponents 3..=303 use the Latin tables; larger multiples of 3 get a
/// letter code and a "Level N" label.
///
/// # Example
/// ```
/// use magnitude_namer::{encode, MagnitudeError};
///
/// let record = encode(3).unwrap();
/// assert_eq!((record.suffix.as_str(), record.full_name.as_str()), ("k", "Thousand"));
///
/// let record = encode(306).unwrap();
/// assert_eq!(record.suffix, "a");
/// assert_eq!(record.full_name, "Level 1 (10^306)");
///
/// assert_eq!(encode(305), Err(MagnitudeError::NotFound(305)));
/// ```
///
/// # Errors
///
/// - [`MagnitudeError::NotFound`] - Zero, not a multiple of 3, or no table entry
pub fn encode(exponent: u64) -> Result<MagnitudeRecord, MagnitudeError> {
    let parts = match NamingTier::of(exponent) {
        Some(NamingTier::Infinite) => encode_infinite(exponent),
        Some(_) => encode_finite(exponent),
        None => None,
    };

    match parts {
        Some((suffix, full_name)) => Ok(MagnitudeRecord::new(exponent, suffix, full_name)),
        None => {
            debug!(exponent, "no name defined for exponent");
            Err(MagnitudeError::NotFound(exponent))
        }
    }
}
