use crate::core::constants::{
    COMPOUND_START, EXPONENT_STEP, MAX_FINITE_EXPONENT, MIN_EXPONENT, SHORT_START, TENS_ROOTS,
    UNIT_PREFIXES,
};
use serde::{Deserialize, Serialize};

/// The naming rule an exponent falls under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NamingTier {
    /// k, M, B, T (10^3..10^12)
    Common,
    /// Single-letter Latin abbreviations (10^15..10^33)
    Short,
    /// Unit prefix + tens root (10^36..10^303)
    Compound,
    /// Bijective base-26 letter codes (10^306 onwards)
    Infinite,
}

impl NamingTier {
    /// Classifies an exponent, or `None` if it is zero or not a multiple of 3.
    ///
    /// # Example
    /// ```
    /// use magnitude_namer::NamingTier;
    ///
    /// assert_eq!(NamingTier::of(129), Some(NamingTier::Compound));
    /// assert_eq!(NamingTier::of(305), None);
    /// ```
    pub fn of(exponent: u64) -> Option<Self> {
        if exponent < MIN_EXPONENT || exponent % EXPONENT_STEP != 0 {
            return None;
        }
        let tier = if exponent < SHORT_START {
            NamingTier::Common
        } else if exponent < COMPOUND_START {
            NamingTier::Short
        } else if exponent <= MAX_FINITE_EXPONENT {
            NamingTier::Compound
        } else {
            NamingTier::Infinite
        };
        Some(tier)
    }

    pub fn is_finite(&self) -> bool {
        !matches!(self, NamingTier::Infinite)
    }
}

/// Coordinates of a compound-tier exponent: `index = (exponent - 36) / 3`,
/// split into `units = index % 10` and `tens = index / 10`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub units: usize,
    pub tens: usize,
}

impl Position {
    pub fn new(units: usize, tens: usize) -> Self {
        Self { units, tens }
    }

    /// Returns the position of a compound-tier exponent, `None` outside [36, 303].
    pub fn from_exponent(exponent: u64) -> Option<Self> {
        if NamingTier::of(exponent) != Some(NamingTier::Compound) {
            return None;
        }
        let index = ((exponent - COMPOUND_START) / EXPONENT_STEP) as usize;
        Some(Self::new(index % 10, index / 10))
    }

    pub fn index(&self) -> usize {
        self.tens * 10 + self.units
    }

    /// Exponent this position names, `None` if either coordinate is off the tables.
    pub fn exponent(&self) -> Option<u64> {
        if self.units >= UNIT_PREFIXES.len() || self.tens >= TENS_ROOTS.len() {
            return None;
        }
        Some(COMPOUND_START + self.index() as u64 * EXPONENT_STEP)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::constants::INFINITE_START;

    #[test]
    fn test_tier_boundaries() {
        assert_eq!(NamingTier::of(3), Some(NamingTier::Common));
        assert_eq!(NamingTier::of(12), Some(NamingTier::Common));
        assert_eq!(NamingTier::of(15), Some(NamingTier::Short));
        assert_eq!(NamingTier::of(33), Some(NamingTier::Short));
        assert_eq!(NamingTier::of(36), Some(NamingTier::Compound));
        assert_eq!(NamingTier::of(303), Some(NamingTier::Compound));
        assert_eq!(NamingTier::of(INFINITE_START), Some(NamingTier::Infinite));
    }

    #[test]
    fn test_tier_rejects_unnamed_exponents() {
        assert_eq!(NamingTier::of(0), None);
        assert_eq!(NamingTier::of(1), None);
        assert_eq!(NamingTier::of(305), None);
    }

    #[test]
    fn test_position_decomposition() {
        let pos = Position::from_exponent(129).unwrap();
        assert_eq!(pos, Position::new(1, 3));
        assert_eq!(pos.index(), 31);
        assert_eq!(pos.exponent(), Some(129));

        let last = Position::from_exponent(303).unwrap();
        assert_eq!(last, Position::new(9, 8));

        assert_eq!(Position::from_exponent(33), None);
        assert_eq!(Position::from_exponent(306), None);
        assert_eq!(Position::new(0, 9).exponent(), None);
    }
}
