use crate::core::constants::{
    COMMON_NAMES, EXPONENT_STEP, MIN_EXPONENT, SHORT_NAMES, SHORT_START, TENS_ROOTS,
    UNIT_PREFIXES,
};
use crate::core::tier::{NamingTier, Position};

/// Suffix for an exponent in [3, 303], or an empty string when none is defined.
///
/// # Example
/// ```
/// use magnitude_namer::finite_suffix;
///
/// assert_eq!(finite_suffix(3), "k");
/// assert_eq!(finite_suffix(36), "Dc");
/// assert_eq!(finite_suffix(42), "dDc");
/// assert_eq!(finite_suffix(305), "");
/// ```
pub fn finite_suffix(exponent: u64) -> String {
    match NamingTier::of(exponent) {
        Some(NamingTier::Common) => COMMON_NAMES[common_index(exponent)].0.to_string(),
        Some(NamingTier::Short) => SHORT_NAMES[short_index(exponent)].0.to_string(),
        Some(NamingTier::Compound) => compound_parts(exponent)
            .map(|((prefix, _), (root, _))| format!("{}{}", prefix, root))
            .unwrap_or_default(),
        _ => String::new(),
    }
}

/// Full name for an exponent in [3, 303], or an empty string when none is defined.
///
/// Compound names are `prefix word + root word` with only the first character
/// uppercased, e.g. "Duoquadragintillion".
pub fn finite_full_name(exponent: u64) -> String {
    match NamingTier::of(exponent) {
        Some(NamingTier::Common) => COMMON_NAMES[common_index(exponent)].1.to_string(),
        Some(NamingTier::Short) => SHORT_NAMES[short_index(exponent)].1.to_string(),
        Some(NamingTier::Compound) => compound_parts(exponent)
            .map(|((_, prefix), (_, root))| capitalize(&format!("{}{}", prefix, root)))
            .unwrap_or_default(),
        _ => String::new(),
    }
}

/// Suffix and full name together, `None` when the exponent has no finite name.
pub fn encode_finite(exponent: u64) -> Option<(String, String)> {
    let suffix = finite_suffix(exponent);
    let full_name = finite_full_name(exponent);
    if suffix.is_empty() || full_name.is_empty() {
        return None;
    }
    Some((suffix, full_name))
}

fn common_index(exponent: u64) -> usize {
    ((exponent - MIN_EXPONENT) / EXPONENT_STEP) as usize
}

fn short_index(exponent: u64) -> usize {
    ((exponent - SHORT_START) / EXPONENT_STEP) as usize
}

type TableEntry = (&'static str, &'static str);

fn compound_parts(exponent: u64) -> Option<(TableEntry, TableEntry)> {
    let pos = Position::from_exponent(exponent)?;
    let prefix = *UNIT_PREFIXES.get(pos.units)?;
    let root = *TENS_ROOTS.get(pos.tens)?;
    Some((prefix, root))
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::constants::{FINITE_COUNT, MAX_FINITE_EXPONENT};

    #[test]
    fn test_common_and_short_tiers() {
        assert_eq!(encode_finite(3), Some(("k".into(), "Thousand".into())));
        assert_eq!(encode_finite(12), Some(("T".into(), "Trillion".into())));
        assert_eq!(encode_finite(15), Some(("q".into(), "Quadrillion".into())));
        assert_eq!(encode_finite(18), Some(("Q".into(), "Quintillion".into())));
        assert_eq!(encode_finite(33), Some(("d".into(), "Decillion".into())));
    }

    #[test]
    fn test_tens_boundaries_have_no_prefix() {
        assert_eq!(encode_finite(36), Some(("Dc".into(), "Decillion".into())));
        assert_eq!(encode_finite(66), Some(("Vg".into(), "Vigintillion".into())));
        assert_eq!(encode_finite(96), Some(("Tg".into(), "Trigintillion".into())));
        assert_eq!(
            encode_finite(126),
            Some(("QDR".into(), "Quadragintillion".into()))
        );
    }

    #[test]
    fn test_compound_names() {
        assert_eq!(
            encode_finite(132),
            Some(("dQDR".into(), "Duoquadragintillion".into()))
        );
        assert_eq!(
            encode_finite(129),
            Some(("UQDR".into(), "Unquadragintillion".into()))
        );
        assert_eq!(
            encode_finite(63),
            Some(("nDc".into(), "Novemdecillion".into()))
        );
        assert_eq!(
            encode_finite(MAX_FINITE_EXPONENT),
            Some(("nNo".into(), "Novemnonagintillion".into()))
        );
    }

    #[test]
    fn test_no_name_outside_finite_range() {
        assert_eq!(encode_finite(0), None);
        assert_eq!(encode_finite(4), None);
        assert_eq!(encode_finite(305), None);
        assert_eq!(encode_finite(306), None);
        assert_eq!(finite_suffix(306), "");
        assert_eq!(finite_full_name(1000), "");
    }

    #[test]
    fn test_every_finite_exponent_is_named() {
        let named = (MIN_EXPONENT..=MAX_FINITE_EXPONENT)
            .step_by(EXPONENT_STEP as usize)
            .filter(|&e| encode_finite(e).is_some())
            .count();
        assert_eq!(named, FINITE_COUNT);
    }
}
