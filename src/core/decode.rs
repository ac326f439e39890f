use crate::core::constants::{
    COMMON_NAMES, EXPONENT_STEP, MIN_EXPONENT, SHORT_NAMES, TENS_ROOTS, UNIT_PREFIXES,
};
use crate::core::infinite::decode_infinite;
use crate::core::tier::Position;
use crate::error::MagnitudeError;
use regex::Regex;
use std::collections::HashMap;
use std::sync::LazyLock;
use tracing::{debug, trace};

/// Optional leading number followed by the maximal trailing run of letters.
static SUFFIX_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)^(?P<number>.*?)(?P<suffix>[A-Za-z]+)$").expect("suffix pattern is valid")
});

/// Common and short-tier suffixes, case-sensitive.
static NAMED_SUFFIXES: LazyLock<HashMap<&'static str, u64>> = LazyLock::new(|| {
    COMMON_NAMES
        .iter()
        .chain(SHORT_NAMES.iter())
        .enumerate()
        .map(|(i, (suffix, _))| (*suffix, MIN_EXPONENT + i as u64 * EXPONENT_STEP))
        .collect()
});

/// Non-empty unit prefixes mapped to their `units` index.
static UNIT_TOKENS: LazyLock<HashMap<&'static str, usize>> = LazyLock::new(|| {
    UNIT_PREFIXES
        .iter()
        .enumerate()
        .filter(|(_, (abbr, _))| !abbr.is_empty())
        .map(|(units, (abbr, _))| (*abbr, units))
        .collect()
});

/// Tens roots with their `tens` index, longest first.
static ROOT_TOKENS: LazyLock<Vec<(&'static str, usize)>> = LazyLock::new(|| {
    let mut roots: Vec<_> = TENS_ROOTS
        .iter()
        .enumerate()
        .map(|(tens, (abbr, _))| (*abbr, tens))
        .collect();
    roots.sort_by(|a, b| b.0.len().cmp(&a.0.len()));
    roots
});

/// Splits text into its numeric part and trailing suffix letters.
pub(crate) fn split_suffix(text: &str) -> Result<(&str, &str), MagnitudeError> {
    let trimmed = text.trim();
    let caps = SUFFIX_PATTERN
        .captures(trimmed)
        .ok_or_else(|| MagnitudeError::InvalidFormat(format!("no suffix letters in '{}'", text)))?;

    match (caps.name("number"), caps.name("suffix")) {
        (Some(number), Some(suffix)) => Ok((number.as_str().trim(), suffix.as_str())),
        _ => Err(MagnitudeError::InvalidFormat(format!(
            "no suffix letters in '{}'",
            text
        ))),
    }
}

/// Parses the exponent named by the trailing suffix of `text`.
///
/// Accepts a bare suffix ("dQDR") or a suffix after a number ("1.5dQDR").
/// Matching is case-sensitive and tried tier by tier: common, short,
/// compound, then lowercase letter codes.
///
/// # Example
/// ```
/// use magnitude_namer::{decode, MagnitudeError};
///
/// assert_eq!(decode("k"), Ok(3));
/// assert_eq!(decode("1.5dQDR"), Ok(132));
/// assert_eq!(decode("aa"), Ok(384));
/// assert!(matches!(decode("42"), Err(MagnitudeError::InvalidFormat(_))));
/// assert!(matches!(decode("Zz"), Err(MagnitudeError::NoMatch(_))));
/// ```
///
/// # Errors
///
/// - [`MagnitudeError::InvalidFormat`] - No trailing letters at all
/// - [`MagnitudeError::NoMatch`] - Letters do not belong to any tier
/// - [`MagnitudeError::Overflow`] - Letter code beyond the `u64` exponent range
pub fn decode(text: &str) -> Result<u64, MagnitudeError> {
    let (_, suffix) = split_suffix(text)?;
    decode_suffix(suffix)
}

/// Resolves bare suffix letters to an exponent.
pub fn decode_suffix(suffix: &str) -> Result<u64, MagnitudeError> {
    if let Some(&exponent) = NAMED_SUFFIXES.get(suffix) {
        trace!(suffix, exponent, "matched named suffix");
        return Ok(exponent);
    }

    if let Some(exponent) = match_compound(suffix) {
        trace!(suffix, exponent, "matched compound suffix");
        return Ok(exponent);
    }

    if suffix.bytes().all(|b| b.is_ascii_lowercase()) {
        return decode_infinite(suffix);
    }

    debug!(suffix, "suffix matches no tier");
    Err(MagnitudeError::NoMatch(suffix.to_string()))
}

fn match_compound(suffix: &str) -> Option<u64> {
    ROOT_TOKENS.iter().find_map(|&(root, tens)| {
        let rest = suffix.strip_suffix(root)?;
        let units = if rest.is_empty() {
            0
        } else {
            *UNIT_TOKENS.get(rest)?
        };
        Position::new(units, tens).exponent()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_suffixes_are_case_sensitive() -> Result<(), MagnitudeError> {
        assert_eq!(decode("k")?, 3);
        assert_eq!(decode("T")?, 12);
        assert_eq!(decode("q")?, 15);
        assert_eq!(decode("Q")?, 18);
        assert_eq!(decode("d")?, 33);
        assert_eq!(decode("O")?, 27);
        assert_eq!(decode("D"), Err(MagnitudeError::NoMatch("D".to_string())));
        Ok(())
    }

    #[test]
    fn test_compound_suffixes() -> Result<(), MagnitudeError> {
        assert_eq!(decode("Dc")?, 36);
        assert_eq!(decode("UDc")?, 39);
        assert_eq!(decode("Vg")?, 66);
        assert_eq!(decode("QDR")?, 126);
        assert_eq!(decode("dQDR")?, 132);
        assert_eq!(decode("QQDR")?, 141);
        assert_eq!(decode("QQn")?, 171);
        assert_eq!(decode("nNo")?, 303);
        Ok(())
    }

    #[test]
    fn test_compound_requires_whole_prefix() {
        assert_eq!(decode("xQDR"), Err(MagnitudeError::NoMatch("xQDR".to_string())));
        assert_eq!(decode("UUDc"), Err(MagnitudeError::NoMatch("UUDc".to_string())));
        assert_eq!(decode("DR"), Err(MagnitudeError::NoMatch("DR".to_string())));
        assert_eq!(decode("Zz"), Err(MagnitudeError::NoMatch("Zz".to_string())));
    }

    #[test]
    fn test_numeric_prefix_and_whitespace() -> Result<(), MagnitudeError> {
        assert_eq!(decode("1.5dQDR")?, 132);
        assert_eq!(decode("  250 M ")?, 6);
        assert_eq!(decode("1e5k")?, 3);
        assert_eq!(decode("7ab")?, 387);
        assert_eq!(decode("1.5\nk")?, 3);
        assert_eq!(decode("1\n5dQDR")?, 132);
        Ok(())
    }

    #[test]
    fn test_missing_suffix_is_invalid_format() {
        assert!(matches!(decode(""), Err(MagnitudeError::InvalidFormat(_))));
        assert!(matches!(decode("12345"), Err(MagnitudeError::InvalidFormat(_))));
        assert!(matches!(decode("1.5xyz123"), Err(MagnitudeError::InvalidFormat(_))));
        assert!(matches!(decode("1.5 !"), Err(MagnitudeError::InvalidFormat(_))));
    }

    #[test]
    fn test_split_suffix() -> Result<(), MagnitudeError> {
        assert_eq!(split_suffix("1.5dQDR")?, ("1.5", "dQDR"));
        assert_eq!(split_suffix("k")?, ("", "k"));
        assert_eq!(split_suffix(" 3 aa ")?, ("3", "aa"));
        assert_eq!(split_suffix("2.5\n\tQDR")?, ("2.5", "QDR"));
        Ok(())
    }
}
