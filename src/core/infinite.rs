use crate::core::constants::{ALPHABET_SIZE, EXPONENT_STEP, INFINITE_START};
use crate::core::tier::NamingTier;
use crate::error::MagnitudeError;

/// Letter code for an exponent past the finite tables.
///
/// Positions count from 10^306 and are written in bijective base-26
/// (a..z, aa..az, ba..), so there is no zero digit and no two positions
/// share a code.
///
/// # Example
/// ```
/// use magnitude_namer::infinite_suffix;
///
/// assert_eq!(infinite_suffix(306).as_deref(), Some("a"));
/// assert_eq!(infinite_suffix(306 + 26 * 3).as_deref(), Some("aa"));
/// assert_eq!(infinite_suffix(303), None);
/// ```
pub fn infinite_suffix(exponent: u64) -> Option<String> {
    let position = infinite_position(exponent)?;

    let mut letters = Vec::new();
    let mut n = position + 1;
    while n > 0 {
        n -= 1;
        letters.push(b'a' + (n % ALPHABET_SIZE) as u8);
        n /= ALPHABET_SIZE;
    }
    letters.reverse();

    String::from_utf8(letters).ok()
}

/// Synthetic label used instead of a Latin name, e.g. "Level 1 (10^306)".
pub fn infinite_full_name(exponent: u64) -> Option<String> {
    let position = infinite_position(exponent)?;
    Some(format!("Level {} (10^{})", position + 1, exponent))
}

/// Letter code and "Level N" label together, `None` below 10^306.
pub fn encode_infinite(exponent: u64) -> Option<(String, String)> {
    Some((infinite_suffix(exponent)?, infinite_full_name(exponent)?))
}

/// Inverse of [`infinite_suffix`]: maps a lowercase letter code back to its exponent.
///
/// # Errors
///
/// - [`MagnitudeError::InvalidFormat`] - Empty code
/// - [`MagnitudeError::NoMatch`] - Code contains anything other than `a-z`
/// - [`MagnitudeError::Overflow`] - Code names an exponent beyond `u64`
pub fn decode_infinite(code: &str) -> Result<u64, MagnitudeError> {
    if code.is_empty() {
        return Err(MagnitudeError::InvalidFormat("empty letter code".to_string()));
    }
    if !code.bytes().all(|b| b.is_ascii_lowercase()) {
        return Err(MagnitudeError::NoMatch(code.to_string()));
    }

    let overflow = || MagnitudeError::Overflow(code.to_string());
    let mut acc: u64 = 0;
    for b in code.bytes() {
        acc = acc
            .checked_mul(ALPHABET_SIZE)
            .and_then(|v| v.checked_add(u64::from(b - b'a') + 1))
            .ok_or_else(overflow)?;
    }
    let position = acc - 1;

    position
        .checked_mul(EXPONENT_STEP)
        .and_then(|v| v.checked_add(INFINITE_START))
        .ok_or_else(overflow)
}

fn infinite_position(exponent: u64) -> Option<u64> {
    match NamingTier::of(exponent) {
        Some(NamingTier::Infinite) => Some((exponent - INFINITE_START) / EXPONENT_STEP),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(position: u64) -> u64 {
        INFINITE_START + position * EXPONENT_STEP
    }

    #[test]
    fn test_letter_sequence() {
        assert_eq!(infinite_suffix(at(0)).as_deref(), Some("a"));
        assert_eq!(infinite_suffix(at(1)).as_deref(), Some("b"));
        assert_eq!(infinite_suffix(at(25)).as_deref(), Some("z"));
        assert_eq!(infinite_suffix(at(26)).as_deref(), Some("aa"));
        assert_eq!(infinite_suffix(at(27)).as_deref(), Some("ab"));
        assert_eq!(infinite_suffix(at(51)).as_deref(), Some("az"));
        assert_eq!(infinite_suffix(at(52)).as_deref(), Some("ba"));
        assert_eq!(infinite_suffix(at(701)).as_deref(), Some("zz"));
        assert_eq!(infinite_suffix(at(702)).as_deref(), Some("aaa"));
    }

    #[test]
    fn test_full_name_label() {
        assert_eq!(
            infinite_full_name(306).as_deref(),
            Some("Level 1 (10^306)")
        );
        assert_eq!(
            infinite_full_name(at(26)).as_deref(),
            Some("Level 27 (10^384)")
        );
    }

    #[test]
    fn test_outside_infinite_tier() {
        assert_eq!(encode_infinite(303), None);
        assert_eq!(encode_infinite(307), None);
        assert_eq!(encode_infinite(0), None);
    }

    #[test]
    fn test_decode_inverts_encode() -> Result<(), MagnitudeError> {
        for position in 0..2000 {
            let exponent = at(position);
            let code = infinite_suffix(exponent).unwrap();
            assert_eq!(decode_infinite(&code)?, exponent);
        }
        Ok(())
    }

    #[test]
    fn test_decode_rejects_bad_codes() {
        assert!(matches!(
            decode_infinite(""),
            Err(MagnitudeError::InvalidFormat(_))
        ));
        assert_eq!(
            decode_infinite("aB"),
            Err(MagnitudeError::NoMatch("aB".to_string()))
        );
        assert!(matches!(
            decode_infinite(&"z".repeat(20)),
            Err(MagnitudeError::Overflow(_))
        ));
    }
}
