/// Step between consecutive named exponents
pub const EXPONENT_STEP: u64 = 3;

/// Smallest exponent with a name (10^3, "k")
pub const MIN_EXPONENT: u64 = 3;

/// First exponent of the single-letter Latin tier (10^15, "q")
pub const SHORT_START: u64 = 15;

/// First exponent of the compound Latin tier (10^36, "Dc")
pub const COMPOUND_START: u64 = 36;

/// Largest exponent covered by the finite naming tables
pub const MAX_FINITE_EXPONENT: u64 = 303;

/// First exponent of the open-ended letter-code tier (10^306, "a")
pub const INFINITE_START: u64 = 306;

/// Number of named exponents in [MIN_EXPONENT, MAX_FINITE_EXPONENT]
pub const FINITE_COUNT: usize = 101;

/// Letters available to infinite-tier codes
pub(crate) const ALPHABET_SIZE: u64 = 26;

/// Exponent highlighted in the reference table when no other is chosen
pub const DEFAULT_HIGHLIGHT: u64 = 129;

/// Common abbreviations (suffix, name) for 10^3..10^12
pub const COMMON_NAMES: [(&str, &str); 4] = [
    ("k", "Thousand"),
    ("M", "Million"),
    ("B", "Billion"),
    ("T", "Trillion"),
];

/// Single-letter Latin abbreviations (suffix, name) for 10^15..10^33
pub const SHORT_NAMES: [(&str, &str); 7] = [
    ("q", "Quadrillion"),
    ("Q", "Quintillion"),
    ("s", "Sextillion"),
    ("S", "Septillion"),
    ("O", "Octillion"),
    ("N", "Nonillion"),
    ("d", "Decillion"),
];

/// Compound-tier unit prefixes (abbreviation, word), indexed by `units`.
///
/// Index 0 is empty on both sides: a tens boundary carries no prefix.
pub const UNIT_PREFIXES: [(&str, &str); 10] = [
    ("", ""),
    ("U", "un"),
    ("d", "duo"),
    ("t", "tre"),
    ("q", "quattuor"),
    ("Q", "quin"),
    ("s", "sex"),
    ("S", "septen"),
    ("o", "octo"),
    ("n", "novem"),
];

/// Compound-tier roots (abbreviation, word), indexed by `tens`
pub const TENS_ROOTS: [(&str, &str); 9] = [
    ("Dc", "decillion"),
    ("Vg", "vigintillion"),
    ("Tg", "trigintillion"),
    ("QDR", "quadragintillion"),
    ("Qn", "quinquagintillion"),
    ("Sx", "sexagintillion"),
    ("Sp", "septuagintillion"),
    ("Oc", "octogintillion"),
    ("No", "nonagintillion"),
];
