pub mod constants;
pub mod decode;
pub mod finite;
pub mod infinite;
pub mod tier;

pub use constants::{
    COMMON_NAMES, COMPOUND_START, DEFAULT_HIGHLIGHT, EXPONENT_STEP, FINITE_COUNT, INFINITE_START,
    MAX_FINITE_EXPONENT, MIN_EXPONENT, SHORT_NAMES, SHORT_START, TENS_ROOTS, UNIT_PREFIXES,
};
pub use decode::{decode, decode_suffix};
pub use finite::{encode_finite, finite_full_name, finite_suffix};
pub use infinite::{decode_infinite, encode_infinite, infinite_full_name, infinite_suffix};
pub use tier::{NamingTier, Position};
