//! # magnitude-namer
//!
//! Names powers of ten the way idle games label them: 10^3 is "k"
//! (Thousand), 10^132 is "dQDR" (Duoquadragintillion), and past 10^303
//! the suffixes continue as letter codes "a", "b", ..., "aa", ...
//!
//! There are currently three main entry points.
//!
//! ### 1. `encode` / `decode` - Single Magnitudes
//!
//! ```
//! use magnitude_namer::{decode, encode};
//!
//! # fn main() -> Result<(), magnitude_namer::MagnitudeError> {
//! let record = encode(132)?;
//! println!("{} = {} ({})", record.scientific, record.suffix, record.full_name);
//!
//! assert_eq!(decode("1.5dQDR")?, 132);
//! # Ok(())
//! # }
//! ```
//!
//! ### 2. `batch` / `MagnitudeTable` - Consecutive Magnitudes
//!
//! ```
//! use magnitude_namer::{MagnitudeTable, batch};
//!
//! let page = batch(297, 5);
//! assert_eq!(page.len(), 5);
//!
//! let table = MagnitudeTable::reference();
//! if let Some(row) = table.highlighted() {
//!     println!("You are here: {}", row);
//! }
//! ```
//!
//! ### 3. `RecordsToCsv` / `RecordsToJson` - Export
//!
//! ```no_run
//! use magnitude_namer::{ExportConfig, MagnitudeTable, RecordsToCsv, RecordsToJson};
//!
//! let table = MagnitudeTable::reference();
//! let config = ExportConfig::new().include_exponent(true);
//!
//! table.write_csv("magnitudes.csv", &config).unwrap();
//! table.write_json("magnitudes.json").unwrap();
//! ```
//!

pub mod api;
pub mod core;
pub mod error;
pub mod io;

pub use api::{
    BatchIter, MagnitudeRecord, MagnitudeTable, MagnitudeTableBuilder, Quantity, batch,
    batch_iter, encode, par_batch, parse_quantity,
};
pub use self::core::{
    COMPOUND_START, DEFAULT_HIGHLIGHT, EXPONENT_STEP, FINITE_COUNT, INFINITE_START,
    MAX_FINITE_EXPONENT, MIN_EXPONENT, NamingTier, Position, decode, decode_infinite,
    decode_suffix, encode_finite, encode_infinite, finite_full_name, finite_suffix,
    infinite_full_name, infinite_suffix,
};
pub use error::MagnitudeError;
pub use io::{ExportConfig, RecordsToCsv, RecordsToJson, records_from_json};
