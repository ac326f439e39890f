use crate::api::record::{MagnitudeRecord, encode};
use crate::core::constants::EXPONENT_STEP;
use rayon::prelude::*;
use tracing::debug;

/// Lazy walk over `start, start + 3, start + 6, ...` for at most `count` steps.
///
/// Steps whose exponent has no name are skipped rather than yielded empty,
/// so fewer than `count` records may come out.
#[derive(Debug, Clone)]
pub struct BatchIter {
    next: Option<u64>,
    remaining: usize,
}

impl BatchIter {
    pub fn new(start: u64, count: usize) -> Self {
        Self {
            next: Some(start),
            remaining: count,
        }
    }

    /// Exponent the following call to `next` will try, if any.
    pub fn next_exponent(&self) -> Option<u64> {
        if self.remaining == 0 { None } else { self.next }
    }
}

impl Iterator for BatchIter {
    type Item = MagnitudeRecord;

    fn next(&mut self) -> Option<Self::Item> {
        while self.remaining > 0 {
            let exponent = self.next?;
            self.remaining -= 1;
            self.next = exponent.checked_add(EXPONENT_STEP);

            match encode(exponent) {
                Ok(record) => return Some(record),
                Err(_) => debug!(exponent, "skipping unnamed exponent in batch"),
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.remaining))
    }
}

pub fn batch_iter(start: u64, count: usize) -> BatchIter {
    BatchIter::new(start, count)
}

/// Records for `count` consecutive named exponents starting at `start`.
///
/// Spans the finite/infinite boundary transparently. Call again with the
/// exponent after the last record to page forward.
///
/// # Example
/// ```
/// use magnitude_namer::batch;
///
/// let records = batch(300, 4);
/// let suffixes: Vec<_> = records.iter().map(|r| r.suffix.as_str()).collect();
/// assert_eq!(suffixes, ["oNo", "nNo", "a", "b"]);
/// ```
pub fn batch(start: u64, count: usize) -> Vec<MagnitudeRecord> {
    batch_iter(start, count).collect()
}

/// Same output as [`batch`], with records built on the rayon pool.
pub fn par_batch(start: u64, count: usize) -> Vec<MagnitudeRecord> {
    (0..count)
        .into_par_iter()
        .filter_map(|i| {
            let exponent = (i as u64)
                .checked_mul(EXPONENT_STEP)
                .and_then(|offset| offset.checked_add(start))?;
            encode(exponent).ok()
        })
        .collect()
}
