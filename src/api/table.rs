use crate::api::batch::{batch, par_batch};
use crate::api::record::MagnitudeRecord;
use crate::core::constants::{DEFAULT_HIGHLIGHT, EXPONENT_STEP, FINITE_COUNT, MIN_EXPONENT};
use crate::core::tier::NamingTier;
use crate::error::MagnitudeError;

/// An ordered window of named magnitudes, optionally with one highlighted row.
#[derive(Debug, Clone, PartialEq)]
pub struct MagnitudeTable {
    records: Vec<MagnitudeRecord>,
    highlight: Option<u64>,
}

impl MagnitudeTable {
    pub fn builder() -> MagnitudeTableBuilder {
        MagnitudeTableBuilder::new()
    }

    /// Every finite-tier magnitude, 10^3 through 10^303.
    pub fn finite() -> Self {
        Self::from_range(MIN_EXPONENT, FINITE_COUNT)
    }

    pub fn from_range(start: u64, count: usize) -> Self {
        Self {
            records: batch(start, count),
            highlight: None,
        }
    }

    /// The full finite table with the default current level highlighted.
    pub fn reference() -> Self {
        Self {
            highlight: Some(DEFAULT_HIGHLIGHT),
            ..Self::finite()
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[MagnitudeRecord] {
        &self.records
    }

    pub fn into_records(self) -> Vec<MagnitudeRecord> {
        self.records
    }

    pub fn iter(&self) -> impl Iterator<Item = &MagnitudeRecord> {
        self.records.iter()
    }

    pub fn get(&self, exponent: u64) -> Option<&MagnitudeRecord> {
        self.records
            .binary_search_by_key(&exponent, |record| record.exponent)
            .ok()
            .map(|idx| &self.records[idx])
    }

    pub fn find_suffix(&self, suffix: &str) -> Option<&MagnitudeRecord> {
        self.records.iter().find(|record| record.suffix == suffix)
    }

    pub fn highlight(&self) -> Option<u64> {
        self.highlight
    }

    pub fn highlighted(&self) -> Option<&MagnitudeRecord> {
        self.get(self.highlight?)
    }

    pub fn is_highlighted(&self, record: &MagnitudeRecord) -> bool {
        self.highlight == Some(record.exponent)
    }

    /// First and last exponent in the table.
    pub fn range(&self) -> Option<(u64, u64)> {
        let first = self.records.first()?;
        let last = self.records.last()?;
        Some((first.exponent, last.exponent))
    }

    /// Exponent where the next page of records starts.
    pub fn next_start(&self) -> Option<u64> {
        self.records.last()?.exponent.checked_add(EXPONENT_STEP)
    }

    pub fn by_tier(&self, tier: NamingTier) -> Vec<&MagnitudeRecord> {
        self.filter(|record| record.tier() == Some(tier))
    }

    pub fn filter<F>(&self, predicate: F) -> Vec<&MagnitudeRecord>
    where
        F: Fn(&MagnitudeRecord) -> bool,
    {
        self.records.iter().filter(|record| predicate(record)).collect()
    }
}

#[derive(Debug, Default)]
pub struct MagnitudeTableBuilder {
    start: Option<u64>,
    count: Option<usize>,
    highlight: Option<u64>,
    parallel: bool,
}

impl MagnitudeTableBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start(mut self, start: u64) -> Self {
        self.start = Some(start);
        self
    }

    pub fn count(mut self, count: usize) -> Self {
        self.count = Some(count);
        self
    }

    pub fn highlight(mut self, exponent: u64) -> Self {
        self.highlight = Some(exponent);
        self
    }

    // Build records on the rayon pool.
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Builds the table, defaulting to the full finite range.
    ///
    /// # Example
    /// ```
    /// use magnitude_namer::MagnitudeTable;
    ///
    /// # fn main() -> Result<(), magnitude_namer::MagnitudeError> {
    /// let table = MagnitudeTable::builder()
    ///     .start(120)
    ///     .count(5)
    ///     .highlight(126)
    ///     .build()?;
    ///
    /// assert_eq!(table.len(), 5);
    /// assert_eq!(table.highlighted().map(|r| r.suffix.as_str()), Some("QDR"));
    /// # Ok(())
    /// # }
    /// ```
    ///
    /// # Errors
    ///
    /// - [`MagnitudeError::NotFound`] - The highlight is not a row of the table
    pub fn build(self) -> Result<MagnitudeTable, MagnitudeError> {
        let start = self.start.unwrap_or(MIN_EXPONENT);
        let count = self.count.unwrap_or(FINITE_COUNT);

        let records = if self.parallel {
            par_batch(start, count)
        } else {
            batch(start, count)
        };
        let table = MagnitudeTable {
            records,
            highlight: self.highlight,
        };

        if let Some(exponent) = self.highlight.filter(|&e| table.get(e).is_none()) {
            return Err(MagnitudeError::NotFound(exponent));
        }

        Ok(table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::constants::MAX_FINITE_EXPONENT;

    #[test]
    fn test_finite_table() {
        let table = MagnitudeTable::finite();
        assert_eq!(table.len(), FINITE_COUNT);
        assert_eq!(table.range(), Some((MIN_EXPONENT, MAX_FINITE_EXPONENT)));
        assert!(table.iter().all(|record| record.is_finite()));
        assert_eq!(table.highlighted(), None);
    }

    #[test]
    fn test_reference_table_highlight() {
        let table = MagnitudeTable::reference();
        let row = table.highlighted().unwrap();
        assert_eq!(row.exponent, DEFAULT_HIGHLIGHT);
        assert_eq!(row.suffix, "UQDR");
        assert!(table.is_highlighted(row));
    }

    #[test]
    fn test_lookup_and_tiers() {
        let table = MagnitudeTable::finite();
        assert_eq!(table.get(66).map(|r| r.suffix.as_str()), Some("Vg"));
        assert_eq!(table.get(67), None);
        assert_eq!(table.find_suffix("dQDR").map(|r| r.exponent), Some(132));
        assert_eq!(table.find_suffix("Zz"), None);

        assert_eq!(table.by_tier(NamingTier::Common).len(), 4);
        assert_eq!(table.by_tier(NamingTier::Short).len(), 7);
        assert_eq!(table.by_tier(NamingTier::Compound).len(), 90);
        assert!(table.by_tier(NamingTier::Infinite).is_empty());
    }

    #[test]
    fn test_builder_pages() -> Result<(), MagnitudeError> {
        let first = MagnitudeTable::builder().start(294).count(4).build()?;
        assert_eq!(first.next_start(), Some(306));

        let second = MagnitudeTable::builder()
            .start(first.next_start().unwrap())
            .count(4)
            .parallel(true)
            .build()?;
        let suffixes: Vec<&str> = second.iter().map(|r| r.suffix.as_str()).collect();
        assert_eq!(suffixes, vec!["a", "b", "c", "d"]);
        Ok(())
    }

    #[test]
    fn test_builder_rejects_missing_highlight() {
        let result = MagnitudeTable::builder().start(3).count(4).highlight(129).build();
        assert_eq!(result, Err(MagnitudeError::NotFound(129)));
    }

    #[test]
    fn test_filter() {
        let table = MagnitudeTable::finite();
        let latin = table.filter(|record| record.full_name.ends_with("gintillion"));
        assert!(!latin.is_empty());
        assert!(latin.len() < table.len());
    }
}
