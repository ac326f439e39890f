use crate::api::record::MagnitudeRecord;
use crate::api::table::MagnitudeTable;
use crate::error::MagnitudeError;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use tracing::debug;

#[derive(Debug, Clone, PartialEq)]
pub struct ExportConfig {
    pub highlight: Option<u64>,
    pub include_header: bool,
    pub include_exponent: bool,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            highlight: None,
            include_header: true,
            include_exponent: false,
        }
    }
}

impl ExportConfig {
    /// Create the default config: header row, no exponent column, no highlight.
    ///
    /// # Example
    /// ```
    /// use magnitude_namer::ExportConfig;
    ///
    /// let config = ExportConfig::new().highlight(129).include_exponent(true);
    /// ```
    pub fn new() -> Self {
        Self::default()
    }

    // Adds a `highlighted` column marking this exponent's row.
    pub fn highlight(mut self, exponent: u64) -> Self {
        self.highlight = Some(exponent);
        self
    }

    pub fn with_header(mut self, include_header: bool) -> Self {
        self.include_header = include_header;
        self
    }

    pub fn include_exponent(mut self, include_exponent: bool) -> Self {
        self.include_exponent = include_exponent;
        self
    }

    fn header_row(&self) -> Vec<&'static str> {
        let mut row = Vec::with_capacity(5);
        if self.include_exponent {
            row.push("exponent");
        }
        row.extend(["scientific", "suffix", "full_name"]);
        if self.highlight.is_some() {
            row.push("highlighted");
        }
        row
    }

    fn record_row(&self, record: &MagnitudeRecord) -> Vec<String> {
        let mut row = Vec::with_capacity(5);
        if self.include_exponent {
            row.push(record.exponent.to_string());
        }
        row.push(record.scientific.clone());
        row.push(record.suffix.clone());
        row.push(record.full_name.clone());
        if let Some(exponent) = self.highlight {
            row.push((record.exponent == exponent).to_string());
        }
        row
    }
}

/// Trait for writing collections of [`MagnitudeRecord`]s as CSV.
///
/// Implemented for `[MagnitudeRecord]` and [`MagnitudeTable`].
pub trait RecordsToCsv {
    fn to_csv_string(&self, config: &ExportConfig) -> Result<String, MagnitudeError>;
    fn write_csv(
        &self,
        path: impl AsRef<Path>,
        config: &ExportConfig,
    ) -> Result<(), MagnitudeError>;
}

impl RecordsToCsv for [MagnitudeRecord] {
    fn to_csv_string(&self, config: &ExportConfig) -> Result<String, MagnitudeError> {
        let mut buf = Vec::new();
        write_records(self, &mut buf, config)?;
        String::from_utf8(buf).map_err(|e| MagnitudeError::CsvError(e.to_string()))
    }

    fn write_csv(
        &self,
        path: impl AsRef<Path>,
        config: &ExportConfig,
    ) -> Result<(), MagnitudeError> {
        let file = File::create(path).map_err(|e| MagnitudeError::IoError(e.to_string()))?;
        write_records(self, file, config)
    }
}

impl RecordsToCsv for MagnitudeTable {
    fn to_csv_string(&self, config: &ExportConfig) -> Result<String, MagnitudeError> {
        self.records().to_csv_string(&table_config(self, config))
    }

    fn write_csv(
        &self,
        path: impl AsRef<Path>,
        config: &ExportConfig,
    ) -> Result<(), MagnitudeError> {
        self.records().write_csv(path, &table_config(self, config))
    }
}

// A table's own highlight applies unless the config names one.
fn table_config(table: &MagnitudeTable, config: &ExportConfig) -> ExportConfig {
    ExportConfig {
        highlight: config.highlight.or(table.highlight()),
        ..config.clone()
    }
}

/// Writes records as CSV to any writer.
pub fn write_records<W: Write>(
    records: &[MagnitudeRecord],
    writer: W,
    config: &ExportConfig,
) -> Result<(), MagnitudeError> {
    let mut writer = csv::Writer::from_writer(writer);

    if config.include_header {
        writer
            .write_record(config.header_row())
            .map_err(|e| MagnitudeError::CsvError(e.to_string()))?;
    }

    for record in records {
        writer
            .write_record(config.record_row(record))
            .map_err(|e| MagnitudeError::CsvError(e.to_string()))?;
    }

    writer
        .flush()
        .map_err(|e| MagnitudeError::CsvError(e.to_string()))?;

    debug!(rows = records.len(), "wrote magnitude records as CSV");
    Ok(())
}
