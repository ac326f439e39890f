use crate::api::record::MagnitudeRecord;
use crate::api::table::MagnitudeTable;
use crate::error::MagnitudeError;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// Trait for serializing collections of [`MagnitudeRecord`]s as a JSON array.
pub trait RecordsToJson {
    fn to_json_string(&self) -> Result<String, MagnitudeError>;
    fn write_json(&self, path: impl AsRef<Path>) -> Result<(), MagnitudeError>;
}

impl RecordsToJson for [MagnitudeRecord] {
    fn to_json_string(&self) -> Result<String, MagnitudeError> {
        serde_json::to_string_pretty(self).map_err(|e| MagnitudeError::JsonError(e.to_string()))
    }

    fn write_json(&self, path: impl AsRef<Path>) -> Result<(), MagnitudeError> {
        let file = File::create(path).map_err(|e| MagnitudeError::IoError(e.to_string()))?;
        serde_json::to_writer_pretty(BufWriter::new(file), self)
            .map_err(|e| MagnitudeError::JsonError(e.to_string()))
    }
}

impl RecordsToJson for MagnitudeTable {
    fn to_json_string(&self) -> Result<String, MagnitudeError> {
        self.records().to_json_string()
    }

    fn write_json(&self, path: impl AsRef<Path>) -> Result<(), MagnitudeError> {
        self.records().write_json(path)
    }
}

/// Reads back records written by [`RecordsToJson`].
pub fn records_from_json(json: &str) -> Result<Vec<MagnitudeRecord>, MagnitudeError> {
    serde_json::from_str(json).map_err(|e| MagnitudeError::JsonError(e.to_string()))
}
