pub mod csv;
pub mod json;

pub use self::csv::{ExportConfig, RecordsToCsv, write_records};
pub use json::{RecordsToJson, records_from_json};
