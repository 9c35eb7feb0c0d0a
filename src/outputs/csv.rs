//! CSV output for the corpus.
//!
//! Columns follow the field order of [`Record`]:
//!
//! ```text
//! source,medium,title,url,date,verdict,label,country,keywords
//! ```
//!
//! Absent values are written as empty cells. Dates are `YYYY-MM-DD`.

use crate::models::Record;
use std::error::Error;
use tokio::fs;
use tracing::{error, info, instrument};

/// Column names, in output order.
pub const HEADER: [&str; 9] = [
    "source", "medium", "title", "url", "date", "verdict", "label", "country", "keywords",
];

/// Render records as UTF-8 CSV text, header first.
pub fn to_csv(records: &[Record]) -> Result<String, Box<dyn Error>> {
    let mut writer = ::csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());
    writer.write_record(HEADER)?;
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;
    let bytes = writer.into_inner().map_err(|e| e.error().to_string())?;
    Ok(String::from_utf8(bytes)?)
}

/// Serialize `records` as CSV and overwrite `path` with it.
#[instrument(level = "info", skip_all, fields(%path, count = records.len()))]
pub async fn write_records(records: &[Record], path: &str) -> Result<(), Box<dyn Error>> {
    let body = to_csv(records)?;

    info!("Writing CSV");
    if let Err(e) = fs::write(path, body).await {
        error!(error = %e, "Failed to write CSV");
        return Err(e.into());
    }
    info!("Wrote CSV corpus");
    Ok(())
}
