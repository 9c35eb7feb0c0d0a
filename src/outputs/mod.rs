//! Output sinks for the finalized record set.
//!
//! Both sinks overwrite the destination file. The parent directory must
//! already exist; `main` creates and checks it before crawling.
//!
//! - [`csv`]: one row per record, header `source,medium,title,url,date,verdict,label,country,keywords`
//! - [`json`]: a JSON array of record objects with the same keys

pub mod csv;
pub mod json;

use crate::cli::OutputFormat;
use crate::models::Record;
use std::error::Error;

/// Write `records` to `path` in the requested format.
pub async fn write_records(
    records: &[Record],
    path: &str,
    format: OutputFormat,
) -> Result<(), Box<dyn Error>> {
    match format {
        OutputFormat::Csv => csv::write_records(records, path).await,
        OutputFormat::Json => json::write_records(records, path).await,
    }
}
