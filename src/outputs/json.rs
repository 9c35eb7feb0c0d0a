//! JSON output for the corpus.
//!
//! Writes the records as a single pretty-printed JSON array. Keys match the
//! CSV columns; absent values are `null`.

use crate::models::Record;
use std::error::Error;
use tokio::fs;
use tracing::{error, info, instrument};

/// Serialize `records` as a JSON array and overwrite `path` with it.
#[instrument(level = "info", skip_all, fields(%path, count = records.len()))]
pub async fn write_records(records: &[Record], path: &str) -> Result<(), Box<dyn Error>> {
    let json = serde_json::to_string_pretty(records)?;

    info!("Writing JSON");
    if let Err(e) = fs::write(path, json).await {
        error!(error = %e, "Failed to write JSON");
        return Err(e.into());
    }
    info!("Wrote JSON corpus");

    Ok(())
}
