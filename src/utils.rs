//! File system helpers.

use std::error::Error;
use std::fs as stdfs;
use std::path::Path;
use tokio::fs;
use tracing::{debug, instrument};

/// Ensure the directory that will hold `path` exists and is writable.
///
/// Creates the directory if needed, then creates and removes a scratch file
/// next to `path`. Used before a crawl so an unwritable destination fails
/// fast instead of after every page has been fetched.
///
/// # Errors
///
/// Returns an error if the directory cannot be created or written to.
#[instrument(level = "info", skip_all, fields(%path))]
pub async fn ensure_writable_parent(path: &str) -> Result<(), Box<dyn Error>> {
    let parent = match Path::new(path).parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => Path::new(".").to_path_buf(),
    };
    fs::create_dir_all(&parent).await?;

    // Try a small sync write using std fs (simpler error surface)
    let scratch_path = parent.join(".corpus_write_check");
    stdfs::File::create(&scratch_path)?;
    let _ = stdfs::remove_file(&scratch_path);
    debug!(dir = %parent.display(), "Output directory is writable");
    Ok(())
}
