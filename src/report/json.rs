use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use log::debug;

use crate::models::Snapshot;

/// Serialize the snapshot losslessly to pretty-printed JSON.
///
/// Field order and map ordering are deterministic, so re-encoding a decoded
/// report reproduces the file byte for byte.
pub fn write_json_report(snapshot: &Snapshot, path: &Path) -> Result<()> {
    let json =
        serde_json::to_string_pretty(snapshot).context("Failed to serialize snapshot to JSON")?;

    fs::write(path, &json)
        .with_context(|| format!("Failed to write structured report to {}", path.display()))?;

    debug!("Structured report written to {}", path.display());
    Ok(())
}
