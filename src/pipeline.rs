//! The linear pipeline driver.
//!
//! One invocation walks a fixed sequence: ensure the report directory,
//! aggregate the snapshot, write the structured report, write the document,
//! write the bundle. There are no retries and no branches; the first
//! writer/driver failure aborts the run.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use log::info;

use crate::collectors::SnapshotCollector;
use crate::config::ReportConfig;
use crate::probes::Probes;
use crate::report::{bundle, json, pdf};

/// Paths of the three artifacts produced by a successful run.
#[derive(Debug, Clone)]
pub struct RunArtifacts {
    pub json_path: PathBuf,
    pub pdf_path: PathBuf,
    pub bundle_path: PathBuf,
}

/// Run the full collection-and-report pipeline.
///
/// Collector failures never reach this level. Any error returned here is a
/// fatal writer or driver failure with the failing stage named in its
/// context chain; files already written stay in place.
pub fn run(config: &ReportConfig, probes: Probes) -> Result<RunArtifacts> {
    fs::create_dir_all(&config.report_dir).with_context(|| {
        format!(
            "Failed to create report directory {}",
            config.report_dir.display()
        )
    })?;

    let snapshot = SnapshotCollector::with_probes(config.clone(), probes).collect_all();

    let json_path = config.json_path();
    json::write_json_report(&snapshot, &json_path)?;

    let pdf_path = config.pdf_path();
    pdf::write_pdf_report(&snapshot, &pdf_path)?;

    bundle::write_bundle(&config.report_dir, &config.bundle_path)?;

    info!("Forensic snapshot pipeline completed");
    Ok(RunArtifacts {
        json_path,
        pdf_path,
        bundle_path: config.bundle_path.clone(),
    })
}
