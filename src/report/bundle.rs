use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::{debug, info};
use zip::{write::FileOptions, CompressionMethod, ZipWriter};

/// Package every file in the report directory into one deflate ZIP.
///
/// Entry names are the files' base names; no directory structure is kept
/// inside the archive. Entries are added in name order so identical report
/// directories produce identical archives.
pub fn write_bundle(report_dir: &Path, bundle_path: &Path) -> Result<()> {
    let file = File::create(bundle_path)
        .with_context(|| format!("Failed to create bundle at {}", bundle_path.display()))?;
    let mut zip = ZipWriter::new(file);
    let options = FileOptions::default()
        .compression_method(CompressionMethod::Deflated)
        .unix_permissions(0o644);

    let mut paths: Vec<PathBuf> = fs::read_dir(report_dir)
        .with_context(|| format!("Failed to read report directory {}", report_dir.display()))?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.is_file())
        .collect();
    paths.sort();

    for path in &paths {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();

        zip.start_file(name.clone(), options)
            .with_context(|| format!("Failed to start bundle entry {name}"))?;
        let mut source = File::open(path)
            .with_context(|| format!("Failed to open {} for bundling", path.display()))?;
        io::copy(&mut source, &mut zip)
            .with_context(|| format!("Failed to compress {}", path.display()))?;
        debug!("Bundled {name}");
    }

    zip.finish().context("Failed to finalize bundle")?;
    info!(
        "Bundled {} files into {}",
        paths.len(),
        bundle_path.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;
    use tempfile::TempDir;
    use zip::read::ZipArchive;

    fn archive_names(bundle: &Path) -> Vec<String> {
        let file = File::open(bundle).unwrap();
        let archive = ZipArchive::new(file).unwrap();
        archive.file_names().map(|n| n.to_string()).collect()
    }

    #[test]
    fn bundles_every_report_file_flat() {
        let report_dir = TempDir::new().unwrap();
        let out_dir = TempDir::new().unwrap();
        fs::write(report_dir.path().join("forensics_report.json"), b"{}").unwrap();
        fs::write(report_dir.path().join("forensics_report.pdf"), b"%PDF-").unwrap();
        fs::write(report_dir.path().join("screenshot.png"), b"\x89PNG").unwrap();

        let bundle = out_dir.path().join("ForensicX_Complete_Report.zip");
        write_bundle(report_dir.path(), &bundle).unwrap();

        let mut names = archive_names(&bundle);
        names.sort();
        assert_eq!(
            names,
            vec![
                "forensics_report.json",
                "forensics_report.pdf",
                "screenshot.png"
            ]
        );
    }

    #[test]
    fn missing_screenshot_just_means_fewer_entries() {
        let report_dir = TempDir::new().unwrap();
        let out_dir = TempDir::new().unwrap();
        fs::write(report_dir.path().join("forensics_report.json"), b"{}").unwrap();
        fs::write(report_dir.path().join("forensics_report.pdf"), b"%PDF-").unwrap();

        let bundle = out_dir.path().join("bundle.zip");
        write_bundle(report_dir.path(), &bundle).unwrap();

        assert_eq!(archive_names(&bundle).len(), 2);
    }

    #[test]
    fn bundled_content_round_trips() {
        let report_dir = TempDir::new().unwrap();
        let out_dir = TempDir::new().unwrap();
        fs::write(
            report_dir.path().join("forensics_report.json"),
            b"{\"collected_at\": \"now\"}",
        )
        .unwrap();

        let bundle = out_dir.path().join("bundle.zip");
        write_bundle(report_dir.path(), &bundle).unwrap();

        let file = File::open(&bundle).unwrap();
        let mut archive = ZipArchive::new(file).unwrap();
        let mut entry = archive.by_name("forensics_report.json").unwrap();
        let mut content = String::new();
        entry.read_to_string(&mut content).unwrap();
        assert_eq!(content, "{\"collected_at\": \"now\"}");
    }

    #[test]
    fn missing_report_directory_is_a_fatal_error() {
        let out_dir = TempDir::new().unwrap();
        let bundle = out_dir.path().join("bundle.zip");

        let err = write_bundle(&out_dir.path().join("absent"), &bundle).unwrap_err();
        assert!(format!("{err:#}").contains("Failed to read report directory"));
    }
}
