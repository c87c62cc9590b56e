use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::debug;
use serde::{Serialize, Deserialize};

use crate::collectors::platforms;
use crate::config::env_vars::expand_path;

/// Structured-report file name inside the report directory.
pub const REPORT_JSON_NAME: &str = "forensics_report.json";
/// Document file name inside the report directory.
pub const REPORT_PDF_NAME: &str = "forensics_report.pdf";
/// Screenshot file name inside the report directory.
pub const SCREENSHOT_NAME: &str = "screenshot.png";

/// Output layout and collection targets for one run.
///
/// Defaults reproduce the documented layout relative to the working
/// directory; every path can be overridden from a YAML file or the CLI.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    #[serde(default = "default_report_dir")]
    pub report_dir: PathBuf,
    #[serde(default = "default_bundle_path")]
    pub bundle_path: PathBuf,
    #[serde(default = "platforms::default_hash_targets")]
    pub hash_targets: Vec<String>,
    #[serde(default = "platforms::default_browser_history_paths")]
    pub browser_history_paths: Vec<String>,
    #[serde(default)]
    pub skip_screenshot: bool,
}

fn default_report_dir() -> PathBuf {
    PathBuf::from("ForensicX_Report")
}

fn default_bundle_path() -> PathBuf {
    PathBuf::from("ForensicX_Complete_Report.zip")
}

impl Default for ReportConfig {
    fn default() -> Self {
        ReportConfig {
            report_dir: default_report_dir(),
            bundle_path: default_bundle_path(),
            hash_targets: platforms::default_hash_targets(),
            browser_history_paths: platforms::default_browser_history_paths(),
            skip_screenshot: false,
        }
    }
}

impl ReportConfig {
    /// Load configuration from a YAML file.
    pub fn from_yaml_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: ReportConfig =
            serde_yaml::from_str(&content).context("Failed to parse YAML config")?;

        debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Load the given config file, or fall back to the defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => Self::from_yaml_file(p),
            None => Ok(Self::default()),
        }
    }

    /// Expand environment-variable references in the configured targets.
    pub fn expand_paths(&mut self) {
        for target in &mut self.hash_targets {
            *target = expand_path(target);
        }
        for path in &mut self.browser_history_paths {
            *path = expand_path(path);
        }
    }

    pub fn json_path(&self) -> PathBuf {
        self.report_dir.join(REPORT_JSON_NAME)
    }

    pub fn pdf_path(&self) -> PathBuf {
        self.report_dir.join(REPORT_PDF_NAME)
    }

    pub fn screenshot_path(&self) -> PathBuf {
        self.report_dir.join(SCREENSHOT_NAME)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_layout_matches_documented_paths() {
        let config = ReportConfig::default();
        assert_eq!(config.report_dir, PathBuf::from("ForensicX_Report"));
        assert_eq!(
            config.bundle_path,
            PathBuf::from("ForensicX_Complete_Report.zip")
        );
        assert_eq!(
            config.json_path(),
            PathBuf::from("ForensicX_Report/forensics_report.json")
        );
        assert_eq!(
            config.pdf_path(),
            PathBuf::from("ForensicX_Report/forensics_report.pdf")
        );
        assert_eq!(
            config.screenshot_path(),
            PathBuf::from("ForensicX_Report/screenshot.png")
        );
    }

    #[test]
    fn partial_yaml_falls_back_to_defaults() {
        let config: ReportConfig = serde_yaml::from_str("skip_screenshot: true\n").unwrap();
        assert!(config.skip_screenshot);
        assert_eq!(config.report_dir, PathBuf::from("ForensicX_Report"));
    }

    #[test]
    fn yaml_overrides_take_effect() {
        let yaml = "report_dir: /tmp/out\nhash_targets:\n  - /etc/hosts\n";
        let config: ReportConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.report_dir, PathBuf::from("/tmp/out"));
        assert_eq!(config.hash_targets, vec!["/etc/hosts".to_string()]);
    }

    #[test]
    fn expand_paths_rewrites_configured_targets() {
        std::env::set_var("FX_CFG_ROOT", "/sysroot");
        let mut config = ReportConfig {
            hash_targets: vec!["$FX_CFG_ROOT/etc/hosts".to_string()],
            browser_history_paths: vec!["${FX_CFG_ROOT}/History".to_string()],
            ..ReportConfig::default()
        };
        config.expand_paths();
        assert_eq!(config.hash_targets, vec!["/sysroot/etc/hosts".to_string()]);
        assert_eq!(
            config.browser_history_paths,
            vec!["/sysroot/History".to_string()]
        );
        std::env::remove_var("FX_CFG_ROOT");
    }
}
