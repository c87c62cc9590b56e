use chrono::Local;
use log::{info, warn};

use crate::collectors::{
    browser, hashes, media, memory, network, processes, screenshot, system, Collected,
};
use crate::config::ReportConfig;
use crate::models::Snapshot;
use crate::probes::Probes;

/// Runs every collector once and assembles the immutable [`Snapshot`].
///
/// The aggregator itself has no failure mode: each collector degrades to
/// its documented empty or sentinel value, and the snapshot always carries
/// all of its fields.
pub struct SnapshotCollector {
    config: ReportConfig,
    probes: Probes,
}

impl SnapshotCollector {
    /// Collector backed by the real host probes.
    pub fn new(config: ReportConfig) -> Self {
        Self::with_probes(config, Probes::host())
    }

    /// Collector with substituted probes, used by tests.
    pub fn with_probes(config: ReportConfig, probes: Probes) -> Self {
        SnapshotCollector { config, probes }
    }

    /// Invoke all eight collectors and assemble the snapshot.
    ///
    /// The capture timestamp is recorded once, before any collector runs.
    pub fn collect_all(&self) -> Snapshot {
        let collected_at = Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
        info!("Collecting forensic artifacts...");

        let system_info = note(
            "system_info",
            system::collect_system_info(self.probes.system.as_ref()),
        );
        let running_processes = note(
            "running_processes",
            processes::collect_running_processes(self.probes.processes.as_ref()),
        );
        let open_ports = note(
            "open_ports",
            network::collect_open_ports(self.probes.connections.as_ref()),
        );
        let file_hashes = note(
            "file_hashes",
            hashes::collect_file_hashes(&self.config.hash_targets),
        );
        let usb_device_history = note(
            "usb_device_history",
            media::collect_usb_history(self.probes.partitions.as_ref()),
        );
        let browser_history = note(
            "browser_history",
            browser::collect_browser_history(&self.config.browser_history_paths),
        );
        let ram_snapshot = note(
            "ram_snapshot",
            memory::collect_ram_snapshot(self.probes.processes.as_ref()),
        );
        let screenshot_file = note(
            "screenshot_file",
            screenshot::capture_screenshot(
                self.probes.screen.as_ref(),
                &self.config.screenshot_path(),
                self.config.skip_screenshot,
            ),
        );

        Snapshot {
            collected_at,
            system_info,
            running_processes,
            open_ports,
            file_hashes,
            usb_device_history,
            browser_history,
            ram_snapshot,
            screenshot_file,
        }
    }
}

/// Unwrap a collector outcome, logging the degradation reason if any.
fn note<T>(field: &str, outcome: Collected<T>) -> T {
    if let Some(reason) = outcome.reason() {
        warn!("{field} degraded: {reason}");
    }
    outcome.into_value()
}
