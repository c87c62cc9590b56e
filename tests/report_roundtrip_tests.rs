//! Round-trip and fidelity properties of the structured report.

use std::fs;
use std::path::Path;

use anyhow::{anyhow, Result};
use serde_json::Value;
use tempfile::TempDir;

use forensicx::config::ReportConfig;
use forensicx::models::{ConnectionRecord, MemoryRecord, ProcessRecord, Snapshot, SystemInfo};
use forensicx::pipeline;
use forensicx::probes::{
    ConnectionEnumerator, PartitionEnumerator, Probes, ProcessEnumerator, ScreenCapturer,
    SystemProfiler,
};

struct FixedSystem;
impl SystemProfiler for FixedSystem {
    fn identity(&self) -> Result<SystemInfo> {
        Ok(SystemInfo {
            hostname: "workstation-01".to_string(),
            platform: "Linux".to_string(),
            platform_release: "6.1.0".to_string(),
            platform_version: "22.04".to_string(),
            architecture: "x86_64".to_string(),
            processor: "Test CPU @ 3.0GHz".to_string(),
            ip_address: "10.0.0.2".to_string(),
            boot_time: "2024-01-01 08:00:00".to_string(),
        })
    }
}

struct ManyProcesses(usize);
impl ProcessEnumerator for ManyProcesses {
    fn processes(&self) -> Result<Vec<ProcessRecord>> {
        Ok((0..self.0)
            .map(|i| ProcessRecord {
                pid: i as u32 + 1,
                name: format!("worker-{i}"),
                username: "svc".to_string(),
            })
            .collect())
    }

    fn memory_usage(&self) -> Result<Vec<MemoryRecord>> {
        Ok((0..self.0)
            .map(|i| MemoryRecord {
                pid: i as u32 + 1,
                name: format!("worker-{i}"),
                memory_mb: 10.25 + i as f64,
            })
            .collect())
    }
}

struct OneListener;
impl ConnectionEnumerator for OneListener {
    fn connections(&self) -> Result<Vec<ConnectionRecord>> {
        Ok(vec![ConnectionRecord {
            local_address: "0.0.0.0:22".to_string(),
            remote_address: String::new(),
            status: "LISTEN".to_string(),
            pid: Some(9),
        }])
    }
}

struct UsbPartitions;
impl PartitionEnumerator for UsbPartitions {
    fn partitions(&self) -> Result<Vec<String>> {
        Ok(vec![
            "/dev/sda1 (/)".to_string(),
            "USB Drive (/media/usb0)".to_string(),
        ])
    }
}

struct UnavailableScreen;
impl ScreenCapturer for UnavailableScreen {
    fn capture_to(&self, _path: &Path) -> Result<()> {
        Err(anyhow!("no display"))
    }
}

fn populated_probes(process_count: usize) -> Probes {
    Probes {
        system: Box::new(FixedSystem),
        processes: Box::new(ManyProcesses(process_count)),
        connections: Box::new(OneListener),
        partitions: Box::new(UsbPartitions),
        screen: Box::new(UnavailableScreen),
    }
}

fn test_config(workspace: &TempDir) -> ReportConfig {
    ReportConfig {
        report_dir: workspace.path().join("ForensicX_Report"),
        bundle_path: workspace.path().join("ForensicX_Complete_Report.zip"),
        hash_targets: Vec::new(),
        browser_history_paths: Vec::new(),
        skip_screenshot: false,
    }
}

#[test]
fn structured_report_round_trips_byte_identically() -> Result<()> {
    let workspace = TempDir::new()?;
    let config = test_config(&workspace);

    let artifacts = pipeline::run(&config, populated_probes(3))?;

    let first = fs::read_to_string(&artifacts.json_path)?;
    let decoded: Snapshot = serde_json::from_str(&first)?;
    let second = serde_json::to_string_pretty(&decoded)?;
    assert_eq!(first, second);
    Ok(())
}

#[test]
fn decoded_report_reproduces_collected_values() -> Result<()> {
    let workspace = TempDir::new()?;
    let config = test_config(&workspace);

    let artifacts = pipeline::run(&config, populated_probes(2))?;

    let snapshot: Snapshot = serde_json::from_str(&fs::read_to_string(&artifacts.json_path)?)?;
    assert_eq!(snapshot.system_info.hostname, "workstation-01");
    assert_eq!(snapshot.system_info.ip_address, "10.0.0.2");
    assert_eq!(snapshot.running_processes.len(), 2);
    assert_eq!(snapshot.open_ports.len(), 1);
    assert_eq!(snapshot.open_ports[0].status, "LISTEN");
    assert_eq!(snapshot.open_ports[0].remote_address, "");
    assert_eq!(
        snapshot.usb_device_history,
        vec!["USB Drive (/media/usb0)".to_string()]
    );
    assert_eq!(snapshot.ram_snapshot[0].memory_mb, 10.25);
    Ok(())
}

#[test]
fn structured_report_is_never_truncated() -> Result<()> {
    // The document preview stops at 20 entries; the structured report must
    // still carry all 25.
    let workspace = TempDir::new()?;
    let config = test_config(&workspace);

    let artifacts = pipeline::run(&config, populated_probes(25))?;

    let report: Value = serde_json::from_str(&fs::read_to_string(&artifacts.json_path)?)?;
    assert_eq!(report["running_processes"].as_array().unwrap().len(), 25);
    assert_eq!(report["ram_snapshot"].as_array().unwrap().len(), 25);

    let pdf = fs::read(&artifacts.pdf_path)?;
    assert!(pdf.starts_with(b"%PDF"));
    Ok(())
}
