use std::collections::BTreeMap;

use serde::{Serialize, Deserialize};
use serde_json::Value;

/// The immutable aggregate of everything collected in one run.
///
/// Built once by the aggregator, read by the three report writers, then
/// discarded. Field names match the on-disk JSON key set exactly, so the
/// structured report is a lossless serialization of this struct.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub collected_at: String,
    pub system_info: SystemInfo,
    pub running_processes: Vec<ProcessRecord>,
    pub open_ports: Vec<ConnectionRecord>,
    pub file_hashes: BTreeMap<String, FileDigests>,
    pub usb_device_history: Vec<String>,
    pub browser_history: Vec<String>,
    pub ram_snapshot: Vec<MemoryRecord>,
    pub screenshot_file: String,
}

impl Snapshot {
    /// Top-level fields as (key, JSON value) pairs, in report order.
    ///
    /// The document writer renders one section per entry; keeping the order
    /// here means both report formats agree on it.
    pub fn sections(&self) -> Vec<(&'static str, Value)> {
        vec![
            ("collected_at", serde_json::json!(self.collected_at)),
            ("system_info", serde_json::json!(self.system_info)),
            ("running_processes", serde_json::json!(self.running_processes)),
            ("open_ports", serde_json::json!(self.open_ports)),
            ("file_hashes", serde_json::json!(self.file_hashes)),
            ("usb_device_history", serde_json::json!(self.usb_device_history)),
            ("browser_history", serde_json::json!(self.browser_history)),
            ("ram_snapshot", serde_json::json!(self.ram_snapshot)),
            ("screenshot_file", serde_json::json!(self.screenshot_file)),
        ]
    }
}

/// Host identity record.
///
/// Serialized member names keep the dashed spelling used by the report
/// consumers, hence the renames.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SystemInfo {
    pub hostname: String,
    pub platform: String,
    #[serde(rename = "platform-release")]
    pub platform_release: String,
    #[serde(rename = "platform-version")]
    pub platform_version: String,
    pub architecture: String,
    pub processor: String,
    #[serde(rename = "ip-address")]
    pub ip_address: String,
    #[serde(rename = "boot-time")]
    pub boot_time: String,
}

/// One running process, in enumeration order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessRecord {
    pub pid: u32,
    pub name: String,
    pub username: String,
}

/// One open connection with a non-empty status.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConnectionRecord {
    pub local_address: String,
    /// Empty when the socket has no remote endpoint (e.g. LISTEN).
    pub remote_address: String,
    pub status: String,
    pub pid: Option<u32>,
}

/// Hex digest triple for one hashed file. All-empty when the file opened
/// but could not be read to the end.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FileDigests {
    #[serde(rename = "MD5")]
    pub md5: String,
    #[serde(rename = "SHA1")]
    pub sha1: String,
    #[serde(rename = "SHA256")]
    pub sha256: String,
}

/// Resident memory of one process at capture time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemoryRecord {
    pub pid: u32,
    pub name: String,
    #[serde(rename = "memory_MB")]
    pub memory_mb: f64,
}

/// Sentinel stored in `screenshot_file` when capture did not produce a file.
pub const SCREENSHOT_FAILED: &str = "Failed";
