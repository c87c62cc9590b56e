use std::env;
use std::path::Path;

use anyhow::{anyhow, Context, Result};
use chrono::{Local, TimeZone};
use netstat2::{AddressFamilyFlags, ProtocolFlags, ProtocolSocketInfo};
use screenshots::Screen;
use sysinfo::{CpuExt, DiskExt, PidExt, ProcessExt, System, SystemExt, UserExt};

use crate::models::{ConnectionRecord, MemoryRecord, ProcessRecord, SystemInfo};
use crate::probes::{
    ConnectionEnumerator, PartitionEnumerator, ProcessEnumerator, ScreenCapturer, SystemProfiler,
};

/// Host identity via `sysinfo`, with hostname and IP resolved separately.
pub struct HostSystemProfiler;

impl SystemProfiler for HostSystemProfiler {
    fn identity(&self) -> Result<SystemInfo> {
        let mut system = System::new();
        system.refresh_cpu();

        // Hostname and IP resolution fail field-level: the record is still
        // produced with the affected field empty.
        let hostname = hostname::get()
            .map(|h| h.to_string_lossy().to_string())
            .unwrap_or_default();
        let ip_address = local_ip_address::local_ip()
            .map(|ip| ip.to_string())
            .unwrap_or_default();

        Ok(SystemInfo {
            hostname,
            platform: system.name().unwrap_or_default(),
            platform_release: system.kernel_version().unwrap_or_default(),
            platform_version: system.os_version().unwrap_or_default(),
            architecture: env::consts::ARCH.to_string(),
            processor: system
                .cpus()
                .first()
                .map(|cpu| cpu.brand().to_string())
                .unwrap_or_default(),
            ip_address,
            boot_time: format_epoch_seconds(system.boot_time()),
        })
    }
}

fn format_epoch_seconds(secs: u64) -> String {
    Local
        .timestamp_opt(secs as i64, 0)
        .single()
        .map(|t| t.format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_default()
}

/// Process enumeration via `sysinfo`. Processes that vanish between refresh
/// and read simply do not appear in the refreshed table.
pub struct HostProcessEnumerator;

impl ProcessEnumerator for HostProcessEnumerator {
    fn processes(&self) -> Result<Vec<ProcessRecord>> {
        let mut system = System::new();
        system.refresh_processes();
        system.refresh_users_list();

        let users = system.users();
        let mut records = Vec::with_capacity(system.processes().len());
        for (pid, process) in system.processes() {
            let username = process
                .user_id()
                .and_then(|uid| users.iter().find(|u| u.id() == uid))
                .map(|u| u.name().to_string())
                .unwrap_or_default();

            records.push(ProcessRecord {
                pid: pid.as_u32(),
                name: process.name().to_string(),
                username,
            });
        }
        Ok(records)
    }

    fn memory_usage(&self) -> Result<Vec<MemoryRecord>> {
        let mut system = System::new();
        system.refresh_processes();

        let mut records = Vec::with_capacity(system.processes().len());
        for (pid, process) in system.processes() {
            let memory_mb = process.memory() as f64 / (1024.0 * 1024.0);
            records.push(MemoryRecord {
                pid: pid.as_u32(),
                name: process.name().to_string(),
                memory_mb: (memory_mb * 100.0).round() / 100.0,
            });
        }
        Ok(records)
    }
}

/// Socket enumeration via `netstat2`. Only TCP sockets carry a state, so
/// UDP never survives the non-empty-status filter downstream.
pub struct HostConnectionEnumerator;

impl ConnectionEnumerator for HostConnectionEnumerator {
    fn connections(&self) -> Result<Vec<ConnectionRecord>> {
        let families = AddressFamilyFlags::IPV4 | AddressFamilyFlags::IPV6;
        let sockets = netstat2::get_sockets_info(families, ProtocolFlags::TCP)
            .context("Failed to enumerate sockets")?;

        let mut records = Vec::with_capacity(sockets.len());
        for socket in sockets {
            if let ProtocolSocketInfo::Tcp(tcp) = socket.protocol_socket_info {
                let remote_address = if tcp.remote_addr.is_unspecified() && tcp.remote_port == 0 {
                    String::new()
                } else {
                    format!("{}:{}", tcp.remote_addr, tcp.remote_port)
                };

                records.push(ConnectionRecord {
                    local_address: format!("{}:{}", tcp.local_addr, tcp.local_port),
                    remote_address,
                    status: tcp.state.to_string(),
                    pid: socket.associated_pids.first().copied(),
                });
            }
        }
        Ok(records)
    }
}

/// Partition listing via `sysinfo`, rendered as `name (mount point)`.
pub struct HostPartitionEnumerator;

impl PartitionEnumerator for HostPartitionEnumerator {
    fn partitions(&self) -> Result<Vec<String>> {
        let mut system = System::new();
        system.refresh_disks_list();

        Ok(system
            .disks()
            .iter()
            .map(|disk| {
                format!(
                    "{} ({})",
                    disk.name().to_string_lossy(),
                    disk.mount_point().display()
                )
            })
            .collect())
    }
}

/// Primary-display capture via the `screenshots` crate.
pub struct HostScreenCapturer;

impl ScreenCapturer for HostScreenCapturer {
    fn capture_to(&self, path: &Path) -> Result<()> {
        let screens = Screen::all().map_err(|e| anyhow!("Failed to enumerate displays: {e}"))?;
        let screen = screens
            .into_iter()
            .next()
            .ok_or_else(|| anyhow!("No display available"))?;
        let image = screen
            .capture()
            .map_err(|e| anyhow!("Failed to capture display: {e}"))?;
        image
            .save(path)
            .with_context(|| format!("Failed to write screenshot to {}", path.display()))?;
        Ok(())
    }
}
