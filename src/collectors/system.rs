use crate::collectors::Collected;
use crate::models::SystemInfo;
use crate::probes::SystemProfiler;

/// Collect the host identity record.
///
/// Individual fields (IP address, hostname) degrade to empty strings inside
/// the probe; only a whole-probe failure degrades the record itself.
pub fn collect_system_info(probe: &dyn SystemProfiler) -> Collected<SystemInfo> {
    match probe.identity() {
        Ok(info) => Collected::Complete(info),
        Err(e) => Collected::degraded(
            SystemInfo::default(),
            format!("system identity unavailable: {e}"),
        ),
    }
}
