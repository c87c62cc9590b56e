use crate::collectors::Collected;
use crate::models::MemoryRecord;
use crate::probes::ProcessEnumerator;

/// Collect per-process resident memory in megabytes, two decimal places.
pub fn collect_ram_snapshot(probe: &dyn ProcessEnumerator) -> Collected<Vec<MemoryRecord>> {
    match probe.memory_usage() {
        Ok(records) => Collected::Complete(records),
        Err(e) => Collected::degraded(Vec::new(), format!("memory enumeration failed: {e}")),
    }
}
