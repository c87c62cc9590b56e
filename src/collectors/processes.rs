use crate::collectors::Collected;
use crate::models::ProcessRecord;
use crate::probes::ProcessEnumerator;

/// Collect the running-process list in enumeration order.
///
/// Processes that vanish mid-enumeration are skipped by the probe; a total
/// enumeration failure degrades to the empty list.
pub fn collect_running_processes(probe: &dyn ProcessEnumerator) -> Collected<Vec<ProcessRecord>> {
    match probe.processes() {
        Ok(records) => Collected::Complete(records),
        Err(e) => Collected::degraded(Vec::new(), format!("process enumeration failed: {e}")),
    }
}
