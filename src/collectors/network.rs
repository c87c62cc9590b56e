use crate::collectors::Collected;
use crate::models::ConnectionRecord;
use crate::probes::ConnectionEnumerator;

/// Collect open connections, keeping only entries with a non-empty status.
pub fn collect_open_ports(probe: &dyn ConnectionEnumerator) -> Collected<Vec<ConnectionRecord>> {
    match probe.connections() {
        Ok(records) => Collected::Complete(
            records
                .into_iter()
                .filter(|conn| !conn.status.is_empty())
                .collect(),
        ),
        Err(e) => Collected::degraded(Vec::new(), format!("connection enumeration failed: {e}")),
    }
}
