use crate::collectors::Collected;
use crate::probes::PartitionEnumerator;

/// Collect partition identifiers that look like removable/USB media.
pub fn collect_usb_history(probe: &dyn PartitionEnumerator) -> Collected<Vec<String>> {
    match probe.partitions() {
        Ok(partitions) => Collected::Complete(
            partitions
                .into_iter()
                .filter(|id| is_removable_identifier(id))
                .collect(),
        ),
        Err(e) => Collected::degraded(Vec::new(), format!("partition enumeration failed: {e}")),
    }
}

/// Case-insensitive substring heuristic on the device identifier.
fn is_removable_identifier(identifier: &str) -> bool {
    let lower = identifier.to_lowercase();
    lower.contains("removable") || lower.contains("usb")
}
