use std::collections::BTreeMap;
use std::path::Path;

use crate::collectors::Collected;
use crate::models::FileDigests;
use crate::utils::hash::digest_file;

/// Hash the configured target files.
///
/// Targets that cannot be opened are excluded from the map entirely; a
/// target that opens but fails mid-read keeps its entry with the all-empty
/// digest triple.
pub fn collect_file_hashes(targets: &[String]) -> Collected<BTreeMap<String, FileDigests>> {
    if targets.is_empty() {
        return Collected::degraded(
            BTreeMap::new(),
            "no hash targets configured for this platform",
        );
    }

    let mut hashes = BTreeMap::new();
    for target in targets {
        if let Some(digests) = digest_file(Path::new(target)) {
            hashes.insert(target.clone(), digests);
        }
    }
    Collected::Complete(hashes)
}
