use std::path::Path;

use crate::collectors::Collected;

/// Check the configured browser-history locations and describe each result.
///
/// Detection is presence-only; history files are never opened or parsed.
pub fn collect_browser_history(paths: &[String]) -> Collected<Vec<String>> {
    if paths.is_empty() {
        return Collected::degraded(
            vec!["Error reading browser history.".to_string()],
            "no browser history paths resolved for this platform",
        );
    }

    let findings = paths
        .iter()
        .map(|candidate| {
            let path = Path::new(candidate);
            if path.exists() {
                format!("Found Chrome History file at: {}", path.display())
            } else {
                "Chrome History not found or unsupported browser.".to_string()
            }
        })
        .collect();
    Collected::Complete(findings)
}
