use std::path::Path;

use crate::collectors::Collected;
use crate::models::SCREENSHOT_FAILED;
use crate::probes::ScreenCapturer;

/// Capture the screen to `output_path`.
///
/// Any capture failure (headless host, missing display server, denied
/// capture permission) degrades to the `"Failed"` sentinel with no file
/// produced; the bundle writer simply packages one file fewer.
pub fn capture_screenshot(
    capturer: &dyn ScreenCapturer,
    output_path: &Path,
    skip: bool,
) -> Collected<String> {
    if skip {
        return Collected::degraded(
            SCREENSHOT_FAILED.to_string(),
            "screenshot capture skipped by operator",
        );
    }

    match capturer.capture_to(output_path) {
        Ok(()) => Collected::Complete(output_path.to_string_lossy().to_string()),
        Err(e) => Collected::degraded(
            SCREENSHOT_FAILED.to_string(),
            format!("screenshot capture failed: {e}"),
        ),
    }
}
