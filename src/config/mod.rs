// Re-export all items from the submodules
mod env_vars;
mod report_config;

pub use env_vars::expand_path;
pub use report_config::{
    ReportConfig,
    REPORT_JSON_NAME,
    REPORT_PDF_NAME,
    SCREENSHOT_NAME,
};
