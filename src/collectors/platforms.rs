//! Per-OS default tables for hash targets and browser artifacts.
//!
//! Platforms without a matching convention return empty tables, and the
//! collectors that consume them degrade instead of failing.

use std::env;

/// Platform-significant files hashed by default: the hosts file and one
/// core OS executable.
#[cfg(target_os = "windows")]
pub fn default_hash_targets() -> Vec<String> {
    let system_root = env::var("SystemRoot").unwrap_or_else(|_| "C:/Windows".to_string());
    vec![
        format!("{system_root}/System32/drivers/etc/hosts"),
        format!("{system_root}/System32/cmd.exe"),
    ]
}

#[cfg(any(target_os = "linux", target_os = "macos"))]
pub fn default_hash_targets() -> Vec<String> {
    vec!["/etc/hosts".to_string(), "/bin/sh".to_string()]
}

#[cfg(not(any(target_os = "windows", target_os = "linux", target_os = "macos")))]
pub fn default_hash_targets() -> Vec<String> {
    Vec::new()
}

/// Known browser-history locations, one per supported OS convention.
#[cfg(target_os = "windows")]
pub fn default_browser_history_paths() -> Vec<String> {
    match env::var("USERPROFILE") {
        Ok(profile) => vec![format!(
            "{profile}/AppData/Local/Google/Chrome/User Data/Default/History"
        )],
        Err(_) => Vec::new(),
    }
}

#[cfg(target_os = "linux")]
pub fn default_browser_history_paths() -> Vec<String> {
    match env::var("HOME") {
        Ok(home) => vec![format!("{home}/.config/google-chrome/Default/History")],
        Err(_) => Vec::new(),
    }
}

#[cfg(target_os = "macos")]
pub fn default_browser_history_paths() -> Vec<String> {
    match env::var("HOME") {
        Ok(home) => vec![format!(
            "{home}/Library/Application Support/Google/Chrome/Default/History"
        )],
        Err(_) => Vec::new(),
    }
}

#[cfg(not(any(target_os = "windows", target_os = "linux", target_os = "macos")))]
pub fn default_browser_history_paths() -> Vec<String> {
    Vec::new()
}
