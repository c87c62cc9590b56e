//! Narrow capability interfaces over the host OS.
//!
//! Each trait covers exactly one query the collectors need, so
//! platform-specific implementations can be substituted or mocked in tests
//! without touching pipeline logic. The [`Probes`] bundle wires the
//! host-backed implementations by default.

mod host;

pub use host::{
    HostConnectionEnumerator,
    HostPartitionEnumerator,
    HostProcessEnumerator,
    HostScreenCapturer,
    HostSystemProfiler,
};

use std::path::Path;

use anyhow::Result;

use crate::models::{ConnectionRecord, MemoryRecord, ProcessRecord, SystemInfo};

/// Resolve the host's identity record.
pub trait SystemProfiler {
    fn identity(&self) -> Result<SystemInfo>;
}

/// Enumerate running processes and their resident memory.
pub trait ProcessEnumerator {
    fn processes(&self) -> Result<Vec<ProcessRecord>>;
    fn memory_usage(&self) -> Result<Vec<MemoryRecord>>;
}

/// Enumerate open network connections.
pub trait ConnectionEnumerator {
    fn connections(&self) -> Result<Vec<ConnectionRecord>>;
}

/// Enumerate mounted partitions as human-readable identifiers.
pub trait PartitionEnumerator {
    fn partitions(&self) -> Result<Vec<String>>;
}

/// Capture the screen to an image file at the given path.
pub trait ScreenCapturer {
    fn capture_to(&self, path: &Path) -> Result<()>;
}

/// The full set of capability providers used by one collection run.
pub struct Probes {
    pub system: Box<dyn SystemProfiler>,
    pub processes: Box<dyn ProcessEnumerator>,
    pub connections: Box<dyn ConnectionEnumerator>,
    pub partitions: Box<dyn PartitionEnumerator>,
    pub screen: Box<dyn ScreenCapturer>,
}

impl Probes {
    /// Host-backed probes for a real collection run.
    pub fn host() -> Self {
        Probes {
            system: Box::new(HostSystemProfiler),
            processes: Box::new(HostProcessEnumerator),
            connections: Box::new(HostConnectionEnumerator),
            partitions: Box::new(HostPartitionEnumerator),
            screen: Box::new(HostScreenCapturer),
        }
    }
}

impl Default for Probes {
    fn default() -> Self {
        Self::host()
    }
}
