//! # forensicx
//!
//! A one-shot host forensic snapshot tool: eight isolated collectors feed a
//! single immutable snapshot, which is serialized to a structured JSON
//! report, a paginated PDF document, and one compressed bundle.
//!
//! ## Overview
//!
//! Collection is strictly best-effort: any collector may degrade to its
//! documented empty or sentinel value without affecting the others or the
//! pipeline. Writer failures, by contrast, are fatal and abort the run with
//! the failing stage named in the error.
//!
//! ## Usage
//!
//! ```no_run
//! use forensicx::config::ReportConfig;
//! use forensicx::pipeline;
//! use forensicx::probes::Probes;
//!
//! # fn main() -> anyhow::Result<()> {
//! let config = ReportConfig::default();
//! let artifacts = pipeline::run(&config, Probes::host())?;
//! println!("Bundle: {}", artifacts.bundle_path.display());
//! # Ok(())
//! # }
//! ```
//!
//! ## Module Organization
//!
//! - [`cli`]: Command-line interface definitions and argument parsing
//! - [`models`]: The snapshot aggregate and its record types
//! - [`collectors`]: The eight collectors and the snapshot aggregator
//! - [`probes`]: Narrow capability traits over the host OS, plus the
//!   host-backed implementations
//! - [`config`]: Output layout and collection-target configuration
//! - [`report`]: The JSON, PDF, and bundle writers
//! - [`pipeline`]: The linear pipeline driver
//! - [`utils`]: Hashing helpers

/// Command-line interface definitions and argument parsing
pub mod cli;

/// The snapshot aggregate and its record types
pub mod models;

/// The eight collectors and the snapshot aggregator
pub mod collectors;

/// Narrow capability traits over the host OS
pub mod probes;

/// Output layout and collection-target configuration
pub mod config;

/// The JSON, PDF, and bundle report writers
pub mod report;

/// The linear pipeline driver
pub mod pipeline;

/// Hashing helpers
pub mod utils;
