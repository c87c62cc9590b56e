//! The three report writers: structured JSON, paginated PDF, ZIP bundle.
//!
//! Unlike the collectors, writer failures are fatal to the run and carry
//! stage-identifying context for the invoker.

/// Flat deflate ZIP of the report directory
pub mod bundle;

/// Lossless structured serialization of the snapshot
pub mod json;

/// Paginated human-readable document rendering
pub mod pdf;
