//! adoptmetrics core data models.
//!
//! This crate defines the observations, baselines and ledger that the
//! analytics layer reads from when it builds an adoption report.

#![warn(missing_docs)]

// Identities
mod id;

// Observations
mod metric;
mod ledger;
mod snapshot;

pub mod names;

// Re-exports
pub use id::MetricId;
pub use metric::{MetricRecord, MetricCategory, MetricError, DEFAULT_GROUP};
pub use ledger::{Ledger, BaselineStore};
pub use snapshot::{ProductivityMetrics, QualityMetrics, AdoptionMetrics};

/// Timestamp type
pub type Time = chrono::DateTime<chrono::Utc>;
