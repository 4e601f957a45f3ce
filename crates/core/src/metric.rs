//! Metric model - single timestamped observations.

use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};
use crate::id::MetricId;
use crate::Time;

/// Group label used when an observation covers the whole population.
pub const DEFAULT_GROUP: &str = "all";

/// Errors raised while constructing a metric record.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MetricError {
    /// The metric name was empty or whitespace
    #[error("metric name must not be empty")]
    EmptyName,

    /// The observed value was NaN or infinite
    #[error("metric '{name}' has a non-finite value: {value}")]
    NonFiniteValue {
        /// Metric name
        name: String,
        /// Offending value
        value: f64,
    },
}

/// Category a metric belongs to.
///
/// The field is advisory: unknown categories are kept as [`MetricCategory::Other`]
/// and category queries are plain equality filters. Equality and hashing go
/// through [`MetricCategory::as_str`], so `Other("quality")` equals `Quality`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum MetricCategory {
    /// Output-oriented measurements (lines per day, PR velocity, ...)
    Productivity,
    /// Defect and code health measurements
    Quality,
    /// Rollout measurements (teams onboarded, active users, ...)
    Adoption,
    /// Spend and savings
    Financial,
    /// Survey-style measurements
    Satisfaction,
    /// Any other category label; a known label compares equal to its variant
    Other(String),
}

impl PartialEq for MetricCategory {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl Eq for MetricCategory {}

impl Hash for MetricCategory {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_str().hash(state);
    }
}

impl MetricCategory {
    /// Get string representation.
    pub fn as_str(&self) -> &str {
        match self {
            MetricCategory::Productivity => "productivity",
            MetricCategory::Quality => "quality",
            MetricCategory::Adoption => "adoption",
            MetricCategory::Financial => "financial",
            MetricCategory::Satisfaction => "satisfaction",
            MetricCategory::Other(label) => label,
        }
    }
}

impl From<String> for MetricCategory {
    fn from(label: String) -> Self {
        match label.as_str() {
            "productivity" => MetricCategory::Productivity,
            "quality" => MetricCategory::Quality,
            "adoption" => MetricCategory::Adoption,
            "financial" => MetricCategory::Financial,
            "satisfaction" => MetricCategory::Satisfaction,
            _ => MetricCategory::Other(label),
        }
    }
}

impl From<&str> for MetricCategory {
    fn from(label: &str) -> Self {
        Self::from(label.to_string())
    }
}

impl From<MetricCategory> for String {
    fn from(category: MetricCategory) -> Self {
        match category {
            MetricCategory::Other(label) => label,
            known => known.as_str().to_string(),
        }
    }
}

impl std::fmt::Display for MetricCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One immutable observation.
///
/// Records with the same name form a time series. The timestamp is kept for
/// reference only; series order is the order records were collected in.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricRecord {
    id: MetricId,
    name: String,
    category: MetricCategory,
    value: f64,
    unit: String,
    timestamp: Time,
    group: String,
}

impl MetricRecord {
    /// Create a record stamped with the current time for the default group.
    pub fn new(
        name: impl Into<String>,
        category: impl Into<MetricCategory>,
        value: f64,
        unit: impl Into<String>,
    ) -> Result<Self, MetricError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(MetricError::EmptyName);
        }
        if !value.is_finite() {
            return Err(MetricError::NonFiniteValue { name, value });
        }

        Ok(Self {
            id: MetricId::new(),
            name,
            category: category.into(),
            value,
            unit: unit.into(),
            timestamp: chrono::Utc::now(),
            group: DEFAULT_GROUP.to_string(),
        })
    }

    /// Set the observation time.
    pub fn with_timestamp(mut self, timestamp: Time) -> Self {
        self.timestamp = timestamp;
        self
    }

    /// Set the group (team, tool, ...) this observation belongs to.
    pub fn with_group(mut self, group: impl Into<String>) -> Self {
        self.group = group.into();
        self
    }

    /// Record identifier.
    pub fn id(&self) -> MetricId {
        self.id
    }

    /// Metric name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Metric category.
    pub fn category(&self) -> &MetricCategory {
        &self.category
    }

    /// Observed value.
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Unit label.
    pub fn unit(&self) -> &str {
        &self.unit
    }

    /// Observation time.
    pub fn timestamp(&self) -> Time {
        self.timestamp
    }

    /// Group label.
    pub fn group(&self) -> &str {
        &self.group
    }
}
