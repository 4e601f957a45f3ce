//! Unique identifiers for ledger entries.

use serde::{Deserialize, Serialize};
use ulid::Ulid;

/// Unique identifier for a collected metric record.
///
/// Identifiers are only used to tell records apart; ordering inside a
/// series always follows ledger insertion order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MetricId(Ulid);

impl MetricId {
    /// Generate a new MetricId
    pub fn new() -> Self {
        Self(Ulid::new())
    }
}

impl Default for MetricId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for MetricId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl std::str::FromStr for MetricId {
    type Err = ulid::DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.parse()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metric_id_parse_display() {
        let id = MetricId::new();
        let parsed: MetricId = id.to_string().parse().unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn test_metric_id_invalid() {
        assert!("not-a-ulid".parse::<MetricId>().is_err());
    }
}
