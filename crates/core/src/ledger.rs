//! Ledger and baseline store - the accumulated state behind a report.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use crate::metric::{MetricCategory, MetricRecord};

/// Reference values keyed by metric name.
///
/// A name holds at most one baseline; setting it again replaces the previous value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BaselineStore {
    values: HashMap<String, f64>,
}

impl BaselineStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set (or overwrite) the baseline for `name`.
    ///
    /// Returns the previous baseline, if any.
    pub fn set(&mut self, name: impl Into<String>, value: f64) -> Option<f64> {
        self.values.insert(name.into(), value)
    }

    /// Get the baseline for `name`.
    pub fn get(&self, name: &str) -> Option<f64> {
        self.values.get(name).copied()
    }

    /// Number of baselines.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether no baseline is recorded.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate over (name, baseline) pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.values.iter().map(|(name, value)| (name.as_str(), *value))
    }
}

/// Append-only, insertion-ordered collection of metric records.
///
/// Insertion order defines "first" and "latest" for every series query.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct Ledger {
    records: Vec<MetricRecord>,
}

impl Ledger {
    /// Create an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record.
    pub fn append(&mut self, record: MetricRecord) {
        self.records.push(record);
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the ledger holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All records in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, MetricRecord> {
        self.records.iter()
    }

    /// Records named `name`, in insertion order.
    pub fn by_name<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a MetricRecord> + 'a {
        self.records.iter().filter(move |r| r.name() == name)
    }

    /// Records whose category equals `category`.
    pub fn by_category<'a>(
        &'a self,
        category: &'a MetricCategory,
    ) -> impl Iterator<Item = &'a MetricRecord> + 'a {
        self.records.iter().filter(move |r| r.category() == category)
    }

    /// Records belonging to `group`.
    pub fn by_group<'a>(&'a self, group: &'a str) -> impl Iterator<Item = &'a MetricRecord> + 'a {
        self.records.iter().filter(move |r| r.group() == group)
    }

    /// Distinct group labels in first-seen order.
    pub fn groups(&self) -> Vec<&str> {
        let mut seen = Vec::new();
        for record in &self.records {
            if !seen.contains(&record.group()) {
                seen.push(record.group());
            }
        }
        seen
    }

    /// First and latest record for `name`, if any exist.
    pub fn endpoints(&self, name: &str) -> Option<(&MetricRecord, &MetricRecord)> {
        let first = self.records.iter().find(|r| r.name() == name)?;
        let last = self.records.iter().rev().find(|r| r.name() == name)?;
        Some((first, last))
    }

    /// Most recently inserted record for `name`.
    pub fn latest(&self, name: &str) -> Option<&MetricRecord> {
        self.records.iter().rev().find(|r| r.name() == name)
    }
}

impl<'a> IntoIterator for &'a Ledger {
    type Item = &'a MetricRecord;
    type IntoIter = std::slice::Iter<'a, MetricRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
