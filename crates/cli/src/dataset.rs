//! Dataset and valuation files read by the CLI.

use std::collections::BTreeMap;
use std::path::Path;

use adoptmetrics_analytics::{MetricsCollector, ValuationConfig};
use adoptmetrics_core::{MetricCategory, MetricRecord, Time};
use anyhow::{Context, Result};
use serde::Deserialize;
use tokio::fs;
use tracing::debug;

/// Baselines and records to feed a collector with.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Dataset {
    /// Baseline per metric name
    #[serde(default)]
    pub baselines: BTreeMap<String, f64>,

    /// Observations, in collection order
    #[serde(default)]
    pub records: Vec<RecordInput>,
}

/// One observation as written in a dataset file.
#[derive(Debug, Clone, Deserialize)]
pub struct RecordInput {
    pub name: String,
    pub category: MetricCategory,
    pub value: f64,
    #[serde(default)]
    pub unit: String,
    pub timestamp: Option<Time>,
    pub group: Option<String>,
}

impl RecordInput {
    fn into_record(self) -> Result<MetricRecord> {
        let mut record = MetricRecord::new(self.name, self.category, self.value, self.unit)?;
        if let Some(timestamp) = self.timestamp {
            record = record.with_timestamp(timestamp);
        }
        if let Some(group) = self.group {
            record = record.with_group(group);
        }
        Ok(record)
    }
}

impl Dataset {
    /// Parse a dataset from JSON text.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Build a collector holding this dataset.
    ///
    /// Fails on the first record that cannot be constructed.
    pub fn into_collector(self, config: ValuationConfig) -> Result<MetricsCollector> {
        let mut collector = MetricsCollector::new().with_config(config);

        for (name, value) in self.baselines {
            collector.set_baseline(name, value);
        }
        for (index, input) in self.records.into_iter().enumerate() {
            let record = input
                .into_record()
                .with_context(|| format!("invalid record at index {}", index))?;
            collector.collect(record);
        }

        Ok(collector)
    }
}

/// Read a dataset file.
pub async fn load_dataset(path: &Path) -> Result<Dataset> {
    debug!("Loading dataset from {}", path.display());
    let json = fs::read_to_string(path)
        .await
        .with_context(|| format!("failed to read dataset {}", path.display()))?;
    Dataset::from_json(&json).with_context(|| format!("failed to parse dataset {}", path.display()))
}

/// Read a valuation file, falling back to defaults when no path is given.
pub async fn load_valuation(path: Option<&Path>) -> Result<ValuationConfig> {
    let Some(path) = path else {
        return Ok(ValuationConfig::default());
    };

    debug!("Loading valuation config from {}", path.display());
    let json = fs::read_to_string(path)
        .await
        .with_context(|| format!("failed to read valuation config {}", path.display()))?;
    serde_json::from_str(&json)
        .with_context(|| format!("failed to parse valuation config {}", path.display()))
}
