//! Metrics collector - owns the ledger and baselines for one reporting session.

use adoptmetrics_core::{BaselineStore, Ledger, MetricRecord};
use tracing::{debug, warn};

use crate::ValuationConfig;

/// Collects observations and baselines, and answers series queries over them.
///
/// The collector is single-owner state: callers that share it across threads
/// must synchronise access themselves.
#[derive(Debug, Clone, Default)]
pub struct MetricsCollector {
    ledger: Ledger,
    baselines: BaselineStore,
    config: ValuationConfig,
}

impl MetricsCollector {
    /// Create an empty collector with the default valuation model.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the valuation configuration.
    pub fn with_config(mut self, config: ValuationConfig) -> Self {
        self.config = config;
        self
    }

    /// Valuation configuration in use.
    pub fn config(&self) -> &ValuationConfig {
        &self.config
    }

    /// Collected records.
    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    /// Recorded baselines.
    pub fn baselines(&self) -> &BaselineStore {
        &self.baselines
    }

    /// Set the baseline for a metric, replacing any earlier value.
    pub fn set_baseline(&mut self, name: impl Into<String>, value: f64) {
        let name = name.into();
        if value <= 0.0 {
            warn!("Baseline for '{}' is {}; improvements against it report 0", name, value);
        }
        if let Some(previous) = self.baselines.set(name.clone(), value) {
            debug!("Replaced baseline for '{}': {} -> {}", name, previous, value);
        } else {
            debug!("Set baseline for '{}': {}", name, value);
        }
    }

    /// Append an observation to the ledger.
    pub fn collect(&mut self, record: MetricRecord) {
        debug!(
            "Collected {} = {} {} [{} / {}]",
            record.name(),
            record.value(),
            record.unit(),
            record.category(),
            record.group()
        );
        self.ledger.append(record);
    }

    /// Percentage change of `current` relative to the baseline of `name`.
    ///
    /// Returns 0.0 when there is no baseline or the baseline is not positive.
    pub fn improvement(&self, name: &str, current: f64) -> f64 {
        match self.baselines.get(name) {
            Some(baseline) if baseline > 0.0 => ((current - baseline) / baseline) * 100.0,
            _ => 0.0,
        }
    }

    /// Percentage change between the first and latest record named `name`.
    ///
    /// Returns 0.0 with fewer than two records or a zero first value. With
    /// `inverse`, the sign is flipped for metrics where a decrease is good.
    pub fn trend(&self, name: &str, inverse: bool) -> f64 {
        let Some((first, last)) = self.ledger.endpoints(name) else {
            return 0.0;
        };
        if self.ledger.by_name(name).nth(1).is_none() || first.value() == 0.0 {
            return 0.0;
        }

        let trend = ((last.value() - first.value()) / first.value()) * 100.0;
        if inverse { -trend } else { trend }
    }

    /// Value of the most recently collected record named `name`, or 0.0.
    pub fn latest_value(&self, name: &str) -> f64 {
        self.ledger.latest(name).map(|r| r.value()).unwrap_or(0.0)
    }

    /// A collector restricted to one group's records.
    ///
    /// Baselines and valuation configuration are shared unchanged; records
    /// keep their relative order.
    pub fn for_group(&self, group: &str) -> Self {
        let mut ledger = Ledger::new();
        for record in self.ledger.by_group(group) {
            ledger.append(record.clone());
        }
        debug!("Scoped collector to group '{}' ({} records)", group, ledger.len());

        Self {
            ledger,
            baselines: self.baselines.clone(),
            config: self.config.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use adoptmetrics_core::MetricCategory;

    fn record(name: &str, value: f64) -> MetricRecord {
        MetricRecord::new(name, MetricCategory::Productivity, value, "unit").unwrap()
    }

    #[test]
    fn test_improvement_against_baseline() {
        let mut collector = MetricsCollector::new();
        collector.set_baseline("lines_of_code_per_day", 50.0);
        collector.set_baseline("bug_density", 10.0);

        assert_eq!(collector.improvement("lines_of_code_per_day", 150.0), 200.0);
        assert_eq!(collector.improvement("bug_density", 6.0), -40.0);
    }

    #[test]
    fn test_improvement_without_usable_baseline() {
        let mut collector = MetricsCollector::new();
        collector.set_baseline("teams_onboarded", 0.0);
        collector.set_baseline("negative", -3.0);

        assert_eq!(collector.improvement("teams_onboarded", 25.0), 0.0);
        assert_eq!(collector.improvement("negative", 25.0), 0.0);
        assert_eq!(collector.improvement("missing", 25.0), 0.0);
    }

    #[test]
    fn test_baseline_overwrite() {
        let mut collector = MetricsCollector::new();
        collector.set_baseline("x", 10.0);
        collector.set_baseline("x", 20.0);
        assert_eq!(collector.improvement("x", 30.0), 50.0);
        assert_eq!(collector.baselines().len(), 1);
    }

    #[test]
    fn test_trend_needs_two_records() {
        let mut collector = MetricsCollector::new();
        assert_eq!(collector.trend("bug_density", false), 0.0);

        collector.collect(record("bug_density", 6.0));
        assert_eq!(collector.trend("bug_density", false), 0.0);
        assert_eq!(collector.trend("bug_density", true), 0.0);
    }

    #[test]
    fn test_trend_first_to_last() {
        let mut collector = MetricsCollector::new();
        collector.collect(record("loc", 100.0));
        collector.collect(record("other", 1.0));
        collector.collect(record("loc", 300.0));
        collector.collect(record("loc", 150.0));

        assert_eq!(collector.trend("loc", false), 50.0);
        assert_eq!(collector.trend("loc", true), -50.0);
    }

    #[test]
    fn test_trend_uses_insertion_order_not_timestamp() {
        let later = chrono::Utc::now();
        let earlier = later - chrono::Duration::days(7);

        let mut collector = MetricsCollector::new();
        collector.collect(record("loc", 100.0).with_timestamp(later));
        collector.collect(record("loc", 200.0).with_timestamp(earlier));

        assert_eq!(collector.trend("loc", false), 100.0);
    }

    #[test]
    fn test_trend_zero_first_value() {
        let mut collector = MetricsCollector::new();
        collector.collect(record("loc", 0.0));
        collector.collect(record("loc", 10.0));
        assert_eq!(collector.trend("loc", false), 0.0);
    }

    #[test]
    fn test_latest_value() {
        let mut collector = MetricsCollector::new();
        assert_eq!(collector.latest_value("active_users"), 0.0);

        collector.collect(record("active_users", 120.0));
        collector.collect(record("active_users", 180.0));
        assert_eq!(collector.latest_value("active_users"), 180.0);
    }

    #[test]
    fn test_for_group() {
        let mut collector = MetricsCollector::new().with_config(ValuationConfig {
            headcount: 10.0,
            ..Default::default()
        });
        collector.set_baseline("loc", 50.0);
        collector.collect(record("loc", 60.0).with_group("team_a"));
        collector.collect(record("loc", 70.0));
        collector.collect(record("loc", 90.0).with_group("team_a"));

        let team = collector.for_group("team_a");
        assert_eq!(team.ledger().len(), 2);
        assert_eq!(team.trend("loc", false), 50.0);
        assert_eq!(team.improvement("loc", 75.0), 50.0);
        assert_eq!(team.config().headcount, 10.0);
        assert_eq!(collector.ledger().len(), 3);
    }
}
