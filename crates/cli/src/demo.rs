//! Built-in sample scenario: a pilot rollout with one data point per metric.

use adoptmetrics_analytics::{MetricsCollector, ValuationConfig};
use adoptmetrics_core::names::{adoption, productivity, quality};
use adoptmetrics_core::{MetricCategory, MetricRecord};
use anyhow::Result;

/// Collector preloaded with the sample baselines and observations.
pub fn sample_collector(config: ValuationConfig) -> Result<MetricsCollector> {
    let mut collector = MetricsCollector::new().with_config(config);

    collector.set_baseline(productivity::LINES_OF_CODE_PER_DAY, 50.0);
    collector.set_baseline(quality::BUG_DENSITY, 10.0);
    collector.set_baseline(adoption::TEAMS_ONBOARDED, 0.0);

    collector.collect(
        MetricRecord::new(productivity::LINES_OF_CODE_PER_DAY, MetricCategory::Productivity, 150.0, "lines")?
            .with_group("pilot_team_1"),
    );
    collector.collect(MetricRecord::new(quality::BUG_DENSITY, MetricCategory::Quality, 6.0, "bugs_per_kloc")?);
    collector.collect(MetricRecord::new(adoption::TEAMS_ONBOARDED, MetricCategory::Adoption, 25.0, "teams")?);
    collector.collect(MetricRecord::new(adoption::ACTIVE_USERS, MetricCategory::Adoption, 180.0, "users")?);
    collector.collect(MetricRecord::new(
        productivity::AI_SUGGESTIONS_ACCEPTED,
        MetricCategory::Productivity,
        75.5,
        "percentage",
    )?);

    Ok(collector)
}
