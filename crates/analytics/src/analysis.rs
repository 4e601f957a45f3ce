//! Category analyses and the executive summary.

use adoptmetrics_core::names::{adoption, productivity, quality};
use adoptmetrics_core::MetricCategory;
use serde::Serialize;

use crate::format::serialize_percent;
use crate::MetricsCollector;

/// Fixed data quality score reported in the summary.
pub const DATA_QUALITY_SCORE: f64 = 85.0;

/// Assumed share of developer time saved (%), reported with the productivity analysis.
pub const ASSUMED_TIME_SAVINGS: f64 = 30.0;

/// Status reported when no productivity records were collected.
pub const NO_PRODUCTIVITY_DATA: &str = "No productivity data available";

/// Executive summary over every collected record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    /// Records in the ledger
    pub total_metrics_tracked: usize,
    /// Mean of the positive improvements against baselines
    #[serde(serialize_with = "serialize_percent")]
    pub average_improvement: f64,
    /// Records that improved on their baseline
    pub metrics_improved: usize,
    /// Data quality score
    pub data_quality_score: f64,
}

/// Productivity section of the report.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ProductivityAnalysis {
    /// No productivity-category record was collected
    NoData {
        /// Explanation
        status: String,
    },
    /// Trends computed from the ledger
    Measured(ProductivityTrends),
}

impl ProductivityAnalysis {
    /// The "no data" placeholder.
    pub fn no_data() -> Self {
        ProductivityAnalysis::NoData {
            status: NO_PRODUCTIVITY_DATA.to_string(),
        }
    }
}

/// Productivity figures.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductivityTrends {
    /// Lines-of-code-per-day trend (%)
    pub lines_of_code_trend: f64,
    /// Pull-requests-per-week trend (%)
    pub pr_velocity: f64,
    /// Latest share of AI suggestions accepted
    pub ai_adoption_rate: f64,
    /// Assumed developer time saved (%)
    pub time_savings: f64,
}

/// Quality section of the report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QualityAnalysis {
    /// Bug density trend (%), positive when density falls
    pub bug_reduction: f64,
    /// Security score from open vulnerabilities
    pub security_improvement: f64,
    /// Coverage trend (%)
    pub code_coverage_trend: f64,
    /// Technical debt trend (%), positive when debt falls
    pub technical_debt_reduction: f64,
}

/// Adoption section of the report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AdoptionAnalysis {
    /// Latest onboarded team count
    pub teams_onboarded: f64,
    /// Latest active user count
    pub active_users: f64,
    /// Tool usage hours trend (%)
    pub usage_growth: f64,
    /// Latest training completion rate
    pub training_progress: f64,
}

impl MetricsCollector {
    /// Summarise improvements of every record against its baseline.
    ///
    /// Only strictly positive improvements count toward the average.
    pub fn summary(&self) -> Summary {
        let improvements: Vec<f64> = self
            .ledger()
            .iter()
            .map(|r| self.improvement(r.name(), r.value()))
            .filter(|&improvement| improvement > 0.0)
            .collect();

        let average_improvement = if improvements.is_empty() {
            0.0
        } else {
            improvements.iter().sum::<f64>() / improvements.len() as f64
        };

        Summary {
            total_metrics_tracked: self.ledger().len(),
            average_improvement,
            metrics_improved: improvements.len(),
            data_quality_score: DATA_QUALITY_SCORE,
        }
    }

    /// Productivity analysis, or a "no data" status when nothing in the
    /// productivity category was collected.
    pub fn analyze_productivity(&self) -> ProductivityAnalysis {
        if self.ledger().by_category(&MetricCategory::Productivity).next().is_none() {
            return ProductivityAnalysis::no_data();
        }

        ProductivityAnalysis::Measured(ProductivityTrends {
            lines_of_code_trend: self.trend(productivity::LINES_OF_CODE_PER_DAY, false),
            pr_velocity: self.trend(productivity::PULL_REQUESTS_PER_WEEK, false),
            ai_adoption_rate: self.latest_value(productivity::AI_SUGGESTIONS_ACCEPTED),
            time_savings: ASSUMED_TIME_SAVINGS,
        })
    }

    /// Quality analysis. Missing data degrades to zeros.
    pub fn analyze_quality(&self) -> QualityAnalysis {
        QualityAnalysis {
            bug_reduction: self.trend(quality::BUG_DENSITY, true),
            security_improvement: self.security_score(),
            code_coverage_trend: self.trend(quality::CODE_COVERAGE, false),
            technical_debt_reduction: self.trend(quality::TECHNICAL_DEBT_RATIO, true),
        }
    }

    /// Adoption analysis. Missing data degrades to zeros.
    pub fn analyze_adoption(&self) -> AdoptionAnalysis {
        AdoptionAnalysis {
            teams_onboarded: self.latest_value(adoption::TEAMS_ONBOARDED),
            active_users: self.latest_value(adoption::ACTIVE_USERS),
            usage_growth: self.trend(adoption::AI_TOOL_USAGE_HOURS, false),
            training_progress: self.latest_value(adoption::TRAINING_COMPLETION_RATE),
        }
    }

    /// 100 minus 10 points per open vulnerability, floored at 0.
    pub fn security_score(&self) -> f64 {
        let vulnerabilities = self.latest_value(quality::SECURITY_VULNERABILITIES);
        (100.0 - vulnerabilities * 10.0).max(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use adoptmetrics_core::MetricRecord;

    fn record(name: &str, category: MetricCategory, value: f64) -> MetricRecord {
        MetricRecord::new(name, category, value, "unit").unwrap()
    }

    #[test]
    fn test_summary_empty() {
        let summary = MetricsCollector::new().summary();
        assert_eq!(summary.total_metrics_tracked, 0);
        assert_eq!(summary.metrics_improved, 0);
        assert_eq!(summary.average_improvement, 0.0);
        assert_eq!(summary.data_quality_score, DATA_QUALITY_SCORE);
    }

    #[test]
    fn test_summary_counts_only_positive_improvements() {
        let mut collector = MetricsCollector::new();
        collector.set_baseline("loc", 50.0);
        collector.set_baseline("bugs", 10.0);
        collector.set_baseline("prs", 4.0);
        collector.collect(record("loc", MetricCategory::Productivity, 150.0));
        collector.collect(record("bugs", MetricCategory::Quality, 6.0));
        collector.collect(record("prs", MetricCategory::Productivity, 5.0));
        collector.collect(record("no_baseline", MetricCategory::Adoption, 9.0));

        let summary = collector.summary();
        assert_eq!(summary.total_metrics_tracked, 4);
        assert_eq!(summary.metrics_improved, 2);
        assert_eq!(summary.average_improvement, 112.5);
    }

    #[test]
    fn test_summary_serialization() {
        let mut collector = MetricsCollector::new();
        collector.set_baseline("loc", 50.0);
        collector.collect(record("loc", MetricCategory::Productivity, 150.0));

        let json = serde_json::to_value(collector.summary()).unwrap();
        assert_eq!(json["average_improvement"], "200.0%");
        assert_eq!(json["metrics_improved"], 1);
        assert_eq!(json["data_quality_score"], 85.0);
    }

    #[test]
    fn test_productivity_no_data() {
        let mut collector = MetricsCollector::new();
        collector.collect(record(productivity::LINES_OF_CODE_PER_DAY, MetricCategory::Quality, 100.0));
        collector.collect(record(productivity::LINES_OF_CODE_PER_DAY, MetricCategory::Quality, 200.0));

        let analysis = collector.analyze_productivity();
        assert_eq!(analysis, ProductivityAnalysis::no_data());

        let json = serde_json::to_value(&analysis).unwrap();
        assert_eq!(json, serde_json::json!({"status": NO_PRODUCTIVITY_DATA}));
    }

    #[test]
    fn test_productivity_measured() {
        let mut collector = MetricsCollector::new();
        collector.collect(record(productivity::LINES_OF_CODE_PER_DAY, MetricCategory::Productivity, 100.0));
        collector.collect(record(productivity::LINES_OF_CODE_PER_DAY, MetricCategory::Productivity, 125.0));
        collector.collect(record(productivity::AI_SUGGESTIONS_ACCEPTED, MetricCategory::Productivity, 75.5));

        let ProductivityAnalysis::Measured(trends) = collector.analyze_productivity() else {
            panic!("expected measured productivity");
        };
        assert_eq!(trends.lines_of_code_trend, 25.0);
        assert_eq!(trends.pr_velocity, 0.0);
        assert_eq!(trends.ai_adoption_rate, 75.5);
        assert_eq!(trends.time_savings, ASSUMED_TIME_SAVINGS);
    }

    #[test]
    fn test_quality_without_data_degrades_to_zero() {
        let quality = MetricsCollector::new().analyze_quality();
        assert_eq!(quality.bug_reduction, 0.0);
        assert_eq!(quality.code_coverage_trend, 0.0);
        assert_eq!(quality.technical_debt_reduction, 0.0);
        assert_eq!(quality.security_improvement, 100.0);
    }

    #[test]
    fn test_quality_inverse_trends() {
        let mut collector = MetricsCollector::new();
        collector.collect(record(quality::BUG_DENSITY, MetricCategory::Quality, 10.0));
        collector.collect(record(quality::BUG_DENSITY, MetricCategory::Quality, 5.0));
        collector.collect(record(quality::TECHNICAL_DEBT_RATIO, MetricCategory::Quality, 20.0));
        collector.collect(record(quality::TECHNICAL_DEBT_RATIO, MetricCategory::Quality, 25.0));

        let quality = collector.analyze_quality();
        assert_eq!(quality.bug_reduction, 50.0);
        assert_eq!(quality.technical_debt_reduction, -25.0);
    }

    #[test]
    fn test_security_score_floor() {
        let mut collector = MetricsCollector::new();
        collector.collect(record(quality::SECURITY_VULNERABILITIES, MetricCategory::Quality, 3.0));
        assert_eq!(collector.security_score(), 70.0);

        collector.collect(record(quality::SECURITY_VULNERABILITIES, MetricCategory::Quality, 14.0));
        assert_eq!(collector.security_score(), 0.0);
    }

    #[test]
    fn test_adoption_analysis() {
        let mut collector = MetricsCollector::new();
        collector.collect(record(adoption::TEAMS_ONBOARDED, MetricCategory::Adoption, 25.0));
        collector.collect(record(adoption::ACTIVE_USERS, MetricCategory::Adoption, 180.0));
        collector.collect(record(adoption::AI_TOOL_USAGE_HOURS, MetricCategory::Adoption, 400.0));
        collector.collect(record(adoption::AI_TOOL_USAGE_HOURS, MetricCategory::Adoption, 600.0));

        let adoption = collector.analyze_adoption();
        assert_eq!(adoption.teams_onboarded, 25.0);
        assert_eq!(adoption.active_users, 180.0);
        assert_eq!(adoption.usage_growth, 50.0);
        assert_eq!(adoption.training_progress, 0.0);
    }
}
