//! Valuation - turns the cost/benefit model into an ROI estimate.
//!
//! Benefits come from the configured headcount and bug figures, not from the
//! ledger. Only the configuration changes the estimate.

use serde::{Deserialize, Serialize};

use crate::format::{serialize_currency, serialize_whole_percent};
use crate::MetricsCollector;

/// Returned by [`payback_period`] when benefits never cover the costs.
pub const NO_PAYBACK_MONTHS: i64 = 999;

/// Cost and benefit model behind the ROI estimate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValuationConfig {
    /// Developers covered by the rollout
    pub headcount: f64,
    /// Average yearly compensation per developer
    pub avg_compensation: f64,
    /// Share of developer time saved (0.30 = 30%)
    pub time_savings_fraction: f64,
    /// Average cost of one bug
    pub bug_unit_cost: f64,
    /// Bugs avoided per year
    pub annual_bug_reduction: f64,
    /// Tool licences per month
    pub monthly_tool_cost: f64,
    /// Training programme, paid once
    pub one_time_training_cost: f64,
    /// Infrastructure per month
    pub monthly_infra_cost: f64,
}

impl Default for ValuationConfig {
    fn default() -> Self {
        Self {
            headcount: 200.0,
            avg_compensation: 120_000.0,
            time_savings_fraction: 0.30,
            bug_unit_cost: 500.0,
            annual_bug_reduction: 1000.0,
            monthly_tool_cost: 10_000.0,
            one_time_training_cost: 50_000.0,
            monthly_infra_cost: 5_000.0,
        }
    }
}

impl ValuationConfig {
    /// Yearly value of developer time saved.
    pub fn productivity_benefit(&self) -> f64 {
        self.headcount * self.avg_compensation * self.time_savings_fraction
    }

    /// Yearly value of bugs avoided.
    pub fn quality_benefit(&self) -> f64 {
        self.bug_unit_cost * self.annual_bug_reduction
    }

    /// Total yearly benefit.
    pub fn annual_benefits(&self) -> f64 {
        self.productivity_benefit() + self.quality_benefit()
    }

    /// First-year cost: training plus twelve months of tooling and infrastructure.
    pub fn annual_costs(&self) -> f64 {
        let monthly = self.monthly_tool_cost + self.monthly_infra_cost;
        self.one_time_training_cost + monthly * 12.0
    }
}

/// Return on investment as a percentage; 0 when costs are not positive.
pub fn roi_percentage(benefits: f64, costs: f64) -> f64 {
    if costs > 0.0 {
        ((benefits - costs) / costs) * 100.0
    } else {
        0.0
    }
}

/// Whole months until cumulative benefit covers `costs`.
///
/// Returns [`NO_PAYBACK_MONTHS`] when benefits are not positive.
/// Non-positive costs give zero or negative months.
pub fn payback_period(annual_benefits: f64, costs: f64) -> i64 {
    if annual_benefits <= 0.0 {
        return NO_PAYBACK_MONTHS;
    }
    let monthly_benefits = annual_benefits / 12.0;
    (costs / monthly_benefits).floor() as i64
}

/// ROI section of the report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoiEstimate {
    /// Yearly benefits
    #[serde(serialize_with = "serialize_currency")]
    pub annual_benefits: f64,
    /// First-year costs
    #[serde(serialize_with = "serialize_currency")]
    pub annual_costs: f64,
    /// Return on investment (%)
    #[serde(serialize_with = "serialize_whole_percent")]
    pub roi_percentage: f64,
    /// Months to pay back the investment
    pub payback_period_months: i64,
}

impl RoiEstimate {
    /// Evaluate the valuation model.
    pub fn from_config(config: &ValuationConfig) -> Self {
        let annual_benefits = config.annual_benefits();
        let annual_costs = config.annual_costs();

        Self {
            annual_benefits,
            annual_costs,
            roi_percentage: roi_percentage(annual_benefits, annual_costs),
            payback_period_months: payback_period(annual_benefits, annual_costs),
        }
    }
}

impl MetricsCollector {
    /// ROI estimate under the collector's valuation configuration.
    pub fn roi(&self) -> RoiEstimate {
        RoiEstimate::from_config(self.config())
    }
}
