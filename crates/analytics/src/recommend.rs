//! Recommendation rules over the latest collected values.

use adoptmetrics_core::names::{adoption, productivity, quality};
use serde::Serialize;
use tracing::debug;

use crate::MetricsCollector;

/// Which rule produced a recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationKind {
    /// Active users per onboarded team is low
    LowAdoption,
    /// Bug density is above the threshold
    HighBugDensity,
    /// Lines-of-code trend is flat
    LowProductivityGain,
}

impl RecommendationKind {
    /// Text shown in the report.
    pub fn message(&self) -> &'static str {
        match self {
            RecommendationKind::LowAdoption => {
                "Increase training and support for teams with low adoption"
            }
            RecommendationKind::HighBugDensity => {
                "Focus on code review practices and automated testing"
            }
            RecommendationKind::LowProductivityGain => {
                "Review AI tool configuration and provide advanced training"
            }
        }
    }
}

/// An actionable recommendation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    /// Rule that fired
    pub kind: RecommendationKind,
    /// Recommendation text
    pub message: String,
}

impl From<RecommendationKind> for Recommendation {
    fn from(kind: RecommendationKind) -> Self {
        Self {
            kind,
            message: kind.message().to_string(),
        }
    }
}

/// Evaluates recommendation rules against a collector.
///
/// Rules are independent; every rule is evaluated and the output keeps rule order.
pub struct RecommendationEngine;

impl RecommendationEngine {
    /// Adoption rate (%) below which more training is recommended.
    pub const MIN_ADOPTION_RATE: f64 = 80.0;
    /// Bug density above which review and testing practices are recommended.
    pub const MAX_BUG_DENSITY: f64 = 5.0;
    /// Lines-of-code trend (%) below which tool configuration is reviewed.
    pub const MIN_LINES_OF_CODE_TREND: f64 = 10.0;

    /// Create a new engine.
    pub fn new() -> Self {
        Self
    }

    /// Evaluate every rule.
    pub fn evaluate(&self, collector: &MetricsCollector) -> Vec<Recommendation> {
        let mut recommendations: Vec<Recommendation> = Vec::new();

        let adoption_rate = collector.adoption_rate();
        if adoption_rate < Self::MIN_ADOPTION_RATE {
            debug!("Adoption rate {:.1}% below {}%", adoption_rate, Self::MIN_ADOPTION_RATE);
            recommendations.push(RecommendationKind::LowAdoption.into());
        }

        let bug_density = collector.latest_value(quality::BUG_DENSITY);
        if bug_density > Self::MAX_BUG_DENSITY {
            debug!("Bug density {} above {}", bug_density, Self::MAX_BUG_DENSITY);
            recommendations.push(RecommendationKind::HighBugDensity.into());
        }

        let loc_trend = collector.trend(productivity::LINES_OF_CODE_PER_DAY, false);
        if loc_trend < Self::MIN_LINES_OF_CODE_TREND {
            debug!("Lines of code trend {:.1}% below {}%", loc_trend, Self::MIN_LINES_OF_CODE_TREND);
            recommendations.push(RecommendationKind::LowProductivityGain.into());
        }

        recommendations
    }
}

impl Default for RecommendationEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl MetricsCollector {
    /// Active users per onboarded team, as a percentage.
    ///
    /// Returns 0.0 when the latest team count is not positive.
    pub fn adoption_rate(&self) -> f64 {
        let teams = self.latest_value(adoption::TEAMS_ONBOARDED);
        if teams > 0.0 {
            self.latest_value(adoption::ACTIVE_USERS) / teams * 100.0
        } else {
            0.0
        }
    }

    /// Recommendations for the current ledger.
    pub fn recommendations(&self) -> Vec<Recommendation> {
        RecommendationEngine::new().evaluate(self)
    }
}
