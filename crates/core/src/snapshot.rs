//! Latest-value snapshots for the well-known metrics of each category.

use serde::{Deserialize, Serialize};
use crate::ledger::Ledger;
use crate::names::{adoption, productivity, quality};

fn latest(ledger: &Ledger, name: &str) -> f64 {
    ledger.latest(name).map(|r| r.value()).unwrap_or(0.0)
}

// Saturates negative values to zero.
fn latest_count(ledger: &Ledger, name: &str) -> u64 {
    latest(ledger, name).max(0.0) as u64
}

/// Latest productivity values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductivityMetrics {
    /// Lines of code per developer per day
    pub lines_of_code_per_day: f64,
    /// Pull requests per developer per week
    pub pull_requests_per_week: f64,
    /// Hours to complete a feature
    pub time_to_complete_feature: f64,
    /// Hours in review
    pub code_review_time: f64,
    /// Share of AI suggestions accepted
    pub ai_suggestions_accepted: f64,
}

impl ProductivityMetrics {
    /// Build from the latest ledger values (0 when a metric was never collected).
    pub fn from_ledger(ledger: &Ledger) -> Self {
        Self {
            lines_of_code_per_day: latest(ledger, productivity::LINES_OF_CODE_PER_DAY),
            pull_requests_per_week: latest(ledger, productivity::PULL_REQUESTS_PER_WEEK),
            time_to_complete_feature: latest(ledger, productivity::TIME_TO_COMPLETE_FEATURE),
            code_review_time: latest(ledger, productivity::CODE_REVIEW_TIME),
            ai_suggestions_accepted: latest(ledger, productivity::AI_SUGGESTIONS_ACCEPTED),
        }
    }
}

/// Latest quality values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QualityMetrics {
    /// Bugs per thousand lines
    pub bug_density: f64,
    /// Test coverage
    pub code_coverage: f64,
    /// Open security vulnerabilities
    pub security_vulnerabilities: u64,
    /// Technical debt ratio
    pub technical_debt_ratio: f64,
    /// Duplicated code share
    pub code_duplication: f64,
}

impl QualityMetrics {
    /// Build from the latest ledger values.
    pub fn from_ledger(ledger: &Ledger) -> Self {
        Self {
            bug_density: latest(ledger, quality::BUG_DENSITY),
            code_coverage: latest(ledger, quality::CODE_COVERAGE),
            security_vulnerabilities: latest_count(ledger, quality::SECURITY_VULNERABILITIES),
            technical_debt_ratio: latest(ledger, quality::TECHNICAL_DEBT_RATIO),
            code_duplication: latest(ledger, quality::CODE_DUPLICATION),
        }
    }
}

/// Latest adoption values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AdoptionMetrics {
    /// Teams onboarded
    pub teams_onboarded: u64,
    /// Active users
    pub active_users: u64,
    /// Hours of tool usage
    pub ai_tool_usage_hours: f64,
    /// Share of features built with AI
    pub features_using_ai: f64,
    /// Training completion rate
    pub training_completion_rate: f64,
}

impl AdoptionMetrics {
    /// Build from the latest ledger values.
    pub fn from_ledger(ledger: &Ledger) -> Self {
        Self {
            teams_onboarded: latest_count(ledger, adoption::TEAMS_ONBOARDED),
            active_users: latest_count(ledger, adoption::ACTIVE_USERS),
            ai_tool_usage_hours: latest(ledger, adoption::AI_TOOL_USAGE_HOURS),
            features_using_ai: latest(ledger, adoption::FEATURES_USING_AI),
            training_completion_rate: latest(ledger, adoption::TRAINING_COMPLETION_RATE),
        }
    }
}
