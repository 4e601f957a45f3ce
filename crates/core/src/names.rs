//! Well-known metric names consulted by the analyses and recommendation rules.

/// Productivity metrics.
pub mod productivity {
    /// Lines of code written per developer per day
    pub const LINES_OF_CODE_PER_DAY: &str = "lines_of_code_per_day";
    /// Pull requests merged per developer per week
    pub const PULL_REQUESTS_PER_WEEK: &str = "pull_requests_per_week";
    /// Hours from start to completion of a feature
    pub const TIME_TO_COMPLETE_FEATURE: &str = "time_to_complete_feature";
    /// Hours a change waits in review
    pub const CODE_REVIEW_TIME: &str = "code_review_time";
    /// Percentage of AI suggestions accepted
    pub const AI_SUGGESTIONS_ACCEPTED: &str = "ai_suggestions_accepted";
}

/// Quality metrics. Lower is better for density, debt and duplication.
pub mod quality {
    /// Bugs per thousand lines of code
    pub const BUG_DENSITY: &str = "bug_density";
    /// Test coverage percentage
    pub const CODE_COVERAGE: &str = "code_coverage";
    /// Open security vulnerabilities
    pub const SECURITY_VULNERABILITIES: &str = "security_vulnerabilities";
    /// Technical debt ratio
    pub const TECHNICAL_DEBT_RATIO: &str = "technical_debt_ratio";
    /// Duplicated code percentage
    pub const CODE_DUPLICATION: &str = "code_duplication";
}

/// Adoption metrics.
pub mod adoption {
    /// Teams using the tooling
    pub const TEAMS_ONBOARDED: &str = "teams_onboarded";
    /// Active users of the tooling
    pub const ACTIVE_USERS: &str = "active_users";
    /// Hours of tool usage
    pub const AI_TOOL_USAGE_HOURS: &str = "ai_tool_usage_hours";
    /// Percentage of features built with AI assistance
    pub const FEATURES_USING_AI: &str = "features_using_ai";
    /// Percentage of the training programme completed
    pub const TRAINING_COMPLETION_RATE: &str = "training_completion_rate";
}
