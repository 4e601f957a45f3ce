//! Analytics layer - trends, valuation, recommendations and the report.

#![warn(missing_docs)]

mod collector;
mod analysis;
mod valuation;
mod recommend;
mod report;

pub mod format;

pub use collector::MetricsCollector;
pub use analysis::{
    Summary, ProductivityAnalysis, ProductivityTrends, QualityAnalysis, AdoptionAnalysis,
    DATA_QUALITY_SCORE, ASSUMED_TIME_SAVINGS, NO_PRODUCTIVITY_DATA,
};
pub use valuation::{ValuationConfig, RoiEstimate, roi_percentage, payback_period, NO_PAYBACK_MONTHS};
pub use recommend::{RecommendationEngine, Recommendation, RecommendationKind};
pub use report::MetricsReport;
