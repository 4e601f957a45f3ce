//! Report assembly.

use adoptmetrics_core::Time;
use serde::Serialize;
use tracing::info;

use crate::{AdoptionAnalysis, MetricsCollector, ProductivityAnalysis, QualityAnalysis, RoiEstimate, Summary};

/// Report generated from one collector.
#[derive(Debug, Clone, Serialize)]
pub struct MetricsReport {
    /// When the report was generated
    pub timestamp: Time,
    /// Executive summary
    pub summary: Summary,
    /// Productivity analysis
    pub productivity: ProductivityAnalysis,
    /// Quality analysis
    pub quality: QualityAnalysis,
    /// Adoption analysis
    pub adoption: AdoptionAnalysis,
    /// Return on investment
    pub roi: RoiEstimate,
    /// Triggered recommendations, in rule order
    pub recommendations: Vec<String>,
}

impl MetricsCollector {
    /// Generate a report over everything collected so far.
    pub fn generate_report(&self) -> MetricsReport {
        info!(
            "Generating metrics report ({} records, {} baselines)",
            self.ledger().len(),
            self.baselines().len()
        );

        let report = MetricsReport {
            timestamp: chrono::Utc::now(),
            summary: self.summary(),
            productivity: self.analyze_productivity(),
            quality: self.analyze_quality(),
            adoption: self.analyze_adoption(),
            roi: self.roi(),
            recommendations: self
                .recommendations()
                .into_iter()
                .map(|r| r.message)
                .collect(),
        };

        info!(
            "Report ready: {} improved, {} recommendations",
            report.summary.metrics_improved,
            report.recommendations.len()
        );
        report
    }
}
