mod config;
mod factors;
mod policy;
mod recommendations;
mod rules;

pub use config::{
    AbsenceThresholds, BonusPoints, FactorWeights, ScoringConfig, ScoringConfigError,
    TenureThresholds, TierThresholds, TrainingThresholds,
};
pub use factors::{factors, FactorKind, RiskFactor, Severity};
pub use policy::{classify, round_score};
pub use recommendations::{recommendations, FALLBACK_RECOMMENDATION};
pub use rules::{
    breakdown, score, AbsenceLevel, DevelopmentGap, DevelopmentPlanStatus, ScoreBreakdown,
    TenureBand, TrainingLevel,
};

use super::domain::{Employee, EmployeeRecord, RiskTier};

/// Holds one configuration and applies it to every record it scores.
#[derive(Debug, Clone, Default)]
pub struct RiskEngine {
    config: ScoringConfig,
}

impl RiskEngine {
    pub fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    pub fn assess(&self, employee: Employee) -> EmployeeRecord {
        EmployeeRecord::new(employee, &self.config)
    }

    pub fn breakdown(&self, employee: &Employee) -> ScoreBreakdown {
        rules::breakdown(employee, &self.config)
    }

    pub fn tier(&self, record: &EmployeeRecord) -> RiskTier {
        record.tier(&self.config)
    }
}
