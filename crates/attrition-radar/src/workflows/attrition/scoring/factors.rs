use std::fmt;

use serde::{Deserialize, Serialize};

use super::super::domain::Employee;
use super::config::ScoringConfig;
use super::rules::{
    AbsenceLevel, ConditionProfile, DevelopmentGap, DevelopmentPlanStatus, TenureBand,
    TrainingLevel,
};

/// Category of a reported risk factor; recommendations key off this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FactorKind {
    Tenure,
    DevelopmentPlan,
    Training,
    Absence,
    Combination,
    ProfileActivity,
    JobMobility,
    Certification,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Info,
    Warning,
    Critical,
}

impl Severity {
    pub const fn label(self) -> &'static str {
        match self {
            Severity::Info => "Info",
            Severity::Warning => "Warning",
            Severity::Critical => "Critical",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskFactor {
    pub kind: FactorKind,
    pub severity: Severity,
    pub description: String,
}

impl RiskFactor {
    fn new(kind: FactorKind, severity: Severity, description: impl Into<String>) -> Self {
        Self {
            kind,
            severity,
            description: description.into(),
        }
    }
}

impl fmt::Display for RiskFactor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.severity.label(), self.description)
    }
}

/// Risk factors in calculator order: tenure, development plan, training,
/// absences, combination alerts, then profile signals.
pub fn factors(employee: &Employee, config: &ScoringConfig) -> Vec<RiskFactor> {
    let conditions = ConditionProfile::evaluate(employee, config);
    let mut out = Vec::new();

    push_tenure(&mut out, &conditions, config);
    push_development_plan(&mut out, &conditions);
    push_training(&mut out, &conditions, config);
    push_absence(&mut out, &conditions, config);
    push_combinations(&mut out, &conditions);
    push_profile(&mut out, &conditions);

    out
}

fn push_tenure(out: &mut Vec<RiskFactor>, conditions: &ConditionProfile, config: &ScoringConfig) {
    let years = conditions.tenure_years;
    let factor = match conditions.tenure {
        TenureBand::VeryNew => RiskFactor::new(
            FactorKind::Tenure,
            Severity::Critical,
            format!(
                "very recent hire ({years:.1} years, inside the {:.1}-year onboarding window)",
                config.tenure.critical_years
            ),
        ),
        TenureBand::Junior => RiskFactor::new(
            FactorKind::Tenure,
            Severity::Warning,
            format!(
                "short tenure ({years:.1} years, under {:.1} year)",
                config.tenure.junior_years
            ),
        ),
        TenureBand::Settling => RiskFactor::new(
            FactorKind::Tenure,
            Severity::Info,
            format!(
                "tenure of {years:.1} years is below the {:.1}-year stability mark",
                config.tenure.stable_years
            ),
        ),
        TenureBand::Stable => return,
    };
    out.push(factor);
}

fn push_development_plan(out: &mut Vec<RiskFactor>, conditions: &ConditionProfile) {
    let years = conditions.tenure_years;
    let factor = match conditions.development_plan {
        DevelopmentPlanStatus::Participating => return,
        DevelopmentPlanStatus::Missing(DevelopmentGap::Long) => RiskFactor::new(
            FactorKind::DevelopmentPlan,
            Severity::Critical,
            format!("{years:.1} years without a development plan (PDI)"),
        ),
        DevelopmentPlanStatus::Missing(DevelopmentGap::Established) => RiskFactor::new(
            FactorKind::DevelopmentPlan,
            Severity::Warning,
            format!("no development plan (PDI) after {years:.1} years"),
        ),
        DevelopmentPlanStatus::Missing(DevelopmentGap::Early | DevelopmentGap::Onboarding) => {
            RiskFactor::new(
                FactorKind::DevelopmentPlan,
                Severity::Info,
                "not yet enrolled in a development plan (PDI)",
            )
        }
    };
    out.push(factor);
}

fn push_training(out: &mut Vec<RiskFactor>, conditions: &ConditionProfile, config: &ScoringConfig) {
    let count = conditions.training_count;
    let minimum = config.training.minimum;
    let factor = match (conditions.established, conditions.training) {
        (_, TrainingLevel::Adequate) => return,
        (true, TrainingLevel::None) => RiskFactor::new(
            FactorKind::Training,
            Severity::Critical,
            "no trainings completed despite established tenure",
        ),
        (true, TrainingLevel::BelowMinimum) => RiskFactor::new(
            FactorKind::Training,
            Severity::Warning,
            format!("only {count} training(s) completed (minimum {minimum})"),
        ),
        (false, _) => RiskFactor::new(
            FactorKind::Training,
            Severity::Info,
            format!("{count} training(s) so far during onboarding (minimum {minimum})"),
        ),
    };
    out.push(factor);
}

fn push_absence(out: &mut Vec<RiskFactor>, conditions: &ConditionProfile, config: &ScoringConfig) {
    let count = conditions.absence_count;
    let factor = match conditions.absence {
        AbsenceLevel::None | AbsenceLevel::Occasional => return,
        AbsenceLevel::Warning => RiskFactor::new(
            FactorKind::Absence,
            Severity::Warning,
            format!("{count} absences recorded"),
        ),
        AbsenceLevel::Critical | AbsenceLevel::Extreme if conditions.severe_absence => {
            RiskFactor::new(
                FactorKind::Absence,
                Severity::Critical,
                format!(
                    "severe absence level ({count} absences, at or above {})",
                    config.absence.severe
                ),
            )
        }
        AbsenceLevel::Critical | AbsenceLevel::Extreme => RiskFactor::new(
            FactorKind::Absence,
            Severity::Critical,
            format!(
                "high absence count ({count}, critical threshold {})",
                config.absence.critical
            ),
        ),
    };
    out.push(factor);
}

fn push_combinations(out: &mut Vec<RiskFactor>, conditions: &ConditionProfile) {
    if conditions.critical_combination {
        out.push(RiskFactor::new(
            FactorKind::Combination,
            Severity::Critical,
            "combined alert: long tenure, no development plan, few trainings and high absences",
        ));
    }
    if conditions.disengagement_combination {
        out.push(RiskFactor::new(
            FactorKind::Combination,
            Severity::Critical,
            "combined alert: established employee with no development plan and no trainings",
        ));
    }
}

fn push_profile(out: &mut Vec<RiskFactor>, conditions: &ConditionProfile) {
    if conditions.recently_active {
        out.push(RiskFactor::new(
            FactorKind::ProfileActivity,
            Severity::Warning,
            "recent activity on professional profile",
        ));
    }
    if conditions.frequent_changes {
        out.push(RiskFactor::new(
            FactorKind::JobMobility,
            Severity::Warning,
            "history of frequent job changes",
        ));
    }
    if conditions.recent_certifications {
        out.push(RiskFactor::new(
            FactorKind::Certification,
            Severity::Info,
            "recently earned certifications",
        ));
    }
}
