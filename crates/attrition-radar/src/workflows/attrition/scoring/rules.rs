use serde::Serialize;

use super::super::domain::Employee;
use super::config::ScoringConfig;

pub(crate) const MAX_SCORE: f64 = 100.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TenureBand {
    VeryNew,
    Junior,
    Settling,
    Stable,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DevelopmentPlanStatus {
    Participating,
    /// Not enrolled; the band is the tenure context that sets the penalty.
    Missing(DevelopmentGap),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DevelopmentGap {
    Onboarding,
    Early,
    Established,
    Long,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TrainingLevel {
    None,
    BelowMinimum,
    Adequate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AbsenceLevel {
    None,
    Occasional,
    Warning,
    Critical,
    Extreme,
}

/// Band classification shared by the score calculator and the factor
/// identifier, so both read the exact same thresholds.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ConditionProfile {
    pub tenure_years: f64,
    pub tenure: TenureBand,
    pub development_plan: DevelopmentPlanStatus,
    pub established: bool,
    pub training_count: u32,
    pub training: TrainingLevel,
    pub absence_count: u32,
    pub absence: AbsenceLevel,
    pub severe_absence: bool,
    pub critical_combination: bool,
    pub disengagement_combination: bool,
    pub recently_active: bool,
    pub frequent_changes: bool,
    pub recent_certifications: bool,
}

impl ConditionProfile {
    pub(crate) fn evaluate(employee: &Employee, config: &ScoringConfig) -> Self {
        let attributes = employee.attributes();
        let tenure_years = attributes.tenure_years.max(0.0);
        let participated = attributes.participated_in_development_plan;
        let training_count = attributes.training_count;
        let absence_count = attributes.absence_count;

        let tenure = tenure_band(tenure_years, config);

        let development_plan = if participated {
            DevelopmentPlanStatus::Participating
        } else {
            let thresholds = &config.tenure;
            let gap = if tenure_years < thresholds.junior_years {
                DevelopmentGap::Onboarding
            } else if tenure_years < thresholds.stable_years {
                DevelopmentGap::Early
            } else if tenure_years < thresholds.long_years {
                DevelopmentGap::Established
            } else {
                DevelopmentGap::Long
            };
            DevelopmentPlanStatus::Missing(gap)
        };

        let established = tenure_years >= config.training.established_years;
        let training = if training_count == 0 {
            TrainingLevel::None
        } else if training_count < config.training.minimum {
            TrainingLevel::BelowMinimum
        } else {
            TrainingLevel::Adequate
        };

        let absence = absence_level(absence_count, config);
        let severe_absence = absence_count >= config.absence.severe;

        let critical_combination = tenure_years >= config.tenure.long_years
            && !participated
            && training_count < config.training.minimum
            && absence_count >= config.absence.critical;
        let disengagement_combination =
            tenure_years >= config.tenure.stable_years && !participated && training_count == 0;

        let signals = employee.signals().copied().unwrap_or_default();

        Self {
            tenure_years,
            tenure,
            development_plan,
            established,
            training_count,
            training,
            absence_count,
            absence,
            severe_absence,
            critical_combination,
            disengagement_combination,
            recently_active: signals.recently_active,
            frequent_changes: signals.frequent_changes,
            recent_certifications: signals.recent_certifications,
        }
    }
}

fn tenure_band(tenure_years: f64, config: &ScoringConfig) -> TenureBand {
    let thresholds = &config.tenure;
    if tenure_years < thresholds.critical_years {
        TenureBand::VeryNew
    } else if tenure_years < thresholds.junior_years {
        TenureBand::Junior
    } else if tenure_years < thresholds.stable_years {
        TenureBand::Settling
    } else {
        TenureBand::Stable
    }
}

fn absence_level(absence_count: u32, config: &ScoringConfig) -> AbsenceLevel {
    let thresholds = &config.absence;
    if absence_count == 0 {
        AbsenceLevel::None
    } else if absence_count < thresholds.warning {
        AbsenceLevel::Occasional
    } else if absence_count < thresholds.critical {
        AbsenceLevel::Warning
    } else if absence_count < thresholds.extreme {
        AbsenceLevel::Critical
    } else {
        AbsenceLevel::Extreme
    }
}

fn tenure_sub_score(band: TenureBand) -> f64 {
    match band {
        TenureBand::VeryNew => 100.0,
        TenureBand::Junior => 60.0,
        TenureBand::Settling => 30.0,
        TenureBand::Stable => 0.0,
    }
}

fn development_plan_sub_score(status: DevelopmentPlanStatus) -> f64 {
    match status {
        DevelopmentPlanStatus::Participating => 0.0,
        DevelopmentPlanStatus::Missing(DevelopmentGap::Onboarding) => 40.0,
        DevelopmentPlanStatus::Missing(DevelopmentGap::Early) => 70.0,
        DevelopmentPlanStatus::Missing(DevelopmentGap::Established) => 90.0,
        DevelopmentPlanStatus::Missing(DevelopmentGap::Long) => 100.0,
    }
}

fn training_sub_score(established: bool, level: TrainingLevel) -> f64 {
    match (established, level) {
        (_, TrainingLevel::Adequate) => 0.0,
        (true, TrainingLevel::None) => 100.0,
        (true, TrainingLevel::BelowMinimum) => 60.0,
        (false, TrainingLevel::None) => 40.0,
        (false, TrainingLevel::BelowMinimum) => 20.0,
    }
}

fn absence_sub_score(level: AbsenceLevel) -> f64 {
    match level {
        AbsenceLevel::None => 0.0,
        AbsenceLevel::Occasional => 20.0,
        AbsenceLevel::Warning => 50.0,
        AbsenceLevel::Critical => 80.0,
        AbsenceLevel::Extreme => 100.0,
    }
}

/// Every contribution to a score, weighted and flat, before clamping.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    pub tenure: f64,
    pub development_plan: f64,
    pub training: f64,
    pub absence: f64,
    pub severe_absence_bonus: f64,
    pub critical_combination_bonus: f64,
    pub disengagement_combination_bonus: f64,
    pub profile_signal_bonus: f64,
}

impl ScoreBreakdown {
    pub(crate) fn from_conditions(conditions: &ConditionProfile, config: &ScoringConfig) -> Self {
        let weights = &config.weights;
        let bonuses = &config.bonuses;

        let flag = |enabled: bool, points: f64| if enabled { points } else { 0.0 };

        let profile_signal_bonus = weights.profile_signal
            * (flag(conditions.recently_active, bonuses.recently_active)
                + flag(conditions.frequent_changes, bonuses.frequent_changes));

        Self {
            tenure: weights.tenure * tenure_sub_score(conditions.tenure),
            development_plan: weights.development_plan
                * development_plan_sub_score(conditions.development_plan),
            training: weights.training
                * training_sub_score(conditions.established, conditions.training),
            absence: weights.absence * absence_sub_score(conditions.absence),
            severe_absence_bonus: flag(conditions.severe_absence, bonuses.severe_absence),
            critical_combination_bonus: flag(
                conditions.critical_combination,
                bonuses.critical_combination,
            ),
            disengagement_combination_bonus: flag(
                conditions.disengagement_combination,
                bonuses.disengagement_combination,
            ),
            profile_signal_bonus,
        }
    }

    pub fn weighted_total(&self) -> f64 {
        self.tenure + self.development_plan + self.training + self.absence
    }

    pub fn flat_total(&self) -> f64 {
        self.severe_absence_bonus
            + self.critical_combination_bonus
            + self.disengagement_combination_bonus
            + self.profile_signal_bonus
    }

    pub fn total(&self) -> f64 {
        (self.weighted_total() + self.flat_total()).clamp(0.0, MAX_SCORE)
    }
}

/// Contribution breakdown for display alongside a score.
pub fn breakdown(employee: &Employee, config: &ScoringConfig) -> ScoreBreakdown {
    let conditions = ConditionProfile::evaluate(employee, config);
    ScoreBreakdown::from_conditions(&conditions, config)
}

/// Attrition risk score in `[0, 100]`.
pub fn score(employee: &Employee, config: &ScoringConfig) -> f64 {
    breakdown(employee, config).total()
}
