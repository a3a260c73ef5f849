use std::path::Path;

use serde::{Deserialize, Serialize};

/// Weights and thresholds driving every scoring rule.
///
/// Treated as read-only for the lifetime of a batch. Records scored under an
/// older configuration keep their values until explicitly recomputed.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    pub weights: FactorWeights,
    pub tiers: TierThresholds,
    pub tenure: TenureThresholds,
    pub training: TrainingThresholds,
    pub absence: AbsenceThresholds,
    pub bonuses: BonusPoints,
}

/// Multipliers applied to each 0-100 sub-score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FactorWeights {
    pub tenure: f64,
    pub development_plan: f64,
    pub training: f64,
    pub absence: f64,
    /// Scales the flat profile-signal bonuses.
    pub profile_signal: f64,
}

impl Default for FactorWeights {
    fn default() -> Self {
        Self {
            tenure: 0.25,
            development_plan: 0.30,
            training: 0.25,
            absence: 0.20,
            profile_signal: 1.0,
        }
    }
}

/// Inclusive upper bounds of the Low and Medium tiers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TierThresholds {
    pub low_max: f64,
    pub medium_max: f64,
}

impl Default for TierThresholds {
    fn default() -> Self {
        Self {
            low_max: 20.0,
            medium_max: 45.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TenureThresholds {
    /// Below this an employee is still in the onboarding window.
    pub critical_years: f64,
    pub junior_years: f64,
    /// At or above this tenure no longer adds risk on its own.
    pub stable_years: f64,
    pub long_years: f64,
}

impl Default for TenureThresholds {
    fn default() -> Self {
        Self {
            critical_years: 0.5,
            junior_years: 1.0,
            stable_years: 2.0,
            long_years: 5.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrainingThresholds {
    pub minimum: u32,
    /// Tenure from which the stricter training standard applies.
    pub established_years: f64,
}

impl Default for TrainingThresholds {
    fn default() -> Self {
        Self {
            minimum: 2,
            established_years: 1.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AbsenceThresholds {
    pub warning: u32,
    pub critical: u32,
    /// Sub-score reaches its maximum here.
    pub extreme: u32,
    /// Adds the flat severe-absence bonus.
    pub severe: u32,
}

impl Default for AbsenceThresholds {
    fn default() -> Self {
        Self {
            warning: 3,
            critical: 5,
            extreme: 10,
            severe: 20,
        }
    }
}

/// Flat points added outside the weighted sum.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BonusPoints {
    pub severe_absence: f64,
    pub critical_combination: f64,
    pub disengagement_combination: f64,
    pub recently_active: f64,
    pub frequent_changes: f64,
}

impl Default for BonusPoints {
    fn default() -> Self {
        Self {
            severe_absence: 15.0,
            critical_combination: 20.0,
            disengagement_combination: 10.0,
            recently_active: 10.0,
            frequent_changes: 15.0,
        }
    }
}

impl ScoringConfig {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, ScoringConfigError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json(&raw)
    }

    pub fn from_json(raw: &str) -> Result<Self, ScoringConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ScoringConfigError> {
        let non_negative = [
            ("weights.tenure", self.weights.tenure),
            ("weights.development_plan", self.weights.development_plan),
            ("weights.training", self.weights.training),
            ("weights.absence", self.weights.absence),
            ("weights.profile_signal", self.weights.profile_signal),
            ("bonuses.severe_absence", self.bonuses.severe_absence),
            ("bonuses.critical_combination", self.bonuses.critical_combination),
            (
                "bonuses.disengagement_combination",
                self.bonuses.disengagement_combination,
            ),
            ("bonuses.recently_active", self.bonuses.recently_active),
            ("bonuses.frequent_changes", self.bonuses.frequent_changes),
            ("tenure.critical_years", self.tenure.critical_years),
            ("training.established_years", self.training.established_years),
        ];
        for (field, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(ScoringConfigError::invalid(
                    field,
                    format!("must be a finite, non-negative number (got {value})"),
                ));
            }
        }

        if !self.tiers.low_max.is_finite() || !self.tiers.medium_max.is_finite() {
            return Err(ScoringConfigError::invalid(
                "tiers",
                "tier boundaries must be finite",
            ));
        }
        if self.tiers.low_max >= self.tiers.medium_max {
            return Err(ScoringConfigError::invalid(
                "tiers",
                format!(
                    "low_max ({}) must be below medium_max ({})",
                    self.tiers.low_max, self.tiers.medium_max
                ),
            ));
        }

        let tenure = &self.tenure;
        let tenure_ordered = tenure.critical_years < tenure.junior_years
            && tenure.junior_years <= tenure.stable_years
            && tenure.stable_years <= tenure.long_years
            && tenure.long_years.is_finite();
        if !tenure_ordered {
            return Err(ScoringConfigError::invalid(
                "tenure",
                "expected critical_years < junior_years <= stable_years <= long_years",
            ));
        }

        let absence = &self.absence;
        if !(absence.warning <= absence.critical
            && absence.critical <= absence.extreme
            && absence.extreme <= absence.severe)
        {
            return Err(ScoringConfigError::invalid(
                "absence",
                "expected warning <= critical <= extreme <= severe",
            ));
        }

        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ScoringConfigError {
    #[error("failed to read scoring configuration: {0}")]
    Io(#[from] std::io::Error),
    #[error("scoring configuration is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("{field}: {reason}")]
    Invalid { field: String, reason: String },
}

impl ScoringConfigError {
    fn invalid(field: &str, reason: impl Into<String>) -> Self {
        Self::Invalid {
            field: field.to_string(),
            reason: reason.into(),
        }
    }
}
