use std::fmt;

use serde::{Deserialize, Serialize};

use super::scoring::{self, RiskFactor, ScoringConfig};

/// Raw HR indicators for one employee, as captured at intake.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeAttributes {
    pub name: String,
    pub department: String,
    pub title: String,
    pub tenure_years: f64,
    pub participated_in_development_plan: bool,
    pub training_count: u32,
    pub absence_count: u32,
}

/// Structured flags derived from an external profile document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileSignals {
    pub recently_active: bool,
    pub frequent_changes: bool,
    pub recent_certifications: bool,
}

impl ProfileSignals {
    pub fn any(&self) -> bool {
        self.recently_active || self.frequent_changes || self.recent_certifications
    }
}

/// Validated scoring input: attributes plus any attached profile signals.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Employee {
    attributes: EmployeeAttributes,
    signals: Option<ProfileSignals>,
}

impl Employee {
    pub fn new(attributes: EmployeeAttributes) -> Result<Self, InvalidEmployee> {
        if attributes.name.trim().is_empty() {
            return Err(InvalidEmployee::BlankName);
        }
        if !attributes.tenure_years.is_finite() || attributes.tenure_years < 0.0 {
            return Err(InvalidEmployee::Tenure(attributes.tenure_years));
        }

        Ok(Self {
            attributes,
            signals: None,
        })
    }

    pub fn with_signals(mut self, signals: ProfileSignals) -> Self {
        self.signals = Some(signals);
        self
    }

    pub fn attributes(&self) -> &EmployeeAttributes {
        &self.attributes
    }

    pub fn signals(&self) -> Option<&ProfileSignals> {
        self.signals.as_ref()
    }

    pub fn name(&self) -> &str {
        &self.attributes.name
    }
}

/// Mutable view handed to [`EmployeeRecord::update`]; validated before the
/// record accepts it.
#[derive(Debug)]
pub struct EmployeeDraft {
    pub attributes: EmployeeAttributes,
    pub signals: Option<ProfileSignals>,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InvalidEmployee {
    #[error("employee name must not be blank")]
    BlankName,
    #[error("tenure must be a finite, non-negative number of years (got {0})")]
    Tenure(f64),
}

/// Derived output of the scoring pipeline, always produced as a unit.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RiskAssessment {
    pub score: f64,
    pub factors: Vec<RiskFactor>,
    pub recommendations: Vec<String>,
}

impl RiskAssessment {
    pub fn evaluate(employee: &Employee, config: &ScoringConfig) -> Self {
        let score = scoring::score(employee, config);
        let factors = scoring::factors(employee, config);
        let recommendations = scoring::recommendations(&factors, employee);

        Self {
            score,
            factors,
            recommendations,
        }
    }
}

/// An employee together with an assessment that always matches its inputs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmployeeRecord {
    employee: Employee,
    assessment: RiskAssessment,
}

impl EmployeeRecord {
    pub fn new(employee: Employee, config: &ScoringConfig) -> Self {
        let assessment = RiskAssessment::evaluate(&employee, config);
        Self {
            employee,
            assessment,
        }
    }

    pub fn employee(&self) -> &Employee {
        &self.employee
    }

    pub fn attributes(&self) -> &EmployeeAttributes {
        self.employee.attributes()
    }

    pub fn signals(&self) -> Option<&ProfileSignals> {
        self.employee.signals()
    }

    pub fn assessment(&self) -> &RiskAssessment {
        &self.assessment
    }

    pub fn score(&self) -> f64 {
        self.assessment.score
    }

    pub fn factors(&self) -> &[RiskFactor] {
        &self.assessment.factors
    }

    pub fn recommendations(&self) -> &[String] {
        &self.assessment.recommendations
    }

    /// Score rounded to one decimal, as exported and displayed.
    pub fn reported_score(&self) -> f64 {
        scoring::round_score(self.assessment.score)
    }

    /// Tier of the reported score, so an exported boundary value always
    /// lands in the lower tier.
    pub fn tier(&self, config: &ScoringConfig) -> RiskTier {
        scoring::classify(self.reported_score(), config)
    }

    /// Re-derive the assessment, e.g. after switching configuration.
    pub fn recompute(&mut self, config: &ScoringConfig) {
        self.assessment = RiskAssessment::evaluate(&self.employee, config);
    }

    pub fn attach_signals(&mut self, signals: ProfileSignals, config: &ScoringConfig) {
        self.employee.signals = Some(signals);
        self.recompute(config);
    }

    /// Apply an edit to the inputs. The edit is validated first; on failure the
    /// record is left exactly as it was.
    pub fn update<F>(&mut self, edit: F, config: &ScoringConfig) -> Result<(), InvalidEmployee>
    where
        F: FnOnce(&mut EmployeeDraft),
    {
        let mut draft = EmployeeDraft {
            attributes: self.employee.attributes.clone(),
            signals: self.employee.signals,
        };
        edit(&mut draft);

        let mut employee = Employee::new(draft.attributes)?;
        employee.signals = draft.signals;

        self.employee = employee;
        self.recompute(config);
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RiskTier {
    Low,
    Medium,
    High,
}

impl RiskTier {
    pub const fn ordered() -> [Self; 3] {
        [Self::Low, Self::Medium, Self::High]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

impl fmt::Display for RiskTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}
