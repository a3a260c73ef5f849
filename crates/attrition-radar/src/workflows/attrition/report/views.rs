use serde::Serialize;

use super::super::domain::{EmployeeRecord, RiskTier};
use super::super::scoring::ScoringConfig;

pub const LIST_SEPARATOR: &str = "; ";

/// Flat record surface consumed by export writers and API responses.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExportRow {
    pub name: String,
    pub department: String,
    pub title: String,
    pub tenure_years: f64,
    pub participated_in_development_plan: bool,
    pub training_count: u32,
    pub absence_count: u32,
    pub recently_active: Option<bool>,
    pub frequent_changes: Option<bool>,
    pub recent_certifications: Option<bool>,
    pub score: f64,
    pub risk_tier: RiskTier,
    pub factors: String,
    pub recommendations: String,
}

impl ExportRow {
    pub fn from_record(record: &EmployeeRecord, config: &ScoringConfig) -> Self {
        let attributes = record.attributes();
        let signals = record.signals();

        Self {
            name: attributes.name.clone(),
            department: attributes.department.clone(),
            title: attributes.title.clone(),
            tenure_years: attributes.tenure_years,
            participated_in_development_plan: attributes.participated_in_development_plan,
            training_count: attributes.training_count,
            absence_count: attributes.absence_count,
            recently_active: signals.map(|s| s.recently_active),
            frequent_changes: signals.map(|s| s.frequent_changes),
            recent_certifications: signals.map(|s| s.recent_certifications),
            score: record.reported_score(),
            risk_tier: record.tier(config),
            factors: record
                .factors()
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(LIST_SEPARATOR),
            recommendations: record.recommendations().join(LIST_SEPARATOR),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TierCount {
    pub tier: RiskTier,
    pub tier_label: &'static str,
    pub count: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct DepartmentRisk {
    pub department: String,
    pub employees: usize,
    pub average_score: f64,
    pub high_risk: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct EmployeeRiskSnapshot {
    pub name: String,
    pub department: String,
    pub title: String,
    pub score: f64,
    pub risk_tier: RiskTier,
    pub top_factor: Option<String>,
}
