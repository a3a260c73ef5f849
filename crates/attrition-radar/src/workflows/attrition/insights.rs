use super::domain::{EmployeeRecord, RiskTier};
use super::scoring::Severity;

#[derive(Debug, thiserror::Error)]
pub enum InsightError {
    #[error("narrative provider unavailable: {0}")]
    Unavailable(String),
}

/// Optional narrative collaborator. Scoring never depends on it.
pub trait Summarizer {
    fn summarize(&self, record: &EmployeeRecord, tier: RiskTier) -> Result<String, InsightError>;
}

/// Deterministic, template-based narrative.
#[derive(Debug, Default, Clone, Copy)]
pub struct TemplateSummarizer;

impl Summarizer for TemplateSummarizer {
    fn summarize(&self, record: &EmployeeRecord, tier: RiskTier) -> Result<String, InsightError> {
        let attributes = record.attributes();
        let critical: Vec<&str> = record
            .factors()
            .iter()
            .filter(|factor| factor.severity == Severity::Critical)
            .map(|factor| factor.description.as_str())
            .collect();

        let mut narrative = format!(
            "{} ({}, {}) has a {} attrition risk score of {:.1}.",
            attributes.name,
            attributes.title,
            attributes.department,
            tier.label().to_lowercase(),
            record.score()
        );

        if critical.is_empty() {
            match record.factors().first() {
                Some(factor) => {
                    narrative.push_str(&format!(" Main point of attention: {}.", factor.description))
                }
                None => narrative.push_str(" No risk factor currently stands out."),
            }
        } else {
            narrative.push_str(&format!(" Critical signals: {}.", critical.join("; ")));
        }

        if let Some(action) = record.recommendations().first() {
            narrative.push_str(&format!(" Suggested next step: {action}."));
        }

        Ok(narrative)
    }
}
