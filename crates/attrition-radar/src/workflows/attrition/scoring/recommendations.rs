use std::collections::HashSet;

use super::super::domain::Employee;
use super::factors::{FactorKind, RiskFactor, Severity};

pub const FALLBACK_RECOMMENDATION: &str = "Maintain regular monitoring";

/// Map factors to suggested actions, keeping first occurrence order.
/// Never returns an empty list.
pub fn recommendations(factors: &[RiskFactor], employee: &Employee) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut out = Vec::new();

    for factor in factors {
        for action in actions_for(factor, employee) {
            if seen.insert(action.clone()) {
                out.push(action);
            }
        }
    }

    if out.is_empty() {
        out.push(FALLBACK_RECOMMENDATION.to_string());
    }
    out
}

fn actions_for(factor: &RiskFactor, employee: &Employee) -> Vec<String> {
    let attributes = employee.attributes();
    let critical = factor.severity == Severity::Critical;

    match factor.kind {
        FactorKind::Tenure => {
            let mut actions = vec!["Assign an onboarding mentor".to_string()];
            if critical {
                actions.push("Schedule 30/60/90-day check-ins".to_string());
            }
            actions
        }
        FactorKind::DevelopmentPlan => {
            let mut actions = vec!["Enroll in an individual development plan (PDI)".to_string()];
            if factor.severity >= Severity::Warning {
                actions.push("Discuss career progression and promotion paths".to_string());
            }
            actions
        }
        FactorKind::Training => {
            let mut actions = vec!["Map skill gaps with the direct manager".to_string()];
            if factor.severity >= Severity::Warning {
                let sessions = if attributes.training_count == 0 { 2 } else { 1 };
                actions.push(format!(
                    "Schedule at least {sessions} training session(s) this quarter"
                ));
            }
            actions
        }
        FactorKind::Absence => {
            let mut actions =
                vec!["Hold a one-on-one conversation about recent absences".to_string()];
            if critical {
                actions.push("Refer to the employee wellbeing and support program".to_string());
            }
            actions
        }
        FactorKind::Combination => vec![format!(
            "Escalate {} to the HR business partner for an immediate retention plan",
            attributes.name
        )],
        FactorKind::ProfileActivity => vec!["Conduct a stay interview".to_string()],
        FactorKind::JobMobility => vec![
            "Conduct a stay interview".to_string(),
            "Review compensation and career path competitiveness".to_string(),
        ],
        FactorKind::Certification => {
            vec!["Recognize new certifications with stretch assignments".to_string()]
        }
    }
}
