use std::cmp::Ordering;
use std::collections::BTreeMap;

use serde::Serialize;

use super::super::domain::{EmployeeRecord, RiskTier};
use super::super::scoring::{round_score, ScoringConfig};
use super::views::{DepartmentRisk, EmployeeRiskSnapshot, TierCount};

/// Dashboard-level aggregates over a scored batch.
#[derive(Debug, Clone, Serialize)]
pub struct BatchSummary {
    pub total: usize,
    pub average_score: f64,
    pub tiers: Vec<TierCount>,
    pub departments: Vec<DepartmentRisk>,
    pub highest_risk: Vec<EmployeeRiskSnapshot>,
}

#[derive(Default)]
struct DepartmentTally {
    employees: usize,
    score_sum: f64,
    high_risk: usize,
}

impl BatchSummary {
    pub fn from_records(records: &[EmployeeRecord], config: &ScoringConfig, top: usize) -> Self {
        let total = records.len();
        let score_sum: f64 = records.iter().map(EmployeeRecord::score).sum();
        let average_score = if total == 0 {
            0.0
        } else {
            round_score(score_sum / total as f64)
        };

        let mut tier_counts: BTreeMap<RiskTier, usize> = BTreeMap::new();
        let mut departments: BTreeMap<&str, DepartmentTally> = BTreeMap::new();
        for record in records {
            let tier = record.tier(config);
            *tier_counts.entry(tier).or_default() += 1;

            let tally = departments
                .entry(record.attributes().department.as_str())
                .or_default();
            tally.employees += 1;
            tally.score_sum += record.score();
            if tier == RiskTier::High {
                tally.high_risk += 1;
            }
        }

        let tiers = RiskTier::ordered()
            .into_iter()
            .map(|tier| TierCount {
                tier,
                tier_label: tier.label(),
                count: tier_counts.get(&tier).copied().unwrap_or(0),
            })
            .collect();

        let mut departments: Vec<DepartmentRisk> = departments
            .into_iter()
            .map(|(department, tally)| DepartmentRisk {
                department: department.to_string(),
                employees: tally.employees,
                average_score: round_score(tally.score_sum / tally.employees as f64),
                high_risk: tally.high_risk,
            })
            .collect();
        departments.sort_by(|a, b| {
            b.average_score
                .partial_cmp(&a.average_score)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.department.cmp(&b.department))
        });

        let mut ranked: Vec<&EmployeeRecord> = records.iter().collect();
        // Stable sort keeps input order among equal scores.
        ranked.sort_by(|a, b| b.score().partial_cmp(&a.score()).unwrap_or(Ordering::Equal));
        let highest_risk = ranked
            .into_iter()
            .take(top)
            .map(|record| EmployeeRiskSnapshot {
                name: record.attributes().name.clone(),
                department: record.attributes().department.clone(),
                title: record.attributes().title.clone(),
                score: record.reported_score(),
                risk_tier: record.tier(config),
                top_factor: record.factors().first().map(ToString::to_string),
            })
            .collect();

        Self {
            total,
            average_score,
            tiers,
            departments,
            highest_risk,
        }
    }

    pub fn count(&self, tier: RiskTier) -> usize {
        self.tiers
            .iter()
            .find(|entry| entry.tier == tier)
            .map(|entry| entry.count)
            .unwrap_or(0)
    }
}
