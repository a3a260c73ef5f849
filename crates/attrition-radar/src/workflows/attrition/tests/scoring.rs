use super::common::*;
use crate::workflows::attrition::domain::{EmployeeRecord, ProfileSignals, RiskTier};
use crate::workflows::attrition::scoring::{
    breakdown, classify, factors, recommendations, score, FactorKind, Severity,
    FALLBACK_RECOMMENDATION,
};

const TENURES: [f64; 12] = [0.0, 0.25, 0.49, 0.5, 0.9, 1.0, 1.5, 2.0, 3.0, 4.99, 5.0, 12.0];
const COUNTS: [u32; 9] = [0, 1, 2, 3, 4, 5, 10, 20, 60];

fn grid() -> impl Iterator<Item = (f64, bool, u32, u32)> {
    TENURES.into_iter().flat_map(|tenure| {
        [false, true].into_iter().flat_map(move |participated| {
            COUNTS.into_iter().flat_map(move |trainings| {
                COUNTS
                    .into_iter()
                    .map(move |absences| (tenure, participated, trainings, absences))
            })
        })
    })
}

#[test]
fn worst_case_employee_is_clamped_to_high() {
    let config = reference_config();
    let subject = employee(7.0, false, 0, 50);

    let parts = breakdown(&subject, &config);
    assert_eq!(parts.tenure, 0.0);
    assert_eq!(parts.development_plan, 30.0);
    assert_eq!(parts.training, 25.0);
    assert_eq!(parts.absence, 20.0);
    assert!(parts.severe_absence_bonus > 0.0);
    assert!(parts.critical_combination_bonus > 0.0);

    let value = score(&subject, &config);
    assert_eq!(value, 100.0);
    assert_eq!(classify(value, &config), RiskTier::High);
}

#[test]
fn engaged_employee_is_low_risk_with_fallback_action() {
    let config = reference_config();
    let subject = employee(2.5, true, 4, 2);

    let parts = breakdown(&subject, &config);
    assert_eq!(parts.critical_combination_bonus, 0.0);
    assert_eq!(parts.disengagement_combination_bonus, 0.0);

    let value = score(&subject, &config);
    assert_eq!(value, 4.0);
    assert_eq!(classify(value, &config), RiskTier::Low);

    let found = factors(&subject, &config);
    assert!(found.is_empty());
    assert_eq!(
        recommendations(&found, &subject),
        [FALLBACK_RECOMMENDATION.to_string()]
    );
}

#[test]
fn score_stays_within_bounds_for_every_profile() {
    let config = reference_config();
    let signals = ProfileSignals {
        recently_active: true,
        frequent_changes: true,
        recent_certifications: true,
    };
    for (tenure, participated, trainings, absences) in grid() {
        let plain = employee(tenure, participated, trainings, absences);
        let flagged = plain.clone().with_signals(signals);
        for subject in [plain, flagged] {
            let value = score(&subject, &config);
            assert!(
                (0.0..=100.0).contains(&value),
                "score {value} out of range for {subject:?}"
            );
        }
    }
}

#[test]
fn score_never_decreases_as_absences_grow() {
    let config = reference_config();
    for tenure in TENURES {
        for participated in [false, true] {
            for trainings in COUNTS {
                let mut previous = 0.0;
                for absences in 0..=60 {
                    let value = score(&employee(tenure, participated, trainings, absences), &config);
                    assert!(
                        value >= previous,
                        "score dropped at {absences} absences (tenure {tenure}, trainings {trainings})"
                    );
                    previous = value;
                }
            }
        }
    }
}

#[test]
fn score_never_increases_with_tenure_past_stability_for_plan_participants() {
    let config = reference_config();
    let stable = config.tenure.stable_years;
    for trainings in COUNTS {
        for absences in COUNTS {
            let mut previous = f64::INFINITY;
            for step in 0..=40 {
                let tenure = stable + step as f64 * 0.5;
                let value = score(&employee(tenure, true, trainings, absences), &config);
                assert!(value <= previous, "score rose at tenure {tenure}");
                previous = value;
            }
        }
    }
}

#[test]
fn empty_factor_list_implies_no_warning_condition() {
    let config = reference_config();
    for (tenure, participated, trainings, absences) in grid() {
        let subject = employee(tenure, participated, trainings, absences);
        if factors(&subject, &config).is_empty() {
            assert!(tenure >= config.tenure.stable_years);
            assert!(participated);
            assert!(trainings >= config.training.minimum);
            assert!(absences < config.absence.warning);
        }
    }
}

#[test]
fn recommendations_are_never_empty() {
    let config = reference_config();
    for (tenure, participated, trainings, absences) in grid() {
        let subject = employee(tenure, participated, trainings, absences);
        let found = factors(&subject, &config);
        assert!(!recommendations(&found, &subject).is_empty());
    }
}

#[test]
fn factor_severity_tracks_tenure_context_for_missing_plan() {
    let config = reference_config();
    let severity_for = |tenure: f64| {
        factors(&employee(tenure, false, 4, 0), &config)
            .into_iter()
            .find(|factor| factor.kind == FactorKind::DevelopmentPlan)
            .map(|factor| factor.severity)
    };
    assert_eq!(severity_for(0.3), Some(Severity::Info));
    assert_eq!(severity_for(3.0), Some(Severity::Warning));
    assert_eq!(severity_for(9.0), Some(Severity::Critical));
}

#[test]
fn changing_configuration_requires_explicit_recompute() {
    let config = reference_config();
    let mut record = EmployeeRecord::new(employee(3.0, false, 1, 4), &config);
    let original = record.score();

    let mut heavier = config.clone();
    heavier.weights.absence = 0.6;
    assert_eq!(record.score(), original);

    record.recompute(&heavier);
    assert!(record.score() > original);
    assert_eq!(record.score(), score(record.employee(), &heavier));
}
