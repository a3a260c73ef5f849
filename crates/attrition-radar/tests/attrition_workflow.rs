//! End-to-end scenarios for attrition scoring through the public workflow API:
//! configuration, batch intake, record edits, profile signals, and export.

use std::io::Cursor;

use attrition_radar::workflows::attrition::{
    apply_profile_document, classify, process_csv, score, write_csv, BatchSummary, Employee,
    EmployeeAttributes, FactorKind, InvalidEmployee, RiskEngine, RiskTier, ScoringConfig,
    ScoringConfigError, SignalError,
};

const UPLOAD: &str = "\u{feff}Employee Name,Dept,Role,Years of Service,Development Plan,Trainings,Absences\n\
Ana Souza,Finance,Analyst,7.0,no,0,50\n\
Bruno Lima,Finance,Analyst,2.5,yes,4,2\n\
Carla Dias,Sales,Representative,0.3,no,0,1\n\
Diego Alves,Support,Agent,3,yes,1,6\n\
Eva Rocha,Sales,Manager,4,perhaps,2,0\n";

const REFERENCE_YEAR: i32 = 2025;

fn reference_config() -> ScoringConfig {
    ScoringConfig::from_json(
        r#"{
            "weights": { "tenure": 0.25, "development_plan": 0.30, "training": 0.25, "absence": 0.20 },
            "tiers": { "low_max": 20.0, "medium_max": 45.0 },
            "tenure": { "critical_years": 0.5 },
            "training": { "minimum": 2 },
            "absence": { "critical": 5 }
        }"#,
    )
    .expect("reference configuration is valid")
}

fn attributes(
    tenure_years: f64,
    participated: bool,
    trainings: u32,
    absences: u32,
) -> EmployeeAttributes {
    EmployeeAttributes {
        name: "Integration Employee".to_string(),
        department: "Operations".to_string(),
        title: "Coordinator".to_string(),
        tenure_years,
        participated_in_development_plan: participated,
        training_count: trainings,
        absence_count: absences,
    }
}

#[test]
fn partial_configuration_keeps_defaults_for_unspecified_sections() {
    let config = reference_config();
    let defaults = ScoringConfig::default();

    assert_eq!(config.absence.critical, 5);
    assert_eq!(config.absence.severe, defaults.absence.severe);
    assert_eq!(config.bonuses.critical_combination, defaults.bonuses.critical_combination);
}

#[test]
fn inverted_tiers_are_rejected() {
    let error = ScoringConfig::from_json(r#"{ "tiers": { "low_max": 60.0, "medium_max": 40.0 } }"#)
        .expect_err("low_max above medium_max");
    assert!(matches!(error, ScoringConfigError::Invalid { .. }));
    assert!(error.to_string().starts_with("tiers:"));
}

#[test]
fn upload_is_scored_with_row_level_rejections() {
    let config = reference_config();
    let result = process_csv(Cursor::new(UPLOAD), &config).expect("upload accepted");

    assert_eq!(result.records.len(), 4);
    assert_eq!(result.errors.len(), 1);
    assert_eq!(result.errors[0].identifier, "Eva Rocha");
    assert!(result.errors[0].message.contains("'perhaps'"));

    let tiers: Vec<RiskTier> = result
        .records
        .iter()
        .map(|record| record.tier(&config))
        .collect();
    assert_eq!(
        tiers,
        [RiskTier::High, RiskTier::Low, RiskTier::High, RiskTier::Medium]
    );

    let summary = BatchSummary::from_records(&result.records, &config, 3);
    assert_eq!(summary.total, 4);
    assert_eq!(summary.highest_risk[0].name, "Ana Souza");
}

#[test]
fn edits_rescore_atomically_and_invalid_edits_are_discarded() {
    let config = reference_config();
    let engine = RiskEngine::new(config.clone());
    let employee = Employee::new(attributes(6.0, false, 0, 4)).expect("valid employee");
    let mut record = engine.assess(employee);
    let before = record.clone();

    let error = record
        .update(|draft| draft.attributes.tenure_years = f64::NAN, &config)
        .expect_err("NaN tenure rejected");
    assert!(matches!(error, InvalidEmployee::Tenure(value) if value.is_nan()));
    assert_eq!(record, before);

    record
        .update(
            |draft| {
                draft.attributes.participated_in_development_plan = true;
                draft.attributes.training_count = 3;
            },
            &config,
        )
        .expect("valid edit");
    assert!(record.score() < before.score());
    assert_eq!(record.score(), score(record.employee(), &config));
    assert!(record
        .factors()
        .iter()
        .all(|factor| factor.kind != FactorKind::DevelopmentPlan));
}

#[test]
fn profile_signals_raise_the_score_and_add_factors() {
    let config = reference_config();
    let employee = Employee::new(attributes(3.0, true, 3, 0)).expect("valid employee");
    let mut record = RiskEngine::new(config.clone()).assess(employee);
    assert_eq!(classify(record.score(), &config), RiskTier::Low);

    let profile = "Open to work\n\
Northwind, Analyst, 2024 - present\n\
Contoso, Analyst, 2022 - 2024\n\
Fabrikam, Intern, 2021 - 2022\n";
    let signals = apply_profile_document(&mut record, profile, REFERENCE_YEAR, &config)
        .expect("signals extracted");

    assert!(signals.recently_active);
    assert!(signals.frequent_changes);
    assert_eq!(record.score(), 25.0);
    assert_eq!(record.tier(&config), RiskTier::Medium);
    let kinds: Vec<FactorKind> = record.factors().iter().map(|factor| factor.kind).collect();
    assert_eq!(kinds, [FactorKind::ProfileActivity, FactorKind::JobMobility]);

    let unchanged = record.clone();
    let error = apply_profile_document(&mut record, "", REFERENCE_YEAR, &config)
        .expect_err("empty document");
    assert!(matches!(error, SignalError::EmptyDocument));
    assert_eq!(record, unchanged);
}

#[test]
fn csv_export_round_trips_through_a_reader() {
    let config = reference_config();
    let result = process_csv(Cursor::new(UPLOAD), &config).expect("upload accepted");
    let mut buffer = Vec::new();

    write_csv(&mut buffer, &result.records, &config).expect("export written");

    let mut reader = csv::Reader::from_reader(buffer.as_slice());
    let headers = reader.headers().expect("header row").clone();
    let tier_column = headers
        .iter()
        .position(|header| header == "risk_tier")
        .expect("tier column present");
    let tiers: Vec<String> = reader
        .records()
        .map(|row| row.expect("row parses")[tier_column].to_string())
        .collect();
    assert_eq!(tiers, ["High", "Low", "High", "Medium"]);
}
