use std::sync::Arc;

use axum::body::to_bytes;
use axum::response::Response;
use serde_json::Value;

use crate::workflows::attrition::batch::RawRow;
use crate::workflows::attrition::domain::{Employee, EmployeeAttributes, EmployeeRecord};
use crate::workflows::attrition::scoring::{RiskEngine, ScoringConfig};

/// Reference configuration used by the worked examples.
pub(super) fn reference_config() -> ScoringConfig {
    let mut config = ScoringConfig::default();
    config.weights.tenure = 0.25;
    config.weights.development_plan = 0.30;
    config.weights.training = 0.25;
    config.weights.absence = 0.20;
    config.tenure.critical_years = 0.5;
    config.training.minimum = 2;
    config.absence.critical = 5;
    config.tiers.low_max = 20.0;
    config.tiers.medium_max = 45.0;
    config
}

pub(super) fn engine() -> Arc<RiskEngine> {
    Arc::new(RiskEngine::new(reference_config()))
}

pub(super) fn attributes(
    name: &str,
    tenure_years: f64,
    participated: bool,
    training_count: u32,
    absence_count: u32,
) -> EmployeeAttributes {
    EmployeeAttributes {
        name: name.to_string(),
        department: "Operations".to_string(),
        title: "Coordinator".to_string(),
        tenure_years,
        participated_in_development_plan: participated,
        training_count,
        absence_count,
    }
}

pub(super) fn employee(
    tenure_years: f64,
    participated: bool,
    training_count: u32,
    absence_count: u32,
) -> Employee {
    Employee::new(attributes(
        "Fixture Employee",
        tenure_years,
        participated,
        training_count,
        absence_count,
    ))
    .expect("fixture employee is valid")
}

pub(super) fn record(
    name: &str,
    department: &str,
    tenure_years: f64,
    participated: bool,
    training_count: u32,
    absence_count: u32,
) -> EmployeeRecord {
    let mut attributes = attributes(name, tenure_years, participated, training_count, absence_count);
    attributes.department = department.to_string();
    let employee = Employee::new(attributes).expect("fixture employee is valid");
    EmployeeRecord::new(employee, &reference_config())
}

pub(super) fn raw_row(fields: &[(&str, &str)]) -> RawRow {
    fields
        .iter()
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .collect()
}

pub(super) fn row(
    name: &str,
    tenure: &str,
    participated: &str,
    trainings: &str,
    absences: &str,
) -> RawRow {
    raw_row(&[
        ("Name", name),
        ("Department", "Finance"),
        ("Title", "Analyst"),
        ("Tenure Years", tenure),
        ("Participated In Development Plan", participated),
        ("Training Count", trainings),
        ("Absence Count", absences),
    ])
}

pub(super) fn roster() -> Vec<RawRow> {
    vec![
        row("Ana Souza", "7.0", "no", "0", "50"),
        row("Bruno Lima", "2.5", "yes", "4", "2"),
        row("Carla Dias", "0.3", "no", "0", "1"),
        row("Diego Alves", "3", "sim", "1", "6"),
    ]
}

pub(super) const ROSTER_CSV: &str = "Name,Department,Job Title,Tenure,PDI,Trainings,Absences\n\
Ana Souza,Finance,Analyst,7.0,no,0,50\n\
Bruno Lima,Finance,Analyst,\"2,5\",yes,4,2\n\
Carla Dias,Sales,Representative,0.3,no,0,1\n\
Eva Rocha,Sales,Manager,abc,yes,2,0\n";

pub(super) async fn json_body(response: Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body readable");
    serde_json::from_slice(&bytes).expect("body is json")
}
