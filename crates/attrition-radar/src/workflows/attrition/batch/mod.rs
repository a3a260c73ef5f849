//! Batch intake: turns tabular rows into fully scored employee records.
//!
//! A wrong column set fails the whole batch, as does a field named by more
//! than one column; a bad value only rejects its own row, which is reported
//! alongside the records that did parse.

mod mapping;
mod normalizer;
mod parser;

use std::collections::{BTreeMap, BTreeSet};
use std::io::Read;

use serde::Serialize;
use tracing::{debug, info};

use super::domain::{Employee, EmployeeAttributes, EmployeeRecord};
use super::scoring::ScoringConfig;
use mapping::{
    canonical_field, ABSENCE_COUNT, DEPARTMENT, DEVELOPMENT_PLAN, NAME, REQUIRED_FIELDS,
    TENURE_YEARS, TITLE, TRAINING_COUNT,
};

/// One input row: raw column header to raw cell text.
pub type RawRow = BTreeMap<String, String>;

/// Scored records in input order plus every rejected row.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BatchResult {
    pub records: Vec<EmployeeRecord>,
    pub errors: Vec<RowError>,
}

impl BatchResult {
    pub fn rows_seen(&self) -> usize {
        self.records.len() + self.errors.len()
    }
}

/// A row that failed coercion. `row` is 1-based over data rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RowError {
    pub row: usize,
    pub identifier: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SchemaError {
    #[error("missing required field(s): {}", .0.join(", "))]
    MissingFields(Vec<String>),
    #[error("more than one column maps to field(s): {}", .0.join(", "))]
    AmbiguousFields(Vec<String>),
}

#[derive(Debug, thiserror::Error)]
pub enum BatchError {
    #[error("invalid CSV upload: {0}")]
    Csv(#[from] csv::Error),
    #[error(transparent)]
    Schema(#[from] SchemaError),
}

/// Score every row of an in-memory table.
pub fn process(rows: &[RawRow], config: &ScoringConfig) -> Result<BatchResult, SchemaError> {
    let columns: BTreeSet<&str> = rows
        .iter()
        .flat_map(|row| row.keys().map(String::as_str))
        .collect();
    check_schema(columns.into_iter(), !rows.is_empty())?;
    Ok(process_rows(rows, config))
}

/// Decode a CSV upload and score it. Decoding finishes before any row is
/// processed, so a malformed file never yields a partial result.
pub fn process_csv<R: Read>(reader: R, config: &ScoringConfig) -> Result<BatchResult, BatchError> {
    let upload = parser::parse_csv(reader)?;
    check_schema(upload.columns.iter().map(String::as_str), true)?;
    Ok(process_rows(&upload.rows, config))
}

fn check_schema<'a, I>(columns: I, has_columns: bool) -> Result<(), SchemaError>
where
    I: Iterator<Item = &'a str>,
{
    if !has_columns {
        return Ok(());
    }

    let mut sources: BTreeMap<&'static str, usize> = BTreeMap::new();
    for field in columns.filter_map(canonical_field) {
        *sources.entry(field).or_default() += 1;
    }

    let count = |field: &str| sources.get(field).copied().unwrap_or(0);

    let missing: Vec<String> = REQUIRED_FIELDS
        .into_iter()
        .filter(|field| count(*field) == 0)
        .map(str::to_string)
        .collect();
    if !missing.is_empty() {
        return Err(SchemaError::MissingFields(missing));
    }

    let ambiguous: Vec<String> = REQUIRED_FIELDS
        .into_iter()
        .filter(|field| count(*field) > 1)
        .map(str::to_string)
        .collect();
    if !ambiguous.is_empty() {
        return Err(SchemaError::AmbiguousFields(ambiguous));
    }
    Ok(())
}

fn process_rows(rows: &[RawRow], config: &ScoringConfig) -> BatchResult {
    let mut result = BatchResult::default();

    for (index, raw) in rows.iter().enumerate() {
        let row_number = index + 1;
        let fields = canonical_row(raw);

        match build_employee(&fields) {
            Ok(employee) => result.records.push(EmployeeRecord::new(employee, config)),
            Err(message) => {
                let identifier = fields
                    .get(NAME)
                    .map(|name| name.trim())
                    .filter(|name| !name.is_empty())
                    .map(str::to_string)
                    .unwrap_or_else(|| format!("row {row_number}"));
                debug!(row = row_number, %identifier, %message, "rejected input row");
                result.errors.push(RowError {
                    row: row_number,
                    identifier,
                    message,
                });
            }
        }
    }

    info!(
        scored = result.records.len(),
        rejected = result.errors.len(),
        "processed attrition batch"
    );
    result
}

/// Re-key a row by canonical field. The schema check guarantees each field
/// has exactly one source column.
fn canonical_row(raw: &RawRow) -> BTreeMap<&'static str, &str> {
    let mut fields = BTreeMap::new();
    for (header, value) in raw {
        if let Some(field) = canonical_field(header) {
            fields.entry(field).or_insert(value.as_str());
        }
    }
    fields
}

fn build_employee(fields: &BTreeMap<&'static str, &str>) -> Result<Employee, String> {
    let value = |field: &'static str| {
        fields
            .get(field)
            .map(|raw| raw.trim())
            .ok_or_else(|| format!("{field}: value is missing"))
    };

    let name = value(NAME)?;
    if name.is_empty() {
        return Err(format!("{NAME}: must not be blank"));
    }

    let attributes = EmployeeAttributes {
        name: name.to_string(),
        department: value(DEPARTMENT)?.to_string(),
        title: value(TITLE)?.to_string(),
        tenure_years: parse_tenure(value(TENURE_YEARS)?)
            .map_err(|reason| format!("{TENURE_YEARS}: {reason}"))?,
        participated_in_development_plan: parse_flag(value(DEVELOPMENT_PLAN)?)
            .map_err(|reason| format!("{DEVELOPMENT_PLAN}: {reason}"))?,
        training_count: parse_count(value(TRAINING_COUNT)?)
            .map_err(|reason| format!("{TRAINING_COUNT}: {reason}"))?,
        absence_count: parse_count(value(ABSENCE_COUNT)?)
            .map_err(|reason| format!("{ABSENCE_COUNT}: {reason}"))?,
    };

    Employee::new(attributes).map_err(|err| err.to_string())
}

fn parse_decimal(raw: &str) -> Option<f64> {
    let normalized = if !raw.contains('.') && raw.matches(',').count() == 1 {
        raw.replace(',', ".")
    } else {
        raw.to_string()
    };
    normalized.parse::<f64>().ok()
}

fn parse_tenure(raw: &str) -> Result<f64, String> {
    match parse_decimal(raw) {
        Some(years) if years.is_finite() && years >= 0.0 => Ok(years),
        Some(_) => Err(format!("'{raw}' must be a non-negative number of years")),
        None => Err(format!("'{raw}' is not a number")),
    }
}

const TRUTHY: [&str; 7] = ["true", "yes", "y", "1", "sim", "s", "x"];
const FALSY: [&str; 7] = ["false", "no", "n", "0", "nao", "não", ""];

fn parse_flag(raw: &str) -> Result<bool, String> {
    let token = raw.to_lowercase();
    if TRUTHY.contains(&token.as_str()) {
        Ok(true)
    } else if FALSY.contains(&token.as_str()) {
        Ok(false)
    } else {
        Err(format!("'{raw}' is not a recognized yes/no value"))
    }
}

fn parse_count(raw: &str) -> Result<u32, String> {
    if let Ok(count) = raw.parse::<u32>() {
        return Ok(count);
    }

    // Spreadsheet exports often render integers as "3.0".
    match parse_decimal(raw) {
        Some(value) if value.is_finite() && value >= 0.0 && value.fract() == 0.0 => {
            if value <= f64::from(u32::MAX) {
                Ok(value as u32)
            } else {
                Err(format!("'{raw}' is too large"))
            }
        }
        Some(_) => Err(format!("'{raw}' must be a non-negative whole number")),
        None => Err(format!("'{raw}' is not a whole number")),
    }
}
