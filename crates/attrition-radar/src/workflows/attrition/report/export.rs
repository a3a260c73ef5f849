use std::io::Write;

use super::super::domain::EmployeeRecord;
use super::super::scoring::ScoringConfig;
use super::views::ExportRow;

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("failed to write CSV export: {0}")]
    Csv(#[from] csv::Error),
    #[error("failed to write JSON export: {0}")]
    Json(#[from] serde_json::Error),
    #[error("failed to flush export: {0}")]
    Io(#[from] std::io::Error),
}

pub fn export_rows(records: &[EmployeeRecord], config: &ScoringConfig) -> Vec<ExportRow> {
    records
        .iter()
        .map(|record| ExportRow::from_record(record, config))
        .collect()
}

pub fn write_csv<W: Write>(
    writer: W,
    records: &[EmployeeRecord],
    config: &ScoringConfig,
) -> Result<(), ExportError> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for row in export_rows(records, config) {
        csv_writer.serialize(row)?;
    }
    csv_writer.flush()?;
    Ok(())
}

pub fn write_json<W: Write>(
    writer: W,
    records: &[EmployeeRecord],
    config: &ScoringConfig,
) -> Result<(), ExportError> {
    serde_json::to_writer_pretty(writer, &export_rows(records, config))?;
    Ok(())
}
