mod export;
mod summary;
pub mod views;

pub use export::{export_rows, write_csv, write_json, ExportError};
pub use summary::BatchSummary;
pub use views::{DepartmentRisk, EmployeeRiskSnapshot, ExportRow, TierCount, LIST_SEPARATOR};
