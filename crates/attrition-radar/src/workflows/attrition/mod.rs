//! Employee attrition risk: scoring engine, batch intake, profile signals,
//! and the reporting surface built on top of them.

pub mod batch;
pub mod domain;
pub mod insights;
pub mod report;
pub mod router;
pub mod scoring;
pub mod signals;

#[cfg(test)]
mod tests;

pub use batch::{process, process_csv, BatchError, BatchResult, RawRow, RowError, SchemaError};
pub use domain::{
    Employee, EmployeeAttributes, EmployeeDraft, EmployeeRecord, InvalidEmployee, ProfileSignals,
    RiskAssessment, RiskTier,
};
pub use insights::{InsightError, Summarizer, TemplateSummarizer};
pub use report::{export_rows, write_csv, write_json, BatchSummary, ExportError, ExportRow};
pub use router::attrition_router;
pub use scoring::{
    breakdown, classify, factors, recommendations, round_score, score, FactorKind, RiskEngine,
    RiskFactor, ScoreBreakdown, ScoringConfig, ScoringConfigError, Severity,
};
pub use signals::{
    apply_profile_document, current_reference_year, extract_signals, read_profile_document,
    SignalError,
};
