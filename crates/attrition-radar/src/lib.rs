//! Rule-based employee attrition risk scoring.
//!
//! The engine maps HR indicators to a bounded score, risk factors and
//! recommended actions. Upload parsing, export writers and the HTTP router
//! are thin collaborators around it.

pub mod config;
pub mod error;
pub mod telemetry;
pub mod workflows;
