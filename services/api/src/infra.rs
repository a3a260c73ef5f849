use attrition_radar::config::{AppConfig, ScoringSource};
use attrition_radar::error::AppError;
use attrition_radar::workflows::attrition::ScoringConfig;
use metrics_exporter_prometheus::PrometheusHandle;
use std::path::PathBuf;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Scoring configuration for one-shot commands: an explicit file wins over
/// `RADAR_SCORING_CONFIG`.
pub(crate) fn scoring_config(path: Option<PathBuf>) -> Result<ScoringConfig, AppError> {
    let source = match path {
        Some(path) => ScoringSource::File(path),
        None => AppConfig::load()?.scoring,
    };
    Ok(source.resolve()?)
}

/// Parses `NAME=PATH` pairs given to `--profile`.
pub(crate) fn parse_profile_arg(raw: &str) -> Result<(String, PathBuf), String> {
    let (name, path) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected NAME=PATH, got '{raw}'"))?;
    let name = name.trim();
    let path = path.trim();
    if name.is_empty() || path.is_empty() {
        return Err(format!("expected NAME=PATH, got '{raw}'"));
    }
    Ok((name.to_string(), PathBuf::from(path)))
}
