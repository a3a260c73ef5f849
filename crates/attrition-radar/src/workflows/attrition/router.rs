use std::io::Cursor;
use std::sync::Arc;

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::post,
    Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::warn;

use super::batch::{self, BatchError, BatchResult, RawRow, RowError};
use super::report::{export_rows, write_csv, BatchSummary, ExportRow};
use super::scoring::RiskEngine;

const DEFAULT_TOP: usize = 10;

/// Batch upload: either pre-split rows or raw CSV text.
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ScoreRequest {
    #[serde(default)]
    pub rows: Option<Vec<RawRow>>,
    #[serde(default)]
    pub csv: Option<String>,
    #[serde(default)]
    pub top: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct ScoreResponse {
    pub records: Vec<ExportRow>,
    pub errors: Vec<RowError>,
    pub summary: BatchSummary,
}

/// Router builder exposing the scoring and export endpoints.
pub fn attrition_router(engine: Arc<RiskEngine>) -> Router {
    Router::new()
        .route("/api/v1/attrition/score", post(score_handler))
        .route("/api/v1/attrition/export", post(export_handler))
        .with_state(engine)
}

fn run_batch(engine: &RiskEngine, request: ScoreRequest) -> Result<BatchResult, Response> {
    let outcome = match (request.rows, request.csv) {
        (Some(rows), None) => batch::process(&rows, engine.config()).map_err(BatchError::from),
        (None, Some(csv)) => batch::process_csv(Cursor::new(csv.into_bytes()), engine.config()),
        _ => {
            let payload = json!({
                "error": "provide exactly one of `rows` or `csv`",
            });
            return Err((StatusCode::BAD_REQUEST, axum::Json(payload)).into_response());
        }
    };

    outcome.map_err(|error| {
        warn!(%error, "rejected attrition batch");
        let status = match error {
            BatchError::Schema(_) => StatusCode::UNPROCESSABLE_ENTITY,
            BatchError::Csv(_) => StatusCode::BAD_REQUEST,
        };
        let payload = json!({ "error": error.to_string() });
        (status, axum::Json(payload)).into_response()
    })
}

pub(crate) async fn score_handler(
    State(engine): State<Arc<RiskEngine>>,
    axum::Json(request): axum::Json<ScoreRequest>,
) -> Response {
    let top = request.top.unwrap_or(DEFAULT_TOP);
    let result = match run_batch(&engine, request) {
        Ok(result) => result,
        Err(response) => return response,
    };

    let summary = BatchSummary::from_records(&result.records, engine.config(), top);
    let response = ScoreResponse {
        records: export_rows(&result.records, engine.config()),
        errors: result.errors,
        summary,
    };
    (StatusCode::OK, axum::Json(response)).into_response()
}

pub(crate) async fn export_handler(
    State(engine): State<Arc<RiskEngine>>,
    axum::Json(request): axum::Json<ScoreRequest>,
) -> Response {
    let result = match run_batch(&engine, request) {
        Ok(result) => result,
        Err(response) => return response,
    };

    let mut body = Vec::new();
    if let Err(error) = write_csv(&mut body, &result.records, engine.config()) {
        let payload = json!({ "error": error.to_string() });
        return (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response();
    }

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/csv; charset=utf-8")],
        body,
    )
        .into_response()
}
