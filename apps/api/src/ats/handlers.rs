use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use tracing::debug;

use crate::ats::models::ResumeDocument;
use crate::ats::policy::ScoringPolicy;
use crate::ats::scorer::ScoreReport;
use crate::errors::AppError;
use crate::state::AppState;

/// POST /api/v1/ats/score
pub async fn handle_score(
    State(state): State<AppState>,
    payload: Result<Json<ResumeDocument>, JsonRejection>,
) -> Result<Json<ScoreReport>, AppError> {
    let Json(doc) = payload.map_err(reject_payload)?;
    let report = state.scorer.evaluate(&doc);
    debug!(
        score = report.score,
        backend = state.scorer.backend(),
        "Scored resume"
    );
    Ok(Json(report))
}

/// GET /api/v1/ats/policy
pub async fn handle_policy() -> Json<ScoringPolicy> {
    Json(ScoringPolicy::current())
}

fn reject_payload(rejection: JsonRejection) -> AppError {
    match rejection {
        JsonRejection::JsonDataError(e) => AppError::UnprocessableEntity(e.body_text()),
        other if other.status() == StatusCode::PAYLOAD_TOO_LARGE => AppError::PayloadTooLarge,
        other => AppError::Validation(other.body_text()),
    }
}
