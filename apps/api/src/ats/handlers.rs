//! Axum route handlers for the ATS API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::analysis::analyze_with_fallback;
use crate::ats::{self, AtsResult};
use crate::errors::AppError;
use crate::models::resume::ResumeData;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeRequest {
    pub resume: ResumeData,
    /// Pasted job description. Optional: scoring without one simply yields
    /// zero relevance.
    #[serde(default)]
    pub job_text: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeywordsRequest {
    pub job_text: String,
}

#[derive(Debug, Serialize)]
pub struct KeywordsResponse {
    pub keywords: Vec<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/ats/evaluate
///
/// Deterministic rule-based evaluation. Always succeeds; absent fields are
/// treated as empty collections.
pub async fn handle_evaluate(
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<AtsResult>, AppError> {
    Ok(Json(ats::evaluate(&request.resume, &request.job_text)))
}

/// POST /api/v1/ats/analyze
///
/// Evaluation through the configured analyzer — AI-backed when an API key is
/// set, heuristic otherwise. A failing AI call falls back to the heuristic
/// result rather than erroring.
pub async fn handle_analyze(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<AtsResult>, AppError> {
    info!(backend = state.analyzer.backend(), "analyzing resume");
    let result = analyze_with_fallback(state.analyzer.as_ref(), &request.resume, &request.job_text)
        .await;
    Ok(Json(result))
}

/// POST /api/v1/ats/keywords
///
/// Keyword-extraction preview: what the relevance scorer will match against.
/// Useful before pasting a resume in.
pub async fn handle_keywords(
    Json(request): Json<KeywordsRequest>,
) -> Result<Json<KeywordsResponse>, AppError> {
    if request.job_text.trim().is_empty() {
        return Err(AppError::Validation("jobText cannot be empty".to_string()));
    }

    Ok(Json(KeywordsResponse {
        keywords: ats::keywords::extract_keywords(&request.job_text),
    }))
}
