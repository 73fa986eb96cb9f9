//! Analysis — pluggable, trait-based analyzer over a resume and job description.
//!
//! Default: `HeuristicAnalyzer` (pure-Rust, deterministic, infallible).
//! Optional: `LlmAnalyzer` (AI-backed via an OpenAI-compatible endpoint),
//! enabled when an API key is configured.
//!
//! `AppState` holds an `Arc<dyn Analyzer>`. The LLM path is strictly
//! best-effort: any transport failure, unparseable reply, or out-of-bounds
//! score makes the caller revert to the deterministic evaluator — an error is
//! never surfaced to the user.

pub mod prompts;

use async_trait::async_trait;
use tracing::warn;

use crate::ats::{self, AtsResult};
use crate::errors::AppError;
use crate::llm_client::LlmClient;
use crate::models::resume::ResumeData;
use self::prompts::{ANALYZE_PROMPT_TEMPLATE, ANALYZE_SYSTEM};

/// The analyzer trait. Implement this to swap backends without touching the
/// endpoint or handler code.
#[async_trait]
pub trait Analyzer: Send + Sync {
    async fn analyze(&self, resume: &ResumeData, job_text: &str) -> Result<AtsResult, AppError>;

    /// Backend label, for logging only.
    fn backend(&self) -> &'static str;
}

/// Runs the analyzer and falls back to the deterministic evaluator on any
/// failure. This is the only entry point handlers use; it cannot fail.
pub async fn analyze_with_fallback(
    analyzer: &dyn Analyzer,
    resume: &ResumeData,
    job_text: &str,
) -> AtsResult {
    match analyzer.analyze(resume, job_text).await {
        Ok(result) => result,
        Err(e) => {
            warn!(
                backend = analyzer.backend(),
                "analysis failed, falling back to heuristic evaluator: {e}"
            );
            ats::evaluate(resume, job_text)
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// HeuristicAnalyzer — deterministic default
// ────────────────────────────────────────────────────────────────────────────

/// Wraps the rule-based evaluator. Never fails.
pub struct HeuristicAnalyzer;

#[async_trait]
impl Analyzer for HeuristicAnalyzer {
    async fn analyze(&self, resume: &ResumeData, job_text: &str) -> Result<AtsResult, AppError> {
        Ok(ats::evaluate(resume, job_text))
    }

    fn backend(&self) -> &'static str {
        "heuristic"
    }
}

// ────────────────────────────────────────────────────────────────────────────
// LlmAnalyzer — AI-backed analysis
// ────────────────────────────────────────────────────────────────────────────

/// Prompts the LLM with the resume JSON plus job text and parses the reply as
/// an `AtsResult`. The reply is validated before it is trusted.
pub struct LlmAnalyzer {
    llm: LlmClient,
}

impl LlmAnalyzer {
    pub fn new(llm: LlmClient) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl Analyzer for LlmAnalyzer {
    async fn analyze(&self, resume: &ResumeData, job_text: &str) -> Result<AtsResult, AppError> {
        let resume_json = serde_json::to_string(resume)
            .map_err(|e| AppError::Llm(format!("resume serialization failed: {e}")))?;

        let prompt = ANALYZE_PROMPT_TEMPLATE
            .replace("{resume_json}", &resume_json)
            .replace("{job_text}", job_text);

        let result: AtsResult = self
            .llm
            .call_json(&prompt, ANALYZE_SYSTEM)
            .await
            .map_err(|e| AppError::Llm(format!("ATS analysis failed: {e}")))?;

        sanitize(result)
    }

    fn backend(&self) -> &'static str {
        "llm"
    }
}

/// Validates an LLM-produced result and normalizes it so downstream consumers
/// can rely on the same invariants the deterministic evaluator guarantees:
/// breakdown components within their [0, max] bounds, `total` equal to their
/// sum, and at most 10 missing keywords.
fn sanitize(mut result: AtsResult) -> Result<AtsResult, AppError> {
    if !result.breakdown.in_bounds() {
        return Err(AppError::Llm(format!(
            "LLM breakdown out of bounds: {:?}",
            result.breakdown
        )));
    }
    // Models drift on arithmetic; the breakdown is authoritative.
    result.total = result.breakdown.sum();
    result.missing_keywords.truncate(10);
    Ok(result)
}
