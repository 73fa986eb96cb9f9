use std::sync::Arc;

use crate::analysis::Analyzer;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable analyzer. `HeuristicAnalyzer` by default; `LlmAnalyzer` when
    /// an OpenAI API key is configured.
    pub analyzer: Arc<dyn Analyzer>,
}
