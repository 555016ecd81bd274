//! Typed error for the complexity-analyzer crate.

use ai_llm_service::AiLlmError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AnalyzeError {
    /// The upstream model call failed (transport, status, credentials).
    #[error(transparent)]
    Upstream(#[from] AiLlmError),

    /// The model answered without any text.
    #[error("Empty response from AI")]
    EmptyResponse,

    /// The model's text is not JSON at all.
    #[error("AI response is not valid JSON: {0}")]
    InvalidJson(#[source] serde_json::Error),

    /// Valid JSON, but not the requested analysis shape.
    #[error("AI response does not match the analysis schema: {0}")]
    SchemaMismatch(#[source] serde_json::Error),
}
