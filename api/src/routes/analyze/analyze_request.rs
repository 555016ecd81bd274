use serde::Deserialize;

/// Request payload for /analyze.
#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    /// Source snippet to classify. Any language, any length.
    pub code: String,
}
