use serde::{Deserialize, Serialize};

/// Structured verdict returned to callers of `/analyze`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResponse {
    /// Big-O notation, e.g. `O(n log n)`.
    #[serde(rename = "bigO")]
    pub big_o: String,
    /// Qualitative label, e.g. `Low`, `Medium`, `High`.
    pub complexity: String,
    /// One or two sentences explaining the verdict.
    pub description: String,
}
