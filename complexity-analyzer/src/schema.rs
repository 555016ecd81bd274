//! Output schema requested from the model.
//!
//! Kept apart from the HTTP request type: this is what the model must produce,
//! not what clients send.

use std::sync::LazyLock;

use ai_llm_service::{FieldKind, OutputSchema};

static ANALYSIS_SCHEMA: LazyLock<OutputSchema> = LazyLock::new(|| {
    OutputSchema::new(
        "analysis_response",
        "Time complexity analysis of a code snippet.",
    )
    .field(
        "bigO",
        FieldKind::String,
        "The time complexity in Big O notation (e.g., 'O(n)', 'O(1)', 'O(n log n)'). \
         Do not use descriptions like 'linear' or 'constant'.",
    )
    .field(
        "complexity",
        FieldKind::String,
        "A qualitative assessment of the complexity (e.g., 'Low', 'Medium', 'High').",
    )
    .field(
        "description",
        FieldKind::String,
        "A brief explanation (1-2 sentences) of why this time complexity applies to the code.",
    )
});

/// Schema of [`crate::AnalysisResponse`] as sent to the model.
pub fn analysis_schema() -> &'static OutputSchema {
    &ANALYSIS_SCHEMA
}
