//! Prompt builder for the complexity question.

use crate::schema::analysis_schema;

/// Build the user prompt sent alongside the output schema.
///
/// The prompt names the requested fields and then embeds the snippet verbatim
/// as the last block.
///
/// # Example
/// ```
/// # use complexity_analyzer::prompt::build_prompt;
/// let prompt = build_prompt("for x in xs { sum += x; }");
/// assert!(prompt.contains("bigO"));
/// assert!(prompt.ends_with("for x in xs { sum += x; }"));
/// ```
pub fn build_prompt(code: &str) -> String {
    let fields = analysis_schema().field_names().collect::<Vec<_>>().join(", ");
    format!(
        "Analyze the time complexity, for example: O(n) or O(n^2), and purpose of this code.\n\
         Answer with a JSON object with the fields: {fields}.\n\n\
         Code:\n{code}"
    )
}
