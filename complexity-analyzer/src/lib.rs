//! Time-complexity analysis of a code snippet with a single public pipeline.
//!
//! Public API: [`analyze`]. It builds the prompt, asks the injected
//! [`TextGenerator`] for an answer shaped by [`analysis_schema`], and parses
//! the text into an [`AnalysisResponse`]. Anything that is not exactly that
//! shape is an error; nothing is passed through unchecked.

mod api_types;
mod error;
pub mod prompt;
mod schema;

pub use api_types::AnalysisResponse;
pub use error::AnalyzeError;
pub use schema::analysis_schema;

use ai_llm_service::{GenerationRequest, TextGenerator};
use serde::de;
use serde_json::Value;
use tracing::{debug, info, warn};

/// Ask the model about `code` and return its parsed verdict.
///
/// # Errors
/// - [`AnalyzeError::Upstream`] when the generator itself fails.
/// - [`AnalyzeError::EmptyResponse`] when it answers with no text.
/// - [`AnalyzeError::InvalidJson`] / [`AnalyzeError::SchemaMismatch`] when the
///   text is not the requested object.
pub async fn analyze(
    generator: &dyn TextGenerator,
    model: &str,
    code: &str,
) -> Result<AnalysisResponse, AnalyzeError> {
    let prompt = prompt::build_prompt(code);
    let request = GenerationRequest {
        model,
        prompt: &prompt,
        schema: analysis_schema(),
    };

    debug!(model, code_len = code.len(), "requesting complexity analysis");
    let text = generator.generate(request).await?;

    let Some(text) = text else {
        warn!(model, "model returned no text");
        return Err(AnalyzeError::EmptyResponse);
    };

    let analysis = parse_analysis(&text)?;
    info!(model, big_o = %analysis.big_o, complexity = %analysis.complexity, "analysis ready");
    Ok(analysis)
}

/// Parse the model's raw text into an [`AnalysisResponse`].
///
/// Blank text counts as empty. Syntax errors and shape errors are reported
/// separately. Only a JSON object is accepted; serde would otherwise map a
/// positional array onto the struct fields.
pub fn parse_analysis(text: &str) -> Result<AnalysisResponse, AnalyzeError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(AnalyzeError::EmptyResponse);
    }

    let value: Value = serde_json::from_str(text).map_err(AnalyzeError::InvalidJson)?;
    if !value.is_object() {
        return Err(AnalyzeError::SchemaMismatch(de::Error::custom(format!(
            "expected a JSON object, found {}",
            json_kind(&value)
        ))));
    }
    serde_json::from_value(value).map_err(AnalyzeError::SchemaMismatch)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use ai_llm_service::{
        AiLlmError, GenerateFuture, LlmProvider, ProviderError, ProviderErrorKind,
    };

    use super::*;

    /// Replays a canned answer and records what it was asked.
    struct FakeGenerator {
        reply: Mutex<Option<Result<Option<String>, AiLlmError>>>,
        seen: Mutex<Vec<(String, String, String)>>,
    }

    impl FakeGenerator {
        fn answering(text: Option<&str>) -> Self {
            Self::with(Ok(text.map(str::to_string)))
        }

        fn with(reply: Result<Option<String>, AiLlmError>) -> Self {
            Self {
                reply: Mutex::new(Some(reply)),
                seen: Mutex::new(Vec::new()),
            }
        }
    }

    impl TextGenerator for FakeGenerator {
        fn generate<'a>(&'a self, request: GenerationRequest<'a>) -> GenerateFuture<'a> {
            self.seen.lock().unwrap().push((
                request.model.to_string(),
                request.prompt.to_string(),
                request.schema.name.clone(),
            ));
            let reply = self.reply.lock().unwrap().take().expect("single call");
            Box::pin(async move { reply })
        }
    }

    #[tokio::test]
    async fn linear_loop_is_parsed() {
        let fake = FakeGenerator::answering(Some(
            r#"{"bigO":"O(n)","complexity":"Low","description":"Single pass over the input."}"#,
        ));

        let out = analyze(&fake, "gemini-2.5-flash-lite", "for x in xs: total += x")
            .await
            .unwrap();

        assert_eq!(
            out,
            AnalysisResponse {
                big_o: "O(n)".into(),
                complexity: "Low".into(),
                description: "Single pass over the input.".into(),
            }
        );

        let seen = fake.seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].0, "gemini-2.5-flash-lite");
        assert!(seen[0].1.contains("for x in xs: total += x"));
        assert_eq!(seen[0].2, "analysis_response");
    }

    #[tokio::test]
    async fn constant_access_is_parsed() {
        let fake = FakeGenerator::answering(Some(
            "  {\"bigO\":\"O(1)\",\"complexity\":\"Low\",\"description\":\"Index lookup.\"}\n",
        ));

        let out = analyze(&fake, "m", "return arr[0]").await.unwrap();
        assert_eq!(out.big_o, "O(1)");
        assert_eq!(out.description, "Index lookup.");
    }

    #[tokio::test]
    async fn missing_text_is_empty_response() {
        let fake = FakeGenerator::answering(None);
        let err = analyze(&fake, "m", "x").await.unwrap_err();
        assert!(matches!(err, AnalyzeError::EmptyResponse));
        assert_eq!(err.to_string(), "Empty response from AI");
    }

    #[tokio::test]
    async fn blank_text_is_empty_response() {
        let fake = FakeGenerator::answering(Some("   \n"));
        let err = analyze(&fake, "m", "x").await.unwrap_err();
        assert!(matches!(err, AnalyzeError::EmptyResponse));
    }

    #[tokio::test]
    async fn upstream_failure_is_propagated() {
        let fake = FakeGenerator::with(Err(AiLlmError::Provider(ProviderError::new(
            LlmProvider::Gemini,
            ProviderErrorKind::MissingApiKey,
        ))));

        let err = analyze(&fake, "m", "x").await.unwrap_err();
        assert!(matches!(err, AnalyzeError::Upstream(_)));
        assert!(!err.to_string().is_empty());
    }

    #[test]
    fn prose_is_invalid_json() {
        let err = parse_analysis("The code runs in linear time.").unwrap_err();
        assert!(matches!(err, AnalyzeError::InvalidJson(_)));
    }

    #[test]
    fn wrong_shape_is_schema_mismatch() {
        let err = parse_analysis(r#"{"bigO":"O(n)"}"#).unwrap_err();
        assert!(matches!(err, AnalyzeError::SchemaMismatch(_)));

        let err = parse_analysis(r#""O(n)""#).unwrap_err();
        assert!(matches!(err, AnalyzeError::SchemaMismatch(_)));
    }

    #[test]
    fn positional_array_is_schema_mismatch() {
        let err = parse_analysis(r#"["O(n)","Low","Prints each value."]"#).unwrap_err();
        assert!(matches!(err, AnalyzeError::SchemaMismatch(_)));
        assert!(err.to_string().contains("found an array"));
    }

    #[test]
    fn extra_fields_are_dropped() {
        let out = parse_analysis(
            r#"{"bigO":"O(n log n)","complexity":"Medium","description":"Sorts.","confidence":0.9}"#,
        )
        .unwrap();
        let json = serde_json::to_value(&out).unwrap();
        let mut keys: Vec<_> = json.as_object().unwrap().keys().cloned().collect();
        keys.sort();
        assert_eq!(keys, ["bigO", "complexity", "description"]);
    }

    #[test]
    fn schema_lists_fields_in_order() {
        assert_eq!(
            analysis_schema().field_names().collect::<Vec<_>>(),
            ["bigO", "complexity", "description"]
        );
        assert_eq!(analysis_schema().to_json_schema()["additionalProperties"], false);
    }
}
