//! POST /analyze asks the model for the time complexity of a snippet.

use std::sync::Arc;

use axum::{Json, extract::State, extract::rejection::JsonRejection};
use complexity_analyzer::{AnalysisResponse, analyze};
use tracing::{Span, error, field, info, instrument};

use crate::{
    core::app_state::AppState, error_handler::AppResult,
    routes::analyze::analyze_request::AnalyzeRequest,
};

/// Handler: POST /analyze
///
/// # Example
/// ```bash
/// curl -X POST http://127.0.0.1:8000/analyze \
///   -H 'content-type: application/json' \
///   -d '{"code":"for i in range(n): print(i)"}'
/// ```
#[instrument(name = "analyze", skip_all, fields(model = %state.model, code_len = field::Empty))]
pub async fn analyze_code(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<AnalyzeRequest>, JsonRejection>,
) -> AppResult<Json<AnalysisResponse>> {
    let Json(body) = payload?;
    Span::current().record("code_len", body.code.len());

    match analyze(state.generator.as_ref(), &state.model, &body.code).await {
        Ok(analysis) => {
            info!(big_o = %analysis.big_o, "analyze ok");
            Ok(Json(analysis))
        }
        Err(e) => {
            error!(error = %e, "analyze failed");
            Err(e.into())
        }
    }
}
