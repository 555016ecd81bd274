//! GET /docs returns a static description of the HTTP surface.

use std::sync::Arc;

use axum::{Json, extract::State};
use complexity_analyzer::analysis_schema;
use serde_json::{Value, json};

use crate::core::app_state::AppState;

/// Handler: GET /docs
pub async fn docs(State(state): State<Arc<AppState>>) -> Json<Value> {
    Json(json!({
        "title": state.service_name,
        "model": state.model,
        "routes": [
            { "method": "GET", "path": "/", "summary": "Service status" },
            { "method": "GET", "path": "/docs", "summary": "This document" },
            {
                "method": "POST",
                "path": "/analyze",
                "summary": "Time complexity of a code snippet",
                "request": "AnalyzeRequest",
                "response": "AnalysisResponse",
                "errors": "ErrorResponse"
            }
        ],
        "schemas": {
            "AnalyzeRequest": {
                "type": "object",
                "properties": { "code": { "type": "string" } },
                "required": ["code"]
            },
            "AnalysisResponse": analysis_schema().to_json_schema(),
            "ErrorResponse": {
                "type": "object",
                "properties": { "detail": { "type": "string" } },
                "required": ["detail"]
            }
        }
    }))
}
