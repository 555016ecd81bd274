use std::sync::Arc;

use axum::{Json, extract::State};
use serde::Serialize;

use crate::core::app_state::AppState;

/// Response payload for `GET /`.
#[derive(Debug, Serialize)]
pub struct RootResponse {
    pub status: &'static str,
    pub message: String,
    pub docs: &'static str,
}

/// Handler: GET /
pub async fn root(State(state): State<Arc<AppState>>) -> Json<RootResponse> {
    Json(RootResponse {
        status: "online",
        message: format!("{} is running", state.service_name),
        docs: "/docs",
    })
}
