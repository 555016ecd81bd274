use std::sync::Arc;

use ai_llm_service::{LlmService, TextGenerator};

use crate::core::config::ApiConfig;

/// Shared state for all HTTP handlers.
#[derive(Clone)]
pub struct AppState {
    /// Reported by `GET /` and `/docs`.
    pub service_name: String,
    /// Model id passed with every analysis request.
    pub model: String,
    /// Text-generation capability; [`LlmService`] in production.
    pub generator: Arc<dyn TextGenerator>,
}

impl AppState {
    pub fn new(
        service_name: impl Into<String>,
        model: impl Into<String>,
        generator: Arc<dyn TextGenerator>,
    ) -> Self {
        Self {
            service_name: service_name.into(),
            model: model.into(),
            generator,
        }
    }

    /// Build the production state. No network I/O happens here; provider
    /// clients are created on the first request.
    pub fn from_config(config: &ApiConfig) -> Self {
        Self::new(
            config.service_name.clone(),
            config.llm.model.clone(),
            Arc::new(LlmService::new(config.llm.clone())),
        )
    }
}
