//! Process-level configuration for the HTTP service.

use ai_llm_service::{
    LlmModelConfig, config::default_config::config_from_lookup, error_handler::opt_var,
};

use crate::error_handler::AppError;

pub const DEFAULT_API_ADDRESS: &str = "127.0.0.1:8000";
pub const DEFAULT_SERVICE_NAME: &str = "Flow Visualizer Backend";

/// Everything `start` needs, resolved once at startup.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Socket address to bind, e.g. `127.0.0.1:8000`.
    pub address: String,
    /// Name reported by `GET /` and `/docs`.
    pub service_name: String,
    /// Model used for `/analyze`.
    pub llm: LlmModelConfig,
}

impl ApiConfig {
    /// Load from process environment (call after `dotenvy`).
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load from an arbitrary variable source.
    ///
    /// # Errors
    /// [`AppError::Config`] for an unknown provider, a bad number or an
    /// invalid endpoint.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let llm = config_from_lookup(&lookup)?;

        Ok(Self {
            address: opt_var(&lookup, "API_ADDRESS").unwrap_or_else(|| DEFAULT_API_ADDRESS.into()),
            service_name: opt_var(&lookup, "SERVICE_NAME")
                .unwrap_or_else(|| DEFAULT_SERVICE_NAME.into()),
            llm,
        })
    }
}
