//! Default LLM config loaded from environment variables.
//!
//! # Environment variables
//!
//! Common:
//! - `LLM_PROVIDER`     = `gemini` (default), `openai` or `ollama`
//! - `ANALYSIS_MODEL`   = model id (provider default when unset; required for Ollama)
//! - `LLM_MAX_TOKENS`   = optional max tokens (u32)
//! - `LLM_TEMPERATURE`  = optional sampling temperature (0.0..=2.0)
//! - `LLM_TIMEOUT_SECS` = optional request timeout (u64)
//!
//! Gemini:
//! - `GEMINI_API_KEY` = API key. Not checked here: a missing key fails the first call.
//! - `GEMINI_URL`     = API base (default `https://generativelanguage.googleapis.com`)
//!
//! OpenAI:
//! - `OPENAI_API_KEY`, `OPENAI_URL` (default `https://api.openai.com`)
//!
//! Ollama:
//! - `OLLAMA_URL` or `OLLAMA_PORT` = endpoint (mandatory)

use crate::{
    config::{llm_model_config::LlmModelConfig, llm_provider::LlmProvider},
    error_handler::{
        AiLlmError, ConfigError, must_var, opt_f32, opt_u32, opt_u64, opt_var,
        validate_http_endpoint, validate_range_f32,
    },
};

pub const DEFAULT_GEMINI_ENDPOINT: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.5-flash-lite";
pub const DEFAULT_OPENAI_ENDPOINT: &str = "https://api.openai.com";
pub const DEFAULT_OPENAI_MODEL: &str = "gpt-4o-mini";

/// Reads the analysis model config from the process environment.
///
/// # Errors
/// See [`config_from_lookup`].
pub fn config_from_env() -> Result<LlmModelConfig, AiLlmError> {
    config_from_lookup(|name| std::env::var(name).ok())
}

/// Builds the analysis model config from an arbitrary variable source.
///
/// # Errors
/// - [`ConfigError::UnsupportedProvider`] for an unknown `LLM_PROVIDER`
/// - [`ConfigError::MissingVar`] when Ollama has no endpoint or model
/// - [`ConfigError::InvalidNumber`] / [`ConfigError::OutOfRange`] for bad knobs
/// - [`ConfigError::InvalidFormat`] if an endpoint is not http(s)
pub fn config_from_lookup<F>(lookup: F) -> Result<LlmModelConfig, AiLlmError>
where
    F: Fn(&str) -> Option<String>,
{
    let provider = match opt_var(&lookup, "LLM_PROVIDER") {
        Some(raw) => raw.parse::<LlmProvider>()?,
        None => LlmProvider::Gemini,
    };

    let (endpoint, endpoint_var, api_key, model) = match provider {
        LlmProvider::Gemini => (
            opt_var(&lookup, "GEMINI_URL").unwrap_or_else(|| DEFAULT_GEMINI_ENDPOINT.into()),
            "GEMINI_URL",
            opt_var(&lookup, "GEMINI_API_KEY"),
            opt_var(&lookup, "ANALYSIS_MODEL").unwrap_or_else(|| DEFAULT_GEMINI_MODEL.into()),
        ),
        LlmProvider::OpenAI => (
            opt_var(&lookup, "OPENAI_URL").unwrap_or_else(|| DEFAULT_OPENAI_ENDPOINT.into()),
            "OPENAI_URL",
            opt_var(&lookup, "OPENAI_API_KEY"),
            opt_var(&lookup, "ANALYSIS_MODEL").unwrap_or_else(|| DEFAULT_OPENAI_MODEL.into()),
        ),
        LlmProvider::Ollama => (
            ollama_endpoint(&lookup)?,
            "OLLAMA_URL",
            None,
            must_var(&lookup, "ANALYSIS_MODEL")?,
        ),
    };
    validate_http_endpoint(endpoint_var, &endpoint)?;

    let temperature = opt_f32(&lookup, "LLM_TEMPERATURE")?;
    if let Some(t) = temperature {
        validate_range_f32("temperature", "expected 0.0..=2.0", t, 0.0, 2.0)?;
    }
    let top_p = opt_f32(&lookup, "LLM_TOP_P")?;
    if let Some(p) = top_p {
        validate_range_f32("top_p", "expected 0.0..=1.0", p, 0.0, 1.0)?;
    }

    Ok(LlmModelConfig {
        provider,
        model,
        endpoint,
        api_key,
        max_tokens: opt_u32(&lookup, "LLM_MAX_TOKENS")?,
        temperature,
        top_p,
        timeout_secs: opt_u64(&lookup, "LLM_TIMEOUT_SECS")?,
    })
}

/// Resolves the Ollama endpoint.
///
/// Precedence:
/// 1. `OLLAMA_URL` if present and non-empty
/// 2. `OLLAMA_PORT` → `http://localhost:{port}`
fn ollama_endpoint<F>(lookup: &F) -> Result<String, AiLlmError>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(url) = opt_var(lookup, "OLLAMA_URL") {
        return Ok(url);
    }
    if let Some(port) = opt_var(lookup, "OLLAMA_PORT") {
        port.parse::<u16>().map_err(|_| ConfigError::InvalidNumber {
            var: "OLLAMA_PORT",
            reason: "expected u16 (1..=65535)",
        })?;
        return Ok(format!("http://localhost:{port}"));
    }
    Err(ConfigError::MissingVar("OLLAMA_URL or OLLAMA_PORT").into())
}
