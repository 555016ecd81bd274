//! Shared LLM layer: provider configs, structured-output schemas and a single
//! [`TextGenerator`] capability backed by Gemini, OpenAI or Ollama.
//!
//! Construct one [`LlmService`] at startup, wrap it in `Arc`, and hand it to
//! whatever needs to talk to a model. Tests substitute their own
//! [`TextGenerator`] implementation.

pub mod config;
pub mod error_handler;
pub mod generator;
pub mod llm_service;
pub mod services;
pub mod structured_output;
pub mod telemetry;

pub use config::{
    default_config::config_from_env, llm_model_config::LlmModelConfig, llm_provider::LlmProvider,
};
pub use error_handler::{AiLlmError, ConfigError, ProviderError, ProviderErrorKind};
pub use generator::{GenerateFuture, GenerationRequest, TextGenerator};
pub use llm_service::LlmService;
pub use structured_output::{FieldKind, OutputSchema, SchemaField};
