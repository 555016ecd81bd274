//! Shared LLM service: the production [`TextGenerator`].
//!
//! - Lives in the same Tokio runtime as the application.
//! - Construct once, wrap in `Arc`, and pass clones to dependents.
//! - Caches underlying HTTP clients per config (provider+endpoint+model+key+timeout).
//! - The model id of each [`GenerationRequest`] overrides the configured one.
//!
//! # Example
//! ```no_run
//! use std::sync::Arc;
//! use ai_llm_service::{
//!     FieldKind, GenerationRequest, LlmService, OutputSchema, TextGenerator, config_from_env,
//! };
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let svc: Arc<dyn TextGenerator> = Arc::new(LlmService::new(config_from_env()?));
//! let schema = OutputSchema::new("haiku", "A haiku").field("text", FieldKind::String, "The poem");
//! let answer = svc
//!     .generate(GenerationRequest { model: "gemini-2.5-flash-lite", prompt: "Rust", schema: &schema })
//!     .await?;
//! println!("{answer:?}");
//! # Ok(()) }
//! ```

use std::{collections::HashMap, sync::Arc};

use tokio::sync::RwLock;
use tracing::debug;

use crate::{
    config::{llm_model_config::LlmModelConfig, llm_provider::LlmProvider},
    error_handler::AiLlmError,
    generator::{GenerateFuture, GenerationRequest, TextGenerator},
    services::{
        gemini_service::GeminiService, ollama_service::OllamaService,
        open_ai_service::OpenAiService,
    },
};

/// Provider-dispatching generator with per-config client caches.
pub struct LlmService {
    cfg: LlmModelConfig,

    gemini: RwLock<HashMap<ClientKey, Arc<GeminiService>>>,
    openai: RwLock<HashMap<ClientKey, Arc<OpenAiService>>>,
    ollama: RwLock<HashMap<ClientKey, Arc<OllamaService>>>,
}

impl LlmService {
    /// Creates a service for the given base config. Clients are built lazily
    /// on first use, so credential problems surface on the first call.
    pub fn new(cfg: LlmModelConfig) -> Self {
        Self {
            cfg,
            gemini: RwLock::new(HashMap::new()),
            openai: RwLock::new(HashMap::new()),
            ollama: RwLock::new(HashMap::new()),
        }
    }

    /// Runs one structured generation against the configured provider.
    ///
    /// # Errors
    /// Returns [`AiLlmError`] if the client cannot be built or the call fails.
    pub async fn generate_structured(
        &self,
        request: GenerationRequest<'_>,
    ) -> Result<Option<String>, AiLlmError> {
        let cfg = if request.model == self.cfg.model {
            self.cfg.clone()
        } else {
            self.cfg.with_model(request.model)
        };

        match cfg.provider {
            LlmProvider::Gemini => {
                let cli = get_or_init(&self.gemini, &cfg, GeminiService::new).await?;
                cli.generate_structured(request.prompt, request.schema).await
            }
            LlmProvider::OpenAI => {
                let cli = get_or_init(&self.openai, &cfg, OpenAiService::new).await?;
                cli.generate_structured(request.prompt, request.schema).await
            }
            LlmProvider::Ollama => {
                let cli = get_or_init(&self.ollama, &cfg, OllamaService::new).await?;
                cli.generate_structured(request.prompt, request.schema).await
            }
        }
    }
}

impl TextGenerator for LlmService {
    fn generate<'a>(&'a self, request: GenerationRequest<'a>) -> GenerateFuture<'a> {
        Box::pin(self.generate_structured(request))
    }
}

/* --------------------- Internals --------------------- */

async fn get_or_init<S, F>(
    cache: &RwLock<HashMap<ClientKey, Arc<S>>>,
    cfg: &LlmModelConfig,
    build: F,
) -> Result<Arc<S>, AiLlmError>
where
    F: FnOnce(LlmModelConfig) -> Result<S, AiLlmError>,
{
    let key = ClientKey::from(cfg);
    if let Some(cli) = cache.read().await.get(&key).cloned() {
        return Ok(cli);
    }

    let mut w = cache.write().await;
    if let Some(cli) = w.get(&key).cloned() {
        return Ok(cli);
    }
    debug!(provider = %cfg.provider, model = %cfg.model, "initializing provider client");
    let cli = Arc::new(build(cfg.clone())?);
    w.insert(key, cli.clone());
    Ok(cli)
}

/// Internal cache key to identify unique client configs.
#[derive(Clone, PartialEq, Eq, Hash)]
struct ClientKey {
    provider: LlmProvider,
    endpoint: String,
    model: String,
    api_key: Option<String>,
    timeout: Option<u64>,
}

impl From<&LlmModelConfig> for ClientKey {
    fn from(cfg: &LlmModelConfig) -> Self {
        Self {
            provider: cfg.provider,
            endpoint: cfg.endpoint.clone(),
            model: cfg.model.clone(),
            api_key: cfg.api_key.clone(),
            timeout: cfg.timeout_secs,
        }
    }
}
