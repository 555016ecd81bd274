use std::{future::Future, pin::Pin};

use crate::{error_handler::AiLlmError, structured_output::OutputSchema};

/// One structured-generation call: which model, what to ask, what shape to answer in.
#[derive(Debug, Clone, Copy)]
pub struct GenerationRequest<'a> {
    pub model: &'a str,
    pub prompt: &'a str,
    pub schema: &'a OutputSchema,
}

/// Boxed future returned by [`TextGenerator::generate`].
pub type GenerateFuture<'a> =
    Pin<Box<dyn Future<Output = Result<Option<String>, AiLlmError>> + Send + 'a>>;

/// Text-generation capability with structured JSON output.
///
/// Implement this trait to plug in a model backend; [`crate::LlmService`] is the
/// production implementation, tests provide deterministic fakes.
///
/// `Ok(None)` means the upstream answered successfully but without any text.
pub trait TextGenerator: Send + Sync {
    fn generate<'a>(&'a self, request: GenerationRequest<'a>) -> GenerateFuture<'a>;
}
