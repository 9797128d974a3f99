//! Completion Client
//!
//! Wraps an optional `LLMClient` with the fixed Jarvis persona and converts
//! every failure into a user-facing reply. Nothing here returns an `Err`: the
//! caller receives a `CompletionOutcome` and has to handle both variants.

use crate::llm_client::LLMClient;
use std::sync::Arc;
use tracing::{debug, warn};

/// Persona sent as the system message on every delegated command.
pub const SYSTEM_PROMPT: &str = "You are Jarvis from Iron Man. Answer in 1-2 sentences. \
Use Hindi (Devanagari script) for Hindi input, English for English. Be concise and helpful.";

/// Why a completion produced no model text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CompletionFailure {
    /// No credential was configured, so no request was sent.
    #[error("❌ Set GEMINI_API_KEY in the server environment variables")]
    MissingCredential,
    /// The upstream call failed; holds the underlying error message.
    #[error("❌ AI Error: {0}")]
    Upstream(String),
}

/// The result of a completion call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompletionOutcome {
    Success(String),
    Failure(CompletionFailure),
}

impl CompletionOutcome {
    /// Collapses the outcome into the text shown to the user.
    pub fn into_reply(self) -> String {
        match self {
            CompletionOutcome::Success(text) => text,
            CompletionOutcome::Failure(failure) => failure.to_string(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, CompletionOutcome::Success(_))
    }
}

/// Sends commands to the completion service, if one is configured.
#[derive(Clone)]
pub struct CompletionService {
    client: Option<Arc<dyn LLMClient>>,
    system_prompt: Arc<str>,
}

impl CompletionService {
    pub fn new(client: Option<Arc<dyn LLMClient>>) -> Self {
        Self {
            client,
            system_prompt: Arc::from(SYSTEM_PROMPT),
        }
    }

    /// A service that always answers with the missing-credential reply.
    pub fn unconfigured() -> Self {
        Self::new(None)
    }

    pub async fn complete(&self, command: &str) -> CompletionOutcome {
        let Some(client) = &self.client else {
            debug!("Completion service is not configured; skipping upstream call.");
            return CompletionOutcome::Failure(CompletionFailure::MissingCredential);
        };

        match client.complete(&self.system_prompt, command).await {
            Ok(text) => CompletionOutcome::Success(text),
            Err(e) => {
                warn!(error = %e, "Completion request failed");
                CompletionOutcome::Failure(CompletionFailure::Upstream(e.to_string()))
            }
        }
    }
}
