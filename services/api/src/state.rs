//! Shared Application State
//!
//! This module defines the `AppState` struct, which holds the immutable
//! configuration and the command pipeline shared by every request.

use crate::config::Config;
use jarvis_core::{
    assistant::JarvisAssistant,
    completion::CompletionService,
    llm_client::{LLMClient, OpenAICompatibleClient},
};
use std::sync::Arc;

/// The shared application state, created once at startup and passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    pub assistant: Arc<JarvisAssistant>,
    pub config: Arc<Config>,
}

impl AppState {
    /// Wires the completion client from configuration. Without an API key the
    /// assistant still serves shortcut commands.
    pub fn from_config(config: Config) -> Self {
        let llm_client = config.gemini_api_key.as_deref().map(|api_key| {
            Arc::new(OpenAICompatibleClient::from_parts(
                api_key,
                &config.completion_base_url,
                config.chat_model.clone(),
            )) as Arc<dyn LLMClient>
        });
        let assistant = JarvisAssistant::with_completion(CompletionService::new(llm_client));
        Self::new(assistant, config)
    }

    pub fn new(assistant: JarvisAssistant, config: Config) -> Self {
        Self {
            assistant: Arc::new(assistant),
            config: Arc::new(config),
        }
    }
}
