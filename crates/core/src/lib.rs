//! Jarvis Core
//!
//! The domain logic behind the Jarvis command endpoint: shortcut rules, the
//! Hindi/English detector and the completion client. Nothing here knows about
//! HTTP.

pub mod assistant;
pub mod classifier;
pub mod completion;
pub mod language;
pub mod llm_client;

use language::Lang;
use serde::{Deserialize, Serialize};

/// The reply to one command, tagged with the language it should be spoken in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandResult {
    pub reply: String,
    pub lang: Lang,
}

impl CommandResult {
    pub fn english(reply: impl Into<String>) -> Self {
        Self {
            reply: reply.into(),
            lang: Lang::En,
        }
    }
}
