//! API Models
//!
//! Request and response bodies for the command endpoint, annotated for
//! OpenAPI generation with `utoipa`.

use jarvis_core::{CommandResult, language::Lang};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const READY_STATUS: &str = "🚀 Jarvis API Ready!";

#[derive(Deserialize, ToSchema, Debug)]
pub struct CommandPayload {
    #[schema(example = "open youtube")]
    pub command: String,
}

/// The single response shape for commands, including failures.
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
pub struct CommandReply {
    pub reply: String,
    #[schema(value_type = String, example = "en")]
    pub lang: Lang,
}

impl From<CommandResult> for CommandReply {
    fn from(result: CommandResult) -> Self {
        Self {
            reply: result.reply,
            lang: result.lang,
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
pub struct ReadyResponse {
    #[schema(example = "🚀 Jarvis API Ready!")]
    pub status: String,
}

impl Default for ReadyResponse {
    fn default() -> Self {
        Self {
            status: READY_STATUS.to_string(),
        }
    }
}
