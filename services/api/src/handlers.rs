//! Axum Handlers for the Command Endpoint
//!
//! One endpoint, dispatched on the HTTP method: `OPTIONS` is a preflight,
//! `POST` runs a command and anything else reports readiness.

use axum::{
    body::Bytes,
    extract::{State, rejection::BytesRejection},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use jarvis_core::language::Lang;
use std::sync::Arc;
use tracing::{debug, error, info, instrument};

use crate::{
    models::{CommandPayload, CommandReply, ReadyResponse},
    state::AppState,
};

/// Every variant is reported as a 500 in the same shape as a normal reply.
#[derive(Debug)]
pub enum ApiError {
    InvalidPayload(String),
    InternalServerError(anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let message = match self {
            ApiError::InvalidPayload(message) => {
                error!(%message, "Rejected command payload");
                message
            }
            ApiError::InternalServerError(err) => {
                error!("Internal Server Error: {:?}", err);
                err.to_string()
            }
        };
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(CommandReply {
                reply: format!("Error: {}", message),
                lang: Lang::En,
            }),
        )
            .into_response()
    }
}

impl<E> From<E> for ApiError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self::InternalServerError(err.into())
    }
}

/// Run a command and return the reply with its language.
#[utoipa::path(
    post,
    path = "/api",
    request_body = CommandPayload,
    responses(
        (status = 200, description = "Canned or AI-generated reply", body = CommandReply),
        (status = 500, description = "Malformed request or internal failure", body = CommandReply)
    )
)]
#[instrument(skip_all)]
pub async fn handle_command(
    State(state): State<Arc<AppState>>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<CommandReply>, ApiError> {
    let body = body?;
    let payload: CommandPayload = serde_json::from_slice(&body)
        .map_err(|e| ApiError::InvalidPayload(e.to_string()))?;

    info!(command_chars = payload.command.chars().count(), "Received command");
    debug!(command = %payload.command, "Command text");
    let (result, source) = state
        .assistant
        .process_command_traced(&payload.command)
        .await;
    info!(?source, lang = %result.lang, "Replying to command");

    Ok(Json(result.into()))
}

/// CORS preflight. The headers are added by the router.
#[utoipa::path(
    options,
    path = "/api",
    responses((status = 200, description = "Preflight accepted, empty body"))
)]
pub async fn preflight() -> StatusCode {
    StatusCode::OK
}

/// Readiness message, served for `GET` and any unhandled method.
#[utoipa::path(
    get,
    path = "/api",
    responses((status = 200, description = "Service is up", body = ReadyResponse))
)]
pub async fn ready() -> Json<ReadyResponse> {
    Json(ReadyResponse::default())
}
