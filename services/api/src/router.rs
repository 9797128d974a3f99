//! Axum Router Configuration
//!
//! Mounts the command endpoint at `/` and `/api`, serves the OpenAPI document
//! and adds the permissive CORS headers to every response.

use crate::{
    handlers,
    models::{CommandPayload, CommandReply, ReadyResponse},
    state::AppState,
};

use axum::{
    Json, Router,
    http::{
        HeaderValue,
        header::{
            ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS,
            ACCESS_CONTROL_ALLOW_ORIGIN,
        },
    },
    routing::{MethodRouter, get},
};
use std::sync::Arc;
use tower_http::set_header::SetResponseHeaderLayer;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(handlers::handle_command, handlers::preflight, handlers::ready),
    components(schemas(CommandPayload, CommandReply, ReadyResponse)),
    tags(
        (name = "Jarvis API", description = "Voice assistant command endpoint")
    )
)]
pub struct ApiDoc;

fn command_endpoint() -> MethodRouter<Arc<AppState>> {
    get(handlers::ready)
        .post(handlers::handle_command)
        .options(handlers::preflight)
        .fallback(handlers::ready)
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Creates the main Axum router for the application.
pub fn create_router(app_state: Arc<AppState>) -> Router {
    let api_router = Router::new()
        .route("/", command_endpoint())
        .route("/api", command_endpoint())
        .with_state(app_state);

    Router::new()
        .route("/api-docs/openapi.json", get(openapi_json))
        .merge(api_router)
        .layer(SetResponseHeaderLayer::overriding(
            ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderValue::from_static("*"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static("GET, POST, OPTIONS"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static("Content-Type"),
        ))
}
