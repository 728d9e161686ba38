//! HTTP endpoint pair over the config store, mounted under the host's web server.
//!
//! GET serves the current document (or the default when none exists); POST
//! persists the request body verbatim. Storage failures on the read path are
//! absorbed by the store, so only the POST side carries the 500 error shape.

use crate::config_store::{CONFIG_FILENAME, ConfigStore};
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use bytes::Bytes;
use serde_json::{Value, json};
use tracing::info;

/// Route for the config document endpoint pair.
pub const CONFIG_ROUTE: &str = "/api/a1rworkshop/config";

/// Document served when no config exists on disk.
pub(crate) fn default_config() -> Value {
  json!({ "EmbeddingTags": {} })
}

/// Builds the extension's API router for the host to mount under its server.
pub fn router(store: ConfigStore) -> Router {
  info!(route = CONFIG_ROUTE, "config API routes registered");
  Router::new()
    .route(CONFIG_ROUTE, get(get_config).post(post_config))
    .with_state(store)
}

/// GET: the current config document, defaulting when none exists. The store
/// absorbs read failures, so this handler has no error path.
async fn get_config(State(store): State<ConfigStore>) -> Json<Value> {
  Json(store.read(CONFIG_FILENAME, default_config()))
}

/// POST: persist the request body verbatim as the config document.
/// Malformed JSON and write failures both map to a 500 with an error body.
async fn post_config(State(store): State<ConfigStore>, body: Bytes) -> Response {
  let document: Value = match serde_json::from_slice(&body) {
    Ok(document) => document,
    Err(e) => return error_response(e),
  };
  match store.write(CONFIG_FILENAME, &document) {
    Ok(()) => Json(json!({ "success": true })).into_response(),
    Err(e) => error_response(e),
  }
}

/// 500 response carrying the error's string message.
fn error_response(e: impl std::fmt::Display) -> Response {
  (
    StatusCode::INTERNAL_SERVER_ERROR,
    Json(json!({ "error": e.to_string() })),
  )
    .into_response()
}
