/* src/server/adapter/axum/src/handler/mod.rs */

mod blocks;
mod blueprints;
mod pages;

use std::collections::HashMap;
use std::sync::Arc;

use axum::Router;
use axum::http::{HeaderMap, header};
use axum::routing::{get, put};
use tower_http::trace::TraceLayer;

use atelier_content::{CmsError, Locale, ResolveContext, resolve_locale};

use crate::AppState;

pub(crate) type SharedState = Arc<AppState>;

pub(crate) fn router(state: SharedState) -> Router {
  Router::new()
    .route("/api/blueprints", get(blueprints::list).post(blueprints::create))
    .route(
      "/api/blueprints/{name}",
      get(blueprints::get).put(blueprints::update).delete(blueprints::remove),
    )
    .route("/api/pages", get(pages::list).post(pages::create))
    .route("/api/pages/{slug}", get(pages::get_rendered).delete(pages::remove))
    .route("/api/pages/{slug}/status", put(pages::set_status))
    .route("/api/pages/{slug}/blocks", axum::routing::post(blocks::create))
    .route("/api/pages/{slug}/blocks/reorder", axum::routing::post(blocks::reorder))
    .route("/api/blocks/{id}", put(blocks::update).delete(blocks::remove))
    .layer(TraceLayer::new_for_http())
    .with_state(state)
}

/// Wrap a handler result in the `{ok: true, data}` envelope.
pub(crate) fn envelope<T: serde::Serialize>(data: T) -> axum::Json<serde_json::Value> {
  axum::Json(serde_json::json!({ "ok": true, "data": data }))
}

/// Resolve the request locale: `?locale=` -> cookie -> Accept-Language ->
/// configured default.
pub(crate) fn request_locale(
  state: &AppState,
  query: &HashMap<String, String>,
  headers: &HeaderMap,
) -> Locale {
  resolve_locale(&ResolveContext {
    explicit: query.get("locale").map(String::as_str),
    cookie_header: headers.get(header::COOKIE).and_then(|v| v.to_str().ok()),
    accept_language: headers.get(header::ACCEPT_LANGUAGE).and_then(|v| v.to_str().ok()),
    default_locale: state.default_locale,
  })
}

/// Check the bearer token on mutating endpoints. A deployment without a
/// configured token is open (local authoring mode).
pub(crate) fn require_editor(state: &AppState, headers: &HeaderMap) -> Result<(), CmsError> {
  let Some(expected) = &state.auth_token else {
    return Ok(());
  };
  let provided = headers
    .get(header::AUTHORIZATION)
    .and_then(|v| v.to_str().ok())
    .and_then(|v| v.strip_prefix("Bearer "));
  match provided {
    Some(token) if token == expected => Ok(()),
    _ => Err(CmsError::unauthorized("Editor token required")),
  }
}

pub(crate) fn is_editor(state: &AppState, headers: &HeaderMap) -> bool {
  require_editor(state, headers).is_ok()
}
