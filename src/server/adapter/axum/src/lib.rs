/* src/server/adapter/axum/src/lib.rs */

mod error;
mod handler;

use std::sync::Arc;

use atelier_content::{BlockRegistry, Locale};
use sqlx::SqlitePool;

/// Everything a request handler needs, built once at startup and injected
/// through axum's `State`. No module-level singletons anywhere.
pub struct AppState {
  pub pool: SqlitePool,
  pub registry: BlockRegistry,
  pub default_locale: Locale,
  /// When set, mutating endpoints require `Authorization: Bearer <token>`
  /// and draft pages become visible to the bearer.
  pub auth_token: Option<String>,
}

/// Build the HTTP API router for a configured state.
pub fn build_router(state: AppState) -> axum::Router {
  handler::router(Arc::new(state))
}
