/* src/server/adapter/axum/src/handler/pages.rs */

use std::collections::HashMap;

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::HeaderMap;
use serde::Deserialize;

use atelier_content::{CmsError, Locale, is_valid_slug, is_valid_slug_ar};
use atelier_store::models::{Block, Page, PageStatus};

use super::{SharedState, envelope, is_editor, request_locale, require_editor};
use crate::error::ApiError;

/// Localized page header for list responses.
fn summary(page: &Page, locale: Locale) -> serde_json::Value {
  let title = match locale {
    Locale::Ar if !page.title_ar.is_empty() => &page.title_ar,
    _ => &page.title_en,
  };
  let slug = match locale {
    Locale::Ar => &page.slug_ar,
    Locale::En => &page.slug_en,
  };
  serde_json::json!({
    "id": page.id,
    "title": title,
    "slug": slug,
    "slug_en": page.slug_en,
    "slug_ar": page.slug_ar,
    "status": page.status,
  })
}

pub(super) async fn list(
  State(state): State<SharedState>,
  Query(query): Query<HashMap<String, String>>,
  headers: HeaderMap,
) -> Result<Json<serde_json::Value>, ApiError> {
  let locale = request_locale(&state, &query, &headers);
  let editor = is_editor(&state, &headers);

  let pages = Page::find_all(&state.pool).await?;
  let visible: Vec<_> = pages
    .iter()
    .filter(|p| editor || p.status == PageStatus::Published)
    .map(|p| summary(p, locale))
    .collect();
  Ok(envelope(visible))
}

/// Fetch a page by slug and render its blocks for the request locale.
/// Stored order is preserved exactly; unknown block types come back as
/// visible placeholders.
pub(super) async fn get_rendered(
  State(state): State<SharedState>,
  Path(slug): Path<String>,
  Query(query): Query<HashMap<String, String>>,
  headers: HeaderMap,
) -> Result<Json<serde_json::Value>, ApiError> {
  let locale = request_locale(&state, &query, &headers);

  let page = Page::find_by_slug(&state.pool, &slug)
    .await?
    .ok_or_else(|| CmsError::not_found("Page not found"))?;

  // Drafts stay private until published
  if page.status != PageStatus::Published && !is_editor(&state, &headers) {
    return Err(CmsError::not_found("Page not found").into());
  }

  let blocks = Block::find_by_page(&state.pool, page.id).await?;
  let rendered: Vec<_> =
    blocks.iter().map(|b| state.registry.render(&b.block_type, &b.data.0, locale)).collect();

  Ok(envelope(serde_json::json!({
    "page": summary(&page, locale),
    "locale": locale,
    "blocks": rendered,
  })))
}

#[derive(Deserialize)]
pub(super) struct CreatePagePayload {
  title_en: String,
  #[serde(default)]
  title_ar: String,
  slug_en: String,
  slug_ar: String,
}

pub(super) async fn create(
  State(state): State<SharedState>,
  headers: HeaderMap,
  Json(payload): Json<CreatePagePayload>,
) -> Result<Json<serde_json::Value>, ApiError> {
  require_editor(&state, &headers)?;

  if payload.title_en.is_empty() {
    return Err(CmsError::validation("title_en must not be empty").into());
  }
  if !is_valid_slug(&payload.slug_en) {
    return Err(CmsError::validation("slug_en is not a valid slug").into());
  }
  if !is_valid_slug_ar(&payload.slug_ar) {
    return Err(CmsError::validation("slug_ar is not a valid slug").into());
  }

  let page = Page::create(
    &state.pool,
    &payload.title_en,
    &payload.title_ar,
    &payload.slug_en,
    &payload.slug_ar,
  )
  .await?;
  Ok(envelope(page))
}

#[derive(Deserialize)]
pub(super) struct StatusPayload {
  status: PageStatus,
}

pub(super) async fn set_status(
  State(state): State<SharedState>,
  Path(slug): Path<String>,
  headers: HeaderMap,
  Json(payload): Json<StatusPayload>,
) -> Result<Json<serde_json::Value>, ApiError> {
  require_editor(&state, &headers)?;

  let page = Page::find_by_slug(&state.pool, &slug)
    .await?
    .ok_or_else(|| CmsError::not_found("Page not found"))?;
  let updated = Page::set_status(&state.pool, page.id, payload.status)
    .await?
    .ok_or_else(|| CmsError::not_found("Page not found"))?;
  Ok(envelope(updated))
}

pub(super) async fn remove(
  State(state): State<SharedState>,
  Path(slug): Path<String>,
  headers: HeaderMap,
) -> Result<Json<serde_json::Value>, ApiError> {
  require_editor(&state, &headers)?;

  let page = Page::find_by_slug(&state.pool, &slug)
    .await?
    .ok_or_else(|| CmsError::not_found("Page not found"))?;
  Page::delete(&state.pool, page.id).await?;
  Ok(envelope(serde_json::json!({ "deleted": page.id })))
}
