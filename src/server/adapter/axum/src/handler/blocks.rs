/* src/server/adapter/axum/src/handler/blocks.rs */

use axum::Json;
use axum::extract::{Path, State};
use axum::http::HeaderMap;
use serde::Deserialize;
use uuid::Uuid;

use atelier_content::{CmsError, validate_block_data};
use atelier_store::models::{Block, Blueprint, Page, ReorderItem};

use super::{SharedState, envelope, require_editor};
use crate::error::ApiError;

#[derive(Deserialize)]
pub(super) struct CreateBlockPayload {
  #[serde(alias = "type")]
  block_type: String,
  #[serde(default)]
  data: serde_json::Value,
}

/// Validate untrusted block data at the boundary. The blueprint matching
/// the type tag is authoritative when it exists; otherwise the type must at
/// least be a registered renderer.
async fn check_block_data(
  state: &SharedState,
  block_type: &str,
  data: &serde_json::Value,
) -> Result<(), ApiError> {
  match Blueprint::find_by_name(&state.pool, block_type).await? {
    Some(blueprint) => {
      let issues = validate_block_data(&blueprint.fields.0, data);
      if !issues.is_empty() {
        let joined = issues
          .iter()
          .map(|i| format!("{}: {}", i.field, i.message))
          .collect::<Vec<_>>()
          .join("; ");
        return Err(CmsError::validation(joined).into());
      }
    }
    None => {
      if !state.registry.contains(block_type) {
        return Err(
          CmsError::validation(format!("unknown block type \"{block_type}\"")).into(),
        );
      }
      if !data.is_object() {
        return Err(CmsError::validation("block data must be a JSON object").into());
      }
    }
  }
  Ok(())
}

pub(super) async fn create(
  State(state): State<SharedState>,
  Path(slug): Path<String>,
  headers: HeaderMap,
  Json(payload): Json<CreateBlockPayload>,
) -> Result<Json<serde_json::Value>, ApiError> {
  require_editor(&state, &headers)?;

  let page = Page::find_by_slug(&state.pool, &slug)
    .await?
    .ok_or_else(|| CmsError::not_found("Page not found"))?;

  check_block_data(&state, &payload.block_type, &payload.data).await?;

  let block = Block::create(&state.pool, page.id, &payload.block_type, &payload.data).await?;
  Ok(envelope(block))
}

#[derive(Deserialize)]
pub(super) struct UpdateBlockPayload {
  data: serde_json::Value,
}

pub(super) async fn update(
  State(state): State<SharedState>,
  Path(id): Path<Uuid>,
  headers: HeaderMap,
  Json(payload): Json<UpdateBlockPayload>,
) -> Result<Json<serde_json::Value>, ApiError> {
  require_editor(&state, &headers)?;

  let block = Block::find_by_id(&state.pool, id)
    .await?
    .ok_or_else(|| CmsError::not_found("Block not found"))?;

  check_block_data(&state, &block.block_type, &payload.data).await?;

  let updated = Block::update_data(&state.pool, id, &payload.data)
    .await?
    .ok_or_else(|| CmsError::not_found("Block not found"))?;
  Ok(envelope(updated))
}

pub(super) async fn remove(
  State(state): State<SharedState>,
  Path(id): Path<Uuid>,
  headers: HeaderMap,
) -> Result<Json<serde_json::Value>, ApiError> {
  require_editor(&state, &headers)?;

  let deleted = Block::delete(&state.pool, id).await?;
  if deleted == 0 {
    return Err(CmsError::not_found("Block not found").into());
  }
  Ok(envelope(serde_json::json!({ "deleted": id })))
}

/// Batch position rewrite for a page's blocks. The whole batch commits or
/// none of it does.
pub(super) async fn reorder(
  State(state): State<SharedState>,
  Path(slug): Path<String>,
  headers: HeaderMap,
  Json(payload): Json<serde_json::Value>,
) -> Result<Json<serde_json::Value>, ApiError> {
  require_editor(&state, &headers)?;

  let page = Page::find_by_slug(&state.pool, &slug)
    .await?
    .ok_or_else(|| CmsError::not_found("Page not found"))?;

  // Hand-checked rather than a typed extractor so a malformed body yields
  // the documented 400 envelope, not a framework rejection.
  let items = payload
    .get("items")
    .and_then(|v| v.as_array())
    .ok_or_else(|| CmsError::validation("items must be an array"))?;
  let items: Vec<ReorderItem> = items
    .iter()
    .map(|v| serde_json::from_value(v.clone()))
    .collect::<Result<_, _>>()
    .map_err(|e| CmsError::validation(format!("invalid reorder item: {e}")))?;

  Block::reorder(&state.pool, page.id, &items).await?;
  Ok(envelope(serde_json::json!({ "message": "Order updated successfully" })))
}
