/* src/server/adapter/axum/src/handler/blueprints.rs */

use axum::Json;
use axum::extract::{Path, State};
use axum::http::HeaderMap;
use serde::Deserialize;

use atelier_content::{CmsError, FieldDef, FieldIssue, is_valid_identifier, validate_field_defs};
use atelier_store::models::Blueprint;

use super::{SharedState, envelope, require_editor};
use crate::error::ApiError;

#[derive(Deserialize)]
pub(super) struct BlueprintPayload {
  name: String,
  display_name: String,
  #[serde(default)]
  category: Option<String>,
  #[serde(default = "default_true")]
  allow_multiple: bool,
  #[serde(default)]
  fields: Vec<FieldDef>,
}

fn default_true() -> bool {
  true
}

fn joined(issues: &[FieldIssue]) -> String {
  issues
    .iter()
    .map(|i| format!("{}: {}", i.field, i.message))
    .collect::<Vec<_>>()
    .join("; ")
}

fn check_payload(payload: &BlueprintPayload) -> Result<(), CmsError> {
  if !is_valid_identifier(&payload.name) {
    return Err(CmsError::validation("blueprint name must be a valid identifier"));
  }
  let issues = validate_field_defs(&payload.fields);
  if !issues.is_empty() {
    return Err(CmsError::validation(joined(&issues)));
  }
  Ok(())
}

pub(super) async fn list(
  State(state): State<SharedState>,
) -> Result<Json<serde_json::Value>, ApiError> {
  let blueprints = Blueprint::find_all(&state.pool).await?;
  Ok(envelope(blueprints))
}

pub(super) async fn get(
  State(state): State<SharedState>,
  Path(name): Path<String>,
) -> Result<Json<serde_json::Value>, ApiError> {
  let blueprint = Blueprint::find_by_name(&state.pool, &name)
    .await?
    .ok_or_else(|| CmsError::not_found("Blueprint not found"))?;
  Ok(envelope(blueprint))
}

pub(super) async fn create(
  State(state): State<SharedState>,
  headers: HeaderMap,
  Json(payload): Json<BlueprintPayload>,
) -> Result<Json<serde_json::Value>, ApiError> {
  require_editor(&state, &headers)?;
  check_payload(&payload)?;

  let blueprint = Blueprint::create(
    &state.pool,
    &payload.name,
    &payload.display_name,
    payload.category.as_deref(),
    payload.allow_multiple,
    &payload.fields,
  )
  .await?;
  Ok(envelope(blueprint))
}

pub(super) async fn update(
  State(state): State<SharedState>,
  Path(name): Path<String>,
  headers: HeaderMap,
  Json(payload): Json<UpdatePayload>,
) -> Result<Json<serde_json::Value>, ApiError> {
  require_editor(&state, &headers)?;

  let issues = validate_field_defs(&payload.fields);
  if !issues.is_empty() {
    return Err(CmsError::validation(joined(&issues)).into());
  }

  let blueprint = Blueprint::update(
    &state.pool,
    &name,
    &payload.display_name,
    payload.category.as_deref(),
    payload.allow_multiple,
    &payload.fields,
  )
  .await?
  .ok_or_else(|| CmsError::not_found("Blueprint not found"))?;
  Ok(envelope(blueprint))
}

#[derive(Deserialize)]
pub(super) struct UpdatePayload {
  display_name: String,
  #[serde(default)]
  category: Option<String>,
  #[serde(default = "default_true")]
  allow_multiple: bool,
  #[serde(default)]
  fields: Vec<FieldDef>,
}

pub(super) async fn remove(
  State(state): State<SharedState>,
  Path(name): Path<String>,
  headers: HeaderMap,
) -> Result<Json<serde_json::Value>, ApiError> {
  require_editor(&state, &headers)?;

  let blueprint = Blueprint::find_by_name(&state.pool, &name)
    .await?
    .ok_or_else(|| CmsError::not_found("Blueprint not found"))?;
  if blueprint.is_system {
    return Err(CmsError::forbidden("System blueprints cannot be deleted").into());
  }

  Blueprint::delete_by_name(&state.pool, &name).await?;
  Ok(envelope(serde_json::json!({ "deleted": name })))
}
