/* src/server/store/src/models/blueprint.rs */

use atelier_content::{Blueprint as BlueprintDef, FieldDef};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::{FromRow, SqlitePool};
use uuid::Uuid;

/// A stored content blueprint. `fields` is the editor-authored field list,
/// kept as JSON; the typed definition is exposed through [`Self::definition`].
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Blueprint {
  pub id: Uuid,
  pub name: String,
  pub display_name: String,
  pub category: Option<String>,
  pub allow_multiple: bool,
  pub is_system: bool,
  pub fields: Json<Vec<FieldDef>>,
  pub created_at: DateTime<Utc>,
  pub updated_at: DateTime<Utc>,
}

const COLUMNS: &str =
  "id, name, display_name, category, allow_multiple, is_system, fields, created_at, updated_at";

impl Blueprint {
  /// The logical definition consumed by the generator and the validator.
  pub fn definition(&self) -> BlueprintDef {
    BlueprintDef {
      name: self.name.clone(),
      display_name: self.display_name.clone(),
      category: self.category.clone(),
      allow_multiple: self.allow_multiple,
      is_system: self.is_system,
      fields: self.fields.0.clone(),
    }
  }

  /// All blueprints, ordered by name. The generator relies on this order.
  pub async fn find_all(pool: &SqlitePool) -> Result<Vec<Self>, sqlx::Error> {
    sqlx::query_as::<_, Self>(&format!("SELECT {COLUMNS} FROM blueprints ORDER BY name"))
      .fetch_all(pool)
      .await
  }

  pub async fn find_by_name(pool: &SqlitePool, name: &str) -> Result<Option<Self>, sqlx::Error> {
    sqlx::query_as::<_, Self>(&format!("SELECT {COLUMNS} FROM blueprints WHERE name = $1"))
      .bind(name)
      .fetch_optional(pool)
      .await
  }

  pub async fn create(
    pool: &SqlitePool,
    name: &str,
    display_name: &str,
    category: Option<&str>,
    allow_multiple: bool,
    fields: &[FieldDef],
  ) -> Result<Self, sqlx::Error> {
    let id = Uuid::new_v4();
    sqlx::query_as::<_, Self>(&format!(
      "INSERT INTO blueprints (id, name, display_name, category, allow_multiple, fields)
       VALUES ($1, $2, $3, $4, $5, $6)
       RETURNING {COLUMNS}"
    ))
    .bind(id)
    .bind(name)
    .bind(display_name)
    .bind(category)
    .bind(allow_multiple)
    .bind(Json(fields))
    .fetch_one(pool)
    .await
  }

  pub async fn update(
    pool: &SqlitePool,
    name: &str,
    display_name: &str,
    category: Option<&str>,
    allow_multiple: bool,
    fields: &[FieldDef],
  ) -> Result<Option<Self>, sqlx::Error> {
    sqlx::query_as::<_, Self>(&format!(
      "UPDATE blueprints
       SET display_name = $2, category = $3, allow_multiple = $4, fields = $5,
           updated_at = CURRENT_TIMESTAMP
       WHERE name = $1
       RETURNING {COLUMNS}"
    ))
    .bind(name)
    .bind(display_name)
    .bind(category)
    .bind(allow_multiple)
    .bind(Json(fields))
    .fetch_optional(pool)
    .await
  }

  pub async fn delete_by_name(pool: &SqlitePool, name: &str) -> Result<u64, sqlx::Error> {
    let result =
      sqlx::query("DELETE FROM blueprints WHERE name = $1").bind(name).execute(pool).await?;
    Ok(result.rows_affected())
  }
}
