/* src/server/store/src/models/block.rs */

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::{FromRow, SqlitePool};
use uuid::Uuid;

use crate::error::StoreError;

/// One typed, ordered unit of page content. `data`'s shape is declared by
/// the blueprint matching `block_type` and validated at the API boundary.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Block {
  pub id: Uuid,
  pub page_id: Uuid,
  pub block_type: String,
  pub data: Json<serde_json::Value>,
  pub position: i64,
  pub created_at: DateTime<Utc>,
  pub updated_at: DateTime<Utc>,
}

/// One entry of a reorder request.
#[derive(Debug, Clone, Deserialize)]
pub struct ReorderItem {
  pub id: Uuid,
  #[serde(alias = "order")]
  pub position: i64,
}

const COLUMNS: &str = "id, page_id, block_type, data, position, created_at, updated_at";

impl Block {
  /// A page's blocks in stored order. The renderer never re-sorts.
  pub async fn find_by_page(pool: &SqlitePool, page_id: Uuid) -> Result<Vec<Self>, sqlx::Error> {
    sqlx::query_as::<_, Self>(&format!(
      "SELECT {COLUMNS} FROM blocks WHERE page_id = $1 ORDER BY position ASC, created_at ASC"
    ))
    .bind(page_id)
    .fetch_all(pool)
    .await
  }

  pub async fn find_by_id(pool: &SqlitePool, id: Uuid) -> Result<Option<Self>, sqlx::Error> {
    sqlx::query_as::<_, Self>(&format!("SELECT {COLUMNS} FROM blocks WHERE id = $1"))
      .bind(id)
      .fetch_optional(pool)
      .await
  }

  /// Append a block at the end of the page.
  pub async fn create(
    pool: &SqlitePool,
    page_id: Uuid,
    block_type: &str,
    data: &serde_json::Value,
  ) -> Result<Self, sqlx::Error> {
    let id = Uuid::new_v4();
    sqlx::query_as::<_, Self>(&format!(
      "INSERT INTO blocks (id, page_id, block_type, data, position)
       VALUES ($1, $2, $3, $4,
               (SELECT COALESCE(MAX(position) + 1, 0) FROM blocks WHERE page_id = $2))
       RETURNING {COLUMNS}"
    ))
    .bind(id)
    .bind(page_id)
    .bind(block_type)
    .bind(Json(data))
    .fetch_one(pool)
    .await
  }

  pub async fn update_data(
    pool: &SqlitePool,
    id: Uuid,
    data: &serde_json::Value,
  ) -> Result<Option<Self>, sqlx::Error> {
    sqlx::query_as::<_, Self>(&format!(
      "UPDATE blocks SET data = $2, updated_at = CURRENT_TIMESTAMP
       WHERE id = $1
       RETURNING {COLUMNS}"
    ))
    .bind(id)
    .bind(Json(data))
    .fetch_optional(pool)
    .await
  }

  pub async fn delete(pool: &SqlitePool, id: Uuid) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM blocks WHERE id = $1").bind(id).execute(pool).await?;
    Ok(result.rows_affected())
  }

  /// Rewrite positions for a page's blocks in a single transaction.
  /// All-or-nothing: an item naming a block that does not belong to the
  /// page aborts the whole batch, leaving every row untouched.
  pub async fn reorder(
    pool: &SqlitePool,
    page_id: Uuid,
    items: &[ReorderItem],
  ) -> Result<(), StoreError> {
    let mut tx = pool.begin().await?;

    for item in items {
      let result = sqlx::query(
        "UPDATE blocks SET position = $1, updated_at = CURRENT_TIMESTAMP
         WHERE id = $2 AND page_id = $3",
      )
      .bind(item.position)
      .bind(item.id)
      .bind(page_id)
      .execute(&mut *tx)
      .await?;

      if result.rows_affected() == 0 {
        // Dropping the transaction rolls back the updates already applied
        return Err(StoreError::ForeignBlock(item.id));
      }
    }

    tx.commit().await?;
    Ok(())
  }
}
