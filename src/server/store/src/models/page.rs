/* src/server/store/src/models/page.rs */

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, SqlitePool, Type};
use strum_macros::{Display, EnumString};
use uuid::Uuid;

/// Publication state. Draft pages are visible to authenticated editors only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Type, Serialize, Deserialize, EnumString, Display)]
#[sqlx(rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum PageStatus {
  Draft,
  Published,
}

#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Page {
  pub id: Uuid,
  pub title_en: String,
  pub title_ar: String,
  pub slug_en: String,
  pub slug_ar: String,
  pub status: PageStatus,
  pub created_at: DateTime<Utc>,
  pub updated_at: DateTime<Utc>,
}

const COLUMNS: &str = "id, title_en, title_ar, slug_en, slug_ar, status, created_at, updated_at";

impl Page {
  pub async fn find_all(pool: &SqlitePool) -> Result<Vec<Self>, sqlx::Error> {
    sqlx::query_as::<_, Self>(&format!("SELECT {COLUMNS} FROM pages ORDER BY slug_en"))
      .fetch_all(pool)
      .await
  }

  pub async fn find_by_id(pool: &SqlitePool, id: Uuid) -> Result<Option<Self>, sqlx::Error> {
    sqlx::query_as::<_, Self>(&format!("SELECT {COLUMNS} FROM pages WHERE id = $1"))
      .bind(id)
      .fetch_optional(pool)
      .await
  }

  /// Look a page up by either of its slugs; a request for the Arabic slug
  /// and one for the English slug land on the same page.
  pub async fn find_by_slug(pool: &SqlitePool, slug: &str) -> Result<Option<Self>, sqlx::Error> {
    sqlx::query_as::<_, Self>(&format!(
      "SELECT {COLUMNS} FROM pages WHERE slug_en = $1 OR slug_ar = $1"
    ))
    .bind(slug)
    .fetch_optional(pool)
    .await
  }

  pub async fn create(
    pool: &SqlitePool,
    title_en: &str,
    title_ar: &str,
    slug_en: &str,
    slug_ar: &str,
  ) -> Result<Self, sqlx::Error> {
    let id = Uuid::new_v4();
    sqlx::query_as::<_, Self>(&format!(
      "INSERT INTO pages (id, title_en, title_ar, slug_en, slug_ar)
       VALUES ($1, $2, $3, $4, $5)
       RETURNING {COLUMNS}"
    ))
    .bind(id)
    .bind(title_en)
    .bind(title_ar)
    .bind(slug_en)
    .bind(slug_ar)
    .fetch_one(pool)
    .await
  }

  pub async fn set_status(
    pool: &SqlitePool,
    id: Uuid,
    status: PageStatus,
  ) -> Result<Option<Self>, sqlx::Error> {
    sqlx::query_as::<_, Self>(&format!(
      "UPDATE pages SET status = $2, updated_at = CURRENT_TIMESTAMP
       WHERE id = $1
       RETURNING {COLUMNS}"
    ))
    .bind(id)
    .bind(status)
    .fetch_optional(pool)
    .await
  }

  pub async fn delete(pool: &SqlitePool, id: Uuid) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM pages WHERE id = $1").bind(id).execute(pool).await?;
    Ok(result.rows_affected())
  }
}
