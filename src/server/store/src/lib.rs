/* src/server/store/src/lib.rs */

pub mod error;
pub mod models;

use std::str::FromStr;

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

pub use error::StoreError;

/// Open (creating if missing) the database at `url` and run migrations.
pub async fn connect(url: &str) -> Result<SqlitePool, StoreError> {
  let options = SqliteConnectOptions::from_str(url)?.create_if_missing(true).foreign_keys(true);

  // In-memory databases exist per connection; a single-connection pool
  // keeps every handle on the same schema.
  let max_connections = if url.contains(":memory:") { 1 } else { 5 };

  let pool =
    SqlitePoolOptions::new().max_connections(max_connections).connect_with(options).await?;
  sqlx::migrate!("./migrations").run(&pool).await?;
  tracing::debug!(url, "database ready");
  Ok(pool)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[tokio::test]
  async fn connect_runs_migrations() {
    let pool = connect("sqlite::memory:").await.expect("connect");
    let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM blueprints")
      .fetch_one(&pool)
      .await
      .expect("blueprints table exists");
    assert_eq!(count.0, 0);
  }
}
