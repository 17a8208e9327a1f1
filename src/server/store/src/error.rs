/* src/server/store/src/error.rs */

use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum StoreError {
  #[error(transparent)]
  Sqlx(#[from] sqlx::Error),
  #[error(transparent)]
  Migrate(#[from] sqlx::migrate::MigrateError),
  #[error("block {0} does not belong to the page being reordered")]
  ForeignBlock(Uuid),
}

impl StoreError {
  /// True for violations of a UNIQUE constraint (duplicate blueprint name,
  /// duplicate slug).
  pub fn is_unique_violation(&self) -> bool {
    match self {
      Self::Sqlx(sqlx::Error::Database(db)) => db.is_unique_violation(),
      _ => false,
    }
  }
}
