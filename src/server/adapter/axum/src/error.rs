/* src/server/adapter/axum/src/error.rs */

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use atelier_content::CmsError;
use atelier_store::StoreError;

/// Newtype wrapper to implement `IntoResponse` for `CmsError`.
/// Required because Rust's orphan rule prevents `impl IntoResponse for CmsError`
/// when both types are foreign to this crate.
pub(crate) struct ApiError(pub CmsError);

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let err = self.0;
    let status = StatusCode::from_u16(err.status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    let body = serde_json::json!({
      "ok": false,
      "error": {
        "code": err.code(),
        "message": err.message(),
      }
    });
    (status, axum::Json(body)).into_response()
  }
}

impl From<CmsError> for ApiError {
  fn from(err: CmsError) -> Self {
    Self(err)
  }
}

impl From<sqlx::Error> for ApiError {
  fn from(err: sqlx::Error) -> Self {
    Self(match err {
      sqlx::Error::RowNotFound => CmsError::not_found("Not found"),
      sqlx::Error::Database(db) if db.is_unique_violation() => {
        CmsError::conflict("A record with that name already exists")
      }
      other => {
        tracing::error!(error = %other, "database error");
        CmsError::internal("Something went wrong")
      }
    })
  }
}

impl From<StoreError> for ApiError {
  fn from(err: StoreError) -> Self {
    match err {
      StoreError::ForeignBlock(id) => {
        Self(CmsError::validation(format!("block {id} does not belong to this page")))
      }
      StoreError::Sqlx(inner) => inner.into(),
      StoreError::Migrate(inner) => {
        tracing::error!(error = %inner, "migration error");
        Self(CmsError::internal("Something went wrong"))
      }
    }
  }
}
