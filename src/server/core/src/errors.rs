/* src/server/core/src/errors.rs */

use std::fmt;

#[derive(Debug)]
pub struct CmsError {
  code: String,
  message: String,
  status: u16,
}

fn default_status(code: &str) -> u16 {
  match code {
    "VALIDATION_ERROR" => 400,
    "UNAUTHORIZED" => 401,
    "FORBIDDEN" => 403,
    "NOT_FOUND" => 404,
    "CONFLICT" => 409,
    "INTERNAL_ERROR" => 500,
    _ => 500,
  }
}

impl CmsError {
  pub fn new(code: impl Into<String>, message: impl Into<String>, status: u16) -> Self {
    Self { code: code.into(), message: message.into(), status }
  }

  pub fn with_code(code: impl Into<String>, message: impl Into<String>) -> Self {
    let code = code.into();
    let status = default_status(&code);
    Self { code, message: message.into(), status }
  }

  pub fn validation(msg: impl Into<String>) -> Self {
    Self::with_code("VALIDATION_ERROR", msg)
  }

  pub fn unauthorized(msg: impl Into<String>) -> Self {
    Self::with_code("UNAUTHORIZED", msg)
  }

  pub fn forbidden(msg: impl Into<String>) -> Self {
    Self::with_code("FORBIDDEN", msg)
  }

  pub fn not_found(msg: impl Into<String>) -> Self {
    Self::with_code("NOT_FOUND", msg)
  }

  pub fn conflict(msg: impl Into<String>) -> Self {
    Self::with_code("CONFLICT", msg)
  }

  pub fn internal(msg: impl Into<String>) -> Self {
    Self::with_code("INTERNAL_ERROR", msg)
  }

  pub fn code(&self) -> &str {
    &self.code
  }

  pub fn message(&self) -> &str {
    &self.message
  }

  pub fn status(&self) -> u16 {
    self.status
  }
}

impl fmt::Display for CmsError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}: {}", self.code, self.message)
  }
}

impl std::error::Error for CmsError {}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn default_status_known_codes() {
    assert_eq!(default_status("VALIDATION_ERROR"), 400);
    assert_eq!(default_status("UNAUTHORIZED"), 401);
    assert_eq!(default_status("FORBIDDEN"), 403);
    assert_eq!(default_status("NOT_FOUND"), 404);
    assert_eq!(default_status("CONFLICT"), 409);
    assert_eq!(default_status("INTERNAL_ERROR"), 500);
  }

  #[test]
  fn default_status_unknown_code() {
    assert_eq!(default_status("CUSTOM_ERROR"), 500);
  }

  #[test]
  fn convenience_constructors() {
    assert_eq!(CmsError::validation("x").status(), 400);
    assert_eq!(CmsError::unauthorized("x").status(), 401);
    assert_eq!(CmsError::forbidden("x").status(), 403);
    assert_eq!(CmsError::not_found("x").status(), 404);
    assert_eq!(CmsError::conflict("x").status(), 409);
    assert_eq!(CmsError::internal("x").status(), 500);
  }

  #[test]
  fn display_format() {
    let err = CmsError::not_found("missing");
    assert_eq!(err.to_string(), "NOT_FOUND: missing");
  }
}
