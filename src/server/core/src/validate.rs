/* src/server/core/src/validate.rs */

use std::collections::HashSet;
use std::sync::OnceLock;

use regex::Regex;
use serde_json::Value;

use crate::locale::{Locale, is_bilingual_value, localized_field};
use crate::model::{FieldDef, FieldType};

/// One violation found while checking block data against its blueprint.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct FieldIssue {
  pub field: String,
  pub message: String,
}

impl FieldIssue {
  fn new(field: &str, message: impl Into<String>) -> Self {
    Self { field: field.to_string(), message: message.into() }
  }
}

fn ident_re() -> &'static Regex {
  static RE: OnceLock<Regex> = OnceLock::new();
  RE.get_or_init(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").expect("valid identifier pattern"))
}

/// Valid GraphQL-safe name for blueprints and fields.
pub fn is_valid_identifier(name: &str) -> bool {
  ident_re().is_match(name)
}

/// Check a blueprint's field list: names must be non-empty, valid
/// identifiers, and unique within the blueprint.
pub fn validate_field_defs(fields: &[FieldDef]) -> Vec<FieldIssue> {
  let mut issues = Vec::new();
  let mut seen = HashSet::new();

  for field in fields {
    if field.name.is_empty() {
      issues.push(FieldIssue::new(&field.name, "field name must not be empty"));
      continue;
    }
    if !ident_re().is_match(&field.name) {
      issues.push(FieldIssue::new(&field.name, "field name must be a valid identifier"));
    }
    if !seen.insert(field.name.as_str()) {
      issues.push(FieldIssue::new(&field.name, "duplicate field name"));
    }
  }

  issues
}

/// Validate a block's `data` payload against the blueprint that defines its
/// shape. The payload is untrusted JSON from the editing UI; nothing here
/// panics, every problem becomes a `FieldIssue`.
pub fn validate_block_data(fields: &[FieldDef], data: &Value) -> Vec<FieldIssue> {
  let Some(map) = data.as_object() else {
    return vec![FieldIssue::new("", "block data must be a JSON object")];
  };

  let mut issues = Vec::new();

  for field in fields {
    let value = map.get(&field.name).filter(|v| !v.is_null());

    let Some(value) = value else {
      if field.required {
        issues.push(FieldIssue::new(&field.name, "required field is missing"));
      }
      continue;
    };

    if let Some(message) = shape_issue(field, value) {
      issues.push(FieldIssue::new(&field.name, message));
      continue;
    }

    // A required text field that resolves to the empty string in every
    // locale is as good as missing.
    if field.required && is_text_type(field.field_type) {
      let resolved = localized_field(Some(value), Locale::En);
      if resolved.is_empty() && localized_field(Some(value), Locale::Ar).is_empty() {
        issues.push(FieldIssue::new(&field.name, "required field is empty"));
      }
    }
  }

  issues
}

fn is_text_type(field_type: FieldType) -> bool {
  matches!(
    field_type,
    FieldType::Text | FieldType::Textarea | FieldType::Richtext | FieldType::Select
  )
}

/// Shape check per declared type; `None` means the value is acceptable.
fn shape_issue(field: &FieldDef, value: &Value) -> Option<&'static str> {
  match field.field_type {
    FieldType::Text | FieldType::Textarea | FieldType::Richtext | FieldType::Select => {
      if field.bilingual {
        if value.is_string() || is_bilingual_value(value) {
          None
        } else {
          Some("expected a string or an {en, ar} object")
        }
      } else if value.is_string() {
        None
      } else {
        Some("expected a string")
      }
    }
    FieldType::Number => {
      if value.is_number() { None } else { Some("expected a number") }
    }
    FieldType::Boolean => {
      if value.is_boolean() { None } else { Some("expected a boolean") }
    }
    FieldType::Image | FieldType::Reference => {
      if value.is_string() || value.is_object() {
        None
      } else {
        Some("expected an asset reference")
      }
    }
    FieldType::Gallery | FieldType::Relation | FieldType::Repeater => {
      if value.is_array() { None } else { Some("expected an array") }
    }
    // Legacy type strings we no longer recognize: accept anything, the
    // generator maps them to String and rendering falls back safely.
    FieldType::Unknown => None,
  }
}
