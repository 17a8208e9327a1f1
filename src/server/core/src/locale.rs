/* src/server/core/src/locale.rs */

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The two locales the site serves. English is the canonical authoring
/// locale and the last fallback before the empty string.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
  #[default]
  En,
  Ar,
}

impl Locale {
  pub fn as_str(self) -> &'static str {
    match self {
      Self::En => "en",
      Self::Ar => "ar",
    }
  }

  /// Parse a locale tag; unknown tags are rejected rather than defaulted
  /// so callers can fall through their own resolution chain.
  pub fn parse(tag: &str) -> Option<Self> {
    match tag {
      "en" => Some(Self::En),
      "ar" => Some(Self::Ar),
      _ => None,
    }
  }
}

/// True iff `value` is a bilingual object: a non-array JSON object carrying
/// an `en` or `ar` key.
pub fn is_bilingual_value(value: &Value) -> bool {
  match value {
    Value::Object(map) => map.contains_key("en") || map.contains_key("ar"),
    _ => false,
  }
}

/// Extract a displayable string from a field that may be a plain string
/// (legacy content), a `{en, ar}` object, or missing entirely.
///
/// Resolution per value:
/// 1. Null/absent -> ""
/// 2. Plain string -> returned verbatim, regardless of locale
/// 3. Object -> requested locale, then `en`, then `ar`, then ""
///
/// Total: every input maps to a defined string, nothing panics.
pub fn localized_field(value: Option<&Value>, locale: Locale) -> String {
  let Some(value) = value else {
    return String::new();
  };
  match value {
    Value::String(s) => s.clone(),
    Value::Object(map) => {
      for key in [locale.as_str(), "en", "ar"] {
        if let Some(Value::String(s)) = map.get(key) {
          return s.clone();
        }
      }
      String::new()
    }
    _ => String::new(),
  }
}

/// Resolve the named fields of every record in place, replacing bilingual
/// objects (and legacy strings) with the scalar for `locale`. Fields not
/// listed, and records that are not objects, pass through untouched.
pub fn localize_records(records: &mut [Value], locale: Locale, fields: &[&str]) {
  for record in records.iter_mut() {
    let Some(map) = record.as_object_mut() else {
      continue;
    };
    for field in fields {
      if let Some(value) = map.get(*field) {
        let resolved = localized_field(Some(value), locale);
        map.insert((*field).to_string(), Value::String(resolved));
      }
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::json;

  #[test]
  fn legacy_string_passes_through() {
    let v = json!("Majlis Design");
    assert_eq!(localized_field(Some(&v), Locale::En), "Majlis Design");
    assert_eq!(localized_field(Some(&v), Locale::Ar), "Majlis Design");
  }

  #[test]
  fn bilingual_object_selects_locale() {
    let v = json!({"en": "Projects", "ar": "مشاريع"});
    assert_eq!(localized_field(Some(&v), Locale::En), "Projects");
    assert_eq!(localized_field(Some(&v), Locale::Ar), "مشاريع");
  }

  #[test]
  fn missing_arabic_falls_back_to_english() {
    let v = json!({"en": "About us"});
    assert_eq!(localized_field(Some(&v), Locale::Ar), "About us");
  }

  #[test]
  fn missing_english_falls_back_to_arabic() {
    let v = json!({"ar": "من نحن"});
    assert_eq!(localized_field(Some(&v), Locale::En), "من نحن");
  }

  #[test]
  fn null_and_absent_resolve_to_empty() {
    assert_eq!(localized_field(Some(&Value::Null), Locale::En), "");
    assert_eq!(localized_field(None, Locale::Ar), "");
  }

  #[test]
  fn malformed_values_resolve_to_empty() {
    assert_eq!(localized_field(Some(&json!(42)), Locale::En), "");
    assert_eq!(localized_field(Some(&json!(["en"])), Locale::En), "");
    assert_eq!(localized_field(Some(&json!({"en": 7})), Locale::En), "");
  }

  #[test]
  fn localize_records_resolves_named_fields() {
    let mut records = vec![json!({"title": {"en": "A", "ar": "ب"}, "slug": "a"})];
    localize_records(&mut records, Locale::Ar, &["title"]);
    assert_eq!(records[0], json!({"title": "ب", "slug": "a"}));
  }

  #[test]
  fn localize_records_skips_unlisted_and_non_objects() {
    let mut records = vec![json!("scalar"), json!({"body": {"en": "text"}})];
    localize_records(&mut records, Locale::En, &["title"]);
    assert_eq!(records[0], json!("scalar"));
    assert_eq!(records[1], json!({"body": {"en": "text"}}));
  }

  #[test]
  fn bilingual_detection() {
    assert!(is_bilingual_value(&json!({"en": "x"})));
    assert!(is_bilingual_value(&json!({"ar": "x"})));
    assert!(!is_bilingual_value(&json!({"fr": "x"})));
    assert!(!is_bilingual_value(&json!(["en"])));
    assert!(!is_bilingual_value(&json!("en")));
  }
}
