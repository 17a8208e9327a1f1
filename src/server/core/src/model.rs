/* src/server/core/src/model.rs */

use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Editor-declared field types. Every match on this enum is exhaustive, so
/// adding a variant without updating the GraphQL mapping (or the block-data
/// validator) is a compile error. Legacy rows may still carry type strings
/// this enum has never heard of; those deserialize to `Unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
  Text,
  Textarea,
  Richtext,
  Select,
  Number,
  Boolean,
  Image,
  Gallery,
  Reference,
  Relation,
  Repeater,
  #[serde(other)]
  Unknown,
}

/// Bilingual label shown in the editing UI.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalizedLabel {
  pub en: String,
  #[serde(default)]
  pub ar: String,
}

/// One field declaration inside a blueprint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldDef {
  pub name: String,
  #[serde(default)]
  pub label: LocalizedLabel,
  #[serde(rename = "type")]
  pub field_type: FieldType,
  #[serde(default)]
  pub required: bool,
  #[serde(default)]
  pub bilingual: bool,
}

/// A named, editor-authored field-list definition. Shapes both the editing
/// forms and, through the generator, one GraphQL object type.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Blueprint {
  pub name: String,
  pub display_name: String,
  #[serde(default)]
  pub category: Option<String>,
  #[serde(default)]
  pub allow_multiple: bool,
  #[serde(default)]
  pub is_system: bool,
  #[serde(default)]
  pub fields: Vec<FieldDef>,
}

fn slug_re() -> &'static Regex {
  static RE: OnceLock<Regex> = OnceLock::new();
  RE.get_or_init(|| Regex::new(r"^[a-z0-9]+(?:-[a-z0-9]+)*$").expect("valid slug pattern"))
}

fn slug_ar_re() -> &'static Regex {
  static RE: OnceLock<Regex> = OnceLock::new();
  RE.get_or_init(|| {
    Regex::new(r"^[\p{Arabic}a-z0-9]+(?:-[\p{Arabic}a-z0-9]+)*$").expect("valid slug pattern")
  })
}

/// English slugs: lowercase latin, digits, interior hyphens.
pub fn is_valid_slug(slug: &str) -> bool {
  slug_re().is_match(slug)
}

/// Arabic slugs additionally admit Arabic letters.
pub fn is_valid_slug_ar(slug: &str) -> bool {
  slug_ar_re().is_match(slug)
}
