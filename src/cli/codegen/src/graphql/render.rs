/* src/cli/codegen/src/graphql/render.rs */

use atelier_content::{FieldDef, FieldType};

/// The fixed field-type table. Exhaustive on purpose: a new `FieldType`
/// variant will not compile until it is given a GraphQL type here.
pub(crate) fn graphql_type(field_type: FieldType) -> &'static str {
  match field_type {
    FieldType::Text | FieldType::Textarea | FieldType::Richtext | FieldType::Select => "String",
    FieldType::Number => "Int",
    FieldType::Boolean => "Boolean",
    FieldType::Image => "Asset",
    FieldType::Gallery => "[Asset!]",
    FieldType::Reference => "ID",
    FieldType::Relation => "[ID!]",
    FieldType::Repeater => "JSON",
    // Legacy type strings fall back to String, never to an error
    FieldType::Unknown => "String",
  }
}

/// Render one field line of an object type body.
pub(crate) fn render_field(field: &FieldDef) -> String {
  let ty = graphql_type(field.field_type);
  if field.required {
    format!("  {}: {ty}!", field.name)
  } else {
    format!("  {}: {ty}", field.name)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use atelier_content::FieldType;

  #[test]
  fn text_variants_map_to_string() {
    for ft in [FieldType::Text, FieldType::Textarea, FieldType::Richtext, FieldType::Select] {
      assert_eq!(graphql_type(ft), "String");
    }
  }

  #[test]
  fn scalar_mappings() {
    assert_eq!(graphql_type(FieldType::Number), "Int");
    assert_eq!(graphql_type(FieldType::Boolean), "Boolean");
    assert_eq!(graphql_type(FieldType::Reference), "ID");
  }

  #[test]
  fn asset_and_list_mappings() {
    assert_eq!(graphql_type(FieldType::Image), "Asset");
    assert_eq!(graphql_type(FieldType::Gallery), "[Asset!]");
    assert_eq!(graphql_type(FieldType::Relation), "[ID!]");
    assert_eq!(graphql_type(FieldType::Repeater), "JSON");
  }

  #[test]
  fn unmapped_type_falls_back_to_string() {
    let ft: FieldType = serde_json::from_value(serde_json::json!("hologram")).unwrap();
    assert_eq!(graphql_type(ft), "String");
  }

  #[test]
  fn required_field_gets_bang() {
    let field = FieldDef {
      name: "title".to_string(),
      label: Default::default(),
      field_type: FieldType::Text,
      required: true,
      bilingual: false,
    };
    assert_eq!(render_field(&field), "  title: String!");
  }

  #[test]
  fn optional_field_is_bare() {
    let field = FieldDef {
      name: "photos".to_string(),
      label: Default::default(),
      field_type: FieldType::Gallery,
      required: false,
      bilingual: false,
    };
    assert_eq!(render_field(&field), "  photos: [Asset!]");
  }
}
