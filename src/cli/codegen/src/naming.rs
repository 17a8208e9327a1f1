/* src/cli/codegen/src/naming.rs */

/// Type names the generator may never redefine. A blueprint whose
/// capitalized name lands here is skipped by the generator and removed by
/// `atelier clean`.
pub const RESERVED_TYPE_NAMES: &[&str] =
  &["Query", "Mutation", "Subscription", "Asset", "JSON", "String", "Int", "Float", "Boolean", "ID"];

/// Uppercase the first ASCII letter: `project` -> `Project`.
pub fn capitalize(name: &str) -> String {
  let mut chars = name.chars();
  match chars.next() {
    Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
    None => String::new(),
  }
}

/// Lowercase the first ASCII letter: `Project` -> `project`.
pub fn lower_first(name: &str) -> String {
  let mut chars = name.chars();
  match chars.next() {
    Some(first) => first.to_lowercase().collect::<String>() + chars.as_str(),
    None => String::new(),
  }
}

/// Suffix-rule pluralization: `y -> ies`, sibilant endings take `es`,
/// everything else takes `s`. Irregular plurals (person/people) are a
/// documented limitation, matching how list queries have always been named.
pub fn pluralize(name: &str) -> String {
  if let Some(stem) = name.strip_suffix('y') {
    return format!("{stem}ies");
  }
  for suffix in ["s", "x", "z", "ch", "sh"] {
    if name.ends_with(suffix) {
      return format!("{name}es");
    }
  }
  format!("{name}s")
}

/// True iff the blueprint's generated type name collides with a reserved
/// GraphQL type name.
pub fn is_reserved_name(blueprint_name: &str) -> bool {
  let type_name = capitalize(blueprint_name);
  RESERVED_TYPE_NAMES.contains(&type_name.as_str())
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn capitalize_simple() {
    assert_eq!(capitalize("project"), "Project");
    assert_eq!(capitalize("faqItem"), "FaqItem");
    assert_eq!(capitalize(""), "");
  }

  #[test]
  fn lower_first_simple() {
    assert_eq!(lower_first("Project"), "project");
    assert_eq!(lower_first(""), "");
  }

  #[test]
  fn pluralize_y_to_ies() {
    assert_eq!(pluralize("testimony"), "testimonies");
    assert_eq!(pluralize("category"), "categories");
  }

  #[test]
  fn pluralize_sibilants_take_es() {
    assert_eq!(pluralize("bus"), "buses");
    assert_eq!(pluralize("box"), "boxes");
    assert_eq!(pluralize("branch"), "branches");
    assert_eq!(pluralize("brush"), "brushes");
  }

  #[test]
  fn pluralize_default_s() {
    assert_eq!(pluralize("project"), "projects");
    assert_eq!(pluralize("service"), "services");
  }

  #[test]
  fn reserved_names_detected_case_insensitively_on_first_letter() {
    assert!(is_reserved_name("query"));
    assert!(is_reserved_name("Mutation"));
    assert!(is_reserved_name("asset"));
    assert!(!is_reserved_name("project"));
  }
}
