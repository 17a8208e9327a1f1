/* src/cli/codegen/src/graphql/generator.rs */

use std::collections::BTreeMap;

use atelier_content::Blueprint;

use crate::fingerprint::{FINGERPRINT_PREFIX, blueprint_fingerprint};
use crate::naming::{capitalize, is_reserved_name, lower_first, pluralize};

use super::render::render_field;

const HEADER: &str = "# Auto-generated by atelier. Do not edit.";

/// Result of one generator run. `sdl` is the full file text; `skipped`
/// names blueprints that collided with reserved GraphQL type names (they
/// stay in the database until `atelier clean` removes them).
pub struct GeneratedSchema {
  pub sdl: String,
  pub type_count: usize,
  pub skipped: Vec<String>,
  pub fingerprint: String,
}

/// Translate the blueprint set into GraphQL SDL: one object type per
/// blueprint plus matching query and mutation stubs.
///
/// Deterministic: blueprints are keyed by name into a BTreeMap, so the same
/// set always emits byte-identical text. An empty set degrades to a
/// header-only file rather than an error.
pub fn generate_schema(blueprints: &[Blueprint]) -> GeneratedSchema {
  let fingerprint = blueprint_fingerprint(blueprints);

  let mut ordered: BTreeMap<&str, &Blueprint> = BTreeMap::new();
  let mut skipped = Vec::new();
  for blueprint in blueprints {
    if is_reserved_name(&blueprint.name) {
      skipped.push(blueprint.name.clone());
    } else {
      ordered.insert(blueprint.name.as_str(), blueprint);
    }
  }
  skipped.sort();

  let mut out = String::new();
  out.push_str(HEADER);
  out.push('\n');
  out.push_str(FINGERPRINT_PREFIX);
  out.push_str(&fingerprint);
  out.push('\n');

  if ordered.is_empty() {
    return GeneratedSchema { sdl: out, type_count: 0, skipped, fingerprint };
  }

  out.push_str("\nscalar JSON\n");
  out.push_str("\ntype Asset {\n  id: ID!\n  url: String!\n  alt: String\n}\n");

  for (name, blueprint) in &ordered {
    let type_name = capitalize(name);
    out.push_str(&format!("\ntype {type_name} {{\n"));
    // Implicit id, unless the blueprint declares its own
    if !blueprint.fields.iter().any(|f| f.name == "id") {
      out.push_str("  id: ID!\n");
    }
    for field in &blueprint.fields {
      out.push_str(&render_field(field));
      out.push('\n');
    }
    out.push_str("}\n");
  }

  out.push_str("\ntype Query {\n");
  for name in ordered.keys() {
    let type_name = capitalize(name);
    let singular = lower_first(name);
    let plural = pluralize(&singular);
    out.push_str(&format!("  {plural}: [{type_name}!]!\n"));
    out.push_str(&format!("  {singular}(id: ID!): {type_name}\n"));
  }
  out.push_str("}\n");

  out.push_str("\ntype Mutation {\n");
  for name in ordered.keys() {
    let type_name = capitalize(name);
    out.push_str(&format!("  create{type_name}(data: JSON!): {type_name}\n"));
    out.push_str(&format!("  update{type_name}(id: ID!, data: JSON!): {type_name}\n"));
    out.push_str(&format!("  delete{type_name}(id: ID!): Boolean!\n"));
  }
  out.push_str("}\n");

  GeneratedSchema { sdl: out, type_count: ordered.len(), skipped, fingerprint }
}
