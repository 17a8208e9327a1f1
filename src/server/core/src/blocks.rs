/* src/server/core/src/blocks.rs */

// Block dispatch: a page is an ordered list of typed blocks, each rendered
// by the renderer registered for its type tag. Unknown types render as a
// visible placeholder carrying the raw payload instead of being dropped.

use std::collections::BTreeMap;
use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;

use crate::locale::{Locale, localize_records, localized_field};

/// Turns a block's raw `data` payload into locale-resolved props for the
/// presentation layer.
pub trait BlockRenderer: Send + Sync {
  fn block_type(&self) -> &'static str;
  fn render(&self, data: &Value, locale: Locale) -> Value;
}

fn is_false(flag: &bool) -> bool {
  !*flag
}

#[derive(Debug, Clone, Serialize)]
pub struct RenderedBlock {
  #[serde(rename = "type")]
  pub block_type: String,
  pub props: Value,
  /// Set when no renderer is registered for the block's type. The raw data
  /// is passed through so the gap is visible in the output, not hidden.
  #[serde(skip_serializing_if = "is_false")]
  pub placeholder: bool,
}

#[derive(Default)]
pub struct BlockRegistry {
  renderers: BTreeMap<&'static str, Arc<dyn BlockRenderer>>,
}

impl BlockRegistry {
  pub fn new() -> Self {
    Self { renderers: BTreeMap::new() }
  }

  pub fn register(&mut self, renderer: Arc<dyn BlockRenderer>) {
    self.renderers.insert(renderer.block_type(), renderer);
  }

  pub fn contains(&self, block_type: &str) -> bool {
    self.renderers.contains_key(block_type)
  }

  pub fn block_types(&self) -> impl Iterator<Item = &'static str> + '_ {
    self.renderers.keys().copied()
  }

  pub fn render(&self, block_type: &str, data: &Value, locale: Locale) -> RenderedBlock {
    match self.renderers.get(block_type) {
      Some(renderer) => RenderedBlock {
        block_type: block_type.to_string(),
        props: renderer.render(data, locale),
        placeholder: false,
      },
      None => RenderedBlock {
        block_type: block_type.to_string(),
        props: data.clone(),
        placeholder: true,
      },
    }
  }
}

/// Registry preloaded with the marketing site's section renderers.
pub fn default_registry() -> BlockRegistry {
  let mut registry = BlockRegistry::new();
  registry.register(Arc::new(Hero));
  registry.register(Arc::new(RichText));
  registry.register(Arc::new(Gallery));
  registry.register(Arc::new(Testimonial));
  registry.register(Arc::new(Cta));
  registry
}

// -- Built-in renderers --

// `Value::get` returns None for non-object payloads, so malformed data
// degrades to empty props instead of failing.
fn text(data: &Value, key: &str, locale: Locale) -> Value {
  Value::String(localized_field(data.get(key), locale))
}

fn raw(data: &Value, key: &str) -> Value {
  data.get(key).cloned().unwrap_or(Value::Null)
}

struct Hero;

impl BlockRenderer for Hero {
  fn block_type(&self) -> &'static str {
    "hero"
  }

  fn render(&self, data: &Value, locale: Locale) -> Value {
    serde_json::json!({
      "title": text(data, "title", locale),
      "subtitle": text(data, "subtitle", locale),
      "image": raw(data, "image"),
      "cta_label": text(data, "cta_label", locale),
      "cta_href": raw(data, "cta_href"),
    })
  }
}

struct RichText;

impl BlockRenderer for RichText {
  fn block_type(&self) -> &'static str {
    "rich_text"
  }

  fn render(&self, data: &Value, locale: Locale) -> Value {
    serde_json::json!({ "body": text(data, "body", locale) })
  }
}

struct Gallery;

impl BlockRenderer for Gallery {
  fn block_type(&self) -> &'static str {
    "gallery"
  }

  fn render(&self, data: &Value, locale: Locale) -> Value {
    let mut items = match data.get("items") {
      Some(Value::Array(items)) => items.clone(),
      _ => Vec::new(),
    };
    localize_records(&mut items, locale, &["caption", "alt"]);
    serde_json::json!({
      "title": text(data, "title", locale),
      "items": items,
    })
  }
}

struct Testimonial;

impl BlockRenderer for Testimonial {
  fn block_type(&self) -> &'static str {
    "testimonial"
  }

  fn render(&self, data: &Value, locale: Locale) -> Value {
    serde_json::json!({
      "quote": text(data, "quote", locale),
      "author": text(data, "author", locale),
      "role": text(data, "role", locale),
      "avatar": raw(data, "avatar"),
    })
  }
}

struct Cta;

impl BlockRenderer for Cta {
  fn block_type(&self) -> &'static str {
    "cta"
  }

  fn render(&self, data: &Value, locale: Locale) -> Value {
    serde_json::json!({
      "label": text(data, "label", locale),
      "href": raw(data, "href"),
      "style": raw(data, "style"),
    })
  }
}
