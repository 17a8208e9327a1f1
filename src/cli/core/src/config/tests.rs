/* src/cli/core/src/config/tests.rs */

use std::path::Path;

use super::*;

#[test]
fn minimal_config_gets_defaults() {
  let config: AtelierConfig = toml::from_str("[project]\nname = \"atelier-site\"\n").expect("parse");
  assert_eq!(config.project.name, "atelier-site");
  assert_eq!(config.store.database_url, "sqlite:atelier.db");
  assert_eq!(config.server.port, 3000);
  assert!(config.server.auth_token.is_none());
  assert_eq!(config.locales.supported, vec!["en".to_string(), "ar".to_string()]);
  assert_eq!(config.locales.default, "en");
  assert_eq!(config.generate.out_path(), "schema/atelier.graphql");
}

#[test]
fn full_config_parses() {
  let content = r#"
[project]
name = "atelier-site"

[store]
database_url = "sqlite:content/site.db"

[server]
port = 8080
auth_token = "studio-secret"

[locales]
supported = ["en", "ar"]
default = "ar"

[generate]
out = "cms/schema.graphql"
"#;
  let config: AtelierConfig = toml::from_str(content).expect("parse");
  assert_eq!(config.server.port, 8080);
  assert_eq!(config.server.auth_token.as_deref(), Some("studio-secret"));
  assert_eq!(config.locales.default_locale(), atelier_content::Locale::Ar);
  assert_eq!(config.generate.out_path(), "cms/schema.graphql");
}

#[test]
fn validation_rejects_default_outside_supported() {
  let locales = LocalesSection { supported: vec!["en".to_string()], default: "ar".to_string() };
  assert!(locales.validate().is_err());
}

#[test]
fn validation_rejects_unknown_locale_tag() {
  let locales =
    LocalesSection { supported: vec!["en".to_string(), "fr".to_string()], default: "en".to_string() };
  assert!(locales.validate().is_err());
}

#[test]
fn validation_rejects_empty_supported() {
  let locales = LocalesSection { supported: vec![], default: "en".to_string() };
  assert!(locales.validate().is_err());
}

#[test]
fn loader_walks_upward() {
  let dir = tempfile::tempdir().expect("tempdir");
  let nested = dir.path().join("site/pages");
  std::fs::create_dir_all(&nested).expect("mkdir");
  std::fs::write(dir.path().join("atelier.toml"), "[project]\nname = \"walker\"\n")
    .expect("write");

  let found = find_atelier_config(&nested).expect("find");
  assert!(found.ends_with("atelier.toml"));
  let config = load_atelier_config(&found).expect("load");
  assert_eq!(config.project.name, "walker");
}

#[test]
fn loader_rejects_invalid_locales() {
  let dir = tempfile::tempdir().expect("tempdir");
  let path = dir.path().join("atelier.toml");
  std::fs::write(&path, "[project]\nname = \"x\"\n\n[locales]\nsupported = [\"en\"]\ndefault = \"ar\"\n")
    .expect("write");
  assert!(load_atelier_config(&path).is_err());
}

#[test]
fn database_url_resolution() {
  let store = StoreSection { database_url: "sqlite:content/site.db".to_string() };
  let resolved = resolve_database_url(&store, Path::new("/srv/atelier"));
  assert_eq!(resolved, "sqlite:/srv/atelier/content/site.db");

  let memory = StoreSection { database_url: "sqlite::memory:".to_string() };
  assert_eq!(resolve_database_url(&memory, Path::new("/srv")), "sqlite::memory:");

  let absolute = StoreSection { database_url: "sqlite:/var/db/site.db".to_string() };
  assert_eq!(resolve_database_url(&absolute, Path::new("/srv")), "sqlite:/var/db/site.db");
}
