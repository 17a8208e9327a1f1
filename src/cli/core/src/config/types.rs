/* src/cli/core/src/config/types.rs */

use anyhow::{Result, bail};
use atelier_content::Locale;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct AtelierConfig {
  pub project: ProjectSection,
  #[serde(default)]
  pub store: StoreSection,
  #[serde(default)]
  pub server: ServerSection,
  #[serde(default)]
  pub locales: LocalesSection,
  #[serde(default)]
  pub generate: GenerateSection,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProjectSection {
  pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StoreSection {
  #[serde(default = "default_database_url")]
  pub database_url: String,
}

impl Default for StoreSection {
  fn default() -> Self {
    Self { database_url: default_database_url() }
  }
}

fn default_database_url() -> String {
  "sqlite:atelier.db".to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSection {
  #[serde(default = "default_port")]
  pub port: u16,
  pub auth_token: Option<String>,
}

impl Default for ServerSection {
  fn default() -> Self {
    Self { port: default_port(), auth_token: None }
  }
}

fn default_port() -> u16 {
  3000
}

#[derive(Debug, Clone, Deserialize)]
pub struct LocalesSection {
  #[serde(default = "default_supported")]
  pub supported: Vec<String>,
  #[serde(default = "default_locale")]
  pub default: String,
}

impl Default for LocalesSection {
  fn default() -> Self {
    Self { supported: default_supported(), default: default_locale() }
  }
}

impl LocalesSection {
  pub fn validate(&self) -> Result<()> {
    if self.supported.is_empty() {
      bail!("locales.supported must not be empty");
    }
    for tag in &self.supported {
      if Locale::parse(tag).is_none() {
        bail!("locales.supported contains unsupported tag \"{tag}\" (only \"en\" and \"ar\")");
      }
    }
    if !self.supported.contains(&self.default) {
      bail!("locales.default \"{}\" is not in locales.supported {:?}", self.default, self.supported);
    }
    Ok(())
  }

  pub fn default_locale(&self) -> Locale {
    Locale::parse(&self.default).unwrap_or_default()
  }
}

fn default_supported() -> Vec<String> {
  vec!["en".to_string(), "ar".to_string()]
}

fn default_locale() -> String {
  "en".to_string()
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct GenerateSection {
  pub out: Option<String>,
}

impl GenerateSection {
  pub fn out_path(&self) -> &str {
    self.out.as_deref().unwrap_or("schema/atelier.graphql")
  }
}
