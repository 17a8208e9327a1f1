/* src/cli/core/src/config/loader.rs */

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};

use super::types::{AtelierConfig, StoreSection};

/// Walk upward from `start` to find `atelier.toml`, like Cargo.toml discovery
pub fn find_atelier_config(start: &Path) -> Result<PathBuf> {
  let mut dir =
    start.canonicalize().with_context(|| format!("failed to canonicalize {}", start.display()))?;
  loop {
    let candidate = dir.join("atelier.toml");
    if candidate.is_file() {
      return Ok(candidate);
    }
    if !dir.pop() {
      bail!("atelier.toml not found (searched upward from {})", start.display());
    }
  }
}

pub fn load_atelier_config(path: &Path) -> Result<AtelierConfig> {
  let content =
    std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
  let config: AtelierConfig =
    toml::from_str(&content).with_context(|| format!("failed to parse {}", path.display()))?;
  config.locales.validate()?;
  Ok(config)
}

/// Resolve a relative `sqlite:` path against the config file's directory,
/// so commands behave the same from any working directory.
pub fn resolve_database_url(store: &StoreSection, base_dir: &Path) -> String {
  let url = &store.database_url;
  let Some(path) = url.strip_prefix("sqlite:") else {
    return url.clone();
  };
  if path.starts_with(':') || Path::new(path).is_absolute() {
    return url.clone();
  }
  format!("sqlite:{}", base_dir.join(path).display())
}
