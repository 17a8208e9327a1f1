/* src/cli/core/src/generate.rs */

// `atelier generate`: read every blueprint, emit the GraphQL SDL file.
// With --check, compare fingerprints instead of writing anything.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};

use atelier_codegen::{embedded_fingerprint, generate_schema};
use atelier_store::models::Blueprint;

use crate::config::{AtelierConfig, resolve_database_url};
use crate::ui;

pub async fn run_generate(
  config: &AtelierConfig,
  base_dir: &Path,
  out: Option<PathBuf>,
  check: bool,
) -> Result<()> {
  let out_path = out.unwrap_or_else(|| base_dir.join(config.generate.out_path()));
  let url = resolve_database_url(&config.store, base_dir);

  ui::step(1, 3, "reading blueprints");
  let pool = atelier_store::connect(&url).await?;
  let rows = Blueprint::find_all(&pool).await?;
  let definitions: Vec<_> = rows.iter().map(Blueprint::definition).collect();
  ui::detail(&format!("{} blueprint(s)", definitions.len()));

  ui::step(2, 3, "generating schema");
  let schema = generate_schema(&definitions);
  for name in &schema.skipped {
    ui::warn(&format!(
      "blueprint \"{name}\" collides with a reserved GraphQL type name, skipped (run `atelier clean`)"
    ));
  }

  if check {
    let existing = std::fs::read_to_string(&out_path)
      .with_context(|| format!("no generated schema at {}", out_path.display()))?;
    match embedded_fingerprint(&existing) {
      Some(fp) if fp == schema.fingerprint => {
        ui::ok("schema is up to date");
        Ok(())
      }
      Some(_) => {
        bail!(
          "schema drift: {} no longer matches the stored blueprints (run `atelier generate`)",
          out_path.display()
        )
      }
      None => bail!("{} carries no fingerprint; regenerate it", out_path.display()),
    }
  } else {
    ui::step(3, 3, "writing schema");
    if let Some(parent) = out_path.parent() {
      std::fs::create_dir_all(parent)
        .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    std::fs::write(&out_path, &schema.sdl)
      .with_context(|| format!("failed to write {}", out_path.display()))?;

    let line_count = schema.sdl.lines().count();
    ui::ok(&format!("generated {} type(s)", schema.type_count));
    ui::ok(&format!("{}  {line_count} lines", out_path.display()));
    Ok(())
  }
}
