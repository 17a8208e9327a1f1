/* src/cli/core/src/clean.rs */

// `atelier clean`: delete blueprints whose name collides with a reserved
// GraphQL type name. The generator skips them; this removes them for good.

use std::path::Path;

use anyhow::Result;

use atelier_codegen::is_reserved_name;
use atelier_store::models::Blueprint;

use crate::config::{AtelierConfig, resolve_database_url};
use crate::ui;

pub async fn run_clean(config: &AtelierConfig, base_dir: &Path) -> Result<()> {
  ui::arrow("scanning blueprints");

  let url = resolve_database_url(&config.store, base_dir);
  let pool = atelier_store::connect(&url).await?;

  let rows = Blueprint::find_all(&pool).await?;
  let conflicting: Vec<_> = rows.into_iter().filter(|b| is_reserved_name(&b.name)).collect();

  if conflicting.is_empty() {
    ui::ok("no reserved-name blueprints found");
    return Ok(());
  }

  for blueprint in &conflicting {
    Blueprint::delete_by_name(&pool, &blueprint.name).await?;
    ui::detail(&format!("removed \"{}\"", blueprint.name));
  }
  ui::ok(&format!("removed {} blueprint(s)", conflicting.len()));
  Ok(())
}
