/* src/cli/core/src/serve.rs */

use std::path::Path;

use anyhow::{Context, Result};

use atelier_axum::{AppState, build_router};
use atelier_content::default_registry;

use crate::config::{AtelierConfig, resolve_database_url};
use crate::ui;

pub async fn run_serve(config: &AtelierConfig, base_dir: &Path) -> Result<()> {
  tracing_subscriber::fmt().with_target(false).init();

  let url = resolve_database_url(&config.store, base_dir);
  let pool = atelier_store::connect(&url).await?;

  if config.server.auth_token.is_none() {
    ui::warn("server.auth_token is not set -- mutating endpoints are open");
  }

  let state = AppState {
    pool,
    registry: default_registry(),
    default_locale: config.locales.default_locale(),
    auth_token: config.server.auth_token.clone(),
  };
  let app = build_router(state);

  let addr = format!("0.0.0.0:{}", config.server.port);
  let listener =
    tokio::net::TcpListener::bind(&addr).await.with_context(|| format!("failed to bind {addr}"))?;
  ui::arrow(&format!("{} listening on http://{addr}", config.project.name));
  axum::serve(listener, app).await.context("server error")?;
  Ok(())
}
