/* src/cli/core/src/main.rs */

mod clean;
mod config;
mod generate;
mod serve;
mod ui;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use config::{AtelierConfig, find_atelier_config, load_atelier_config};

#[derive(Parser)]
#[command(name = "atelier", about = "Atelier CMS CLI")]
struct Cli {
  #[command(subcommand)]
  command: Command,
}

#[derive(Subcommand)]
enum Command {
  /// Generate the GraphQL schema file from stored blueprints
  Generate {
    /// Path to atelier.toml (auto-detected if omitted)
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Output file path (overrides generate.out)
    #[arg(short, long)]
    out: Option<PathBuf>,
    /// Verify the existing schema file instead of writing; exits non-zero on drift
    #[arg(long)]
    check: bool,
  },
  /// Remove blueprints whose names collide with reserved GraphQL type names
  Clean {
    /// Path to atelier.toml (auto-detected if omitted)
    #[arg(short, long)]
    config: Option<PathBuf>,
  },
  /// Run the content API server
  Serve {
    /// Path to atelier.toml (auto-detected if omitted)
    #[arg(short, long)]
    config: Option<PathBuf>,
  },
}

/// Resolve config path (explicit or auto-detected) and parse it
fn resolve_config(explicit: Option<PathBuf>) -> Result<(PathBuf, AtelierConfig)> {
  let path = match explicit {
    Some(p) => p,
    None => {
      let cwd = std::env::current_dir().context("failed to get cwd")?;
      find_atelier_config(&cwd)?
    }
  };
  let config = load_atelier_config(&path)?;
  Ok((path, config))
}

#[tokio::main]
async fn main() -> Result<()> {
  let cli = Cli::parse();

  match cli.command {
    Command::Generate { config, out, check } => {
      let (config_path, config) = resolve_config(config)?;
      let base_dir = config_path.parent().unwrap_or_else(|| std::path::Path::new("."));
      ui::banner("generate");
      generate::run_generate(&config, base_dir, out, check).await?;
    }
    Command::Clean { config } => {
      let (config_path, config) = resolve_config(config)?;
      let base_dir = config_path.parent().unwrap_or_else(|| std::path::Path::new("."));
      ui::banner("clean");
      clean::run_clean(&config, base_dir).await?;
    }
    Command::Serve { config } => {
      let (config_path, config) = resolve_config(config)?;
      let base_dir = config_path.parent().unwrap_or_else(|| std::path::Path::new("."));
      ui::banner("serve");
      serve::run_serve(&config, base_dir).await?;
    }
  }

  Ok(())
}
