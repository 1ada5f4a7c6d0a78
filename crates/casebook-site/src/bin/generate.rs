//! Regenerate the site page from the current store contents.

use std::path::PathBuf;

use anyhow::Context as _;
use casebook_site::{SiteConfig, generate};
use casebook_store_sqlite::SqliteStore;
use clap::Parser;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about = "Generate the casebook HTML page")]
struct Cli {
  /// Path to an optional TOML configuration file.
  #[arg(short, long, default_value = "casebook.toml")]
  config: PathBuf,
}

fn main() -> anyhow::Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .init();

  let cli = Cli::parse();
  let cfg = SiteConfig::load(&cli.config).context("failed to load configuration")?;

  let store = SqliteStore::open(&cfg.db_path)
    .with_context(|| format!("failed to open store at {:?}", cfg.db_path))?;

  generate(store, &cfg.template_path, &cfg.output_path)
    .with_context(|| format!("failed to generate {:?}", cfg.output_path))?;

  Ok(())
}
