//! Reset the store and fill it with the sample defences, cases and quiz.
//!
//! Also writes the bundled page template next to the store if no template
//! file exists yet.

use std::path::PathBuf;

use anyhow::Context as _;
use casebook_core::store::CaseStore;
use casebook_site::{SiteConfig, ensure_template, seed};
use casebook_store_sqlite::SqliteStore;
use clap::Parser;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about = "Reset and seed the casebook store")]
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
  seed(&store).context("failed to seed store")?;
  store.close().context("failed to close store")?;

  if ensure_template(&cfg.template_path)? {
    tracing::info!(path = %cfg.template_path.display(), "wrote default template");
  }

  Ok(())
}
