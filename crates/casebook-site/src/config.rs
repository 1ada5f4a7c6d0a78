//! Runtime configuration for the seed and generate binaries.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::Result;

pub const DEFAULT_DB_PATH: &str = "defence.db";
pub const DEFAULT_TEMPLATE_PATH: &str = "site_template.html";
pub const DEFAULT_OUTPUT_PATH: &str = "index.html";

/// Where the store, the template and the generated page live.
///
/// Built from the defaults above, then an optional TOML file, then
/// `CASEBOOK_*` environment variables (e.g. `CASEBOOK_OUTPUT_PATH`).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SiteConfig {
  pub db_path:       PathBuf,
  pub template_path: PathBuf,
  pub output_path:   PathBuf,
}

impl Default for SiteConfig {
  fn default() -> Self {
    Self {
      db_path:       PathBuf::from(DEFAULT_DB_PATH),
      template_path: PathBuf::from(DEFAULT_TEMPLATE_PATH),
      output_path:   PathBuf::from(DEFAULT_OUTPUT_PATH),
    }
  }
}

impl SiteConfig {
  /// Load configuration. A missing `file` is not an error.
  pub fn load(file: &Path) -> Result<Self> {
    let settings = config::Config::builder()
      .set_default("db_path", DEFAULT_DB_PATH)?
      .set_default("template_path", DEFAULT_TEMPLATE_PATH)?
      .set_default("output_path", DEFAULT_OUTPUT_PATH)?
      .add_source(config::File::from(file).required(false))
      .add_source(config::Environment::with_prefix("CASEBOOK"))
      .build()?;

    Ok(settings.try_deserialize()?)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn missing_file_gives_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = SiteConfig::load(&dir.path().join("absent.toml")).unwrap();
    assert_eq!(cfg, SiteConfig::default());
  }

  #[test]
  fn file_overrides_some_keys() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("casebook.toml");
    std::fs::write(&file, "output_path = \"public/index.html\"\n").unwrap();

    let cfg = SiteConfig::load(&file).unwrap();
    assert_eq!(cfg.output_path, PathBuf::from("public/index.html"));
    assert_eq!(cfg.db_path, PathBuf::from(DEFAULT_DB_PATH));
    assert_eq!(cfg.template_path, PathBuf::from(DEFAULT_TEMPLATE_PATH));
  }

  #[test]
  fn malformed_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("casebook.toml");
    std::fs::write(&file, "output_path = [unterminated\n").unwrap();

    assert!(matches!(SiteConfig::load(&file), Err(crate::Error::Config(_))));
  }
}
