//! Static site assembly for the casebook.
//!
//! Reads defences, case law and quizzes from a
//! [`CaseStore`](casebook_core::CaseStore), renders them with
//! `casebook-render`, and substitutes the result into an HTML template.

pub mod config;
pub mod error;
pub mod generate;
pub mod seed;
pub mod template;

pub use config::SiteConfig;
pub use error::{Error, Result};
pub use generate::{generate, render_site};
pub use seed::seed;

use std::path::Path;

/// Write [`template::DEFAULT_TEMPLATE`] to `path` unless a file is already
/// there. Returns whether a file was written.
pub fn ensure_template(path: &Path) -> Result<bool> {
  if path.exists() {
    return Ok(false);
  }
  std::fs::write(path, template::DEFAULT_TEMPLATE).map_err(|source| Error::WriteOutput {
    path: path.to_path_buf(),
    source,
  })?;
  Ok(true)
}
