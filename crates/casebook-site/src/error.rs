//! Error type for `casebook-site`.

use std::{io, path::PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("store error: {0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),

  #[error("failed to read template {path:?}: {source}")]
  ReadTemplate {
    path:   PathBuf,
    #[source]
    source: io::Error,
  },

  #[error("failed to write {path:?}: {source}")]
  WriteOutput {
    path:   PathBuf,
    #[source]
    source: io::Error,
  },

  #[error("config error: {0}")]
  Config(#[from] config::ConfigError),
}

impl Error {
  pub fn store<E>(e: E) -> Self
  where
    E: std::error::Error + Send + Sync + 'static,
  {
    Error::Store(Box::new(e))
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
