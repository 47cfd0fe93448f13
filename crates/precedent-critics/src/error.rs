//! Error types for `precedent-critics`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("failed to run critic model {model:?}: {source}")]
  Spawn {
    model:  String,
    #[source]
    source: std::io::Error,
  },

  #[error("critic {critic:?} failed: {message}")]
  Critic { critic: String, message: String },

  #[error("core error: {0}")]
  Core(#[from] precedent_core::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
