//! Runtime settings, read from an optional TOML file and the environment.

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use precedent_core::search::DEFAULT_LIMIT;
use precedent_critics::CriticSpec;
use serde::Deserialize;

/// Shape of `precedent.toml`. Every field is optional.
///
/// ```toml
/// storage_dir  = "data/precedents"
/// ollama_bin   = "ollama"
/// search_limit = 5
///
/// [[critics]]
/// name  = "rights"
/// model = "eleanor-rights"
/// ```
///
/// Environment variables prefixed `PRECEDENT_` override the file, e.g.
/// `PRECEDENT_STORAGE_DIR=/var/lib/precedents`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Settings {
  pub storage_dir:  PathBuf,
  pub ollama_bin:   PathBuf,
  pub search_limit: usize,
  pub critics:      Vec<CriticSpec>,
}

impl Default for Settings {
  fn default() -> Self {
    Self {
      storage_dir:  PathBuf::from("data/precedents"),
      ollama_bin:   PathBuf::from("ollama"),
      search_limit: DEFAULT_LIMIT,
      critics:      CriticSpec::defaults(),
    }
  }
}

impl Settings {
  /// Layer `path` (if it exists) under `PRECEDENT_*` environment variables.
  pub fn load(path: &Path) -> anyhow::Result<Self> {
    config::Config::builder()
      .add_source(config::File::from(path).required(false))
      .add_source(config::Environment::with_prefix("PRECEDENT"))
      .build()
      .with_context(|| format!("failed to read config file {}", path.display()))?
      .try_deserialize()
      .context("failed to deserialise settings")
  }
}
