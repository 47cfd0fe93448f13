//! The critic panel — fans one input out to every registered critic.

use std::collections::BTreeMap;

use precedent_core::precedent::{Critics, critics_payload};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::{
  Result,
  record::{CriticRecord, parse_critic_output},
  runner::CriticRunner,
};

/// Critic name → that critic's parsed record.
pub type Evaluation = BTreeMap<String, CriticRecord>;

/// A registered critic: the name it is stored under and the model it runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CriticSpec {
  pub name:  String,
  pub model: String,
}

impl CriticSpec {
  pub fn new(name: impl Into<String>, model: impl Into<String>) -> Self {
    Self { name: name.into(), model: model.into() }
  }

  /// The standard five-critic registry.
  pub fn defaults() -> Vec<Self> {
    ["rights", "fairness", "risk", "truth", "pragmatics"]
      .into_iter()
      .map(|name| Self::new(name, format!("eleanor-{name}")))
      .collect()
  }
}

/// An ordered set of critics sharing one runner.
pub struct CriticPanel<R> {
  runner:  R,
  critics: Vec<CriticSpec>,
}

impl<R: CriticRunner> CriticPanel<R> {
  pub fn new(runner: R, critics: Vec<CriticSpec>) -> Self { Self { runner, critics } }

  pub fn with_default_critics(runner: R) -> Self {
    Self::new(runner, CriticSpec::defaults())
  }

  pub fn critics(&self) -> &[CriticSpec] { &self.critics }

  /// Put `input_text` to every critic in registry order.
  ///
  /// Critics run one at a time. The first runner error aborts the whole
  /// evaluation; malformed answers do not, they parse to default fields.
  pub fn evaluate(&self, input_text: &str) -> Result<Evaluation> {
    let mut evaluation = Evaluation::new();
    for critic in &self.critics {
      info!(critic = %critic.name, model = %critic.model, "consulting critic");
      let answer = self.runner.run(&critic.model, input_text)?;
      evaluation.insert(critic.name.clone(), parse_critic_output(&answer));
    }
    Ok(evaluation)
  }
}

/// Convert an evaluation into the ledger's `critics` payload.
pub fn payload(evaluation: &Evaluation) -> Result<Critics> {
  Ok(critics_payload(evaluation)?)
}
