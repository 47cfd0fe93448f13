//! Composing the decision payload recorded alongside an evaluation.

use precedent_core::search::SearchResult;
use precedent_critics::Evaluation;
use serde_json::{Value, json};

/// Summarise an evaluation and the precedents it was compared against.
pub fn compose(evaluation: &Evaluation, similar: &[SearchResult]) -> Value {
  let critic_count = evaluation.len();
  let mean_confidence = if critic_count == 0 {
    0.0
  } else {
    evaluation.values().map(|r| r.confidence).sum::<f64>() / critic_count as f64
  };

  json!({
    "critic_count":       critic_count,
    "mean_confidence":    mean_confidence,
    "similar_precedents": similar.iter().map(|r| r.citation.as_str()).collect::<Vec<_>>(),
  })
}
