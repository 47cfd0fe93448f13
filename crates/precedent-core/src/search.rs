//! Lexical precedent retrieval.
//!
//! Scores every stored precedent by the fraction of distinct query tokens
//! that also occur in its input text. Tokens are lowercased and split on
//! whitespace; there is no stemming, stop-word removal or weighting.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::{
  citation::Citation,
  precedent::{Critics, Precedent, PrecedentId},
  store::PrecedentStore,
};

/// Number of results returned when the caller does not specify a limit.
pub const DEFAULT_LIMIT: usize = 5;

/// One ranked precedent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
  pub id:               PrecedentId,
  pub citation:         Citation,
  pub input_text:       String,
  pub decision:         serde_json::Value,
  pub critics:          Critics,
  /// Token overlap score in `(0, 1]`.
  pub similarity_score: f64,
}

impl SearchResult {
  fn new(precedent: Precedent, similarity_score: f64) -> Self {
    Self {
      id: precedent.id,
      citation: precedent.citation,
      input_text: precedent.input_text,
      decision: precedent.decision,
      critics: precedent.critics,
      similarity_score,
    }
  }
}

/// The distinct lowercase whitespace-delimited tokens of `text`.
pub fn tokenize(text: &str) -> HashSet<String> {
  text.to_lowercase().split_whitespace().map(str::to_owned).collect()
}

/// `|query ∩ candidate| / max(|query|, 1)`.
pub fn overlap_score(query: &HashSet<String>, candidate: &HashSet<String>) -> f64 {
  let overlap = query.intersection(candidate).count();
  overlap as f64 / query.len().max(1) as f64
}

/// Rank `precedents` against `query_text`.
///
/// Candidates are stably sorted by score, so ties keep the order of
/// `precedents`. The first `limit` are kept and zero scores are dropped
/// afterwards, in that order: a zero-score candidate inside the cut is
/// removed rather than replaced.
pub fn rank(
  precedents: Vec<Precedent>,
  query_text: &str,
  limit: usize,
) -> Vec<SearchResult> {
  let query = tokenize(query_text);

  let mut scored: Vec<(Precedent, f64)> = precedents
    .into_iter()
    .map(|p| {
      let score = overlap_score(&query, &tokenize(&p.input_text));
      (p, score)
    })
    .collect();

  scored.sort_by(|a, b| b.1.total_cmp(&a.1));

  scored
    .into_iter()
    .take(limit)
    .filter(|(_, score)| *score > 0.0)
    .map(|(p, score)| SearchResult::new(p, score))
    .collect()
}

/// Search `store` for precedents resembling `query_text`.
pub fn search<S: PrecedentStore + ?Sized>(
  store: &S,
  query_text: &str,
  limit: usize,
) -> Result<Vec<SearchResult>, S::Error> {
  let precedents = store.get_all()?;
  if precedents.is_empty() {
    return Ok(Vec::new());
  }
  Ok(rank(precedents, query_text, limit))
}
