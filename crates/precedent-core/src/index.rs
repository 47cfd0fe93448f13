//! The ledger index — lightweight summaries co-located with the records.
//!
//! The index is the ledger's commit point: a precedent exists once its
//! summary has been appended here and the index persisted.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{
  citation::Citation,
  precedent::{Precedent, PrecedentId, timestamp},
};

/// Number of characters of `input_text` kept in an [`IndexEntry`].
pub const PREVIEW_CHARS: usize = 100;

/// Summary of one stored precedent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndexEntry {
  pub id:            PrecedentId,
  #[serde(with = "timestamp")]
  pub timestamp:     DateTime<Utc>,
  pub citation:      Citation,
  /// The first [`PREVIEW_CHARS`] characters of the input text.
  pub input_preview: String,
}

impl IndexEntry {
  pub fn summarize(precedent: &Precedent) -> Self {
    Self {
      id:            precedent.id,
      timestamp:     precedent.timestamp,
      citation:      precedent.citation.clone(),
      input_preview: preview(&precedent.input_text),
    }
  }
}

/// Truncate `text` to [`PREVIEW_CHARS`] characters (not bytes).
pub fn preview(text: &str) -> String {
  text.chars().take(PREVIEW_CHARS).collect()
}

/// The persisted index document: `{ "precedents": [...], "next_id": N }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LedgerIndex {
  pub precedents: Vec<IndexEntry>,
  pub next_id:    PrecedentId,
}

impl Default for LedgerIndex {
  fn default() -> Self { Self { precedents: Vec::new(), next_id: 1 } }
}

impl LedgerIndex {
  /// The id the next insert will receive.
  pub fn next_id(&self) -> PrecedentId { self.next_id }

  pub fn len(&self) -> usize { self.precedents.len() }

  pub fn is_empty(&self) -> bool { self.precedents.is_empty() }

  /// Return a copy of this index with `precedent` appended and `next_id`
  /// advanced past it. The receiver is left untouched so callers can commit
  /// the new index only after it has been persisted.
  pub fn appended(&self, precedent: &Precedent) -> Self {
    let mut next = self.clone();
    next.precedents.push(IndexEntry::summarize(precedent));
    next.next_id = next.next_id.max(precedent.id) + 1;
    next
  }
}
