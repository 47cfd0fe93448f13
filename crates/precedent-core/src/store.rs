//! The `PrecedentStore` trait.
//!
//! The trait is implemented by storage backends (e.g. `precedent-store-fs`).
//! Retrieval ([`crate::search`]) and the command-line front end depend on
//! this abstraction, not on any concrete backend.

use crate::{
  index::IndexEntry,
  precedent::{NewPrecedent, Precedent, PrecedentId},
};

/// Abstraction over a precedent ledger backend.
///
/// Precedents are append-only: there is no update or delete. All methods are
/// synchronous and may block on I/O.
pub trait PrecedentStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Persist a new precedent and return its id.
  ///
  /// The id, timestamp and citation are assigned by the store. Ids start at
  /// 1 and increase by exactly one per successful insert.
  fn insert(&self, input: NewPrecedent) -> Result<PrecedentId, Self::Error>;

  /// Retrieve a precedent by id. Returns `None` if no record exists.
  fn get(&self, id: PrecedentId) -> Result<Option<Precedent>, Self::Error>;

  /// Every indexed precedent in insertion order. Entries whose record cannot
  /// be read back are skipped.
  fn get_all(&self) -> Result<Vec<Precedent>, Self::Error>;

  /// Index summaries in insertion order, without reading full records.
  fn summaries(&self) -> Vec<IndexEntry>;

  /// Number of entries in the index.
  fn count(&self) -> usize;

  /// The id the next insert will receive.
  fn next_id(&self) -> PrecedentId;
}
