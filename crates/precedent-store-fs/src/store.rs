//! [`FsStore`] — the JSON-file implementation of [`PrecedentStore`].

use std::{
  fs,
  path::{Path, PathBuf},
  sync::{Mutex, MutexGuard, PoisonError},
};

use chrono::Utc;
use tracing::{debug, info, warn};

use precedent_core::{
  citation::Citation,
  index::{IndexEntry, LedgerIndex},
  precedent::{NewPrecedent, Precedent, PrecedentId},
  store::PrecedentStore,
};

use crate::{
  Error, Result,
  encode::{read_json, write_json},
  layout::{index_path, record_path},
};

// ─── Store ───────────────────────────────────────────────────────────────────

/// A precedent ledger kept in a single directory of JSON files.
///
/// The index is loaded once at [`FsStore::open`] and then owned by the store.
/// Inserts run their whole read-modify-write under an internal mutex, so a
/// store shared between threads hands out distinct, gap-free ids.
///
/// Two *processes* opening the same directory each hold their own copy of the
/// index and can race on `next_id`; there is no cross-process lock.
pub struct FsStore {
  root:  PathBuf,
  index: Mutex<LedgerIndex>,
}

impl FsStore {
  /// Open (or create) a ledger rooted at `root`.
  ///
  /// A missing index starts a fresh ledger. An index that exists but cannot
  /// be decoded is an error: starting over would reissue ids.
  pub fn open(root: impl AsRef<Path>) -> Result<Self> {
    let root = root.as_ref().to_path_buf();
    fs::create_dir_all(&root).map_err(|e| Error::io(&root, e))?;

    let index: LedgerIndex = read_json(&index_path(&root))?.unwrap_or_default();

    info!(
      path = %root.display(),
      precedents = index.len(),
      next_id = index.next_id(),
      "opened precedent ledger"
    );

    Ok(Self { root, index: Mutex::new(index) })
  }

  /// The storage directory.
  pub fn root(&self) -> &Path { &self.root }

  // The index is only replaced after a successful write, so a panic while
  // the lock was held cannot have left it half-updated.
  fn lock_index(&self) -> MutexGuard<'_, LedgerIndex> {
    self.index.lock().unwrap_or_else(PoisonError::into_inner)
  }

  fn read_record(&self, id: PrecedentId) -> Result<Option<Precedent>> {
    read_json(&record_path(&self.root, id))
  }
}

// ─── PrecedentStore impl ─────────────────────────────────────────────────────

impl PrecedentStore for FsStore {
  type Error = Error;

  fn insert(&self, input: NewPrecedent) -> Result<PrecedentId> {
    let mut index = self.lock_index();

    let id = index.next_id();
    let precedent = Precedent {
      id,
      timestamp:  Utc::now(),
      input_text: input.input_text,
      decision:   input.decision,
      critics:    input.critics,
      tags:       input.tags,
      citation:   Citation::for_id(id),
    };

    // Record first, index last: the index write is the commit point.
    write_json(&record_path(&self.root, id), &precedent)?;

    let next = index.appended(&precedent);
    write_json(&index_path(&self.root), &next)?;
    *index = next;

    debug!(id, citation = %precedent.citation, "inserted precedent");
    Ok(id)
  }

  fn get(&self, id: PrecedentId) -> Result<Option<Precedent>> {
    self.read_record(id)
  }

  fn get_all(&self) -> Result<Vec<Precedent>> {
    let ids: Vec<PrecedentId> =
      self.lock_index().precedents.iter().map(|e| e.id).collect();

    let mut precedents = Vec::with_capacity(ids.len());
    for id in ids {
      match self.read_record(id) {
        Ok(Some(p)) => precedents.push(p),
        Ok(None) => warn!(id, "indexed precedent has no record; skipping"),
        Err(Error::Corrupt { path, source }) => {
          warn!(id, path = %path.display(), error = %source, "corrupt precedent record; skipping");
        }
        Err(e) => return Err(e),
      }
    }
    Ok(precedents)
  }

  fn summaries(&self) -> Vec<IndexEntry> { self.lock_index().precedents.clone() }

  fn count(&self) -> usize { self.lock_index().len() }

  fn next_id(&self) -> PrecedentId { self.lock_index().next_id() }
}
