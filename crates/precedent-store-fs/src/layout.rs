//! On-disk layout of a storage directory.
//!
//! ```text
//! <storage_dir>/
//!   index.json              { "precedents": [...], "next_id": N }
//!   precedent_0001.json     full record for id 1
//!   precedent_0002.json
//!   ...
//! ```

use std::path::{Path, PathBuf};

use precedent_core::precedent::PrecedentId;

/// Name of the index document.
pub const INDEX_FILE: &str = "index.json";

/// File name of the record for `id`; the id is padded to four digits.
pub fn record_file_name(id: PrecedentId) -> String {
  format!("precedent_{id:04}.json")
}

pub fn index_path(root: &Path) -> PathBuf { root.join(INDEX_FILE) }

pub fn record_path(root: &Path, id: PrecedentId) -> PathBuf {
  root.join(record_file_name(id))
}
