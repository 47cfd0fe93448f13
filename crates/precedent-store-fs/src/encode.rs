//! Reading and writing the JSON documents in a storage directory.
//!
//! Reads are whole-file. Writes go to a [`NamedTempFile`] in the same
//! directory, are synced, and then renamed over the target, so readers see
//! either the old document or the new one and never a partial write.

use std::{
  fs,
  io::{self, Write as _},
  path::Path,
};

use serde::{Serialize, de::DeserializeOwned};
use tempfile::NamedTempFile;

use crate::{Error, Result};

/// Read and decode the JSON document at `path`.
///
/// Returns `Ok(None)` if the file does not exist.
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<Option<T>> {
  let bytes = match fs::read(path) {
    Ok(bytes) => bytes,
    Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
    Err(e) => return Err(Error::io(path, e)),
  };

  serde_json::from_slice(&bytes)
    .map(Some)
    .map_err(|source| Error::Corrupt { path: path.to_path_buf(), source })
}

/// Atomically replace `path` with the pretty-printed JSON of `value`.
pub fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
  let bytes = serde_json::to_vec_pretty(value)
    .map_err(|source| Error::Encode { path: path.to_path_buf(), source })?;

  let dir = path.parent().unwrap_or_else(|| Path::new("."));
  let mut temp = NamedTempFile::new_in(dir).map_err(|e| Error::io(dir, e))?;
  temp.write_all(&bytes).map_err(|e| Error::io(temp.path(), e))?;
  temp.as_file().sync_all().map_err(|e| Error::io(temp.path(), e))?;
  temp.persist(path).map_err(|e| Error::io(path, e.error))?;
  Ok(())
}
