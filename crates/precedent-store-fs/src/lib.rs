//! JSON-file backend for the precedent ledger.
//!
//! One pretty-printed JSON document per precedent plus an `index.json`
//! summary, all inside a single storage directory. Every write goes through a
//! temporary file and an atomic rename.

mod encode;
mod layout;
mod store;

pub mod error;

pub use error::{Error, Result};
pub use layout::{INDEX_FILE, record_file_name};
pub use store::FsStore;
