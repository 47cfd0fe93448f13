//! Human-readable citations derived from precedent ids.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::precedent::PrecedentId;

/// Fixed prefix shared by every citation.
pub const CITATION_PREFIX: &str = "ELEANOR";

/// A stable, human-readable reference to a precedent, e.g. `ELEANOR-0007`.
///
/// Always derived from the id via [`Citation::for_id`]; never parsed back.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Citation(String);

impl Citation {
  /// The citation for `id`: the prefix plus the id padded to four digits.
  pub fn for_id(id: PrecedentId) -> Self {
    Self(format!("{CITATION_PREFIX}-{id:04}"))
  }

  pub fn as_str(&self) -> &str { &self.0 }
}

impl fmt::Display for Citation {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.0)
  }
}
