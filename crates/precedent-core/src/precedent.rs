//! Precedent types — the unit of record in the ledger.
//!
//! A precedent is an immutable record of one evaluated input: the text, the
//! decision reached, and the critics' judgments. Precedents are written once
//! and never updated or deleted.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{Result, citation::Citation};

/// Ledger-assigned identifier. Starts at 1, strictly increasing, never
/// reused.
pub type PrecedentId = u64;

/// Critic name → that critic's judgment, stored verbatim.
pub type Critics = BTreeMap<String, serde_json::Value>;

// ─── Precedent ───────────────────────────────────────────────────────────────

/// A stored precedent as persisted by the ledger.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Precedent {
  pub id:         PrecedentId,
  /// Server-assigned creation time; never changes after insert.
  #[serde(with = "timestamp")]
  pub timestamp:  DateTime<Utc>,
  pub input_text: String,
  /// Opaque outcome payload; no schema is enforced.
  pub decision:   serde_json::Value,
  pub critics:    Critics,
  #[serde(default)]
  pub tags:       Vec<String>,
  pub citation:   Citation,
}

// ─── NewPrecedent ────────────────────────────────────────────────────────────

/// Input to [`crate::store::PrecedentStore::insert`].
/// `id`, `timestamp` and `citation` are always set by the store.
#[derive(Debug, Clone)]
pub struct NewPrecedent {
  pub input_text: String,
  pub decision:   serde_json::Value,
  pub critics:    Critics,
  pub tags:       Vec<String>,
}

impl NewPrecedent {
  /// Convenience constructor with no tags.
  pub fn new(
    input_text: impl Into<String>,
    decision: serde_json::Value,
    critics: Critics,
  ) -> Self {
    Self { input_text: input_text.into(), decision, critics, tags: Vec::new() }
  }

  pub fn with_tags<I, T>(mut self, tags: I) -> Self
  where
    I: IntoIterator<Item = T>,
    T: Into<String>,
  {
    self.tags = tags.into_iter().map(Into::into).collect();
    self
  }
}

/// Convert any serialisable per-critic records into a [`Critics`] payload.
pub fn critics_payload<'a, T, I>(records: I) -> Result<Critics>
where
  T: Serialize + 'a,
  I: IntoIterator<Item = (&'a String, &'a T)>,
{
  records
    .into_iter()
    .map(|(name, record)| -> Result<(String, serde_json::Value)> {
      Ok((name.clone(), serde_json::to_value(record)?))
    })
    .collect()
}

// ─── Timestamps ──────────────────────────────────────────────────────────────

/// Serde adapter for precedent timestamps.
///
/// Writes RFC 3339 UTC. Reads RFC 3339, and also naive ISO 8601 timestamps
/// with no offset, which are taken to be UTC.
pub mod timestamp {
  use chrono::{DateTime, NaiveDateTime, SecondsFormat, Utc};
  use serde::{Deserialize, Deserializer, Serializer, de};

  use crate::{Error, Result};

  pub fn encode(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Micros, true)
  }

  pub fn decode(s: &str) -> Result<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
      return Ok(dt.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f")
      .map(|naive| naive.and_utc())
      .map_err(|e| Error::InvalidTimestamp {
        value:  s.to_owned(),
        reason: e.to_string(),
      })
  }

  pub fn serialize<S: Serializer>(
    dt: &DateTime<Utc>,
    serializer: S,
  ) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&encode(dt))
  }

  pub fn deserialize<'de, D: Deserializer<'de>>(
    deserializer: D,
  ) -> Result<DateTime<Utc>, D::Error> {
    let raw = String::deserialize(deserializer)?;
    decode(&raw).map_err(de::Error::custom)
  }
}

#[cfg(test)]
mod tests {
  use chrono::TimeZone;
  use serde_json::json;

  use super::*;

  #[test]
  fn decode_accepts_rfc3339() {
    let dt = timestamp::decode("2024-03-01T10:20:30.5Z").unwrap();
    let expected = Utc.with_ymd_and_hms(2024, 3, 1, 10, 20, 30).unwrap()
      + chrono::Duration::milliseconds(500);
    assert_eq!(dt, expected);
  }

  #[test]
  fn decode_accepts_naive_as_utc() {
    let dt = timestamp::decode("2024-03-01T10:20:30.123456").unwrap();
    let second = Utc.with_ymd_and_hms(2024, 3, 1, 10, 20, 30).unwrap();
    assert_eq!(dt.timestamp(), second.timestamp());
    assert_eq!(dt.timestamp_subsec_micros(), 123_456);

    let whole = timestamp::decode("2024-03-01T10:20:30").unwrap();
    assert_eq!(whole, Utc.with_ymd_and_hms(2024, 3, 1, 10, 20, 30).unwrap());
  }

  #[test]
  fn decode_rejects_garbage() {
    let err = timestamp::decode("yesterday").unwrap_err();
    assert!(matches!(err, crate::Error::InvalidTimestamp { .. }));
  }

  #[test]
  fn precedent_reads_legacy_record() {
    let raw = json!({
      "id": 3,
      "timestamp": "2024-01-05T08:00:00.000001",
      "input_text": "deny the loan",
      "decision": { "outcome": "deny" },
      "critics": { "risk": { "Claim": "too risky" } },
      "tags": ["finance"],
      "citation": "ELEANOR-0003"
    });

    let p: Precedent = serde_json::from_value(raw).unwrap();
    assert_eq!(p.id, 3);
    assert_eq!(p.citation, Citation::for_id(3));
    assert_eq!(p.tags, ["finance"]);
    assert_eq!(p.critics["risk"]["Claim"], "too risky");
  }

  #[test]
  fn missing_tags_default_to_empty() {
    let raw = json!({
      "id": 1,
      "timestamp": "2024-01-05T08:00:00Z",
      "input_text": "",
      "decision": null,
      "critics": {},
      "citation": "ELEANOR-0001"
    });
    let p: Precedent = serde_json::from_value(raw).unwrap();
    assert!(p.tags.is_empty());
  }

  #[test]
  fn critics_payload_keeps_every_entry() {
    let mut records = BTreeMap::new();
    records.insert("truth".to_owned(), vec![1, 2]);
    records.insert("risk".to_owned(), vec![3]);

    let payload = critics_payload(&records).unwrap();
    assert_eq!(payload.len(), 2);
    assert_eq!(payload["truth"], json!([1, 2]));
  }
}
