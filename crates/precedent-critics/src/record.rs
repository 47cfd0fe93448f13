//! The fixed-shape critic record and its lenient line parser.

use serde::{Deserialize, Serialize};

/// One critic's judgment of an input.
///
/// Field names on the wire match the labels critics are prompted to emit.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CriticRecord {
  #[serde(rename = "Claim")]
  pub claim:                    String,
  #[serde(rename = "Evidence")]
  pub evidence:                 String,
  #[serde(rename = "Constitutional Principle")]
  pub constitutional_principle: String,
  #[serde(rename = "Confidence")]
  pub confidence:               f64,
  #[serde(rename = "Mitigation")]
  pub mitigation:               String,
  /// The critic's full, unparsed answer.
  pub raw:                      String,
}

/// Parse a critic's free-text answer.
///
/// Never fails. Each line is checked for the markers `Claim:`, `Evidence:`,
/// `Constitutional Principle:`, `Confidence:` and `Mitigation:` in that
/// order; the first marker found anywhere in the line claims it, and the
/// value is whatever follows the line's first colon, trimmed. Later lines
/// overwrite earlier ones. Fields that never appear stay empty, and a
/// confidence that is not a number becomes `0.0`.
pub fn parse_critic_output(text: &str) -> CriticRecord {
  let mut record = CriticRecord { raw: text.to_owned(), ..Default::default() };

  for line in text.lines() {
    let value = || {
      line
        .split_once(':')
        .map(|(_, rest)| rest.trim().to_owned())
        .unwrap_or_default()
    };

    if line.contains("Claim:") {
      record.claim = value();
    } else if line.contains("Evidence:") {
      record.evidence = value();
    } else if line.contains("Constitutional Principle:") {
      record.constitutional_principle = value();
    } else if line.contains("Confidence:") {
      record.confidence = value().parse().unwrap_or(0.0);
    } else if line.contains("Mitigation:") {
      record.mitigation = value();
    }
  }

  record
}

#[cfg(test)]
mod tests {
  use serde_json::json;

  use super::*;

  const WELL_FORMED: &str = "\
Claim: The request restricts speech.
Evidence: Section 2 bans all criticism.
Constitutional Principle: Freedom of expression
Confidence: 0.85
Mitigation: Narrow the ban to threats.";

  #[test]
  fn parses_all_fields() {
    let r = parse_critic_output(WELL_FORMED);
    assert_eq!(r.claim, "The request restricts speech.");
    assert_eq!(r.evidence, "Section 2 bans all criticism.");
    assert_eq!(r.constitutional_principle, "Freedom of expression");
    assert_eq!(r.confidence, 0.85);
    assert_eq!(r.mitigation, "Narrow the ban to threats.");
    assert_eq!(r.raw, WELL_FORMED);
  }

  #[test]
  fn empty_output_gives_defaults() {
    let r = parse_critic_output("");
    assert_eq!(r, CriticRecord::default());
  }

  #[test]
  fn unparseable_confidence_is_zero() {
    assert_eq!(parse_critic_output("Confidence: high").confidence, 0.0);
    assert_eq!(parse_critic_output("Confidence:").confidence, 0.0);
  }

  #[test]
  fn unmatched_fields_stay_empty() {
    let r = parse_critic_output("Claim: only a claim\nsome chatter");
    assert_eq!(r.claim, "only a claim");
    assert!(r.evidence.is_empty());
    assert!(r.mitigation.is_empty());
    assert_eq!(r.confidence, 0.0);
  }

  #[test]
  fn marker_may_appear_mid_line() {
    let r = parse_critic_output("1. Claim: numbered");
    assert_eq!(r.claim, "numbered");
  }

  #[test]
  fn value_starts_after_first_colon_of_the_line() {
    let r = parse_critic_output("Note: Claim: nested");
    assert_eq!(r.claim, "Claim: nested");
  }

  #[test]
  fn earlier_marker_wins_within_a_line() {
    let r = parse_critic_output("Evidence: see Claim: above");
    assert_eq!(r.claim, "see Claim: above");
    assert!(r.evidence.is_empty());
  }

  #[test]
  fn later_lines_overwrite() {
    let r = parse_critic_output("Confidence: 0.2\nConfidence: 0.9");
    assert_eq!(r.confidence, 0.9);
  }

  #[test]
  fn serializes_with_label_keys() {
    let value = serde_json::to_value(parse_critic_output(WELL_FORMED)).unwrap();
    assert_eq!(value["Constitutional Principle"], json!("Freedom of expression"));
    assert_eq!(value["Confidence"], json!(0.85));
    assert_eq!(value["raw"], json!(WELL_FORMED));
  }
}
