//! `precedent` — record critic evaluations and search past precedents.
//!
//! Reads `precedent.toml` (or the path given with `--config`), opens the
//! JSON-file ledger, and prints every result as JSON on stdout. Logs go to
//! stderr; set `RUST_LOG` to change verbosity.
//!
//! # Usage
//!
//! ```
//! precedent evaluate "Should the clinic share patient records?" --tag health
//! precedent search "patient records" --limit 3
//! precedent show 7
//! ```

mod decision;
mod settings;

use std::path::PathBuf;

use anyhow::{Context as _, bail};
use clap::{Parser, Subcommand};
use precedent_core::{
  citation::Citation,
  precedent::{Critics, NewPrecedent, PrecedentId},
  search,
  store::PrecedentStore,
};
use precedent_critics::{CriticPanel, OllamaRunner};
use precedent_store_fs::FsStore;
use serde::Serialize;
use serde_json::json;
use settings::Settings;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

// ─── CLI args ────────────────────────────────────────────────────────────────

#[derive(Parser)]
#[command(author, version, about = "Record and retrieve evaluated precedents")]
struct Cli {
  /// Path to the TOML configuration file.
  #[arg(short, long, default_value = "precedent.toml")]
  config: PathBuf,

  /// Ledger directory; overrides `storage_dir` from the configuration.
  #[arg(long, value_name = "DIR")]
  storage_dir: Option<PathBuf>,

  #[command(subcommand)]
  command: Command,
}

#[derive(Subcommand)]
enum Command {
  /// Run every critic on TEXT, compare against past precedents, and record
  /// the result.
  Evaluate {
    text:    String,
    /// Tag to attach; may be repeated.
    #[arg(long = "tag", value_name = "TAG")]
    tags:    Vec<String>,
    /// Maximum number of similar precedents to report.
    #[arg(long)]
    limit:   Option<usize>,
    /// Evaluate and search without recording anything.
    #[arg(long)]
    dry_run: bool,
  },

  /// Record a precedent from caller-supplied JSON payloads.
  Record {
    #[arg(long)]
    input:    String,
    /// Decision payload as JSON.
    #[arg(long, default_value = "{}")]
    decision: String,
    /// Critics payload as a JSON object keyed by critic name.
    #[arg(long, default_value = "{}")]
    critics:  String,
    #[arg(long = "tag", value_name = "TAG")]
    tags:     Vec<String>,
  },

  /// Print one precedent.
  Show { id: PrecedentId },

  /// Print the index summaries.
  List,

  /// Print the number of indexed precedents.
  Count,

  /// Rank stored precedents by word overlap with QUERY.
  Search {
    query: String,
    #[arg(long)]
    limit: Option<usize>,
  },
}

// ─── Entry point ─────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
  tracing_subscriber::fmt()
    .with_writer(std::io::stderr)
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .init();

  let cli = Cli::parse();

  let mut settings = Settings::load(&cli.config)?;
  if let Some(dir) = cli.storage_dir {
    settings.storage_dir = dir;
  }

  let store = FsStore::open(&settings.storage_dir)
    .with_context(|| format!("failed to open ledger at {:?}", settings.storage_dir))?;

  match cli.command {
    Command::Evaluate { text, tags, limit, dry_run } => {
      let limit = limit.unwrap_or(settings.search_limit);
      let similar = search::search(&store, &text, limit)
        .context("failed to search precedents")?;

      let panel = CriticPanel::new(
        OllamaRunner::new(&settings.ollama_bin),
        settings.critics.clone(),
      );
      let evaluation = panel.evaluate(&text).context("critic evaluation failed")?;
      let critics = precedent_critics::payload(&evaluation)?;
      let decision = decision::compose(&evaluation, &similar);

      let id = if dry_run {
        None
      } else {
        let input = NewPrecedent::new(text, decision.clone(), critics.clone())
          .with_tags(tags);
        Some(store.insert(input).context("failed to record precedent")?)
      };

      print_json(&json!({
        "id":       id,
        "citation": id.map(Citation::for_id),
        "decision": decision,
        "critics":  critics,
        "similar":  similar,
      }))
    }

    Command::Record { input, decision, critics, tags } => {
      let decision: serde_json::Value =
        serde_json::from_str(&decision).context("--decision is not valid JSON")?;
      let critics: Critics = serde_json::from_str(&critics)
        .context("--critics must be a JSON object keyed by critic name")?;

      let id = store
        .insert(NewPrecedent::new(input, decision, critics).with_tags(tags))
        .context("failed to record precedent")?;

      print_json(&json!({ "id": id, "citation": Citation::for_id(id) }))
    }

    Command::Show { id } => match store.get(id)? {
      Some(precedent) => print_json(&precedent),
      None => bail!("precedent {id} not found"),
    },

    Command::List => print_json(&store.summaries()),

    Command::Count => print_json(&store.count()),

    Command::Search { query, limit } => {
      let limit = limit.unwrap_or(settings.search_limit);
      let results = search::search(&store, &query, limit)
        .context("failed to search precedents")?;
      print_json(&results)
    }
  }
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
  let out = serde_json::to_string_pretty(value).context("failed to encode output")?;
  println!("{out}");
  Ok(())
}

#[cfg(test)]
mod tests {
  use clap::CommandFactory;

  use super::*;

  #[test]
  fn cli_definition_is_valid() { Cli::command().debug_assert(); }

  #[test]
  fn parses_repeated_tags() {
    let cli = Cli::try_parse_from([
      "precedent", "evaluate", "some text", "--tag", "a", "--tag", "b", "--dry-run",
    ])
    .unwrap();

    match cli.command {
      Command::Evaluate { text, tags, dry_run, limit } => {
        assert_eq!(text, "some text");
        assert_eq!(tags, ["a", "b"]);
        assert!(dry_run);
        assert!(limit.is_none());
      }
      _ => panic!("expected evaluate"),
    }
  }

  #[test]
  fn storage_dir_flag_is_global() {
    let cli =
      Cli::try_parse_from(["precedent", "--storage-dir", "/tmp/x", "count"]).unwrap();
    assert_eq!(cli.storage_dir, Some(PathBuf::from("/tmp/x")));
    assert!(matches!(cli.command, Command::Count));
  }
}
