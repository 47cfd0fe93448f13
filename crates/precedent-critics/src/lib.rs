//! Critic invocation and output parsing.
//!
//! A critic is a named model that judges an input and answers in loosely
//! structured `Field: value` lines. This crate runs critics through a
//! [`CriticRunner`], parses their answers into [`CriticRecord`]s, and fans an
//! input out over a [`CriticPanel`].
//!
//! # Quick start
//!
//! ```no_run
//! use precedent_critics::{CriticPanel, OllamaRunner};
//!
//! let panel = CriticPanel::with_default_critics(OllamaRunner::default());
//! let records = panel.evaluate("Should the request be approved?").unwrap();
//! for (name, record) in &records {
//!   println!("{name}: {} ({})", record.claim, record.confidence);
//! }
//! ```

pub mod error;
mod panel;
mod record;
mod runner;

pub use error::{Error, Result};
pub use panel::{CriticPanel, CriticSpec, Evaluation, payload};
pub use record::{CriticRecord, parse_critic_output};
pub use runner::{CriticRunner, OllamaRunner};
