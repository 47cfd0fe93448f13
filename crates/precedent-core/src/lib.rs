//! Core types and trait definitions for the precedent ledger.
//!
//! This crate is deliberately free of filesystem and process dependencies.
//! Storage backends implement [`store::PrecedentStore`]; retrieval in
//! [`search`] works against any of them.

pub mod citation;
pub mod error;
pub mod index;
pub mod precedent;
pub mod search;
pub mod store;

pub use error::{Error, Result};
