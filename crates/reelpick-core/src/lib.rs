//! # reelpick-core
//!
//! Core types, errors, configuration, events, tracing, and constants shared by
//! the reelpick crates. Also owns the movie record store: the in-memory record
//! set that both the actor graph and the attribute trie are built from.

pub mod config;
pub mod constants;
pub mod errors;
pub mod events;
pub mod records;
pub mod tracing;
pub mod types;

pub use records::{MovieId, MovieRecord, RecordStore};
