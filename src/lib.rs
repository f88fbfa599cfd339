//! Blockfall (workspace facade crate).
//!
//! Re-exports the member crates as `blockfall::{core, input, term, types}` and
//! hosts the pieces the terminal binary wires together: configuration, the
//! JSONL event log and the audio cue mapping.

pub use blockfall_core as core;
pub use blockfall_input as input;
pub use blockfall_term as term;
pub use blockfall_types as types;

pub mod audio;
pub mod config;
pub mod event_log;
pub mod logging;
