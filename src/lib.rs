//! Tetrix (workspace facade crate).
//!
//! Re-exports the rule crates under `tetrix::{core,engine,types}` and hosts the
//! simulator's configuration and report, shared by the `tetrix-sim` binary and
//! the integration tests.

pub mod config;
pub mod report;

pub use tetrix_core as core;
pub use tetrix_engine as engine;
pub use tetrix_types as types;
