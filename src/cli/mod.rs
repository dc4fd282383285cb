//! CLI command implementations.
//!
//! One submodule per command. Commands load files, hand fully materialized
//! records to the matching engine, and return the rendered report; the
//! binary in `main.rs` owns argument parsing and printing.

mod run;

pub use run::{cmd_run, RunArgs};
