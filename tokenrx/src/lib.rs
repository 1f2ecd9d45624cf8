// tokenrx/src/lib.rs
//! # tokenrx CLI Application
//!
//! Command-line front end for `tokenrx-core`: loads tokens, rules and named
//! patterns from files, runs the rules and prints the results.

pub mod cli;
pub mod commands;
pub mod logger;
pub mod ui;

pub use commands::apply::{run_apply, ApplyOptions};
