// tokenrx-core/src/engines/mod.rs
//! Concrete implementations of the `TransformEngine` trait.
//!
//! Each engine lives in its own file and is declared here.

pub mod replace_string;
