//! Tooling
//!
//! Command-line entry points for bytematch.

pub mod cli;
