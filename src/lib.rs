//! Bytematch: Byte-Level File Similarity
//!
//! Compares two files byte-for-byte and reports the fraction of matching
//! content, penalizing any length mismatch. Library-first: the binary is a
//! thin wrapper over [`tooling::cli`].

pub mod error;
pub mod logging;
pub mod matcher;
pub mod report;
pub mod tooling;
