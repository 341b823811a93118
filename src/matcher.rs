//! Byte-level comparison of two files.
//!
//! The comparison is defined purely on raw byte sequences: both files are
//! read whole, compared position by position over the shared prefix, and
//! any length difference counts as additional mismatch. No decoding, no
//! normalization.

use crate::error::MatchError;
use serde::Serialize;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Result of comparing two byte buffers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MatchOutcome {
    /// Fraction of matching content, always in `[0.0, 1.0]`.
    pub match_pct: f64,
    /// Differing byte positions plus the absolute length difference.
    pub diff_count: u64,
    /// Whether the raw difference ratio exceeded 1.0 and was clamped.
    pub clamped: bool,
}

impl MatchOutcome {
    /// Render the match fraction with exactly six decimal digits.
    pub fn formatted(&self) -> String {
        format!("{:.6}", self.match_pct)
    }
}

/// Compare `actual` against `expected` byte-for-byte.
///
/// The denominator is `expected`'s length, so the result is not symmetric
/// when lengths differ. Two empty buffers are a perfect match; an empty
/// `expected` against non-empty `actual` is an unbounded difference ratio
/// and clamps to a zero match.
pub fn compare_bytes(actual: &[u8], expected: &[u8]) -> MatchOutcome {
    let shared = actual.len().min(expected.len());
    let mut diff_count = actual[..shared]
        .iter()
        .zip(&expected[..shared])
        .filter(|(a, e)| a != e)
        .count() as u64;
    diff_count += actual.len().abs_diff(expected.len()) as u64;

    if expected.is_empty() {
        // Zero-length denominator: identical empties match perfectly,
        // anything else folds into the clamp rule.
        return if diff_count == 0 {
            MatchOutcome {
                match_pct: 1.0,
                diff_count,
                clamped: false,
            }
        } else {
            MatchOutcome {
                match_pct: 0.0,
                diff_count,
                clamped: true,
            }
        };
    }

    let mut diff_ratio = diff_count as f64 / expected.len() as f64;
    let clamped = diff_ratio > 1.0;
    if clamped {
        diff_ratio = 1.0;
    }

    // abs() keeps negative zero out of the report.
    MatchOutcome {
        match_pct: (1.0 - diff_ratio).abs(),
        diff_count,
        clamped,
    }
}

/// Read both files fully into memory and compare them.
///
/// Read failures propagate unrecovered; the caller decides how to surface
/// them at the process boundary.
pub fn compute_match(actual_path: &Path, expected_path: &Path) -> Result<MatchOutcome, MatchError> {
    let actual = read_file(actual_path)?;
    let expected = read_file(expected_path)?;
    let outcome = compare_bytes(&actual, &expected);
    debug!(
        actual = %actual_path.display(),
        expected = %expected_path.display(),
        actual_len = actual.len(),
        expected_len = expected.len(),
        diff_count = outcome.diff_count,
        clamped = outcome.clamped,
        "comparison complete"
    );
    Ok(outcome)
}

fn read_file(path: &Path) -> Result<Vec<u8>, MatchError> {
    fs::read(path).map_err(|source| MatchError::Io {
        path: path.to_path_buf(),
        source,
    })
}
