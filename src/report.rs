//! Format the comparison outcome as the stdout report.

use crate::matcher::MatchOutcome;
use std::path::Path;

/// Notice emitted before the report when the difference ratio was clamped.
pub const CLAMP_NOTICE: &str = "diffPct > 1.0, treating as 1.0";

/// Format the three-line match report.
///
/// When the outcome was clamped, the clamp notice precedes the report on
/// its own line. No trailing newline; the caller owns the final print.
pub fn format_match_report(actual: &Path, expected: &Path, outcome: &MatchOutcome) -> String {
    let mut out = String::new();
    if outcome.clamped {
        out.push_str(CLAMP_NOTICE);
        out.push('\n');
    }
    out.push_str(&format!("Input: {}\n", actual.display()));
    out.push_str(&format!("Expected: {}\n", expected.display()));
    out.push_str(&format!("Match: {}", outcome.formatted()));
    out
}
