//! CLI Tooling
//!
//! Command-line surface for the byte comparison. The context runs the
//! comparison and assembles the full stdout text, so tests can drive it
//! without spawning a process.

use crate::error::MatchError;
use crate::logging::LoggingConfig;
use crate::matcher;
use crate::report;
use clap::Parser;
use serde_json::json;
use std::path::PathBuf;
use tracing::debug;

/// Bytematch CLI - byte-level file similarity reporting
#[derive(Parser)]
#[command(name = "bytematch")]
#[command(about = "Compare two files byte-for-byte and report the match percentage")]
pub struct Cli {
    /// Path to the actual file
    pub actual: PathBuf,

    /// Path to the expected file (its length is the comparison denominator)
    pub expected: PathBuf,

    /// Enable verbose logging (default: off)
    #[arg(long, default_value = "false")]
    pub verbose: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file, file+stderr)
    #[arg(long)]
    pub log_output: Option<String>,

    /// Log file path (if output includes "file")
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Build the logging configuration implied by the CLI flags.
    ///
    /// `--verbose` lowers the level to debug unless `--log-level` says
    /// otherwise.
    pub fn logging_config(&self) -> LoggingConfig {
        let mut config = LoggingConfig::default();
        if self.verbose {
            config.level = "debug".to_string();
        }
        if let Some(level) = &self.log_level {
            config.level = level.clone();
        }
        if let Some(format) = &self.log_format {
            config.format = format.clone();
        }
        if let Some(output) = &self.log_output {
            config.output = output.clone();
        }
        if let Some(file) = &self.log_file {
            config.file = Some(file.clone());
        }
        config
    }
}

/// Execution context for a single comparison invocation.
pub struct CliContext {
    actual: PathBuf,
    expected: PathBuf,
}

impl CliContext {
    /// Create a new CLI context over the two file paths.
    pub fn new(actual: PathBuf, expected: PathBuf) -> Self {
        Self { actual, expected }
    }

    /// Run the comparison and return the full stdout text.
    ///
    /// The clamp notice, when applicable, is part of the returned text and
    /// precedes the three-line report.
    pub fn execute(&self) -> Result<String, MatchError> {
        let outcome = matcher::compute_match(&self.actual, &self.expected)?;
        debug!(
            summary = %json!({
                "actual": self.actual.display().to_string(),
                "expected": self.expected.display().to_string(),
                "match_pct": outcome.match_pct,
                "diff_count": outcome.diff_count,
                "clamped": outcome.clamped,
            }),
            "match summary"
        );
        Ok(report::format_match_report(
            &self.actual,
            &self.expected,
            &outcome,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_parses_two_positional_paths() {
        let cli = Cli::parse_from(["bytematch", "out.bin", "expected.bin"]);
        assert_eq!(cli.actual, PathBuf::from("out.bin"));
        assert_eq!(cli.expected, PathBuf::from("expected.bin"));
        assert!(!cli.verbose);
    }

    #[test]
    fn test_cli_requires_both_paths() {
        assert!(Cli::try_parse_from(["bytematch", "only-one.bin"]).is_err());
    }

    #[test]
    fn test_verbose_flag_lowers_log_level() {
        let cli = Cli::parse_from(["bytematch", "a", "b", "--verbose"]);
        assert_eq!(cli.logging_config().level, "debug");
    }

    #[test]
    fn test_log_level_flag_overrides_verbose() {
        let cli = Cli::parse_from(["bytematch", "a", "b", "--verbose", "--log-level", "trace"]);
        assert_eq!(cli.logging_config().level, "trace");
    }

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }
}
