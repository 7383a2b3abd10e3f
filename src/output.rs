//! Verbose output for captured failures.
//!
//! Verification never needs this to decide pass/fail; it exists so a test
//! run can show the full failure a matcher just looked at.

use std::io::IsTerminal;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::failure::Failure;

// ANSI color codes
const YELLOW: &str = "\x1b[33m";
const CYAN: &str = "\x1b[36m";
const RESET: &str = "\x1b[0m";

static DEFAULT_VERBOSE: AtomicBool = AtomicBool::new(false);

/// Set the process-wide default-verbose switch.
///
/// Intended to be called once at suite startup; every verification reads
/// it and dumps the captured failure when it is on.
pub fn set_default_verbose(verbose: bool) {
    DEFAULT_VERBOSE.store(verbose, Ordering::Relaxed);
}

/// Read the process-wide default-verbose switch.
pub fn default_verbose() -> bool {
    DEFAULT_VERBOSE.load(Ordering::Relaxed)
}

/// Formatter for dumping captured failures.
///
/// ```rust
/// use verdict::{Failure, FailureKind};
/// use verdict::output::FailureFormatter;
///
/// let failure = Failure::new(FailureKind::Expired, "IDX10223: token expired");
/// let text = FailureFormatter::with_defaults().format_failure(&failure);
/// assert!(text.contains("Expired"));
/// ```
#[derive(Debug, Clone)]
pub struct FailureFormatter {
    /// Maximum characters before truncating property values.
    pub truncate_at: usize,
    /// Whether to use ANSI colors in output.
    pub colors_enabled: bool,
}

impl Default for FailureFormatter {
    fn default() -> Self {
        Self {
            truncate_at: 60,
            colors_enabled: std::io::stdout().is_terminal(),
        }
    }
}

impl FailureFormatter {
    /// Create a formatter with default configuration.
    ///
    /// Default: 60 character truncation, colors auto-detected from TTY.
    pub fn with_defaults() -> Self {
        Self::default()
    }

    /// Set the maximum characters before truncating property values.
    pub fn truncate_at(mut self, chars: usize) -> Self {
        self.truncate_at = chars;
        self
    }

    /// Enable or disable ANSI colors.
    pub fn colors(mut self, enabled: bool) -> Self {
        self.colors_enabled = enabled;
        self
    }

    /// Format a captured failure: header, cause chain, then properties.
    pub fn format_failure(&self, failure: &Failure) -> String {
        let mut output = if self.colors_enabled {
            format!("{}Failure under test:{}\n", YELLOW, RESET)
        } else {
            "Failure under test:\n".to_string()
        };

        output.push_str(&self.format_header(failure, 1));

        let mut cause = failure.inner();
        let mut depth = 2;
        while let Some(inner) = cause {
            output.push_str(&self.format_header(inner, depth));
            cause = inner.inner();
            depth += 1;
        }

        let mut names: Vec<&String> = failure.properties().keys().collect();
        names.sort();
        for name in names {
            let rendered = match failure.property(name) {
                Some(value) => self.truncate(&value.to_string()),
                None => "null".to_string(),
            };
            output.push_str(&format!("    {} = {}\n", name, rendered));
        }

        output
    }

    /// Print a captured failure to stdout.
    pub fn print_failure(&self, failure: &Failure) {
        print!("{}", self.format_failure(failure));
    }

    fn format_header(&self, failure: &Failure, depth: usize) -> String {
        let indent = "  ".repeat(depth);
        let message = self.truncate(failure.message());
        if self.colors_enabled {
            format!(
                "{}{}{}{} {}\n",
                indent,
                CYAN,
                failure.kind(),
                RESET,
                message
            )
        } else {
            format!("{}{} {}\n", indent, failure.kind(), message)
        }
    }

    /// Truncate a string to the configured maximum length.
    /// Handles multi-byte UTF-8 characters safely.
    fn truncate(&self, s: &str) -> String {
        let max = self.truncate_at;
        let char_count = s.chars().count();

        if char_count <= max {
            s.to_string()
        } else {
            // Reserve 3 chars for "..."
            let truncated: String = s.chars().take(max.saturating_sub(3)).collect();
            format!("{}...", truncated)
        }
    }
}
