//! Diagnostics accumulation for a single test invocation.
//!
//! A [`MatchContext`] collects mismatch diagnostics across one or more
//! verification calls so a test can report every problem at once instead
//! of stopping at the first.

/// A titled accumulator of mismatch diagnostics.
///
/// Owned by a single test invocation; verification calls append to it,
/// and the test asserts it is clean at the end.
///
/// # Example
///
/// ```rust
/// use verdict::MatchContext;
///
/// let ctx = MatchContext::new("read_signed_xml");
/// assert!(ctx.is_clean());
/// ctx.assert_clean();
/// ```
#[derive(Debug, Clone)]
pub struct MatchContext {
    /// Label identifying the test or comparison this context belongs to.
    pub title: String,
    /// Accumulated mismatch diagnostics, in verification order.
    pub diffs: Vec<String>,
}

impl MatchContext {
    /// Create an empty context with the given title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            diffs: Vec::new(),
        }
    }

    /// Append a mismatch diagnostic.
    pub fn add(&mut self, diff: impl Into<String>) {
        self.diffs.push(diff.into());
    }

    /// Whether no mismatches were recorded.
    pub fn is_clean(&self) -> bool {
        self.diffs.is_empty()
    }

    /// Panic with every accumulated mismatch if any were recorded.
    ///
    /// # Panics
    ///
    /// Panics listing all diagnostics when the context is not clean.
    pub fn assert_clean(&self) {
        if self.diffs.is_empty() {
            return;
        }

        let mut report = format!(
            "assertion failed: {} ({} mismatches):\n",
            self.title,
            self.diffs.len()
        );
        for (i, diff) in self.diffs.iter().enumerate() {
            report.push_str(&format!("  {}. {}\n", i + 1, diff));
        }
        panic!("{}", report);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_context_is_clean() {
        let ctx = MatchContext::new("t");
        assert!(ctx.is_clean());
        ctx.assert_clean();
    }

    #[test]
    fn test_add_records_in_order() {
        let mut ctx = MatchContext::new("t");
        ctx.add("first");
        ctx.add("second");
        assert!(!ctx.is_clean());
        assert_eq!(ctx.diffs, vec!["first".to_string(), "second".to_string()]);
    }

    #[test]
    #[should_panic(expected = "2 mismatches")]
    fn test_assert_clean_panics_with_count() {
        let mut ctx = MatchContext::new("t");
        ctx.add("first");
        ctx.add("second");
        ctx.assert_clean();
    }

    #[test]
    #[should_panic(expected = "expired check")]
    fn test_assert_clean_panics_with_title() {
        let mut ctx = MatchContext::new("expired check");
        ctx.add("kind mismatch");
        ctx.assert_clean();
    }
}
