//! The verification engine.
//!
//! Matching is a pure computation: an [`Expectation`] plus a captured
//! outcome produce a list of mismatch diagnostics, empty on a match.
//! Thin wrappers layer the two reporting modes on top: append into a
//! caller-owned [`MatchContext`] and keep going, or panic on the first
//! mismatch. The checking algorithm itself never branches on the mode.

use crate::context::MatchContext;
use crate::expectation::Expectation;
use crate::failure::Failure;
use crate::output::{self, FailureFormatter};

impl Expectation {
    // =========================================================================
    // Core matching (returns diagnostics, never panics)
    // =========================================================================

    /// Verify a captured outcome that terminated abnormally.
    ///
    /// Returns the list of mismatch diagnostics; an empty list is a match.
    /// Checks run in a fixed order and the first mismatch ends
    /// verification, with two exceptions: an inner-kind mismatch still
    /// runs the property checks, and every expected property is checked
    /// even after one of them mismatches.
    ///
    /// # Example
    ///
    /// ```rust
    /// use verdict::{Expectation, Failure, FailureKind};
    ///
    /// let failure = Failure::new(FailureKind::Expired, "IDX10223: token expired");
    /// let diffs = Expectation::expired()
    ///     .with_substring("IDX10223:")
    ///     .match_failure(Some(&failure));
    ///
    /// assert!(diffs.is_empty());
    /// ```
    pub fn match_failure(&self, actual: Option<&Failure>) -> Vec<String> {
        let mut diffs = Vec::new();

        let expected_kind = match self.kind() {
            None => {
                if let Some(inner) = self.inner_kind() {
                    diffs.push(format!(
                        "usage error: no failure kind expected but inner failure kind {} is set",
                        inner
                    ));
                } else if let Some(failure) = actual {
                    diffs.push(format!(
                        "a failure occurred but none was expected\n  failure: {}",
                        failure
                    ));
                }
                return diffs;
            }
            Some(kind) => kind,
        };

        let failure = match actual {
            None => {
                diffs.push(format!(
                    "a failure was expected but none occurred\n  expected: {}",
                    self
                ));
                return diffs;
            }
            Some(failure) => failure,
        };

        if failure.kind() != expected_kind {
            diffs.push(format!(
                "failure kind mismatch\n  expected: {}\n  actual: {}",
                expected_kind,
                failure.kind()
            ));
            return diffs;
        }

        if let Some(substring) = self.substring() {
            if !substring.trim().is_empty() && !failure.message().contains(substring) {
                diffs.push(format!(
                    "failure message does not contain '{}'\n  message: {}",
                    substring,
                    failure.message()
                ));
                return diffs;
            }
        }

        match (failure.inner(), self.inner_kind()) {
            (Some(inner), None) => {
                diffs.push(format!(
                    "unexpected inner failure\n  inner: {}: {}",
                    inner.kind(),
                    inner.message()
                ));
                return diffs;
            }
            (None, Some(inner_kind)) => {
                diffs.push(format!(
                    "expected inner failure missing\n  expected inner kind: {}",
                    inner_kind
                ));
                return diffs;
            }
            (Some(inner), Some(inner_kind)) => {
                // An inner kind mismatch does not stop the property checks.
                if inner.kind() != inner_kind && !self.ignores_inner() {
                    diffs.push(format!(
                        "inner failure kind mismatch\n  expected: {}\n  actual: {}",
                        inner_kind,
                        inner.kind()
                    ));
                }
            }
            (None, None) => {}
        }

        self.match_properties(failure, &mut diffs);

        if self.is_verbose() || output::default_verbose() {
            FailureFormatter::with_defaults().print_failure(failure);
        }

        diffs
    }

    /// Verify a captured outcome that completed without failing.
    ///
    /// Returns one diagnostic when a failure was expected, otherwise an
    /// empty list.
    pub fn match_no_failure(&self) -> Vec<String> {
        match self.kind() {
            Some(kind) => vec![format!(
                "a failure was expected but the operation succeeded\n  expected kind: {}",
                kind
            )],
            None => Vec::new(),
        }
    }

    /// Check every expected property against the failure instance.
    ///
    /// Each pair is checked independently; one mismatch never hides
    /// another.
    fn match_properties(&self, failure: &Failure, diffs: &mut Vec<String>) {
        for (name, expected) in self.expected_properties() {
            let kind = failure.kind();
            let spec = match kind.property_spec(name) {
                Some(spec) => spec,
                None => {
                    diffs.push(format!(
                        "failure kind {} does not have expected property '{}'",
                        kind, name
                    ));
                    continue;
                }
            };

            let actual = failure.property(name);

            if let Some(value) = actual {
                if !spec.ty.admits(value) {
                    diffs.push(format!(
                        "property '{}' type mismatch\n  declared: {}\n  actual: {}",
                        name,
                        spec.ty,
                        value.type_of()
                    ));
                    continue;
                }
            }

            let equal = match (actual, expected.as_ref()) {
                (None, None) => true,
                (Some(a), Some(e)) => a.loose_eq(e) || e.loose_eq(a),
                _ => false,
            };

            if !equal {
                let render = |v: Option<&crate::properties::PropertyValue>| match v {
                    Some(value) => value.to_string(),
                    None => "null".to_string(),
                };
                diffs.push(format!(
                    "property '{}' value mismatch\n  expected: {}\n  actual: {}",
                    name,
                    render(expected.as_ref()),
                    render(actual)
                ));
            }
        }
    }

    // =========================================================================
    // Accumulating wrappers (append into a caller-owned context)
    // =========================================================================

    /// Verify an abnormal outcome, appending mismatches to `ctx`.
    pub fn process_failure(&self, actual: Option<&Failure>, ctx: &mut MatchContext) {
        for diff in self.match_failure(actual) {
            ctx.add(diff);
        }
    }

    /// Verify a successful outcome, appending mismatches to `ctx`.
    pub fn process_no_failure(&self, ctx: &mut MatchContext) {
        for diff in self.match_no_failure() {
            ctx.add(diff);
        }
    }

    /// Verify a captured `Result`, dispatching on success vs. failure.
    ///
    /// # Example
    ///
    /// ```rust
    /// use verdict::{Expectation, Failure, FailureKind, MatchContext};
    ///
    /// let mut ctx = MatchContext::new("read_token");
    /// let outcome: Result<(), Failure> =
    ///     Err(Failure::new(FailureKind::NullArgument, "IDX10000: value must not be null"));
    ///
    /// Expectation::null_argument()
    ///     .with_substring("IDX10000:")
    ///     .check(outcome, &mut ctx);
    /// ctx.assert_clean();
    /// ```
    pub fn check<T>(&self, outcome: Result<T, Failure>, ctx: &mut MatchContext) {
        match outcome {
            Ok(_) => self.process_no_failure(ctx),
            Err(failure) => self.process_failure(Some(&failure), ctx),
        }
    }

    // =========================================================================
    // Fail-fast wrappers (panic on the first mismatch)
    // =========================================================================

    /// Verify an abnormal outcome, panicking on the first mismatch.
    ///
    /// # Panics
    ///
    /// Panics with the first mismatch diagnostic.
    pub fn assert_failure(&self, actual: Option<&Failure>) {
        let diffs = self.match_failure(actual);
        if let Some(first) = diffs.first() {
            panic!("assertion failed: {}\n\n  reason: {}\n", self, first);
        }
    }

    /// Verify a successful outcome, panicking when a failure was expected.
    ///
    /// # Panics
    ///
    /// Panics when this expectation names a failure kind.
    pub fn assert_no_failure(&self) {
        let diffs = self.match_no_failure();
        if let Some(first) = diffs.first() {
            panic!("assertion failed: {}\n\n  reason: {}\n", self, first);
        }
    }
}
