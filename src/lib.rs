//! # verdict
//!
//! An expectation-matching harness for asserting expected failures.
//!
//! A test describes the failure it expects from the operation under test
//! (kind, message fragment, nested cause, property values) and hands the
//! captured outcome to the matcher. Mismatches either accumulate into a
//! context the test asserts on at the end, or fail the test immediately.
//! It can be used with Rust's native `#[test]` framework.
//!
//! ## Quick Start
//!
//! ```rust
//! use verdict::{Expectation, Failure, FailureKind};
//!
//! let outcome = Failure::new(FailureKind::Expired, "IDX10223: token expired");
//!
//! Expectation::expired()
//!     .with_substring("IDX10223:")
//!     .assert_failure(Some(&outcome));
//! ```
//!
//! ## Accumulating Mismatches
//!
//! ```rust
//! use verdict::{Expectation, Failure, FailureKind, MatchContext};
//!
//! let mut ctx = MatchContext::new("read_token");
//!
//! let outcome: Result<(), Failure> =
//!     Err(Failure::new(FailureKind::NullArgument, "IDX10000: value must not be null"));
//!
//! Expectation::null_argument()
//!     .with_substring("IDX10000:")
//!     .check(outcome, &mut ctx);
//!
//! ctx.assert_clean();
//! ```
//!
//! ## Property Expectations
//!
//! ```rust
//! use verdict::{Expectation, Failure, FailureKind};
//! use chrono::{TimeZone, Utc};
//!
//! let expires = Utc.with_ymd_and_hms(2017, 3, 17, 18, 33, 37).unwrap();
//! let outcome = Failure::new(FailureKind::Expired, "IDX10223: token expired")
//!     .with_property("expires", expires);
//!
//! let diffs = Expectation::expired()
//!     .with_property("expires", expires)
//!     .match_failure(Some(&outcome));
//! assert!(diffs.is_empty());
//! ```

pub mod context;
pub mod expectation;
pub mod failure;
pub mod kind;
pub mod output;
pub mod properties;

mod matcher;

#[cfg(feature = "yaml")]
pub mod records;

// Core types
pub use context::MatchContext;
pub use expectation::Expectation;
pub use failure::Failure;
pub use kind::FailureKind;

// Property model
pub use properties::{PropertySpec, PropertyType, PropertyValue};

// Verbose output
pub use output::{default_verbose, set_default_verbose, FailureFormatter};

// Records (feature-gated)
#[cfg(feature = "yaml")]
pub use records::{load_cases, parse_kind_name, ExpectationRecord, FailureCase, RecordError};
