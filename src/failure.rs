//! The captured failure value.
//!
//! An operation under test either succeeds or hands the harness one of
//! these: a kind, a human-readable message, an optional nested cause, and
//! named property values. The harness only reads captured failures; it
//! never constructs or raises one itself.

use std::collections::HashMap;

use crate::kind::FailureKind;
use crate::properties::PropertyValue;

/// A structured failure captured from an operation under test.
///
/// # Example
///
/// ```rust
/// use verdict::{Failure, FailureKind};
///
/// let failure = Failure::new(FailureKind::Expired, "IDX10223: token expired")
///     .with_property("expires", chrono::Utc::now());
///
/// assert_eq!(failure.kind(), FailureKind::Expired);
/// ```
#[derive(Debug, Clone)]
pub struct Failure {
    kind: FailureKind,
    message: String,
    inner: Option<Box<Failure>>,
    properties: HashMap<String, Option<PropertyValue>>,
}

impl Failure {
    /// Create a new failure with the given kind and message.
    pub fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            inner: None,
            properties: HashMap::new(),
        }
    }

    // =========================================================================
    // Builder methods (chainable)
    // =========================================================================

    /// Attach a nested cause.
    pub fn with_inner(mut self, inner: Failure) -> Self {
        self.inner = Some(Box::new(inner));
        self
    }

    /// Set a named property value.
    pub fn with_property(mut self, name: impl Into<String>, value: impl Into<PropertyValue>) -> Self {
        self.properties.insert(name.into(), Some(value.into()));
        self
    }

    /// Set a named property to null.
    pub fn with_null_property(mut self, name: impl Into<String>) -> Self {
        self.properties.insert(name.into(), None);
        self
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// The failure's kind.
    pub fn kind(&self) -> FailureKind {
        self.kind
    }

    /// The failure's human-readable message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The nested cause, if any.
    pub fn inner(&self) -> Option<&Failure> {
        self.inner.as_deref()
    }

    /// Read a property value on this instance.
    ///
    /// Returns `None` when the property is null or unset; a property the
    /// kind declares but the instance never set reads as null.
    pub fn property(&self, name: &str) -> Option<&PropertyValue> {
        self.properties.get(name).and_then(|v| v.as_ref())
    }

    /// All property values set on this instance.
    pub fn properties(&self) -> &HashMap<String, Option<PropertyValue>> {
        &self.properties
    }
}

impl std::fmt::Display for Failure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)?;
        let mut cause = self.inner();
        while let Some(failure) = cause {
            write!(f, "\n  caused by: {}: {}", failure.kind, failure.message)?;
            cause = failure.inner();
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_failure_accessors() {
        let failure = Failure::new(FailureKind::InvalidArgument, "IDX10000: value must not be null");
        assert_eq!(failure.kind(), FailureKind::InvalidArgument);
        assert_eq!(failure.message(), "IDX10000: value must not be null");
        assert!(failure.inner().is_none());
        assert!(failure.properties().is_empty());
    }

    #[test]
    fn test_inner_chain() {
        let failure = Failure::new(FailureKind::InvalidSignature, "IDX10503: signature validation failed")
            .with_inner(Failure::new(FailureKind::Cryptographic, "bad digest"));

        let inner = failure.inner().unwrap();
        assert_eq!(inner.kind(), FailureKind::Cryptographic);
        assert!(inner.inner().is_none());
    }

    #[test]
    fn test_property_read() {
        let expires = Utc.with_ymd_and_hms(2017, 3, 17, 18, 33, 37).unwrap();
        let failure = Failure::new(FailureKind::Expired, "IDX10223: token expired")
            .with_property("expires", expires);

        assert_eq!(
            failure.property("expires"),
            Some(&PropertyValue::Time(expires))
        );
        assert!(failure.property("not_before").is_none());
    }

    #[test]
    fn test_null_property_reads_as_none() {
        let failure = Failure::new(FailureKind::InvalidLifetime, "IDX10224: invalid lifetime")
            .with_null_property("not_before");

        assert!(failure.property("not_before").is_none());
        assert!(failure.properties().contains_key("not_before"));
    }

    #[test]
    fn test_display_with_cause() {
        let failure = Failure::new(FailureKind::InvalidSignature, "IDX10503: signature validation failed")
            .with_inner(Failure::new(FailureKind::Cryptographic, "bad digest"));

        let text = failure.to_string();
        assert!(text.starts_with("InvalidSignature: IDX10503:"));
        assert!(text.contains("caused by: Cryptographic: bad digest"));
    }
}
