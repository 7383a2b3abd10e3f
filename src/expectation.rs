//! The failure expectation descriptor.
//!
//! An [`Expectation`] describes what failure (if any) a test expects from
//! the operation under test: the failure kind, a required message
//! substring, the kind of the nested cause, and expected property values.
//! It is built once per test case, stays immutable, and is handed to the
//! matcher together with the captured outcome.

use std::collections::HashMap;

use crate::kind::FailureKind;
use crate::properties::PropertyValue;

/// Describes the failure a test expects, if any.
///
/// Build one with [`Expectation::of`] or a named factory, then chain the
/// optional constraints.
///
/// # Example
///
/// ```rust
/// use verdict::{Expectation, FailureKind};
///
/// let expected = Expectation::expired()
///     .with_substring("IDX10223:")
///     .with_inner(FailureKind::Cryptographic);
///
/// assert_eq!(expected.kind(), Some(FailureKind::Expired));
/// ```
#[derive(Debug, Clone)]
pub struct Expectation {
    kind: Option<FailureKind>,
    substring: Option<String>,
    inner_kind: Option<FailureKind>,
    ignore_inner: bool,
    properties: HashMap<String, Option<PropertyValue>>,
    verbose: bool,
}

impl Expectation {
    /// Expect a failure of the given kind.
    pub fn of(kind: FailureKind) -> Self {
        Self {
            kind: Some(kind),
            substring: None,
            inner_kind: None,
            ignore_inner: false,
            properties: HashMap::new(),
            verbose: false,
        }
    }

    /// Expect the operation to succeed, with no failure at all.
    pub fn none() -> Self {
        Self {
            kind: None,
            substring: None,
            inner_kind: None,
            ignore_inner: false,
            properties: HashMap::new(),
            verbose: false,
        }
    }

    // =========================================================================
    // Builder methods (chainable)
    // =========================================================================

    /// Require the failure message to contain the given substring.
    ///
    /// Containment is exact and case-sensitive.
    pub fn with_substring(mut self, substring: impl Into<String>) -> Self {
        self.substring = Some(substring.into());
        self
    }

    /// Require a nested cause of the given kind.
    pub fn with_inner(mut self, kind: FailureKind) -> Self {
        self.inner_kind = Some(kind);
        self
    }

    /// Skip the nested-cause kind comparison even when an inner kind is set.
    ///
    /// The cause must still be present; only its kind goes unchecked.
    pub fn ignore_inner(mut self) -> Self {
        self.ignore_inner = true;
        self
    }

    /// Require a property on the failure to have the given value.
    pub fn with_property(mut self, name: impl Into<String>, value: impl Into<PropertyValue>) -> Self {
        self.properties.insert(name.into(), Some(value.into()));
        self
    }

    /// Require a property on the failure to be null.
    pub fn with_null_property(mut self, name: impl Into<String>) -> Self {
        self.properties.insert(name.into(), None);
        self
    }

    /// Dump the captured failure to output during verification, pass or fail.
    pub fn verbose(mut self) -> Self {
        self.verbose = true;
        self
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// The expected failure kind, or `None` when no failure is expected.
    pub fn kind(&self) -> Option<FailureKind> {
        self.kind
    }

    /// The required message substring, if any.
    pub fn substring(&self) -> Option<&str> {
        self.substring.as_deref()
    }

    /// The expected nested-cause kind, if any.
    pub fn inner_kind(&self) -> Option<FailureKind> {
        self.inner_kind
    }

    /// Whether the nested-cause kind comparison is skipped.
    pub fn ignores_inner(&self) -> bool {
        self.ignore_inner
    }

    /// The expected property values.
    pub fn expected_properties(&self) -> &HashMap<String, Option<PropertyValue>> {
        &self.properties
    }

    /// Whether this expectation asks for a verbose dump.
    pub fn is_verbose(&self) -> bool {
        self.verbose
    }

    // =========================================================================
    // Named factories (one per failure kind)
    // =========================================================================

    /// Expect an [`FailureKind::InvalidArgument`] failure.
    pub fn invalid_argument() -> Self {
        Self::of(FailureKind::InvalidArgument)
    }

    /// Expect an [`FailureKind::ArgumentOutOfRange`] failure.
    pub fn argument_out_of_range() -> Self {
        Self::of(FailureKind::ArgumentOutOfRange)
    }

    /// Expect a [`FailureKind::NullArgument`] failure.
    pub fn null_argument() -> Self {
        Self::of(FailureKind::NullArgument)
    }

    /// Expect a [`FailureKind::Cryptographic`] failure.
    pub fn cryptographic() -> Self {
        Self::of(FailureKind::Cryptographic)
    }

    /// Expect an [`FailureKind::InvalidOperation`] failure.
    pub fn invalid_operation() -> Self {
        Self::of(FailureKind::InvalidOperation)
    }

    /// Expect an [`FailureKind::Io`] failure.
    pub fn io() -> Self {
        Self::of(FailureKind::Io)
    }

    /// Expect a [`FailureKind::NotSupported`] failure.
    pub fn not_supported() -> Self {
        Self::of(FailureKind::NotSupported)
    }

    /// Expect an [`FailureKind::ObjectDisposed`] failure.
    pub fn object_disposed() -> Self {
        Self::of(FailureKind::ObjectDisposed)
    }

    /// Expect a [`FailureKind::DecryptionFailed`] failure.
    pub fn decryption_failed() -> Self {
        Self::of(FailureKind::DecryptionFailed)
    }

    /// Expect an [`FailureKind::EncryptionKeyNotFound`] failure.
    pub fn encryption_key_not_found() -> Self {
        Self::of(FailureKind::EncryptionKeyNotFound)
    }

    /// Expect an [`FailureKind::EncryptionFailed`] failure.
    pub fn encryption_failed() -> Self {
        Self::of(FailureKind::EncryptionFailed)
    }

    /// Expect an [`FailureKind::Expired`] failure.
    pub fn expired() -> Self {
        Self::of(FailureKind::Expired)
    }

    /// Expect an [`FailureKind::InvalidAudience`] failure.
    pub fn invalid_audience() -> Self {
        Self::of(FailureKind::InvalidAudience)
    }

    /// Expect an [`FailureKind::InvalidIssuer`] failure.
    pub fn invalid_issuer() -> Self {
        Self::of(FailureKind::InvalidIssuer)
    }

    /// Expect an [`FailureKind::InvalidLifetime`] failure.
    pub fn invalid_lifetime() -> Self {
        Self::of(FailureKind::InvalidLifetime)
    }

    /// Expect an [`FailureKind::InvalidSignature`] failure.
    pub fn invalid_signature() -> Self {
        Self::of(FailureKind::InvalidSignature)
    }

    /// Expect a [`FailureKind::NoExpiration`] failure.
    pub fn no_expiration() -> Self {
        Self::of(FailureKind::NoExpiration)
    }

    /// Expect a [`FailureKind::NotYetValid`] failure.
    pub fn not_yet_valid() -> Self {
        Self::of(FailureKind::NotYetValid)
    }

    /// Expect a [`FailureKind::ReplayAddFailed`] failure.
    pub fn replay_add_failed() -> Self {
        Self::of(FailureKind::ReplayAddFailed)
    }

    /// Expect a [`FailureKind::ReplayDetected`] failure.
    pub fn replay_detected() -> Self {
        Self::of(FailureKind::ReplayDetected)
    }

    /// Expect a [`FailureKind::SignatureKeyNotFound`] failure.
    pub fn signature_key_not_found() -> Self {
        Self::of(FailureKind::SignatureKeyNotFound)
    }

    /// Expect an [`FailureKind::InvalidSigningKey`] failure.
    pub fn invalid_signing_key() -> Self {
        Self::of(FailureKind::InvalidSigningKey)
    }

    /// Expect a [`FailureKind::KeyWrap`] failure.
    pub fn key_wrap() -> Self {
        Self::of(FailureKind::KeyWrap)
    }

    /// Expect a generic [`FailureKind::Validation`] failure.
    pub fn validation() -> Self {
        Self::of(FailureKind::Validation)
    }

    /// Expect an [`FailureKind::XmlRead`] failure.
    pub fn xml_read() -> Self {
        Self::of(FailureKind::XmlRead)
    }

    /// Expect an [`FailureKind::XmlValidation`] failure.
    pub fn xml_validation() -> Self {
        Self::of(FailureKind::XmlValidation)
    }
}

impl std::fmt::Display for Expectation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            Some(kind) => write!(
                f,
                "{}, Substring: {}",
                kind,
                self.substring.as_deref().unwrap_or("")
            ),
            None => write!(f, "NoFailureExpected"),
        }
    }
}
