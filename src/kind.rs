//! Failure kind identifiers.
//!
//! These are the canonical discriminators for every failure category the
//! harness knows how to match against.

/// Canonical failure kinds as an enum for type safety.
///
/// Using an enum provides compile-time checking and prevents typos in
/// expectations and captured failures alike.
///
/// # Example
///
/// ```rust
/// use verdict::FailureKind;
///
/// let kind = FailureKind::Expired;
/// assert_eq!(kind.as_str(), "Expired");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureKind {
    /// An argument was invalid
    InvalidArgument,
    /// An argument was outside its allowed range
    ArgumentOutOfRange,
    /// A required argument was null/absent
    NullArgument,
    /// A cryptographic primitive failed
    Cryptographic,
    /// The operation is invalid in the current state
    InvalidOperation,
    /// An I/O operation failed
    Io,
    /// The requested operation is not supported
    NotSupported,
    /// The object was already disposed
    ObjectDisposed,
    /// Token decryption failed
    DecryptionFailed,
    /// No key was found to decrypt the token
    EncryptionKeyNotFound,
    /// Token encryption failed
    EncryptionFailed,
    /// The token's lifetime has elapsed
    Expired,
    /// The token's audience was not accepted
    InvalidAudience,
    /// The token's issuer was not accepted
    InvalidIssuer,
    /// The token's validity window is inconsistent
    InvalidLifetime,
    /// Signature verification failed
    InvalidSignature,
    /// The token carries no expiration
    NoExpiration,
    /// The token is not yet within its validity window
    NotYetValid,
    /// Recording the token in the replay cache failed
    ReplayAddFailed,
    /// The token was seen before
    ReplayDetected,
    /// No key was found to verify the signature
    SignatureKeyNotFound,
    /// The signing key was rejected
    InvalidSigningKey,
    /// Key wrapping or unwrapping failed
    KeyWrap,
    /// Generic token validation failure
    Validation,
    /// Reading structured XML failed
    XmlRead,
    /// XML structural validation failed
    XmlValidation,
}

impl FailureKind {
    /// Get the canonical string name.
    ///
    /// # Example
    ///
    /// ```rust
    /// use verdict::FailureKind;
    ///
    /// assert_eq!(FailureKind::InvalidArgument.as_str(), "InvalidArgument");
    /// assert_eq!(FailureKind::Expired.as_str(), "Expired");
    /// ```
    pub fn as_str(&self) -> &'static str {
        match self {
            FailureKind::InvalidArgument => "InvalidArgument",
            FailureKind::ArgumentOutOfRange => "ArgumentOutOfRange",
            FailureKind::NullArgument => "NullArgument",
            FailureKind::Cryptographic => "Cryptographic",
            FailureKind::InvalidOperation => "InvalidOperation",
            FailureKind::Io => "Io",
            FailureKind::NotSupported => "NotSupported",
            FailureKind::ObjectDisposed => "ObjectDisposed",
            FailureKind::DecryptionFailed => "DecryptionFailed",
            FailureKind::EncryptionKeyNotFound => "EncryptionKeyNotFound",
            FailureKind::EncryptionFailed => "EncryptionFailed",
            FailureKind::Expired => "Expired",
            FailureKind::InvalidAudience => "InvalidAudience",
            FailureKind::InvalidIssuer => "InvalidIssuer",
            FailureKind::InvalidLifetime => "InvalidLifetime",
            FailureKind::InvalidSignature => "InvalidSignature",
            FailureKind::NoExpiration => "NoExpiration",
            FailureKind::NotYetValid => "NotYetValid",
            FailureKind::ReplayAddFailed => "ReplayAddFailed",
            FailureKind::ReplayDetected => "ReplayDetected",
            FailureKind::SignatureKeyNotFound => "SignatureKeyNotFound",
            FailureKind::InvalidSigningKey => "InvalidSigningKey",
            FailureKind::KeyWrap => "KeyWrap",
            FailureKind::Validation => "Validation",
            FailureKind::XmlRead => "XmlRead",
            FailureKind::XmlValidation => "XmlValidation",
        }
    }

    /// Get all known failure kinds.
    ///
    /// Useful for generating documentation or exhaustive table checks.
    pub fn all() -> &'static [FailureKind] {
        &[
            FailureKind::InvalidArgument,
            FailureKind::ArgumentOutOfRange,
            FailureKind::NullArgument,
            FailureKind::Cryptographic,
            FailureKind::InvalidOperation,
            FailureKind::Io,
            FailureKind::NotSupported,
            FailureKind::ObjectDisposed,
            FailureKind::DecryptionFailed,
            FailureKind::EncryptionKeyNotFound,
            FailureKind::EncryptionFailed,
            FailureKind::Expired,
            FailureKind::InvalidAudience,
            FailureKind::InvalidIssuer,
            FailureKind::InvalidLifetime,
            FailureKind::InvalidSignature,
            FailureKind::NoExpiration,
            FailureKind::NotYetValid,
            FailureKind::ReplayAddFailed,
            FailureKind::ReplayDetected,
            FailureKind::SignatureKeyNotFound,
            FailureKind::InvalidSigningKey,
            FailureKind::KeyWrap,
            FailureKind::Validation,
            FailureKind::XmlRead,
            FailureKind::XmlValidation,
        ]
    }
}

impl std::fmt::Display for FailureKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
