//! Expectation records loaded from YAML test data.
//!
//! Test suites often keep their expected-failure tables as data files.
//! This module deserializes those records and resolves kind names, so all
//! string parsing (case handling, aliases) lives here.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::expectation::Expectation;
use crate::kind::FailureKind;
use crate::properties::PropertyValue;

/// Error type for record parsing issues.
#[derive(Debug, thiserror::Error)]
pub enum RecordError {
    #[error("Unknown failure kind: '{0}'")]
    UnknownKind(String),

    #[error("Invalid property '{name}': {detail}")]
    InvalidProperty { name: String, detail: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// A test case loaded from a records file.
#[derive(Debug, Deserialize)]
pub struct FailureCase {
    /// Identifier naming this case in test output.
    pub test_id: String,
    /// The expected outcome for this case.
    pub expectation: ExpectationRecord,
}

/// An expectation as written in test data.
#[derive(Debug, Deserialize)]
pub struct ExpectationRecord {
    /// Expected failure kind; absent means no failure expected.
    #[serde(default)]
    pub kind: Option<String>,
    /// Required message substring.
    #[serde(default)]
    pub substring: Option<String>,
    /// Expected nested-cause kind.
    #[serde(default)]
    pub inner_kind: Option<String>,
    /// Skip the nested-cause kind comparison (default: false).
    #[serde(default)]
    pub ignore_inner: bool,
    /// Expected property values. Timestamps are RFC 3339 strings,
    /// explicit nulls expect a null property.
    #[serde(default)]
    pub properties: Option<HashMap<String, serde_json::Value>>,
    /// Dump the captured failure during verification (default: false).
    #[serde(default)]
    pub verbose: bool,
}

impl ExpectationRecord {
    /// Convert this record into an [`Expectation`].
    ///
    /// # Errors
    ///
    /// Returns `RecordError::UnknownKind` for an unrecognized kind name and
    /// `RecordError::InvalidProperty` for a property value outside the
    /// supported scalar domain.
    pub fn into_expectation(self) -> Result<Expectation, RecordError> {
        let mut expectation = match self.kind {
            Some(name) => Expectation::of(parse_kind_name(&name)?),
            None => Expectation::none(),
        };

        if let Some(substring) = self.substring {
            expectation = expectation.with_substring(substring);
        }
        if let Some(name) = self.inner_kind {
            expectation = expectation.with_inner(parse_kind_name(&name)?);
        }
        if self.ignore_inner {
            expectation = expectation.ignore_inner();
        }
        if let Some(properties) = self.properties {
            for (name, value) in properties {
                expectation = match parse_property_value(&name, value)? {
                    Some(value) => expectation.with_property(name, value),
                    None => expectation.with_null_property(name),
                };
            }
        }
        if self.verbose {
            expectation = expectation.verbose();
        }

        Ok(expectation)
    }
}

/// Load failure cases from a YAML file.
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be read
/// - The YAML is malformed
///
/// # Example
///
/// ```rust,ignore
/// let cases = load_cases("tests/data/read_token_cases.yaml")?;
/// println!("loaded {} cases", cases.len());
/// ```
pub fn load_cases(path: &Path) -> Result<Vec<FailureCase>> {
    let content = fs::read_to_string(path).context("Failed to read records file")?;
    let cases: Vec<FailureCase> =
        serde_yaml::from_str(&content).context("Failed to parse YAML")?;
    Ok(cases)
}

/// Parse a failure kind name into a [`FailureKind`].
///
/// This function handles:
/// - Case-insensitive matching (expired, EXPIRED, Expired all work)
/// - Kebab-case aliases (invalid-argument -> InvalidArgument)
/// - Legacy security-token-prefixed aliases (security-token-expired -> Expired)
///
/// # Errors
///
/// Returns `RecordError::UnknownKind` if the string doesn't match any
/// known kind.
///
/// # Example
///
/// ```rust
/// use verdict::records::parse_kind_name;
/// use verdict::FailureKind;
///
/// assert_eq!(parse_kind_name("Expired").unwrap(), FailureKind::Expired);
/// assert_eq!(parse_kind_name("security-token-expired").unwrap(), FailureKind::Expired);
/// ```
pub fn parse_kind_name(s: &str) -> Result<FailureKind, RecordError> {
    match s.to_lowercase().as_str() {
        "invalidargument" | "invalid-argument" | "argument-invalid" => {
            Ok(FailureKind::InvalidArgument)
        }
        "argumentoutofrange" | "argument-out-of-range" => Ok(FailureKind::ArgumentOutOfRange),
        "nullargument" | "null-argument" | "argument-null" => Ok(FailureKind::NullArgument),
        "cryptographic" | "cryptographic-failure" => Ok(FailureKind::Cryptographic),
        "invalidoperation" | "invalid-operation" => Ok(FailureKind::InvalidOperation),
        "io" | "io-failure" => Ok(FailureKind::Io),
        "notsupported" | "not-supported" => Ok(FailureKind::NotSupported),
        "objectdisposed" | "object-disposed" => Ok(FailureKind::ObjectDisposed),
        "decryptionfailed" | "decryption-failed" | "security-token-decryption-failed" => {
            Ok(FailureKind::DecryptionFailed)
        }
        "encryptionkeynotfound"
        | "encryption-key-not-found"
        | "security-token-encryption-key-not-found" => Ok(FailureKind::EncryptionKeyNotFound),
        "encryptionfailed" | "encryption-failed" | "security-token-encryption-failed" => {
            Ok(FailureKind::EncryptionFailed)
        }
        "expired" | "security-token-expired" => Ok(FailureKind::Expired),
        "invalidaudience" | "invalid-audience" | "security-token-invalid-audience" => {
            Ok(FailureKind::InvalidAudience)
        }
        "invalidissuer" | "invalid-issuer" | "security-token-invalid-issuer" => {
            Ok(FailureKind::InvalidIssuer)
        }
        "invalidlifetime" | "invalid-lifetime" | "security-token-invalid-lifetime" => {
            Ok(FailureKind::InvalidLifetime)
        }
        "invalidsignature" | "invalid-signature" | "security-token-invalid-signature" => {
            Ok(FailureKind::InvalidSignature)
        }
        "noexpiration" | "no-expiration" | "security-token-no-expiration" => {
            Ok(FailureKind::NoExpiration)
        }
        "notyetvalid" | "not-yet-valid" | "security-token-not-yet-valid" => {
            Ok(FailureKind::NotYetValid)
        }
        "replayaddfailed" | "replay-add-failed" | "security-token-replay-add-failed" => {
            Ok(FailureKind::ReplayAddFailed)
        }
        "replaydetected" | "replay-detected" | "security-token-replay-detected" => {
            Ok(FailureKind::ReplayDetected)
        }
        "signaturekeynotfound"
        | "signature-key-not-found"
        | "security-token-signature-key-not-found" => Ok(FailureKind::SignatureKeyNotFound),
        "invalidsigningkey" | "invalid-signing-key" | "security-token-invalid-signing-key" => {
            Ok(FailureKind::InvalidSigningKey)
        }
        "keywrap" | "key-wrap" | "key-wrap-failure" => Ok(FailureKind::KeyWrap),
        "validation" | "validation-failure" | "security-token-validation" => {
            Ok(FailureKind::Validation)
        }
        "xmlread" | "xml-read" => Ok(FailureKind::XmlRead),
        "xmlvalidation" | "xml-validation" => Ok(FailureKind::XmlValidation),

        _ => Err(RecordError::UnknownKind(s.to_string())),
    }
}

/// Convert a record scalar into a property value; `Null` expects null.
fn parse_property_value(
    name: &str,
    value: serde_json::Value,
) -> Result<Option<PropertyValue>, RecordError> {
    match value {
        serde_json::Value::Null => Ok(None),
        serde_json::Value::Bool(v) => Ok(Some(PropertyValue::Bool(v))),
        serde_json::Value::Number(v) => match v.as_i64() {
            Some(v) => Ok(Some(PropertyValue::Int(v))),
            None => Err(RecordError::InvalidProperty {
                name: name.to_string(),
                detail: format!("number {} is not an integer", v),
            }),
        },
        serde_json::Value::String(v) => match DateTime::parse_from_rfc3339(&v) {
            Ok(ts) => Ok(Some(PropertyValue::Time(ts.with_timezone(&Utc)))),
            Err(_) => Ok(Some(PropertyValue::Str(v))),
        },
        other => Err(RecordError::InvalidProperty {
            name: name.to_string(),
            detail: format!("unsupported value: {}", other),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_parse_kind_name_primary() {
        assert_eq!(
            parse_kind_name("InvalidArgument").unwrap(),
            FailureKind::InvalidArgument
        );
        assert_eq!(parse_kind_name("Expired").unwrap(), FailureKind::Expired);
        assert_eq!(
            parse_kind_name("SignatureKeyNotFound").unwrap(),
            FailureKind::SignatureKeyNotFound
        );
    }

    #[test]
    fn test_parse_kind_name_case_insensitive() {
        assert_eq!(parse_kind_name("expired").unwrap(), FailureKind::Expired);
        assert_eq!(parse_kind_name("EXPIRED").unwrap(), FailureKind::Expired);
        assert_eq!(parse_kind_name("ExPiReD").unwrap(), FailureKind::Expired);
    }

    #[test]
    fn test_parse_kind_name_aliases() {
        assert_eq!(
            parse_kind_name("invalid-argument").unwrap(),
            FailureKind::InvalidArgument
        );
        assert_eq!(
            parse_kind_name("argument-invalid").unwrap(),
            FailureKind::InvalidArgument
        );
        assert_eq!(
            parse_kind_name("security-token-expired").unwrap(),
            FailureKind::Expired
        );
        assert_eq!(
            parse_kind_name("key-wrap-failure").unwrap(),
            FailureKind::KeyWrap
        );
    }

    #[test]
    fn test_parse_kind_name_every_canonical_name_round_trips() {
        for kind in FailureKind::all() {
            assert_eq!(parse_kind_name(kind.as_str()).unwrap(), *kind);
        }
    }

    #[test]
    fn test_parse_kind_name_unknown() {
        assert!(parse_kind_name("frobnicated").is_err());
        assert!(parse_kind_name("").is_err());
    }

    #[test]
    fn test_deserialize_record() {
        let yaml = r#"
kind: security-token-expired
substring: "IDX10223:"
inner_kind: cryptographic
ignore_inner: true
"#;
        let record: ExpectationRecord = serde_yaml::from_str(yaml).unwrap();
        let expectation = record.into_expectation().unwrap();
        assert_eq!(expectation.kind(), Some(FailureKind::Expired));
        assert_eq!(expectation.substring(), Some("IDX10223:"));
        assert_eq!(expectation.inner_kind(), Some(FailureKind::Cryptographic));
        assert!(expectation.ignores_inner());
    }

    #[test]
    fn test_deserialize_record_defaults() {
        let record: ExpectationRecord = serde_yaml::from_str("kind: expired").unwrap();
        assert!(!record.ignore_inner);
        assert!(!record.verbose);
        let expectation = record.into_expectation().unwrap();
        assert!(expectation.substring().is_none());
        assert!(expectation.expected_properties().is_empty());
    }

    #[test]
    fn test_deserialize_empty_record_expects_no_failure() {
        let record: ExpectationRecord = serde_yaml::from_str("{}").unwrap();
        let expectation = record.into_expectation().unwrap();
        assert!(expectation.kind().is_none());
    }

    #[test]
    fn test_record_properties() {
        let yaml = r#"
kind: expired
properties:
  expires: "2017-03-17T18:33:37Z"
"#;
        let record: ExpectationRecord = serde_yaml::from_str(yaml).unwrap();
        let expectation = record.into_expectation().unwrap();
        let expires = Utc.with_ymd_and_hms(2017, 3, 17, 18, 33, 37).unwrap();
        assert_eq!(
            expectation.expected_properties().get("expires"),
            Some(&Some(PropertyValue::Time(expires)))
        );
    }

    #[test]
    fn test_record_null_property() {
        let yaml = r#"
kind: invalid-audience
properties:
  invalid_audience: null
"#;
        let record: ExpectationRecord = serde_yaml::from_str(yaml).unwrap();
        let expectation = record.into_expectation().unwrap();
        assert_eq!(
            expectation.expected_properties().get("invalid_audience"),
            Some(&None)
        );
    }

    #[test]
    fn test_record_plain_string_property() {
        let yaml = r#"
kind: invalid-audience
properties:
  invalid_audience: "https://audience.example"
"#;
        let record: ExpectationRecord = serde_yaml::from_str(yaml).unwrap();
        let expectation = record.into_expectation().unwrap();
        assert_eq!(
            expectation.expected_properties().get("invalid_audience"),
            Some(&Some(PropertyValue::Str("https://audience.example".to_string())))
        );
    }

    #[test]
    fn test_record_unknown_kind() {
        let record: ExpectationRecord = serde_yaml::from_str("kind: frobnicated").unwrap();
        let err = record.into_expectation().unwrap_err();
        assert!(matches!(err, RecordError::UnknownKind(_)));
    }

    #[test]
    fn test_deserialize_case_list() {
        let yaml = r#"
- test_id: expired_token
  expectation:
    kind: security-token-expired
    substring: "IDX10223:"
- test_id: valid_token
  expectation: {}
"#;
        let cases: Vec<FailureCase> = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(cases.len(), 2);
        assert_eq!(cases[0].test_id, "expired_token");
        assert!(cases[1].expectation.kind.is_none());
    }
}
