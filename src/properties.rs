//! Property values and per-kind property schemas.
//!
//! Failure kinds declare named properties (an expiration instant, the
//! rejected audience, and so on). The schema table here is the static
//! answer to "does this kind have that property, and of what type",
//! consulted by name during verification.

use chrono::{DateTime, Utc};

use crate::kind::FailureKind;

/// A property value carried by a captured failure or expected by a test.
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyValue {
    Bool(bool),
    Int(i64),
    Str(String),
    Time(DateTime<Utc>),
}

impl PropertyValue {
    /// The type tag for this value's runtime variant.
    pub fn type_of(&self) -> PropertyType {
        match self {
            PropertyValue::Bool(_) => PropertyType::Bool,
            PropertyValue::Int(_) => PropertyType::Int,
            PropertyValue::Str(_) => PropertyType::Str,
            PropertyValue::Time(_) => PropertyType::Time,
        }
    }

    /// Variant-wise equality against another value.
    ///
    /// The matcher consults this in both directions and treats the values
    /// as equal if either direction reports equal.
    pub fn loose_eq(&self, other: &PropertyValue) -> bool {
        match (self, other) {
            (PropertyValue::Bool(a), PropertyValue::Bool(b)) => a == b,
            (PropertyValue::Int(a), PropertyValue::Int(b)) => a == b,
            (PropertyValue::Str(a), PropertyValue::Str(b)) => a == b,
            (PropertyValue::Time(a), PropertyValue::Time(b)) => a == b,
            _ => false,
        }
    }
}

impl std::fmt::Display for PropertyValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PropertyValue::Bool(v) => write!(f, "{}", v),
            PropertyValue::Int(v) => write!(f, "{}", v),
            PropertyValue::Str(v) => write!(f, "'{}'", v),
            PropertyValue::Time(v) => write!(f, "{}", v.to_rfc3339()),
        }
    }
}

impl From<bool> for PropertyValue {
    fn from(v: bool) -> Self {
        PropertyValue::Bool(v)
    }
}

impl From<i64> for PropertyValue {
    fn from(v: i64) -> Self {
        PropertyValue::Int(v)
    }
}

impl From<&str> for PropertyValue {
    fn from(v: &str) -> Self {
        PropertyValue::Str(v.to_string())
    }
}

impl From<String> for PropertyValue {
    fn from(v: String) -> Self {
        PropertyValue::Str(v)
    }
}

impl From<DateTime<Utc>> for PropertyValue {
    fn from(v: DateTime<Utc>) -> Self {
        PropertyValue::Time(v)
    }
}

/// Declared type of a property in a kind's schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropertyType {
    Bool,
    Int,
    Str,
    Time,
}

impl PropertyType {
    /// Whether a runtime value is acceptable for this declared type.
    pub fn admits(&self, value: &PropertyValue) -> bool {
        *self == value.type_of()
    }
}

impl std::fmt::Display for PropertyType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            PropertyType::Bool => "bool",
            PropertyType::Int => "int",
            PropertyType::Str => "str",
            PropertyType::Time => "time",
        };
        write!(f, "{}", s)
    }
}

/// A property declared by a failure kind.
#[derive(Debug, Clone, Copy)]
pub struct PropertySpec {
    /// Property name, unique within the kind.
    pub name: &'static str,
    /// Declared type.
    pub ty: PropertyType,
    /// Whether the property may be null on an instance.
    pub nullable: bool,
}

impl FailureKind {
    /// Properties declared by this failure kind.
    ///
    /// Kinds without named properties return an empty slice.
    pub fn properties(&self) -> &'static [PropertySpec] {
        match self {
            FailureKind::Expired => &[PropertySpec {
                name: "expires",
                ty: PropertyType::Time,
                nullable: false,
            }],
            FailureKind::NotYetValid => &[PropertySpec {
                name: "not_before",
                ty: PropertyType::Time,
                nullable: false,
            }],
            FailureKind::InvalidLifetime => &[
                PropertySpec {
                    name: "not_before",
                    ty: PropertyType::Time,
                    nullable: true,
                },
                PropertySpec {
                    name: "expires",
                    ty: PropertyType::Time,
                    nullable: true,
                },
            ],
            FailureKind::InvalidAudience => &[PropertySpec {
                name: "invalid_audience",
                ty: PropertyType::Str,
                nullable: true,
            }],
            FailureKind::InvalidIssuer => &[PropertySpec {
                name: "invalid_issuer",
                ty: PropertyType::Str,
                nullable: true,
            }],
            FailureKind::InvalidSigningKey => &[PropertySpec {
                name: "signing_key_id",
                ty: PropertyType::Str,
                nullable: true,
            }],
            _ => &[],
        }
    }

    /// Look up a declared property by name.
    pub fn property_spec(&self, name: &str) -> Option<&'static PropertySpec> {
        self.properties().iter().find(|spec| spec.name == name)
    }
}
