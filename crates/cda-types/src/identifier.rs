//! Australian healthcare identifiers (IHI, HPI-I and HPI-O).
//!
//! All three identifiers are 16 digit numbers issued by the Healthcare Identifiers Service.
//! The first six digits identify the identifier type and the final digit is a Luhn check
//! digit calculated over the preceding fifteen.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

const IDENTIFIER_LEN: usize = 16;

/// Errors returned when parsing a [`HealthcareIdentifier`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IdentifierError {
    #[error("healthcare identifier must be 16 digits, got {0}")]
    InvalidLength(usize),

    #[error("healthcare identifier must contain only digits")]
    NonDigit,

    #[error("unknown healthcare identifier prefix '{0}'")]
    UnknownPrefix(String),

    #[error("healthcare identifier check digit does not match")]
    ChecksumMismatch,
}

/// The type of a healthcare identifier, derived from its prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HealthcareIdentifierKind {
    /// Individual Healthcare Identifier (a patient).
    Ihi,
    /// Healthcare Provider Identifier – Individual (a clinician).
    HpiI,
    /// Healthcare Provider Identifier – Organisation.
    HpiO,
}

impl HealthcareIdentifierKind {
    /// The six digit prefix reserved for this identifier type.
    pub fn prefix(self) -> &'static str {
        match self {
            Self::Ihi => "800360",
            Self::HpiI => "800361",
            Self::HpiO => "800362",
        }
    }

    fn from_prefix(prefix: &str) -> Option<Self> {
        [Self::Ihi, Self::HpiI, Self::HpiO]
            .into_iter()
            .find(|kind| kind.prefix() == prefix)
    }
}

impl fmt::Display for HealthcareIdentifierKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Ihi => "IHI",
            Self::HpiI => "HPI-I",
            Self::HpiO => "HPI-O",
        };
        f.write_str(label)
    }
}

/// A parsed and check-digit verified healthcare identifier.
///
/// The canonical form is the bare 16 digit string. Spaces are accepted on input so that
/// identifiers copied from printed cards (`8003 6081 6669 0503`) parse.
///
/// # Examples
///
/// ```rust
/// # use cda_types::{HealthcareIdentifier, HealthcareIdentifierKind};
/// let ihi = HealthcareIdentifier::parse("8003 6081 6669 0503")?;
/// assert_eq!(ihi.kind(), HealthcareIdentifierKind::Ihi);
/// assert_eq!(ihi.as_str(), "8003608166690503");
/// # Ok::<(), cda_types::IdentifierError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HealthcareIdentifier {
    kind: HealthcareIdentifierKind,
    value: String,
}

impl HealthcareIdentifier {
    /// Parses an identifier, inferring its kind from the prefix.
    ///
    /// # Errors
    ///
    /// Returns [`IdentifierError`] if the value is not 16 digits, carries an unknown prefix,
    /// or fails the Luhn check.
    pub fn parse(raw: &str) -> Result<Self, IdentifierError> {
        let value: String = raw.chars().filter(|c| !c.is_whitespace()).collect();

        if value.len() != IDENTIFIER_LEN {
            return Err(IdentifierError::InvalidLength(value.len()));
        }
        if !value.bytes().all(|b| b.is_ascii_digit()) {
            return Err(IdentifierError::NonDigit);
        }

        let prefix = &value[..6];
        let kind = HealthcareIdentifierKind::from_prefix(prefix)
            .ok_or_else(|| IdentifierError::UnknownPrefix(prefix.to_string()))?;

        if !luhn_valid(&value) {
            return Err(IdentifierError::ChecksumMismatch);
        }

        Ok(Self { kind, value })
    }

    pub fn kind(&self) -> HealthcareIdentifierKind {
        self.kind
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }
}

fn luhn_valid(digits: &str) -> bool {
    let sum: u32 = digits
        .bytes()
        .rev()
        .enumerate()
        .map(|(i, b)| {
            let d = u32::from(b - b'0');
            if i % 2 == 1 {
                let doubled = d * 2;
                if doubled > 9 {
                    doubled - 9
                } else {
                    doubled
                }
            } else {
                d
            }
        })
        .sum();
    sum % 10 == 0
}

impl fmt::Display for HealthcareIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl Serialize for HealthcareIdentifier {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.value)
    }
}

impl<'de> Deserialize<'de> for HealthcareIdentifier {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}
