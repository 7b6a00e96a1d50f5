//! Validated scalar types shared by the CDA and HL7 v2 document models.
//!
//! These types make invalid scalar states unrepresentable so that document validation only
//! has to reason about presence and absence.

pub mod identifier;

pub use identifier::{HealthcareIdentifier, HealthcareIdentifierKind, IdentifierError};

#[derive(Debug, thiserror::Error)]
pub enum TextError {
    #[error("text must contain at least one non-whitespace character")]
    Empty,
}

/// Trimmed text that is never blank.
///
/// Required text fields in the document models hold `Option<NonEmptyText>`, so a field is
/// either absent or carries real content; a blank string cannot slip through as "present".
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NonEmptyText(String);

impl NonEmptyText {
    /// Trims `input` and wraps it.
    ///
    /// # Errors
    ///
    /// Returns [`TextError::Empty`] if nothing is left after trimming.
    pub fn new(input: impl AsRef<str>) -> Result<Self, TextError> {
        let trimmed = input.as_ref().trim();
        if trimmed.is_empty() {
            return Err(TextError::Empty);
        }
        Ok(Self(trimmed.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl std::fmt::Display for NonEmptyText {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for NonEmptyText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::str::FromStr for NonEmptyText {
    type Err = TextError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl serde::Serialize for NonEmptyText {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> serde::Deserialize<'de> for NonEmptyText {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        NonEmptyText::new(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_surrounding_whitespace() {
        let text = NonEmptyText::new("  Dr Jane Citizen \n").expect("valid text");
        assert_eq!(text.as_str(), "Dr Jane Citizen");
    }

    #[test]
    fn rejects_blank_input() {
        assert!(matches!(NonEmptyText::new("   "), Err(TextError::Empty)));
        assert!(matches!(NonEmptyText::new(""), Err(TextError::Empty)));
    }

    #[test]
    fn deserialise_rejects_blank_yaml_string() {
        let err = serde_yaml::from_str::<NonEmptyText>("'  '").expect_err("blank rejected");
        assert!(err.to_string().contains("non-whitespace character"));
    }
}
