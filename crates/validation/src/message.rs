//! Validation messages and the ordered sink they are collected into.

use crate::error::{ValidationError, ValidationResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Severity of a validation message, ordered from least to most severe.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Information,
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Information => "information",
            Self::Warning => "warning",
            Self::Error => "error",
        };
        f.write_str(label)
    }
}

impl FromStr for Severity {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "information" | "info" => Ok(Self::Information),
            "warning" | "warn" => Ok(Self::Warning),
            "error" => Ok(Self::Error),
            other => Err(ValidationError::InvalidConfig(format!(
                "unknown severity '{other}' (expected information, warning or error)"
            ))),
        }
    }
}

/// What kind of constraint a message reports.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageCode {
    /// A required field was absent.
    MissingRequiredField,
    /// A sequence held too few or too many elements.
    OutOfRange,
    /// A choice between alternative fields was not satisfied.
    InvalidChoice,
    /// A present value is not acceptable for its field.
    InvalidValue,
    /// A recommended field was absent.
    Recommended,
}

/// A single finding from a validation pass.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationMessage {
    /// Location of the field within the document tree, e.g. `ClinicalDocument/Context/Author`.
    pub path: String,
    pub severity: Severity,
    pub code: MessageCode,
    /// Human-readable description, including the path.
    pub description: String,
}

impl ValidationMessage {
    pub fn new(
        path: impl Into<String>,
        severity: Severity,
        code: MessageCode,
        description: impl Into<String>,
    ) -> Self {
        Self {
            path: path.into(),
            severity,
            code,
            description: description.into(),
        }
    }

    pub fn error(
        path: impl Into<String>,
        code: MessageCode,
        description: impl Into<String>,
    ) -> Self {
        Self::new(path, Severity::Error, code, description)
    }

    pub fn warning(
        path: impl Into<String>,
        code: MessageCode,
        description: impl Into<String>,
    ) -> Self {
        Self::new(path, Severity::Warning, code, description)
    }
}

impl fmt::Display for ValidationMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.severity, self.description)
    }
}

/// Ordered, append-only collection of validation messages.
///
/// One instance is shared by reference across a whole validation pass, so insertion order
/// is depth-first traversal order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValidationMessages(Vec<ValidationMessage>);

impl ValidationMessages {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, message: ValidationMessage) {
        self.0.push(message);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ValidationMessage> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[ValidationMessage] {
        &self.0
    }

    /// Messages with [`Severity::Error`].
    pub fn errors(&self) -> impl Iterator<Item = &ValidationMessage> {
        self.0.iter().filter(|m| m.severity == Severity::Error)
    }

    /// Messages with [`Severity::Warning`].
    pub fn warnings(&self) -> impl Iterator<Item = &ValidationMessage> {
        self.0.iter().filter(|m| m.severity == Severity::Warning)
    }

    pub fn has_errors(&self) -> bool {
        self.errors().next().is_some()
    }

    /// Paths of all messages, in order.
    pub fn paths(&self) -> Vec<&str> {
        self.0.iter().map(|m| m.path.as_str()).collect()
    }

    /// Drops every message below `minimum`, preserving the order of the rest.
    pub fn retain_at_least(&mut self, minimum: Severity) {
        self.0.retain(|m| m.severity >= minimum);
    }

    /// Converts the collection into a pass/fail outcome for the document at `root`.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::DocumentInvalid`] carrying every message when the
    /// collection holds an error, or a warning while `fail_on_warnings` is set.
    pub fn into_result(self, root: &str, fail_on_warnings: bool) -> ValidationResult<()> {
        let failed =
            self.has_errors() || (fail_on_warnings && self.warnings().next().is_some());
        if failed {
            return Err(ValidationError::DocumentInvalid {
                root: root.to_string(),
                messages: self,
            });
        }
        Ok(())
    }
}

impl Extend<ValidationMessage> for ValidationMessages {
    fn extend<I: IntoIterator<Item = ValidationMessage>>(&mut self, iter: I) {
        self.0.extend(iter);
    }
}

impl IntoIterator for ValidationMessages {
    type Item = ValidationMessage;
    type IntoIter = std::vec::IntoIter<ValidationMessage>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a ValidationMessages {
    type Item = &'a ValidationMessage;
    type IntoIter = std::slice::Iter<'a, ValidationMessage>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for ValidationMessages {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for message in &self.0 {
            writeln!(f, "{message}")?;
        }
        Ok(())
    }
}
