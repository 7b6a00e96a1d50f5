//! Validation configuration.
//!
//! Configuration is resolved once at process startup and passed into each validation run.
//! This crate never reads environment variables itself; callers pass the raw values in.

use crate::error::{ValidationError, ValidationResult};
use crate::message::Severity;

/// Settings applied to a root validation run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidationConfig {
    minimum_severity: Severity,
    fail_on_warnings: bool,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            minimum_severity: Severity::Information,
            fail_on_warnings: false,
        }
    }
}

impl ValidationConfig {
    pub fn new(minimum_severity: Severity, fail_on_warnings: bool) -> Self {
        Self {
            minimum_severity,
            fail_on_warnings,
        }
    }

    /// Messages below this severity are dropped from the reported collection.
    pub fn minimum_severity(&self) -> Severity {
        self.minimum_severity
    }

    /// Whether warnings make a document fail [`ensure_valid`](crate::ensure_valid).
    pub fn fail_on_warnings(&self) -> bool {
        self.fail_on_warnings
    }

    /// Build a config from raw (for example environment) values.
    ///
    /// `None` or blank values fall back to the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidConfig`] for an unknown severity or a flag that is
    /// not a recognised boolean.
    pub fn from_env_values(
        minimum_severity: Option<String>,
        fail_on_warnings: Option<String>,
    ) -> ValidationResult<Self> {
        let defaults = Self::default();

        let minimum_severity = non_blank(minimum_severity)
            .map(|v| v.parse::<Severity>())
            .transpose()?
            .unwrap_or(defaults.minimum_severity);

        let fail_on_warnings = non_blank(fail_on_warnings)
            .map(|v| parse_flag(&v))
            .transpose()?
            .unwrap_or(defaults.fail_on_warnings);

        Ok(Self {
            minimum_severity,
            fail_on_warnings,
        })
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_flag(value: &str) -> ValidationResult<bool> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(ValidationError::InvalidConfig(format!(
            "fail_on_warnings must be a boolean, got '{other}'"
        ))),
    }
}
