use cda_codes::CodeSet;
use cda_types::NonEmptyText;
use cda_validation::{Presence, Validate, ValidationBuilder, ValidationMessages};
use serde::{Deserialize, Serialize};

/// A coded concept with optional original text, for terminologies too large to enumerate
/// (SNOMED CT-AU, LOINC, AMT).
///
/// Either a display name or original text must be given; a code requires its code system.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CodableText {
    pub code: Option<NonEmptyText>,
    pub code_system: Option<NonEmptyText>,
    pub code_system_name: Option<String>,
    pub display_name: Option<NonEmptyText>,
    pub original_text: Option<NonEmptyText>,
}

impl CodableText {
    /// A coded concept from an external terminology.
    pub fn coded(
        code: NonEmptyText,
        code_system: NonEmptyText,
        display_name: NonEmptyText,
    ) -> Self {
        Self {
            code: Some(code),
            code_system: Some(code_system),
            display_name: Some(display_name),
            ..Self::default()
        }
    }

    /// Uncoded free text.
    pub fn original_text(text: NonEmptyText) -> Self {
        Self {
            original_text: Some(text),
            ..Self::default()
        }
    }

    /// A concept taken from one of the closed code sets.
    pub fn from_code_set<T: CodeSet>(value: T) -> Self {
        let coded = value.coded_value();
        Self {
            code: NonEmptyText::new(coded.code).ok(),
            code_system: NonEmptyText::new(coded.code_system).ok(),
            code_system_name: Some(coded.code_system_name.to_string()),
            display_name: NonEmptyText::new(coded.display_name).ok(),
            original_text: None,
        }
    }

    /// The best human-readable label available.
    pub fn label(&self) -> Option<&str> {
        self.display_name
            .as_ref()
            .or(self.original_text.as_ref())
            .map(NonEmptyText::as_str)
    }
}

impl Validate for CodableText {
    fn validate(&self, path: &str, messages: &mut ValidationMessages) {
        let mut vb = ValidationBuilder::new(path, messages);
        vb.at_least_one(&[
            ("DisplayName", self.display_name.is_present()),
            ("OriginalText", self.original_text.is_present()),
        ]);
        if self.code.is_present() {
            vb.required("CodeSystem", &self.code_system);
        }
    }
}
