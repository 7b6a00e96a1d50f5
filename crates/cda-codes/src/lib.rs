//! Coded enumerations for Australian clinical documents and HL7 v2 messages.
//!
//! Every code set is a closed Rust enum whose variants map to a [`CodedValue`]: the external
//! code, its code system and the display name a serializer emits. Lookups by code or by
//! symbolic name go through a table built once on first use; there is no reflection.
//!
//! Key types:
//! - [`CodedValue`]: one entry of a code set.
//! - [`CodeSet`]: the behaviour shared by every code set enum.
//! - [`registry`]: runtime lookup of a code set by name.

#[macro_use]
mod macros;

pub mod demographics;
pub mod document;
pub mod hl7;
pub mod medication;
pub mod registry;
pub mod systems;
pub mod telecom;

use serde::Serialize;
use std::collections::HashMap;

pub use demographics::{AddressPurpose, AustralianState, IndigenousStatus, Sex};
pub use document::{DiagnosticService, DocumentStatus, DocumentType, MediaType, ResultStatus};
pub use hl7::{AbnormalFlag, AdministrativeSex, Hl7ResultStatus, ProcessingId, ValueType};
pub use medication::{MedicationChangeType, MedicationStatus};
pub use systems::CodeSystem;
pub use telecom::{TelecomMedium, TelecomUse};

/// Errors returned by the coded enumeration registry.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CodeError {
    #[error("'{0}' is not a registered code set")]
    UnknownCodeSet(String),

    #[error("code set {code_set} declares code '{code}' in {code_system} more than once")]
    DuplicateCode {
        code_set: &'static str,
        code: &'static str,
        code_system: &'static str,
    },

    #[error("code set {code_set} declares name '{name}' more than once")]
    DuplicateName {
        code_set: &'static str,
        name: &'static str,
    },
}

pub type CodeResult<T> = std::result::Result<T, CodeError>;

/// A single entry in a closed code set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct CodedValue {
    /// Symbolic name, unique within the code set (the enum variant name).
    pub name: &'static str,

    /// External code, e.g. `"F"` or `"100.32001"`.
    pub code: &'static str,

    /// Code system OID.
    pub code_system: &'static str,

    /// Human-readable code system name.
    pub code_system_name: &'static str,

    /// Display text emitted alongside the code.
    pub display_name: &'static str,

    /// Optional free-text alternative, such as a common abbreviation.
    pub alternate_name: Option<&'static str>,
}

/// Behaviour shared by every code set enum.
///
/// Implemented by the `code_set!` macro; the lookup methods have default implementations
/// that consult the set's [`CodeTable`].
pub trait CodeSet: Copy + Eq + 'static {
    /// Name of the code set, used by the [`registry`].
    const CODE_SET: &'static str;

    /// Every member, in declaration order.
    fn all() -> &'static [Self];

    /// Every member's coded value, in declaration order.
    fn coded_values() -> &'static [CodedValue];

    fn coded_value(self) -> &'static CodedValue;

    /// The lookup table for this set, built on first use.
    fn table() -> &'static CodeTable<Self>;

    fn code(self) -> &'static str {
        self.coded_value().code
    }

    fn code_system(self) -> &'static str {
        self.coded_value().code_system
    }

    fn display_name(self) -> &'static str {
        self.coded_value().display_name
    }

    fn alternate_name(self) -> Option<&'static str> {
        self.coded_value().alternate_name
    }

    /// Look up a member by external code, in any of the set's code systems.
    fn from_code(code: &str) -> Option<Self> {
        Self::table().by_code(code)
    }

    /// Look up a member by external code within a specific code system.
    fn from_code_system(code: &str, code_system: &str) -> Option<Self> {
        Self::table().by_code_system(code, code_system)
    }

    /// Look up a member by symbolic name.
    fn from_name(name: &str) -> Option<Self> {
        Self::table().by_name(name)
    }
}

/// Lookup indexes for one code set.
#[derive(Debug)]
pub struct CodeTable<T: 'static> {
    by_code: HashMap<&'static str, Vec<T>>,
    by_name: HashMap<&'static str, T>,
}

impl<T: CodeSet> CodeTable<T> {
    /// Build the indexes for `T`, rejecting duplicate codes or names.
    ///
    /// # Errors
    ///
    /// Returns [`CodeError::DuplicateCode`] if a `(code, code system)` pair repeats, or
    /// [`CodeError::DuplicateName`] if a symbolic name repeats.
    pub fn build() -> CodeResult<Self> {
        let mut by_code: HashMap<&'static str, Vec<T>> = HashMap::new();
        let mut by_name = HashMap::new();

        for &member in T::all() {
            let coded = member.coded_value();

            let same_code = by_code.entry(coded.code).or_default();
            if same_code
                .iter()
                .any(|other| other.code_system() == coded.code_system)
            {
                return Err(CodeError::DuplicateCode {
                    code_set: T::CODE_SET,
                    code: coded.code,
                    code_system: coded.code_system,
                });
            }
            same_code.push(member);

            if by_name.insert(coded.name, member).is_some() {
                return Err(CodeError::DuplicateName {
                    code_set: T::CODE_SET,
                    name: coded.name,
                });
            }
        }

        Ok(Self { by_code, by_name })
    }

    /// First member declared with `code`.
    pub fn by_code(&self, code: &str) -> Option<T> {
        self.by_code
            .get(code)
            .and_then(|members| members.first())
            .copied()
    }

    pub fn by_code_system(&self, code: &str, code_system: &str) -> Option<T> {
        self.by_code
            .get(code)?
            .iter()
            .find(|member| member.code_system() == code_system)
            .copied()
    }

    pub fn by_name(&self, name: &str) -> Option<T> {
        self.by_name.get(name).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coded_value_matches_declaration_order() {
        for (index, member) in Sex::all().iter().enumerate() {
            assert_eq!(member.coded_value(), &Sex::coded_values()[index]);
        }
    }

    #[test]
    fn looks_up_by_code_name_and_system() {
        assert_eq!(Sex::from_code("F"), Some(Sex::Female));
        assert_eq!(Sex::from_name("Female"), Some(Sex::Female));
        assert_eq!(
            Sex::from_code_system("F", systems::AS5017_SEX.oid),
            Some(Sex::Female)
        );
        assert_eq!(Sex::from_code_system("F", systems::HL7_ADMINISTRATIVE_SEX.oid), None);
    }

    #[test]
    fn lookup_miss_is_none() {
        assert_eq!(Sex::from_code("Q"), None);
        assert_eq!(Sex::from_name("female"), None);
    }

    #[test]
    fn display_uses_display_name() {
        assert_eq!(IndigenousStatus::NotStated.to_string(), "Not stated/inadequately described");
        assert_eq!(TelecomMedium::Email.code(), "mailto");
    }

    #[test]
    fn mixed_code_systems_resolve_independently() {
        let summary = DocumentType::DischargeSummary;
        assert_eq!(summary.code_system(), systems::LOINC.oid);
        assert_eq!(
            DocumentType::PathologyResultReport.code_system(),
            systems::NCTIS_DATA_COMPONENTS.oid
        );
        assert_eq!(DocumentType::from_code("18842-5"), Some(summary));
    }

    #[test]
    fn serialises_by_symbolic_name() {
        let yaml = serde_yaml::to_string(&AustralianState::Victoria).expect("serialise");
        assert_eq!(yaml.trim(), "Victoria");
        let parsed: AustralianState = serde_yaml::from_str("Queensland").expect("deserialise");
        assert_eq!(parsed.alternate_name(), Some("QLD"));
    }
}
