//! Composite HL7 v2 data types used inside segments.

use cda_types::{HealthcareIdentifier, HealthcareIdentifierKind, NonEmptyText};
use cda_validation::{Presence, Validate, ValidationBuilder, ValidationMessages};
use serde::{Deserialize, Serialize};

/// Assigning authority for an Individual Healthcare Identifier in PID-3.
pub const IHI_ASSIGNING_AUTHORITY: &str = "AUSHIC";

/// Identifier type code for national identifiers.
pub const NATIONAL_IDENTIFIER_TYPE: &str = "NI";

/// Free-text component value; a missing or blank component reads as empty.
fn component_text(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or_default()
}

/// HD: an application, facility or assigning authority.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HierarchicDesignator {
    pub namespace_id: Option<String>,
    pub universal_id: Option<String>,
    pub universal_id_type: Option<String>,
}

impl HierarchicDesignator {
    pub fn namespace(namespace_id: &str) -> Self {
        Self {
            namespace_id: Some(namespace_id.to_string()),
            ..Self::default()
        }
    }
}

impl Validate for HierarchicDesignator {
    fn validate(&self, path: &str, messages: &mut ValidationMessages) {
        let mut vb = ValidationBuilder::new(path, messages);
        vb.at_least_one(&[
            ("NamespaceId", component_text(&self.namespace_id).is_present()),
            ("UniversalId", component_text(&self.universal_id).is_present()),
        ]);
        if component_text(&self.universal_id).is_present() {
            vb.required("UniversalIdType", component_text(&self.universal_id_type));
        }
    }
}

/// MSG: message code, trigger event and structure, e.g. `ORU^R01^ORU_R01`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MessageType {
    pub message_code: Option<NonEmptyText>,
    pub trigger_event: Option<NonEmptyText>,
    pub message_structure: Option<String>,
}

impl MessageType {
    pub fn oru_r01() -> Self {
        Self {
            message_code: NonEmptyText::new("ORU").ok(),
            trigger_event: NonEmptyText::new("R01").ok(),
            message_structure: Some("ORU_R01".to_string()),
        }
    }

    pub fn is(&self, code: &str, trigger: &str) -> bool {
        self.message_code.as_ref().map(NonEmptyText::as_str) == Some(code)
            && self.trigger_event.as_ref().map(NonEmptyText::as_str) == Some(trigger)
    }
}

impl std::fmt::Display for MessageType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        fn component(value: &Option<NonEmptyText>) -> &str {
            value.as_ref().map_or("", NonEmptyText::as_str)
        }
        write!(f, "{}^{}", component(&self.message_code), component(&self.trigger_event))
    }
}

impl Validate for MessageType {
    fn validate(&self, path: &str, messages: &mut ValidationMessages) {
        let mut vb = ValidationBuilder::new(path, messages);
        vb.required("MessageCode", &self.message_code);
        vb.required("TriggerEvent", &self.trigger_event);
    }
}

/// CX: an identifier with its assigning authority, as in PID-3.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExtendedId {
    pub id: Option<NonEmptyText>,
    pub assigning_authority: Option<HierarchicDesignator>,
    pub identifier_type_code: Option<String>,
}

impl ExtendedId {
    /// A patient IHI in the national `^^^AUSHIC^NI` form.
    pub fn ihi(ihi: &HealthcareIdentifier) -> Self {
        Self {
            id: NonEmptyText::new(ihi.as_str()).ok(),
            assigning_authority: Some(HierarchicDesignator::namespace(IHI_ASSIGNING_AUTHORITY)),
            identifier_type_code: Some(NATIONAL_IDENTIFIER_TYPE.to_string()),
        }
    }

    fn claims_ihi(&self) -> bool {
        let authority = self
            .assigning_authority
            .as_ref()
            .and_then(|authority| authority.namespace_id.as_deref());
        authority.map(str::trim) == Some(IHI_ASSIGNING_AUTHORITY)
            && component_text(&self.identifier_type_code).trim() == NATIONAL_IDENTIFIER_TYPE
    }
}

impl Validate for ExtendedId {
    fn validate(&self, path: &str, messages: &mut ValidationMessages) {
        let mut vb = ValidationBuilder::new(path, messages);
        vb.required("Id", &self.id);
        vb.optional_node("AssigningAuthority", &self.assigning_authority);
        vb.recommended("IdentifierTypeCode", component_text(&self.identifier_type_code));

        if let Some(id) = self.id.as_ref().filter(|_| self.claims_ihi()) {
            match HealthcareIdentifier::parse(id.as_str()) {
                Ok(parsed) if parsed.kind() == HealthcareIdentifierKind::Ihi => {}
                Ok(parsed) => vb.invalid("Id", format!("must be an IHI, got an {}", parsed.kind())),
                Err(err) => vb.invalid("Id", format!("is not a valid IHI: {err}")),
            }
        }
    }
}

/// XPN: a person's name.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExtendedPersonName {
    pub family_name: Option<NonEmptyText>,
    pub given_name: Option<String>,
    pub second_names: Option<String>,
    pub prefix: Option<String>,
    pub name_type_code: Option<String>,
}

impl Validate for ExtendedPersonName {
    fn validate(&self, path: &str, messages: &mut ValidationMessages) {
        let mut vb = ValidationBuilder::new(path, messages);
        vb.required("FamilyName", &self.family_name);
    }
}

/// EI: an entity identifier such as a placer or filler order number.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EntityIdentifier {
    pub entity_identifier: Option<NonEmptyText>,
    pub namespace_id: Option<String>,
    pub universal_id: Option<String>,
    pub universal_id_type: Option<String>,
}

impl Validate for EntityIdentifier {
    fn validate(&self, path: &str, messages: &mut ValidationMessages) {
        let mut vb = ValidationBuilder::new(path, messages);
        vb.required("EntityIdentifier", &self.entity_identifier);
        if component_text(&self.universal_id).is_present() {
            vb.required("UniversalIdType", component_text(&self.universal_id_type));
        }
    }
}

/// CE: a coded element with optional alternate coding.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CodedElement {
    pub identifier: Option<NonEmptyText>,
    pub text: Option<String>,
    pub name_of_coding_system: Option<String>,
    pub alternate_identifier: Option<String>,
    pub alternate_text: Option<String>,
    pub name_of_alternate_coding_system: Option<String>,
}

impl CodedElement {
    pub fn new(identifier: NonEmptyText, text: &str, coding_system: &str) -> Self {
        Self {
            identifier: Some(identifier),
            text: Some(text.to_string()),
            name_of_coding_system: Some(coding_system.to_string()),
            ..Self::default()
        }
    }
}

impl Validate for CodedElement {
    fn validate(&self, path: &str, messages: &mut ValidationMessages) {
        let mut vb = ValidationBuilder::new(path, messages);
        vb.at_least_one(&[
            ("Identifier", self.identifier.is_present()),
            ("Text", component_text(&self.text).is_present()),
        ]);
        if self.identifier.is_present() {
            vb.required("NameOfCodingSystem", component_text(&self.name_of_coding_system));
        }
        if component_text(&self.alternate_identifier).is_present() {
            vb.required(
                "NameOfAlternateCodingSystem",
                component_text(&self.name_of_alternate_coding_system),
            );
        }
    }
}
