//! People and organisations that take part in a clinical document.

use crate::common::CodableText;
use cda_codes::{AddressPurpose, AustralianState, IndigenousStatus, Sex, TelecomMedium, TelecomUse};
use cda_types::{HealthcareIdentifier, HealthcareIdentifierKind, NonEmptyText};
use cda_validation::{Presence, Validate, ValidationBuilder, ValidationMessages};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Reports an identifier of the wrong kind, e.g. an IHI supplied where an HPI-I belongs.
fn check_identifier_kind(
    vb: &mut ValidationBuilder<'_>,
    field: &str,
    identifier: Option<&HealthcareIdentifier>,
    expected: HealthcareIdentifierKind,
) {
    if let Some(identifier) = identifier {
        if identifier.kind() != expected {
            vb.invalid(
                field,
                format!("must be an {expected}, got an {}", identifier.kind()),
            );
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PersonName {
    pub title: Option<String>,
    pub given_names: Vec<NonEmptyText>,
    pub family_name: Option<NonEmptyText>,
    pub suffix: Option<String>,
}

impl PersonName {
    pub fn new(given: &str, family: &str) -> Self {
        Self {
            given_names: NonEmptyText::new(given).into_iter().collect(),
            family_name: NonEmptyText::new(family).ok(),
            ..Self::default()
        }
    }
}

impl Validate for PersonName {
    fn validate(&self, path: &str, messages: &mut ValidationMessages) {
        let mut vb = ValidationBuilder::new(path, messages);
        vb.required("FamilyName", &self.family_name);
    }
}

/// A postal or residential address.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Address {
    pub purpose: Option<AddressPurpose>,
    pub lines: Vec<NonEmptyText>,
    pub suburb: Option<String>,
    pub state: Option<AustralianState>,
    pub postcode: Option<String>,
}

impl Validate for Address {
    fn validate(&self, path: &str, messages: &mut ValidationMessages) {
        let mut vb = ValidationBuilder::new(path, messages);
        vb.required("Purpose", &self.purpose);
        vb.required("AddressLine", &self.lines);
        if let Some(postcode) = &self.postcode {
            let well_formed = postcode.len() == 4 && postcode.bytes().all(|b| b.is_ascii_digit());
            if !well_formed {
                vb.invalid("Postcode", format!("must be four digits, got '{postcode}'"));
            }
        }
    }
}

/// A phone number, fax, email or web address.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ElectronicCommunicationDetail {
    pub medium: Option<TelecomMedium>,
    pub usage: Vec<TelecomUse>,
    pub address: Option<NonEmptyText>,
}

impl ElectronicCommunicationDetail {
    pub fn new(medium: TelecomMedium, address: NonEmptyText) -> Self {
        Self {
            medium: Some(medium),
            usage: Vec::new(),
            address: Some(address),
        }
    }

    /// The address as a URL (`tel:...`, `mailto:...`), when both parts are set.
    pub fn url(&self) -> Option<String> {
        let medium = self.medium?;
        let address = self.address.as_ref()?;
        Some(medium.to_url(address.as_str()))
    }
}

impl Validate for ElectronicCommunicationDetail {
    fn validate(&self, path: &str, messages: &mut ValidationMessages) {
        let mut vb = ValidationBuilder::new(path, messages);
        vb.required("Medium", &self.medium);
        vb.required("Address", &self.address);
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Organisation {
    pub name: Option<NonEmptyText>,
    pub department: Option<String>,
    pub hpio: Option<HealthcareIdentifier>,
    pub addresses: Vec<Address>,
    pub communication: Vec<ElectronicCommunicationDetail>,
}

impl Validate for Organisation {
    fn validate(&self, path: &str, messages: &mut ValidationMessages) {
        let mut vb = ValidationBuilder::new(path, messages);
        vb.required("Name", &self.name);
        check_identifier_kind(&mut vb, "Hpio", self.hpio.as_ref(), HealthcareIdentifierKind::HpiO);
        vb.sequence("Address", &self.addresses);
        vb.sequence("Communication", &self.communication);
    }
}

/// The healthcare provider who wrote the document.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Author {
    pub name: Option<PersonName>,
    pub role: Option<CodableText>,
    pub hpii: Option<HealthcareIdentifier>,
    pub organisation: Option<Organisation>,
    pub communication: Vec<ElectronicCommunicationDetail>,
    pub authored_time: Option<DateTime<Utc>>,
}

impl Validate for Author {
    fn validate(&self, path: &str, messages: &mut ValidationMessages) {
        let mut vb = ValidationBuilder::new(path, messages);
        vb.required_node("Name", &self.name);
        vb.required_node("Role", &self.role);
        check_identifier_kind(&mut vb, "Hpii", self.hpii.as_ref(), HealthcareIdentifierKind::HpiI);
        vb.optional_node("Organisation", &self.organisation);
        vb.sequence("Communication", &self.communication);
        vb.required("AuthoredTime", &self.authored_time);
    }
}

/// The organisation responsible for maintaining the document.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Custodian {
    pub organisation: Option<Organisation>,
}

impl Validate for Custodian {
    fn validate(&self, path: &str, messages: &mut ValidationMessages) {
        let mut vb = ValidationBuilder::new(path, messages);
        vb.required_node("Organisation", &self.organisation);
    }
}

/// The provider who attests to the document's content.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LegalAuthenticator {
    pub name: Option<PersonName>,
    pub hpii: Option<HealthcareIdentifier>,
    pub organisation: Option<Organisation>,
    pub authenticated_time: Option<DateTime<Utc>>,
}

impl Validate for LegalAuthenticator {
    fn validate(&self, path: &str, messages: &mut ValidationMessages) {
        let mut vb = ValidationBuilder::new(path, messages);
        vb.required_node("Name", &self.name);
        check_identifier_kind(&mut vb, "Hpii", self.hpii.as_ref(), HealthcareIdentifierKind::HpiI);
        vb.optional_node("Organisation", &self.organisation);
        vb.required("AuthenticatedTime", &self.authenticated_time);
    }
}

/// A person or organisation the document is addressed to.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct InformationRecipient {
    pub name: Option<PersonName>,
    pub organisation: Option<Organisation>,
    pub communication: Vec<ElectronicCommunicationDetail>,
}

impl Validate for InformationRecipient {
    fn validate(&self, path: &str, messages: &mut ValidationMessages) {
        let mut vb = ValidationBuilder::new(path, messages);
        vb.at_least_one(&[
            ("Name", self.name.is_present()),
            ("Organisation", self.organisation.is_present()),
        ]);
        vb.optional_node("Name", &self.name);
        vb.optional_node("Organisation", &self.organisation);
        vb.sequence("Communication", &self.communication);
    }
}

/// The patient the document is about.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SubjectOfCare {
    pub ihi: Option<HealthcareIdentifier>,
    pub names: Vec<PersonName>,
    pub sex: Option<Sex>,
    pub date_of_birth: Option<NaiveDate>,
    pub indigenous_status: Option<IndigenousStatus>,
    pub addresses: Vec<Address>,
    pub communication: Vec<ElectronicCommunicationDetail>,
}

impl Validate for SubjectOfCare {
    fn validate(&self, path: &str, messages: &mut ValidationMessages) {
        let mut vb = ValidationBuilder::new(path, messages);
        vb.recommended("Ihi", &self.ihi);
        check_identifier_kind(&mut vb, "Ihi", self.ihi.as_ref(), HealthcareIdentifierKind::Ihi);
        vb.required_sequence("Name", &self.names);
        vb.required("Sex", &self.sex);
        vb.required("DateOfBirth", &self.date_of_birth);
        vb.required("IndigenousStatus", &self.indigenous_status);
        vb.sequence("Address", &self.addresses);
        vb.sequence("Communication", &self.communication);
    }
}
