use crate::common::CodableText;
use crate::document::DocumentContent;
use cda_codes::{DocumentType, MedicationChangeType, MedicationStatus};
use cda_types::NonEmptyText;
use cda_validation::{Presence, Validate, ValidationBuilder, ValidationMessages};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Body of a pharmacist shared medicines list.
///
/// A list either names the medicines the patient takes or states why there are none.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MedicationListContent {
    pub medications: Vec<MedicationItem>,
    pub exclusion_statement: Option<NonEmptyText>,
    pub custom_narrative: Option<String>,
}

impl DocumentContent for MedicationListContent {
    fn document_type() -> DocumentType {
        DocumentType::PharmacistSharedMedicinesList
    }
}

impl Validate for MedicationListContent {
    fn validate(&self, path: &str, messages: &mut ValidationMessages) {
        let mut vb = ValidationBuilder::new(path, messages);
        vb.choice_check(&[
            ("Medication", self.medications.is_present()),
            ("ExclusionStatement", self.exclusion_statement.is_present()),
        ]);
        vb.sequence("Medication", &self.medications);
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MedicationItem {
    pub medicine: Option<CodableText>,
    pub directions: Option<NonEmptyText>,
    pub status: Option<MedicationStatus>,
    pub clinical_indication: Option<String>,
    pub change: Option<MedicationChange>,
    pub comment: Option<String>,
}

impl Validate for MedicationItem {
    fn validate(&self, path: &str, messages: &mut ValidationMessages) {
        let mut vb = ValidationBuilder::new(path, messages);
        vb.required_node("Medicine", &self.medicine);
        vb.required("Directions", &self.directions);
        vb.required("Status", &self.status);
        vb.optional_node("Change", &self.change);
    }
}

/// A change made to a medicine since the previous list.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MedicationChange {
    pub change_type: Option<MedicationChangeType>,
    pub reason: Option<String>,
    pub changed_on: Option<NaiveDate>,
}

impl Validate for MedicationChange {
    fn validate(&self, path: &str, messages: &mut ValidationMessages) {
        let mut vb = ValidationBuilder::new(path, messages);
        vb.required("ChangeType", &self.change_type);
        if self.change_type == Some(MedicationChangeType::Ceased) {
            vb.recommended("Reason", self.reason.as_deref().unwrap_or_default());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support;
    use cda_validation::{MessageCode, Severity};

    fn item() -> MedicationItem {
        MedicationItem {
            medicine: Some(test_support::coded("Metformin 500 mg tablet")),
            directions: Some(test_support::text("One tablet twice daily")),
            status: Some(MedicationStatus::Active),
            ..MedicationItem::default()
        }
    }

    fn messages_for(content: &MedicationListContent) -> ValidationMessages {
        let mut messages = ValidationMessages::new();
        content.validate("Content", &mut messages);
        messages
    }

    #[test]
    fn list_with_medications_is_valid() {
        let content = MedicationListContent {
            medications: vec![item()],
            ..MedicationListContent::default()
        };
        assert!(messages_for(&content).is_empty());
    }

    #[test]
    fn exclusion_statement_alone_is_valid() {
        let content = MedicationListContent {
            exclusion_statement: Some(test_support::text("No known medicines")),
            ..MedicationListContent::default()
        };
        assert!(messages_for(&content).is_empty());
    }

    #[test]
    fn medications_and_exclusion_are_exclusive() {
        let content = MedicationListContent {
            medications: vec![item()],
            exclusion_statement: Some(test_support::text("No known medicines")),
            ..MedicationListContent::default()
        };
        let messages = messages_for(&content);
        assert_eq!(messages.len(), 1);
        assert_eq!(messages.as_slice()[0].code, MessageCode::InvalidChoice);
        assert_eq!(
            messages.as_slice()[0].description,
            "Content must have exactly one of Medication, ExclusionStatement, found 2"
        );
    }

    #[test]
    fn empty_list_needs_medications_or_exclusion() {
        let messages = messages_for(&MedicationListContent::default());
        assert_eq!(messages.paths(), vec!["Content"]);
    }

    #[test]
    fn item_fields_are_indexed() {
        let content = MedicationListContent {
            medications: vec![item(), MedicationItem::default()],
            ..MedicationListContent::default()
        };
        assert_eq!(
            messages_for(&content).paths(),
            vec![
                "Content/Medication[1]/Medicine",
                "Content/Medication[1]/Directions",
                "Content/Medication[1]/Status",
            ]
        );
    }

    #[test]
    fn ceased_medicine_without_reason_warns() {
        let mut ceased = item();
        ceased.status = Some(MedicationStatus::Completed);
        ceased.change = Some(MedicationChange {
            change_type: Some(MedicationChangeType::Ceased),
            ..MedicationChange::default()
        });
        let content = MedicationListContent {
            medications: vec![ceased],
            ..MedicationListContent::default()
        };
        let messages = messages_for(&content);
        assert_eq!(messages.paths(), vec!["Content/Medication[0]/Change/Reason"]);
        assert_eq!(messages.as_slice()[0].severity, Severity::Warning);
    }

    #[test]
    fn document_type_is_shared_medicines_list() {
        assert_eq!(
            MedicationListContent::document_type(),
            DocumentType::PharmacistSharedMedicinesList
        );
    }
}
