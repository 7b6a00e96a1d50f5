//! Segments of an ORU^R01 message.

use crate::datatypes::{
    CodedElement, EntityIdentifier, ExtendedId, ExtendedPersonName, HierarchicDesignator,
    MessageType,
};
use cda_codes::{
    AbnormalFlag, AdministrativeSex, DiagnosticService, Hl7ResultStatus, ProcessingId, ValueType,
};
use cda_types::NonEmptyText;
use cda_validation::{Validate, ValidationBuilder, ValidationMessages};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// MSH: message header.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MessageHeader {
    pub sending_application: Option<HierarchicDesignator>,
    pub sending_facility: Option<HierarchicDesignator>,
    pub receiving_application: Option<HierarchicDesignator>,
    pub receiving_facility: Option<HierarchicDesignator>,
    pub date_time_of_message: Option<DateTime<Utc>>,
    pub message_type: Option<MessageType>,
    pub message_control_id: Option<NonEmptyText>,
    pub processing_id: Option<ProcessingId>,
    pub version_id: Option<NonEmptyText>,
}

impl Validate for MessageHeader {
    fn validate(&self, path: &str, messages: &mut ValidationMessages) {
        let mut vb = ValidationBuilder::new(path, messages);
        vb.required_node("SendingApplication", &self.sending_application);
        vb.required_node("SendingFacility", &self.sending_facility);
        vb.optional_node("ReceivingApplication", &self.receiving_application);
        vb.optional_node("ReceivingFacility", &self.receiving_facility);
        vb.required("DateTimeOfMessage", &self.date_time_of_message);
        vb.required_node("MessageType", &self.message_type);
        vb.required("MessageControlId", &self.message_control_id);
        vb.required("ProcessingId", &self.processing_id);
        vb.required("VersionId", &self.version_id);
    }
}

/// PID: patient identification.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PatientIdentification {
    pub set_id: Option<u32>,
    pub patient_identifiers: Vec<ExtendedId>,
    pub patient_names: Vec<ExtendedPersonName>,
    pub date_of_birth: Option<NaiveDate>,
    pub administrative_sex: Option<AdministrativeSex>,
}

impl Validate for PatientIdentification {
    fn validate(&self, path: &str, messages: &mut ValidationMessages) {
        let mut vb = ValidationBuilder::new(path, messages);
        vb.required_sequence("PatientIdentifierList", &self.patient_identifiers);
        vb.required_sequence("PatientName", &self.patient_names);
        vb.recommended("DateOfBirth", &self.date_of_birth);
        vb.required("AdministrativeSex", &self.administrative_sex);
    }
}

/// ORC: common order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CommonOrder {
    pub order_control: Option<NonEmptyText>,
    pub placer_order_number: Option<EntityIdentifier>,
    pub filler_order_number: Option<EntityIdentifier>,
    pub ordering_provider: Option<ExtendedPersonName>,
}

impl Validate for CommonOrder {
    fn validate(&self, path: &str, messages: &mut ValidationMessages) {
        let mut vb = ValidationBuilder::new(path, messages);
        vb.required("OrderControl", &self.order_control);
        vb.optional_node("PlacerOrderNumber", &self.placer_order_number);
        vb.optional_node("FillerOrderNumber", &self.filler_order_number);
        vb.optional_node("OrderingProvider", &self.ordering_provider);
    }
}

/// OBR: observation request, the header of one reported test.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ObservationRequest {
    pub set_id: Option<u32>,
    pub placer_order_number: Option<EntityIdentifier>,
    pub filler_order_number: Option<EntityIdentifier>,
    pub universal_service_id: Option<CodedElement>,
    pub observation_date_time: Option<DateTime<Utc>>,
    pub results_report_time: Option<DateTime<Utc>>,
    pub diagnostic_service: Option<DiagnosticService>,
    pub result_status: Option<Hl7ResultStatus>,
}

impl Validate for ObservationRequest {
    fn validate(&self, path: &str, messages: &mut ValidationMessages) {
        let mut vb = ValidationBuilder::new(path, messages);
        vb.optional_node("PlacerOrderNumber", &self.placer_order_number);
        vb.required_node("FillerOrderNumber", &self.filler_order_number);
        vb.required_node("UniversalServiceId", &self.universal_service_id);
        vb.required("ObservationDateTime", &self.observation_date_time);
        vb.recommended("ResultsReportTime", &self.results_report_time);
        vb.required("DiagnosticService", &self.diagnostic_service);
        vb.required("ResultStatus", &self.result_status);
    }
}

/// OBX: a single observation value.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Observation {
    pub set_id: Option<u32>,
    pub value_type: Option<ValueType>,
    pub observation_identifier: Option<CodedElement>,
    pub observation_sub_id: Option<String>,
    pub observation_value: Vec<String>,
    pub units: Option<CodedElement>,
    pub references_range: Option<String>,
    pub abnormal_flags: Vec<AbnormalFlag>,
    pub result_status: Option<Hl7ResultStatus>,
    pub observation_time: Option<DateTime<Utc>>,
}

impl Observation {
    /// Whether any abnormal flag marks this value as outside the normal range.
    pub fn is_abnormal(&self) -> bool {
        self.abnormal_flags.iter().any(|flag| flag.is_abnormal())
    }
}

impl Validate for Observation {
    fn validate(&self, path: &str, messages: &mut ValidationMessages) {
        let mut vb = ValidationBuilder::new(path, messages);
        vb.required("ValueType", &self.value_type);
        vb.required_node("ObservationIdentifier", &self.observation_identifier);

        // A cancelled observation is reported without a value.
        if self.result_status != Some(Hl7ResultStatus::Cancelled) {
            vb.required("ObservationValue", &self.observation_value);
        }
        if self.value_type == Some(ValueType::Numeric) {
            for (index, value) in self.observation_value.iter().enumerate() {
                if !is_numeric(value) {
                    vb.invalid(
                        &format!("ObservationValue[{index}]"),
                        format!("must be numeric for value type NM, got '{value}'"),
                    );
                }
            }
            vb.recommended("Units", &self.units);
        }
        vb.optional_node("Units", &self.units);
        vb.required("ResultStatus", &self.result_status);
    }
}

/// NM: an optional leading sign, ASCII digits and at most one decimal point.
fn is_numeric(value: &str) -> bool {
    let digits = value.trim();
    let digits = digits.strip_prefix(['+', '-']).unwrap_or(digits);
    let (whole, fraction) = digits.split_once('.').unwrap_or((digits, ""));
    let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
    !(whole.is_empty() && fraction.is_empty()) && all_digits(whole) && all_digits(fraction)
}

/// NTE: free-text notes and comments.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Note {
    pub set_id: Option<u32>,
    pub source_of_comment: Option<String>,
    pub comment: Vec<String>,
}

impl Validate for Note {
    fn validate(&self, path: &str, messages: &mut ValidationMessages) {
        let mut vb = ValidationBuilder::new(path, messages);
        vb.required("Comment", &self.comment);
    }
}
