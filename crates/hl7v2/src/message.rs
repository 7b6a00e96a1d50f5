//! The ORU^R01 unsolicited observation result message.
//!
//! Segment groups follow the message structure: one [`PatientResult`] per patient, each with
//! one or more [`OrderObservation`] groups holding the OBR, its OBX values and notes.

use crate::segments::{
    CommonOrder, MessageHeader, Note, Observation, ObservationRequest, PatientIdentification,
};
use crate::Hl7Result;
use cda_validation::{Validate, ValidationBuilder, ValidationConfig, ValidationMessages};
use serde::{Deserialize, Serialize};

/// Root path used in validation messages for an ORU^R01 message.
pub const MESSAGE_ROOT: &str = "ORU_R01";

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OruMessage {
    pub msh: Option<MessageHeader>,
    pub patient_results: Vec<PatientResult>,
}

impl OruMessage {
    /// Every observation in the message, in message order.
    pub fn observations(&self) -> impl Iterator<Item = &Observation> {
        self.patient_results
            .iter()
            .flat_map(|result| &result.order_observations)
            .flat_map(|order| &order.observations)
    }

    /// Collects every validation message, rooted at [`MESSAGE_ROOT`].
    pub fn validate_message(&self, config: &ValidationConfig) -> ValidationMessages {
        cda_validation::validate_root(self, MESSAGE_ROOT, config)
    }

    /// Validates the message and fails if any message would block delivery.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Hl7Error::Validation`] carrying every reported message.
    pub fn ensure_valid(&self, config: &ValidationConfig) -> Hl7Result<()> {
        cda_validation::ensure_valid(self, MESSAGE_ROOT, config)?;
        Ok(())
    }
}

impl Validate for OruMessage {
    fn validate(&self, path: &str, messages: &mut ValidationMessages) {
        let mut vb = ValidationBuilder::new(path, messages);
        vb.required_node("MSH", &self.msh);
        if let Some(message_type) = self.msh.as_ref().and_then(|msh| msh.message_type.as_ref()) {
            if message_type.message_code.is_some()
                && message_type.trigger_event.is_some()
                && !message_type.is("ORU", "R01")
            {
                vb.invalid("MSH/MessageType", format!("must be ORU^R01, got {message_type}"));
            }
        }
        vb.required_sequence("PatientResult", &self.patient_results);
    }
}

/// The patient group: PID plus the orders reported for that patient.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PatientResult {
    pub pid: Option<PatientIdentification>,
    pub order_observations: Vec<OrderObservation>,
}

impl Validate for PatientResult {
    fn validate(&self, path: &str, messages: &mut ValidationMessages) {
        let mut vb = ValidationBuilder::new(path, messages);
        vb.required_node("PID", &self.pid);
        vb.required_sequence("OrderObservation", &self.order_observations);
    }
}

/// The order group: optional ORC, the OBR and its observations and notes.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OrderObservation {
    pub orc: Option<CommonOrder>,
    pub obr: Option<ObservationRequest>,
    pub notes: Vec<Note>,
    pub observations: Vec<Observation>,
}

impl Validate for OrderObservation {
    fn validate(&self, path: &str, messages: &mut ValidationMessages) {
        let mut vb = ValidationBuilder::new(path, messages);
        vb.optional_node("ORC", &self.orc);
        vb.required_node("OBR", &self.obr);
        vb.sequence("NTE", &self.notes);

        // OBX-1 numbers observations from 1 within the group.
        for (index, observation) in self.observations.iter().enumerate() {
            let expected = index + 1;
            if let Some(set_id) = observation.set_id.filter(|&id| id as usize != expected) {
                vb.invalid(
                    &format!("OBX[{index}]/SetId"),
                    format!("must be {expected}, got {set_id}"),
                );
            }
            vb.nested(&format!("OBX[{index}]"), observation);
        }
    }
}
