//! Typed HL7 v2 ORU^R01 (unsolicited observation result) message nodes.
//!
//! Messages are built in memory segment by segment and checked with the same collect-all
//! validation as the CDA documents. Validation paths use segment identifiers, e.g.
//! `ORU_R01/PatientResult[0]/OrderObservation[1]/OBX[2]/ValueType`.
//!
//! Encoding to and parsing from pipe-delimited wire text is left to the caller's HL7 engine;
//! messages can be exchanged as YAML with [`read_message_yaml`] and [`write_message_yaml`].

pub mod datatypes;
pub mod message;
pub mod segments;

pub use datatypes::{
    CodedElement, EntityIdentifier, ExtendedId, ExtendedPersonName, HierarchicDesignator,
    MessageType,
};
pub use message::{OrderObservation, OruMessage, PatientResult, MESSAGE_ROOT};
pub use segments::{
    CommonOrder, MessageHeader, Note, Observation, ObservationRequest, PatientIdentification,
};

/// Errors returned by the `hl7v2` crate.
#[derive(Debug, thiserror::Error)]
pub enum Hl7Error {
    #[error("invalid YAML: {0}")]
    InvalidYaml(#[from] serde_yaml::Error),

    #[error("message schema mismatch at {path}: {message}")]
    SchemaMismatch { path: String, message: String },

    #[error(transparent)]
    Validation(#[from] cda_validation::ValidationError),
}

/// Type alias for Results that can fail with an [`Hl7Error`].
pub type Hl7Result<T> = Result<T, Hl7Error>;

/// Parse an ORU^R01 message from YAML text.
///
/// # Errors
///
/// Returns [`Hl7Error::SchemaMismatch`] naming the failing field (e.g.
/// `patient_results[0].pid.administrative_sex`) if the YAML does not fit the message shape.
pub fn read_message_yaml(yaml_text: &str) -> Hl7Result<OruMessage> {
    let deserializer = serde_yaml::Deserializer::from_str(yaml_text);

    serde_path_to_error::deserialize(deserializer).map_err(|err| {
        let path = err.path().to_string();
        let source = err.into_inner();
        let path = if path.is_empty() || path == "." {
            "<root>".to_string()
        } else {
            path
        };
        tracing::warn!(%path, "ORU^R01 message schema mismatch");
        Hl7Error::SchemaMismatch {
            path,
            message: source.to_string(),
        }
    })
}

/// Render a message as YAML text.
///
/// # Errors
///
/// Returns [`Hl7Error::InvalidYaml`] if serialisation fails.
pub fn write_message_yaml(message: &OruMessage) -> Hl7Result<String> {
    Ok(serde_yaml::to_string(message)?)
}
