//! The document envelope shared by every document type.
//!
//! A [`ClinicalDocument`] carries the header (identifiers, status, timestamps), the
//! [`DocumentContext`] (who wrote it, who holds it, who it is about) and a typed body. The
//! body type fixes the document type code, so a pathology report cannot be labelled as a
//! discharge summary.

use crate::common::{Author, Custodian, InformationRecipient, LegalAuthenticator, SubjectOfCare};
use crate::CdaResult;
use cda_codes::{DocumentStatus, DocumentType};
use cda_validation::{Validate, ValidationBuilder, ValidationConfig, ValidationMessages};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Root path used in validation messages for a document.
pub const DOCUMENT_ROOT: &str = "ClinicalDocument";

/// The body of a specific document type.
pub trait DocumentContent: Validate {
    fn document_type() -> DocumentType;
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DocumentContext {
    pub author: Option<Author>,
    pub custodian: Option<Custodian>,
    pub subject_of_care: Option<SubjectOfCare>,
    pub legal_authenticator: Option<LegalAuthenticator>,
    pub information_recipients: Vec<InformationRecipient>,
}

impl Validate for DocumentContext {
    fn validate(&self, path: &str, messages: &mut ValidationMessages) {
        let mut vb = ValidationBuilder::new(path, messages);
        vb.required_node("Author", &self.author);
        vb.required_node("Custodian", &self.custodian);
        vb.required_node("SubjectOfCare", &self.subject_of_care);
        vb.optional_node("LegalAuthenticator", &self.legal_authenticator);
        vb.sequence("InformationRecipient", &self.information_recipients);
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ClinicalDocument<C> {
    #[serde(default)]
    pub document_id: Option<Uuid>,
    #[serde(default)]
    pub set_id: Option<Uuid>,
    #[serde(default)]
    pub version: Option<u32>,
    #[serde(default)]
    pub status: Option<DocumentStatus>,
    #[serde(default)]
    pub creation_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub context: Option<DocumentContext>,
    pub content: Option<C>,
}

impl<C: DocumentContent> ClinicalDocument<C> {
    /// Starts a first version of a new document around `content`.
    ///
    /// The document id and set id are freshly generated and the creation time is now; the
    /// caller still supplies the status and context.
    pub fn new(content: C) -> Self {
        let document_id = Uuid::new_v4();
        Self {
            document_id: Some(document_id),
            set_id: Some(document_id),
            version: Some(1),
            status: None,
            creation_time: Some(Utc::now()),
            context: None,
            content: Some(content),
        }
    }

    /// Starts the next version of this document: same set id, new document id.
    pub fn next_version(&self) -> Self
    where
        C: Clone,
    {
        Self {
            document_id: Some(Uuid::new_v4()),
            version: Some(self.version.map_or(1, |version| version.saturating_add(1))),
            creation_time: Some(Utc::now()),
            ..self.clone()
        }
    }

    pub fn document_type(&self) -> DocumentType {
        C::document_type()
    }

    /// Collects every validation message for the document, rooted at [`DOCUMENT_ROOT`].
    pub fn validate_document(&self, config: &ValidationConfig) -> ValidationMessages {
        cda_validation::validate_root(self, DOCUMENT_ROOT, config)
    }

    /// Validates the document and fails if any message would block publication.
    ///
    /// # Errors
    ///
    /// Returns [`crate::CdaError::Validation`] carrying every reported message.
    pub fn ensure_valid(&self, config: &ValidationConfig) -> CdaResult<()> {
        cda_validation::ensure_valid(self, DOCUMENT_ROOT, config)?;
        Ok(())
    }
}

impl<C: DocumentContent> Validate for ClinicalDocument<C> {
    fn validate(&self, path: &str, messages: &mut ValidationMessages) {
        let mut vb = ValidationBuilder::new(path, messages);
        vb.required("DocumentId", &self.document_id);
        if self.version == Some(0) {
            vb.invalid("Version", "must be 1 or greater");
        }
        vb.required("Status", &self.status);
        vb.required("CreationTime", &self.creation_time);
        vb.required_node("Context", &self.context);
        vb.required_node("Content", &self.content);
    }
}
