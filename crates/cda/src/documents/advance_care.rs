use crate::common::{Author, CodableText, ExternalData};
use crate::document::DocumentContent;
use cda_codes::DocumentType;
use cda_validation::{Validate, ValidationBuilder, ValidationMessages};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Body of an advance care information document: a pointer to an advance care directive
/// held elsewhere, plus who wrote it.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AdvanceCareInformationContent {
    pub document_provenance: Option<DocumentProvenance>,
    pub custom_narrative: Option<String>,
}

impl DocumentContent for AdvanceCareInformationContent {
    fn document_type() -> DocumentType {
        DocumentType::AdvanceCareInformation
    }
}

impl Validate for AdvanceCareInformationContent {
    fn validate(&self, path: &str, messages: &mut ValidationMessages) {
        let mut vb = ValidationBuilder::new(path, messages);
        vb.required_node("DocumentProvenance", &self.document_provenance);
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DocumentProvenance {
    pub document_type: Option<CodableText>,
    pub author: Option<Author>,
    pub document_time: Option<DateTime<Utc>>,
    pub document_link: Option<ExternalData>,
}

impl Validate for DocumentProvenance {
    fn validate(&self, path: &str, messages: &mut ValidationMessages) {
        let mut vb = ValidationBuilder::new(path, messages);
        vb.required_node("DocumentType", &self.document_type);
        vb.required_node("Author", &self.author);
        vb.recommended("DocumentTime", &self.document_time);
        vb.required_node("DocumentLink", &self.document_link);
    }
}
