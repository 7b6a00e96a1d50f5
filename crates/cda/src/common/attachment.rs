use cda_codes::{MediaType, ResultStatus};
use cda_types::NonEmptyText;
use cda_validation::{Validate, ValidationBuilder, ValidationMessages};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A file packaged alongside the document, such as the rendered report PDF.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExternalData {
    pub media_type: Option<MediaType>,
    pub path: Option<NonEmptyText>,
    pub caption: Option<String>,
}

impl ExternalData {
    pub fn new(media_type: MediaType, path: NonEmptyText) -> Self {
        Self {
            media_type: Some(media_type),
            path: Some(path),
            caption: None,
        }
    }
}

impl Validate for ExternalData {
    fn validate(&self, path: &str, messages: &mut ValidationMessages) {
        let mut vb = ValidationBuilder::new(path, messages);
        vb.required("MediaType", &self.media_type);
        vb.required("Path", &self.path);
    }
}

/// Identification of the report a document was produced from.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReportDetails {
    pub report_identifier: Option<NonEmptyText>,
    pub report_name: Option<String>,
    pub report_status: Option<ResultStatus>,
    pub report_date: Option<DateTime<Utc>>,
}

impl Validate for ReportDetails {
    fn validate(&self, path: &str, messages: &mut ValidationMessages) {
        let mut vb = ValidationBuilder::new(path, messages);
        vb.required("ReportIdentifier", &self.report_identifier);
        vb.required("ReportStatus", &self.report_status);
        vb.required("ReportDate", &self.report_date);
    }
}

/// The source report attached to a result document.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RelatedDocument {
    pub attachment: Option<ExternalData>,
    pub details: Option<ReportDetails>,
}

impl Validate for RelatedDocument {
    fn validate(&self, path: &str, messages: &mut ValidationMessages) {
        let mut vb = ValidationBuilder::new(path, messages);
        vb.required_node("Attachment", &self.attachment);
        vb.required_node("Details", &self.details);
    }
}
