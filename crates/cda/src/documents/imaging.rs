use crate::common::{AnatomicalSite, CodableText, ExternalData, RelatedDocument, ResultGroup};
use crate::document::DocumentContent;
use cda_codes::{DiagnosticService, DocumentType, ResultStatus};
use cda_types::NonEmptyText;
use cda_validation::{Validate, ValidationBuilder, ValidationMessages};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Body of a diagnostic imaging report.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DiagnosticImagingReportContent {
    pub related_document: Option<RelatedDocument>,
    pub examination_results: Vec<ImagingExaminationResult>,
    pub custom_narrative: Option<String>,
}

impl DocumentContent for DiagnosticImagingReportContent {
    fn document_type() -> DocumentType {
        DocumentType::DiagnosticImagingReport
    }
}

impl Validate for DiagnosticImagingReportContent {
    fn validate(&self, path: &str, messages: &mut ValidationMessages) {
        let mut vb = ValidationBuilder::new(path, messages);
        vb.required_node("RelatedDocument", &self.related_document);
        vb.required_sequence("ImagingExaminationResult", &self.examination_results);
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ImagingExaminationResult {
    pub examination_result_name: Option<CodableText>,
    pub modality: Option<DiagnosticService>,
    pub anatomical_sites: Vec<AnatomicalSite>,
    pub result_status: Option<ResultStatus>,
    pub observation_time: Option<DateTime<Utc>>,
    pub clinical_information: Option<String>,
    pub findings: Option<String>,
    pub result_groups: Vec<ResultGroup>,
    pub images: Vec<ImageDetails>,
}

impl Validate for ImagingExaminationResult {
    fn validate(&self, path: &str, messages: &mut ValidationMessages) {
        let mut vb = ValidationBuilder::new(path, messages);
        vb.required_node("ExaminationResultName", &self.examination_result_name);
        if vb.required("Modality", &self.modality) {
            if let Some(modality) = self.modality.filter(|m| !m.is_imaging()) {
                vb.invalid(
                    "Modality",
                    format!("must be an imaging modality, got {modality}"),
                );
            }
        }
        vb.sequence("AnatomicalSite", &self.anatomical_sites);
        vb.required("ResultStatus", &self.result_status);
        vb.required("ObservationTime", &self.observation_time);
        vb.sequence("ResultGroup", &self.result_groups);
        vb.sequence("ImageDetails", &self.images);
    }
}

/// A key image referenced by the report.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ImageDetails {
    pub identifier: Option<NonEmptyText>,
    pub series_identifier: Option<String>,
    pub view_name: Option<String>,
    pub image: Option<ExternalData>,
}

impl Validate for ImageDetails {
    fn validate(&self, path: &str, messages: &mut ValidationMessages) {
        let mut vb = ValidationBuilder::new(path, messages);
        vb.recommended("Identifier", &self.identifier);
        vb.required_node("Image", &self.image);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support;
    use crate::ClinicalDocument;
    use cda_codes::{DocumentStatus, MediaType};
    use cda_validation::{Severity, ValidationConfig};

    fn examination() -> ImagingExaminationResult {
        ImagingExaminationResult {
            examination_result_name: Some(test_support::coded("XR chest")),
            modality: Some(DiagnosticService::Radiology),
            anatomical_sites: vec![AnatomicalSite {
                description: Some(test_support::text("Chest")),
                ..AnatomicalSite::default()
            }],
            result_status: Some(ResultStatus::Final),
            observation_time: Some(test_support::time()),
            findings: Some("Lungs are clear.".into()),
            images: vec![ImageDetails {
                identifier: Some(test_support::text("1.2.3.4.5")),
                image: Some(ExternalData::new(
                    MediaType::Jpeg,
                    test_support::text("images/chest.jpg"),
                )),
                ..ImageDetails::default()
            }],
            ..ImagingExaminationResult::default()
        }
    }

    fn report() -> ClinicalDocument<DiagnosticImagingReportContent> {
        let mut document = ClinicalDocument::new(DiagnosticImagingReportContent {
            related_document: Some(test_support::related_document()),
            examination_results: vec![examination()],
            custom_narrative: None,
        });
        document.status = Some(DocumentStatus::Final);
        document.context = Some(test_support::context());
        document
    }

    #[test]
    fn complete_report_is_valid() {
        let messages = report().validate_document(&ValidationConfig::default());
        assert!(messages.is_empty(), "unexpected messages: {messages}");
    }

    #[test]
    fn pathology_discipline_is_not_a_modality() {
        let mut document = report();
        if let Some(content) = document.content.as_mut() {
            content.examination_results[0].modality = Some(DiagnosticService::Chemistry);
        }
        let messages = document.validate_document(&ValidationConfig::default());
        assert_eq!(
            messages.paths(),
            vec!["ClinicalDocument/Content/ImagingExaminationResult[0]/Modality"]
        );
    }

    #[test]
    fn image_without_identifier_warns() {
        let mut document = report();
        if let Some(content) = document.content.as_mut() {
            content.examination_results[0].images[0].identifier = None;
        }
        let messages = document.validate_document(&ValidationConfig::default());
        assert_eq!(messages.len(), 1);
        let message = &messages.as_slice()[0];
        assert_eq!(message.severity, Severity::Warning);
        assert_eq!(
            message.path,
            "ClinicalDocument/Content/ImagingExaminationResult[0]/ImageDetails[0]/Identifier"
        );
    }

    #[test]
    fn missing_content_fields_are_reported_together() {
        let mut messages = ValidationMessages::new();
        DiagnosticImagingReportContent::default().validate("Content", &mut messages);
        assert_eq!(
            messages.paths(),
            vec!["Content/RelatedDocument", "Content/ImagingExaminationResult"]
        );
    }
}
