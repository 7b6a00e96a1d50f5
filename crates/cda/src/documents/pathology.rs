use crate::common::{CodableText, RelatedDocument, ResultGroup, SpecimenDetail};
use crate::document::DocumentContent;
use cda_codes::{DiagnosticService, DocumentType, ResultStatus};
use cda_validation::{Validate, ValidationBuilder, ValidationMessages};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Body of a pathology result report.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PathologyResultReportContent {
    pub related_document: Option<RelatedDocument>,
    pub test_results: Vec<PathologyTestResult>,
    pub custom_narrative: Option<String>,
}

impl DocumentContent for PathologyResultReportContent {
    fn document_type() -> DocumentType {
        DocumentType::PathologyResultReport
    }
}

impl Validate for PathologyResultReportContent {
    fn validate(&self, path: &str, messages: &mut ValidationMessages) {
        let mut vb = ValidationBuilder::new(path, messages);
        vb.required_node("RelatedDocument", &self.related_document);
        vb.required_sequence("PathologyTestResult", &self.test_results);
    }
}

/// One requested test and everything reported for it.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PathologyTestResult {
    pub test_result_name: Option<CodableText>,
    pub diagnostic_service: Option<DiagnosticService>,
    pub overall_result_status: Option<ResultStatus>,
    pub observation_time: Option<DateTime<Utc>>,
    pub specimens: Vec<SpecimenDetail>,
    pub result_groups: Vec<ResultGroup>,
    pub pathological_diagnoses: Vec<CodableText>,
    pub conclusion: Option<String>,
    pub comments: Vec<String>,
}

impl Validate for PathologyTestResult {
    fn validate(&self, path: &str, messages: &mut ValidationMessages) {
        let mut vb = ValidationBuilder::new(path, messages);
        vb.required_node("TestResultName", &self.test_result_name);
        if vb.required("DiagnosticService", &self.diagnostic_service) {
            if let Some(service) = self.diagnostic_service.filter(|s| s.is_imaging()) {
                vb.invalid(
                    "DiagnosticService",
                    format!("must be a pathology discipline, got {service}"),
                );
            }
        }
        vb.required("OverallResultStatus", &self.overall_result_status);
        vb.required("ObservationTime", &self.observation_time);
        vb.sequence("Specimen", &self.specimens);
        vb.sequence("ResultGroup", &self.result_groups);
        vb.sequence("PathologicalDiagnosis", &self.pathological_diagnoses);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support;
    use crate::ClinicalDocument;
    use cda_codes::DocumentStatus;
    use cda_validation::{MessageCode, ValidationConfig};

    fn test_result() -> PathologyTestResult {
        PathologyTestResult {
            test_result_name: Some(test_support::coded("Full blood count")),
            diagnostic_service: Some(DiagnosticService::Haematology),
            overall_result_status: Some(ResultStatus::Final),
            observation_time: Some(test_support::time()),
            result_groups: vec![test_support::result_group()],
            conclusion: Some("Normal blood picture.".into()),
            ..PathologyTestResult::default()
        }
    }

    fn report() -> ClinicalDocument<PathologyResultReportContent> {
        let mut document = ClinicalDocument::new(PathologyResultReportContent {
            related_document: Some(test_support::related_document()),
            test_results: vec![test_result()],
            custom_narrative: None,
        });
        document.status = Some(DocumentStatus::Final);
        document.context = Some(test_support::context());
        document
    }

    #[test]
    fn complete_report_is_valid() {
        let document = report();
        assert!(document
            .validate_document(&ValidationConfig::default())
            .is_empty());
        assert_eq!(document.document_type(), DocumentType::PathologyResultReport);
    }

    #[test]
    fn report_needs_at_least_one_test_result() {
        let content = PathologyResultReportContent {
            related_document: Some(test_support::related_document()),
            ..PathologyResultReportContent::default()
        };
        let mut messages = ValidationMessages::new();
        content.validate("Content", &mut messages);
        assert_eq!(messages.paths(), vec!["Content/PathologyTestResult"]);
        assert_eq!(
            messages.as_slice()[0].code,
            MessageCode::MissingRequiredField
        );
    }

    #[test]
    fn imaging_modality_is_not_a_pathology_discipline() {
        let mut document = report();
        if let Some(content) = document.content.as_mut() {
            content.test_results[0].diagnostic_service = Some(DiagnosticService::CtScan);
        }
        let messages = document.validate_document(&ValidationConfig::default());
        assert_eq!(
            messages.paths(),
            vec!["ClinicalDocument/Content/PathologyTestResult[0]/DiagnosticService"]
        );
        assert_eq!(
            messages.as_slice()[0].description,
            "ClinicalDocument/Content/PathologyTestResult[0]/DiagnosticService must be a pathology discipline, got CAT Scan"
        );
    }

    #[test]
    fn deeply_nested_result_path() {
        let mut document = report();
        if let Some(content) = document.content.as_mut() {
            content.test_results.push(test_result());
            content.test_results[1].result_groups[0].results[0].result_name = None;
        }
        let messages = document.validate_document(&ValidationConfig::default());
        assert_eq!(
            messages.paths(),
            vec![
                "ClinicalDocument/Content/PathologyTestResult[1]/ResultGroup[0]/IndividualResult[0]/ResultName"
            ]
        );
    }
}
