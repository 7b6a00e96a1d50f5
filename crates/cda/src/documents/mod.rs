//! Bodies of the supported document types.

mod advance_care;
mod imaging;
mod medication_list;
mod pathology;

pub use advance_care::{AdvanceCareInformationContent, DocumentProvenance};
pub use imaging::{DiagnosticImagingReportContent, ImageDetails, ImagingExaminationResult};
pub use medication_list::{MedicationChange, MedicationItem, MedicationListContent};
pub use pathology::{PathologyResultReportContent, PathologyTestResult};
