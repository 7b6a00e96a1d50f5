//! Code sets describing CDA documents and the results they carry.

use crate::systems::{
    HL7_DIAGNOSTIC_SERVICE, HL7_MEDIA_TYPE, LOINC, NCTIS_DATA_COMPONENTS, NCTIS_DOCUMENT_STATUS,
    NCTIS_RESULT_STATUS,
};

code_set! {
    /// Type of a clinical document.
    pub enum DocumentType {
        PathologyResultReport => ("100.32001", "Pathology Report", NCTIS_DATA_COMPONENTS),
        DiagnosticImagingReport => ("100.16957", "Diagnostic Imaging Report", NCTIS_DATA_COMPONENTS),
        AdvanceCareInformation => ("100.16975", "Advance Care Information", NCTIS_DATA_COMPONENTS),
        PharmacistSharedMedicinesList => ("100.16765", "Pharmacist Shared Medicines List", NCTIS_DATA_COMPONENTS),
        DischargeSummary => ("18842-5", "Discharge Summary", LOINC),
    }
}

code_set! {
    /// Lifecycle status of a document instance.
    pub enum DocumentStatus {
        Interim => ("I", "Interim", NCTIS_DOCUMENT_STATUS),
        Final => ("F", "Final", NCTIS_DOCUMENT_STATUS),
        Withdrawn => ("W", "Withdrawn", NCTIS_DOCUMENT_STATUS),
    }
}

code_set! {
    /// Status of a pathology or imaging result.
    pub enum ResultStatus {
        Registered => ("1", "Registered", NCTIS_RESULT_STATUS),
        Interim => ("2", "Interim", NCTIS_RESULT_STATUS),
        Final => ("3", "Final", NCTIS_RESULT_STATUS),
        Amended => ("4", "Amended", NCTIS_RESULT_STATUS),
        CancelledAborted => ("5", "Cancelled/Aborted", NCTIS_RESULT_STATUS),
    }
}

code_set! {
    /// Diagnostic service (pathology discipline or imaging modality) producing a result.
    pub enum DiagnosticService {
        Chemistry => ("CH", "Chemistry", HL7_DIAGNOSTIC_SERVICE),
        Haematology => ("HM", "Hematology", HL7_DIAGNOSTIC_SERVICE),
        Microbiology => ("MB", "Microbiology", HL7_DIAGNOSTIC_SERVICE),
        Cytopathology => ("CP", "Cytopathology", HL7_DIAGNOSTIC_SERVICE),
        SurgicalPathology => ("SP", "Surgical Pathology", HL7_DIAGNOSTIC_SERVICE),
        Immunology => ("IMM", "Immunology", HL7_DIAGNOSTIC_SERVICE),
        Genetics => ("GE", "Genetics", HL7_DIAGNOSTIC_SERVICE),
        Serology => ("SR", "Serology", HL7_DIAGNOSTIC_SERVICE),
        BloodGases => ("BG", "Blood Gases", HL7_DIAGNOSTIC_SERVICE),
        Radiology => ("RAD", "Radiology", HL7_DIAGNOSTIC_SERVICE),
        Ultrasound => ("US", "Ultrasound", HL7_DIAGNOSTIC_SERVICE),
        CtScan => ("CT", "CAT Scan", HL7_DIAGNOSTIC_SERVICE),
        MagneticResonance => ("NMR", "Nuclear Magnetic Resonance", HL7_DIAGNOSTIC_SERVICE),
        NuclearMedicine => ("NMS", "Nuclear Medicine Scan", HL7_DIAGNOSTIC_SERVICE),
    }
}

impl DiagnosticService {
    /// Whether this service is an imaging modality rather than a pathology discipline.
    pub fn is_imaging(self) -> bool {
        matches!(
            self,
            Self::Radiology
                | Self::Ultrasound
                | Self::CtScan
                | Self::MagneticResonance
                | Self::NuclearMedicine
        )
    }
}

code_set! {
    /// MIME type of attached or referenced data.
    pub enum MediaType {
        Pdf => ("application/pdf", "PDF", HL7_MEDIA_TYPE),
        Jpeg => ("image/jpeg", "JPEG Image", HL7_MEDIA_TYPE),
        Png => ("image/png", "PNG Image", HL7_MEDIA_TYPE),
        Tiff => ("image/tiff", "TIFF Image", HL7_MEDIA_TYPE),
        PlainText => ("text/plain", "Plain Text", HL7_MEDIA_TYPE),
        Html => ("text/html", "HTML Text", HL7_MEDIA_TYPE),
        Rtf => ("text/rtf", "RTF Text", HL7_MEDIA_TYPE),
    }
}
