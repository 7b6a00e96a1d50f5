//! HL7 v2 table code sets used by result messages.

use crate::systems::{
    HL7_ABNORMAL_FLAGS, HL7_ADMINISTRATIVE_SEX, HL7_PROCESSING_ID, HL7_RESULT_STATUS,
    HL7_VALUE_TYPE,
};

code_set! {
    /// HL7 table 0123, status of an observation request or observation.
    pub enum Hl7ResultStatus {
        OrderReceived => ("O", "Order received; specimen not yet received", HL7_RESULT_STATUS),
        Incomplete => ("I", "No results available; specimen received, procedure incomplete", HL7_RESULT_STATUS),
        Scheduled => ("S", "No results available; procedure scheduled, but not done", HL7_RESULT_STATUS),
        Partial => ("A", "Some, but not all, results available", HL7_RESULT_STATUS),
        Preliminary => ("P", "Preliminary: A verified early result is available, final results not yet obtained", HL7_RESULT_STATUS),
        Correction => ("C", "Correction to results", HL7_RESULT_STATUS),
        Unverified => ("R", "Results stored; not yet verified", HL7_RESULT_STATUS),
        Final => ("F", "Final results; results stored and verified", HL7_RESULT_STATUS),
        Cancelled => ("X", "No results available; Order canceled", HL7_RESULT_STATUS),
        NoOrder => ("Y", "No order on record for this test", HL7_RESULT_STATUS),
        NoPatient => ("Z", "No record of this patient", HL7_RESULT_STATUS),
    }
}

code_set! {
    /// HL7 table 0078, interpretation of an observation against its reference range.
    pub enum AbnormalFlag {
        Low => ("L", "Below low normal", HL7_ABNORMAL_FLAGS),
        High => ("H", "Above high normal", HL7_ABNORMAL_FLAGS),
        CriticallyLow => ("LL", "Below lower panic limits", HL7_ABNORMAL_FLAGS),
        CriticallyHigh => ("HH", "Above upper panic limits", HL7_ABNORMAL_FLAGS),
        Normal => ("N", "Normal", HL7_ABNORMAL_FLAGS),
        Abnormal => ("A", "Abnormal", HL7_ABNORMAL_FLAGS),
        VeryAbnormal => ("AA", "Very abnormal", HL7_ABNORMAL_FLAGS),
    }
}

code_set! {
    /// HL7 table 0125, data type of an observation value.
    pub enum ValueType {
        Numeric => ("NM", "Numeric", HL7_VALUE_TYPE),
        StringData => ("ST", "String Data", HL7_VALUE_TYPE),
        TextData => ("TX", "Text Data", HL7_VALUE_TYPE),
        FormattedText => ("FT", "Formatted Text", HL7_VALUE_TYPE),
        CodedEntry => ("CE", "Coded Entry", HL7_VALUE_TYPE),
        EncapsulatedData => ("ED", "Encapsulated Data", HL7_VALUE_TYPE),
        StructuredNumeric => ("SN", "Structured Numeric", HL7_VALUE_TYPE),
        Date => ("DT", "Date", HL7_VALUE_TYPE),
        TimeStamp => ("TS", "Time Stamp (Date & Time)", HL7_VALUE_TYPE),
    }
}

code_set! {
    /// HL7 table 0103, processing mode of a message.
    pub enum ProcessingId {
        Debugging => ("D", "Debugging", HL7_PROCESSING_ID),
        Production => ("P", "Production", HL7_PROCESSING_ID),
        Training => ("T", "Training", HL7_PROCESSING_ID),
    }
}

code_set! {
    /// HL7 table 0001, administrative sex of a patient.
    pub enum AdministrativeSex {
        Female => ("F", "Female", HL7_ADMINISTRATIVE_SEX),
        Male => ("M", "Male", HL7_ADMINISTRATIVE_SEX),
        Other => ("O", "Other", HL7_ADMINISTRATIVE_SEX),
        Unknown => ("U", "Unknown", HL7_ADMINISTRATIVE_SEX),
        Ambiguous => ("A", "Ambiguous", HL7_ADMINISTRATIVE_SEX),
        NotApplicable => ("N", "Not applicable", HL7_ADMINISTRATIVE_SEX),
    }
}

impl AbnormalFlag {
    /// Whether the flag marks a result outside its normal range.
    pub fn is_abnormal(self) -> bool {
        !matches!(self, Self::Normal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CodeSet;

    #[test]
    fn two_letter_codes_resolve() {
        assert_eq!(AbnormalFlag::from_code("HH"), Some(AbnormalFlag::CriticallyHigh));
        assert_eq!(ValueType::from_code("NM"), Some(ValueType::Numeric));
        assert!(AbnormalFlag::Low.is_abnormal());
        assert!(!AbnormalFlag::Normal.is_abnormal());
    }

    #[test]
    fn result_status_final_is_f() {
        assert_eq!(Hl7ResultStatus::Final.code(), "F");
        assert_eq!(Hl7ResultStatus::from_name("Correction"), Some(Hl7ResultStatus::Correction));
    }
}
