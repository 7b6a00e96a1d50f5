//! Medication list code sets.

use crate::systems::{HL7_ACT_STATUS, NCTIS_CHANGE_TYPE};

code_set! {
    /// Status of a medication instruction.
    pub enum MedicationStatus {
        Active => ("active", "Active", HL7_ACT_STATUS),
        Completed => ("completed", "Completed", HL7_ACT_STATUS),
        Aborted => ("aborted", "Aborted", HL7_ACT_STATUS),
        Suspended => ("suspended", "Suspended", HL7_ACT_STATUS),
        Cancelled => ("cancelled", "Cancelled", HL7_ACT_STATUS),
    }
}

code_set! {
    /// Kind of change made to a medication since it was last reviewed.
    pub enum MedicationChangeType {
        Changed => ("01", "Changed", NCTIS_CHANGE_TYPE),
        Ceased => ("02", "Ceased", NCTIS_CHANGE_TYPE),
        Prescribed => ("03", "Prescribed", NCTIS_CHANGE_TYPE),
        Unchanged => ("04", "Unchanged", NCTIS_CHANGE_TYPE),
        Suspended => ("05", "Suspended", NCTIS_CHANGE_TYPE),
    }
}
