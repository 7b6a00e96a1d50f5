//! Code systems referenced by the code sets in this crate.

use serde::Serialize;

/// An external code system, identified by OID.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct CodeSystem {
    pub oid: &'static str,
    pub name: &'static str,
}

pub const AS5017_SEX: CodeSystem = CodeSystem {
    oid: "2.16.840.1.113883.13.68",
    name: "AS 5017-2006 Health Care Client Identifier Sex",
};

pub const METEOR_INDIGENOUS_STATUS: CodeSystem = CodeSystem {
    oid: "2.16.840.1.113883.3.879.291036",
    name: "METeOR Indigenous Status",
};

pub const METEOR_STATE_TERRITORY: CodeSystem = CodeSystem {
    oid: "2.16.840.1.113883.3.879.286919",
    name: "METeOR Australian State/Territory Identifier",
};

pub const HL7_ADDRESS_USE: CodeSystem = CodeSystem {
    oid: "2.16.840.1.113883.5.1119",
    name: "HL7 AddressUse",
};

pub const HL7_URL_SCHEME: CodeSystem = CodeSystem {
    oid: "2.16.840.1.113883.5.143",
    name: "HL7 URLScheme",
};

pub const HL7_MEDIA_TYPE: CodeSystem = CodeSystem {
    oid: "2.16.840.1.113883.5.79",
    name: "HL7 MediaType",
};

pub const HL7_ACT_STATUS: CodeSystem = CodeSystem {
    oid: "2.16.840.1.113883.5.14",
    name: "HL7 ActStatus",
};

pub const LOINC: CodeSystem = CodeSystem {
    oid: "2.16.840.1.113883.6.1",
    name: "LOINC",
};

pub const NCTIS_DATA_COMPONENTS: CodeSystem = CodeSystem {
    oid: "1.2.36.1.2001.1001.101",
    name: "NCTIS Data Components",
};

pub const NCTIS_DOCUMENT_STATUS: CodeSystem = CodeSystem {
    oid: "1.2.36.1.2001.1001.101.104.20104",
    name: "NCTIS Document Status Values",
};

pub const NCTIS_RESULT_STATUS: CodeSystem = CodeSystem {
    oid: "1.2.36.1.2001.1001.101.104.16501",
    name: "NCTIS Result Status Values",
};

pub const NCTIS_CHANGE_TYPE: CodeSystem = CodeSystem {
    oid: "1.2.36.1.2001.1001.101.104.16592",
    name: "NCTIS Change Type Values",
};

pub const HL7_DIAGNOSTIC_SERVICE: CodeSystem = CodeSystem {
    oid: "2.16.840.1.113883.12.74",
    name: "HL7 Diagnostic Service Section ID",
};

pub const HL7_RESULT_STATUS: CodeSystem = CodeSystem {
    oid: "2.16.840.1.113883.12.123",
    name: "HL7 Result Status",
};

pub const HL7_ABNORMAL_FLAGS: CodeSystem = CodeSystem {
    oid: "2.16.840.1.113883.12.78",
    name: "HL7 Abnormal Flags",
};

pub const HL7_VALUE_TYPE: CodeSystem = CodeSystem {
    oid: "2.16.840.1.113883.12.125",
    name: "HL7 Value Type",
};

pub const HL7_PROCESSING_ID: CodeSystem = CodeSystem {
    oid: "2.16.840.1.113883.12.103",
    name: "HL7 Processing ID",
};

pub const HL7_ADMINISTRATIVE_SEX: CodeSystem = CodeSystem {
    oid: "2.16.840.1.113883.12.1",
    name: "HL7 Administrative Sex",
};
