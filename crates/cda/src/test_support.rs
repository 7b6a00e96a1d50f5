//! Valid fixtures for unit tests; each test breaks exactly the field it is about.

use crate::common::{
    Address, Author, CodableText, Custodian, ElectronicCommunicationDetail, ExternalData,
    IndividualResult, Organisation, PersonName, Quantity, ReferenceRange, RelatedDocument,
    ReportDetails, ResultGroup, ResultValue, SubjectOfCare,
};
use crate::document::DocumentContext;
use cda_codes::{
    AbnormalFlag, AddressPurpose, IndigenousStatus, MediaType, ResultStatus, Sex, TelecomMedium,
};
use cda_types::{HealthcareIdentifier, NonEmptyText};
use chrono::{DateTime, NaiveDate, TimeZone, Utc};

pub(crate) fn text(value: &str) -> NonEmptyText {
    NonEmptyText::new(value).expect("fixture text is non-empty")
}

pub(crate) fn coded(label: &str) -> CodableText {
    CodableText::original_text(text(label))
}

pub(crate) fn time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 2, 10, 30, 0).unwrap()
}

pub(crate) fn ihi() -> HealthcareIdentifier {
    HealthcareIdentifier::parse("8003608166690503").expect("valid IHI")
}

pub(crate) fn hpii() -> HealthcareIdentifier {
    HealthcareIdentifier::parse("8003611234567893").expect("valid HPI-I")
}

pub(crate) fn hpio() -> HealthcareIdentifier {
    HealthcareIdentifier::parse("8003620000000005").expect("valid HPI-O")
}

pub(crate) fn organisation() -> Organisation {
    Organisation {
        name: Some(text("Example Pathology")),
        hpio: Some(hpio()),
        addresses: vec![Address {
            purpose: Some(AddressPurpose::WorkPlace),
            lines: vec![text("1 Example Street")],
            suburb: Some("Melbourne".into()),
            postcode: Some("3000".into()),
            ..Address::default()
        }],
        communication: vec![ElectronicCommunicationDetail::new(
            TelecomMedium::Telephone,
            text("0399990000"),
        )],
        ..Organisation::default()
    }
}

pub(crate) fn author() -> Author {
    Author {
        name: Some(PersonName::new("Grace", "Hopper")),
        role: Some(coded("Pathologist")),
        hpii: Some(hpii()),
        organisation: Some(organisation()),
        communication: Vec::new(),
        authored_time: Some(time()),
    }
}

pub(crate) fn custodian() -> Custodian {
    Custodian {
        organisation: Some(organisation()),
    }
}

pub(crate) fn subject_of_care() -> SubjectOfCare {
    SubjectOfCare {
        ihi: Some(ihi()),
        names: vec![PersonName::new("Ada", "Lovelace")],
        sex: Some(Sex::Female),
        date_of_birth: NaiveDate::from_ymd_opt(1970, 1, 1),
        indigenous_status: Some(IndigenousStatus::NeitherAboriginalNorTorresStrait),
        ..SubjectOfCare::default()
    }
}

pub(crate) fn context() -> DocumentContext {
    DocumentContext {
        author: Some(author()),
        custodian: Some(custodian()),
        subject_of_care: Some(subject_of_care()),
        ..DocumentContext::default()
    }
}

pub(crate) fn related_document() -> RelatedDocument {
    RelatedDocument {
        attachment: Some(ExternalData::new(MediaType::Pdf, text("attachments/report.pdf"))),
        details: Some(ReportDetails {
            report_identifier: Some(text("R-2026-0001")),
            report_name: Some("Full blood count".into()),
            report_status: Some(ResultStatus::Final),
            report_date: Some(time()),
        }),
    }
}

pub(crate) fn result_group() -> ResultGroup {
    ResultGroup {
        name: Some(coded("Full blood count")),
        results: vec![IndividualResult {
            result_name: Some(coded("Haemoglobin")),
            value: Some(ResultValue::Quantity(Quantity::new(135.0, text("g/L")))),
            reference_range: Some(ReferenceRange {
                low: Some(Quantity::new(115.0, text("g/L"))),
                high: Some(Quantity::new(165.0, text("g/L"))),
                ..ReferenceRange::default()
            }),
            interpretation: Some(AbnormalFlag::Normal),
            result_status: Some(ResultStatus::Final),
            comments: Vec::new(),
        }],
        specimen: None,
    }
}
