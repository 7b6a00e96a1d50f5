//! Building blocks shared by every document type.

mod attachment;
mod coded;
mod participant;
mod result;

pub use attachment::{ExternalData, RelatedDocument, ReportDetails};
pub use coded::CodableText;
pub use participant::{
    Address, Author, Custodian, ElectronicCommunicationDetail, InformationRecipient,
    LegalAuthenticator, Organisation, PersonName, SubjectOfCare,
};
pub use result::{
    AnatomicalSite, IndividualResult, Quantity, ReferenceRange, ResultGroup, ResultValue,
    SpecimenDetail,
};
