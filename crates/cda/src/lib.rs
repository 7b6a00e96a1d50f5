//! Typed models for Australian CDA clinical documents.
//!
//! This crate provides the **document trees** callers populate before serialisation:
//! - a shared [`ClinicalDocument`] envelope with header and context
//! - typed bodies for pathology, diagnostic imaging, advance care and medicines list documents
//! - YAML read/write of whole documents, reporting the failing field on schema mismatch
//!
//! Every node implements [`Validate`], so a document is checked with a single call to
//! [`ClinicalDocument::validate_document`] and every problem comes back at once with its
//! full path (for example `ClinicalDocument/Context/Author/Name/FamilyName`).
//!
//! Rendering to CDA XML and packaging are not part of this crate.

pub mod common;
pub mod document;
pub mod documents;

#[cfg(test)]
mod test_support;

pub use common::CodableText;
pub use document::{ClinicalDocument, DocumentContent, DocumentContext, DOCUMENT_ROOT};
pub use documents::{
    AdvanceCareInformationContent, DiagnosticImagingReportContent, MedicationListContent,
    PathologyResultReportContent,
};

pub use cda_validation::{Validate, ValidationConfig, ValidationMessages};

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::Path;

/// Errors returned by the `cda` crate.
#[derive(Debug, thiserror::Error)]
pub enum CdaError {
    #[error("invalid YAML: {0}")]
    InvalidYaml(#[from] serde_yaml::Error),

    #[error("document schema mismatch at {path}: {message}")]
    SchemaMismatch { path: String, message: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Validation(#[from] cda_validation::ValidationError),
}

/// Type alias for Results that can fail with a [`CdaError`].
pub type CdaResult<T> = Result<T, CdaError>;

/// Parse a document from YAML text.
///
/// Uses `serde_path_to_error` so a mismatch names the failing field
/// (e.g. `context.author.authored_time`). Parsing does not validate; call
/// [`ClinicalDocument::validate_document`] on the result.
///
/// # Errors
///
/// Returns [`CdaError::SchemaMismatch`] if the YAML does not fit the document shape,
/// including unknown keys.
pub fn read_document_yaml<C>(yaml_text: &str) -> CdaResult<ClinicalDocument<C>>
where
    C: DocumentContent + DeserializeOwned,
{
    let deserializer = serde_yaml::Deserializer::from_str(yaml_text);

    serde_path_to_error::deserialize(deserializer).map_err(|err| {
        let path = err.path().to_string();
        let source = err.into_inner();
        let path = if path.is_empty() || path == "." {
            "<root>".to_string()
        } else {
            path
        };
        tracing::warn!(%path, document_type = %C::document_type(), "document schema mismatch");
        CdaError::SchemaMismatch {
            path,
            message: source.to_string(),
        }
    })
}

/// Render a document as YAML text.
///
/// # Errors
///
/// Returns [`CdaError::InvalidYaml`] if serialisation fails.
pub fn write_document_yaml<C>(document: &ClinicalDocument<C>) -> CdaResult<String>
where
    C: DocumentContent + Serialize,
{
    Ok(serde_yaml::to_string(document)?)
}

/// Read and parse a YAML document file.
///
/// # Errors
///
/// Returns [`CdaError::Io`] if the file cannot be read, otherwise as
/// [`read_document_yaml`].
pub fn read_document_file<C>(path: &Path) -> CdaResult<ClinicalDocument<C>>
where
    C: DocumentContent + DeserializeOwned,
{
    tracing::debug!(path = %path.display(), "reading document");
    let yaml_text = std::fs::read_to_string(path)?;
    read_document_yaml(&yaml_text)
}
