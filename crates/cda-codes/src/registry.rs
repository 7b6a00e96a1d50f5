//! Runtime lookup of code sets by name.
//!
//! Serialization layers that only know a code set's name (for example from a template) use
//! this registry instead of the typed enums. Asking for a set that does not exist is a
//! programming error and is reported as [`CodeError::UnknownCodeSet`]; a code that is simply
//! not in a known set is an ordinary miss (`Ok(None)`).

use crate::{
    AbnormalFlag, AddressPurpose, AdministrativeSex, AustralianState, CodeError, CodeResult,
    CodeSet, CodeTable, CodedValue, DiagnosticService, DocumentStatus, DocumentType,
    Hl7ResultStatus, IndigenousStatus, MediaType, MedicationChangeType, MedicationStatus,
    ProcessingId, ResultStatus, Sex, TelecomMedium, TelecomUse, ValueType,
};
use std::collections::BTreeMap;
use std::sync::LazyLock;

struct RegisteredCodeSet {
    values: &'static [CodedValue],
    verify: fn() -> CodeResult<()>,
}

fn verify<T: CodeSet>() -> CodeResult<()> {
    CodeTable::<T>::build().map(|_| ())
}

macro_rules! register {
    ($($set:ty),+ $(,)?) => {{
        let mut sets = BTreeMap::new();
        $(
            sets.insert(
                <$set as CodeSet>::CODE_SET,
                RegisteredCodeSet {
                    values: <$set as CodeSet>::coded_values(),
                    verify: verify::<$set>,
                },
            );
        )+
        sets
    }};
}

static REGISTRY: LazyLock<BTreeMap<&'static str, RegisteredCodeSet>> = LazyLock::new(|| {
    register!(
        Sex,
        IndigenousStatus,
        AustralianState,
        AddressPurpose,
        TelecomUse,
        TelecomMedium,
        DocumentType,
        DocumentStatus,
        ResultStatus,
        DiagnosticService,
        MediaType,
        MedicationStatus,
        MedicationChangeType,
        Hl7ResultStatus,
        AbnormalFlag,
        ValueType,
        ProcessingId,
        AdministrativeSex,
    )
});

fn registered(code_set: &str) -> CodeResult<&'static RegisteredCodeSet> {
    REGISTRY
        .get(code_set)
        .ok_or_else(|| CodeError::UnknownCodeSet(code_set.to_string()))
}

/// Names of every registered code set, sorted.
pub fn code_sets() -> Vec<&'static str> {
    REGISTRY.keys().copied().collect()
}

/// Every coded value of `code_set`, in declaration order.
///
/// # Errors
///
/// Returns [`CodeError::UnknownCodeSet`] if no such set is registered.
pub fn coded_values(code_set: &str) -> CodeResult<&'static [CodedValue]> {
    Ok(registered(code_set)?.values)
}

/// Look up an entry of `code_set` by external code.
///
/// # Errors
///
/// Returns [`CodeError::UnknownCodeSet`] if no such set is registered.
pub fn lookup_code(code_set: &str, code: &str) -> CodeResult<Option<&'static CodedValue>> {
    let found = registered(code_set)?.values.iter().find(|v| v.code == code);
    if found.is_none() {
        tracing::debug!(code_set, code, "code not found in code set");
    }
    Ok(found)
}

/// Look up an entry of `code_set` by symbolic name.
///
/// # Errors
///
/// Returns [`CodeError::UnknownCodeSet`] if no such set is registered.
pub fn lookup_name(code_set: &str, name: &str) -> CodeResult<Option<&'static CodedValue>> {
    let found = registered(code_set)?.values.iter().find(|v| v.name == name);
    if found.is_none() {
        tracing::debug!(code_set, name, "name not found in code set");
    }
    Ok(found)
}

/// Build every registered table, reporting the first uniqueness violation.
///
/// Intended to run once at startup so a malformed table fails fast instead of on first use.
///
/// # Errors
///
/// Returns [`CodeError::DuplicateCode`] or [`CodeError::DuplicateName`].
pub fn verify_all() -> CodeResult<()> {
    REGISTRY.values().try_for_each(|set| (set.verify)())
}
