//! Result structures shared by pathology and diagnostic imaging reports.

use crate::common::CodableText;
use cda_codes::{AbnormalFlag, ResultStatus};
use cda_types::NonEmptyText;
use cda_validation::{Presence, Validate, ValidationBuilder, ValidationMessages};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Quantity {
    pub value: Option<f64>,
    pub units: Option<NonEmptyText>,
}

impl Quantity {
    pub fn new(value: f64, units: NonEmptyText) -> Self {
        Self {
            value: Some(value),
            units: Some(units),
        }
    }
}

impl Validate for Quantity {
    fn validate(&self, path: &str, messages: &mut ValidationMessages) {
        let mut vb = ValidationBuilder::new(path, messages);
        if vb.required("Value", &self.value) {
            if let Some(value) = self.value.filter(|value| !value.is_finite()) {
                vb.invalid("Value", format!("must be a finite number, got {value}"));
            }
        }
        vb.required("Units", &self.units);
    }
}

/// The normal range a result is interpreted against; open-ended ranges omit one bound.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReferenceRange {
    pub meaning: Option<CodableText>,
    pub low: Option<Quantity>,
    pub high: Option<Quantity>,
}

impl Validate for ReferenceRange {
    fn validate(&self, path: &str, messages: &mut ValidationMessages) {
        let mut vb = ValidationBuilder::new(path, messages);
        vb.optional_node("Meaning", &self.meaning);
        vb.at_least_one(&[("Low", self.low.is_present()), ("High", self.high.is_present())]);
        vb.optional_node("Low", &self.low);
        vb.optional_node("High", &self.high);
    }
}

/// The value of an individual result.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", deny_unknown_fields)]
pub enum ResultValue {
    Quantity(Quantity),
    Coded(CodableText),
    Text(NonEmptyText),
}

impl Validate for ResultValue {
    fn validate(&self, path: &str, messages: &mut ValidationMessages) {
        let mut vb = ValidationBuilder::new(path, messages);
        match self {
            Self::Quantity(quantity) => vb.nested("Quantity", quantity),
            Self::Coded(coded) => vb.nested("Coded", coded),
            Self::Text(_) => {}
        }
    }
}

/// Body location of a specimen or examination.
///
/// Either a coded location (optionally with laterality) or a free-text description, not both.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AnatomicalSite {
    pub name_of_location: Option<CodableText>,
    pub side: Option<CodableText>,
    pub description: Option<NonEmptyText>,
}

impl Validate for AnatomicalSite {
    fn validate(&self, path: &str, messages: &mut ValidationMessages) {
        let mut vb = ValidationBuilder::new(path, messages);
        vb.choice_check(&[
            ("NameOfLocation", self.name_of_location.is_present()),
            ("Description", self.description.is_present()),
        ]);
        vb.optional_node("NameOfLocation", &self.name_of_location);
        vb.optional_node("Side", &self.side);
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SpecimenDetail {
    pub tissue_type: Option<CodableText>,
    pub collection_procedure: Option<CodableText>,
    pub anatomical_sites: Vec<AnatomicalSite>,
    pub collection_time: Option<DateTime<Utc>>,
    pub container_identifier: Option<String>,
    pub received_time: Option<DateTime<Utc>>,
}

impl Validate for SpecimenDetail {
    fn validate(&self, path: &str, messages: &mut ValidationMessages) {
        let mut vb = ValidationBuilder::new(path, messages);
        vb.optional_node("TissueType", &self.tissue_type);
        vb.optional_node("CollectionProcedure", &self.collection_procedure);
        vb.sequence("AnatomicalSite", &self.anatomical_sites);
        vb.required("CollectionTime", &self.collection_time);
        if let (Some(collected), Some(received)) = (self.collection_time, self.received_time) {
            if received < collected {
                vb.invalid("ReceivedTime", "must not be before CollectionTime");
            }
        }
    }
}

/// A single measured or observed result.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct IndividualResult {
    pub result_name: Option<CodableText>,
    #[serde(with = "serde_yaml::with::singleton_map")]
    pub value: Option<ResultValue>,
    pub reference_range: Option<ReferenceRange>,
    pub interpretation: Option<AbnormalFlag>,
    pub result_status: Option<ResultStatus>,
    pub comments: Vec<String>,
}

impl Validate for IndividualResult {
    fn validate(&self, path: &str, messages: &mut ValidationMessages) {
        let mut vb = ValidationBuilder::new(path, messages);
        vb.required_node("ResultName", &self.result_name);
        vb.required_node("Value", &self.value);
        vb.optional_node("ReferenceRange", &self.reference_range);
        vb.recommended("ResultStatus", &self.result_status);
    }
}

/// A named panel of related results, e.g. the components of a full blood count.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ResultGroup {
    pub name: Option<CodableText>,
    pub results: Vec<IndividualResult>,
    pub specimen: Option<SpecimenDetail>,
}

impl Validate for ResultGroup {
    fn validate(&self, path: &str, messages: &mut ValidationMessages) {
        let mut vb = ValidationBuilder::new(path, messages);
        vb.required_node("Name", &self.name);
        vb.required_sequence("IndividualResult", &self.results);
        vb.optional_node("Specimen", &self.specimen);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support;
    use cda_validation::MessageCode;
    use chrono::TimeZone;

    fn messages_for<T: Validate>(node: &T, path: &str) -> ValidationMessages {
        let mut messages = ValidationMessages::new();
        node.validate(path, &mut messages);
        messages
    }

    #[test]
    fn anatomical_site_rejects_both_alternatives() {
        let site = AnatomicalSite {
            name_of_location: Some(test_support::coded("Left forearm")),
            description: Some(test_support::text("forearm")),
            ..AnatomicalSite::default()
        };
        let messages = messages_for(&site, "Specimen/AnatomicalSite[0]");
        assert_eq!(messages.len(), 1);
        assert_eq!(messages.as_slice()[0].code, MessageCode::InvalidChoice);
        assert_eq!(
            messages.as_slice()[0].description,
            "Specimen/AnatomicalSite[0] must have exactly one of NameOfLocation, Description, found 2"
        );
    }

    #[test]
    fn anatomical_site_rejects_neither_alternative() {
        let messages = messages_for(&AnatomicalSite::default(), "Site");
        assert_eq!(
            messages.as_slice()[0].description,
            "Site must have exactly one of NameOfLocation, Description, found 0"
        );
    }

    #[test]
    fn reference_range_needs_a_bound() {
        let messages = messages_for(&ReferenceRange::default(), "Range");
        assert_eq!(messages.paths(), vec!["Range"]);

        let open_ended = ReferenceRange {
            high: Some(Quantity::new(5.5, test_support::text("mmol/L"))),
            ..ReferenceRange::default()
        };
        assert!(messages_for(&open_ended, "Range").is_empty());
    }

    #[test]
    fn non_finite_quantity_is_invalid() {
        let quantity = Quantity::new(f64::NAN, test_support::text("g/L"));
        let messages = messages_for(&quantity, "Value/Quantity");
        assert_eq!(messages.paths(), vec!["Value/Quantity/Value"]);
        assert_eq!(messages.as_slice()[0].code, MessageCode::InvalidValue);
    }

    #[test]
    fn result_value_paths_name_the_alternative() {
        let value = ResultValue::Quantity(Quantity::default());
        let messages = messages_for(&value, "Result/Value");
        assert_eq!(
            messages.paths(),
            vec!["Result/Value/Quantity/Value", "Result/Value/Quantity/Units"]
        );
    }

    #[test]
    fn result_group_indexes_individual_results() {
        let mut group = test_support::result_group();
        group.results.push(IndividualResult::default());
        let messages = messages_for(&group, "Group[0]");
        assert_eq!(
            messages.paths(),
            vec![
                "Group[0]/IndividualResult[1]/ResultName",
                "Group[0]/IndividualResult[1]/Value",
                "Group[0]/IndividualResult[1]/ResultStatus",
            ]
        );
    }

    #[test]
    fn specimen_received_before_collection_is_invalid() {
        let specimen = SpecimenDetail {
            collection_time: Some(Utc.with_ymd_and_hms(2026, 3, 2, 9, 0, 0).unwrap()),
            received_time: Some(Utc.with_ymd_and_hms(2026, 3, 2, 8, 0, 0).unwrap()),
            ..SpecimenDetail::default()
        };
        let messages = messages_for(&specimen, "Specimen");
        assert_eq!(messages.paths(), vec!["Specimen/ReceivedTime"]);
    }

    #[test]
    fn result_value_reads_from_yaml_map() {
        let yaml = "value:\n  quantity:\n    value: 4.2\n    units: mmol/L\n";
        let result: IndividualResult = serde_yaml::from_str(yaml).expect("parse result");
        assert_eq!(
            result.value,
            Some(ResultValue::Quantity(Quantity::new(4.2, test_support::text("mmol/L"))))
        );

        let yaml = "value:\n  text: Not detected\n";
        let result: IndividualResult = serde_yaml::from_str(yaml).expect("parse result");
        assert_eq!(result.value, Some(ResultValue::Text(test_support::text("Not detected"))));
    }

    #[test]
    fn result_value_writes_as_yaml_map() {
        let result = IndividualResult {
            value: Some(ResultValue::Quantity(Quantity::new(135.0, test_support::text("g/L")))),
            ..IndividualResult::default()
        };
        let yaml = serde_yaml::to_string(&result).expect("write result");
        assert!(yaml.contains("value:\n  quantity:\n"), "unexpected YAML: {yaml}");
        assert!(!yaml.contains('!'));

        let parsed: IndividualResult = serde_yaml::from_str(&yaml).expect("reparse result");
        assert_eq!(parsed, result);

        let empty: IndividualResult = serde_yaml::from_str("comments: []\n").expect("no value");
        assert_eq!(empty.value, None);
    }
}
