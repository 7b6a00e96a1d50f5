//! # CDA validation
//!
//! Path-aware, collect-all validation for clinical document object trees.
//!
//! Every document node implements [`Validate`]. A node builds a [`ValidationBuilder`] for its
//! own path, checks its required fields and then hands each present child its extended path
//! and the same [`ValidationMessages`] sink. A single pass therefore reports every violation
//! in the document, in depth-first field-declaration order.
//!
//! **No serialisation concerns**: emitting CDA XML or HL7 v2 wire text is done elsewhere.

pub mod builder;
pub mod config;
pub mod error;
pub mod message;
pub mod presence;

pub use builder::ValidationBuilder;
pub use config::ValidationConfig;
pub use error::{ValidationError, ValidationResult};
pub use message::{MessageCode, Severity, ValidationMessage, ValidationMessages};
pub use presence::Presence;

/// A node in a document tree that can validate itself and its descendants.
///
/// Implementations append findings to `messages` and never fail; absent optional children
/// are skipped silently.
pub trait Validate {
    fn validate(&self, path: &str, messages: &mut ValidationMessages);
}

impl<T: Validate + ?Sized> Validate for Box<T> {
    fn validate(&self, path: &str, messages: &mut ValidationMessages) {
        (**self).validate(path, messages);
    }
}

/// Validate a whole tree from its root with a fresh sink.
///
/// Messages below the configured minimum severity are dropped after the walk.
pub fn validate_root<T: Validate + ?Sized>(
    node: &T,
    root_path: &str,
    config: &ValidationConfig,
) -> ValidationMessages {
    tracing::debug!(root = root_path, "validation started");

    let mut messages = ValidationMessages::new();
    node.validate(root_path, &mut messages);
    messages.retain_at_least(config.minimum_severity());

    let errors = messages.errors().count();
    let warnings = messages.warnings().count();
    if errors > 0 {
        tracing::info!(root = root_path, errors, warnings, "validation found errors");
    } else {
        tracing::debug!(root = root_path, warnings, "validation completed");
    }

    messages
}

/// Validate a tree and turn the outcome into a `Result`.
///
/// # Errors
///
/// Returns [`ValidationError::DocumentInvalid`] with every reported message when the tree
/// has errors (or warnings, when the config says so). With `fail_on_warnings` set, warnings
/// are kept and reported even when the minimum severity is [`Severity::Error`].
pub fn ensure_valid<T: Validate + ?Sized>(
    node: &T,
    root_path: &str,
    config: &ValidationConfig,
) -> ValidationResult<()> {
    let mut minimum = config.minimum_severity();
    if config.fail_on_warnings() {
        minimum = minimum.min(Severity::Warning);
    }
    let effective = ValidationConfig::new(minimum, config.fail_on_warnings());
    validate_root(node, root_path, &effective).into_result(root_path, config.fail_on_warnings())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Default)]
    struct Name {
        family: Option<String>,
        given: Vec<String>,
    }

    impl Validate for Name {
        fn validate(&self, path: &str, messages: &mut ValidationMessages) {
            let mut vb = ValidationBuilder::new(path, messages);
            vb.required("Family", &self.family);
            vb.recommended("Given", &self.given);
        }
    }

    #[derive(Clone, Default)]
    struct Author {
        name: Option<Name>,
        role: Option<String>,
    }

    impl Validate for Author {
        fn validate(&self, path: &str, messages: &mut ValidationMessages) {
            let mut vb = ValidationBuilder::new(path, messages);
            vb.required_node("Name", &self.name);
            vb.required("Role", &self.role);
        }
    }

    #[derive(Clone, Default)]
    struct Section {
        title: Option<String>,
    }

    impl Validate for Section {
        fn validate(&self, path: &str, messages: &mut ValidationMessages) {
            let mut vb = ValidationBuilder::new(path, messages);
            vb.required("Title", &self.title);
        }
    }

    #[derive(Clone, Default)]
    struct Document {
        document_type: Option<String>,
        author: Option<Author>,
        reviewer: Option<Author>,
        sections: Vec<Section>,
    }

    impl Validate for Document {
        fn validate(&self, path: &str, messages: &mut ValidationMessages) {
            let mut vb = ValidationBuilder::new(path, messages);
            vb.required("DocumentType", &self.document_type);
            vb.required_node("Author", &self.author);
            vb.optional_node("Reviewer", &self.reviewer);
            vb.required_sequence("Section", &self.sections);
        }
    }

    fn valid_name() -> Name {
        Name {
            family: Some("Citizen".into()),
            given: vec!["Jane".into()],
        }
    }

    fn valid_author() -> Author {
        Author {
            name: Some(valid_name()),
            role: Some("Pathologist".into()),
        }
    }

    fn valid_document() -> Document {
        Document {
            document_type: Some("Pathology Result Report".into()),
            author: Some(valid_author()),
            reviewer: None,
            sections: vec![
                Section {
                    title: Some("Haematology".into()),
                },
                Section {
                    title: Some("Biochemistry".into()),
                },
            ],
        }
    }

    fn run(document: &Document) -> ValidationMessages {
        validate_root(document, "Doc", &ValidationConfig::default())
    }

    #[test]
    fn fully_populated_tree_has_no_messages() {
        let messages = run(&valid_document());
        assert!(messages.is_empty(), "unexpected messages: {messages}");
    }

    #[test]
    fn absent_optional_fields_produce_nothing() {
        let mut document = valid_document();
        document.reviewer = None;
        assert!(run(&document).is_empty());
    }

    #[test]
    fn missing_type_and_nested_name_are_reported_in_order() {
        let mut document = valid_document();
        document.document_type = None;
        document.author = Some(Author {
            name: None,
            role: Some("Pathologist".into()),
        });

        let descriptions: Vec<_> = run(&document)
            .iter()
            .map(|m| m.description.clone())
            .collect();
        assert_eq!(
            descriptions,
            vec!["Doc/DocumentType is required", "Doc/Author/Name is required"]
        );
    }

    #[test]
    fn each_missing_required_field_is_reported_independently() {
        let document = Document {
            author: Some(Author::default()),
            ..Default::default()
        };
        let messages = run(&document);
        assert_eq!(
            messages.paths(),
            vec![
                "Doc/DocumentType",
                "Doc/Author/Name",
                "Doc/Author/Role",
                "Doc/Section",
            ]
        );
        assert!(messages
            .iter()
            .all(|m| m.code == MessageCode::MissingRequiredField));
    }

    #[test]
    fn sequence_element_failure_carries_its_index() {
        let mut document = valid_document();
        document.sections.push(Section { title: None });
        document.sections.push(Section {
            title: Some("Microbiology".into()),
        });

        let messages = run(&document);
        assert_eq!(messages.paths(), vec!["Doc/Section[2]/Title"]);
    }

    #[test]
    fn doubly_nested_path_composes_from_root() {
        let mut document = valid_document();
        document.reviewer = Some(Author {
            name: Some(Name {
                family: None,
                given: vec!["Sam".into()],
            }),
            role: Some("Registrar".into()),
        });

        let messages = run(&document);
        assert_eq!(messages.paths(), vec!["Doc/Reviewer/Name/Family"]);
    }

    #[test]
    fn validation_is_idempotent() {
        let document = Document {
            author: Some(Author::default()),
            sections: vec![Section::default()],
            ..Default::default()
        };
        assert_eq!(run(&document), run(&document));
    }

    #[test]
    fn minimum_severity_filters_warnings() {
        let mut document = valid_document();
        if let Some(author) = document.author.as_mut() {
            author.name = Some(Name {
                family: Some("Citizen".into()),
                given: vec![],
            });
        }

        let all = run(&document);
        assert_eq!(all.warnings().count(), 1);
        assert_eq!(all.paths(), vec!["Doc/Author/Name/Given"]);

        let errors_only = validate_root(
            &document,
            "Doc",
            &ValidationConfig::new(Severity::Error, false),
        );
        assert!(errors_only.is_empty());
    }

    #[test]
    fn ensure_valid_honours_fail_on_warnings() {
        let mut document = valid_document();
        if let Some(author) = document.author.as_mut() {
            author.name = Some(Name {
                family: Some("Citizen".into()),
                given: vec![],
            });
        }

        assert!(ensure_valid(&document, "Doc", &ValidationConfig::default()).is_ok());

        let err = ensure_valid(
            &document,
            "Doc",
            &ValidationConfig::new(Severity::Information, true),
        )
        .expect_err("warnings fail");
        assert_eq!(err.messages().map(ValidationMessages::len), Some(1));
    }

    #[test]
    fn fail_on_warnings_outranks_error_only_filter() {
        let mut document = valid_document();
        if let Some(author) = document.author.as_mut() {
            author.name = Some(Name {
                family: Some("Citizen".into()),
                given: vec![],
            });
        }

        let config = ValidationConfig::new(Severity::Error, true);
        assert!(validate_root(&document, "Doc", &config).is_empty());

        let err = ensure_valid(&document, "Doc", &config).expect_err("warning still fails");
        let messages = err.messages().expect("document messages");
        assert_eq!(messages.paths(), vec!["Doc/Author/Name/Given"]);
        assert_eq!(messages.as_slice()[0].severity, Severity::Warning);

        let lenient = ValidationConfig::new(Severity::Error, false);
        assert!(ensure_valid(&document, "Doc", &lenient).is_ok());
    }

    #[test]
    fn boxed_nodes_delegate() {
        let boxed: Box<Section> = Box::new(Section::default());
        let mut messages = ValidationMessages::new();
        boxed.validate("Doc/Section[0]", &mut messages);
        assert_eq!(messages.paths(), vec!["Doc/Section[0]/Title"]);
    }
}
