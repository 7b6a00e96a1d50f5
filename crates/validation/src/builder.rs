//! The validation builder bound to one node's path.
//!
//! A node's [`Validate`](crate::Validate) implementation creates a builder for its own path,
//! checks its fields through it and recurses into children through it. Every finding is
//! appended to the shared sink; nothing short-circuits.

use crate::message::{MessageCode, ValidationMessage, ValidationMessages};
use crate::presence::Presence;
use crate::Validate;

/// Path-scoped helper that records findings into a shared [`ValidationMessages`] sink.
///
/// # Examples
///
/// ```rust
/// use cda_validation::{Validate, ValidationBuilder, ValidationMessages};
///
/// struct Name {
///     family: Option<String>,
/// }
///
/// impl Validate for Name {
///     fn validate(&self, path: &str, messages: &mut ValidationMessages) {
///         let mut vb = ValidationBuilder::new(path, messages);
///         vb.required("Family", &self.family);
///     }
/// }
///
/// let mut messages = ValidationMessages::new();
/// Name { family: None }.validate("Person/Name", &mut messages);
/// assert_eq!(messages.paths(), vec!["Person/Name/Family"]);
/// ```
pub struct ValidationBuilder<'a> {
    path: String,
    messages: &'a mut ValidationMessages,
}

impl<'a> ValidationBuilder<'a> {
    pub fn new(path: impl Into<String>, messages: &'a mut ValidationMessages) -> Self {
        Self {
            path: path.into(),
            messages,
        }
    }

    /// The path this builder reports against.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// `path + "/" + field`.
    pub fn child_path(&self, field: &str) -> String {
        format!("{}/{}", self.path, field)
    }

    /// `path + "/" + field + "[" + index + "]"`.
    pub fn element_path(&self, field: &str, index: usize) -> String {
        format!("{}/{}[{}]", self.path, field, index)
    }

    /// Appends an arbitrary message.
    pub fn add(&mut self, message: ValidationMessage) {
        self.messages.push(message);
    }

    /// Records a missing-field error when `value` is absent.
    ///
    /// Returns whether the value is present, so callers can decide to recurse into it.
    pub fn required<P: Presence + ?Sized>(&mut self, field: &str, value: &P) -> bool {
        if value.is_present() {
            return true;
        }
        let path = self.child_path(field);
        let description = format!("{path} is required");
        self.add(ValidationMessage::error(
            path,
            MessageCode::MissingRequiredField,
            description,
        ));
        false
    }

    /// Records a warning when a recommended `value` is absent.
    pub fn recommended<P: Presence + ?Sized>(&mut self, field: &str, value: &P) -> bool {
        if value.is_present() {
            return true;
        }
        let path = self.child_path(field);
        let description = format!("{path} should be provided");
        self.add(ValidationMessage::warning(
            path,
            MessageCode::Recommended,
            description,
        ));
        false
    }

    /// Delegates to `node`'s own validation under `path/field`.
    pub fn nested<T: Validate + ?Sized>(&mut self, field: &str, node: &T) {
        let path = self.child_path(field);
        node.validate(&path, self.messages);
    }

    /// Requires `node` and, when present, validates it.
    pub fn required_node<T: Validate>(&mut self, field: &str, node: &Option<T>) -> bool {
        if !self.required(field, node) {
            return false;
        }
        if let Some(node) = node {
            self.nested(field, node);
        }
        true
    }

    /// Validates `node` only when present; absence is not reported.
    pub fn optional_node<T: Validate>(&mut self, field: &str, node: &Option<T>) {
        if let Some(node) = node {
            self.nested(field, node);
        }
    }

    /// Validates every element under `path/field[index]`.
    pub fn sequence<T: Validate>(&mut self, field: &str, items: &[T]) {
        for (index, item) in items.iter().enumerate() {
            let path = self.element_path(field, index);
            item.validate(&path, self.messages);
        }
    }

    /// Requires at least one element, then validates every element.
    pub fn required_sequence<T: Validate>(&mut self, field: &str, items: &[T]) -> bool {
        let present = self.required(field, items);
        self.sequence(field, items);
        present
    }

    /// Checks that a sequence holds between `min` and `max` (inclusive) elements.
    pub fn range_check(
        &mut self,
        field: &str,
        count: usize,
        min: usize,
        max: Option<usize>,
    ) -> bool {
        let in_range = count >= min && max.map_or(true, |max| count <= max);
        if in_range {
            return true;
        }
        let path = self.child_path(field);
        let expectation = match max {
            Some(max) if max == min => format!("exactly {min}"),
            Some(max) => format!("between {min} and {max}"),
            None => format!("at least {min}"),
        };
        let description = format!("{path} must contain {expectation} item(s), found {count}");
        self.add(ValidationMessage::error(
            path,
            MessageCode::OutOfRange,
            description,
        ));
        false
    }

    /// Checks that exactly one of several alternative fields is present.
    pub fn choice_check(&mut self, options: &[(&str, bool)]) -> bool {
        let found = options.iter().filter(|(_, present)| *present).count();
        if found == 1 {
            return true;
        }
        let names = option_names(options);
        let description = format!(
            "{} must have exactly one of {names}, found {found}",
            self.path
        );
        let path = self.path.clone();
        self.add(ValidationMessage::error(
            path,
            MessageCode::InvalidChoice,
            description,
        ));
        false
    }

    /// Checks that at least one of several alternative fields is present.
    pub fn at_least_one(&mut self, options: &[(&str, bool)]) -> bool {
        if options.iter().any(|(_, present)| *present) {
            return true;
        }
        let names = option_names(options);
        let description = format!("{} must have at least one of {names}", self.path);
        let path = self.path.clone();
        self.add(ValidationMessage::error(
            path,
            MessageCode::InvalidChoice,
            description,
        ));
        false
    }

    /// Records that a present value of `field` is not acceptable.
    pub fn invalid(&mut self, field: &str, reason: impl AsRef<str>) {
        let path = self.child_path(field);
        let description = format!("{path} {}", reason.as_ref());
        self.add(ValidationMessage::error(
            path,
            MessageCode::InvalidValue,
            description,
        ));
    }
}

fn option_names(options: &[(&str, bool)]) -> String {
    options
        .iter()
        .map(|(name, _)| *name)
        .collect::<Vec<_>>()
        .join(", ")
}
