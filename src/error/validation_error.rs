//! The normalized validation error.
//!
//! [`ValidationError`] carries a one-line summary for humans and the original
//! issues for programs. It also stores a fixed discriminator,
//! [`VALIDATION_ERROR_NAME`], which is emitted as the `"name"` key of its
//! serialized form so that code holding a value built by another copy of this
//! crate can still recognize it.

use indexmap::IndexMap;
use serde::ser::{Serialize, SerializeStruct, Serializer};
use serde_json::Value;
use thiserror::Error;

use crate::issue::Issue;
use crate::path::{format_path, JsonPath};

/// Discriminator stored on every [`ValidationError`].
pub const VALIDATION_ERROR_NAME: &str = "AutopsyValidationError";

/// A validation failure reduced to one readable message.
///
/// Built by [`normalize`](crate::normalize) and friends. `Display` prints the
/// summary; [`details`](Self::details) returns the issues it was built from,
/// untouched and in their original order.
///
/// # Example
///
/// ```rust
/// use autopsy::{normalize, Issue, JsonPath, MessageOptions};
///
/// let error = normalize(
///     vec![Issue::new(JsonPath::from_field("email"), "Invalid email")],
///     &MessageOptions::default(),
/// );
///
/// assert_eq!(error.to_string(), "Validation error: Invalid email at \"email\"");
/// assert_eq!(error.details().len(), 1);
/// ```
#[derive(Debug, Error)]
#[error("{message}")]
pub struct ValidationError {
    name: &'static str,
    message: String,
    details: Vec<Issue>,
    #[source]
    cause: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl ValidationError {
    /// Creates an error from a ready-made summary and the issues behind it.
    pub fn new(message: impl Into<String>, details: Vec<Issue>) -> Self {
        Self {
            name: VALIDATION_ERROR_NAME,
            message: message.into(),
            details,
            cause: None,
        }
    }

    /// Attaches the error this one was derived from.
    pub fn with_cause(mut self, cause: Box<dyn std::error::Error + Send + Sync>) -> Self {
        self.cause = Some(cause);
        self
    }

    /// Returns the discriminator, always [`VALIDATION_ERROR_NAME`].
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the summary.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the original issues.
    pub fn details(&self) -> &[Issue] {
        &self.details
    }

    /// Consumes the error, returning the original issues.
    pub fn into_details(self) -> Vec<Issue> {
        self.details
    }

    /// Returns the issue messages grouped by formatted path, in first-seen order.
    ///
    /// Root-level issues are grouped under the empty string. Useful for
    /// attaching messages to individual form fields.
    ///
    /// ```rust
    /// use autopsy::{Issue, JsonPath, ValidationError};
    ///
    /// let error = ValidationError::new("Validation error", vec![
    ///     Issue::new(JsonPath::from_field("name"), "Required"),
    ///     Issue::new(JsonPath::from_field("age"), "Too small"),
    ///     Issue::new(JsonPath::from_field("name"), "Too short"),
    /// ]);
    ///
    /// let fields = error.field_errors();
    /// assert_eq!(fields.keys().collect::<Vec<_>>(), ["name", "age"]);
    /// assert_eq!(fields["name"], ["Required", "Too short"]);
    /// ```
    pub fn field_errors(&self) -> IndexMap<String, Vec<String>> {
        let root = JsonPath::root();
        let mut fields: IndexMap<String, Vec<String>> = IndexMap::new();
        for issue in &self.details {
            fields
                .entry(format_path(&root, &issue.path))
                .or_default()
                .push(issue.message.clone());
        }
        fields
    }

    /// Returns the serialized form: `{"name", "message", "details"}`.
    ///
    /// This is the shape [`is_validation_error_like`](crate::is_validation_error_like)
    /// recognizes, whichever copy of the crate produced it.
    pub fn to_json(&self) -> serde_json::Result<Value> {
        serde_json::to_value(self)
    }
}

impl Serialize for ValidationError {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("ValidationError", 3)?;
        state.serialize_field("name", self.name)?;
        state.serialize_field("message", &self.message)?;
        state.serialize_field("details", &self.details)?;
        state.end()
    }
}

const _: () = {
    const fn assert_send<T: Send>() {}
    const fn assert_sync<T: Sync>() {}
    assert_send::<ValidationError>();
    assert_sync::<ValidationError>();
};
