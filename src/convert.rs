//! Entry points turning upstream failures into a [`ValidationError`].
//!
//! The upstream validator reports failure as a `Validation::Failure(Issues)`
//! (or as a boxed error carrying [`Issues`]). Everything here is a pure
//! conversion; raising the result is left to the caller, usually with `?`.

use std::error::Error;

use stillwater::Validation;

use crate::error::ValidationError;
use crate::issue::{Issue, Issues};
use crate::message::summarize;
use crate::options::MessageOptions;

/// Builds a [`ValidationError`] from an ordered sequence of issues.
///
/// The summary is computed from the issues unless `options.message_override`
/// is set, in which case the override is used verbatim. Either way every
/// input issue is kept in [`details`](ValidationError::details). An empty
/// sequence yields the bare prefix.
///
/// # Example
///
/// ```rust
/// use autopsy::{normalize, Issue, JsonPath, MessageOptions};
///
/// let issues = vec![
///     Issue::new(JsonPath::from_field("id"), "Required"),
///     Issue::new(JsonPath::from_field("name"), "Expected string, received number"),
/// ];
///
/// let error = normalize(issues, &MessageOptions::default());
/// assert_eq!(
///     error.message(),
///     "Validation error: Required at \"id\"; Expected string, received number at \"name\""
/// );
/// ```
#[tracing::instrument(level = "debug", skip_all)]
pub fn normalize(
    issues: impl IntoIterator<Item = Issue>,
    options: &MessageOptions,
) -> ValidationError {
    let details: Vec<Issue> = issues.into_iter().collect();
    tracing::debug!(count = details.len(), "normalizing validation issues");

    let message = match &options.message_override {
        Some(message) => message.clone(),
        None => summarize(&details, options),
    };

    ValidationError::new(message, details)
}

/// Builds a [`ValidationError`] from a single issue.
pub fn from_issue(issue: Issue, options: &MessageOptions) -> ValidationError {
    normalize(std::iter::once(issue), options)
}

/// Converts an upstream validation outcome into a `Result`.
///
/// ```rust
/// use autopsy::{explain, Issue, Issues, JsonPath, MessageOptions};
/// use stillwater::Validation;
///
/// let failed: Validation<u32, Issues> =
///     Validation::Failure(Issues::single(Issue::new(JsonPath::from_field("port"), "Too big")));
///
/// let err = explain(failed, &MessageOptions::default()).unwrap_err();
/// assert_eq!(err.to_string(), "Validation error: Too big at \"port\"");
/// ```
pub fn explain<T>(
    validation: Validation<T, Issues>,
    options: &MessageOptions,
) -> Result<T, ValidationError> {
    match validation {
        Validation::Success(value) => Ok(value),
        Validation::Failure(issues) => Err(normalize(issues, options)),
    }
}

/// Converts any boxed error into a [`ValidationError`].
///
/// - a `ValidationError` is returned unchanged;
/// - an [`Issues`] payload is normalized with `options`;
/// - any other error becomes a `ValidationError` with the error's display
///   text as message, no details, and the original error as its source.
pub fn to_validation_error(
    error: Box<dyn Error + Send + Sync>,
    options: &MessageOptions,
) -> ValidationError {
    let error = match error.downcast::<ValidationError>() {
        Ok(validation_error) => return *validation_error,
        Err(other) => other,
    };
    let error = match error.downcast::<Issues>() {
        Ok(issues) => return normalize(*issues, options),
        Err(other) => other,
    };

    tracing::debug!(%error, "wrapping foreign error");
    ValidationError::new(error.to_string(), Vec::new()).with_cause(error)
}

impl From<Issues> for ValidationError {
    fn from(issues: Issues) -> Self {
        normalize(issues, &MessageOptions::default())
    }
}
