//! Options controlling how issues are rendered into a summary.

use serde::{Deserialize, Serialize};

use crate::error::OptionsError;
use crate::path::JsonPath;

/// Default text placed before the joined issue messages.
pub const DEFAULT_PREFIX: &str = "Validation error:";

/// Configuration for building a [`ValidationError`](crate::ValidationError).
///
/// Every field can be overridden on its own, either with the `with_*`
/// builders or by deserializing a partial JSON document; missing keys keep
/// their defaults.
///
/// # Example
///
/// ```rust
/// use autopsy::MessageOptions;
///
/// let options = MessageOptions::new()
///     .with_prefix("Invalid config")
///     .with_max_issues(3)
///     .with_include_path(false);
///
/// assert_eq!(options.prefix, "Invalid config");
/// assert_eq!(options.max_issues_in_message, Some(3));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MessageOptions {
    /// Used verbatim as the summary instead of the computed one.
    pub message_override: Option<String>,
    /// Upper bound on the number of top-level fragments in the summary.
    /// `None` includes every fragment.
    pub max_issues_in_message: Option<usize>,
    /// Joins top-level fragments, and issues within one union branch.
    pub issue_separator: String,
    /// Joins the rendered alternatives of a union issue.
    pub union_separator: String,
    /// Text the summary starts with. With no fragments the summary is exactly this.
    pub prefix: String,
    /// Placed between the prefix and the first fragment.
    pub prefix_separator: String,
    /// Whether fragments carry an ` at "<path>"` suffix.
    pub include_path: bool,
    /// Path of the sub-root validation was run against; prepended to every issue path.
    pub path_prefix: JsonPath,
}

impl Default for MessageOptions {
    fn default() -> Self {
        Self {
            message_override: None,
            max_issues_in_message: None,
            issue_separator: "; ".to_string(),
            union_separator: ", or ".to_string(),
            prefix: DEFAULT_PREFIX.to_string(),
            prefix_separator: " ".to_string(),
            include_path: true,
            path_prefix: JsonPath::root(),
        }
    }
}

impl MessageOptions {
    /// Creates options with the default rendering.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads options from a JSON document. Absent keys keep their defaults.
    ///
    /// ```rust
    /// use autopsy::MessageOptions;
    ///
    /// let options = MessageOptions::from_json_str(r#"{ "unionSeparator": " | " }"#).unwrap();
    /// assert_eq!(options.union_separator, " | ");
    /// assert_eq!(options.issue_separator, "; ");
    /// ```
    pub fn from_json_str(json: &str) -> Result<Self, OptionsError> {
        serde_json::from_str(json).map_err(|source| OptionsError::InvalidJson { source })
    }

    /// Replaces the computed summary with `message`.
    pub fn with_message_override(mut self, message: impl Into<String>) -> Self {
        self.message_override = Some(message.into());
        self
    }

    /// Limits the summary to the first `max` top-level fragments.
    pub fn with_max_issues(mut self, max: usize) -> Self {
        self.max_issues_in_message = Some(max);
        self
    }

    /// Sets the separator between fragments.
    pub fn with_issue_separator(mut self, separator: impl Into<String>) -> Self {
        self.issue_separator = separator.into();
        self
    }

    /// Sets the separator between union alternatives.
    pub fn with_union_separator(mut self, separator: impl Into<String>) -> Self {
        self.union_separator = separator.into();
        self
    }

    /// Sets the summary prefix.
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Sets the separator emitted after the prefix.
    pub fn with_prefix_separator(mut self, separator: impl Into<String>) -> Self {
        self.prefix_separator = separator.into();
        self
    }

    /// Turns the ` at "<path>"` suffix on or off.
    pub fn with_include_path(mut self, include_path: bool) -> Self {
        self.include_path = include_path;
        self
    }

    /// Sets the path prepended to every issue path.
    pub fn with_path_prefix(mut self, prefix: JsonPath) -> Self {
        self.path_prefix = prefix;
        self
    }
}
